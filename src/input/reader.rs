use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;

use crate::input::InputError;

pub fn open_maybe_gz(path: &Path) -> Result<Box<dyn Read>, InputError> {
    let file = File::open(path)?;
    if path.extension().is_some_and(|ext| ext == "gz") {
        Ok(Box::new(BufReader::new(MultiGzDecoder::new(BufReader::new(
            file,
        )))))
    } else {
        Ok(Box::new(BufReader::new(file)))
    }
}
