pub mod defs;
pub mod mapping;

pub use mapping::CategoryMap;

#[cfg(test)]
#[path = "../../tests/src_inline/categories/tests.rs"]
mod tests;
