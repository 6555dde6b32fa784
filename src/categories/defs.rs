/// Built-in raw screener category label -> canonical label.
const BUILTIN_CATEGORIES: &[(&str, &str)] = &[
    ("Balanced Allocation", "balanced_allocation"),
    ("Dynamic Bond", "dynamic_bond"),
    ("ELSS (Tax Savings)", "elss"),
    ("Flexi Cap", "flexi_cap"),
    ("Focused Fund", "focused_fund"),
    ("Liquid", "liquid"),
    ("Equity - Other", "equity_other"),
    ("Fund of Funds", "fund_of_fund"),
    ("Arbitrage Fund", "arbitrage_fund"),
    ("Children", "children"),
    ("Dynamic Asset Allocation", "dynamic_asset_allocation"),
    ("Sector - Financial Services", "sector_financial_services"),
    ("Banking & PSU", "banking_psu"),
    ("Corporate Bond", "corporate_bond"),
    ("Credit Risk", "credit_risk"),
    ("Other Bond", "other_bond"),
    ("Index Funds - Fixed Income", "index_funds_fixed_income"),
    ("Sector - Technology", "sector_technology"),
    ("Dividend Yield", "dividend_yield"),
    ("Large & Mid-Cap", "large_mid_cap"),
    ("Aggressive Allocation", "aggressive_allocation"),
    ("Equity Savings", "equity_savings"),
    ("Equity - ESG", "equity_esg"),
    ("Fixed Maturity Ultrashort Bond", "fixed_maturity_ultrashort_bond"),
    (
        "Fixed Maturity Intermediate-Term Bond",
        "fixed_maturity_intermediate_term_bond",
    ),
    ("Fixed Maturity Short-Term Bond", "fixed_maturity_short_term_bond"),
    ("Floating Rate", "floating_rate"),
    ("Large-Cap", "large_cap"),
    ("Global - Other", "global_other"),
    ("Sector - Precious Metals", "sector_precious_metals"),
    ("Government Bond", "government_bond"),
    ("Medium to Long Duration", "medium_long_duration"),
    ("Equity - Consumption", "equity_consumption"),
    ("Equity - Infrastructure", "equity_infrastructure"),
    ("Long Duration", "long_duration"),
    ("Low Duration", "low_duration"),
    ("Medium Duration", "medium_duration"),
    ("Mid-Cap", "mid_cap"),
    ("Money Market", "money_market"),
    ("Multi Asset Allocation", "multi_asset_allocation"),
    ("Multi-Cap", "multi_cap"),
    ("Index Funds", "index_funds"),
    ("Overnight", "overnight"),
    ("Sector - Healthcare", "sector_healthcare"),
    ("Value", "value"),
    ("Conservative Allocation", "conservative_allocation"),
    ("Retirement", "retirement"),
    ("Ultra Short Duration", "ultra_short_duration"),
    ("Short Duration", "short_duration"),
    ("Small-Cap", "small_cap"),
    ("10 yr Government Bond", "ten_yr_government_bond"),
    ("US Large-Cap Blend Equity", "us_large_cap_blend_equity"),
    ("Sector - FMCG", "sector_fmcg"),
    ("Contra", "contra"),
    ("Sector - Energy", "sector_energy"),
    ("Canadian Focused Equity", "canadian_focused_equity"),
];

pub fn builtin_categories() -> &'static [(&'static str, &'static str)] {
    BUILTIN_CATEGORIES
}
