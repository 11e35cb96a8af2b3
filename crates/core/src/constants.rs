/// ISO code for the dollar leg of every transaction.
pub const CURRENCY_USD: &str = "USD";

/// ISO code for the Lebanese pound leg.
pub const CURRENCY_LBP: &str = "LBP";

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
