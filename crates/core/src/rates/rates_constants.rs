/// Decimal places kept per derived rate observation.
///
/// Bounding the scale on insertion keeps session-length sums inside
/// `Decimal`'s 96-bit significand, so the running mean does not depend on
/// the order observations arrive in.
pub const OBSERVATION_SCALE: u32 = 12;

/// Wire token for a transaction that turns USD into LBP.
pub const DIRECTION_USD_TO_LBP: &str = "usd-to-lbp";

/// Wire token for a transaction that turns LBP into USD.
pub const DIRECTION_LBP_TO_USD: &str = "lbp-to-usd";

/// Calculator token for converting at the buy rate.
pub const SIDE_BUY: &str = "BUY";

/// Calculator token for converting at the sell rate.
pub const SIDE_SELL: &str = "SELL";
