use bigdecimal::BigDecimal;
use num_traits::{FromPrimitive, ToPrimitive, Zero};

use super::errors::ItemError;

/// Stored as `NUMERIC(10, 2)`.
pub const PRICE_SCALE: i64 = 2;
const PRICE_MAX_INTEGER_DIGITS: u64 = 8;

/// Non-negative price rounded to cents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Price(BigDecimal);

impl Price {
    pub fn new(value: BigDecimal) -> Result<Self, ItemError> {
        if value < BigDecimal::zero() {
            return Err(ItemError::PriceNegative);
        }
        let rounded = value.round(PRICE_SCALE);
        if rounded.with_scale(0).digits() > PRICE_MAX_INTEGER_DIGITS {
            return Err(ItemError::PriceTooLarge);
        }
        Ok(Self(rounded))
    }

    pub fn from_f64(value: f64) -> Result<Self, ItemError> {
        if !value.is_finite() {
            return Err(ItemError::PriceInvalid);
        }
        let decimal = BigDecimal::from_f64(value).ok_or(ItemError::PriceInvalid)?;
        Self::new(decimal)
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(value: BigDecimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(&self) -> &BigDecimal {
        &self.0
    }

    pub fn to_f64(&self) -> f64 {
        self.0.to_f64().unwrap_or_default()
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.with_scale(PRICE_SCALE))
    }
}
