//! Error types for character generation.

use thiserror::Error;

/// Faults during character assembly.
///
/// Missing table categories are not errors (they degrade to documented
/// defaults); these variants cover genuinely unusable inputs. Callers report
/// them as a failed request without crashing the process.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The configured equipment choice bounds are inverted.
    #[error("Invalid equipment choice bounds: min {min} > max {max}")]
    EquipmentBounds { min: u32, max: u32 },

    /// A currency conversion rate is zero or negative.
    #[error("Invalid conversion rate for '{denom}': {rate}")]
    InvalidCurrencyRate { denom: String, rate: f64 },
}

impl GenerationError {
    /// Create an EquipmentBounds error.
    pub fn equipment_bounds(min: u32, max: u32) -> Self {
        Self::EquipmentBounds { min, max }
    }

    /// Create an InvalidCurrencyRate error.
    pub fn invalid_rate(denom: impl Into<String>, rate: f64) -> Self {
        Self::InvalidCurrencyRate {
            denom: denom.into(),
            rate,
        }
    }
}
