//! Error types for the expansion-history models.

use thiserror::Error;

/// Errors raised when model inputs leave the physical domain.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CosmologyError {
    /// Matter density fraction outside [0, 1].
    #[error("Invalid matter density Ω_m = {0}: expected a value in [0, 1]")]
    InvalidMatterDensity(f64),

    /// Redshift that is not finite or does not satisfy 1 + z > 0.
    #[error("Invalid redshift z = {0}: expected a finite value greater than -1")]
    InvalidRedshift(f64),

    /// The sum under the square root of E(z) is negative or not finite.
    #[error("Radicand {radicand} of E(z) at z = {z} is negative or not finite")]
    NegativeRadicand { z: f64, radicand: f64 },

    /// Present-day expansion rate that is not a positive finite number.
    #[error("Invalid Hubble constant H0 = {0}: expected a positive value")]
    InvalidHubbleConstant(f64),

    /// Redshift grid that cannot be built from the given bounds and size.
    #[error("Invalid redshift grid: {0}")]
    InvalidGrid(String),

    /// Measurement uncertainty that is negative or not finite.
    #[error("Invalid uncertainty {0}: expected a finite, non-negative value")]
    InvalidUncertainty(f64),

    /// Parallel data arrays of different lengths.
    #[error("Mismatched data lengths: {what} has {actual} entries, expected {expected}")]
    MismatchedData {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_radicand_message() {
        let error = CosmologyError::NegativeRadicand {
            z: 2.0,
            radicand: -0.5,
        };
        assert_eq!(error.to_string(), "Radicand -0.5 of E(z) at z = 2 is negative or not finite");
    }

    #[test]
    fn test_mismatched_data_message() {
        let error = CosmologyError::MismatchedData {
            what: "uncertainties",
            expected: 6,
            actual: 5,
        };
        assert_eq!(
            error.to_string(),
            "Mismatched data lengths: uncertainties has 5 entries, expected 6"
        );
    }
}
