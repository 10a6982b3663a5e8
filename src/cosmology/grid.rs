// src/cosmology/grid.rs

use ndarray::Array1;

use crate::constants::{Z_GRID_MAX, Z_GRID_MIN, Z_GRID_POINTS};
use crate::cosmology::error::CosmologyError;

/// Evenly spaced redshifts used as the evaluation domain for every model.
#[derive(Debug, Clone, PartialEq)]
pub struct RedshiftGrid {
    values: Array1<f64>,
}

impl RedshiftGrid {
    /// `points` evenly spaced redshifts from `z_min` to `z_max`, both included.
    pub fn linspace(z_min: f64, z_max: f64, points: usize) -> Result<Self, CosmologyError> {
        if !(z_min.is_finite() && z_min >= 0.0) {
            return Err(CosmologyError::InvalidRedshift(z_min));
        }
        if !(z_max.is_finite() && z_max > z_min) {
            return Err(CosmologyError::InvalidGrid(format!(
                "upper bound {z_max} must be finite and above {z_min}"
            )));
        }
        if points < 2 {
            return Err(CosmologyError::InvalidGrid(format!(
                "need at least 2 points, got {points}"
            )));
        }
        Ok(Self {
            values: Array1::linspace(z_min, z_max, points),
        })
    }

    /// The 400-point grid on [0, 3] shared by both curves.
    pub fn standard() -> Self {
        Self {
            values: Array1::linspace(Z_GRID_MIN, Z_GRID_MAX, Z_GRID_POINTS),
        }
    }

    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn step(&self) -> f64 {
        self.values[1] - self.values[0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_grid_bounds() {
        let grid = RedshiftGrid::standard();
        assert_eq!(grid.len(), 400);
        assert_eq!(grid.values()[0], 0.0);
        assert_relative_eq!(grid.values()[399], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_grid_is_evenly_spaced() {
        let grid = RedshiftGrid::standard();
        let step = grid.step();
        assert_relative_eq!(step, 3.0 / 399.0, epsilon = 1e-12);
        for pair in grid.values().windows(2) {
            assert_relative_eq!(pair[1] - pair[0], step, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_linspace_rejects_bad_bounds() {
        assert!(matches!(
            RedshiftGrid::linspace(-0.5, 3.0, 10),
            Err(CosmologyError::InvalidRedshift(_))
        ));
        assert!(matches!(
            RedshiftGrid::linspace(2.0, 1.0, 10),
            Err(CosmologyError::InvalidGrid(_))
        ));
        assert!(matches!(
            RedshiftGrid::linspace(0.0, 1.0, 1),
            Err(CosmologyError::InvalidGrid(_))
        ));
    }

    #[test]
    fn test_linspace_custom_grid() {
        let grid = RedshiftGrid::linspace(0.0, 2.0, 5).unwrap();
        assert_eq!(grid.values().to_vec(), vec![0.0, 0.5, 1.0, 1.5, 2.0]);
    }
}
