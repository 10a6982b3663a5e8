// src/cosmology/schematic_data.rs
//
// Illustrative overlays: schematic H(z) points and the two H0 measurement bands.
// None of this is real data. The points are placed exactly on a model curve so
// that they favour neither model.

use ndarray::Array1;

use crate::constants::{
    H0_PLANCK, H0_SHOES, LABEL_H0_PLANCK, LABEL_H0_SHOES, SCHEMATIC_H_ERR, SCHEMATIC_Z,
    SIGMA_H0_PLANCK, SIGMA_H0_SHOES,
};
use crate::cosmology::error::CosmologyError;
use crate::cosmology::models::CosmologyModel;

/// Schematic (z, H, σ_H) triples.
#[derive(Debug, Clone, PartialEq)]
pub struct SchematicData {
    pub z: Array1<f64>,
    pub h: Array1<f64>,
    pub h_err: Array1<f64>,
}

impl SchematicData {
    /// Places one point per redshift exactly on `model`'s H(z).
    pub fn centered_on(
        model: &CosmologyModel,
        z: &[f64],
        h_err: &[f64],
    ) -> Result<Self, CosmologyError> {
        if h_err.len() != z.len() {
            return Err(CosmologyError::MismatchedData {
                what: "uncertainties",
                expected: z.len(),
                actual: h_err.len(),
            });
        }
        if let Some(&bad) = h_err.iter().find(|e| !(e.is_finite() && **e >= 0.0)) {
            return Err(CosmologyError::InvalidUncertainty(bad));
        }

        let z = Array1::from(z.to_vec());
        let h = model.hubble_rate_array(&z)?;
        Ok(Self {
            z,
            h,
            h_err: Array1::from(h_err.to_vec()),
        })
    }

    /// The six schematic points centred on ΛCDM.
    pub fn standard() -> Result<Self, CosmologyError> {
        Self::centered_on(&CosmologyModel::lcdm(), &SCHEMATIC_Z, &SCHEMATIC_H_ERR)
    }

    pub fn len(&self) -> usize {
        self.z.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    /// (z, H, σ_H) per point, in redshift order of construction.
    pub fn points(&self) -> Vec<(f64, f64, f64)> {
        self.z
            .iter()
            .zip(self.h.iter())
            .zip(self.h_err.iter())
            .map(|((&z, &h), &err)| (z, h, err))
            .collect()
    }
}

/// A present-day expansion-rate measurement drawn as a horizontal band center ± half_width.
#[derive(Debug, Clone, PartialEq)]
pub struct H0Band {
    pub label: &'static str,
    pub center: f64,
    pub half_width: f64,
}

impl H0Band {
    pub fn planck() -> Self {
        Self {
            label: LABEL_H0_PLANCK,
            center: H0_PLANCK,
            half_width: SIGMA_H0_PLANCK,
        }
    }

    pub fn shoes() -> Self {
        Self {
            label: LABEL_H0_SHOES,
            center: H0_SHOES,
            half_width: SIGMA_H0_SHOES,
        }
    }

    /// Both bands in legend order: Planck first, SH0ES second.
    pub fn reference_bands() -> [H0Band; 2] {
        [Self::planck(), Self::shoes()]
    }

    pub fn lower(&self) -> f64 {
        self.center - self.half_width
    }

    pub fn upper(&self) -> f64 {
        self.center + self.half_width
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cosmology::models::h_lcdm;

    #[test]
    fn test_points_lie_exactly_on_lcdm() {
        let data = SchematicData::standard().unwrap();
        assert_eq!(data.len(), 6);
        for (z, h, _) in data.points() {
            assert_eq!(h, h_lcdm(z).unwrap());
        }
    }

    #[test]
    fn test_uncertainties_are_kept_in_order() {
        let data = SchematicData::standard().unwrap();
        assert_eq!(data.h_err.to_vec(), vec![5.0, 5.0, 6.0, 7.0, 9.0, 12.0]);
        assert_eq!(data.z.to_vec(), vec![0.1, 0.3, 0.6, 1.0, 1.5, 2.3]);
    }

    #[test]
    fn test_centered_on_rejects_length_mismatch() {
        let err = SchematicData::centered_on(&CosmologyModel::lcdm(), &[0.1, 0.2], &[1.0]);
        assert_eq!(
            err,
            Err(CosmologyError::MismatchedData {
                what: "uncertainties",
                expected: 2,
                actual: 1,
            })
        );
    }

    #[test]
    fn test_centered_on_rejects_negative_uncertainty() {
        let err = SchematicData::centered_on(&CosmologyModel::lcdm(), &[0.1], &[-2.0]);
        assert_eq!(err, Err(CosmologyError::InvalidUncertainty(-2.0)));
    }

    #[test]
    fn test_h0_bands() {
        let [planck, shoes] = H0Band::reference_bands();
        assert_eq!((planck.lower(), planck.upper()), (66.9, 67.9));
        assert_eq!((shoes.lower(), shoes.upper()), (72.0, 74.0));
        assert!(planck.upper() < shoes.lower());
    }
}
