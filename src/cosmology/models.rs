// src/cosmology/models.rs
//
// The two expansion histories compared on the chart. Both share the CPL evaluator
// and differ only in (w0, wa, H0).

use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::constants::{
    H0_PLANCK, H0_SHOES, LABEL_LCDM, LABEL_SIAMESE, LCDM_W0, LCDM_WA, OMEGA_M, SIAMESE_W0,
    SIAMESE_WA,
};
use crate::cosmology::cpl::{expansion_rate, expansion_rate_array, validate_matter_density};
use crate::cosmology::error::CosmologyError;

/// Background parameters of one model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParams {
    pub omega_m: f64,
    pub w0: f64,
    pub wa: f64,
    /// Present-day expansion rate in km/s/Mpc
    pub h0: f64,
}

impl ModelParams {
    /// Builds a parameter set, rejecting Ω_m outside [0, 1] and non-positive H0.
    pub fn new(omega_m: f64, w0: f64, wa: f64, h0: f64) -> Result<Self, CosmologyError> {
        validate_matter_density(omega_m)?;
        if !(h0.is_finite() && h0 > 0.0) {
            return Err(CosmologyError::InvalidHubbleConstant(h0));
        }
        Ok(Self {
            omega_m,
            w0,
            wa,
            h0,
        })
    }

    /// ΛCDM normalized to the CMB-inferred H0.
    pub const fn lcdm() -> Self {
        Self {
            omega_m: OMEGA_M,
            w0: LCDM_W0,
            wa: LCDM_WA,
            h0: H0_PLANCK,
        }
    }

    /// Siamese toy model normalized to the local H0.
    pub const fn siamese() -> Self {
        Self {
            omega_m: OMEGA_M,
            w0: SIAMESE_W0,
            wa: SIAMESE_WA,
            h0: H0_SHOES,
        }
    }
}

/// A labelled expansion history H(z) = H0 * E(z).
#[derive(Debug, Clone, PartialEq)]
pub struct CosmologyModel {
    pub label: &'static str,
    pub params: ModelParams,
}

impl CosmologyModel {
    pub fn new(label: &'static str, params: ModelParams) -> Self {
        Self { label, params }
    }

    pub fn lcdm() -> Self {
        Self::new(LABEL_LCDM, ModelParams::lcdm())
    }

    pub fn siamese() -> Self {
        Self::new(LABEL_SIAMESE, ModelParams::siamese())
    }

    /// Dimensionless E(z) for this model.
    pub fn expansion_rate(&self, z: f64) -> Result<f64, CosmologyError> {
        expansion_rate(z, self.params.omega_m, self.params.w0, self.params.wa)
    }

    /// H(z) in km/s/Mpc.
    pub fn hubble_rate(&self, z: f64) -> Result<f64, CosmologyError> {
        Ok(self.params.h0 * self.expansion_rate(z)?)
    }

    /// H(z) over an array of redshifts, same shape as the input.
    pub fn hubble_rate_array<S, D>(&self, z: &ArrayBase<S, D>) -> Result<Array<f64, D>, CosmologyError>
    where
        S: Data<Elem = f64>,
        D: Dimension,
    {
        let h0 = self.params.h0;
        let e = expansion_rate_array(z, self.params.omega_m, self.params.w0, self.params.wa)?;
        Ok(e.mapv_into(|e_z| h0 * e_z))
    }
}

/// ΛCDM expansion rate: H0_Planck * E(z; w0 = -1, wa = 0).
pub fn h_lcdm(z: f64) -> Result<f64, CosmologyError> {
    CosmologyModel::lcdm().hubble_rate(z)
}

pub fn h_lcdm_array<S, D>(z: &ArrayBase<S, D>) -> Result<Array<f64, D>, CosmologyError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    CosmologyModel::lcdm().hubble_rate_array(z)
}

/// Siamese expansion rate: H0_SH0ES * E(z; w0 = -0.97, wa = -0.25).
pub fn h_siamese(z: f64) -> Result<f64, CosmologyError> {
    CosmologyModel::siamese().hubble_rate(z)
}

pub fn h_siamese_array<S, D>(z: &ArrayBase<S, D>) -> Result<Array<f64, D>, CosmologyError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    CosmologyModel::siamese().hubble_rate_array(z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_models_return_their_h0_today() {
        assert_eq!(h_lcdm(0.0).unwrap(), 67.4);
        assert_eq!(h_siamese(0.0).unwrap(), 73.0);
    }

    #[test]
    fn test_array_forms_match_scalar_forms() {
        let z = array![0.0, 0.7, 1.4, 2.1, 2.8];
        let lcdm = h_lcdm_array(&z).unwrap();
        let siamese = h_siamese_array(&z).unwrap();
        for (i, &zi) in z.iter().enumerate() {
            assert_eq!(lcdm[i], h_lcdm(zi).unwrap());
            assert_eq!(siamese[i], h_siamese(zi).unwrap());
        }
    }

    #[test]
    fn test_models_share_matter_density() {
        let lcdm = CosmologyModel::lcdm();
        let siamese = CosmologyModel::siamese();
        assert_eq!(lcdm.params.omega_m, siamese.params.omega_m);
        assert_eq!((lcdm.params.w0, lcdm.params.wa), (-1.0, 0.0));
        assert_eq!((siamese.params.w0, siamese.params.wa), (-0.97, -0.25));
    }

    #[test]
    fn test_siamese_converges_towards_lcdm_at_high_redshift() {
        // The H0 offset dominates today; the relative gap shrinks with redshift
        let gap_today = (h_siamese(0.0).unwrap() / h_lcdm(0.0).unwrap() - 1.0).abs();
        let gap_high_z = (h_siamese(2.5).unwrap() / h_lcdm(2.5).unwrap() - 1.0).abs();
        assert!(gap_high_z < gap_today);
    }

    #[test]
    fn test_model_params_validation() {
        assert!(ModelParams::new(0.3, -1.0, 0.0, 70.0).is_ok());
        assert_eq!(
            ModelParams::new(1.2, -1.0, 0.0, 70.0),
            Err(CosmologyError::InvalidMatterDensity(1.2))
        );
        assert_eq!(
            ModelParams::new(0.3, -1.0, 0.0, 0.0),
            Err(CosmologyError::InvalidHubbleConstant(0.0))
        );
        assert!(ModelParams::new(0.3, -1.0, 0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_constant_params_pass_validation() {
        let lcdm = ModelParams::lcdm();
        let checked = ModelParams::new(lcdm.omega_m, lcdm.w0, lcdm.wa, lcdm.h0).unwrap();
        assert_eq!(checked, lcdm);
        let siamese = ModelParams::siamese();
        assert!(ModelParams::new(siamese.omega_m, siamese.w0, siamese.wa, siamese.h0).is_ok());
    }
}
