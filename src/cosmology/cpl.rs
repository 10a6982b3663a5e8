// src/cosmology/cpl.rs
//
// Chevallier-Polarski-Linder background expansion.
// w(z) = w0 + wa * z / (1 + z), flat universe with matter and dark energy only.

use ndarray::{Array, ArrayBase, Data, Dimension};

use crate::cosmology::error::CosmologyError;

/// Dark-energy equation of state w(z) for the CPL parametrization.
pub fn equation_of_state(z: f64, w0: f64, wa: f64) -> f64 {
    w0 + wa * z / (1.0 + z)
}

/// Dark-energy density relative to today, rho_de(z) / rho_de(0):
///
/// f(z) = (1+z)^(3(1+w0+wa)) * exp(-3 wa z / (1+z))
pub fn dark_energy_density_ratio(z: f64, w0: f64, wa: f64) -> f64 {
    let one_plus_z = 1.0 + z;
    one_plus_z.powf(3.0 * (1.0 + w0 + wa)) * (-3.0 * wa * z / one_plus_z).exp()
}

pub(crate) fn validate_matter_density(omega_m: f64) -> Result<(), CosmologyError> {
    if (0.0..=1.0).contains(&omega_m) {
        Ok(())
    } else {
        Err(CosmologyError::InvalidMatterDensity(omega_m))
    }
}

fn validate_redshift(z: f64) -> Result<(), CosmologyError> {
    if z.is_finite() && z > -1.0 {
        Ok(())
    } else {
        Err(CosmologyError::InvalidRedshift(z))
    }
}

/// Dimensionless expansion rate E(z) = H(z) / H0.
///
/// E(z) = sqrt(Ω_m (1+z)^3 + (1 - Ω_m) f(z))
///
/// Non-physical inputs are rejected instead of producing NaN: Ω_m outside
/// [0, 1], a redshift with 1 + z <= 0, or a negative radicand.
pub fn expansion_rate(z: f64, omega_m: f64, w0: f64, wa: f64) -> Result<f64, CosmologyError> {
    validate_matter_density(omega_m)?;
    validate_redshift(z)?;

    let matter = omega_m * (1.0 + z).powi(3);
    let dark_energy = (1.0 - omega_m) * dark_energy_density_ratio(z, w0, wa);
    let radicand = matter + dark_energy;

    // NaN fails the comparison as well
    if !(radicand >= 0.0 && radicand.is_finite()) {
        return Err(CosmologyError::NegativeRadicand { z, radicand });
    }
    Ok(radicand.sqrt())
}

/// Elementwise E(z) over an array of redshifts of any shape.
/// The result has the shape of `z`; the first invalid element aborts the evaluation.
pub fn expansion_rate_array<S, D>(
    z: &ArrayBase<S, D>,
    omega_m: f64,
    w0: f64,
    wa: f64,
) -> Result<Array<f64, D>, CosmologyError>
where
    S: Data<Elem = f64>,
    D: Dimension,
{
    let mut rates = Array::<f64, D>::zeros(z.raw_dim());
    for (rate, &zi) in rates.iter_mut().zip(z.iter()) {
        *rate = expansion_rate(zi, omega_m, w0, wa)?;
    }
    Ok(rates)
}
