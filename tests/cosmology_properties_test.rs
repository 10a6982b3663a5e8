// tests/cosmology_properties_test.rs

use approx::assert_relative_eq;
use ndarray::Array1;

use Hz_Comparison_Render::constants::{H0_PLANCK, H0_SHOES, OMEGA_M};
use Hz_Comparison_Render::cosmology::cpl::expansion_rate;
use Hz_Comparison_Render::cosmology::{
    h_lcdm, h_lcdm_array, h_siamese, h_siamese_array, CosmologyError, RedshiftGrid,
};

#[test]
fn test_present_day_rates() {
    assert_eq!(h_lcdm(0.0).unwrap(), H0_PLANCK);
    assert_eq!(h_siamese(0.0).unwrap(), H0_SHOES);
}

#[test]
fn test_lcdm_matches_textbook_values() {
    // E(1) = sqrt(0.315 * 8 + 0.685)
    assert_relative_eq!(
        h_lcdm(1.0).unwrap(),
        67.4 * (OMEGA_M * 8.0 + (1.0 - OMEGA_M)).sqrt(),
        epsilon = 1e-12
    );
    assert_relative_eq!(h_lcdm(3.0).unwrap(), 307.7, epsilon = 0.1);
}

#[test]
fn test_siamese_above_lcdm_over_plotted_range() {
    let grid = RedshiftGrid::standard();
    let lcdm = h_lcdm_array(grid.values()).unwrap();
    let siamese = h_siamese_array(grid.values()).unwrap();
    for (l, s) in lcdm.iter().zip(siamese.iter()) {
        assert!(s > l);
    }
}

#[test]
fn test_both_curves_increase_with_redshift() {
    let grid = RedshiftGrid::standard();
    for curve in [
        h_lcdm_array(grid.values()).unwrap(),
        h_siamese_array(grid.values()).unwrap(),
    ] {
        for pair in curve.windows(2) {
            assert!(pair[1] > pair[0]);
        }
    }
}

#[test]
fn test_array_evaluation_matches_scalar() {
    let z = Array1::linspace(0.0, 3.0, 31);
    let curve = h_siamese_array(&z).unwrap();
    for (&zi, &hi) in z.iter().zip(curve.iter()) {
        assert_eq!(hi, h_siamese(zi).unwrap());
    }
}

#[test]
fn test_empty_input_gives_empty_output() {
    let z = Array1::<f64>::zeros(0);
    assert!(h_lcdm_array(&z).unwrap().is_empty());
}

#[test]
fn test_domain_errors() {
    assert_eq!(
        expansion_rate(0.5, 1.01, -1.0, 0.0),
        Err(CosmologyError::InvalidMatterDensity(1.01))
    );
    assert_eq!(h_lcdm(-1.5), Err(CosmologyError::InvalidRedshift(-1.5)));
    // Extreme dark energy overflows the radicand
    assert!(matches!(
        expansion_rate(1e6, 0.3, 100.0, 0.0),
        Err(CosmologyError::NegativeRadicand { .. })
    ));
}
