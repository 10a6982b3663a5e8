// src/types.rs
// Type aliases shared by the cosmology and plotting layers

use ndarray::Array1;

/// Redshifts at which a model is evaluated
pub type RedshiftArray = Array1<f64>;

/// H(z) in km/s/Mpc, aligned with a RedshiftArray
pub type HubbleCurve = Array1<f64>;

/// (x, y) pairs in data coordinates, ready for a PlotSeries
pub type CurvePoints = Vec<(f64, f64)>;
