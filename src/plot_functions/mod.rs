// src/plot_functions/mod.rs

pub mod plot_hubble_comparison;

// src/plot_functions/mod.rs
