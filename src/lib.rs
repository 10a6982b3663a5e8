// src/lib.rs - Library interface for internal module access

#![allow(non_snake_case)]

pub mod constants;
pub mod cosmology;
pub mod display;
pub mod font_config;
pub mod logging;
pub mod plot_framework;
pub mod plot_functions;
pub mod png_output;
pub mod types;

// Expose crate version at compile time.
pub fn crate_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
