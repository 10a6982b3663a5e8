// src/cosmology/mod.rs

pub mod cpl;
pub mod error;
pub mod grid;
pub mod models;
pub mod schematic_data;

pub use error::CosmologyError;
pub use grid::RedshiftGrid;
pub use models::{h_lcdm, h_lcdm_array, h_siamese, h_siamese_array, CosmologyModel, ModelParams};
pub use schematic_data::{H0Band, SchematicData};

// src/cosmology/mod.rs
