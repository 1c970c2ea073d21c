pub mod aerodynamics;
pub mod constants;
pub mod errors;
pub mod geometry;
pub mod tables;

pub use constants::*;
pub use errors::AeroError;

// Re-export commonly used items from the drag model
pub use aerodynamics::{AeroConfig, CompressibilityRegime, EmpiricalAero, MachBoundaryPolicy};
pub use geometry::RocketGeometry;
pub use tables::{CorrectionTable, CorrectionTables};
