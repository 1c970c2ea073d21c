// Skin Friction Constants
pub const RE_CRITICAL: f64 = 5e5; // flat-plate laminar-turbulent transition

// Compressibility Regime Boundaries
pub const MACH_SUBSONIC_LIMIT: f64 = 0.8; // subsonic / transonic boundary
pub const MACH_SUPERSONIC_ONSET: f64 = 1.1; // transonic / supersonic boundary

// Sea-Level Atmosphere (for Reynolds number estimates in the demo driver)
pub const AIR_DENSITY_SEA_LEVEL: f64 = 1.225; // kg/m³
pub const AIR_VISCOSITY_SEA_LEVEL: f64 = 1.789e-5; // Pa·s
pub const SPEED_OF_SOUND_SEA_LEVEL: f64 = 340.3; // m/s
