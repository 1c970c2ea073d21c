use std::f64::consts::PI;

use crate::constants::{MACH_SUBSONIC_LIMIT, MACH_SUPERSONIC_ONSET, RE_CRITICAL};
use crate::errors::AeroError;
use crate::geometry::RocketGeometry;
use crate::tables::CorrectionTables;

/// Compressibility regime selected per call from the Mach number alone.
///
/// The transonic branch is a plateau: the drag rise between Mach 0.8 and 1.1
/// is approximated by freezing the subsonic correction at its Mach 0.8 value,
/// so the corrected coefficient is deliberately discontinuous at both
/// boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressibilityRegime {
    Subsonic,
    TransonicPlateau,
    Supersonic,
}

impl CompressibilityRegime {
    pub fn classify(mach: f64, policy: MachBoundaryPolicy) -> Result<Self, AeroError> {
        if mach == MACH_SUBSONIC_LIMIT {
            return match policy {
                MachBoundaryPolicy::Reject => Err(AeroError::Domain(format!(
                    "undefined drag correction at mach == {}",
                    MACH_SUBSONIC_LIMIT
                ))),
                MachBoundaryPolicy::AssignSubsonic => Ok(CompressibilityRegime::Subsonic),
                MachBoundaryPolicy::AssignTransonic => Ok(CompressibilityRegime::TransonicPlateau),
            };
        }

        if mach < MACH_SUBSONIC_LIMIT {
            Ok(CompressibilityRegime::Subsonic)
        } else if mach < MACH_SUPERSONIC_ONSET {
            Ok(CompressibilityRegime::TransonicPlateau)
        } else {
            Ok(CompressibilityRegime::Supersonic)
        }
    }

    /// Applies the Prandtl-Glauert style correction for this regime.
    pub fn correct(self, cd: f64, mach: f64) -> f64 {
        match self {
            CompressibilityRegime::Subsonic => cd / (1.0 - mach * mach).sqrt(),
            CompressibilityRegime::TransonicPlateau => {
                cd / (1.0 - MACH_SUBSONIC_LIMIT * MACH_SUBSONIC_LIMIT).sqrt()
            }
            CompressibilityRegime::Supersonic => cd / (mach * mach - 1.0).sqrt(),
        }
    }
}

/// Who owns a query landing exactly on the Mach 0.8 boundary.
///
/// The published correlation leaves the point unowned: both open-interval
/// branches miss it and the fall-through would take the square root of a
/// negative number. `Reject` (the default) surfaces that as a domain error;
/// the other variants let the caller hand the boundary to a neighbor regime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MachBoundaryPolicy {
    #[default]
    Reject,
    AssignSubsonic,
    AssignTransonic,
}

/// Knobs controlling the documented quirks of the correlation set.
#[derive(Debug, Clone)]
pub struct AeroConfig {
    /// Select the fin skin-friction branch on the body Reynolds number, as the
    /// published correlation does. `false` gates on the fin Reynolds number
    /// instead.
    pub strict_fin_reynolds_gating: bool,
    pub mach_boundary_policy: MachBoundaryPolicy,
}

impl Default for AeroConfig {
    fn default() -> Self {
        AeroConfig {
            strict_fin_reynolds_gating: true,
            mach_boundary_policy: MachBoundaryPolicy::default(),
        }
    }
}

/// Semi-empirical drag coefficient model for a slender, finned rocket.
///
/// Owns the geometry and correction tables; after construction every call is
/// a pure function of the flight state, so a single instance can be queried
/// from multiple threads without locking.
#[derive(Debug, Clone)]
pub struct EmpiricalAero {
    geometry: RocketGeometry,
    tables: CorrectionTables,
    config: AeroConfig,
}

impl EmpiricalAero {
    pub fn new(geometry: RocketGeometry, tables: CorrectionTables) -> Self {
        Self::with_config(geometry, tables, AeroConfig::default())
    }

    pub fn with_config(
        geometry: RocketGeometry,
        tables: CorrectionTables,
        config: AeroConfig,
    ) -> Self {
        EmpiricalAero {
            geometry,
            tables,
            config,
        }
    }

    pub fn geometry(&self) -> &RocketGeometry {
        &self.geometry
    }

    pub fn config(&self) -> &AeroConfig {
        &self.config
    }

    /// Total drag coefficient for one flight-state sample.
    ///
    /// `angle_of_attack` must be in the same unit as the correction tables;
    /// no conversion is performed here.
    pub fn drag_coefficient(
        &self,
        mach: f64,
        re_body: f64,
        re_fins: f64,
        angle_of_attack: f64,
    ) -> Result<f64, AeroError> {
        let g = &self.geometry;
        let n = g.fin_count as f64;

        let cf_body = Self::skin_friction(re_body, re_body);
        let fin_gate = if self.config.strict_fin_reynolds_gating {
            re_body
        } else {
            re_fins
        };
        let cf_fins = Self::skin_friction(re_fins, fin_gate);

        // Reference frontal area of the body at the fin station.
        let fin_frontal = PI * g.body_diameter_at_fins * g.body_diameter_at_fins;
        let thickness_factor = 1.0 + 2.0 * (g.fin_thickness / g.fin_midchord_length);

        let cd_interference = 2.0
            * cf_fins
            * thickness_factor
            * (4.0 * n * (g.fin_planform_area - g.fin_exposed_area))
            / fin_frontal;

        let cd_fins =
            2.0 * cf_fins * thickness_factor * (4.0 * n * g.fin_planform_area) / fin_frontal;

        let fineness = g.total_length / g.body_diameter;
        let cd_body = (1.0 + 60.0 / fineness.powi(3) + 0.0025 * fineness)
            * (2.7 * (g.nosecone_length / g.body_diameter)
                + 4.0 * fineness
                + 2.0 * (1.0 - g.base_diameter / g.body_diameter)
                    * (g.boattail_length / g.body_diameter))
            * cf_body;

        if cd_body <= 0.0 {
            return Err(AeroError::Domain(format!(
                "body drag coefficient is {}; base drag is undefined for this geometry",
                cd_body
            )));
        }
        let base_ratio = g.base_diameter / g.body_diameter;
        let cd_base = 0.029 * base_ratio.powi(3) / cd_body.sqrt();

        let cd_zero_alpha = cd_body + cd_base + cd_fins + cd_interference;

        let eps = self.tables.eps.interpolate(angle_of_attack);
        let nu = self.tables.nu.interpolate(angle_of_attack);
        let r_s = g.fin_section_ratio;
        let k_fb = 0.08065 * r_s * r_s + 1.153 * r_s;
        let k_bf = 0.1935 * r_s * r_s + 0.8174 * r_s + 1.0;

        let alpha = angle_of_attack;
        let cd_body_alpha = 2.0 * eps * alpha.powi(2)
            + (3.6 * nu * (1.36 * g.total_length - 0.55 * g.nosecone_length))
                / (PI * g.body_diameter)
                * alpha.powi(3);
        let cd_fins_alpha = alpha.powi(2)
            * (1.2 * (4.0 * g.fin_planform_area) / fin_frontal
                + 3.12 * (k_fb + k_bf - 1.0) * (4.0 * g.fin_exposed_area) / fin_frontal);

        let cd_uncorrected = cd_zero_alpha + cd_body_alpha + cd_fins_alpha;

        let regime = CompressibilityRegime::classify(mach, self.config.mach_boundary_policy)?;
        Ok(regime.correct(cd_uncorrected, mach))
    }

    /// Flat-plate skin friction coefficient.
    ///
    /// `gate_re` selects the branch; `re` feeds the formulas. For the body
    /// both are the body Reynolds number. For the fins the published
    /// correlation gates on the body Reynolds number while evaluating at the
    /// fin Reynolds number, which is why they are separate arguments.
    ///
    /// Above the critical threshold the transition offset `b` is recomputed
    /// from the plate's own Reynolds number, not from the threshold constant.
    fn skin_friction(re: f64, gate_re: f64) -> f64 {
        if gate_re <= RE_CRITICAL {
            1.328 / re.sqrt()
        } else {
            let b = 0.074 / re.powf(0.2) - 1.328 / re.sqrt();
            0.074 / re.powf(0.2) - b / re
        }
    }
}
