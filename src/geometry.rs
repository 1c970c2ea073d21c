/// Fixed geometry of a slender, finned rocket body.
///
/// All lengths are in meters, areas in square meters. Values are read once at
/// evaluator construction and assumed constant for the whole flight. The drag
/// model does not cross-check them for consistency (e.g. base diameter against
/// body diameter); inconsistent geometry produces wrong coefficients, not
/// panics, except where the evaluator raises an explicit domain error.
#[derive(Debug, Clone, PartialEq)]
pub struct RocketGeometry {
    pub total_length: f64,
    pub body_diameter: f64,
    pub base_diameter: f64,
    pub boattail_length: f64,
    pub fin_thickness: f64,
    pub fin_midchord_length: f64,
    pub fin_count: usize,
    pub fin_planform_area: f64,
    pub fin_exposed_area: f64,
    pub body_diameter_at_fins: f64,
    pub nosecone_length: f64,
    pub fin_section_ratio: f64,
}

impl RocketGeometry {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        total_length: f64,
        body_diameter: f64,
        base_diameter: f64,
        boattail_length: f64,
        fin_thickness: f64,
        fin_midchord_length: f64,
        fin_count: usize,
        fin_planform_area: f64,
        fin_exposed_area: f64,
        body_diameter_at_fins: f64,
        nosecone_length: f64,
        fin_section_ratio: f64,
    ) -> Self {
        RocketGeometry {
            total_length,
            body_diameter,
            base_diameter,
            boattail_length,
            fin_thickness,
            fin_midchord_length,
            fin_count,
            fin_planform_area,
            fin_exposed_area,
            body_diameter_at_fins,
            nosecone_length,
            fin_section_ratio,
        }
    }

    /// Length-to-diameter ratio of the full body.
    pub fn fineness_ratio(&self) -> f64 {
        self.total_length / self.body_diameter
    }
}
