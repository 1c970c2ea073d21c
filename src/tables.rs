use std::fs;
use std::path::Path;

use csv::ReaderBuilder;

use crate::errors::AeroError;

/// Angle-of-attack correction table: (angle, coefficient) samples sorted by
/// strictly increasing angle. Queries between samples are interpolated
/// linearly; queries outside the sampled range extend the nearest segment's
/// slope (linear, not constant, extrapolation).
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionTable {
    points: Vec<(f64, f64)>,
}

impl CorrectionTable {
    pub fn new(points: Vec<(f64, f64)>) -> Result<Self, AeroError> {
        if points.len() < 2 {
            return Err(AeroError::Configuration(format!(
                "correction table needs at least two sample points, got {}",
                points.len()
            )));
        }
        if points.iter().any(|&(a, c)| !a.is_finite() || !c.is_finite()) {
            return Err(AeroError::Configuration(
                "correction table contains non-finite values".to_string(),
            ));
        }
        if !points.windows(2).all(|pair| pair[0].0 < pair[1].0) {
            return Err(AeroError::Configuration(
                "correction table angles must be strictly increasing".to_string(),
            ));
        }

        Ok(CorrectionTable { points })
    }

    /// Loads a two-column CSV file with a header row, e.g. `aoa,eps`.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, AeroError> {
        let data = fs::read(path)?;
        Self::from_csv_bytes(&data)
    }

    pub fn from_csv_bytes(data: &[u8]) -> Result<Self, AeroError> {
        let mut reader = ReaderBuilder::new().has_headers(true).from_reader(data);
        let mut points = Vec::new();

        for result in reader.records() {
            let record = result?;
            if record.len() < 2 {
                return Err(AeroError::Configuration(format!(
                    "correction table row needs two columns, got {}",
                    record.len()
                )));
            }

            let angle = record[0].trim().parse::<f64>().map_err(|e| {
                AeroError::Configuration(format!("bad angle value {:?}: {}", &record[0], e))
            })?;
            let coefficient = record[1].trim().parse::<f64>().map_err(|e| {
                AeroError::Configuration(format!("bad coefficient value {:?}: {}", &record[1], e))
            })?;

            points.push((angle, coefficient));
        }

        Self::new(points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Piecewise-linear lookup with linear extrapolation past either end.
    pub fn interpolate(&self, angle_of_attack: f64) -> f64 {
        // Sampled angles return the stored coefficient with no rounding.
        if let Some(&(_, c)) = self.points.iter().find(|&&(a, _)| a == angle_of_attack) {
            return c;
        }

        let last = self.points.len() - 1;
        let segment = match self.points.iter().position(|&(a, _)| angle_of_attack < a) {
            Some(0) => 0,
            Some(i) => i - 1,
            None => last - 1,
        };

        let (a0, c0) = self.points[segment];
        let (a1, c1) = self.points[segment + 1];
        c0 + (c1 - c0) * (angle_of_attack - a0) / (a1 - a0)
    }
}

/// The pair of tables consumed by the angle-of-attack drag correction:
/// `eps` scales the alpha-squared body term, `nu` the alpha-cubed cross term.
#[derive(Debug, Clone, PartialEq)]
pub struct CorrectionTables {
    pub eps: CorrectionTable,
    pub nu: CorrectionTable,
}

impl CorrectionTables {
    pub fn new(eps: CorrectionTable, nu: CorrectionTable) -> Self {
        CorrectionTables { eps, nu }
    }

    /// Default tables compiled into the crate, digitized from the published
    /// correlation curves over 4°-20° of incidence (angles in radians).
    pub fn embedded() -> Result<Self, AeroError> {
        let eps = CorrectionTable::from_csv_bytes(include_str!("../data/eps_table.csv").as_bytes())?;
        let nu = CorrectionTable::from_csv_bytes(include_str!("../data/nu_table.csv").as_bytes())?;
        Ok(CorrectionTables::new(eps, nu))
    }

    /// Loads `eps_table.csv` and `nu_table.csv` from a directory.
    pub fn from_dir<P: AsRef<Path>>(dir: P) -> Result<Self, AeroError> {
        let dir = dir.as_ref();
        let eps = CorrectionTable::from_csv_path(dir.join("eps_table.csv"))?;
        let nu = CorrectionTable::from_csv_path(dir.join("nu_table.csv"))?;
        Ok(CorrectionTables::new(eps, nu))
    }
}
