//! Cave generation parameters and presets

use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::CaveError;

/// Named starting points for the parameter record
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CavePreset {
    /// Sparse rock, wide chambers
    Open,
    /// Balanced caverns with connected side pockets
    #[default]
    Classic,
    /// Heavy rock, narrow winding passages
    Dense,
}

impl CavePreset {
    pub fn all() -> &'static [Self] {
        &[Self::Open, Self::Classic, Self::Dense]
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Open => "Wide open chambers",
            Self::Classic => "Balanced caverns",
            Self::Dense => "Narrow winding passages",
        }
    }
}

impl std::fmt::Display for CavePreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Classic => write!(f, "classic"),
            Self::Dense => write!(f, "dense"),
        }
    }
}

impl FromStr for CavePreset {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|preset| preset.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let names: Vec<String> = Self::all().iter().map(|p| p.to_string()).collect();
                format!("unknown preset '{}' (expected one of: {})", s, names.join(", "))
            })
    }
}

/// Parameters for one cave generation run.
///
/// Supplied once and never mutated while generating, so the same record can
/// drive any number of independent runs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveParams {
    /// Columns in the grid
    pub width: usize,

    /// Rows in the grid
    pub height: usize,

    /// Probability that an interior cell starts as WALL (0.0-1.0)
    pub fill_prob: f64,

    /// A FLOOR cell turns to WALL when at least this many neighbors are WALL
    pub birth: usize,

    /// A WALL cell stays WALL when at least this many neighbors are WALL
    pub survive: usize,

    /// Number of cellular automaton passes
    pub ca_steps: usize,

    /// Regions smaller than this stay disconnected from the main cave
    pub min_region: usize,

    /// Number of micro-smoothing passes after carving corridors
    pub smoothing_passes: usize,

    /// Force the outer ring back to WALL after carving and after smoothing.
    /// Off by default: the automaton may open border cells and corridors may
    /// end on them.
    pub seal_border: bool,
}

impl Default for CaveParams {
    fn default() -> Self {
        Self {
            width: 100,
            height: 40,
            fill_prob: 0.45,
            birth: 5,
            survive: 4,
            ca_steps: 5,
            min_region: 30,
            smoothing_passes: 2,
            seal_border: false,
        }
    }
}

impl CaveParams {
    /// Create parameters from a preset
    pub fn from_preset(preset: CavePreset) -> Self {
        match preset {
            CavePreset::Open => Self {
                fill_prob: 0.40,
                ca_steps: 4,
                min_region: 10,
                ..Default::default()
            },
            CavePreset::Classic => Self::default(),
            CavePreset::Dense => Self {
                fill_prob: 0.52,
                ca_steps: 6,
                min_region: 50,
                smoothing_passes: 3,
                ..Default::default()
            },
        }
    }

    /// Same parameters with different dimensions
    pub fn with_size(self, width: usize, height: usize) -> Self {
        Self { width, height, ..self }
    }

    /// Reject parameters the pipeline cannot run with.
    ///
    /// Counts are unsigned, so negative values are already refused when the
    /// record is parsed.
    pub fn validate(&self) -> Result<(), CaveError> {
        if self.width == 0 {
            return Err(CaveError::invalid("width", "must be greater than zero"));
        }
        if self.height == 0 {
            return Err(CaveError::invalid("height", "must be greater than zero"));
        }
        if !self.fill_prob.is_finite() || !(0.0..=1.0).contains(&self.fill_prob) {
            return Err(CaveError::invalid(
                "fill_prob",
                format!("must be within [0, 1], got {}", self.fill_prob),
            ));
        }
        Ok(())
    }

    /// Load a parameter record from a JSON file. Missing fields take their
    /// default values.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, CaveError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let params: CaveParams = serde_json::from_str(&contents)?;
        params.validate()?;
        Ok(params)
    }
}
