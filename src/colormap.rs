use serde::{Deserialize, Serialize};

use crate::{color::Color, error::BoundaryError};

/// A percentage ceiling paired with the color shown at or below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ColorBoundary {
    top_bound: i32,
    color: Color,
}

impl ColorBoundary {
    pub const fn new(top_bound: i32, color: Color) -> Self {
        ColorBoundary { top_bound, color }
    }

    pub fn top_bound(&self) -> i32 {
        self.top_bound
    }

    pub fn color(&self) -> Color {
        self.color
    }

    fn covers(&self, percentage: f32) -> bool {
        // exact for every i32 ceiling
        self.top_bound as f64 >= percentage as f64
    }
}

/// Default three-tier ceilings for the low, normal and excellent levels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThresholdPreset {
    /// 25 / 75 / 100, normal tier yellow.
    #[default]
    Quartiles,
    /// 20 / 50 / 100, normal tier magenta.
    Fifths,
}

impl ThresholdPreset {
    pub fn ceilings(&self) -> [i32; 3] {
        match self {
            ThresholdPreset::Quartiles => [25, 75, 100],
            ThresholdPreset::Fifths => [20, 50, 100],
        }
    }

    pub fn default_normal_color(&self) -> Color {
        match self {
            ThresholdPreset::Quartiles => Color::YELLOW,
            ThresholdPreset::Fifths => Color::MAGENTA,
        }
    }
}

/// Maps a percentage onto the color of the smallest ceiling that still covers it.
///
/// Boundaries are kept sorted ascending by ceiling. The sort is stable, so
/// among equal ceilings the one inserted first wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColorBoundaryResolver {
    boundaries: Vec<ColorBoundary>,
}

impl ColorBoundaryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_boundaries(boundaries: impl IntoIterator<Item = ColorBoundary>) -> Self {
        let mut boundaries = boundaries.into_iter().collect::<Vec<_>>();
        boundaries.sort_by_key(ColorBoundary::top_bound);
        Self { boundaries }
    }

    pub fn with_preset(
        preset: ThresholdPreset,
        low: Color,
        normal: Color,
        excellent: Color,
    ) -> Self {
        let [low_bound, normal_bound, excellent_bound] = preset.ceilings();
        Self::from_boundaries([
            ColorBoundary::new(low_bound, low),
            ColorBoundary::new(normal_bound, normal),
            ColorBoundary::new(excellent_bound, excellent),
        ])
    }

    pub fn boundaries(&self) -> &[ColorBoundary] {
        &self.boundaries
    }

    pub fn len(&self) -> usize {
        self.boundaries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }

    /// Inserts a boundary and re-sorts. Negative and duplicate ceilings are accepted.
    pub fn add_boundary(&mut self, boundary: ColorBoundary) {
        log::debug!(
            "adding color boundary {} at <= {}",
            boundary.color,
            boundary.top_bound
        );
        self.boundaries.push(boundary);
        self.boundaries.sort_by_key(ColorBoundary::top_bound);
    }

    pub fn try_add_boundary(&mut self, boundary: ColorBoundary) -> Result<(), BoundaryError> {
        if boundary.top_bound < 0 {
            return Err(BoundaryError::NegativeTopBound {
                top_bound: boundary.top_bound,
            });
        }
        self.add_boundary(boundary);
        Ok(())
    }

    /// Color of the first boundary whose ceiling is `>= percentage`, or
    /// [`Color::TRANSPARENT`] when none covers it (including NaN).
    pub fn resolve(&self, percentage: f32) -> Color {
        match self.boundaries.iter().find(|b| b.covers(percentage)) {
            Some(boundary) => boundary.color,
            None => {
                log::trace!("no color boundary covers {percentage}%");
                Color::TRANSPARENT
            }
        }
    }
}
