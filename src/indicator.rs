use crate::{
    color::Color,
    colormap::{ColorBoundary, ColorBoundaryResolver},
    config::IndicatorConfig,
    percentage::{Direction, Percentage},
};

/// State a rendering adapter holds for one battery indicator.
///
/// Nothing here draws; the adapter reads [`fill_color`](Self::fill_color) and
/// [`fill_fraction`](Self::fill_fraction) once per frame.
#[derive(Debug, Clone)]
pub struct BatteryIndicator {
    config: IndicatorConfig,
    resolver: ColorBoundaryResolver,
}

impl BatteryIndicator {
    pub fn new(mut config: IndicatorConfig) -> Self {
        config.percent = Percentage::from(config.percent).value();
        Self {
            resolver: config.resolver(),
            config,
        }
    }

    /// Current settings. Percent and border reflect later setters; the tier
    /// colors are the ones the resolver started from, without added boundaries.
    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn resolver(&self) -> &ColorBoundaryResolver {
        &self.resolver
    }

    fn percentage_state(&self) -> Percentage {
        Percentage::from(self.config.percent)
    }

    pub fn percentage(&self) -> f32 {
        self.config.percent
    }

    pub fn set_percentage(&mut self, value: f32) {
        self.config.percent = Percentage::from(value).value();
    }

    pub fn add_boundary(&mut self, boundary: ColorBoundary) {
        self.resolver.add_boundary(boundary);
    }

    pub fn border_color(&self) -> Color {
        self.config.border_stroke_color
    }

    pub fn set_border_color(&mut self, color: Color) {
        self.config.border_stroke_color = color;
    }

    pub fn border_width(&self) -> f32 {
        self.config.border_stroke_size
    }

    pub fn set_border_width(&mut self, width: f32) {
        self.config.border_stroke_size = width.max(0.0);
    }

    pub fn fill_color(&self) -> Color {
        self.resolver.resolve(self.config.percent)
    }

    pub fn fill_fraction(&self) -> f32 {
        self.percentage_state().fraction()
    }

    /// One tick of a fill/drain animation. `false` means the bound was reached
    /// and the host should stop scheduling ticks.
    pub fn step(&mut self, direction: Direction) -> bool {
        let mut percentage = self.percentage_state();
        let moved = percentage.step(direction);
        self.config.percent = percentage.value();
        moved
    }
}

impl Default for BatteryIndicator {
    fn default() -> Self {
        Self::new(IndicatorConfig::default())
    }
}
