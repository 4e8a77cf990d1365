#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Rect {
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }

    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    pub fn with_max_x(&self, max_x: f64) -> Self {
        Self { max_x, ..*self }
    }
}

/// Height of the terminal cap, in percent of the widget height.
const CAP_HEIGHT_PERCENT: i32 = 40;
/// Width of the terminal cap, in percent of the widget width.
const CAP_WIDTH_PERCENT: i32 = 2;

/// Pixel layout of the battery outline, computed once per size change.
#[derive(Debug, Clone, PartialEq)]
pub struct BatteryLayout {
    pub body: Rect,
    pub cap: Rect,
    pub track: Rect,
}

impl BatteryLayout {
    pub fn measure(width: i32, height: i32, border_stroke: f64) -> Self {
        let cap_start = width - CAP_WIDTH_PERCENT * width / 100;
        let cap_top = height * ((100 - CAP_HEIGHT_PERCENT) / 2) / 100;
        let cap_bottom = height - cap_top;
        let cap_width = (width - cap_start) as f64;

        let (width, height) = (width as f64, height as f64);
        let half_stroke = border_stroke / 2.0;

        Self {
            body: Rect::new(0.0, 0.0, width - half_stroke - cap_width, height - half_stroke),
            cap: Rect::new(cap_start as f64, cap_top as f64, width, cap_bottom as f64),
            track: Rect::new(
                half_stroke,
                half_stroke,
                width - cap_width - border_stroke,
                height - half_stroke,
            ),
        }
    }

    /// Portion of the track covered at `fraction` (0.0 empty, 1.0 full).
    pub fn fill(&self, fraction: f64) -> Rect {
        let track = &self.track;
        let right = track.max_x + (track.min_x - track.max_x) * (1.0 - fraction.clamp(0.0, 1.0));
        track.with_max_x(right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measure_splits_body_and_cap() {
        let layout = BatteryLayout::measure(200, 100, 4.0);
        assert_eq!(layout.cap, Rect::new(196.0, 30.0, 200.0, 70.0));
        assert_eq!(layout.body, Rect::new(0.0, 0.0, 194.0, 98.0));
        assert_eq!(layout.track, Rect::new(2.0, 2.0, 192.0, 98.0));
    }

    #[test]
    fn fill_scales_with_fraction() {
        let layout = BatteryLayout::measure(200, 100, 4.0);
        assert_eq!(layout.fill(0.0).width(), 0.0);
        assert_eq!(layout.fill(1.0), layout.track);
        assert_eq!(layout.fill(0.5).max_x, 97.0);
        assert_eq!(layout.fill(2.0), layout.track);
    }
}
