use std::f64::consts::{FRAC_PI_2, PI};

use battery_indicator::{BatteryIndicator, Color};
use gtk4::cairo::{self, Context};

use crate::geometry::{BatteryLayout, Rect};

/// Draws a [`BatteryIndicator`] onto a cairo context.
pub struct IndicatorView {
    indicator: BatteryIndicator,
}

impl IndicatorView {
    pub fn new(indicator: BatteryIndicator) -> Self {
        Self { indicator }
    }

    pub fn indicator_mut(&mut self) -> &mut BatteryIndicator {
        &mut self.indicator
    }

    pub fn draw(&self, cr: &Context, width: i32, height: i32) -> Result<(), cairo::Error> {
        let radius = self.indicator.config().corner_radius as f64;
        let fill_color = self.indicator.fill_color();
        let fraction = self.indicator.fill_fraction() as f64;
        let border_color = self.indicator.border_color();
        let border_width = self.indicator.border_width() as f64;

        let layout = BatteryLayout::measure(width, height, border_width);

        let fill = layout.fill(fraction);
        if fill.width() > 0.0 {
            rounded_rect(cr, &fill, radius / 1.5);
            set_source(cr, fill_color);
            cr.fill()?;
        }

        // body
        rounded_rect(cr, &layout.body, radius);
        set_source(cr, border_color);
        cr.set_line_width(border_width);
        cr.stroke()?;

        // cap
        rounded_rect(cr, &layout.cap, radius * 1.5);
        cr.stroke()?;

        Ok(())
    }
}

fn set_source(cr: &Context, color: Color) {
    let [r, g, b, a] = color.to_unit_rgba();
    cr.set_source_rgba(r, g, b, a);
}

fn rounded_rect(cr: &Context, rect: &Rect, radius: f64) {
    let radius = radius.min(rect.width() / 2.0).min(rect.height() / 2.0).max(0.0);
    cr.new_sub_path();
    cr.arc(rect.max_x - radius, rect.min_y + radius, radius, -FRAC_PI_2, 0.0);
    cr.arc(rect.max_x - radius, rect.max_y - radius, radius, 0.0, FRAC_PI_2);
    cr.arc(rect.min_x + radius, rect.max_y - radius, radius, FRAC_PI_2, PI);
    cr.arc(rect.min_x + radius, rect.min_y + radius, radius, PI, 3.0 * FRAC_PI_2);
    cr.close_path();
}
