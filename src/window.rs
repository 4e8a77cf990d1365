use std::{cell::RefCell, rc::Rc, time::Duration};

use battery_indicator::{BatteryIndicator, Direction};
use gtk4::{
    glib::{timeout_add_local, ControlFlow, ExitCode, SourceId},
    prelude::*,
    Application, ApplicationWindow, Button, DrawingArea, Orientation,
};

use crate::view::IndicatorView;

/// Delay between two one-percent steps of a fill or drain animation.
const STEP_INTERVAL: Duration = Duration::from_millis(25);

pub struct IndicatorWindow {
    app: Application,
    window_width: i32,
    window_height: i32,
    indicator: BatteryIndicator,
}

impl IndicatorWindow {
    pub fn new(window_width: i32, window_height: i32, indicator: BatteryIndicator) -> Self {
        let app = Application::builder()
            .application_id("dev.zoria.BatteryIndicator")
            .build();
        Self {
            app,
            window_width,
            window_height,
            indicator,
        }
    }

    pub fn run(self) -> ExitCode {
        let view = Rc::new(RefCell::new(IndicatorView::new(self.indicator)));
        let animation: Rc<RefCell<Option<SourceId>>> = Rc::new(RefCell::new(None));

        self.app.connect_activate(move |app| {
            let window = ApplicationWindow::builder()
                .application(app)
                .default_width(self.window_width)
                .default_height(self.window_height)
                .title("Battery Indicator")
                .build();

            let drawing_area = DrawingArea::new();
            drawing_area.set_hexpand(true);
            drawing_area.set_vexpand(true);
            drawing_area.set_draw_func({
                let view = Rc::clone(&view);
                move |_, cr, width, height| {
                    if let Err(err) = view.borrow().draw(cr, width, height) {
                        log::error!("failed to draw battery indicator: {err}");
                    }
                }
            });

            let fill_up = Button::with_label("Fill up");
            let free_up = Button::with_label("Free up");
            for (button, direction) in [(&fill_up, Direction::Fill), (&free_up, Direction::Drain)] {
                let view = Rc::clone(&view);
                let animation = Rc::clone(&animation);
                let drawing_area = drawing_area.clone();
                button.connect_clicked(move |_| {
                    animate(&view, &animation, &drawing_area, direction);
                });
            }

            let buttons = gtk4::Box::new(Orientation::Horizontal, 8);
            buttons.append(&fill_up);
            buttons.append(&free_up);

            let content = gtk4::Box::new(Orientation::Vertical, 8);
            content.set_margin_top(16);
            content.set_margin_bottom(16);
            content.set_margin_start(16);
            content.set_margin_end(16);
            content.append(&drawing_area);
            content.append(&buttons);

            window.set_child(Some(&content));
            window.present();
        });

        // argv belongs to the config loader, not to GApplication.
        self.app.run_with_args::<&str>(&[])
    }
}

/// Steps the indicator toward one bound, redrawing after every step.
///
/// Any animation still running is cancelled first.
fn animate(
    view: &Rc<RefCell<IndicatorView>>,
    animation: &Rc<RefCell<Option<SourceId>>>,
    drawing_area: &DrawingArea,
    direction: Direction,
) {
    let running = animation.borrow_mut().take();
    if let Some(source) = running {
        source.remove();
    }

    let tick = {
        let view = Rc::clone(view);
        let animation = Rc::clone(animation);
        let drawing_area = drawing_area.clone();
        move || {
            let moved = view.borrow_mut().indicator_mut().step(direction);
            drawing_area.queue_draw();
            if moved {
                ControlFlow::Continue
            } else {
                animation.borrow_mut().take();
                ControlFlow::Break
            }
        }
    };
    let source = timeout_add_local(STEP_INTERVAL, tick);
    *animation.borrow_mut() = Some(source);
}
