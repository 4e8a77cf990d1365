pub const MIN_PERCENT: f32 = 0.0;
pub const MAX_PERCENT: f32 = 100.0;

/// Which way a fill animation moves the percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Fill,
    Drain,
}

impl Direction {
    fn delta(&self) -> f32 {
        match self {
            Direction::Fill => 1.0,
            Direction::Drain => -1.0,
        }
    }
}

/// A percentage held within `0.0..=100.0`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Percentage(f32);

impl Percentage {
    pub fn new(value: f32) -> Self {
        Percentage(clamp(value))
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    pub fn set(&mut self, value: f32) {
        self.0 = clamp(value);
    }

    pub fn fraction(&self) -> f32 {
        self.0 / MAX_PERCENT
    }

    pub fn is_at_bound(&self, direction: Direction) -> bool {
        match direction {
            Direction::Fill => self.0 >= MAX_PERCENT,
            Direction::Drain => self.0 <= MIN_PERCENT,
        }
    }

    /// Moves one percent toward the bound; returns `false` once there is nowhere to go.
    pub fn step(&mut self, direction: Direction) -> bool {
        if self.is_at_bound(direction) {
            return false;
        }
        self.set(self.0 + direction.delta());
        true
    }
}

impl From<f32> for Percentage {
    fn from(value: f32) -> Self {
        Percentage::new(value)
    }
}

fn clamp(value: f32) -> f32 {
    if value.is_nan() {
        return MIN_PERCENT;
    }
    value.clamp(MIN_PERCENT, MAX_PERCENT)
}
