use std::time::Duration;

/// Drawable area, origin at the top left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl From<sfml::system::Vector2u> for Bounds {
    fn from(size: sfml::system::Vector2u) -> Self {
        Self::new(size.x as _, size.y as _)
    }
}

/// Simulated time since start, sampled by the host once per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SimClock(pub Duration);
