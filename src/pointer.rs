use glam::DVec2;

/// Pointer input as delivered by the window layer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Moved { x: f64, y: f64 },
    Entered,
    Left,
    Pressed,
    Released,
}

/// Last known pointer state plus a short newest-first trail of positions.
///
/// Only [`crate::simulation::Simulation::handle_pointer`] holds a mutable
/// reference to this, bodies see it through `&PointerState`.
#[derive(Clone, Debug, PartialEq)]
pub struct PointerState {
    position: Option<DVec2>,
    inside: bool,
    pressed: bool,
    trail: Vec<DVec2>,
    trail_capacity: usize,
}

impl PointerState {
    pub fn new(trail_capacity: usize) -> Self {
        Self {
            position: None,
            inside: false,
            pressed: false,
            trail: Vec::with_capacity(trail_capacity + 1),
            trail_capacity,
        }
    }

    pub fn apply(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Moved { x, y } => self.record_move(x, y),
            PointerEvent::Entered => self.set_inside(true),
            PointerEvent::Left => self.set_inside(false),
            PointerEvent::Pressed => self.set_pressed(true),
            PointerEvent::Released => self.set_pressed(false),
        }
    }

    pub fn record_move(&mut self, x: f64, y: f64) {
        let pos = DVec2 { x, y };

        self.position = Some(pos);
        self.trail.insert(0, pos);
        self.trail.truncate(self.trail_capacity);
    }

    /// Leaving the canvas drops the trail but keeps the last position.
    pub fn set_inside(&mut self, inside: bool) {
        if !inside {
            self.trail.clear();
        }

        self.inside = inside;
    }

    pub fn set_pressed(&mut self, pressed: bool) {
        self.pressed = pressed;
    }

    pub fn position(&self) -> Option<DVec2> {
        self.position
    }

    /// Position only while the pointer is over the canvas.
    pub fn active_position(&self) -> Option<DVec2> {
        self.position.filter(|_| self.inside)
    }

    pub fn is_inside(&self) -> bool {
        self.inside
    }

    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Newest first.
    pub fn trail(&self) -> &[DVec2] {
        &self.trail
    }

    pub fn trail_capacity(&self) -> usize {
        self.trail_capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trail_is_newest_first_and_bounded() {
        let mut pointer = PointerState::new(10);

        for i in 0..25 {
            pointer.record_move(i as f64, 0.0);
            assert!(pointer.trail().len() <= 10);
        }

        assert_eq!(pointer.trail().len(), 10);
        assert_eq!(pointer.trail()[0], DVec2::new(24.0, 0.0));
        assert_eq!(pointer.trail()[9], DVec2::new(15.0, 0.0));
        assert_eq!(pointer.position(), Some(DVec2::new(24.0, 0.0)));
    }

    #[test]
    fn leaving_clears_trail_but_keeps_position() {
        let mut pointer = PointerState::new(4);
        pointer.apply(PointerEvent::Entered);
        pointer.apply(PointerEvent::Moved { x: 3.0, y: 4.0 });
        pointer.apply(PointerEvent::Moved { x: 5.0, y: 6.0 });

        pointer.apply(PointerEvent::Left);

        assert!(pointer.trail().is_empty());
        assert!(!pointer.is_inside());
        assert_eq!(pointer.position(), Some(DVec2::new(5.0, 6.0)));
        assert_eq!(pointer.active_position(), None);
    }

    #[test]
    fn entering_keeps_existing_trail() {
        let mut pointer = PointerState::new(4);
        pointer.record_move(1.0, 1.0);
        pointer.set_inside(true);
        pointer.set_inside(true);

        assert_eq!(pointer.trail().len(), 1);
        assert_eq!(pointer.active_position(), Some(DVec2::new(1.0, 1.0)));
    }

    #[test]
    fn press_and_release_toggle_flag() {
        let mut pointer = PointerState::new(10);
        assert!(!pointer.is_pressed());

        pointer.apply(PointerEvent::Pressed);
        assert!(pointer.is_pressed());

        pointer.apply(PointerEvent::Released);
        assert!(!pointer.is_pressed());
    }
}
