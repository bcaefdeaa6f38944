//! Translation from sfml window events to scene input.

use sfml::window::Event;

use crate::pointer::PointerEvent;

/// Pointer events for one window event. `inside` is the current
/// [`crate::pointer::PointerState::is_inside`].
///
/// A cursor already over the window at startup never sends `MouseEntered`,
/// so the first move while outside also enters.
pub fn pointer_events(event: &Event, inside: bool) -> impl Iterator<Item = PointerEvent> {
    let events = match *event {
        Event::MouseMoved { x, y } => [
            (!inside).then_some(PointerEvent::Entered),
            Some(PointerEvent::Moved {
                x: x as _,
                y: y as _,
            }),
        ],
        Event::MouseEntered => [Some(PointerEvent::Entered), None],
        Event::MouseLeft => [Some(PointerEvent::Left), None],
        Event::MouseButtonPressed { .. } => [Some(PointerEvent::Pressed), None],
        Event::MouseButtonReleased { .. } => [Some(PointerEvent::Released), None],
        _ => [None, None],
    };

    events.into_iter().flatten()
}

/// Egui overlay bookkeeping for the event loop.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Overlay {
    pub visible: bool,
    /// Set from the last egui pass.
    pub wants_pointer: bool,
}

impl Overlay {
    pub fn new(visible: bool) -> Self {
        Self {
            visible,
            wants_pointer: false,
        }
    }

    pub fn toggle(&mut self) {
        self.visible = !self.visible;
        self.wants_pointer = false;
    }

    /// Egui only drains its input queue while it runs, so nothing is
    /// queued while the overlay is hidden.
    pub fn forwards_events(&self) -> bool {
        self.visible
    }

    /// Presses over the overlay belong to egui. Releases always go
    /// through so a press started on the canvas is never left stuck.
    pub fn accepts(&self, event: PointerEvent) -> bool {
        !(event == PointerEvent::Pressed && self.visible && self.wants_pointer)
    }
}
