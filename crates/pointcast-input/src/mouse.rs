//! Mouse input tracking for pointer/PC hosts.
//!
//! The host reports level state once per frame; press, drag, and release
//! edges are derived here. Occlusion is honoured at press time only, so a
//! press that begins over empty space keeps reporting while the cursor
//! drags across UI.

use pointcast_geometry::Point;

use crate::types::MouseSample;

/// Events derived from the per-frame mouse state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MouseEvent {
    Pressed(Point),
    Dragged(Point),
    Released(Point),
    /// Modifier key + primary button chord, in either edge order. Routed to
    /// the secondary consumer instead of the normal click path.
    ModifierPressed(Point),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ButtonState {
    Pressed,
    Released,
}

/// Converts per-frame mouse level state into press/drag/release events.
pub struct MouseTracker {
    button: ButtonState,
    last_reported: Point,
    was_primary_down: bool,
    was_modifier_held: bool,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self {
            button: ButtonState::Released,
            last_reported: Point::ZERO,
            was_primary_down: false,
            was_modifier_held: false,
        }
    }

    /// Processes one frame's mouse sample.
    ///
    /// A modifier chord claims the whole frame: press, drag, and release
    /// processing for that sample are skipped.
    pub fn on_frame(&mut self, sample: MouseSample, mut emit: impl FnMut(MouseEvent)) {
        let press_edge = sample.primary_down && !self.was_primary_down;
        let release_edge = !sample.primary_down && self.was_primary_down;
        let modifier_edge = sample.modifier_held && !self.was_modifier_held;
        self.was_primary_down = sample.primary_down;
        self.was_modifier_held = sample.modifier_held;

        // Modifier going down while the button is held, or the button going
        // down while the modifier is held.
        if (modifier_edge && sample.primary_down) || (sample.modifier_held && press_edge) {
            emit(MouseEvent::ModifierPressed(sample.position));
            return;
        }

        if press_edge && !sample.occluded_by_ui {
            self.button = ButtonState::Pressed;
            self.last_reported = sample.position;
            emit(MouseEvent::Pressed(sample.position));
        }

        if sample.primary_down
            && self.button == ButtonState::Pressed
            && sample.position != self.last_reported
        {
            self.last_reported = sample.position;
            emit(MouseEvent::Dragged(sample.position));
        }

        if release_edge && self.button == ButtonState::Pressed {
            self.button = ButtonState::Released;
            emit(MouseEvent::Released(sample.position));
        }
    }
}

impl Default for MouseTracker {
    fn default() -> Self {
        Self::new()
    }
}
