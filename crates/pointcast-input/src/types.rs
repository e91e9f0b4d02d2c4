//! Sample and event types shared across the input pipeline.

use pointcast_geometry::Point;

/// Pointer identifier for tracking multi-touch gestures.
///
/// Ids are stable for the lifetime of a contact. Samples must be matched by
/// id, never by their position in the per-frame sample list; the host does
/// not guarantee stable list ordering between frames.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PointerId(pub u32);

impl PointerId {
    /// The primary pointer (first touch, or the single mouse pointer).
    pub const PRIMARY: PointerId = PointerId(0);

    /// The second touch. Its arrival cancels the primary's pending release.
    pub const SECONDARY: PointerId = PointerId(1);

    pub fn is_primary(self) -> bool {
        self == Self::PRIMARY
    }
}

/// Phase the host reports for a pointer sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerPhase {
    Began,
    Moved,
    Ended,
}

/// One raw pointer sample, produced fresh by the host each tick.
#[derive(Clone, Copy, Debug)]
pub struct PointerSample {
    pub id: PointerId,
    pub position: Point,
    pub phase: PointerPhase,
    /// True when a UI element claims the pointer at sample time.
    pub occluded_by_ui: bool,
}

impl PointerSample {
    pub fn new(id: PointerId, phase: PointerPhase, position: Point) -> Self {
        Self {
            id,
            position,
            phase,
            occluded_by_ui: false,
        }
    }

    pub fn began(id: PointerId, position: Point) -> Self {
        Self::new(id, PointerPhase::Began, position)
    }

    pub fn moved(id: PointerId, position: Point) -> Self {
        Self::new(id, PointerPhase::Moved, position)
    }

    pub fn ended(id: PointerId, position: Point) -> Self {
        Self::new(id, PointerPhase::Ended, position)
    }

    /// Marks the sample as claimed by a UI element.
    pub fn occluded(mut self) -> Self {
        self.occluded_by_ui = true;
        self
    }
}

/// Kind of a normalized pointer event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEventKind {
    Entered,
    Moved,
    Released,
}

/// Normalized pointer event emitted by the capture tracker.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub id: PointerId,
    pub kind: PointerEventKind,
    pub position: Point,
}

/// Per-frame mouse state from the host.
///
/// The host reports level state only; press/release edges are derived by
/// `MouseTracker`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MouseSample {
    pub position: Point,
    pub primary_down: bool,
    pub modifier_held: bool,
    /// True when a UI element claims the cursor at sample time. Checked at
    /// press time only.
    pub occluded_by_ui: bool,
}

impl MouseSample {
    pub fn at(position: Point) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    pub fn pressed(mut self) -> Self {
        self.primary_down = true;
        self
    }

    pub fn with_modifier(mut self) -> Self {
        self.modifier_held = true;
        self
    }

    pub fn occluded(mut self) -> Self {
        self.occluded_by_ui = true;
        self
    }
}
