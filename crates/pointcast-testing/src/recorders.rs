//! Recording delegate implementations for pipeline assertions.
//!
//! Each recorder implements one of the pipeline's delegate traits and
//! appends every notification to a public `Vec`, so tests can assert on
//! exact event order and payloads.

use std::cell::RefCell;
use std::rc::Rc;

use pointcast_geometry::{Point, Point3};
use pointcast_input::{
    MultiTouchInputDelegate, PointerId, RaycastHit, ScreenInputDelegate, Swipe,
    SwipeInputDelegate, WorldInputDelegate, WorldMultiTouchInputDelegate,
};

/// Screen-space event record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScreenRecord {
    Entered(Point),
    Moved(Point),
    Released(Point),
}

#[derive(Default)]
pub struct RecordingScreenDelegate {
    pub events: Vec<ScreenRecord>,
}

impl RecordingScreenDelegate {
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }
}

impl ScreenInputDelegate for RecordingScreenDelegate {
    fn entered_point(&mut self, point: Point) {
        self.events.push(ScreenRecord::Entered(point));
    }

    fn moved_point(&mut self, point: Point) {
        self.events.push(ScreenRecord::Moved(point));
    }

    fn released_point(&mut self, point: Point) {
        self.events.push(ScreenRecord::Released(point));
    }
}

/// Multi-touch event record.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MultiTouchRecord {
    Entered(Point, PointerId),
    Moved(Point, PointerId),
    Released(Point, PointerId),
    ModifierPressed(Point),
}

#[derive(Default)]
pub struct RecordingMultiTouchDelegate {
    pub events: Vec<MultiTouchRecord>,
}

impl RecordingMultiTouchDelegate {
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }
}

impl MultiTouchInputDelegate for RecordingMultiTouchDelegate {
    fn entered_point(&mut self, point: Point, id: PointerId) {
        self.events.push(MultiTouchRecord::Entered(point, id));
    }

    fn moved_point(&mut self, point: Point, id: PointerId) {
        self.events.push(MultiTouchRecord::Moved(point, id));
    }

    fn released_point(&mut self, point: Point, id: PointerId) {
        self.events.push(MultiTouchRecord::Released(point, id));
    }

    fn modifier_pressed(&mut self, point: Point) {
        self.events.push(MultiTouchRecord::ModifierPressed(point));
    }
}

#[derive(Default)]
pub struct RecordingSwipeDelegate {
    pub swipes: Vec<Swipe>,
}

impl RecordingSwipeDelegate {
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }
}

impl SwipeInputDelegate for RecordingSwipeDelegate {
    fn swipe_detected(&mut self, swipe: Swipe) {
        self.swipes.push(swipe);
    }
}

/// World-space event record, carrying the full hit for payload assertions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WorldRecord {
    Entered(Point3, RaycastHit),
    Moved(Point3, RaycastHit),
    Released(Point3, RaycastHit),
    MultiTouchEntered(Point3, RaycastHit, PointerId),
    MultiTouchMoved(Point3, RaycastHit, PointerId),
    MultiTouchReleased(Point3, RaycastHit, PointerId),
    ModifierPressed(Point3, RaycastHit),
}

#[derive(Default)]
pub struct RecordingWorldDelegate {
    pub events: Vec<WorldRecord>,
}

impl RecordingWorldDelegate {
    pub fn shared() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }
}

impl WorldInputDelegate for RecordingWorldDelegate {
    fn entered_point(&mut self, point: Point3, hit: &RaycastHit) {
        self.events.push(WorldRecord::Entered(point, *hit));
    }

    fn moved_point(&mut self, point: Point3, hit: &RaycastHit) {
        self.events.push(WorldRecord::Moved(point, *hit));
    }

    fn released_point(&mut self, point: Point3, hit: &RaycastHit) {
        self.events.push(WorldRecord::Released(point, *hit));
    }
}

impl WorldMultiTouchInputDelegate for RecordingWorldDelegate {
    fn entered_point(&mut self, point: Point3, hit: &RaycastHit, id: PointerId) {
        self.events.push(WorldRecord::MultiTouchEntered(point, *hit, id));
    }

    fn moved_point(&mut self, point: Point3, hit: &RaycastHit, id: PointerId) {
        self.events.push(WorldRecord::MultiTouchMoved(point, *hit, id));
    }

    fn released_point(&mut self, point: Point3, hit: &RaycastHit, id: PointerId) {
        self.events.push(WorldRecord::MultiTouchReleased(point, *hit, id));
    }

    fn modifier_pressed(&mut self, point: Point3, hit: &RaycastHit) {
        self.events.push(WorldRecord::ModifierPressed(point, *hit));
    }
}
