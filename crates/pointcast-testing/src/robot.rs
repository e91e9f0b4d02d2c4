//! Scripted frame driver for end-to-end pipeline tests.
//!
//! `InputRobot` plays the host's role: it owns a router, advances a virtual
//! frame clock, and feeds hand-built sample lists one tick at a time.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use pointcast_input::InputSettings;
//! use pointcast_testing::InputRobot;
//!
//! let mut robot = InputRobot::new(InputSettings::default());
//! let screen = robot.record_screen();
//!
//! robot.touch_began(0, 10.0, 10.0).frame();
//! robot.advance(Duration::from_millis(16));
//! robot.touch_ended(0, 10.0, 10.0).frame();
//!
//! assert_eq!(screen.borrow().events.len(), 2);
//! ```

use std::cell::RefCell;
use std::mem;
use std::rc::Rc;
use std::time::Duration;

use pointcast_geometry::Point;
use pointcast_input::{
    InputSettings, MouseSample, PointerId, PointerSample, Raycaster, ScreenInputRouter,
    WorldInputBridge,
};

use crate::recorders::{
    RecordingMultiTouchDelegate, RecordingScreenDelegate, RecordingSwipeDelegate,
};

/// Drives a [`ScreenInputRouter`] with scripted frames and a virtual clock.
pub struct InputRobot {
    router: ScreenInputRouter,
    now: Duration,
    pending_touches: Vec<PointerSample>,
    pending_mouse: Option<MouseSample>,
}

impl InputRobot {
    pub fn new(settings: InputSettings) -> Self {
        Self {
            router: ScreenInputRouter::new(settings),
            now: Duration::ZERO,
            pending_touches: Vec::new(),
            pending_mouse: None,
        }
    }

    pub fn router_mut(&mut self) -> &mut ScreenInputRouter {
        &mut self.router
    }

    /// Registers a fresh recording screen delegate and returns it.
    pub fn record_screen(&mut self) -> Rc<RefCell<RecordingScreenDelegate>> {
        let recorder = RecordingScreenDelegate::shared();
        self.router.set_delegate(recorder.clone());
        recorder
    }

    /// Registers a fresh recording multi-touch delegate and returns it.
    pub fn record_multi_touch(&mut self) -> Rc<RefCell<RecordingMultiTouchDelegate>> {
        let recorder = RecordingMultiTouchDelegate::shared();
        self.router.set_multi_touch_delegate(recorder.clone());
        recorder
    }

    /// Registers a fresh recording swipe delegate and returns it.
    pub fn record_swipes(&mut self) -> Rc<RefCell<RecordingSwipeDelegate>> {
        let recorder = RecordingSwipeDelegate::shared();
        self.router.set_swipe_delegate(recorder.clone());
        recorder
    }

    /// Builds a world bridge over `raycaster` and registers it as both
    /// screen delegates.
    pub fn attach_world_bridge(
        &mut self,
        raycaster: impl Raycaster + 'static,
    ) -> Rc<RefCell<WorldInputBridge>> {
        let bridge = Rc::new(RefCell::new(WorldInputBridge::new(raycaster)));
        WorldInputBridge::attach(&bridge, &mut self.router);
        bridge
    }

    pub fn touch_began(&mut self, id: u32, x: f32, y: f32) -> &mut Self {
        self.pending_touches
            .push(PointerSample::began(PointerId(id), Point::new(x, y)));
        self
    }

    pub fn touch_began_occluded(&mut self, id: u32, x: f32, y: f32) -> &mut Self {
        self.pending_touches
            .push(PointerSample::began(PointerId(id), Point::new(x, y)).occluded());
        self
    }

    pub fn touch_moved(&mut self, id: u32, x: f32, y: f32) -> &mut Self {
        self.pending_touches
            .push(PointerSample::moved(PointerId(id), Point::new(x, y)));
        self
    }

    pub fn touch_ended(&mut self, id: u32, x: f32, y: f32) -> &mut Self {
        self.pending_touches
            .push(PointerSample::ended(PointerId(id), Point::new(x, y)));
        self
    }

    pub fn mouse(&mut self, sample: MouseSample) -> &mut Self {
        self.pending_mouse = Some(sample);
        self
    }

    /// Advances the virtual frame clock.
    pub fn advance(&mut self, dt: Duration) -> &mut Self {
        self.now += dt;
        self
    }

    /// Runs one tick with everything queued since the last frame.
    pub fn frame(&mut self) -> &mut Self {
        let touches = mem::take(&mut self.pending_touches);
        let mouse = self.pending_mouse.take();
        self.router.on_frame(self.now, &touches, mouse);
        self
    }
}
