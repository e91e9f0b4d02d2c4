//! Frame-driven pointer input pipeline for Pointcast.
//!
//! The host engine calls [`ScreenInputRouter::on_frame`] once per tick with
//! the raw pointer samples it polled; the pipeline converts them into
//! capture events, swipe detections, and (through [`WorldInputBridge`])
//! world-space events, delivered synchronously to registered delegates.
//!
//! Everything engine-specific is injected: UI-occlusion verdicts ride on
//! the samples, scene queries come through the [`Raycaster`] seam, and
//! timestamps come from the host frame clock. No component reads a wall
//! clock or touches a platform API, which keeps the gesture logic testable
//! without a host.

mod capture;
mod mouse;
mod router;
mod settings;
mod swipe;
mod types;
mod world;

pub use pointcast_geometry::{Point, Point3, Vector, Vector3};

pub use capture::TouchCaptureTracker;
pub use mouse::{MouseEvent, MouseTracker};
pub use router::{
    MultiTouchInputDelegate, ScreenInputDelegate, ScreenInputRouter, SwipeInputDelegate,
};
pub use settings::{
    InputSettings, DEFAULT_SUBSEQUENT_SWIPE_MIN_THRESHOLD, DEFAULT_SWIPE_MIN_THRESHOLD,
    DEFAULT_SWIPE_RATE_MIN_THRESHOLD,
};
pub use swipe::{Swipe, SwipeDetector};
pub use types::{
    MouseSample, PointerEvent, PointerEventKind, PointerId, PointerPhase, PointerSample,
};
pub use world::{
    HitId, RaycastHit, Raycaster, WorldInputBridge, WorldInputDelegate,
    WorldMultiTouchInputDelegate,
};

pub mod prelude {
    pub use pointcast_geometry::{Point, Point3, Vector, Vector3};

    pub use crate::router::{
        MultiTouchInputDelegate, ScreenInputDelegate, ScreenInputRouter, SwipeInputDelegate,
    };
    pub use crate::settings::InputSettings;
    pub use crate::swipe::Swipe;
    pub use crate::types::{
        MouseSample, PointerEvent, PointerEventKind, PointerId, PointerPhase, PointerSample,
    };
    pub use crate::world::{
        RaycastHit, Raycaster, WorldInputBridge, WorldInputDelegate,
        WorldMultiTouchInputDelegate,
    };
}
