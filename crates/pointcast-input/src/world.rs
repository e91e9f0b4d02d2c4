//! Screen-to-world input bridging through an injected ray caster.
//!
//! The bridge sits behind the screen delegates and lifts each normalized
//! screen event to a world point. It is a stateless 1:1 mapping per event:
//! a miss drops the event entirely, so no world event ever carries
//! fabricated geometry.

use std::cell::RefCell;
use std::rc::Rc;

use pointcast_geometry::{Point, Point3, Vector3};

use crate::router::{MultiTouchInputDelegate, ScreenInputDelegate, ScreenInputRouter};
use crate::types::PointerId;

/// Stable identifier of the scene object a ray hit.
pub type HitId = u64;

/// Result of a scene ray cast. Consumed per event, never stored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RaycastHit {
    pub point: Point3,
    pub normal: Vector3,
    pub target: HitId,
}

/// Host scene-query seam: casts a ray from the viewpoint through a screen
/// position against the active scene.
///
/// Implemented for plain closures, so a host can pass
/// `|point| scene.raycast(camera.screen_ray(point))` directly.
pub trait Raycaster {
    fn cast(&self, screen_point: Point) -> Option<RaycastHit>;
}

impl<F> Raycaster for F
where
    F: Fn(Point) -> Option<RaycastHit>,
{
    fn cast(&self, screen_point: Point) -> Option<RaycastHit> {
        self(screen_point)
    }
}

/// World-space consumer mirroring the primary screen delegate.
pub trait WorldInputDelegate {
    fn entered_point(&mut self, point: Point3, hit: &RaycastHit);
    fn moved_point(&mut self, point: Point3, hit: &RaycastHit);
    fn released_point(&mut self, point: Point3, hit: &RaycastHit);
}

/// World-space consumer for multi-touch pointers and the modifier chord.
pub trait WorldMultiTouchInputDelegate {
    fn entered_point(&mut self, point: Point3, hit: &RaycastHit, id: PointerId);
    fn moved_point(&mut self, point: Point3, hit: &RaycastHit, id: PointerId);
    fn released_point(&mut self, point: Point3, hit: &RaycastHit, id: PointerId);
    fn modifier_pressed(&mut self, point: Point3, hit: &RaycastHit);
}

/// Maps each normalized screen event to a world point through the ray
/// caster, forwarding hits to the world delegates.
pub struct WorldInputBridge {
    raycaster: Box<dyn Raycaster>,
    delegate: Option<Rc<RefCell<dyn WorldInputDelegate>>>,
    multi_touch_delegate: Option<Rc<RefCell<dyn WorldMultiTouchInputDelegate>>>,
}

impl WorldInputBridge {
    pub fn new(raycaster: impl Raycaster + 'static) -> Self {
        Self {
            raycaster: Box::new(raycaster),
            delegate: None,
            multi_touch_delegate: None,
        }
    }

    /// Registers `bridge` as both screen delegates on `router`.
    pub fn attach(bridge: &Rc<RefCell<Self>>, router: &mut ScreenInputRouter) {
        router.set_delegate(bridge.clone());
        router.set_multi_touch_delegate(bridge.clone());
    }

    pub fn set_delegate(&mut self, delegate: Rc<RefCell<dyn WorldInputDelegate>>) {
        self.delegate = Some(delegate);
    }

    pub fn set_multi_touch_delegate(
        &mut self,
        delegate: Rc<RefCell<dyn WorldMultiTouchInputDelegate>>,
    ) {
        self.multi_touch_delegate = Some(delegate);
    }

    fn cast(&self, screen_point: Point) -> Option<RaycastHit> {
        let hit = self.raycaster.cast(screen_point);
        if hit.is_none() {
            // Expected whenever the pointer is over empty sky/void.
            log::debug!(
                "raycast missed at ({}, {})",
                screen_point.x,
                screen_point.y
            );
        }
        hit
    }

    fn forward(
        &self,
        screen_point: Point,
        notify: impl FnOnce(&mut dyn WorldInputDelegate, Point3, &RaycastHit),
    ) {
        let Some(hit) = self.cast(screen_point) else {
            return;
        };
        match self.delegate.as_ref() {
            Some(delegate) => notify(&mut *delegate.borrow_mut(), hit.point, &hit),
            None => log::warn!("world input delegate not set"),
        }
    }

    fn forward_multi_touch(
        &self,
        screen_point: Point,
        notify: impl FnOnce(&mut dyn WorldMultiTouchInputDelegate, Point3, &RaycastHit),
    ) {
        let Some(hit) = self.cast(screen_point) else {
            return;
        };
        match self.multi_touch_delegate.as_ref() {
            Some(delegate) => notify(&mut *delegate.borrow_mut(), hit.point, &hit),
            None => log::warn!("world multi-touch input delegate not set"),
        }
    }
}

impl ScreenInputDelegate for WorldInputBridge {
    fn entered_point(&mut self, point: Point) {
        self.forward(point, |delegate, world, hit| delegate.entered_point(world, hit));
    }

    fn moved_point(&mut self, point: Point) {
        self.forward(point, |delegate, world, hit| delegate.moved_point(world, hit));
    }

    fn released_point(&mut self, point: Point) {
        self.forward(point, |delegate, world, hit| delegate.released_point(world, hit));
    }
}

impl MultiTouchInputDelegate for WorldInputBridge {
    fn entered_point(&mut self, point: Point, id: PointerId) {
        self.forward_multi_touch(point, |delegate, world, hit| {
            delegate.entered_point(world, hit, id)
        });
    }

    fn moved_point(&mut self, point: Point, id: PointerId) {
        self.forward_multi_touch(point, |delegate, world, hit| {
            delegate.moved_point(world, hit, id)
        });
    }

    fn released_point(&mut self, point: Point, id: PointerId) {
        self.forward_multi_touch(point, |delegate, world, hit| {
            delegate.released_point(world, hit, id)
        });
    }

    fn modifier_pressed(&mut self, point: Point) {
        self.forward_multi_touch(point, |delegate, world, hit| {
            delegate.modifier_pressed(world, hit)
        });
    }
}
