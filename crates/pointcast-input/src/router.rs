//! Screen-space input routing.
//!
//! Composes the touch and mouse trackers into one normalized event stream:
//! primary-pointer events go to the [`ScreenInputDelegate`], every other id
//! to the [`MultiTouchInputDelegate`], and each Entered/Moved also feeds the
//! swipe detector on the side.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use pointcast_geometry::Point;
use smallvec::SmallVec;

use crate::capture::TouchCaptureTracker;
use crate::mouse::{MouseEvent, MouseTracker};
use crate::settings::InputSettings;
use crate::swipe::{Swipe, SwipeDetector};
use crate::types::{MouseSample, PointerEvent, PointerEventKind, PointerId, PointerSample};

/// Primary-pointer consumer: the first touch, or the mouse.
pub trait ScreenInputDelegate {
    fn entered_point(&mut self, point: Point);
    fn moved_point(&mut self, point: Point);
    fn released_point(&mut self, point: Point);
}

/// Secondary consumer for multi-touch pointers (ids 1 and up) and the
/// modifier-key chord.
pub trait MultiTouchInputDelegate {
    fn entered_point(&mut self, point: Point, id: PointerId);
    fn moved_point(&mut self, point: Point, id: PointerId);
    fn released_point(&mut self, point: Point, id: PointerId);
    fn modifier_pressed(&mut self, point: Point);
}

/// Swipe consumer.
pub trait SwipeInputDelegate {
    fn swipe_detected(&mut self, swipe: Swipe);
}

/// Normalizes the enabled input sources into one screen-space event stream.
///
/// Delegates are optional; a missing delegate downgrades the notification to
/// a warning while state keeps advancing, so late registration never sees
/// corrupted gesture state.
pub struct ScreenInputRouter {
    settings: InputSettings,
    touch: Option<TouchCaptureTracker>,
    mouse: Option<MouseTracker>,
    swipe: SwipeDetector,
    delegate: Option<Rc<RefCell<dyn ScreenInputDelegate>>>,
    multi_touch_delegate: Option<Rc<RefCell<dyn MultiTouchInputDelegate>>>,
    swipe_delegate: Option<Rc<RefCell<dyn SwipeInputDelegate>>>,
}

impl ScreenInputRouter {
    pub fn new(settings: InputSettings) -> Self {
        if settings.touch_input_enabled {
            log::info!("touch input enabled");
        }
        if settings.pc_input_enabled {
            log::info!("pc input enabled");
        }

        Self {
            touch: settings.touch_input_enabled.then(TouchCaptureTracker::new),
            mouse: settings.pc_input_enabled.then(MouseTracker::new),
            swipe: SwipeDetector::new(&settings),
            settings,
            delegate: None,
            multi_touch_delegate: None,
            swipe_delegate: None,
        }
    }

    pub fn settings(&self) -> &InputSettings {
        &self.settings
    }

    pub fn set_delegate(&mut self, delegate: Rc<RefCell<dyn ScreenInputDelegate>>) {
        self.delegate = Some(delegate);
    }

    pub fn set_multi_touch_delegate(
        &mut self,
        delegate: Rc<RefCell<dyn MultiTouchInputDelegate>>,
    ) {
        self.multi_touch_delegate = Some(delegate);
    }

    pub fn set_swipe_delegate(&mut self, delegate: Rc<RefCell<dyn SwipeInputDelegate>>) {
        self.swipe_delegate = Some(delegate);
    }

    /// Runs one frame tick.
    ///
    /// `now` is the host frame clock; `touch_samples` and `mouse_sample`
    /// are whatever the enabled sources produced this tick. Samples for a
    /// disabled source are ignored.
    pub fn on_frame(
        &mut self,
        now: Duration,
        touch_samples: &[PointerSample],
        mouse_sample: Option<MouseSample>,
    ) {
        if let Some(touch) = self.touch.as_mut() {
            let mut events: SmallVec<[PointerEvent; 8]> = SmallVec::new();
            touch.on_frame(touch_samples, |event| events.push(event));
            for event in events {
                self.route_pointer_event(event, now);
            }
        }

        if let (Some(mouse), Some(sample)) = (self.mouse.as_mut(), mouse_sample) {
            let mut events: SmallVec<[MouseEvent; 4]> = SmallVec::new();
            mouse.on_frame(sample, |event| events.push(event));
            for event in events {
                self.route_mouse_event(event, now);
            }
        }
    }

    fn route_pointer_event(&mut self, event: PointerEvent, now: Duration) {
        match event.kind {
            PointerEventKind::Entered | PointerEventKind::Moved => {
                self.feed_swipe(event.position, now)
            }
            PointerEventKind::Released => self.swipe.release_points(),
        }

        if event.id.is_primary() {
            self.notify_primary(event.kind, event.position);
        } else {
            self.notify_multi_touch(event.kind, event.position, event.id);
        }
    }

    fn route_mouse_event(&mut self, event: MouseEvent, now: Duration) {
        match event {
            MouseEvent::Pressed(point) => {
                self.feed_swipe(point, now);
                self.notify_primary(PointerEventKind::Entered, point);
            }
            MouseEvent::Dragged(point) => {
                self.feed_swipe(point, now);
                self.notify_primary(PointerEventKind::Moved, point);
            }
            MouseEvent::Released(point) => {
                self.swipe.release_points();
                self.notify_primary(PointerEventKind::Released, point);
            }
            MouseEvent::ModifierPressed(point) => {
                let Some(delegate) = self.multi_touch_delegate.as_ref() else {
                    log::warn!("multi-touch input delegate not set");
                    return;
                };
                delegate.borrow_mut().modifier_pressed(point);
            }
        }
    }

    fn feed_swipe(&mut self, point: Point, now: Duration) {
        let Some(swipe) = self.swipe.add_point(point, now) else {
            return;
        };
        let Some(delegate) = self.swipe_delegate.as_ref() else {
            log::warn!("swipe input delegate not set");
            return;
        };
        delegate.borrow_mut().swipe_detected(swipe);
    }

    fn notify_primary(&self, kind: PointerEventKind, point: Point) {
        let Some(delegate) = self.delegate.as_ref() else {
            log::warn!("screen input delegate not set");
            return;
        };
        let mut delegate = delegate.borrow_mut();
        match kind {
            PointerEventKind::Entered => delegate.entered_point(point),
            PointerEventKind::Moved => delegate.moved_point(point),
            PointerEventKind::Released => delegate.released_point(point),
        }
    }

    fn notify_multi_touch(&self, kind: PointerEventKind, point: Point, id: PointerId) {
        let Some(delegate) = self.multi_touch_delegate.as_ref() else {
            log::warn!("multi-touch input delegate not set");
            return;
        };
        let mut delegate = delegate.borrow_mut();
        match kind {
            PointerEventKind::Entered => delegate.entered_point(point, id),
            PointerEventKind::Moved => delegate.moved_point(point, id),
            PointerEventKind::Released => delegate.released_point(point, id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        primary: Vec<(PointerEventKind, Point)>,
        multi: Vec<(PointerEventKind, Point, PointerId)>,
        modifier: Vec<Point>,
        swipes: Vec<Swipe>,
    }

    impl ScreenInputDelegate for Recorder {
        fn entered_point(&mut self, point: Point) {
            self.primary.push((PointerEventKind::Entered, point));
        }
        fn moved_point(&mut self, point: Point) {
            self.primary.push((PointerEventKind::Moved, point));
        }
        fn released_point(&mut self, point: Point) {
            self.primary.push((PointerEventKind::Released, point));
        }
    }

    impl MultiTouchInputDelegate for Recorder {
        fn entered_point(&mut self, point: Point, id: PointerId) {
            self.multi.push((PointerEventKind::Entered, point, id));
        }
        fn moved_point(&mut self, point: Point, id: PointerId) {
            self.multi.push((PointerEventKind::Moved, point, id));
        }
        fn released_point(&mut self, point: Point, id: PointerId) {
            self.multi.push((PointerEventKind::Released, point, id));
        }
        fn modifier_pressed(&mut self, point: Point) {
            self.modifier.push(point);
        }
    }

    impl SwipeInputDelegate for Recorder {
        fn swipe_detected(&mut self, swipe: Swipe) {
            self.swipes.push(swipe);
        }
    }

    fn recording_router(settings: InputSettings) -> (ScreenInputRouter, Rc<RefCell<Recorder>>) {
        let mut router = ScreenInputRouter::new(settings);
        let recorder = Rc::new(RefCell::new(Recorder::default()));
        router.set_delegate(recorder.clone());
        router.set_multi_touch_delegate(recorder.clone());
        router.set_swipe_delegate(recorder.clone());
        (router, recorder)
    }

    #[test]
    fn primary_and_secondary_events_route_separately() {
        let (mut router, recorder) = recording_router(InputSettings::default());

        router.on_frame(
            Duration::ZERO,
            &[
                PointerSample::began(PointerId::PRIMARY, Point::ZERO),
                PointerSample::began(PointerId::SECONDARY, Point::new(30.0, 0.0)),
            ],
            None,
        );

        let recorder = recorder.borrow();
        assert_eq!(recorder.primary, vec![(PointerEventKind::Entered, Point::ZERO)]);
        assert_eq!(
            recorder.multi,
            vec![(PointerEventKind::Entered, Point::new(30.0, 0.0), PointerId::SECONDARY)]
        );
    }

    #[test]
    fn touch_stream_feeds_swipe_detector() {
        let settings = InputSettings::default().with_swipe_thresholds(50.0, 2000.0);
        let (mut router, recorder) = recording_router(settings);

        router.on_frame(
            Duration::ZERO,
            &[PointerSample::began(PointerId::PRIMARY, Point::ZERO)],
            None,
        );
        router.on_frame(
            Duration::from_millis(20),
            &[PointerSample::moved(PointerId::PRIMARY, Point::new(60.0, 0.0))],
            None,
        );

        let recorder = recorder.borrow();
        assert_eq!(recorder.swipes.len(), 1);
        assert_eq!(recorder.swipes[0].from, Point::ZERO);
        assert_eq!(recorder.swipes[0].to, Point::new(60.0, 0.0));
    }

    #[test]
    fn release_clears_swipe_pivot() {
        let settings = InputSettings::default().with_swipe_thresholds(50.0, 0.0);
        let (mut router, recorder) = recording_router(settings);

        router.on_frame(
            Duration::ZERO,
            &[PointerSample::began(PointerId::PRIMARY, Point::ZERO)],
            None,
        );
        router.on_frame(
            Duration::from_millis(10),
            &[PointerSample::ended(PointerId::PRIMARY, Point::ZERO)],
            None,
        );
        // Far from the released gesture's anchor; only re-anchors.
        router.on_frame(
            Duration::from_millis(20),
            &[PointerSample::began(PointerId::PRIMARY, Point::new(500.0, 0.0))],
            None,
        );

        assert!(recorder.borrow().swipes.is_empty());
    }

    #[test]
    fn mouse_events_route_as_primary() {
        let settings = InputSettings::default()
            .with_touch_input(false)
            .with_pc_input(true);
        let (mut router, recorder) = recording_router(settings);

        router.on_frame(
            Duration::ZERO,
            &[],
            Some(MouseSample::at(Point::new(5.0, 5.0)).pressed()),
        );
        router.on_frame(Duration::from_millis(16), &[], Some(MouseSample::at(Point::new(5.0, 5.0))));

        let recorder = recorder.borrow();
        assert_eq!(
            recorder.primary,
            vec![
                (PointerEventKind::Entered, Point::new(5.0, 5.0)),
                (PointerEventKind::Released, Point::new(5.0, 5.0)),
            ]
        );
    }

    #[test]
    fn modifier_chord_routes_to_multi_touch_delegate_only() {
        let settings = InputSettings::default()
            .with_touch_input(false)
            .with_pc_input(true);
        let (mut router, recorder) = recording_router(settings);

        router.on_frame(
            Duration::ZERO,
            &[],
            Some(MouseSample::at(Point::new(7.0, 7.0)).pressed().with_modifier()),
        );

        let recorder = recorder.borrow();
        assert!(recorder.primary.is_empty());
        assert_eq!(recorder.modifier, vec![Point::new(7.0, 7.0)]);
    }

    #[test]
    fn disabled_touch_source_ignores_touch_samples() {
        let settings = InputSettings::default().with_touch_input(false);
        let (mut router, recorder) = recording_router(settings);

        router.on_frame(
            Duration::ZERO,
            &[PointerSample::began(PointerId::PRIMARY, Point::ZERO)],
            None,
        );

        assert!(recorder.borrow().primary.is_empty());
    }

    #[test]
    fn missing_delegates_never_block_state_updates() {
        // No delegates registered at all: frames still process quietly.
        let mut router = ScreenInputRouter::new(InputSettings::default());
        router.on_frame(
            Duration::ZERO,
            &[PointerSample::began(PointerId::PRIMARY, Point::ZERO)],
            None,
        );
        router.on_frame(
            Duration::from_millis(16),
            &[PointerSample::ended(PointerId::PRIMARY, Point::ZERO)],
            None,
        );
    }
}
