//! Pointer capture tracking across frame ticks.
//!
//! Pointers are captured on an unoccluded Began and stay captured until
//! Ended, so Moved/Released samples can be matched to a known contact by id.
//! A press that begins over UI is never captured. The host reports an Ended
//! sample even for such presses, so "only release what was captured" also
//! filters those spurious release notifications.

use pointcast_geometry::Point;
use smallvec::SmallVec;

use crate::types::{PointerEvent, PointerEventKind, PointerId, PointerPhase, PointerSample};

/// Whether the primary pointer's eventual release is reported.
///
/// A second pointer appearing while the primary is held takes the gesture
/// over: the primary's release notification is withheld until a primary
/// Moved (or a fresh primary Began) re-arms it. Internal capture state is
/// updated either way; only the outward notification is suppressed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PrimaryRelease {
    Armed,
    Suppressed,
}

#[derive(Clone, Copy, Debug)]
struct CapturedPointer {
    id: PointerId,
    last_position: Point,
}

/// Tracks the set of captured pointers across frames and converts raw phase
/// transitions into enter/move/release events.
pub struct TouchCaptureTracker {
    captured: SmallVec<[CapturedPointer; 4]>,
    primary_release: PrimaryRelease,
}

impl TouchCaptureTracker {
    pub fn new() -> Self {
        Self {
            captured: SmallVec::new(),
            primary_release: PrimaryRelease::Armed,
        }
    }

    /// Processes one frame's worth of samples, emitting normalized events.
    ///
    /// State updates happen regardless of whether anything observes them;
    /// `emit` is a pure notification channel.
    pub fn on_frame(&mut self, samples: &[PointerSample], mut emit: impl FnMut(PointerEvent)) {
        for sample in samples {
            match sample.phase {
                PointerPhase::Began => {
                    if sample.occluded_by_ui {
                        continue;
                    }
                    self.capture(sample.id, sample.position);
                    emit(PointerEvent {
                        id: sample.id,
                        kind: PointerEventKind::Entered,
                        position: sample.position,
                    });
                }
                PointerPhase::Moved => {
                    let Some(captured) =
                        self.captured.iter_mut().find(|c| c.id == sample.id)
                    else {
                        // Update for a pointer we never captured.
                        continue;
                    };
                    captured.last_position = sample.position;
                    if sample.id.is_primary() {
                        self.primary_release = PrimaryRelease::Armed;
                    }
                    emit(PointerEvent {
                        id: sample.id,
                        kind: PointerEventKind::Moved,
                        position: sample.position,
                    });
                }
                PointerPhase::Ended => {
                    if self.release(sample.id) {
                        emit(PointerEvent {
                            id: sample.id,
                            kind: PointerEventKind::Released,
                            position: sample.position,
                        });
                    }
                }
            }
        }
    }

    /// True when the pointer is currently captured.
    pub fn is_captured(&self, id: PointerId) -> bool {
        self.captured.iter().any(|c| c.id == id)
    }

    /// Last position seen for a captured pointer.
    pub fn last_position(&self, id: PointerId) -> Option<Point> {
        self.captured
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.last_position)
    }

    fn capture(&mut self, id: PointerId, position: Point) {
        if self.is_captured(id) {
            return;
        }
        self.captured.push(CapturedPointer {
            id,
            last_position: position,
        });

        if id == PointerId::PRIMARY {
            self.primary_release = PrimaryRelease::Armed;
        } else if id == PointerId::SECONDARY {
            self.primary_release = PrimaryRelease::Suppressed;
        }
    }

    /// Un-captures the pointer. Returns whether a Released event should
    /// fire: false for ids that were never captured, and false for a
    /// suppressed primary release (which is still un-captured internally).
    fn release(&mut self, id: PointerId) -> bool {
        let Some(index) = self.captured.iter().position(|c| c.id == id) else {
            return false;
        };
        self.captured.remove(index);

        if id.is_primary() && self.primary_release == PrimaryRelease::Suppressed {
            return false;
        }
        true
    }

    #[cfg(test)]
    fn captured_ids(&self) -> Vec<PointerId> {
        self.captured.iter().map(|c| c.id).collect()
    }
}

impl Default for TouchCaptureTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(tracker: &mut TouchCaptureTracker, samples: &[PointerSample]) -> Vec<PointerEvent> {
        let mut events = Vec::new();
        tracker.on_frame(samples, |event| events.push(event));
        events
    }

    #[test]
    fn began_captures_and_emits_entered() {
        let mut tracker = TouchCaptureTracker::new();
        let events = collect(
            &mut tracker,
            &[PointerSample::began(PointerId::PRIMARY, Point::new(4.0, 2.0))],
        );

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, PointerEventKind::Entered);
        assert_eq!(events[0].position, Point::new(4.0, 2.0));
        assert!(tracker.is_captured(PointerId::PRIMARY));
    }

    #[test]
    fn occluded_began_is_ignored_entirely() {
        let mut tracker = TouchCaptureTracker::new();
        let events = collect(
            &mut tracker,
            &[PointerSample::began(PointerId::PRIMARY, Point::ZERO).occluded()],
        );

        assert!(events.is_empty());
        assert!(!tracker.is_captured(PointerId::PRIMARY));

        // The host still reports Ended for the occluded press; nothing was
        // captured, so nothing is released.
        let events = collect(
            &mut tracker,
            &[PointerSample::ended(PointerId::PRIMARY, Point::ZERO)],
        );
        assert!(events.is_empty());
    }

    #[test]
    fn moved_only_fires_for_captured_ids() {
        let mut tracker = TouchCaptureTracker::new();
        let events = collect(
            &mut tracker,
            &[PointerSample::moved(PointerId(3), Point::new(1.0, 1.0))],
        );
        assert!(events.is_empty());

        collect(
            &mut tracker,
            &[PointerSample::began(PointerId(3), Point::ZERO)],
        );
        let events = collect(
            &mut tracker,
            &[PointerSample::moved(PointerId(3), Point::new(1.0, 1.0))],
        );
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, PointerEventKind::Moved);
        assert_eq!(tracker.last_position(PointerId(3)), Some(Point::new(1.0, 1.0)));
    }

    #[test]
    fn ended_uncaptures_and_emits_released() {
        let mut tracker = TouchCaptureTracker::new();
        collect(
            &mut tracker,
            &[PointerSample::began(PointerId::PRIMARY, Point::ZERO)],
        );
        let events = collect(
            &mut tracker,
            &[PointerSample::ended(PointerId::PRIMARY, Point::new(9.0, 0.0))],
        );

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, PointerEventKind::Released);
        assert!(!tracker.is_captured(PointerId::PRIMARY));
    }

    #[test]
    fn second_touch_suppresses_primary_release() {
        let mut tracker = TouchCaptureTracker::new();
        collect(
            &mut tracker,
            &[PointerSample::began(PointerId::PRIMARY, Point::ZERO)],
        );
        collect(
            &mut tracker,
            &[PointerSample::began(PointerId::SECONDARY, Point::new(50.0, 0.0))],
        );

        let events = collect(
            &mut tracker,
            &[PointerSample::ended(PointerId::PRIMARY, Point::ZERO)],
        );
        assert!(events.is_empty());
        // Internal state reflects reality even though nothing was reported.
        assert!(!tracker.is_captured(PointerId::PRIMARY));
        assert!(tracker.is_captured(PointerId::SECONDARY));
    }

    #[test]
    fn primary_move_rearms_release_reporting() {
        let mut tracker = TouchCaptureTracker::new();
        collect(
            &mut tracker,
            &[PointerSample::began(PointerId::PRIMARY, Point::ZERO)],
        );
        collect(
            &mut tracker,
            &[PointerSample::began(PointerId::SECONDARY, Point::new(50.0, 0.0))],
        );
        collect(
            &mut tracker,
            &[PointerSample::moved(PointerId::PRIMARY, Point::new(2.0, 0.0))],
        );

        let events = collect(
            &mut tracker,
            &[PointerSample::ended(PointerId::PRIMARY, Point::new(2.0, 0.0))],
        );
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, PointerEventKind::Released);
    }

    #[test]
    fn duplicate_began_does_not_duplicate_capture() {
        let mut tracker = TouchCaptureTracker::new();
        collect(
            &mut tracker,
            &[PointerSample::began(PointerId::PRIMARY, Point::ZERO)],
        );
        collect(
            &mut tracker,
            &[PointerSample::began(PointerId::PRIMARY, Point::new(1.0, 0.0))],
        );

        assert_eq!(tracker.captured_ids(), vec![PointerId::PRIMARY]);
    }

    #[test]
    fn pointers_are_matched_by_id_not_list_position() {
        let mut tracker = TouchCaptureTracker::new();
        collect(
            &mut tracker,
            &[
                PointerSample::began(PointerId(0), Point::ZERO),
                PointerSample::began(PointerId(2), Point::new(10.0, 0.0)),
            ],
        );

        // Same pointers, opposite list order.
        let events = collect(
            &mut tracker,
            &[
                PointerSample::moved(PointerId(2), Point::new(11.0, 0.0)),
                PointerSample::moved(PointerId(0), Point::new(1.0, 0.0)),
            ],
        );

        assert_eq!(events.len(), 2);
        assert_eq!(tracker.last_position(PointerId(2)), Some(Point::new(11.0, 0.0)));
        assert_eq!(tracker.last_position(PointerId(0)), Some(Point::new(1.0, 0.0)));
    }

    #[test]
    fn captured_set_matches_last_phases() {
        let mut tracker = TouchCaptureTracker::new();
        collect(
            &mut tracker,
            &[
                PointerSample::began(PointerId(0), Point::ZERO),
                PointerSample::began(PointerId(2), Point::new(5.0, 5.0)),
                PointerSample::began(PointerId(4), Point::new(9.0, 9.0)).occluded(),
            ],
        );
        collect(
            &mut tracker,
            &[
                PointerSample::moved(PointerId(0), Point::new(1.0, 0.0)),
                PointerSample::ended(PointerId(2), Point::new(5.0, 5.0)),
            ],
        );

        assert_eq!(tracker.captured_ids(), vec![PointerId(0)]);
    }
}
