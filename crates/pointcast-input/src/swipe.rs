//! Swipe detection over a single pointer's position stream.
//!
//! A single pivot point anchors the gesture; every incoming point is
//! measured against it. Crossing the distance threshold advances the pivot
//! whether or not the speed test passes, so one slow drag can never be
//! read back later as one fast swipe from a stale anchor.

use std::time::Duration;

use pointcast_geometry::{Point, Vector};

use crate::settings::InputSettings;

/// A detected swipe.
///
/// `direction` runs from the pivot that anchored the gesture to the point
/// that triggered it: the first touch that causes a swipe to be read, not
/// a frame-to-frame delta.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Swipe {
    pub from: Point,
    pub to: Point,
    pub direction: Vector,
}

#[derive(Clone, Copy, Debug)]
struct Pivot {
    point: Point,
    at: Duration,
}

/// Detects swipes from a stream of positions and host frame timestamps.
///
/// One instance serves one logical pointer stream; feed it from the
/// normalized screen events and call [`release_points`] on every release.
///
/// [`release_points`]: SwipeDetector::release_points
pub struct SwipeDetector {
    min_distance: f32,
    min_rate: f32,
    pivot: Option<Pivot>,
}

impl SwipeDetector {
    pub fn new(settings: &InputSettings) -> Self {
        Self {
            min_distance: settings.swipe_min_threshold,
            min_rate: settings.swipe_rate_min_threshold,
            pivot: None,
        }
    }

    /// Feeds one position sample at the host's frame time.
    ///
    /// The first point after construction or [`release_points`] only
    /// anchors the pivot and can never produce a swipe.
    ///
    /// [`release_points`]: SwipeDetector::release_points
    pub fn add_point(&mut self, point: Point, now: Duration) -> Option<Swipe> {
        let Some(pivot) = self.pivot else {
            self.pivot = Some(Pivot { point, at: now });
            return None;
        };

        let distance = pivot.point.distance_to(point);
        if distance < self.min_distance {
            return None;
        }

        // The pivot advances on every distance crossing, even when the move
        // was too slow to report; a repeat detection must re-cross the
        // threshold from here.
        self.pivot = Some(Pivot { point, at: now });

        let delta = now.saturating_sub(pivot.at).as_secs_f32();
        let rate = if delta > 0.0 {
            distance / delta
        } else {
            f32::INFINITY
        };
        log::debug!(
            "swipe candidate: distance {:.1}, delta {:.4}s, rate {:.0} (min {:.0})",
            distance,
            delta,
            rate,
            self.min_rate
        );

        if rate < self.min_rate {
            return None;
        }

        Some(Swipe {
            from: pivot.point,
            to: point,
            direction: point - pivot.point,
        })
    }

    /// Clears the pivot. The next [`add_point`] re-anchors unconditionally.
    ///
    /// [`add_point`]: SwipeDetector::add_point
    pub fn release_points(&mut self) {
        self.pivot = None;
    }
}
