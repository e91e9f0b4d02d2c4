//! External analytics SDK boundary.

/// Progression lifecycle states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProgressStatus {
    Start,
    Complete,
    Fail,
}

/// Direction of a resource flow: `Source` adds to the player's balance,
/// `Sink` removes from it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResourceFlow {
    Source,
    Sink,
}

/// Delivery boundary for analytics events.
///
/// Implementations wrap whatever SDK or transport the host uses. Calls run
/// inside the frame and must not block.
pub trait AnalyticsSink {
    /// Progression event: up to three hierarchy segments and an optional
    /// score.
    fn progression_event(
        &mut self,
        status: ProgressStatus,
        segment1: &str,
        segment2: &str,
        segment3: &str,
        score: Option<i64>,
    );

    /// Resource (currency) event.
    fn resource_event(
        &mut self,
        flow: ResourceFlow,
        currency: &str,
        amount: f32,
        item_type: &str,
        item_id: &str,
    );

    /// Free-form design event, identified by a colon-joined id.
    fn design_event(&mut self, event_id: &str, value: Option<f32>);
}

impl<S: AnalyticsSink + ?Sized> AnalyticsSink for &mut S {
    fn progression_event(
        &mut self,
        status: ProgressStatus,
        segment1: &str,
        segment2: &str,
        segment3: &str,
        score: Option<i64>,
    ) {
        (**self).progression_event(status, segment1, segment2, segment3, score)
    }

    fn resource_event(
        &mut self,
        flow: ResourceFlow,
        currency: &str,
        amount: f32,
        item_type: &str,
        item_id: &str,
    ) {
        (**self).resource_event(flow, currency, amount, item_type, item_id)
    }

    fn design_event(&mut self, event_id: &str, value: Option<f32>) {
        (**self).design_event(event_id, value)
    }
}
