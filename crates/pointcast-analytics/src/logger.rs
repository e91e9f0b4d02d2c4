//! Game-facing analytics logging.

use crate::sink::{AnalyticsSink, ProgressStatus, ResourceFlow};

/// Whether a currency amount was gained or lost.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CurrencyTransaction {
    Gain,
    Lose,
}

/// Formats game events and forwards them to the sink, mirroring each call
/// to the debug log.
pub struct AnalyticsLogger<S: AnalyticsSink> {
    sink: S,
}

impl<S: AnalyticsSink> AnalyticsLogger<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn log_progress(
        &mut self,
        status: ProgressStatus,
        segment1: &str,
        segment2: &str,
        segment3: &str,
        score: Option<i64>,
    ) {
        self.sink
            .progression_event(status, segment1, segment2, segment3, score);
        log::debug!(
            "progress analytic: status {:?}, seg1 {}, seg2 {}, seg3 {}, score {:?}",
            status,
            segment1,
            segment2,
            segment3,
            score
        );
    }

    /// Items travel opposite to the currency: a `Gain` of currency counts
    /// the item as spent, a `Lose` counts it as acquired. Pass empty
    /// strings when no item is involved.
    pub fn log_currency_transaction(
        &mut self,
        transaction: CurrencyTransaction,
        currency: &str,
        amount: f32,
        item_type: &str,
        item_id: &str,
    ) {
        let flow = match transaction {
            CurrencyTransaction::Gain => ResourceFlow::Source,
            CurrencyTransaction::Lose => ResourceFlow::Sink,
        };
        self.sink
            .resource_event(flow, currency, amount, item_type, item_id);
        log::debug!(
            "currency analytic: {:?}, currency {}, amount {}, item_type {}, item_id {}",
            transaction,
            currency,
            amount,
            item_type,
            item_id
        );
    }

    /// Logs a design event identified by `name:segment1:…`.
    ///
    /// Trailing empty segments are dropped; an empty segment followed by a
    /// non-empty one is kept so later segments stay in position.
    pub fn log_custom(&mut self, event_name: &str, segments: &[&str], value: Option<f32>) {
        let event_id = design_event_id(event_name, segments);
        self.sink.design_event(&event_id, value);
        log::debug!("custom analytic: {}, value {:?}", event_id, value);
    }
}

fn design_event_id(event_name: &str, segments: &[&str]) -> String {
    let mut event_id = String::from(event_name);
    if let Some(last) = segments.iter().rposition(|segment| !segment.is_empty()) {
        for segment in &segments[..=last] {
            event_id.push(':');
            event_id.push_str(segment);
        }
    }
    event_id
}
