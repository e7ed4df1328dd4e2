// Per-tick presenter payload

use serde::Serialize;

use super::{Metric, Rates, Sample};

/// Everything one tick produced: the raw sample, derived throughput, and the set of
/// metrics currently above their thresholds. Handed to the presenter by value.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickUpdate {
    pub sample: Sample,
    pub rates: Rates,
    pub exceeded: Vec<Metric>,
}
