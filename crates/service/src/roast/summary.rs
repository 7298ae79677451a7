use models::roast::RoastRecord;
use serde::Serialize;

/// Aggregate view over the whole collection, as shown on the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoastSummary {
    pub total: usize,
    pub average_loss: f64,
    pub latest_origin: Option<String>,
}

/// New records are inserted at the front, so the first record is the most
/// recently added one.
pub fn summarize(records: &[RoastRecord]) -> RoastSummary {
    let total = records.len();
    let average_loss = if total > 0 {
        records.iter().map(|r| r.loss_percentage).sum::<f64>() / total as f64
    } else {
        0.0
    };
    RoastSummary {
        total,
        average_loss,
        latest_origin: records.first().map(|r| r.origin.clone()),
    }
}
