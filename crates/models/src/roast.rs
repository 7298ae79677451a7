use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

/// How the coffee was processed after picking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoastProcess {
    Washed,
    Natural,
    Honey,
}

impl std::fmt::Display for RoastProcess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RoastProcess::Washed => "washed",
            RoastProcess::Natural => "natural",
            RoastProcess::Honey => "honey",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for RoastProcess {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "washed" => Ok(RoastProcess::Washed),
            "natural" => Ok(RoastProcess::Natural),
            "honey" => Ok(RoastProcess::Honey),
            other => Err(ModelError::Parse(format!("unknown roast process: {other}"))),
        }
    }
}

/// One coffee roast batch: its metadata and the mass-loss metric.
///
/// The persistence layer treats every field as opaque caller input; `date` is
/// kept as the ISO-8601 string it was stored with and `lossPercentage` is
/// never recomputed on the way in or out.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoastRecord {
    pub id: String,
    pub date: String,
    pub origin: String,
    pub process: RoastProcess,
    pub variety: String,
    pub altitude: String,
    pub batch: String,
    pub green_weight: f64,
    pub roasted_weight: f64,
    pub loss_percentage: f64,
    pub machine: String,
    pub notes: String,
}

impl RoastRecord {
    /// Blank record stamped with the current UTC time, ready for the caller
    /// to fill in before saving.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            date: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            origin: String::new(),
            process: RoastProcess::Washed,
            variety: String::new(),
            altitude: String::new(),
            batch: String::new(),
            green_weight: 0.0,
            roasted_weight: 0.0,
            loss_percentage: 0.0,
            machine: String::new(),
            notes: String::new(),
        }
    }

    /// Recompute `loss_percentage` from the current weights.
    pub fn recompute_loss(&mut self) {
        self.loss_percentage = compute_loss(self.green_weight, self.roasted_weight);
    }

    /// Parse the stored `date` string for display purposes.
    pub fn parsed_date(&self) -> Result<DateTime<FixedOffset>, ModelError> {
        DateTime::parse_from_rfc3339(&self.date).map_err(|e| ModelError::Parse(e.to_string()))
    }
}

/// Mass loss in percent: `(green - roasted) / green * 100`, or 0 when there
/// is no green weight to relate to.
pub fn compute_loss(green_weight: f64, roasted_weight: f64) -> f64 {
    if green_weight > 0.0 {
        (green_weight - roasted_weight) / green_weight * 100.0
    } else {
        0.0
    }
}

/// Fresh opaque identifier for a brand-new record.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

/// Caller-side validation mirroring the entry form's mandatory fields. The
/// store itself accepts any record; call this before saving user input.
pub fn validate(record: &RoastRecord) -> Result<(), ModelError> {
    if record.id.trim().is_empty() {
        return Err(ModelError::Validation("id must not be empty".into()));
    }
    if record.origin.trim().is_empty() {
        return Err(ModelError::Validation("origin is required".into()));
    }
    if record.green_weight < 0.0 || record.roasted_weight < 0.0 {
        return Err(ModelError::Validation("weights must be non-negative".into()));
    }
    Ok(())
}
