use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::records::{QuakeRecord, daily_counts};

/// One-row summary of a fetched feed, suitable for CSV logging.
#[derive(Debug, Default, Serialize)]
pub struct FeedSummary {
    pub timestamp: DateTime<Utc>,
    pub source: Option<String>,
    pub total_events: usize,

    // completeness
    pub with_magnitude: usize,
    pub with_coordinates: usize,
    pub with_time: usize,

    // magnitude
    pub magnitude_mean: Option<f64>,
    pub magnitude_stddev: Option<f64>,
    pub magnitude_min: Option<f64>,
    pub magnitude_max: Option<f64>,

    // depth and time window
    pub depth_max: Option<f64>,
    pub earliest: Option<DateTime<Utc>>,
    pub latest: Option<DateTime<Utc>>,
    pub days: usize,

    // error tracking
    pub error_type: Option<String>,
    pub error_message: Option<String>,
}

impl FeedSummary {
    pub fn from_records(records: &[QuakeRecord]) -> Self {
        let mut s = FeedSummary {
            timestamp: Utc::now(),
            total_events: records.len(),
            ..Default::default()
        };

        let mags: Vec<f64> = records.iter().filter_map(|r| r.magnitude).collect();
        s.with_magnitude = mags.len();
        if !mags.is_empty() {
            let avg = mean(&mags);
            s.magnitude_mean = Some(avg);
            s.magnitude_stddev = Some(stddev(&mags, avg));
            s.magnitude_min = mags.iter().copied().reduce(f64::min);
            s.magnitude_max = mags.iter().copied().reduce(f64::max);
        }

        for r in records {
            if r.has_coordinates() {
                s.with_coordinates += 1;
            }

            if let Some(d) = r.depth {
                s.depth_max = Some(s.depth_max.map_or(d, |m| m.max(d)));
            }

            if let Some(t) = r.time {
                s.with_time += 1;
                s.earliest = Some(s.earliest.map_or(t, |e| e.min(t)));
                s.latest = Some(s.latest.map_or(t, |l| l.max(t)));
            }
        }

        s.days = daily_counts(records).len();
        s
    }

    pub fn pct(part: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            (part as f64 / total as f64) * 100.0
        }
    }

    pub fn magnitude_pct(&self) -> f64 {
        Self::pct(self.with_magnitude, self.total_events)
    }

    /// Create an error record with timestamp and error information
    pub fn from_error(error_type: &str, error_message: &str) -> Self {
        FeedSummary {
            timestamp: Utc::now(),
            error_type: Some(error_type.to_string()),
            error_message: Some(error_message.to_string()),
            ..Default::default()
        }
    }

    pub fn with_source(mut self, source: &str) -> Self {
        self.source = Some(source.to_string());
        self
    }
}

/// Arithmetic mean. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation given a pre-computed mean.
/// Returns 0.0 for empty input.
pub fn stddev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    variance.sqrt()
}
