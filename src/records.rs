//! Flat per-event records derived from the feed.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

use crate::parser::{Feature, FeatureCollection};

/// One earthquake, flattened out of its GeoJSON feature.
///
/// Fields are `None` when the upstream entry lacks them; records are never
/// dropped for being incomplete.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QuakeRecord {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub magnitude: Option<f64>,
    pub time: Option<DateTime<Utc>>,
    /// Kilometres below the surface.
    pub depth: Option<f64>,
}

impl QuakeRecord {
    pub fn from_feature(feature: &Feature) -> Self {
        let coord = |i: usize| {
            feature
                .geometry
                .as_ref()
                .and_then(|g| g.coordinates.get(i).copied().flatten())
        };

        QuakeRecord {
            latitude: coord(1),
            longitude: coord(0),
            magnitude: feature.properties.mag,
            time: feature
                .properties
                .time
                .and_then(DateTime::from_timestamp_millis),
            depth: coord(2),
        }
    }

    /// UTC calendar day the event occurred on.
    pub fn day(&self) -> Option<NaiveDate> {
        self.time.map(|t| t.date_naive())
    }

    pub fn has_coordinates(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some() && self.depth.is_some()
    }
}

/// Maps every feature to a record, preserving order and count.
pub fn process_data(feed: &FeatureCollection) -> Vec<QuakeRecord> {
    feed.features.iter().map(QuakeRecord::from_feature).collect()
}

/// Counts events per UTC day, oldest day first.
///
/// Records without a timestamp are not counted.
pub fn daily_counts(records: &[QuakeRecord]) -> BTreeMap<NaiveDate, usize> {
    let mut occurrences = BTreeMap::new();
    for day in records.iter().filter_map(QuakeRecord::day) {
        *occurrences.entry(day).or_insert(0) += 1;
    }
    occurrences
}
