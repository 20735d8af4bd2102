//! Catalog of the USGS real-time GeoJSON summary feeds.
//!
//! USGS publishes one feed per (magnitude class, period) pair, e.g.
//! `all_week` or `4.5_day`. The feeds are regenerated every minute.

use std::fmt;
use std::str::FromStr;

const SUMMARY_BASE_URL: &str = "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary";

/// Lower magnitude bound of a summary feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagnitudeClass {
    /// Events USGS flags as significant, regardless of magnitude.
    Significant,
    M4_5,
    M2_5,
    M1_0,
    /// Every recorded event.
    All,
}

impl MagnitudeClass {
    pub const ALL: [MagnitudeClass; 5] = [
        MagnitudeClass::Significant,
        MagnitudeClass::M4_5,
        MagnitudeClass::M2_5,
        MagnitudeClass::M1_0,
        MagnitudeClass::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MagnitudeClass::Significant => "significant",
            MagnitudeClass::M4_5 => "4.5",
            MagnitudeClass::M2_5 => "2.5",
            MagnitudeClass::M1_0 => "1.0",
            MagnitudeClass::All => "all",
        }
    }
}

/// Time window covered by a summary feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Period {
    Hour,
    Day,
    Week,
    Month,
}

impl Period {
    pub const ALL: [Period; 4] = [Period::Hour, Period::Day, Period::Week, Period::Month];

    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Hour => "hour",
            Period::Day => "day",
            Period::Week => "week",
            Period::Month => "month",
        }
    }
}

/// One USGS summary feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SummaryFeed {
    pub magnitude: MagnitudeClass,
    pub period: Period,
}

impl SummaryFeed {
    pub fn new(magnitude: MagnitudeClass, period: Period) -> Self {
        Self { magnitude, period }
    }

    /// Feed name as used in the USGS URL, e.g. `2.5_day`.
    pub fn name(&self) -> String {
        format!("{}_{}", self.magnitude.as_str(), self.period.as_str())
    }

    pub fn url(&self) -> String {
        format!("{}/{}.geojson", SUMMARY_BASE_URL, self.name())
    }

    /// Every published combination, magnitude class first.
    pub fn all() -> Vec<SummaryFeed> {
        MagnitudeClass::ALL
            .iter()
            .flat_map(|m| Period::ALL.iter().map(move |p| SummaryFeed::new(*m, *p)))
            .collect()
    }
}

impl Default for SummaryFeed {
    /// All events over the past seven days.
    fn default() -> Self {
        Self::new(MagnitudeClass::All, Period::Week)
    }
}

impl fmt::Display for SummaryFeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for SummaryFeed {
    type Err = String;

    /// Parses a feed name such as `all_week` or `4.5_month`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (mag, period) = s
            .rsplit_once('_')
            .ok_or_else(|| format!("feed name '{s}' must look like <magnitude>_<period>"))?;

        let magnitude = MagnitudeClass::ALL
            .into_iter()
            .find(|m| m.as_str() == mag)
            .ok_or_else(|| format!("unknown magnitude class '{mag}'"))?;
        let period = Period::ALL
            .into_iter()
            .find(|p| p.as_str() == period)
            .ok_or_else(|| format!("unknown period '{period}'"))?;

        Ok(SummaryFeed::new(magnitude, period))
    }
}
