//! The four dashboard charts.
//!
//! Each constructor turns the flat record set into a Plotly [`Figure`] bound
//! to the page container it is drawn into.

pub mod figure;
mod histogram;
mod map;
mod scatter;
mod time_series;

pub use figure::Figure;
pub use histogram::magnitude_histogram;
pub use map::world_map;
pub use scatter::magnitude_depth_scatter;
pub use time_series::time_series;

use crate::records::QuakeRecord;

pub(crate) const COLORSCALE: &str = "Viridis";

/// Which chart a figure is, and so which container it renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    WorldMap,
    MagnitudeHistogram,
    TimeSeries,
    MagnitudeDepthScatter,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::WorldMap,
        ChartKind::MagnitudeHistogram,
        ChartKind::TimeSeries,
        ChartKind::MagnitudeDepthScatter,
    ];

    /// DOM id of the element the chart is drawn into.
    pub fn container_id(&self) -> &'static str {
        match self {
            ChartKind::WorldMap => "earthquakeMap",
            ChartKind::MagnitudeHistogram => "magnitudeHistogram",
            ChartKind::TimeSeries => "timeSeries",
            ChartKind::MagnitudeDepthScatter => "magnitudeDepthScatter",
        }
    }
}

#[derive(Debug, Clone)]
pub struct Chart {
    pub kind: ChartKind,
    pub figure: Figure,
}

/// Builds all four charts in dashboard order.
#[tracing::instrument(skip(records), fields(records = records.len()))]
pub fn all_charts(records: &[QuakeRecord]) -> Vec<Chart> {
    ChartKind::ALL
        .iter()
        .map(|kind| match kind {
            ChartKind::WorldMap => world_map(records),
            ChartKind::MagnitudeHistogram => magnitude_histogram(records),
            ChartKind::TimeSeries => time_series(records),
            ChartKind::MagnitudeDepthScatter => magnitude_depth_scatter(records),
        })
        .collect()
}

pub(crate) fn magnitudes(records: &[QuakeRecord]) -> Vec<Option<f64>> {
    records.iter().map(|r| r.magnitude).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_charts_order_matches_containers() {
        let charts = all_charts(&[QuakeRecord::default()]);
        let ids: Vec<_> = charts.iter().map(|c| c.kind.container_id()).collect();
        assert_eq!(
            ids,
            vec![
                "earthquakeMap",
                "magnitudeHistogram",
                "timeSeries",
                "magnitudeDepthScatter"
            ]
        );
    }

    #[test]
    fn test_all_charts_on_empty_records() {
        let charts = all_charts(&[]);
        assert_eq!(charts.len(), 4);
        assert!(charts.iter().all(|c| c.figure.data.len() == 1));
    }
}
