use super::figure::{Figure, Layout, Marker, MarkerSize, Series, Trace, TraceKind};
use super::{COLORSCALE, Chart, ChartKind, magnitudes};
use crate::records::QuakeRecord;

const POINT_SIZE: f64 = 5.0;

/// Magnitude against hypocentre depth.
pub fn magnitude_depth_scatter(records: &[QuakeRecord]) -> Chart {
    let trace = Trace::new(TraceKind::Scatter)
        .mode("markers")
        .x(Series::Numbers(magnitudes(records)))
        .y(Series::Numbers(records.iter().map(|r| r.depth).collect()))
        .marker(Marker::colored(
            MarkerSize::Fixed(POINT_SIZE),
            magnitudes(records),
            COLORSCALE,
            "Magnitude",
        ));

    Chart {
        kind: ChartKind::MagnitudeDepthScatter,
        figure: Figure {
            data: vec![trace],
            layout: Layout::titled("Magnitude vs Profondeur des séismes")
                .axes("Magnitude", "Profondeur (km)"),
        },
    }
}
