use super::figure::{Figure, Layout, Series, Trace, TraceKind};
use super::{Chart, ChartKind, magnitudes};
use crate::records::QuakeRecord;

/// Distribution of magnitudes. Binning is left to plotly.js.
pub fn magnitude_histogram(records: &[QuakeRecord]) -> Chart {
    let trace = Trace::new(TraceKind::Histogram).x(Series::Numbers(magnitudes(records)));

    Chart {
        kind: ChartKind::MagnitudeHistogram,
        figure: Figure {
            data: vec![trace],
            layout: Layout::titled("Distribution des magnitudes des séismes")
                .axes("Magnitude", "Nombre de séismes"),
        },
    }
}
