use super::figure::{Figure, Layout, Series, Trace, TraceKind};
use super::{Chart, ChartKind};
use crate::records::{QuakeRecord, daily_counts};

/// Number of events per UTC day.
pub fn time_series(records: &[QuakeRecord]) -> Chart {
    let occurrences = daily_counts(records);

    let dates = occurrences
        .keys()
        .map(|d| d.format("%Y-%m-%d").to_string())
        .collect();
    let counts = occurrences.values().copied().collect();

    let trace = Trace::new(TraceKind::Scatter)
        .mode("lines+markers")
        .x(Series::Labels(dates))
        .y(Series::Counts(counts));

    Chart {
        kind: ChartKind::TimeSeries,
        figure: Figure {
            data: vec![trace],
            layout: Layout::titled("Occurrences de séismes par jour")
                .axes("Date", "Nombre de séismes"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use serde_json::json;

    fn at(y: i32, m: u32, d: u32, h: u32) -> QuakeRecord {
        QuakeRecord {
            time: Some(Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()),
            ..Default::default()
        }
    }

    #[test]
    fn test_time_series_counts_per_day() {
        // Feed order is newest first; the series comes out oldest first.
        let records = vec![
            at(2024, 3, 2, 23),
            at(2024, 3, 2, 1),
            at(2024, 3, 1, 12),
            QuakeRecord::default(),
        ];

        let value = serde_json::to_value(&time_series(&records).figure).unwrap();
        let trace = &value["data"][0];
        assert_eq!(trace["type"], "scatter");
        assert_eq!(trace["mode"], "lines+markers");
        assert_eq!(trace["x"], json!(["2024-03-01", "2024-03-02"]));
        assert_eq!(trace["y"], json!([1, 2]));
        assert_eq!(value["layout"]["title"]["text"], "Occurrences de séismes par jour");
        assert_eq!(value["layout"]["xaxis"]["title"]["text"], "Date");
    }
}
