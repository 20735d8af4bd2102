use super::figure::{Figure, Geo, Layout, Marker, MarkerSize, Projection, Series, Trace, TraceKind};
use super::{COLORSCALE, Chart, ChartKind, magnitudes};
use crate::records::QuakeRecord;

/// Event locations on a world map, sized and coloured by magnitude.
pub fn world_map(records: &[QuakeRecord]) -> Chart {
    let text = records
        .iter()
        .map(|r| match r.magnitude {
            Some(m) => format!("Magnitude: {m}"),
            None => "Magnitude: null".to_string(),
        })
        .collect();

    // Plotly rejects negative marker sizes; micro-quakes can have mag < 0.
    let sizes = records
        .iter()
        .map(|r| r.magnitude.map(|m| (m * 2.0).max(0.0)))
        .collect();

    let mut trace = Trace::new(TraceKind::Scattergeo).mode("markers").marker(Marker::colored(
        MarkerSize::PerPoint(sizes),
        magnitudes(records),
        COLORSCALE,
        "Magnitude",
    ));
    trace.text = Some(text);
    trace.lon = Some(Series::Numbers(records.iter().map(|r| r.longitude).collect()));
    trace.lat = Some(Series::Numbers(records.iter().map(|r| r.latitude).collect()));

    let mut layout = Layout::titled("Emplacements des séismes");
    layout.geo = Some(Geo {
        projection: Projection {
            kind: "natural earth".to_string(),
        },
    });

    Chart {
        kind: ChartKind::WorldMap,
        figure: Figure {
            data: vec![trace],
            layout,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(lon: f64, lat: f64, mag: Option<f64>) -> QuakeRecord {
        QuakeRecord {
            longitude: Some(lon),
            latitude: Some(lat),
            magnitude: mag,
            ..Default::default()
        }
    }

    #[test]
    fn test_world_map_trace() {
        let chart = world_map(&[record(10.5, -5.2, Some(4.3)), record(1.0, 2.0, None)]);
        assert_eq!(chart.kind, ChartKind::WorldMap);

        let value = serde_json::to_value(&chart.figure).unwrap();
        let trace = &value["data"][0];
        assert_eq!(trace["type"], "scattergeo");
        assert_eq!(trace["mode"], "markers");
        assert_eq!(trace["lon"], json!([10.5, 1.0]));
        assert_eq!(trace["lat"], json!([-5.2, 2.0]));
        assert_eq!(trace["text"], json!(["Magnitude: 4.3", "Magnitude: null"]));
        assert_eq!(trace["marker"]["size"], json!([8.6, null]));
        assert_eq!(trace["marker"]["color"], json!([4.3, null]));
        assert_eq!(trace["marker"]["colorscale"], "Viridis");
        assert_eq!(trace["marker"]["colorbar"]["title"]["text"], "Magnitude");
    }

    #[test]
    fn test_world_map_layout() {
        let value = serde_json::to_value(&world_map(&[]).figure).unwrap();
        assert_eq!(value["layout"]["title"]["text"], "Emplacements des séismes");
        assert_eq!(value["layout"]["geo"]["projection"]["type"], "natural earth");
    }

    #[test]
    fn test_negative_magnitude_gets_zero_size() {
        let chart = world_map(&[record(0.0, 0.0, Some(-0.4))]);
        let marker = chart.figure.data[0].marker.as_ref().unwrap();
        assert_eq!(marker.size, MarkerSize::PerPoint(vec![Some(0.0)]));
    }
}
