//! Plotly figure model.
//!
//! Mirrors the subset of the plotly.js JSON schema the dashboard uses. A
//! serialized [`Figure`] can be handed straight to `Plotly.newPlot`.

use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Scattergeo,
    Histogram,
    Scatter,
}

/// Values along one trace dimension. Missing entries serialize as `null`,
/// which plotly.js skips.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Series {
    Numbers(Vec<Option<f64>>),
    Labels(Vec<String>),
    Counts(Vec<usize>),
}

#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: TraceKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<Series>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<Series>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lon: Option<Series>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lat: Option<Series>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl Trace {
    pub fn new(kind: TraceKind) -> Self {
        Self {
            kind,
            mode: None,
            x: None,
            y: None,
            lon: None,
            lat: None,
            text: None,
            marker: None,
        }
    }

    pub fn mode(mut self, mode: &str) -> Self {
        self.mode = Some(mode.to_string());
        self
    }

    pub fn x(mut self, x: Series) -> Self {
        self.x = Some(x);
        self
    }

    pub fn y(mut self, y: Series) -> Self {
        self.y = Some(y);
        self
    }

    pub fn marker(mut self, marker: Marker) -> Self {
        self.marker = Some(marker);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerSize {
    Fixed(f64),
    PerPoint(Vec<Option<f64>>),
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub size: MarkerSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Vec<Option<f64>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorscale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
}

impl Marker {
    /// Marker coloured by `values` on `colorscale`, with a titled colour bar.
    pub fn colored(
        size: MarkerSize,
        values: Vec<Option<f64>>,
        colorscale: &str,
        bar_title: &str,
    ) -> Self {
        Self {
            size,
            color: Some(values),
            colorscale: Some(colorscale.to_string()),
            colorbar: Some(ColorBar {
                title: Title::new(bar_title),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ColorBar {
    pub title: Title,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: Title,
}

impl Axis {
    pub fn titled(text: &str) -> Self {
        Self {
            title: Title::new(text),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Projection {
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Geo {
    pub projection: Projection,
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: Title,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub geo: Option<Geo>,
}

impl Layout {
    pub fn titled(title: &str) -> Self {
        Self {
            title: Title::new(title),
            xaxis: None,
            yaxis: None,
            geo: None,
        }
    }

    pub fn axes(mut self, x: &str, y: &str) -> Self {
        self.xaxis = Some(Axis::titled(x));
        self.yaxis = Some(Axis::titled(y));
        self
    }
}
