//! Standalone HTML dashboard and per-chart figure export.

use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::charts::Chart;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";
pub const DASHBOARD_FILE: &str = "index.html";

/// Serializes a value for inclusion inside a `<script>` element.
fn script_json(value: &impl serde::Serialize) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Renders a page with one container per chart and the `Plotly.newPlot`
/// calls that fill them.
pub fn render_dashboard(charts: &[Chart], title: &str) -> Result<String> {
    let title = escape_html(title);
    let mut html = String::new();

    writeln!(html, "<!DOCTYPE html>")?;
    writeln!(html, "<html lang=\"fr\">")?;
    writeln!(html, "<head>")?;
    writeln!(html, "  <meta charset=\"utf-8\">")?;
    writeln!(html, "  <title>{title}</title>")?;
    writeln!(html, "  <script src=\"{PLOTLY_CDN}\"></script>")?;
    writeln!(html, "</head>")?;
    writeln!(html, "<body>")?;
    writeln!(html, "  <h1>{title}</h1>")?;
    for chart in charts {
        writeln!(
            html,
            "  <div id=\"{}\" style=\"width:100%;height:500px;\"></div>",
            chart.kind.container_id()
        )?;
    }
    writeln!(html, "  <script>")?;
    for chart in charts {
        writeln!(
            html,
            "    Plotly.newPlot('{}', {}, {});",
            chart.kind.container_id(),
            script_json(&chart.figure.data)?,
            script_json(&chart.figure.layout)?
        )?;
    }
    writeln!(html, "  </script>")?;
    writeln!(html, "</body>")?;
    writeln!(html, "</html>")?;

    Ok(html)
}

/// Writes `index.html` into `dir`, creating the directory if needed.
pub fn write_dashboard(dir: &Path, charts: &[Chart], title: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let path = dir.join(DASHBOARD_FILE);
    let html = render_dashboard(charts, title)?;
    fs::write(&path, html).with_context(|| format!("writing {}", path.display()))?;

    info!(path = %path.display(), charts = charts.len(), "Dashboard written");
    Ok(path)
}

/// Writes each figure as `{container_id}.json` into `dir`.
pub fn write_figures(dir: &Path, charts: &[Chart]) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;

    let mut paths = Vec::with_capacity(charts.len());
    for chart in charts {
        let path = dir.join(format!("{}.json", chart.kind.container_id()));
        let body = serde_json::to_vec_pretty(&chart.figure)?;
        fs::write(&path, body).with_context(|| format!("writing {}", path.display()))?;
        debug!(path = %path.display(), "Figure written");
        paths.push(path);
    }

    Ok(paths)
}
