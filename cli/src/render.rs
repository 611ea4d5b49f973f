use std::io::Write;

use corelib::{Metric, MetricsResult};
use engine::MetricsSink;

use crate::cli::OutputFormat;

const TILE_GAP: usize = 4;

/// Prints each result as three tiles: icon handle, title, value.
/// An empty result prints nothing; the failure is already in the logs.
pub struct TileRenderer<W> {
    out: W,
}

impl<W: Write> TileRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn render(&mut self, result: &MetricsResult) -> std::io::Result<()> {
        if result.is_empty() {
            return Ok(());
        }

        let icons: Vec<String> = result
            .iter()
            .map(|m| format!("[{}]", icon_label(m)))
            .collect();
        let widths: Vec<usize> = result
            .iter()
            .zip(&icons)
            .map(|(m, icon)| {
                icon.len()
                    .max(m.title.len())
                    .max(m.display_value.chars().count())
            })
            .collect();

        let rows: [Vec<&str>; 3] = [
            icons.iter().map(String::as_str).collect(),
            result.iter().map(|m| m.title.as_str()).collect(),
            result.iter().map(|m| m.display_value.as_str()).collect(),
        ];

        for row in rows {
            let line = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{cell:<w$}", w = *w + TILE_GAP))
                .collect::<String>();
            writeln!(self.out, "{}", line.trim_end())?;
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

fn icon_label(m: &Metric) -> &'static str {
    let path = m.icon.asset_path();
    path.rsplit('/')
        .next()
        .and_then(|f| f.strip_suffix(".png"))
        .unwrap_or(path)
}

impl<W: Write + Send> MetricsSink for TileRenderer<W> {
    fn publish(&mut self, result: &MetricsResult) {
        if let Err(e) = self.render(result) {
            tracing::warn!(error = %e, "failed to render metrics");
        }
    }
}

/// One compact JSON document per line.
pub struct JsonRenderer<W> {
    out: W,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write + Send> MetricsSink for JsonRenderer<W> {
    fn publish(&mut self, result: &MetricsResult) {
        let written = serde_json::to_string(result)
            .map_err(std::io::Error::from)
            .and_then(|json| writeln!(self.out, "{json}"))
            .and_then(|_| self.out.flush());

        if let Err(e) = written {
            tracing::warn!(error = %e, "failed to write metrics json");
        }
    }
}

pub fn sink_for(format: OutputFormat) -> Box<dyn MetricsSink> {
    match format {
        OutputFormat::Tiles => Box::new(TileRenderer::new(std::io::stdout())),
        OutputFormat::Json => Box::new(JsonRenderer::new(std::io::stdout())),
    }
}
