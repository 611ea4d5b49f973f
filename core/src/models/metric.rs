use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The three tiles of the staking dashboard, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MetricKind {
    Liquidity,
    Staked,
    Apr,
}

impl MetricKind {
    pub const ALL: [MetricKind; 3] = [MetricKind::Liquidity, MetricKind::Staked, MetricKind::Apr];

    pub fn title(&self) -> &'static str {
        match self {
            MetricKind::Liquidity => "Liquidity",
            MetricKind::Staked => "Staked",
            MetricKind::Apr => "APR",
        }
    }

    pub fn icon(&self) -> MetricIcon {
        match self {
            MetricKind::Liquidity => MetricIcon::Liquidity,
            MetricKind::Staked => MetricIcon::Staked,
            MetricKind::Apr => MetricIcon::Apr,
        }
    }
}

/// Opaque handle to a presentation asset. Renderers decide what to do with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricIcon {
    Liquidity,
    Staked,
    Apr,
}

impl MetricIcon {
    /// Bundled image path, relative to the app's asset root.
    pub fn asset_path(&self) -> &'static str {
        match self {
            MetricIcon::Liquidity => "assets/liquidity.png",
            MetricIcon::Staked => "assets/staked.png",
            MetricIcon::Apr => "assets/apr.png",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub kind: MetricKind,
    pub title: String,
    pub display_value: String,
    pub icon: MetricIcon,
}

impl Metric {
    pub fn new(kind: MetricKind, display_value: impl Into<String>) -> Self {
        Self {
            kind,
            title: kind.title().to_string(),
            display_value: display_value.into(),
            icon: kind.icon(),
        }
    }
}

/// Ordered output of one pipeline run.
///
/// Either holds all three metrics (Liquidity, Staked, APR) or none;
/// the constructors are the only way in, so partial sets cannot exist.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricsResult {
    metrics: Vec<Metric>,
    pub fetched_at: DateTime<Utc>,
}

impl MetricsResult {
    pub fn complete(liquidity: String, staked: String, apr: String) -> Self {
        Self {
            metrics: vec![
                Metric::new(MetricKind::Liquidity, liquidity),
                Metric::new(MetricKind::Staked, staked),
                Metric::new(MetricKind::Apr, apr),
            ],
            fetched_at: Utc::now(),
        }
    }

    pub fn empty() -> Self {
        Self {
            metrics: Vec::new(),
            fetched_at: Utc::now(),
        }
    }

    pub fn metrics(&self) -> &[Metric] {
        &self.metrics
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn get(&self, kind: MetricKind) -> Option<&Metric> {
        self.metrics.iter().find(|m| m.kind == kind)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Metric> {
        self.metrics.iter()
    }
}

impl<'a> IntoIterator for &'a MetricsResult {
    type Item = &'a Metric;
    type IntoIter = std::slice::Iter<'a, Metric>;

    fn into_iter(self) -> Self::IntoIter {
        self.metrics.iter()
    }
}
