#![forbid(unsafe_code)]

//! Scatter-view data model (headless).
//!
//! Design goals:
//! - deterministic, testable outputs (the same CSV always yields the same
//!   dataset, and downstream the same layout and SVG)
//! - runtime-agnostic async APIs (no specific executor required)
//! - an explicit, immutable [`ViewConfig`] instead of module-level state

pub mod config;
mod csv;
pub mod dataset;
pub mod error;
pub mod geom;
pub mod scale;
pub mod theme;

pub use config::{Margins, ScatterConfig, ViewConfig};
pub use dataset::{DataPoint, Dataset, cluster_order};
pub use error::{Error, Result};
pub use scale::LinearScale;
pub use theme::{ColorScale, Theme};

#[derive(Debug, Clone, Copy, Default)]
pub struct LoadOptions {
    /// Skip malformed CSV records instead of failing the whole load.
    pub skip_invalid_rows: bool,
}

impl LoadOptions {
    /// Strict loading (the first malformed record is an error).
    pub fn strict() -> Self {
        Self {
            skip_invalid_rows: false,
        }
    }

    /// Lenient loading: malformed records are dropped, matching the original
    /// visualization's low-ceremony failure posture.
    pub fn lenient() -> Self {
        Self {
            skip_invalid_rows: true,
        }
    }
}

/// Entry point tying configuration to dataset loading.
///
/// The engine owns the site config (an arbitrary JSON object, deep-merged
/// from caller overrides) and derives the typed [`ViewConfig`] and [`Theme`]
/// from it on demand.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    site_config: ScatterConfig,
}

impl Engine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_site_config(mut self, config: ScatterConfig) -> Self {
        self.site_config.deep_merge(config.as_value());
        self
    }

    pub fn site_config(&self) -> &ScatterConfig {
        &self.site_config
    }

    pub fn view_config(&self) -> ViewConfig {
        ViewConfig::from_config(&self.site_config)
    }

    pub fn theme(&self) -> Theme {
        Theme::from_config(&self.site_config)
    }

    /// Synchronous variant of [`Engine::load_dataset`]. Parsing is CPU-bound
    /// and performs no I/O.
    pub fn load_dataset_sync(&self, text: &str, options: LoadOptions) -> Result<Dataset> {
        let points = csv::parse_points(text, options)?;
        tracing::debug!(rows = points.len(), "loaded CSV records");
        Ok(Dataset::from_points(points))
    }

    /// Loads and sorts a dataset from CSV text. The single load completing is
    /// what triggers the entire render downstream.
    pub async fn load_dataset(&self, text: &str, options: LoadOptions) -> Result<Dataset> {
        self.load_dataset_sync(text, options)
    }
}

#[cfg(test)]
mod tests;
