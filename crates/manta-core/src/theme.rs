use crate::config::ScatterConfig;
use rustc_hash::FxHashMap;

/// The classic 10-color categorical palette used by the original
/// visualization.
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub background: String,
    /// Tick labels, legend labels.
    pub text_color: String,
    pub axis_color: String,
    pub marker_fill: String,
    pub palette: Vec<String>,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            background: "white".to_string(),
            text_color: "#333".to_string(),
            axis_color: "#333".to_string(),
            marker_fill: "#FFFFFF".to_string(),
            palette: CATEGORY10.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Theme {
    pub fn from_config(config: &ScatterConfig) -> Self {
        let base = Self::default();
        let palette = config
            .get_str("themeVariables.plotColorPalette")
            .map(|raw| {
                raw.split(',')
                    .map(|c| c.trim().to_string())
                    .filter(|c| !c.is_empty())
                    .collect::<Vec<_>>()
            })
            .filter(|p| !p.is_empty())
            .unwrap_or(base.palette);

        Self {
            background: config
                .get_str("themeVariables.background")
                .unwrap_or(&base.background)
                .to_string(),
            text_color: config
                .get_str("themeVariables.textColor")
                .unwrap_or(&base.text_color)
                .to_string(),
            axis_color: config
                .get_str("themeVariables.axisColor")
                .unwrap_or(&base.axis_color)
                .to_string(),
            marker_fill: base.marker_fill,
            palette,
        }
    }

    pub fn color_scale(&self) -> ColorScale {
        ColorScale::new(self.palette.clone())
    }
}

/// Ordinal color assignment: ids get palette colors in first-seen order and
/// keep them for the lifetime of the scale, cycling once the palette is
/// exhausted. The legend and the markers share one instance so their colors
/// agree by construction.
#[derive(Debug, Clone)]
pub struct ColorScale {
    palette: Vec<String>,
    mapping: FxHashMap<String, usize>,
    next: usize,
}

impl ColorScale {
    pub fn new(palette: Vec<String>) -> Self {
        Self {
            palette,
            mapping: FxHashMap::default(),
            next: 0,
        }
    }

    pub fn color_for(&mut self, id: &str) -> String {
        if self.palette.is_empty() {
            return String::new();
        }
        if let Some(idx) = self.mapping.get(id).copied() {
            return self.palette[idx % self.palette.len()].clone();
        }
        let idx = self.next;
        self.next += 1;
        self.mapping.insert(id.to_string(), idx);
        self.palette[idx % self.palette.len()].clone()
    }
}
