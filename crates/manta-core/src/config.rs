use crate::scale::LinearScale;
use serde_json::{Map, Value};

/// JSON-value-backed configuration overrides.
///
/// Callers hand the engine an arbitrary JSON object (typically read from a
/// `--config` file); view and theme settings are looked up by dotted path with
/// per-field fallback to defaults, so unknown keys are ignored rather than
/// rejected.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterConfig(Value);

impl Default for ScatterConfig {
    fn default() -> Self {
        Self::empty_object()
    }
}

impl ScatterConfig {
    pub fn empty_object() -> Self {
        Self(Value::Object(Map::new()))
    }

    pub fn from_value(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn get_str(&self, dotted_path: &str) -> Option<&str> {
        self.get(dotted_path)?.as_str()
    }

    pub fn get_f64(&self, dotted_path: &str) -> Option<f64> {
        let v = self.get(dotted_path)?;
        v.as_f64()
            .or_else(|| v.as_i64().map(|n| n as f64))
            .or_else(|| v.as_u64().map(|n| n as f64))
    }

    pub fn get_usize(&self, dotted_path: &str) -> Option<usize> {
        self.get(dotted_path)?.as_u64().map(|n| n as usize)
    }

    fn get(&self, dotted_path: &str) -> Option<&Value> {
        let mut cur = &self.0;
        for segment in dotted_path.split('.') {
            cur = cur.as_object()?.get(segment)?;
        }
        Some(cur)
    }

    pub fn set_value(&mut self, dotted_path: &str, value: Value) {
        // Callers can construct a `ScatterConfig` from any JSON value via
        // `from_value`. Configs are objects; coerce anything else so this API
        // never panics on user input.
        if !self.0.is_object() {
            self.0 = Value::Object(Map::new());
        }

        let Value::Object(ref mut root) = self.0 else {
            return;
        };
        let mut cur: &mut Map<String, Value> = root;
        let mut segments = dotted_path.split('.').peekable();
        while let Some(seg) = segments.next() {
            if segments.peek().is_none() {
                cur.insert(seg.to_string(), value);
                return;
            }
            let slot = cur.entry(seg).or_insert_with(|| Value::Object(Map::new()));
            if !slot.is_object() {
                *slot = Value::Object(Map::new());
            }
            let Some(next) = slot.as_object_mut() else {
                return;
            };
            cur = next;
        }
    }

    pub fn deep_merge(&mut self, other: &Value) {
        deep_merge_value(&mut self.0, other);
    }
}

fn deep_merge_value(base: &mut Value, incoming: &Value) {
    match (base, incoming) {
        (Value::Object(base_map), Value::Object(incoming_map)) => {
            for (k, v) in incoming_map {
                match base_map.get_mut(k) {
                    Some(slot) => deep_merge_value(slot, v),
                    None => {
                        base_map.insert(k.clone(), v.clone());
                    }
                }
            }
        }
        (base_slot, incoming) => {
            *base_slot = incoming.clone();
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Immutable view geometry and interaction timing, passed explicitly into
/// layout and rendering. There is no module-level mutable state anywhere in
/// the pipeline; everything a render needs travels through this value.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewConfig {
    /// Total canvas size, margins included.
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    /// Vertical band reserved at the bottom of the plot for the x axis.
    pub axis_band: f64,

    pub resting_radius: f64,
    pub hover_radius: f64,
    pub resting_opacity: f64,
    pub hover_opacity: f64,

    pub enter_duration_ms: f64,
    pub exit_duration_ms: f64,
    /// Guide lines start fading in this long after pointer enter.
    pub guide_delay_ms: f64,
    pub guide_fade_ms: f64,
    pub guide_exit_fade_ms: f64,
    pub guide_opacity: f64,

    pub x_domain: (f64, f64),
    pub y_domain: (f64, f64),
    pub tick_count: usize,

    pub legend_start_x: f64,
    pub legend_pitch_x: f64,
    pub legend_swatch_width: f64,
    pub legend_swatch_height: f64,

    /// `{name}` is replaced with the unit name. Image existence is never
    /// validated; broken references are the asset pipeline's concern.
    pub image_path_template: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            width: 1800.0,
            height: 900.0,
            margins: Margins {
                top: 30.0,
                right: 20.0,
                bottom: 20.0,
                left: 40.0,
            },
            axis_band: 60.0,
            resting_radius: 30.0,
            hover_radius: 100.0,
            resting_opacity: 0.5,
            hover_opacity: 1.0,
            enter_duration_ms: 200.0,
            exit_duration_ms: 200.0,
            guide_delay_ms: 100.0,
            guide_fade_ms: 200.0,
            guide_exit_fade_ms: 100.0,
            guide_opacity: 0.6,
            x_domain: (-0.5, 0.6),
            y_domain: (-0.5, 0.5),
            tick_count: 20,
            legend_start_x: 40.0,
            legend_pitch_x: 80.0,
            legend_swatch_width: 40.0,
            legend_swatch_height: 12.0,
            image_path_template: "images/leg_28_vis/{name}.png".to_string(),
        }
    }
}

impl ViewConfig {
    pub fn from_config(config: &ScatterConfig) -> Self {
        let base = Self::default();
        Self {
            width: config.get_f64("scatter.width").unwrap_or(base.width),
            height: config.get_f64("scatter.height").unwrap_or(base.height),
            margins: Margins {
                top: config
                    .get_f64("scatter.margins.top")
                    .unwrap_or(base.margins.top),
                right: config
                    .get_f64("scatter.margins.right")
                    .unwrap_or(base.margins.right),
                bottom: config
                    .get_f64("scatter.margins.bottom")
                    .unwrap_or(base.margins.bottom),
                left: config
                    .get_f64("scatter.margins.left")
                    .unwrap_or(base.margins.left),
            },
            axis_band: config
                .get_f64("scatter.axisBand")
                .unwrap_or(base.axis_band),
            resting_radius: config
                .get_f64("scatter.restingRadius")
                .unwrap_or(base.resting_radius),
            hover_radius: config
                .get_f64("scatter.hoverRadius")
                .unwrap_or(base.hover_radius),
            resting_opacity: config
                .get_f64("scatter.restingOpacity")
                .unwrap_or(base.resting_opacity),
            hover_opacity: config
                .get_f64("scatter.hoverOpacity")
                .unwrap_or(base.hover_opacity),
            enter_duration_ms: config
                .get_f64("scatter.enterDurationMs")
                .unwrap_or(base.enter_duration_ms),
            exit_duration_ms: config
                .get_f64("scatter.exitDurationMs")
                .unwrap_or(base.exit_duration_ms),
            guide_delay_ms: config
                .get_f64("scatter.guideDelayMs")
                .unwrap_or(base.guide_delay_ms),
            guide_fade_ms: config
                .get_f64("scatter.guideFadeMs")
                .unwrap_or(base.guide_fade_ms),
            guide_exit_fade_ms: config
                .get_f64("scatter.guideExitFadeMs")
                .unwrap_or(base.guide_exit_fade_ms),
            guide_opacity: config
                .get_f64("scatter.guideOpacity")
                .unwrap_or(base.guide_opacity),
            x_domain: (
                config
                    .get_f64("scatter.xDomain.min")
                    .unwrap_or(base.x_domain.0),
                config
                    .get_f64("scatter.xDomain.max")
                    .unwrap_or(base.x_domain.1),
            ),
            y_domain: (
                config
                    .get_f64("scatter.yDomain.min")
                    .unwrap_or(base.y_domain.0),
                config
                    .get_f64("scatter.yDomain.max")
                    .unwrap_or(base.y_domain.1),
            ),
            tick_count: config
                .get_usize("scatter.tickCount")
                .unwrap_or(base.tick_count),
            legend_start_x: config
                .get_f64("scatter.legend.startX")
                .unwrap_or(base.legend_start_x),
            legend_pitch_x: config
                .get_f64("scatter.legend.pitchX")
                .unwrap_or(base.legend_pitch_x),
            legend_swatch_width: config
                .get_f64("scatter.legend.swatchWidth")
                .unwrap_or(base.legend_swatch_width),
            legend_swatch_height: config
                .get_f64("scatter.legend.swatchHeight")
                .unwrap_or(base.legend_swatch_height),
            image_path_template: config
                .get_str("scatter.imagePathTemplate")
                .map(|s| s.to_string())
                .unwrap_or(base.image_path_template),
        }
    }

    /// Plot width in pixels (canvas minus horizontal margins).
    pub fn plot_width(&self) -> f64 {
        self.width - self.margins.left - self.margins.right
    }

    /// Plot height in pixels (canvas minus vertical margins).
    pub fn plot_height(&self) -> f64 {
        self.height - self.margins.top - self.margins.bottom
    }

    /// The y coordinate of the x axis inside the plot group: markers and
    /// guide lines live above this line, the axis band below it.
    pub fn plot_floor(&self) -> f64 {
        self.plot_height() - self.axis_band
    }

    pub fn x_scale(&self) -> LinearScale {
        LinearScale::new(self.x_domain, (0.0, self.plot_width()))
    }

    /// Range is inverted: data y grows upward, pixel y grows downward.
    pub fn y_scale(&self) -> LinearScale {
        LinearScale::new(self.y_domain, (self.plot_floor(), 0.0))
    }

    pub fn image_href(&self, unit_name: &str) -> String {
        self.image_path_template.replace("{name}", unit_name)
    }
}
