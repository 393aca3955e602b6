use manta_core::geom::{Point, Rect, point, rect_centered};
use serde::Serialize;

/// Per-marker interaction state. `Resting` is initial; transitions between
/// the two are triggered by pointer events only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MarkerState {
    Resting,
    Hovered,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AxisOrientation {
    Bottom,
    Left,
}

/// One axis tick. Major ticks carry a label; midpoint sub-ticks do not.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickLayout {
    pub value: f64,
    /// Position along the axis, in pixels from the axis origin.
    pub offset: f64,
    /// Tick mark length: 6px for major ticks, 3px for sub-ticks.
    pub size: f64,
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisLayout {
    pub orientation: AxisOrientation,
    /// Translate of the axis group, in plot-local coordinates.
    pub origin: (f64, f64),
    /// Length of the axis line in pixels.
    pub length: f64,
    pub ticks: Vec<TickLayout>,
    pub color: String,
}

/// The visual representation of one data point: an image node plus a border
/// rectangle stroked in the cluster color. Geometry is always expressed as
/// center ± radius so state changes never move the center.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerLayout {
    pub unit_name: String,
    pub cluster: String,
    /// Cluster color from the ordinal scale; also strokes the guide lines.
    pub color: String,
    /// Pixel center in plot-local coordinates.
    pub center: (f64, f64),
    pub resting_radius: f64,
    pub hover_radius: f64,
    pub image_href: String,
    /// Native hover tooltip text (= unit name), independent of guide lines.
    pub tooltip: String,
}

impl MarkerLayout {
    pub fn center_point(&self) -> Point {
        point(self.center.0, self.center.1)
    }

    /// Bounding box for the given state. Pure in (self, state): repeated
    /// hover/unhover is idempotent by construction.
    pub fn rect_for(&self, state: MarkerState) -> Rect {
        let radius = match state {
            MarkerState::Resting => self.resting_radius,
            MarkerState::Hovered => self.hover_radius,
        };
        rect_centered(self.center_point(), radius)
    }

    /// The border rectangle sits 1px outside the resting box.
    pub fn border_rect(&self) -> Rect {
        rect_centered(self.center_point(), self.resting_radius + 1.0)
    }
}

/// Cross-hair segment from a hovered marker's center to one of the axes.
/// Ephemeral: created on pointer enter, removed (all of them, by tag) on
/// every pointer leave.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideLineLayout {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
    pub stroke: String,
    /// Terminal opacity once the fade-in completes.
    pub opacity: f64,
}

/// One legend entry: a color swatch plus the numeric cluster label beneath
/// the plot area. Coordinates are canvas-absolute.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendItemLayout {
    pub label: String,
    pub fill: String,
    pub x: f64,
    pub y: f64,
    pub swatch_width: f64,
    pub swatch_height: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScatterLayout {
    /// Total canvas size, margins included.
    pub width: f64,
    pub height: f64,
    pub background_color: String,
    pub text_color: String,
    /// Fill of the border rectangles behind the marker images.
    pub marker_fill: String,
    /// Translate of the plot group within the canvas (left/top margins).
    pub plot_origin: (f64, f64),
    pub plot_width: f64,
    /// The y coordinate of the x axis in plot-local coordinates; markers and
    /// guide lines stay above it.
    pub plot_floor: f64,
    pub x_axis: AxisLayout,
    pub y_axis: AxisLayout,
    /// Document order is z-order: later markers draw above earlier ones.
    pub markers: Vec<MarkerLayout>,
    pub legend: Vec<LegendItemLayout>,
}

impl ScatterLayout {
    pub fn marker(&self, unit_name: &str) -> Option<&MarkerLayout> {
        self.markers.iter().find(|m| m.unit_name == unit_name)
    }
}
