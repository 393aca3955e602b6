//! The per-marker hover state machine.
//!
//! Transitions are pure, value-returning descriptions of target geometry and
//! timing; the rendering surface (a browser interpolating the emitted CSS, or
//! an embedding UI) performs the actual animation. Nothing here schedules
//! timers or mutates shared state.

use crate::model::{GuideLineLayout, MarkerLayout, MarkerState, ScatterLayout};
use manta_core::ViewConfig;
use rustc_hash::FxHashMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Easing {
    /// Symmetric ease used for the enter transition.
    CubicInOut,
    /// Overshoot-and-settle ease used for the exit transition, so leaving a
    /// marker reads as "settling back" rather than a mirror of the enter.
    ElasticOut,
}

impl Easing {
    /// Normalized easing curve; input is clamped to `[0, 1]` and the
    /// endpoints are exact (`f(0) = 0`, `f(1) = 1`).
    pub fn evaluate(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 {
            return 0.0;
        }
        if t == 1.0 {
            return 1.0;
        }
        match self {
            Easing::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
            Easing::ElasticOut => {
                let period = 0.3;
                let tau = std::f64::consts::TAU;
                2f64.powf(-10.0 * t) * ((t - period / 4.0) * tau / period).sin() + 1.0
            }
        }
    }

    /// The CSS `transition-timing-function` the SVG writer embeds. The
    /// elastic curve is approximated with an overshooting cubic bezier, which
    /// is as close as declarative CSS gets.
    pub fn css_timing_function(self) -> &'static str {
        match self {
            Easing::CubicInOut => "cubic-bezier(0.645,0.045,0.355,1)",
            Easing::ElasticOut => "cubic-bezier(0.68,-0.55,0.265,1.55)",
        }
    }
}

/// Target bounding box and opacity at the end of a transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerTarget {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitionSpec {
    pub state: MarkerState,
    pub duration_ms: f64,
    pub delay_ms: f64,
    pub easing: Easing,
    pub target: MarkerTarget,
}

fn marker_target(marker: &MarkerLayout, state: MarkerState, opacity: f64) -> MarkerTarget {
    let rect = marker.rect_for(state);
    MarkerTarget {
        x: rect.origin.x,
        y: rect.origin.y,
        width: rect.size.width,
        height: rect.size.height,
        opacity,
    }
}

/// Resting → Hovered. Pure in (marker, config); calling it again for a marker
/// already in `Hovered` re-applies identical targets.
pub fn enter_transition(marker: &MarkerLayout, config: &ViewConfig) -> TransitionSpec {
    TransitionSpec {
        state: MarkerState::Hovered,
        duration_ms: config.enter_duration_ms,
        delay_ms: 0.0,
        easing: Easing::CubicInOut,
        target: marker_target(marker, MarkerState::Hovered, config.hover_opacity),
    }
}

/// Hovered → Resting, with the settling ease.
pub fn leave_transition(marker: &MarkerLayout, config: &ViewConfig) -> TransitionSpec {
    TransitionSpec {
        state: MarkerState::Resting,
        duration_ms: config.exit_duration_ms,
        delay_ms: 0.0,
        easing: Easing::ElasticOut,
        target: marker_target(marker, MarkerState::Resting, config.resting_opacity),
    }
}

/// The two cross-hair segments for a hovered marker: one dropping to the x
/// axis, one running to the y axis. Both are anchored at the marker's center,
/// which hovering does not move.
pub fn guide_lines(marker: &MarkerLayout, config: &ViewConfig) -> [GuideLineLayout; 2] {
    let (cx, cy) = marker.center;
    let vertical = GuideLineLayout {
        x1: cx,
        y1: cy,
        x2: cx,
        y2: config.plot_floor(),
        stroke: marker.color.clone(),
        opacity: config.guide_opacity,
    };
    let horizontal = GuideLineLayout {
        x1: cx,
        y1: cy,
        x2: 0.0,
        y2: cy,
        stroke: marker.color.clone(),
        opacity: config.guide_opacity,
    };
    [vertical, horizontal]
}

/// Raises a marker above overlapping neighbors by moving it to the end of the
/// draw list (document order is z-order). Plain free function taking an
/// explicit handle; returns `false` when the name is unknown.
pub fn bring_to_front(layout: &mut ScatterLayout, unit_name: &str) -> bool {
    let Some(idx) = layout
        .markers
        .iter()
        .position(|m| m.unit_name == unit_name)
    else {
        return false;
    };
    let marker = layout.markers.remove(idx);
    layout.markers.push(marker);
    true
}

/// Timing and scaling constants the SVG writer turns into CSS rules. The
/// hover zoom is a uniform scale about the marker center, so one stylesheet
/// rule covers every marker.
#[derive(Debug, Clone, PartialEq)]
pub struct HoverStyle {
    pub scale_factor: f64,
    pub resting_opacity: f64,
    pub hover_opacity: f64,
    pub enter_duration_ms: f64,
    pub exit_duration_ms: f64,
    pub enter_easing: Easing,
    pub exit_easing: Easing,
    pub guide_delay_ms: f64,
    pub guide_fade_ms: f64,
    pub guide_exit_fade_ms: f64,
    pub guide_opacity: f64,
}

pub fn hover_style(config: &ViewConfig) -> HoverStyle {
    let scale_factor = if config.resting_radius > 0.0 {
        config.hover_radius / config.resting_radius
    } else {
        1.0
    };
    HoverStyle {
        scale_factor,
        resting_opacity: config.resting_opacity,
        hover_opacity: config.hover_opacity,
        enter_duration_ms: config.enter_duration_ms,
        exit_duration_ms: config.exit_duration_ms,
        enter_easing: Easing::CubicInOut,
        exit_easing: Easing::ElasticOut,
        guide_delay_ms: config.guide_delay_ms,
        guide_fade_ms: config.guide_fade_ms,
        guide_exit_fade_ms: config.guide_exit_fade_ms,
        guide_opacity: config.guide_opacity,
    }
}

/// Tracks per-marker state and the set of mounted guide elements for
/// embedders that drive the view themselves (and for tests). Only one marker
/// is hovered at a time in practice, but no event-ordering guarantees are
/// assumed: every leave removes *all* guides, not just the ones the matching
/// enter created.
#[derive(Debug, Clone)]
pub struct InteractionController {
    config: ViewConfig,
    states: FxHashMap<String, MarkerState>,
    guides: Vec<GuideLineLayout>,
}

impl InteractionController {
    pub fn new(config: ViewConfig) -> Self {
        Self {
            config,
            states: FxHashMap::default(),
            guides: Vec::new(),
        }
    }

    pub fn state(&self, unit_name: &str) -> MarkerState {
        self.states
            .get(unit_name)
            .copied()
            .unwrap_or(MarkerState::Resting)
    }

    /// All guide elements currently mounted on the surface.
    pub fn guides(&self) -> &[GuideLineLayout] {
        &self.guides
    }

    pub fn pointer_enter(&mut self, marker: &MarkerLayout) -> TransitionSpec {
        self.states
            .insert(marker.unit_name.clone(), MarkerState::Hovered);
        // Replace the whole guide set: re-entry before a previous exit
        // animation finished must not stack stale guides.
        self.guides = guide_lines(marker, &self.config).to_vec();
        enter_transition(marker, &self.config)
    }

    pub fn pointer_leave(&mut self, marker: &MarkerLayout) -> TransitionSpec {
        self.states
            .insert(marker.unit_name.clone(), MarkerState::Resting);
        // Unconditional cleanup by tag.
        self.guides.clear();
        leave_transition(marker, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manta_core::{Dataset, Theme, ViewConfig};

    fn two_point_layout() -> ScatterLayout {
        let dataset = Dataset::from_points(vec![
            manta_core::DataPoint {
                x: 0.0,
                y: 0.0,
                cluster: "1".to_string(),
                unit_name: "A".to_string(),
            },
            manta_core::DataPoint {
                x: 0.5,
                y: -0.5,
                cluster: "2".to_string(),
                unit_name: "B".to_string(),
            },
        ]);
        crate::layout_scatter(&dataset, &ViewConfig::default(), &Theme::default()).unwrap()
    }

    #[test]
    fn easing_endpoints_are_exact() {
        for easing in [Easing::CubicInOut, Easing::ElasticOut] {
            assert_eq!(easing.evaluate(0.0), 0.0);
            assert_eq!(easing.evaluate(1.0), 1.0);
            assert_eq!(easing.evaluate(-3.0), 0.0);
            assert_eq!(easing.evaluate(7.0), 1.0);
        }
    }

    #[test]
    fn elastic_out_overshoots_mid_curve() {
        let overshoot = (1..100)
            .map(|i| Easing::ElasticOut.evaluate(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(overshoot > 1.0);
        // The enter ease never overshoots.
        let max_cubic = (1..100)
            .map(|i| Easing::CubicInOut.evaluate(i as f64 / 100.0))
            .fold(f64::MIN, f64::max);
        assert!(max_cubic <= 1.0);
    }

    #[test]
    fn enter_then_leave_restores_resting_geometry() {
        let layout = two_point_layout();
        let config = ViewConfig::default();
        let marker = layout.marker("A").unwrap();
        let mut controller = InteractionController::new(config.clone());

        let enter = controller.pointer_enter(marker);
        assert_eq!(controller.state("A"), MarkerState::Hovered);
        assert_eq!(enter.target.width, 200.0);
        assert_eq!(enter.target.height, 200.0);
        assert_eq!(enter.target.opacity, 1.0);
        assert_eq!(controller.guides().len(), 2);

        let leave = controller.pointer_leave(marker);
        assert_eq!(controller.state("A"), MarkerState::Resting);
        assert_eq!(leave.target.width, 60.0);
        assert_eq!(leave.target.height, 60.0);
        assert_eq!(leave.target.opacity, 0.5);
        assert_eq!(controller.guides().len(), 0);

        // Centers agree between both targets: hovering never moves a marker.
        assert_eq!(
            enter.target.x + enter.target.width / 2.0,
            leave.target.x + leave.target.width / 2.0
        );
    }

    #[test]
    fn hover_target_is_centered_at_scaled_position() {
        let layout = two_point_layout();
        let config = ViewConfig::default();
        let marker = layout.marker("A").unwrap();
        let enter = enter_transition(marker, &config);
        let cx = config.x_scale().scale(0.0);
        let cy = config.y_scale().scale(0.0);
        assert_eq!(enter.target.x + enter.target.width / 2.0, cx);
        assert_eq!(enter.target.y + enter.target.height / 2.0, cy);
    }

    #[test]
    fn repeated_enter_is_idempotent() {
        let layout = two_point_layout();
        let marker = layout.marker("B").unwrap();
        let mut controller = InteractionController::new(ViewConfig::default());
        let first = controller.pointer_enter(marker);
        let second = controller.pointer_enter(marker);
        assert_eq!(first, second);
        assert_eq!(controller.guides().len(), 2);
    }

    #[test]
    fn leave_removes_guides_left_by_other_markers() {
        let layout = two_point_layout();
        let mut controller = InteractionController::new(ViewConfig::default());
        // Rapid re-entry across markers without a leave in between: the
        // surface may deliver events in any order.
        controller.pointer_enter(layout.marker("A").unwrap());
        controller.pointer_enter(layout.marker("B").unwrap());
        controller.pointer_leave(layout.marker("B").unwrap());
        assert_eq!(controller.guides().len(), 0);
    }

    #[test]
    fn guide_lines_run_from_center_to_axes() {
        let layout = two_point_layout();
        let config = ViewConfig::default();
        let marker = layout.marker("A").unwrap();
        let [vertical, horizontal] = guide_lines(marker, &config);
        let (cx, cy) = marker.center;
        assert_eq!((vertical.x1, vertical.y1), (cx, cy));
        assert_eq!((vertical.x2, vertical.y2), (cx, config.plot_floor()));
        assert_eq!((horizontal.x2, horizontal.y2), (0.0, cy));
        assert_eq!(vertical.stroke, marker.color);
        assert_eq!(vertical.opacity, 0.6);
    }

    #[test]
    fn transitions_use_distinct_easings() {
        let layout = two_point_layout();
        let config = ViewConfig::default();
        let marker = layout.marker("A").unwrap();
        let enter = enter_transition(marker, &config);
        let leave = leave_transition(marker, &config);
        assert_ne!(enter.easing, leave.easing);
        assert_eq!(enter.duration_ms, 200.0);
        assert_eq!(leave.duration_ms, 200.0);
    }

    #[test]
    fn bring_to_front_moves_marker_last() {
        let mut layout = two_point_layout();
        assert_eq!(layout.markers.last().unwrap().unit_name, "B");
        assert!(bring_to_front(&mut layout, "A"));
        assert_eq!(layout.markers.last().unwrap().unit_name, "A");
        assert_eq!(layout.markers.len(), 2);
        assert!(!bring_to_front(&mut layout, "missing"));
    }
}
