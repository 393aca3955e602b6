use super::util::{escape_xml, fmt, fmt_3};
use crate::interaction::HoverStyle;
use std::fmt::Write as _;

/// The embedded stylesheet. All interaction behavior the state machine
/// describes — hover zoom, opacity ramp, delayed guide fade-in, settling exit
/// ease — is declared here as CSS transitions; the browser interpolates.
pub(super) fn scatter_css(diagram_id: &str, style: &HoverStyle, text_color: &str) -> String {
    let id = escape_xml(diagram_id);
    let font = r#""trebuchet ms",verdana,arial,sans-serif"#;
    let text = escape_xml(text_color);
    let mut out = String::new();

    let _ = write!(
        &mut out,
        r#"#{id}{{font-family:{font};font-size:16px;fill:{text};}}"#
    );
    let _ = write!(
        &mut out,
        r#"#{id} .axis path.domain{{fill:none;}}#{id} .tick line{{shape-rendering:crispEdges;}}#{id} .tick text{{fill:{text};font-size:10px;}}#{id} .x.axis .tick text{{text-anchor:middle;}}#{id} .y.axis .tick text{{text-anchor:end;}}"#
    );
    let _ = write!(
        &mut out,
        r#"#{id} .legend text{{fill:{text};font-size:12px;}}"#
    );
    let _ = write!(
        &mut out,
        r#"#{id} .border{{stroke-width:1.5px;fill-opacity:0.1;}}"#
    );

    // Resting state plus the exit transition (applies when :hover drops).
    let _ = write!(
        &mut out,
        r#"#{id} .marker image{{opacity:{rest};cursor:pointer;transform-box:fill-box;transform-origin:center;transition:transform {exit}ms {exit_ease},opacity {exit}ms {exit_ease};}}"#,
        rest = fmt(style.resting_opacity),
        exit = fmt(style.exit_duration_ms),
        exit_ease = style.exit_easing.css_timing_function(),
    );
    // Hovered state plus the enter transition.
    let _ = write!(
        &mut out,
        r#"#{id} .marker:hover image{{opacity:{hover};transform:scale({factor});transition:transform {enter}ms {enter_ease},opacity {enter}ms {enter_ease};}}"#,
        hover = fmt(style.hover_opacity),
        factor = fmt_3(style.scale_factor),
        enter = fmt(style.enter_duration_ms),
        enter_ease = style.enter_easing.css_timing_function(),
    );
    // Guides fade out quickly on exit, fade in after a delay on enter.
    let _ = write!(
        &mut out,
        r#"#{id} .guide{{opacity:0;transition:opacity {out_ms}ms ease-out;}}"#,
        out_ms = fmt(style.guide_exit_fade_ms),
    );
    let _ = write!(
        &mut out,
        r#"#{id} .marker:hover .guide{{opacity:{gop};transition:opacity {fade}ms ease-in {delay}ms;}}"#,
        gop = fmt(style.guide_opacity),
        fade = fmt(style.guide_fade_ms),
        delay = fmt(style.guide_delay_ms),
    );

    out
}
