use crate::Result;
use crate::interaction::{guide_lines, hover_style};
use crate::model::{AxisLayout, AxisOrientation, MarkerState, ScatterLayout};
use manta_core::ViewConfig;
use std::fmt::Write as _;

mod css;
mod util;

use css::scatter_css;
use util::{escape_xml, fmt};

#[derive(Debug, Clone)]
pub struct SvgRenderOptions {
    /// Root SVG `id`, also the prefix of every stylesheet selector. Sanitize
    /// it when embedding multiple documents in one page.
    pub diagram_id: Option<String>,
    pub include_axes: bool,
    pub include_legend: bool,
    pub include_guides: bool,
}

impl Default for SvgRenderOptions {
    fn default() -> Self {
        Self {
            diagram_id: None,
            include_axes: true,
            include_legend: true,
            include_guides: true,
        }
    }
}

/// Emits the whole view as one self-contained SVG document.
///
/// Rendering is a pure function of (layout, config, options): the same inputs
/// produce byte-identical output. The document is written exactly once; the
/// only thing that changes afterwards is browser-side interpolation of the
/// declared transitions.
pub fn render_scatter_svg(
    layout: &ScatterLayout,
    config: &ViewConfig,
    options: &SvgRenderOptions,
) -> Result<String> {
    let diagram_id = options.diagram_id.as_deref().unwrap_or("manta");
    let id_esc = escape_xml(diagram_id);

    let mut out = String::new();
    let _ = write!(
        &mut out,
        r#"<svg id="{id_esc}" width="100%" xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" viewBox="0 0 {w} {h}" style="max-width: {w}px; background-color: {bg};" role="graphics-document document" aria-roledescription="scatter">"#,
        w = fmt(layout.width.max(1.0)),
        h = fmt(layout.height.max(1.0)),
        bg = escape_xml(&layout.background_color),
    );

    let css = scatter_css(diagram_id, &hover_style(config), &layout.text_color);
    let _ = write!(&mut out, r#"<style>{css}</style>"#);

    if options.include_axes {
        render_axis(&mut out, &layout.x_axis, layout.plot_origin);
        render_axis(&mut out, &layout.y_axis, layout.plot_origin);
    }

    let _ = write!(
        &mut out,
        r#"<g class="nodes" transform="translate({x},{y})">"#,
        x = fmt(layout.plot_origin.0),
        y = fmt(layout.plot_origin.1),
    );
    for marker in &layout.markers {
        let _ = write!(
            &mut out,
            r#"<g class="marker" data-unit="{name}">"#,
            name = escape_xml(&marker.unit_name),
        );
        // Native tooltip, independent of the guide-line behavior.
        let _ = write!(
            &mut out,
            r#"<title>{}</title>"#,
            escape_xml(&marker.tooltip)
        );

        let border = marker.border_rect();
        let _ = write!(
            &mut out,
            r#"<rect class="border" x="{x}" y="{y}" width="{w}" height="{h}" stroke="{stroke}" fill="{fill}"/>"#,
            x = fmt(border.origin.x),
            y = fmt(border.origin.y),
            w = fmt(border.size.width),
            h = fmt(border.size.height),
            stroke = escape_xml(&marker.color),
            fill = escape_xml(&layout.marker_fill),
        );

        let resting = marker.rect_for(MarkerState::Resting);
        let _ = write!(
            &mut out,
            r#"<image class="node" xlink:href="{href}" x="{x}" y="{y}" width="{w}" height="{h}"/>"#,
            href = escape_xml(&marker.image_href),
            x = fmt(resting.origin.x),
            y = fmt(resting.origin.y),
            w = fmt(resting.size.width),
            h = fmt(resting.size.height),
        );

        if options.include_guides {
            for guide in guide_lines(marker, config) {
                let _ = write!(
                    &mut out,
                    r#"<line class="guide" x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{stroke}"/>"#,
                    x1 = fmt(guide.x1),
                    y1 = fmt(guide.y1),
                    x2 = fmt(guide.x2),
                    y2 = fmt(guide.y2),
                    stroke = escape_xml(&guide.stroke),
                );
            }
        }
        out.push_str("</g>");
    }
    out.push_str("</g>");

    if options.include_legend {
        out.push_str(r#"<g class="legend">"#);
        for item in &layout.legend {
            let _ = write!(
                &mut out,
                r#"<rect x="{x}" y="{y}" width="{w}" height="{h}" style="fill: {fill};"/>"#,
                x = fmt(item.x),
                y = fmt(item.y),
                w = fmt(item.swatch_width),
                h = fmt(item.swatch_height),
                fill = escape_xml(&item.fill),
            );
        }
        for item in &layout.legend {
            let _ = write!(
                &mut out,
                r#"<text x="{x}" y="{y}">{label}</text>"#,
                x = fmt(item.x),
                y = fmt(item.label_y),
                label = escape_xml(&item.label),
            );
        }
        out.push_str("</g>");
    }

    out.push_str("</svg>\n");
    Ok(out)
}

fn render_axis(out: &mut String, axis: &AxisLayout, plot_origin: (f64, f64)) {
    let class = match axis.orientation {
        AxisOrientation::Bottom => "x axis",
        AxisOrientation::Left => "y axis",
    };
    let _ = write!(
        out,
        r#"<g class="{class}" transform="translate({tx},{ty})">"#,
        tx = fmt(plot_origin.0 + axis.origin.0),
        ty = fmt(plot_origin.1 + axis.origin.1),
    );

    let color = escape_xml(&axis.color);
    let domain_d = match axis.orientation {
        AxisOrientation::Bottom => format!("M0,0H{}", fmt(axis.length)),
        AxisOrientation::Left => format!("M0,0V{}", fmt(axis.length)),
    };
    let _ = write!(
        out,
        r#"<path class="domain" d="{domain_d}" stroke="{color}"/>"#
    );

    for tick in &axis.ticks {
        let tick_class = if tick.label.is_some() { "tick" } else { "tick minor" };
        match axis.orientation {
            AxisOrientation::Bottom => {
                let _ = write!(
                    out,
                    r#"<g class="{tick_class}" transform="translate({o},0)"><line y2="{size}" stroke="{color}"/>"#,
                    o = fmt(tick.offset),
                    size = fmt(tick.size),
                );
                if let Some(label) = &tick.label {
                    let _ = write!(
                        out,
                        r#"<text y="{y}" dy="0.71em">{label}</text>"#,
                        y = fmt(tick.size + 3.0),
                        label = escape_xml(label),
                    );
                }
            }
            AxisOrientation::Left => {
                let _ = write!(
                    out,
                    r#"<g class="{tick_class}" transform="translate(0,{o})"><line x2="{size}" stroke="{color}"/>"#,
                    o = fmt(tick.offset),
                    size = fmt(-tick.size),
                );
                if let Some(label) = &tick.label {
                    let _ = write!(
                        out,
                        r#"<text x="{x}" dy="0.32em">{label}</text>"#,
                        x = fmt(-(tick.size + 3.0)),
                        label = escape_xml(label),
                    );
                }
            }
        }
        out.push_str("</g>");
    }
    out.push_str("</g>");
}
