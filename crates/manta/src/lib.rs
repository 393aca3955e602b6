#![forbid(unsafe_code)]

//! `manta` is a headless scatter-view renderer: it loads point data from CSV
//! text, positions labeled image markers through linear scales, colors them by
//! cluster, and emits one self-contained SVG document with hover-driven zoom,
//! cross-hair guide lines and a categorical legend declared as CSS
//! transitions.
//!
//! # Features
//!
//! - `render`: enable layout + SVG rendering (`manta::render`)

pub use manta_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use manta_render::interaction::{
        Easing, HoverStyle, InteractionController, MarkerTarget, TransitionSpec, bring_to_front,
        enter_transition, guide_lines, hover_style, leave_transition,
    };
    pub use manta_render::model::{MarkerLayout, MarkerState, ScatterLayout};
    pub use manta_render::svg::{SvgRenderOptions, render_scatter_svg};
    pub use manta_render::layout_scatter;

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Load(#[from] manta_core::Error),
        #[error(transparent)]
        Render(#[from] manta_render::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Converts an arbitrary string into a conservative SVG `id` token
    /// suitable for embedding multiple scatter views in the same UI tree.
    ///
    /// The root `<svg id="...">` value prefixes every selector in the
    /// embedded stylesheet; inlining two documents with the same id makes
    /// their hover rules collide.
    ///
    /// This helper:
    /// - trims whitespace
    /// - replaces unsupported characters with `-`
    /// - ensures the id starts with an ASCII letter by prefixing `m-` when
    ///   needed
    pub fn sanitize_svg_id(raw: &str) -> String {
        let raw = raw.trim();
        if raw.is_empty() {
            return "m-untitled".to_string();
        }

        let mut out = String::with_capacity(raw.len() + 4);
        for ch in raw.chars() {
            let ok = ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' || ch == ':' || ch == '.';
            out.push(if ok { ch } else { '-' });
        }
        let starts_ok = out.chars().next().is_some_and(|c| c.is_ascii_alphabetic());
        if !starts_ok {
            out.insert_str(0, "m-");
        }

        while out.contains("--") {
            out = out.replace("--", "-");
        }
        let out = out.trim_matches('-');
        if out.is_empty() || out == "m" {
            return "m-untitled".to_string();
        }
        out.to_string()
    }

    /// Synchronous one-call pipeline (executor-free): CSV text in,
    /// interactive SVG out.
    pub fn render_csv_svg_sync(
        engine: &manta_core::Engine,
        csv: &str,
        load_options: manta_core::LoadOptions,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        let dataset = engine.load_dataset_sync(csv, load_options)?;
        let config = engine.view_config();
        let layout = layout_scatter(&dataset, &config, &engine.theme())?;
        Ok(render_scatter_svg(&layout, &config, svg_options)?)
    }

    /// The single asynchronous load completing triggers the entire render.
    pub async fn render_csv_svg(
        engine: &manta_core::Engine,
        csv: &str,
        load_options: manta_core::LoadOptions,
        svg_options: &SvgRenderOptions,
    ) -> Result<String> {
        render_csv_svg_sync(engine, csv, load_options, svg_options)
    }
}
