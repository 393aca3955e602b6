use futures::executor::block_on;
use manta_core::{Engine, LoadOptions};
use manta_render::layout_scatter;
use manta_render::svg::{SvgRenderOptions, render_scatter_svg};
use std::io::Read;

fn main() {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .expect("read stdin");

    let engine = Engine::new();
    let dataset = block_on(engine.load_dataset(&input, LoadOptions::default())).expect("load csv");

    let config = engine.view_config();
    let layout = layout_scatter(&dataset, &config, &engine.theme()).expect("layout ok");
    let svg =
        render_scatter_svg(&layout, &config, &SvgRenderOptions::default()).expect("render svg");

    print!("{svg}");
}
