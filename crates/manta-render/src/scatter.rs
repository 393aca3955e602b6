use crate::axis::layout_axis;
use crate::model::{
    AxisOrientation, LegendItemLayout, MarkerLayout, ScatterLayout,
};
use crate::{Error, Result};
use manta_core::{Dataset, Theme, ViewConfig};

/// Maps a dataset into marker, axis and legend geometry.
///
/// Layout is computed exactly once per dataset; there is no diffing. Marker
/// colors are resolved before legend colors through one shared `ColorScale`,
/// and the dataset is already sorted by cluster, so the ordinal color
/// assignment, the render order and the legend order agree by construction.
pub fn layout_scatter(
    dataset: &Dataset,
    config: &ViewConfig,
    theme: &Theme,
) -> Result<ScatterLayout> {
    if !(config.plot_width() > 0.0) || !(config.plot_floor() > 0.0) {
        return Err(Error::InvalidConfig {
            message: format!(
                "margins and axis band leave no plot area ({} x {})",
                config.plot_width(),
                config.plot_floor()
            ),
        });
    }

    let x_scale = config.x_scale();
    let y_scale = config.y_scale();
    let mut colors = theme.color_scale();

    let markers: Vec<MarkerLayout> = dataset
        .points()
        .iter()
        .map(|p| MarkerLayout {
            unit_name: p.unit_name.clone(),
            cluster: p.cluster.clone(),
            color: colors.color_for(&p.cluster),
            center: (x_scale.scale(p.x), y_scale.scale(p.y)),
            resting_radius: config.resting_radius,
            hover_radius: config.hover_radius,
            image_href: config.image_href(&p.unit_name),
            tooltip: p.unit_name.clone(),
        })
        .collect();

    let legend: Vec<LegendItemLayout> = dataset
        .distinct_clusters()
        .into_iter()
        .enumerate()
        .map(|(i, cluster)| {
            let fill = colors.color_for(&cluster);
            LegendItemLayout {
                label: cluster,
                fill,
                x: config.legend_start_x + i as f64 * config.legend_pitch_x,
                y: config.plot_height(),
                swatch_width: config.legend_swatch_width,
                swatch_height: config.legend_swatch_height,
                label_y: config.plot_height() + 2.0 * config.legend_swatch_height,
            }
        })
        .collect();

    let x_axis = layout_axis(
        &x_scale,
        AxisOrientation::Bottom,
        (0.0, config.plot_floor()),
        config.plot_width(),
        config.tick_count,
        &theme.axis_color,
    );
    let y_axis = layout_axis(
        &y_scale,
        AxisOrientation::Left,
        (0.0, 0.0),
        config.plot_floor(),
        config.tick_count,
        &theme.axis_color,
    );

    Ok(ScatterLayout {
        width: config.width,
        height: config.height,
        background_color: theme.background.clone(),
        text_color: theme.text_color.clone(),
        marker_fill: theme.marker_fill.clone(),
        plot_origin: (config.margins.left, config.margins.top),
        plot_width: config.plot_width(),
        plot_floor: config.plot_floor(),
        x_axis,
        y_axis,
        markers,
        legend,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use manta_core::{DataPoint, Engine, LoadOptions};

    fn dataset(rows: &[(f64, f64, &str, &str)]) -> Dataset {
        Dataset::from_points(
            rows.iter()
                .map(|(x, y, cluster, name)| DataPoint {
                    x: *x,
                    y: *y,
                    cluster: cluster.to_string(),
                    unit_name: name.to_string(),
                })
                .collect(),
        )
    }

    #[test]
    fn every_point_maps_to_exactly_one_marker() {
        let ds = dataset(&[(0.0, 0.0, "1", "A"), (0.5, -0.5, "2", "B")]);
        let layout = layout_scatter(&ds, &ViewConfig::default(), &Theme::default()).unwrap();
        assert_eq!(layout.markers.len(), 2);
        assert!(layout.marker("A").is_some());
        assert!(layout.marker("B").is_some());
    }

    #[test]
    fn in_domain_points_land_inside_the_plot_rectangle() {
        let config = ViewConfig::default();
        let ds = dataset(&[
            (-0.5, -0.5, "1", "lo"),
            (0.6, 0.5, "1", "hi"),
            (0.05, 0.0, "2", "mid"),
        ]);
        let layout = layout_scatter(&ds, &config, &Theme::default()).unwrap();
        for marker in &layout.markers {
            let (cx, cy) = marker.center;
            assert!((0.0..=config.plot_width()).contains(&cx), "{cx}");
            assert!((0.0..=config.plot_floor()).contains(&cy), "{cy}");
        }
    }

    #[test]
    fn out_of_domain_points_are_kept_off_canvas() {
        let config = ViewConfig::default();
        let ds = dataset(&[(5.0, 0.0, "1", "far")]);
        let layout = layout_scatter(&ds, &config, &Theme::default()).unwrap();
        let (cx, _) = layout.markers[0].center;
        assert!(cx > config.plot_width());
    }

    #[test]
    fn legend_covers_distinct_clusters_in_ascending_order() {
        let ds = dataset(&[
            (0.0, 0.0, "14", "a"),
            (0.1, 0.0, "2", "b"),
            (0.2, 0.0, "2", "c"),
            (0.3, 0.0, "1", "d"),
        ]);
        let layout = layout_scatter(&ds, &ViewConfig::default(), &Theme::default()).unwrap();
        let labels: Vec<&str> = layout.legend.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, vec!["1", "2", "14"]);
        // Fixed 80px pitch from x = 40.
        assert_eq!(layout.legend[0].x, 40.0);
        assert_eq!(layout.legend[1].x, 120.0);
        assert_eq!(layout.legend[2].x, 200.0);
    }

    #[test]
    fn legend_colors_match_marker_colors() {
        let ds = dataset(&[(0.0, 0.0, "2", "a"), (0.1, 0.1, "1", "b")]);
        let layout = layout_scatter(&ds, &ViewConfig::default(), &Theme::default()).unwrap();
        for item in &layout.legend {
            let marker = layout
                .markers
                .iter()
                .find(|m| m.cluster == item.label)
                .unwrap();
            assert_eq!(marker.color, item.fill);
        }
    }

    #[test]
    fn border_rect_is_one_pixel_outside_the_resting_box() {
        let ds = dataset(&[(0.0, 0.0, "1", "A")]);
        let layout = layout_scatter(&ds, &ViewConfig::default(), &Theme::default()).unwrap();
        let marker = &layout.markers[0];
        let border = marker.border_rect();
        let resting = marker.rect_for(crate::model::MarkerState::Resting);
        assert_eq!(border.origin.x, resting.origin.x - 1.0);
        assert_eq!(border.size.width, resting.size.width + 2.0);
        assert_eq!(border.size.width, 62.0);
    }

    #[test]
    fn layout_is_deterministic_across_runs() {
        let engine = Engine::new();
        let csv = "x,y,unitCluster,unitName\n0,0,1,A\n0.5,-0.5,2,B\n";
        let ds1 = engine.load_dataset_sync(csv, LoadOptions::default()).unwrap();
        let ds2 = engine.load_dataset_sync(csv, LoadOptions::default()).unwrap();
        let a = layout_scatter(&ds1, &ViewConfig::default(), &Theme::default()).unwrap();
        let b = layout_scatter(&ds2, &ViewConfig::default(), &Theme::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn degenerate_plot_area_is_rejected() {
        let mut config = ViewConfig::default();
        config.width = 40.0;
        let err = layout_scatter(
            &dataset(&[(0.0, 0.0, "1", "A")]),
            &config,
            &Theme::default(),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidConfig { .. }));
    }

    #[test]
    fn axes_span_the_plot() {
        let config = ViewConfig::default();
        let ds = dataset(&[(0.0, 0.0, "1", "A")]);
        let layout = layout_scatter(&ds, &config, &Theme::default()).unwrap();
        assert_eq!(layout.x_axis.origin, (0.0, 790.0));
        assert_eq!(layout.x_axis.length, 1740.0);
        assert_eq!(layout.y_axis.origin, (0.0, 0.0));
        assert_eq!(layout.y_axis.length, 790.0);
        assert!(layout.x_axis.ticks.len() > 20);
    }
}
