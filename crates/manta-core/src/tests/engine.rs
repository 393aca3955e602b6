use crate::*;
use futures::executor::block_on;
use serde_json::json;

const SAMPLE: &str = "\
x,y,unitCluster,unitName
0.5,-0.5,2,B
0,0,1,A
";

#[test]
fn load_dataset_sorts_by_cluster() {
    let engine = Engine::new();
    let dataset = block_on(engine.load_dataset(SAMPLE, LoadOptions::default())).unwrap();
    assert_eq!(dataset.len(), 2);
    // Row order in the CSV is cluster 2 then 1; the dataset is resorted.
    assert_eq!(dataset.points()[0].unit_name, "A");
    assert_eq!(dataset.points()[1].unit_name, "B");
    assert_eq!(dataset.distinct_clusters(), vec!["1", "2"]);
}

#[test]
fn load_dataset_sync_matches_async() {
    let engine = Engine::new();
    let a = engine.load_dataset_sync(SAMPLE, LoadOptions::default()).unwrap();
    let b = block_on(engine.load_dataset(SAMPLE, LoadOptions::default())).unwrap();
    assert_eq!(a, b);
}

#[test]
fn site_config_feeds_view_config_and_theme() {
    let engine = Engine::new().with_site_config(ScatterConfig::from_value(json!({
        "scatter": { "hoverRadius": 80 },
        "themeVariables": { "plotColorPalette": "#010101,#020202" }
    })));
    assert_eq!(engine.view_config().hover_radius, 80.0);
    assert_eq!(engine.view_config().resting_radius, 30.0);
    assert_eq!(engine.theme().palette.len(), 2);
}

#[test]
fn site_configs_merge_rather_than_replace() {
    let engine = Engine::new()
        .with_site_config(ScatterConfig::from_value(json!({
            "scatter": { "width": 1200 }
        })))
        .with_site_config(ScatterConfig::from_value(json!({
            "scatter": { "height": 700 }
        })));
    let cfg = engine.view_config();
    assert_eq!(cfg.width, 1200.0);
    assert_eq!(cfg.height, 700.0);
}

#[test]
fn dataset_serializes_with_csv_column_names() {
    let engine = Engine::new();
    let dataset = engine.load_dataset_sync(SAMPLE, LoadOptions::default()).unwrap();
    let value = serde_json::to_value(dataset.points()).unwrap();
    assert_eq!(
        value,
        json!([
            { "x": 0.0, "y": 0.0, "unitCluster": "1", "unitName": "A" },
            { "x": 0.5, "y": -0.5, "unitCluster": "2", "unitName": "B" }
        ])
    );
}
