use assert_cmd::Command;

const CSV: &str = "x,y,unitCluster,unitName\n0.5,-0.5,2,B\n0,0,1,A\n";

fn manta_cli() -> Command {
    Command::cargo_bin("manta-cli").unwrap()
}

#[test]
fn parse_prints_sorted_dataset_json() {
    let output = manta_cli()
        .arg("parse")
        .write_stdin(CSV)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let points: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(points[0]["unitName"], "A");
    assert_eq!(points[1]["unitCluster"], "2");
}

#[test]
fn render_emits_interactive_svg() {
    let output = manta_cli()
        .args(["render", "--id", "demo"])
        .write_stdin(CSV)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with(r#"<svg id="demo""#));
    assert!(stdout.contains(".marker:hover image"));
}

#[test]
fn render_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("units.csv");
    let out_path = dir.path().join("units.svg");
    std::fs::write(&csv_path, CSV).unwrap();

    let output = manta_cli()
        .args([
            "render",
            "--out",
            out_path.to_str().unwrap(),
            csv_path.to_str().unwrap(),
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let svg = std::fs::read_to_string(&out_path).unwrap();
    assert!(svg.contains(r#"data-unit="B""#));
}

#[test]
fn config_file_overrides_view_geometry() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("config.json");
    std::fs::write(&config_path, r#"{ "scatter": { "width": 600, "height": 400 } }"#).unwrap();

    let output = manta_cli()
        .args(["render", "--config", config_path.to_str().unwrap()])
        .write_stdin(CSV)
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(r#"viewBox="0 0 600 400""#));
}

#[test]
fn strict_load_fails_on_malformed_row_and_lenient_skips_it() {
    let bad = "x,y,unitCluster,unitName\noops,0,1,A\n0,0,1,B\n";

    let strict = manta_cli().arg("parse").write_stdin(bad).output().unwrap();
    assert!(!strict.status.success());
    let stderr = String::from_utf8(strict.stderr).unwrap();
    assert!(stderr.contains("invalid numeric value"));

    let lenient = manta_cli()
        .args(["parse", "--lenient"])
        .write_stdin(bad)
        .output()
        .unwrap();
    assert!(lenient.status.success());
    let stdout = String::from_utf8(lenient.stdout).unwrap();
    let points: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(points.as_array().unwrap().len(), 1);
}

#[test]
fn unknown_flag_exits_with_usage() {
    let output = manta_cli().arg("--bogus").output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}
