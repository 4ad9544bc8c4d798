use clap::Parser;
use poolguide::cli::{execute, CliArgs};
use poolguide::{GeometryProfile, JsonProfileStore, Point, ProfileStore, TableFrame};
use tempfile::TempDir;

fn run(dir: &TempDir, extra: &[&str]) -> anyhow::Result<serde_json::Value> {
    let dir_arg = dir.path().to_string_lossy().to_string();
    let mut argv = vec!["poolguide", "--dir", dir_arg.as_str()];
    argv.extend_from_slice(extra);
    let output = execute(CliArgs::try_parse_from(argv)?)?;
    Ok(serde_json::from_str(&output)?)
}

#[test]
fn test_scene_for_saved_profile() {
    let dir = TempDir::new().unwrap();
    let profile =
        GeometryProfile::from_frame(TableFrame::new(Point::new(0.0, 0.0), 800.0, 400.0));
    JsonProfileStore::new(dir.path())
        .save("club", &profile)
        .unwrap();

    let report = run(&dir, &["club", "--target", "400", "100"]).unwrap();
    assert_eq!(report["profile"], "club");
    assert_eq!(report["scene"]["pockets"].as_array().unwrap().len(), 6);
    assert_eq!(
        report["scene"]["trajectory"]["pocket_lines"]
            .as_array()
            .unwrap()
            .len(),
        6
    );
    assert_eq!(report["target"]["x"], 400.0);
}

#[test]
fn test_default_profile_when_nothing_saved() {
    let dir = TempDir::new().unwrap();
    let report = run(&dir, &[]).unwrap();
    assert_eq!(report["profile"], "default");
    // target defaults to the display centre
    assert_eq!(report["target"]["x"], 960.0);
    assert_eq!(report["scene"]["outline"]["corners"][0]["x"], 560.0);
}

#[test]
fn test_missing_named_profile_fails() {
    let dir = TempDir::new().unwrap();
    assert!(run(&dir, &["ghost"]).is_err());
}

#[test]
fn test_malformed_profile_fails() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("bad.json"), "{").unwrap();
    assert!(run(&dir, &["bad"]).is_err());
}

#[test]
fn test_list_profiles() {
    let dir = TempDir::new().unwrap();
    let mut store = JsonProfileStore::new(dir.path());
    store.save("two", &GeometryProfile::default()).unwrap();
    store.save("one", &GeometryProfile::default()).unwrap();

    let names = run(&dir, &["--list"]).unwrap();
    assert_eq!(names, serde_json::json!(["one", "two"]));
}
