use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn cli() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo_bin!("vehicle-form-cli"));
    cmd.current_dir(repo_root()).env_remove("RUST_LOG");
    cmd
}

fn golden(name: &str) -> String {
    let path = repo_root()
        .join("fixtures")
        .join("goldens")
        .join(format!("{name}.svg"));
    fs::read_to_string(path).expect("golden fixture")
}

#[test]
fn cli_renders_svg_to_stdout_from_flags() {
    let out = cli()
        .args([
            "render",
            "--make",
            "Toyota",
            "--model",
            "Camry",
            "--year",
            "2022",
            "--body-class",
            "Sedan",
            "--vehicle-type",
            "Car",
        ])
        .output()
        .expect("run cli");
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), golden("camry_sedan"));
}

#[test]
fn cli_renders_svg_from_query_string() {
    let out = cli()
        .args([
            "--query",
            "make=Ford&model=F-150&year=2020&bodyClass=Pickup&vehicleType=Truck",
        ])
        .output()
        .expect("run cli");
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), golden("f150_truck"));
}

#[test]
fn cli_reads_descriptor_json_and_trims_fields() {
    let fixture = repo_root()
        .join("fixtures")
        .join("descriptors")
        .join("crv.json");
    let out = cli()
        .arg(fixture.to_string_lossy().as_ref())
        .output()
        .expect("run cli");
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), golden("crv_suv"));
}

#[test]
fn cli_renders_png_with_default_out_path_for_file_input() {
    let fixture = repo_root()
        .join("fixtures")
        .join("descriptors")
        .join("f150.json");
    let tmp = tempfile::tempdir().expect("tempdir");
    let tmp_fixture = tmp.path().join("f150.json");
    fs::copy(&fixture, &tmp_fixture).expect("copy fixture");

    cli()
        .args([
            "render",
            "--format",
            "png",
            "--background",
            "#0b0f17",
            tmp_fixture.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let bytes = fs::read(tmp_fixture.with_extension("png")).expect("read png");
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "output is not a PNG"
    );
}

#[test]
fn cli_renders_pdf_to_out_path() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("vehicle.pdf");
    cli()
        .args([
            "render",
            "--format",
            "pdf",
            "--make",
            "BMW",
            "--out",
            out.to_string_lossy().as_ref(),
        ])
        .assert()
        .success();
    let bytes = fs::read(&out).expect("read pdf");
    assert!(bytes.starts_with(b"%PDF-"));
}

#[test]
fn cli_serves_fallback_for_unrenderable_input() {
    let out = cli()
        .args(["render", "--query", "make=Toy%07ota"])
        .output()
        .expect("run cli");
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), golden("fallback"));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("fallback"), "missing warning: {stderr}");
}

#[test]
fn cli_forced_fallback_matches_golden() {
    let out = cli()
        .args(["render", "--fallback", "--make", "Toyota"])
        .output()
        .expect("run cli");
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), golden("fallback"));
}

#[test]
fn cli_classify_and_seed() {
    let out = cli()
        .args(["classify", "--body-class", "Hatchback/Liftback/Notchback"])
        .output()
        .expect("run cli");
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap().trim(), "hatch");

    let out = cli()
        .args([
            "seed",
            "--query",
            "year=2022&make=Toyota&model=Camry&bodyClass=Sedan&vehicleType=Car",
        ])
        .output()
        .expect("run cli");
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap().trim(), "3496175912");
}

#[test]
fn cli_inspect_prints_identity_json() {
    let out = cli()
        .args(["inspect", "--make", "Ford", "--model", "F-150", "--year", "2020"])
        .args(["--body-class", "Pickup", "--vehicle-type", "Truck"])
        .output()
        .expect("run cli");
    assert!(out.status.success());
    let value: serde_json::Value = serde_json::from_slice(&out.stdout).expect("json");
    assert_eq!(value["label"], "2020 Ford F-150");
    assert_eq!(value["kind"], "truck");
    assert_eq!(value["seed"], 2_003_041_170u64);
    let stance = value["personality"]["stance"].as_f64().unwrap();
    assert!((0.92..=1.06).contains(&stance));
}

#[test]
fn cli_respond_uses_config_file() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = tmp.path().join("response.json");
    fs::write(&config, r#"{"cacheMaxAgeSecs": 3600}"#).expect("write config");

    let out = cli()
        .args([
            "respond",
            "--config",
            config.to_string_lossy().as_ref(),
            "--make",
            "Toyota",
        ])
        .output()
        .expect("run cli");
    assert!(out.status.success());
    let text = String::from_utf8(out.stdout).unwrap();
    assert!(text.starts_with("HTTP/1.1 200 OK\n"));
    assert!(text.contains("cache-control: public, max-age=3600\n"));
    assert!(text.contains("content-type: image/svg+xml; charset=utf-8\n"));
    assert!(text.ends_with("</svg>"));
}

#[test]
fn cli_rejects_unknown_flags_with_usage() {
    let out = cli().arg("--wheels").output().expect("run cli");
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("USAGE"));
}
