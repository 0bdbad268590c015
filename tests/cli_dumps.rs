#![allow(missing_docs)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::Value;

#[test]
fn prefab_structure_dump_has_components_and_children() {
	let out = out_dir("prefab");
	run_ok(&["prefab", &fixture("yard.json"), "DE2", "--out", &out]);

	let json = read_json(Path::new(&out).join("DE2_prefab.json"));
	assert_eq!(json["name"], "LocoShunter");

	let components = json["components"].as_array().expect("components array");
	for expected in ["TrainCar", "LocoControllerShunter", "DamageControllerShunter"] {
		assert!(components.contains(&Value::from(expected)), "missing component {expected}");
	}

	let children = json["children"].as_array().expect("children array");
	assert!(children.iter().any(|child| child["name"] == "[colliders]"));
}

#[test]
fn prefab_defaults_to_the_player_car() {
	let out = out_dir("prefab-default");
	run_ok(&["prefab", &fixture("yard.json"), "--out", &out]);
	assert!(Path::new(&out).join("DE2_prefab.json").exists());
}

#[test]
fn unknown_car_id_fails_with_message() {
	let output = run(&["prefab", &fixture("yard.json"), "DE9"]);
	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("couldn't find car type \"DE9\""), "stderr was: {stderr}");
}

#[test]
fn collider_tree_prunes_and_encodes_shapes() {
	let out = out_dir("colliders");
	run_ok(&["colliders", &fixture("yard.json"), "DE2", "--out", &out]);

	let json = read_json(Path::new(&out).join("DE2_colliders.json"));
	assert_eq!(json["name"], "LocoShunter");
	assert_eq!(json["layer"], "Train_Big_Collider");

	let children = json["children"].as_array().expect("children array");
	assert_eq!(children.len(), 1, "subtrees without colliders must be pruned");

	let hull = &children[0];
	assert_eq!(hull["name"], "[colliders]");
	assert_eq!(hull["colliders"][0]["type"], "box");
	assert_eq!(hull["colliders"][0]["center"], "0,1.5,0");
	assert_eq!(hull["colliders"][0]["size"], "3,3,7");

	let walkable = &hull["children"][0];
	assert_eq!(walkable["layer"], "Train_Walkable");
	assert_eq!(walkable["colliders"][0]["type"], "capsule");
	assert_eq!(walkable["colliders"][0]["radius"], 0.4);
}

#[test]
fn loco_curves_are_resampled_to_1001_points() {
	let out = out_dir("curves");
	run_ok(&["loco-curves", &fixture("yard.json"), "DE2", "--out", &out]);

	let json = read_json(Path::new(&out).join("DE2_loco_curves.json"));
	let brake = &json["brakePowerCurve"];
	assert_eq!(brake["minTime"], 0.0);
	assert_eq!(brake["maxTime"], 1.0);
	assert_eq!(brake["preWrapMode"], "ClampForever (WrapMode)");

	let samples = brake["samples"].as_str().expect("samples string");
	assert_eq!(samples.split(',').count(), 1001);

	let slip = &json["drivingForce"]["wheelslipToFrictionModifierCurve"];
	assert!(slip["samples"].as_str().is_some_and(|text| text.split(',').count() == 1001));
}

#[test]
fn skip_curves_suppresses_all_samples() {
	let out = out_dir("curves-skip");
	run_ok(&["loco-curves", &fixture("yard.json"), "DE2", "--out", &out, "--skip-curves"]);

	let json = read_json(Path::new(&out).join("DE2_loco_curves.json"));
	assert_eq!(json["brakePowerCurve"]["samples"], "<curve evaluation disabled>");
	assert_eq!(json["drivingForce"]["wheelslipToFrictionModifierCurve"]["samples"], "<curve evaluation disabled>");
}

#[test]
fn object_dump_carries_metadata_wrapper() {
	let out = out_dir("object");
	run_ok(&["object", &fixture("yard.json"), "--name", "TrainComponentPool", "--out", &out]);

	let json = read_json(Path::new(&out).join("TrainComponentPool_object.json"));
	assert_eq!(json["_componentType"], "TrainComponentPool");
	assert_eq!(json["_name"], "TrainComponentPool");
}

#[test]
fn compressed_snapshots_parse_identically() {
	let output = run_ok(&["info", &fixture("yard.json.zst")]);
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("compression: zstd"), "stdout was: {stdout}");
	assert!(stdout.contains("object_count: 28"), "stdout was: {stdout}");
	assert!(stdout.contains("producer: dv-capture 0.4.1"), "stdout was: {stdout}");
}

#[test]
fn missing_interactables_prefab_writes_nothing() {
	let out = out_dir("interactables");
	run_ok(&["interactables", &fixture("yard.json"), "DE2", "--out", &out]);
	assert!(!Path::new(&out).join("DE2_interactables.json").exists());
}

fn run(args: &[&str]) -> std::process::Output {
	Command::new(env!("CARGO_BIN_EXE_railscope")).args(args).output().expect("command executes")
}

fn run_ok(args: &[&str]) -> std::process::Output {
	let output = run(args);
	assert!(output.status.success(), "command should succeed: {}", String::from_utf8_lossy(&output.stderr));
	output
}

fn read_json(path: PathBuf) -> Value {
	let bytes = fs::read(&path).unwrap_or_else(|err| panic!("read {}: {err}", path.display()));
	serde_json::from_slice(&bytes).expect("report should be valid json")
}

fn fixture(name: &str) -> String {
	Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name).display().to_string()
}

fn out_dir(label: &str) -> String {
	Path::new(env!("CARGO_TARGET_TMPDIR")).join("cli_dumps").join(label).display().to_string()
}
