use std::path::PathBuf;

use serde_json::{Map, Value as Json};

use railscope::dump::{DumpOptions, serialize, write_report};
use railscope::scene::{EngineObject, Result, Snapshot, Value};

use crate::cmd::util::{DUMP_DEPTH, field_json};

#[derive(clap::Args)]
pub struct Args {
	/// Snapshot file to read.
	pub snapshot: PathBuf,
	/// Directory report files are written to.
	#[arg(long = "out", default_value = "dumps")]
	pub out_dir: PathBuf,
	/// Skip curve evaluation for a fast structural dump.
	#[arg(long = "skip-curves")]
	pub skip_curves: bool,
}

/// Dump the configuration of every station controller in the snapshot.
pub fn run(args: Args) -> Result<()> {
	let snapshot = Snapshot::open(&args.snapshot)?;
	let options = DumpOptions { evaluate_curves: !args.skip_curves };

	let mut stations = Vec::new();
	for object in snapshot.objects() {
		let Some(controller) = snapshot.component_of_type(object, "StationController") else {
			continue;
		};
		stations.push(station_json(&snapshot, object, controller, &options));
	}

	write_report(&args.out_dir, "Resources", "stations", &Json::Array(stations))?;
	Ok(())
}

fn station_json(snapshot: &Snapshot, object: &EngineObject, controller: &EngineObject, options: &DumpOptions) -> Json {
	let mut map = Map::new();
	map.insert("stationInfo".to_owned(), field_json(snapshot, controller, "stationInfo", DUMP_DEPTH, options));
	map.insert("proceduralJobsRuleset".to_owned(), ruleset_json(snapshot, controller, options));

	for name in ["storageRailtracksGONames", "transferInRailtracksGONames", "transferOutRailtracksGONames"] {
		map.insert(name.to_owned(), field_json(snapshot, controller, name, DUMP_DEPTH, options));
	}

	map.insert("warehouseMachines".to_owned(), warehouse_machines(snapshot, controller));

	let spawners = snapshot.components_in_subtree(object, |component| component.type_name.as_ref() == "StationLocoSpawner");
	map.insert("spawners".to_owned(), Json::Array(spawners.into_iter().map(|spawner| spawner_json(snapshot, spawner, options)).collect()));

	Json::Object(map)
}

fn ruleset_json(snapshot: &Snapshot, controller: &EngineObject, options: &DumpOptions) -> Json {
	let Some(ruleset) = controller.field("proceduralJobsRuleset").and_then(Value::as_data) else {
		log::warn!("{} has no procedural jobs ruleset", controller.name);
		return Json::Null;
	};

	let mut map = Map::new();
	for name in ["inputCargoGroups", "outputCargoGroups"] {
		let groups = ruleset.field(name).and_then(Value::as_list).unwrap_or(&[]);
		map.insert(name.to_owned(), Json::Array(groups.iter().map(|group| cargo_group_json(snapshot, group, options)).collect()));
	}
	Json::Object(map)
}

fn cargo_group_json(snapshot: &Snapshot, group: &Value, options: &DumpOptions) -> Json {
	let Some(data) = group.as_data() else {
		log::warn!("cargo group is not a data record");
		return Json::Null;
	};

	let cargo_types: Vec<Json> = data
		.field("cargoTypes")
		.and_then(Value::as_list)
		.unwrap_or(&[])
		.iter()
		.filter_map(Value::as_enum)
		.map(|item| Json::from(item.member.as_ref()))
		.collect();

	let mut map = Map::new();
	map.insert("cargoTypes".to_owned(), Json::Array(cargo_types));
	map.insert("stations".to_owned(), serialize(snapshot, data.field("stations").unwrap_or(&Value::Null), DUMP_DEPTH, options));
	Json::Object(map)
}

fn warehouse_machines(snapshot: &Snapshot, controller: &EngineObject) -> Json {
	let machines = controller.field("warehouseMachineControllers").and_then(Value::as_list).unwrap_or(&[]);
	let tracks: Vec<Json> = machines
		.iter()
		.map(|machine| {
			match machine.as_ref_id().and_then(|id| snapshot.get(id)).and_then(|object| object.field("warehouseTrackName")).and_then(Value::as_str) {
				Some(track) => Json::from(track),
				None => {
					log::warn!("{} references an unresolved warehouse machine", controller.name);
					Json::Null
				}
			}
		})
		.collect();
	Json::Array(tracks)
}

fn spawner_json(snapshot: &Snapshot, spawner: &EngineObject, options: &DumpOptions) -> Json {
	let mut map = Map::new();
	map.insert("locoSpawnTrackName".to_owned(), field_json(snapshot, spawner, "locoSpawnTrackName", 2, options));
	map.insert("spawnRotationFlipped".to_owned(), field_json(snapshot, spawner, "spawnRotationFlipped", 2, options));

	let groups = spawner.field("locoTypeGroupsToSpawn").and_then(Value::as_list).unwrap_or(&[]);
	let group_lists: Vec<Json> = groups
		.iter()
		.map(|group| {
			let liveries = group.as_data().and_then(|data| data.field("liveries")).unwrap_or(&Value::Null);
			serialize(snapshot, liveries, DUMP_DEPTH, options)
		})
		.collect();
	map.insert("locoTypeGroupsToSpawn".to_owned(), Json::Array(group_lists));

	Json::Object(map)
}
