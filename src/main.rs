#![allow(missing_docs)]

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "railscope", about = "Train-sim scene snapshot inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print summary information about a snapshot.
	Info(cmd::info::Args),
	/// Dump one object by name through the generic serializer.
	Object(cmd::object::Args),
	/// Dump the structure of a car's prefab.
	Prefab(cmd::prefab::Args),
	/// Dump the structure of a car's interior prefab.
	Interior(cmd::interior::Args),
	/// Dump the structure of a car's external interactables prefab.
	Interactables(cmd::interactables::Args),
	/// Dump the collider tree of a car's prefab.
	Colliders(cmd::colliders::Args),
	/// Dump the physics curves of a loco.
	LocoCurves(cmd::curves::Args),
	/// Dump the damage controller properties of a car.
	Damage(cmd::damage::Args),
	/// Dump the script components on a car's prefab.
	CarScripts(cmd::scripts::Args),
	/// Dump the cab control specs of a loco's interior.
	CabControls(cmd::controls::Args),
	/// Dump the particle systems of a car.
	Particles(cmd::particles::Args),
	/// Dump the full car-type catalog.
	CarTypes(cmd::cartypes::Args),
	/// Dump all station configurations.
	Stations(cmd::stations::Args),
	/// Dump the train component pool contents.
	Pools(cmd::pools::Args),
	/// Print player state and dump the occupied car.
	Player(cmd::player::Args),
}

fn main() {
	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> railscope::scene::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Object(args) => cmd::object::run(args),
		Commands::Prefab(args) => cmd::prefab::run(args),
		Commands::Interior(args) => cmd::interior::run(args),
		Commands::Interactables(args) => cmd::interactables::run(args),
		Commands::Colliders(args) => cmd::colliders::run(args),
		Commands::LocoCurves(args) => cmd::curves::run(args),
		Commands::Damage(args) => cmd::damage::run(args),
		Commands::CarScripts(args) => cmd::scripts::run(args),
		Commands::CabControls(args) => cmd::controls::run(args),
		Commands::Particles(args) => cmd::particles::run(args),
		Commands::CarTypes(args) => cmd::cartypes::run(args),
		Commands::Stations(args) => cmd::stations::run(args),
		Commands::Pools(args) => cmd::pools::run(args),
		Commands::Player(args) => cmd::player::run(args),
	}
}
