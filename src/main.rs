#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "vdfbin", about = "Binary VDF inspection and Steam shortcut tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Info(cmd::info::Args),
	Show(cmd::show::Args),
	Build(cmd::build::Args),
	AddShortcut(cmd::add_shortcut::Args),
	Appid(cmd::appid::Args),
}

fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.with_writer(std::io::stderr)
		.init();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> vdfbin::vdf::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Info(args) => cmd::info::run(args),
		Commands::Show(args) => cmd::show::run(args),
		Commands::Build(args) => cmd::build::run(args),
		Commands::AddShortcut(args) => cmd::add_shortcut::run(args),
		Commands::Appid(args) => cmd::appid::run(args),
	}
}
