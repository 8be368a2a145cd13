#![allow(missing_docs)]

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "vkey", about = "Flatten JSON documents into query-string key/value pairs")]
struct Cli {
	/// Raise diagnostic verbosity (repeatable).
	#[arg(short, long, action = ArgAction::Count, global = true)]
	verbose: u8,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	Flatten {
		/// JSON document to read; stdin when absent or `-`.
		path: Option<PathBuf>,
		#[arg(long, value_enum, default_value_t = cmd::flatten::OutputFormat::Query)]
		format: cmd::flatten::OutputFormat,
		/// Print only the values stored under this key, one per line.
		#[arg(long, conflicts_with = "format")]
		key: Option<String>,
	},
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> cmd::Result<()> {
	match command {
		Commands::Flatten { path, format, key } => cmd::flatten::run(path, format, key),
	}
}

fn init_tracing(verbose: u8) {
	let default_level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}
