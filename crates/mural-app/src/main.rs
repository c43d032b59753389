//! `mural` command-line entry point.

use clap::Parser;
use mural_app::Options;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "mural")]
#[command(version, about = "Replay a gesture script through the Mural engine", long_about = None)]
struct Args {
    /// Gesture script: a JSON array of steps
    script: PathBuf,

    /// Engine configuration (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial document (JSON array of elements)
    #[arg(long)]
    document: Option<PathBuf>,

    /// Print the recorded draw calls instead of the document
    #[arg(long)]
    draw_calls: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    log::info!("Starting Mural replay of {}", args.script.display());

    let options = Options {
        script: args.script,
        config: args.config,
        document: args.document,
        draw_calls: args.draw_calls,
    };
    match mural_app::run(&options) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("Replay failed: {err}");
            eprintln!("mural: {err}");
            ExitCode::FAILURE
        }
    }
}
