use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;
mod config;
mod logging;
mod render;
mod session;

#[derive(Debug, Parser)]
#[command(name = "surgegen", about = "Surge configuration builder")]
struct ProgramArgs {
    /// Path of the profile file. Default to $HOME/.config/surgegen/profile.json
    #[arg(short, long)]
    pub profile: Option<PathBuf>,
    #[command(subcommand)]
    pub cmd: cli::SubCommand,
}

fn main() -> ExitCode {
    let args = ProgramArgs::parse();
    if let Err(err) = logging::init_tracing() {
        eprintln!("Failed to set up logging: {}", err);
        return ExitCode::FAILURE;
    }
    let path = match config::parse_profile_path(&args.profile) {
        Ok(p) => p,
        Err(err) => {
            eprintln!("Failed to resolve the profile path: {}", err);
            return ExitCode::FAILURE;
        }
    };
    let session = session::ConfigSession::open(config::ProfileStore::new(path));
    match cli::run(session, args.cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}", err);
            ExitCode::FAILURE
        }
    }
}
