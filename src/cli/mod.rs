pub mod convert;

use clap::{Parser, Subcommand};

use convert::convert;

use crate::api::api;
use crate::services::files::output_dir;
use crate::services::shared::constants::DEFAULT_PORT;
use crate::services::shared::env::get_env_variable;

#[derive(Parser, Debug)]
struct Args {
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the upload web server.
    Serve {
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Convert a file, or every file in a directory, without the server.
    Convert { path: String },
}

fn resolve_port(flag: Option<u16>) -> u16 {
    flag.or_else(|| get_env_variable("PORT").and_then(|p| p.parse().ok()))
        .unwrap_or(DEFAULT_PORT)
}

pub async fn cli() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.cmd {
        Command::Serve { port } => {
            api(output_dir(), resolve_port(port)).await?;
        }
        Command::Convert { path } => {
            convert(&path).await?;
        }
    }
    Ok(())
}
