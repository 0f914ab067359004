use clap::Parser;
use lab_allocator::config::{Cli, Command};
use lab_allocator::{AllocationInput, AllocationStatus, allocate, server};
use log::{error, info};
use std::process::ExitCode;

fn run_file(input: &std::path::Path, pretty: bool) -> Result<AllocationStatus, Box<dyn std::error::Error>> {
    let raw = std::fs::read_to_string(input)?;
    let roster: AllocationInput = serde_json::from_str(&raw)?;
    let output = allocate(&roster)?;

    for session in &output.sessions {
        info!("{}", session.to_string().trim_end());
    }
    let rendered = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(output.status)
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&cli.log_level)).init();

    match cli.command() {
        Command::Serve => {
            if let Err(e) = server::run_server(&cli.addr).await {
                error!("Server failed: {}", e);
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Command::Allocate { input, pretty } => match run_file(&input, pretty) {
            Ok(AllocationStatus::Complete) => ExitCode::SUCCESS,
            Ok(AllocationStatus::Partial { .. }) => ExitCode::from(2),
            Err(e) => {
                error!("{}", e);
                ExitCode::FAILURE
            }
        },
    }
}
