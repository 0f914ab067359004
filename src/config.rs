use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Parser)]
#[command(name = "lab_allocator", about = "Allocate student groups to labs across sessions")]
pub struct Cli {
    /// Log filter passed to env_logger (e.g. "info", "lab_allocator=trace")
    #[arg(long, env = "LAB_ALLOC_LOG", default_value = "info", global = true)]
    pub log_level: String,

    /// Address the HTTP API listens on
    #[arg(long, env = "LAB_ALLOC_ADDR", default_value = DEFAULT_ADDR, global = true)]
    pub addr: String,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Serve the allocation HTTP API on `--addr`
    Serve,
    /// Allocate a roster from a JSON file and print the result
    Allocate {
        input: PathBuf,

        #[arg(long)]
        pretty: bool,
    },
}

impl Cli {
    /// The subcommand to run; `serve` when omitted.
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_allocate() {
        let cli = Cli::parse_from(["lab_allocator", "allocate", "roster.json", "--pretty"]);
        match cli.command() {
            Command::Allocate { input, pretty } => {
                assert_eq!(input, PathBuf::from("roster.json"));
                assert!(pretty);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_serve_addr() {
        let cli = Cli::parse_from(["lab_allocator", "--log-level", "debug", "serve", "--addr", "0.0.0.0:9000"]);
        assert_eq!(cli.log_level, "debug");
        assert_eq!(cli.command(), Command::Serve);
        assert_eq!(cli.addr, "0.0.0.0:9000");
    }

    #[test]
    fn test_serve_is_default() {
        let cli = Cli::parse_from(["lab_allocator", "--addr", "127.0.0.1:9100"]);
        assert_eq!(cli.command, None);
        assert_eq!(cli.command(), Command::Serve);
        assert_eq!(cli.addr, "127.0.0.1:9100");
    }
}
