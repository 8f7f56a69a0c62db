//! route command - IPv6 routing table manipulation.

use clap::{Parser, Subcommand};
use route6::{Error, RouteAction, USAGE, build_and_submit};

#[derive(Parser)]
#[command(name = "route", version, about = "IPv6 routing table manipulation tool")]
struct Cli {
    /// Increase log verbosity (-v, -vv).
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Add a route.
    Add {
        /// Route specification: TARGET [gw GW] [metric M] [mod] [dyn] [[dev] IF].
        #[arg(trailing_var_arg = true)]
        tokens: Vec<String>,
    },

    /// Delete a route.
    Del {
        /// Route specification: TARGET [gw GW] [metric M] [mod] [dyn] [[dev] IF].
        #[arg(trailing_var_arg = true)]
        tokens: Vec<String>,
    },

    /// Flush the routing table (not supported for inet6).
    Flush,
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing; -v raises the default level.
    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    let (action, tokens) = match cli.command {
        Some(Command::Add { tokens }) => (RouteAction::Add, tokens),
        Some(Command::Del { tokens }) => (RouteAction::Delete, tokens),
        Some(Command::Flush) => (RouteAction::Flush, Vec::new()),
        None => (RouteAction::Help, Vec::new()),
    };

    if let Err(e) = build_and_submit(action, &tokens) {
        eprintln!("route: {e}");
        if e.is_usage() {
            eprintln!("{USAGE}");
        }
        std::process::exit(exit_code(&e));
    }
}

/// Exit codes: 0 success, 2 usage error, 3 lookup failure, 4 channel error.
fn exit_code(err: &Error) -> i32 {
    match err {
        Error::Usage(_) | Error::FlushUnsupported => 2,
        Error::Lookup { .. } => 3,
        Error::Socket(_) | Error::InterfaceNotFound { .. } | Error::Ioctl { .. } => 4,
    }
}
