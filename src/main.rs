use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod command;
mod compile;
mod config;
mod error;
mod finger;
mod mark;
mod naming;
mod platform;
mod progress;
mod repo;
mod report;
#[cfg(test)]
mod revision;

const APP_VERSION: &str = concat!(
    env!("CARGO_PKG_NAME"),
    " version ",
    env!("CARGO_PKG_VERSION"),
    " (rev:",
    env!("GIT_HASH"),
    ")"
);

const PLATFORM_HELP: &str =
    "Target platform ('linux' or 'native'); the last one given wins, omit to decide from the host";

#[derive(Parser)]
#[command(name = "markbuild")]
#[command(about = "Fingerprint a Go repository and build it", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[arg(long, short = 'V', help = "Print version")]
    version: bool,

    #[arg(long, global = true, help = "Enable debug output on stderr")]
    debug: bool,
}

#[derive(Subcommand)]
enum Commands {
    #[command(alias = "b")]
    #[command(about = "Build the configured fixed-name target (alias: b)")]
    Build {
        #[arg(help = PLATFORM_HELP)]
        platform: Vec<String>,

        #[arg(long, help = "Print a JSON build report on stdout; progress goes to stderr")]
        report: bool,
    },

    #[command(alias = "m")]
    #[command(about = "Fingerprint the repo and build a target named after the cwd (alias: m)")]
    Mark {
        #[arg(help = PLATFORM_HELP)]
        platform: Vec<String>,

        #[arg(long, help = "Print a JSON build report on stdout; progress goes to stderr")]
        report: bool,
    },

    #[command(about = "Print the repository root and latest commit fingerprint (no alias)")]
    Finger,

    #[command(about = "Open the config file in your editor or create it with defaults (no alias)")]
    Config,
}

fn selector(platform: &[String]) -> Option<&str> {
    platform.last().map(String::as_str)
}

fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("markbuild=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();

    if cli.version {
        println!("{APP_VERSION}");
        std::process::exit(0);
    }

    init_tracing(cli.debug);

    match cli.command {
        Some(command) => match command {
            Commands::Build { platform, report } => {
                if let Err(e) = mark::build(selector(&platform), report) {
                    eprintln!("Error building target: {e}");
                    std::process::exit(1);
                }
            }
            Commands::Mark { platform, report } => {
                if let Err(e) = mark::mark(selector(&platform), report) {
                    eprintln!("Error marking and building target: {e}");
                    std::process::exit(1);
                }
            }
            Commands::Finger => {
                if let Err(e) = mark::finger() {
                    eprintln!("Error reading fingerprint: {e}");
                    std::process::exit(1);
                }
            }
            Commands::Config => {
                if let Err(e) = config::init_config() {
                    eprintln!("Error initializing config: {e}");
                    std::process::exit(1);
                }
            }
        },
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}
