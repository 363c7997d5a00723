//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::commands;
use mau2::output::OutputMode;

/// mau2 - Civic engagement backend
#[derive(Parser, Debug)]
#[command(
    name = "mau2",
    version,
    about = "Civic engagement backend: petitions, incident reports, routing",
    long_about = "Serve the mau2 civic engagement API.\n\n\
                  Citizens submit petitions and incident reports; each one is\n\
                  routed to the responsible public body by a static table or a\n\
                  language-model classifier with static fallback."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Config file (defaults to $MAU2_CONFIG or ~/.config/mau2/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP API server
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Route a report or petition without storing it
    Classify {
        #[command(subcommand)]
        target: ClassifyTarget,
    },

    /// Print the static routing table
    Routes,

    /// Write a default config file
    Init {
        /// Overwrite an existing config file
        #[arg(short, long)]
        force: bool,
    },

    /// Show version
    Version,
}

#[derive(Subcommand, Debug)]
pub enum ClassifyTarget {
    /// Route an incident report to a department
    Report {
        /// Report type, e.g. "pothole" or "Water Leak"
        #[arg(short = 't', long = "type")]
        report_type: String,

        /// What happened
        #[arg(short, long, default_value = "")]
        description: String,

        /// Where it happened
        #[arg(short, long, default_value = "")]
        location: String,
    },

    /// Route a petition to a public body
    Petition {
        /// Category, e.g. "transportation" or "Public Safety"
        #[arg(short = 'k', long)]
        category: String,

        /// Petition title
        #[arg(short, long, default_value = "")]
        title: String,

        /// Petition description
        #[arg(short, long, default_value = "")]
        description: String,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Command::Serve { host, port }) => commands::serve(config_path, host, port),
        Some(Command::Classify { target }) => match target {
            ClassifyTarget::Report {
                report_type,
                description,
                location,
            } => commands::classify_report(
                config_path,
                &report_type,
                &description,
                &location,
                output_mode,
            ),
            ClassifyTarget::Petition {
                category,
                title,
                description,
            } => commands::classify_petition(
                config_path,
                &category,
                &title,
                &description,
                output_mode,
            ),
        },
        Some(Command::Routes) => {
            commands::routes(output_mode);
            Ok(())
        },
        Some(Command::Init { force }) => commands::init(config_path, force, output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("mau2 v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("mau2 v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'mau2 --help' for usage");
                println!("Run 'mau2 serve' to start the API");
            }
            Ok(())
        },
    }
}
