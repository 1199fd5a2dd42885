//! Dragon Ball CLI
//!
//! Command-line front end for the Dragon Ball heroes API.

use anyhow::Result;
use clap::{Parser, Subcommand};
use dragonball_lib::SessionToken;

mod commands;
mod ui;

#[derive(Parser)]
#[command(name = "dragonball")]
#[command(about = "Dragon Ball CLI - Log in and browse heroes and their transformations", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// API base URL (can also be set via DRAGONBALL_BASE_URL env var)
    #[arg(long, global = true)]
    base_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and print the session token
    Login {
        /// Account user name (prompted if omitted)
        #[arg(short, long)]
        user: Option<String>,

        /// Account password (prompted without echo if omitted)
        #[arg(short, long)]
        password: Option<String>,
    },

    /// List all heroes
    Heroes {
        /// Session token returned by `login`
        #[arg(short, long, env = "DRAGONBALL_TOKEN", hide_env_values = true)]
        token: String,

        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// List the transformations of a hero
    Transformations {
        /// Session token returned by `login`
        #[arg(short, long, env = "DRAGONBALL_TOKEN", hide_env_values = true)]
        token: String,

        /// Id of the parent hero
        #[arg(long)]
        hero: String,

        /// Print raw JSON instead of a table
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("dragonball_cli=debug,dragonball_lib=debug")
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter("dragonball_cli=info,dragonball_lib=warn")
            .with_writer(std::io::stderr)
            .init();
    }

    let client = commands::build_client(cli.base_url)?;

    // Dispatch commands
    match cli.command {
        Commands::Login { user, password } => {
            commands::login::run(&client, user, password).await?;
        }
        Commands::Heroes { token, json } => {
            commands::heroes::run(&client, &SessionToken::from(token), json).await?;
        }
        Commands::Transformations { token, hero, json } => {
            commands::transformations::run(&client, &SessionToken::from(token), &hero, json)
                .await?;
        }
    }

    Ok(())
}
