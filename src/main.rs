#![forbid(unsafe_code)]
//! Navigator kiosk command line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use navigator::commands::{
    execute_matrix, execute_overrides, execute_run, execute_score, execute_validate,
    MatrixOptions, OverridesOptions, OverridesSubcommand, RunOptions, ScoreOptions,
    ValidateOptions,
};

#[derive(Parser)]
#[command(name = "navigator")]
#[command(about = "Guided-questionnaire kiosk - weighted recommendation scoring")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Content set file (builtin content when omitted)
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Contextual content file (builtin when omitted)
    #[arg(long, global = true)]
    contextual: Option<PathBuf>,

    /// Override record file
    #[arg(short, long, global = true, default_value = ".navigator.overrides.json")]
    overrides: PathBuf,

    /// Config file path
    #[arg(short, long, global = true, default_value = ".navigator.config.json")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the content set and contextual content
    Validate,

    /// Print the (override-merged) signal mapping matrix
    Matrix,

    /// Run an interactive kiosk session
    Run,

    /// Score a questionnaire non-interactively
    Score {
        /// Scenario id
        #[arg(long)]
        scenario: String,

        /// Sub-scenario id
        #[arg(long)]
        sub_scenario: String,

        /// Answer picks in question order: an option id, or question:option
        /// (can specify multiple)
        #[arg(long = "pick")]
        picks: Vec<String>,

        /// Output the recommendation as JSON
        #[arg(long)]
        json: bool,
    },

    /// Manage the override record
    Overrides {
        #[command(subcommand)]
        cmd: OverridesCommands,
    },
}

#[derive(Subcommand)]
enum OverridesCommands {
    /// Export the record to a portable file
    Export {
        /// Output path (default: dated navigator-config file)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Import a previously exported record
    Import {
        /// Export file to import
        input: PathBuf,
    },

    /// Discard every override
    Reset {
        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("navigator=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("navigator=warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let overrides = cli.overrides.exists().then(|| cli.overrides.clone());
    let config = cli.config.exists().then(|| cli.config.clone());

    match cli.command {
        Commands::Validate => {
            let options = ValidateOptions {
                content: cli.content,
                contextual: cli.contextual,
            };
            execute_validate(options)?;
        }

        Commands::Matrix => {
            let options = MatrixOptions {
                content: cli.content,
                overrides,
            };
            execute_matrix(options)?;
        }

        Commands::Run => {
            let options = RunOptions {
                content: cli.content,
                contextual: cli.contextual,
                overrides,
                config,
            };
            execute_run(options)?;
        }

        Commands::Score { scenario, sub_scenario, picks, json } => {
            let options = ScoreOptions {
                content: cli.content,
                contextual: cli.contextual,
                overrides,
                config,
                scenario,
                sub_scenario,
                picks,
                json,
            };
            execute_score(options)?;
        }

        Commands::Overrides { cmd } => {
            let options = OverridesOptions {
                overrides: cli.overrides,
            };
            let subcommand = match cmd {
                OverridesCommands::Export { output } => OverridesSubcommand::Export { output },
                OverridesCommands::Import { input } => OverridesSubcommand::Import { input },
                OverridesCommands::Reset { yes } => OverridesSubcommand::Reset { yes },
            };
            execute_overrides(options, subcommand)?;
        }
    }

    Ok(())
}
