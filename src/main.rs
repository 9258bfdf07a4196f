use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use pensum::cli::TrackerOptions;
use pensum::Result;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pensum")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Curriculum approval tracker", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(flatten)]
    paths: PathArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct PathArgs {
    /// Catalog file (overrides pensum/config.toml)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Storage file (overrides pensum/config.toml)
    #[arg(long, global = true)]
    storage: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize Pensum in current directory
    Init {
        /// Overwrite existing config and catalog
        #[arg(short, long)]
        force: bool,
    },

    /// Show approval state of every subject
    Status {
        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Toggle approval of one or more subjects, in order
    Toggle {
        /// Subject IDs
        #[arg(required = true)]
        ids: Vec<String>,
    },

    /// Pick subjects to toggle from a menu
    Interactive,

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let options = TrackerOptions {
        catalog: cli.paths.catalog,
        storage: cli.paths.storage,
    };

    match cli.command {
        Commands::Init { force } => {
            println!("{}", "🚀 Initializing Pensum...".cyan());
            pensum::cli::init::run(force)?;
        }

        Commands::Status { json } => {
            pensum::cli::status::run(&options, json)?;
        }

        Commands::Toggle { ids } => {
            pensum::cli::toggle::run(&options, &ids)?;
        }

        Commands::Interactive => {
            pensum::cli::interactive::run(&options)?;
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "pensum", &mut io::stdout());
        }
    }

    Ok(())
}
