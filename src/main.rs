use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use courseplan::Result;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "courseplan")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Course eligibility and scheduling conflict pipeline", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse transcript text into category-tagged course codes
    Parse {
        /// Path to the extracted transcript text
        transcript: PathBuf,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Validate course codes against the catalog's prerequisite graph
    Validate {
        /// Course codes to validate (e.g. "CS253 QTM100")
        #[arg(required = true)]
        codes: Vec<String>,

        /// Courses already taken or selected (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        taken: Vec<String>,

        /// Catalog base URL (defaults to COURSEPLAN_CATALOG_URL)
        #[arg(long)]
        catalog_url: Option<String>,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Detect meeting-time conflicts between courses and blocked time
    Conflicts {
        /// Meeting entries, either "NAME=MWF 9:00am-9:50am" or bare patterns
        #[arg(required = true)]
        meetings: Vec<String>,

        /// YAML file with blocked-time preferences
        #[arg(short, long)]
        blocked: Option<PathBuf>,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Search the catalog and flag hard conflicts per result
    Search {
        /// Free-text query
        query: String,

        /// Maximum number of results
        #[arg(short, long, default_value_t = 10)]
        limit: usize,

        /// Catalog base URL (defaults to COURSEPLAN_CATALOG_URL)
        #[arg(long)]
        catalog_url: Option<String>,

        /// YAML file with blocked-time preferences
        #[arg(short, long)]
        blocked: Option<PathBuf>,

        /// Output in JSON format
        #[arg(short, long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { transcript, json } => {
            courseplan::cli::parse::run(&transcript, json).await
        }
        Commands::Validate {
            codes,
            taken,
            catalog_url,
            json,
        } => courseplan::cli::validate::run(codes, taken, catalog_url, json).await,
        Commands::Conflicts {
            meetings,
            blocked,
            json,
        } => courseplan::cli::conflicts::run(meetings, blocked.as_deref(), json).await,
        Commands::Search {
            query,
            limit,
            catalog_url,
            blocked,
            json,
        } => {
            courseplan::cli::search::run(&query, limit, catalog_url, blocked.as_deref(), json)
                .await
        }
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "courseplan", &mut io::stdout());
            Ok(())
        }
    }
}
