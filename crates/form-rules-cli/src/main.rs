mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use form_rules::config::CONFIG_FILE;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "form-rules")]
#[command(version, about = "Derive validation rules from the form controls in your views", long_about = None)]
struct Cli {
    /// Config file
    #[arg(long, global = true, env = "FORM_RULES_CONFIG", default_value = CONFIG_FILE)]
    config: PathBuf,

    /// Views directory (overrides the config file)
    #[arg(long, global = true)]
    views: Option<PathBuf>,

    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a view and print its rules
    Extract {
        /// View name (user.register or user/register)
        view: String,

        /// View variable as key=value (value parsed as JSON when possible)
        #[arg(long = "var", value_parser = commands::parse_var)]
        vars: Vec<(String, String)>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// Extract rules from an HTML file (or stdin) without rendering
    Scan {
        /// HTML file; reads stdin when omitted
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "json")]
        format: OutputFormat,
    },

    /// List views and how many rules each declares
    List,

    /// Validate urlencoded form data against a view's rules
    Check {
        /// View name
        view: String,

        /// Submitted data, e.g. "email=a%40b.co&age=30"
        #[arg(short, long)]
        data: String,

        /// View variable as key=value
        #[arg(long = "var", value_parser = commands::parse_var)]
        vars: Vec<(String, String)>,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON object
    Json,
    /// Aligned field / rule columns
    Table,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<ExitCode> {
    // .env is optional
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = commands::Context::load(&cli.config, cli.views)?;

    match cli.command {
        Commands::Extract { view, vars, format } => {
            commands::extract::execute(&ctx, &view, &vars, format)?;
        }
        Commands::Scan { file, format } => {
            commands::scan::execute(&ctx, file.as_deref(), format)?;
        }
        Commands::List => {
            commands::list::execute(&ctx)?;
        }
        Commands::Check { view, data, vars } => {
            if !commands::check::execute(&ctx, &view, &data, &vars)? {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
