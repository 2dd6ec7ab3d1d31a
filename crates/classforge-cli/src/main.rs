//! classforge CLI - Java class generator
//!
//! Commands:
//! - `classforge generate` - Generate a Java class from a JSON schema
//! - `classforge check` - Validate a JSON schema without generating

use clap::{Parser, Subcommand};
use classforge_core::ClassGenError;
use std::process::ExitCode;

mod check;
mod generate;
mod logging;
mod settings;

#[derive(Parser)]
#[command(name = "classforge")]
#[command(author, version, about = "Generate Java classes from declarative schemas", long_about = None)]
struct Cli {
    /// Path to classforge.toml (default: ./classforge.toml if present)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a Java class from a JSON schema
    Generate {
        /// Path to the JSON class schema
        #[arg(short, long)]
        schema: String,

        /// Source root to write <package>/<Name>.java into (default: stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Directory containing ClassTemplate.java.tmpl
        #[arg(short, long)]
        template_dir: Option<String>,
    },

    /// Validate a JSON class schema
    Check {
        /// Path to the JSON class schema
        #[arg(short, long)]
        schema: String,
    },
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = settings::load(cli.config.as_deref())?;
    logging::init(&config.log_level);

    match cli.command {
        Commands::Generate {
            schema,
            output,
            template_dir,
        } => {
            let config = match template_dir {
                Some(dir) => config.with_template_dir(dir),
                None => config,
            };
            generate::run(&schema, output.as_deref(), config)?;
        }
        Commands::Check { schema } => {
            check::run(&schema)?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err
                .downcast_ref::<ClassGenError>()
                .map(ClassGenError::error_code)
                .unwrap_or(1);
            ExitCode::from(code)
        }
    }
}
