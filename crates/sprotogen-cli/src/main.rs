//! sprotogen CLI - Source generator for sproto schemas
//!
//! Commands:
//! - `sprotogen generate` - Generate Go or Rust source from compiled descriptors
//! - `sprotogen check` - Validate descriptors and list message identifiers

use clap::{Parser, Subcommand};
use sprotogen_core::TargetLanguage;
use std::path::PathBuf;

mod check;
mod codegen;
mod format;
mod generate;
mod logging;

#[derive(Parser)]
#[command(name = "sprotogen")]
#[command(author, version, about = "Source generator for sproto schemas", long_about = None)]
struct Cli {
    /// Log level used when SPROTOGEN_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate source for one compiled schema file
    Generate {
        /// Descriptor JSON produced by the schema compiler
        #[arg(short, long)]
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Namespace (Go package / Rust module)
        #[arg(short, long)]
        namespace: Option<String>,

        /// Target language (go, rust)
        #[arg(short, long)]
        lang: Option<TargetLanguage>,

        /// Emit codec registration glue
        #[arg(short, long)]
        register: bool,

        /// Skip the language formatter
        #[arg(long)]
        no_format: bool,

        /// Path to a sprotogen.toml configuration
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Validate a compiled schema file and list its message identifiers
    Check {
        /// Descriptor JSON produced by the schema compiler
        #[arg(short, long)]
        input: PathBuf,

        /// Namespace used for qualified names
        #[arg(short, long)]
        namespace: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    logging::init_logging(&cli.log_level);

    match cli.command {
        Commands::Generate {
            input,
            output,
            namespace,
            lang,
            register,
            no_format,
            config,
        } => {
            let overrides = generate::Overrides {
                namespace,
                lang,
                output,
                register,
                no_format,
            };
            generate::run(&input, config.as_deref(), overrides)?;
        }
        Commands::Check { input, namespace } => {
            check::run(&input, &namespace)?;
        }
    }

    Ok(())
}
