//! yaml2fhir CLI
//!
//! Command-line interface converting YAML data files into FHIR JSON

mod commands;
mod output;

use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::{Shell, generate};
use std::io::{self, IsTerminal};
use std::path::PathBuf;
use tracing::error;
use yaml2fhir_core::{Result, init_tracing};

#[derive(Parser)]
#[command(name = "yaml2fhir")]
#[command(about = "yaml2fhir: convert concise YAML data into FHIR resources")]
#[command(version = yaml2fhir_core::VERSION)]
#[command(
    long_about = "yaml2fhir turns short, hand-written YAML data objects into FHIR JSON.\n\
Shorthand codes become CodeableConcepts, dates become instants, and every\n\
resource is linked to its Patient.\n\
\n\
Examples:\n  \
yaml2fhir convert patient.yaml              # Print FHIR JSON to stdout\n  \
yaml2fhir convert --id 123 data/*.yaml -o out # Write one JSON file per input\n  \
cat obs.yaml | yaml2fhir convert --bundle    # Read stdin, emit a Bundle\n  \
yaml2fhir resources --detailed              # List supported resource types"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file path
    #[arg(
        short,
        long,
        global = true,
        help = "Path to configuration file (.yaml2fhirrc.json/.yaml2fhirrc.toml/yaml2fhir.yaml)"
    )]
    config: Option<PathBuf>,

    /// Verbose output (can be used multiple times for increased verbosity)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Number of threads to use for parallel processing
    #[arg(
        short = 'j',
        long,
        global = true,
        help = "Number of threads (default: number of CPU cores)"
    )]
    threads: Option<usize>,

    /// Generate shell completion script
    #[arg(
        long,
        value_enum,
        help = "Generate completion script for specified shell"
    )]
    generate_completion: Option<Shell>,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert YAML data files into FHIR JSON
    Convert {
        /// YAML files to convert
        #[arg(help = "YAML files to convert ('-' or none reads stdin)")]
        paths: Vec<PathBuf>,

        /// Id for the converted resources and their Patient reference
        #[arg(long, help = "Id assigned to each resource and used for its Patient reference")]
        id: Option<String>,

        /// Target FHIR version
        #[arg(long, help = "FHIR version (default: from config, else dstu2)")]
        fhir_version: Option<String>,

        /// Output directory
        #[arg(short, long, help = "Write one <name>.json per input file into this directory")]
        output: Option<PathBuf>,

        /// Wrap resources in a collection Bundle
        #[arg(long, help = "Wrap the resources in a collection Bundle")]
        bundle: bool,

        /// Compact JSON output
        #[arg(long, help = "Write compact JSON instead of pretty-printed JSON")]
        compact: bool,

        /// Skip invalid data objects instead of failing
        #[arg(long, help = "Log and skip data objects that fail to convert")]
        keep_going: bool,
    },

    /// List the resource types supported for a FHIR version
    Resources {
        /// FHIR version
        #[arg(long, help = "FHIR version (default: from config, else dstu2)")]
        fhir_version: Option<String>,

        /// Show properties, defaults and references
        #[arg(long, help = "Show recognized properties and defaults for each type")]
        detailed: bool,
    },

    /// Configuration file management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },

    /// Show version information
    #[command(alias = "ver")]
    Version {
        /// Show detailed version information
        #[arg(long, help = "Show detailed version and build information")]
        detailed: bool,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Initialize a new configuration file
    Init {
        /// Configuration file format
        #[arg(long, default_value = "yaml", help = "Configuration file format")]
        format: ConfigFormat,

        /// Overwrite existing configuration file
        #[arg(long, help = "Overwrite existing configuration file")]
        force: bool,
    },

    /// Validate configuration file
    Validate {
        /// Path to configuration file to validate
        #[arg(help = "Path to configuration file (default: search upward)")]
        path: Option<PathBuf>,
    },

    /// Show current configuration
    Show,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum ConfigFormat {
    /// JSON configuration format
    Json,
    /// TOML configuration format
    Toml,
    /// YAML configuration format
    Yaml,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Handle shell completion generation
    if let Some(shell) = cli.generate_completion {
        generate_completion_script(shell);
        return Ok(());
    }

    // Initialize colored output, only when stdout is a terminal
    if !cli.no_color && std::env::var("NO_COLOR").is_err() && io::stdout().is_terminal() {
        colored::control::set_override(true);
    } else {
        colored::control::set_override(false);
    }

    // Initialize tracing based on verbosity
    let log_level = match cli.verbose {
        0 => "yaml2fhir=error",
        1 => "yaml2fhir=warn",
        2 => "yaml2fhir=info",
        3 => "yaml2fhir=debug",
        _ => "yaml2fhir=trace",
    };
    unsafe {
        std::env::set_var("RUST_LOG", log_level);
    }
    init_tracing();

    // Set thread pool size if specified
    if let Some(threads) = cli.threads
        && let Err(e) = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
    {
        error!("Failed to set thread pool size: {}", e);
        std::process::exit(1);
    }

    match run_command(cli) {
        Ok(()) => Ok(()),
        Err(e) => {
            error!("yaml2fhir failed: {}", e);
            std::process::exit(1);
        }
    }
}

fn generate_completion_script(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, &mut io::stdout());
}

fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Some(Commands::Convert {
            paths,
            id,
            fhir_version,
            output,
            bundle,
            compact,
            keep_going,
        }) => commands::convert::convert_command(
            commands::convert::ConvertOptions {
                paths,
                id,
                fhir_version,
                output,
                bundle,
                compact,
                keep_going,
            },
            cli.config,
        ),

        Some(Commands::Resources {
            fhir_version,
            detailed,
        }) => commands::resources_command(fhir_version, detailed, cli.config),

        Some(Commands::Config { action }) => match action {
            ConfigAction::Init { format, force } => {
                commands::config::config_init_command(format, force)
            }
            ConfigAction::Validate { path } => commands::config::config_validate_command(path),
            ConfigAction::Show => commands::config::config_show_command(cli.config),
        },

        Some(Commands::Version { detailed }) => {
            if detailed {
                println!("yaml2fhir {}", yaml2fhir_core::VERSION);
                println!("Build information:");
                println!("  Target: {}", std::env::consts::ARCH);
                println!("  OS: {}", std::env::consts::OS);
                println!(
                    "  FHIR versions: {}",
                    yaml2fhir_core::FhirVersion::ALL
                        .iter()
                        .map(|v| format!("{} ({})", v.tag(), v.release()))
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            } else {
                println!("{}", yaml2fhir_core::VERSION);
            }
            Ok(())
        }

        None => {
            // No subcommand provided, show help
            let mut cmd = Cli::command();
            cmd.print_help()?;
            Ok(())
        }
    }
}
