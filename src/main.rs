//! sbom-score: SBOM quality scoring and compliance checks
//!
//! Scores normalized `CycloneDX`/SPDX documents against weighted quality
//! categories and checks them against NTIA, BSI TR-03183-2 and FSCT profiles.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use sbom_score::{
    cli::{self, ListTarget},
    config::{ScoreConfig, Validatable},
    pipeline::exit_codes,
    quality::CompliancePolicy,
    reports::ReportFormat,
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with catalog info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nScoring Categories:",
        "\n  identification, provenance, integrity, completeness, licensing,",
        "\n  vulnerability, structural, compinfo (informational)",
        "\n\nCompliance Profiles:",
        "\n  ntia, bsi-v1.1, bsi-v2.0, fsct",
        "\n\nOutput Formats:",
        "\n  summary, detailed, json"
    )
}

#[derive(Parser)]
#[command(name = "sbom-score")]
#[command(version, long_version = build_long_version())]
#[command(about = "SBOM quality scoring and compliance checks", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  Score below --min-score / profile not compliant
    3  Error occurred

EXAMPLES:
    # Score a document across all categories
    sbom-score score app.sbom.json

    # CI gate on quality
    sbom-score score build/*.json --min-score 7 -o summary

    # Check NTIA and BSI compliance as JSON
    sbom-score compliance app.sbom.json -p ntia -p bsi-v2.0 -o json")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true, env = "SBOM_SCORE_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

/// Output options shared by `score` and `compliance`
#[derive(Parser)]
struct OutputArgs {
    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Show not-applicable features in detailed output
    #[arg(long)]
    show_ignored: bool,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Normalized SBOM documents (JSON)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Category to score (key or alias); repeatable, default all
    #[arg(short, long = "category")]
    categories: Vec<String>,

    /// Exit with code 1 if any overall score is below this value
    #[arg(long)]
    min_score: Option<f64>,

    /// YAML file with custom profile definitions
    #[arg(long)]
    profiles_file: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,
}

/// Arguments for the `compliance` subcommand
#[derive(Parser)]
struct ComplianceArgs {
    /// Normalized SBOM documents (JSON)
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Profile to check (key or alias); repeatable
    #[arg(short, long = "profile")]
    profiles: Vec<String>,

    /// YAML file with custom profile definitions
    #[arg(long)]
    profiles_file: Option<PathBuf>,

    /// Verdict policy: all-required or threshold:N
    #[arg(long)]
    policy: Option<CompliancePolicy>,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Score documents across weighted quality categories
    Score(ScoreArgs),

    /// Check documents against compliance profiles
    Compliance(ComplianceArgs),

    /// List categories, features or profiles
    List {
        #[arg(value_enum)]
        target: ListTarget,

        /// Include profiles from this YAML file
        #[arg(long)]
        profiles_file: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    Schema {
        /// Emit the profile definition schema instead
        #[arg(long)]
        profiles: bool,

        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print the discovered config file
    Path,
    /// Generate an example .sbom-score.yaml in the current directory
    Init,
}

/// Load the config file and layer CLI flags over it
fn effective_config(
    cli_config: Option<&std::path::Path>,
    overrides: &ScoreConfig,
) -> Result<ScoreConfig> {
    let (config, loaded_from) = ScoreConfig::from_file_with_overrides(cli_config, overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    let errors = config.validate();
    if !errors.is_empty() {
        let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
        anyhow::bail!("Invalid configuration:\n  {}", messages.join("\n  "));
    }
    Ok(config)
}

fn output_overrides(args: &OutputArgs, no_color: bool, config: &mut ScoreConfig) {
    if let Some(format) = args.output {
        config.output.format = format;
    }
    config.output.file.clone_from(&args.output_file);
    config.output.no_color = no_color;
}

fn exit_with(code: i32) -> Result<()> {
    if code != exit_codes::SUCCESS {
        std::process::exit(code);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = run(cli) {
        tracing::error!("{e:#}");
        std::process::exit(exit_codes::ERROR);
    }
}

fn init_logging(cli: &Cli) {
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Score(args) => {
            let mut overrides = ScoreConfig::default();
            overrides.scoring.categories = args.categories;
            overrides.scoring.min_score = args.min_score;
            overrides.compliance.profiles_file = args.profiles_file;
            output_overrides(&args.output, cli.no_color, &mut overrides);

            let mut config = effective_config(cli.config.as_deref(), &overrides)?;
            if let Some(format) = args.output.output {
                config.output.format = format;
            }
            exit_with(cli::run_score(&args.files, &config, args.output.show_ignored)?)
        }

        Commands::Compliance(args) => {
            let mut overrides = ScoreConfig::default();
            overrides.compliance.profiles = args.profiles;
            overrides.compliance.profiles_file = args.profiles_file;
            output_overrides(&args.output, cli.no_color, &mut overrides);

            let mut config = effective_config(cli.config.as_deref(), &overrides)?;
            if let Some(format) = args.output.output {
                config.output.format = format;
            }
            if let Some(policy) = args.policy {
                config.compliance.policy = policy;
            }
            exit_with(cli::run_compliance(
                &args.files,
                &config,
                args.output.show_ignored,
            )?)
        }

        Commands::List {
            target,
            profiles_file,
        } => {
            let mut overrides = ScoreConfig::default();
            overrides.compliance.profiles_file = profiles_file;
            let config = effective_config(cli.config.as_deref(), &overrides)?;
            cli::run_list(target, &config)
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "sbom-score", &mut io::stdout());
            Ok(())
        }

        Commands::Schema { profiles, output } => {
            let schema = if profiles {
                sbom_score::config::generate_profile_schema()
            } else {
                sbom_score::config::generate_json_schema()
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => println!("{schema}"),
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    sbom_score::config::load_or_default(cli.config.as_deref());
                match &loaded_from {
                    Some(path) => eprintln!("# Loaded from: {}", path.display()),
                    None => eprintln!("# No config file found; showing defaults"),
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                match sbom_score::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => println!("{}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".sbom-score.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                std::fs::write(&target, sbom_score::config::generate_example_config())
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
