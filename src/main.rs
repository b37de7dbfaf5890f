use anyhow::{Context, Result};
use arxiv_cite::authors::{ArxivAuthorParser, AuthorParser};
use arxiv_cite::cite::{format_author_list, Citation, CitationBuilder};
use arxiv_cite::config::{
    default_config_path, find_config_file, get_config, load_config, Config, LogFormat,
    OutputConfig, OutputFormat, CONFIG_FILE_NAME,
};
use arxiv_cite::input::load_metadata;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// arXiv Cite - Generate BibTeX entries for arXiv papers
#[derive(Parser, Debug)]
#[command(name = "arxiv-cite")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "hongkongkiwi")]
#[command(about = "Generate BibTeX entries for arXiv papers from their metadata", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose logging (can be used multiple times for more verbosity: -v, -vv)
    #[arg(long, short, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress everything but errors in the log
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Output format (overrides the config file)
    #[arg(long, short, value_enum, global = true)]
    output: Option<OutputArg>,

    /// Configuration file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Show all environment variables
    #[arg(long)]
    env: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Output format for citations
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum OutputArg {
    /// BibTeX entry
    Bibtex,
    /// JSON with every citation field
    Json,
}

impl From<OutputArg> for OutputFormat {
    fn from(arg: OutputArg) -> Self {
        match arg {
            OutputArg::Bibtex => OutputFormat::Bibtex,
            OutputArg::Json => OutputFormat::Json,
        }
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the BibTeX entry for a metadata file
    #[command(alias = "b")]
    Bibtex {
        /// Metadata file (.json or .toml), or - for stdin
        file: PathBuf,
    },

    /// Print only the citation key for a metadata file
    #[command(alias = "k")]
    Key {
        /// Metadata file (.json or .toml), or - for stdin
        file: PathBuf,
    },

    /// Parse and format a raw author line
    #[command(alias = "a")]
    Authors {
        /// Raw author string, e.g. "A. Einstein, B. Podolsky and N. Rosen"
        raw: String,

        /// Also print the parsed name parts as JSON
        #[arg(long)]
        entries: bool,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Write a default configuration file
    Init {
        /// Where to write the file (default: user config directory)
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

/// JSON output: every citation field plus the rendered entry
#[derive(Serialize)]
struct JsonCitation<'a> {
    #[serde(flatten)]
    citation: &'a Citation,
    bibtex: String,
}

fn print_env_vars() {
    println!("arXiv Cite Environment Variables");
    println!("================================");
    println!();
    println!("Logging:");
    println!("  ARXIV_CITE_LOGGING__LEVEL     Default log level (default: warn)");
    println!("  ARXIV_CITE_LOGGING__FORMAT    Log format: text or json (default: text)");
    println!();
    println!("Output:");
    println!("  ARXIV_CITE_OUTPUT__FORMAT            Output format: bibtex or json (default: bibtex)");
    println!("  ARXIV_CITE_OUTPUT__TRAILING_NEWLINE  Print a newline after each entry (default: true)");
    println!();
    println!("Other Settings:");
    println!("  RUST_LOG                      Rust logging filter (overrides the level above)");
    println!();
    println!("Config file lookup: ./{CONFIG_FILE_NAME}, then the user config directory");
    std::process::exit(0);
}

fn init_tracing(cli: &Cli, config: &Config) {
    let level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => config.logging.level.as_str(),
        (false, 1) => "debug",
        _ => "trace",
    };

    let env_filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("arxiv_cite={}", level)),
    );

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.logging.format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
    }
}

fn emit(text: &str, output: &OutputConfig) {
    if output.trailing_newline {
        println!("{text}");
    } else {
        print!("{text}");
    }
}

fn render_citation(citation: &Citation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Bibtex => Ok(citation.to_bibtex()),
        OutputFormat::Json => {
            let json = JsonCitation {
                citation,
                bibtex: citation.to_bibtex(),
            };
            serde_json::to_string_pretty(&json).context("Failed to serialize citation")
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.env {
        print_env_vars();
    }

    // Load configuration from file if specified or found in default locations
    let config_path = cli.config.clone().or_else(find_config_file);
    let mut config = match &config_path {
        Some(path) => load_config(path)
            .with_context(|| format!("Failed to load config file {}", path.display()))?,
        None => get_config().context("Failed to read configuration from environment")?,
    };

    init_tracing(&cli, &config);

    if let Some(path) = &config_path {
        tracing::info!("Using config file: {}", path.display());
    }

    if let Some(output) = cli.output {
        config.output.format = output.into();
    }

    match cli.command {
        Some(Commands::Bibtex { file }) => {
            let doc = load_metadata(&file)?;
            let citation = CitationBuilder::default().cite(&doc);
            emit(&render_citation(&citation, config.output.format)?, &config.output);
        }

        Some(Commands::Key { file }) => {
            let doc = load_metadata(&file)?;
            let citation = CitationBuilder::default().cite(&doc);
            emit(&citation.key, &config.output);
        }

        Some(Commands::Authors { raw, entries }) => {
            let parsed = ArxivAuthorParser.parse(&raw);
            emit(&format_author_list(&parsed), &config.output);
            if entries {
                let json = serde_json::to_string_pretty(&parsed)
                    .context("Failed to serialize author entries")?;
                emit(&json, &config.output);
            }
        }

        Some(Commands::Config { command }) => match command {
            ConfigCommands::Show => {
                emit(&config.to_toml()?, &config.output);
            }
            ConfigCommands::Init { path } => {
                let path = path
                    .or_else(default_config_path)
                    .context("Could not determine the user config directory; pass --path")?;
                Config::write_default(&path)?;
                println!("Wrote default configuration to {}", path.display());
            }
        },

        None => {
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
