use clap::{Parser, Subcommand};
use img_classify::batch::AbsentPolicy;
use img_classify::imaging::{RustBackend, classify_files};
use img_classify::{config, document, output, scan};
use std::path::{Path, PathBuf};
use tracing::debug;
use tracing_subscriber::EnvFilter;

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "img-classify")]
#[command(about = "Classify images by orientation and size, and apply CSS class tokens")]
#[command(long_about = "\
Classify images by orientation and size, and apply CSS class tokens

Labels are derived from an image's natural width and height:

  Format:  landscape (w > h), portrait (w < h), square (w = h)
  Size:    large  (either side > 1200px)
           medium (either side > 600px)
           small  (either side > 300px)

Images at or below 300px on both sides, or with missing/zero dimensions,
are left unclassified.

Class tokens are <prefix><label>, e.g. img-landscape img-medium.

Run 'img-classify gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Config file (default: ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Read image files and print their classification
    Classify {
        /// Image files or directories to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,
        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },
    /// Add class tokens to a JSON array of elements
    Apply {
        /// JSON file holding an array of {naturalWidth, naturalHeight, classList} objects
        input: PathBuf,
        /// Write the updated document here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
        /// Mark unclassifiable elements with <prefix>undefined instead of skipping them
        #[arg(long)]
        legacy: bool,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Classify { paths, json } => {
            let config = load_config(cli.config.as_deref())?;
            let files = scan::collect_images(&paths, &config.scan)?;
            debug!(count = files.len(), "collected images");
            let results = classify_files(&RustBackend::new(), &files);
            if json {
                println!("{}", serde_json::to_string_pretty(&results)?);
            } else {
                output::print_classify_output(&results);
            }
        }
        Command::Apply {
            input,
            output: output_path,
            legacy,
        } => {
            let config = load_config(cli.config.as_deref())?;
            let mut options = config.apply_options();
            if legacy {
                options.absent = AbsentPolicy::Legacy;
            }
            let mut doc = document::read_document(&input)?;
            let report = document::apply_document(&mut doc, &options)?;
            document::write_document(&doc, output_path.as_deref())?;
            output::print_apply_output(&report, &options);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}

/// Diagnostics go to stderr so stdout stays clean for results.
fn init_logging() {
    let default_level = "warn";
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(default_level))
                .unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

/// An explicit `--config` must exist; the implicit `./config.toml` may not.
fn load_config(explicit: Option<&Path>) -> Result<config::Config, config::ConfigError> {
    match explicit {
        Some(path) => config::load_config_file(path),
        None => config::load_config(&std::env::current_dir()?),
    }
}
