//! Proposal Assistant command line.
//!
//! Reads a proposal record (YAML or JSON), then generates, checks, previews or
//! exports the grant proposal. Document output goes to stdout; logs go to stderr.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use proposal_assistant::adapters::{
    load_proposal, LocalExportFileStorage, MarkdownDocumentParser, PulldownExportService,
    TemplateProposalGenerator,
};
use proposal_assistant::application::{
    ExportProposalCommand, ExportProposalHandler, GenerateProposalCommand,
    GenerateProposalHandler,
};
use proposal_assistant::config::{AppConfig, LoggingConfig};
use proposal_assistant::domain::checklist::ChecklistScorer;
use proposal_assistant::domain::proposal::ProposalRecord;
use proposal_assistant::ports::{
    Depth, DocumentParser, ExportFormat, GenerationOptions, Tone,
};

#[derive(Parser)]
#[command(name = "proposal-assistant")]
#[command(about = "Draft, check and export imaging biobank grant proposals")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the proposal markdown
    Generate {
        /// Proposal record (.yaml, .yml or .json)
        input: PathBuf,
        #[command(flatten)]
        options: OptionArgs,
        /// Write to this file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Print the readiness checklist and score
    Check {
        /// Proposal record (.yaml, .yml or .json)
        input: PathBuf,
        #[command(flatten)]
        options: OptionArgs,
    },
    /// Export the proposal to a file
    Export {
        /// Proposal record (.yaml, .yml or .json)
        input: PathBuf,
        #[command(flatten)]
        options: OptionArgs,
        /// Output format: md, docx or html
        #[arg(long, short, default_value = "docx")]
        format: ExportFormat,
        /// Output directory (defaults to the configured export directory)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Print the HTML preview page
    Preview {
        /// Proposal record (.yaml, .yml or .json)
        input: PathBuf,
        #[command(flatten)]
        options: OptionArgs,
    },
    /// Print a starter proposal record as YAML
    Template,
}

/// Generation overrides shared by every document command.
#[derive(Args)]
struct OptionArgs {
    /// Writing tone: humanized-formal, formal or conversational
    #[arg(long)]
    tone: Option<Tone>,
    /// Section depth: concise, standard or comprehensive
    #[arg(long)]
    depth: Option<Depth>,
    /// Leave out the India-specific background paragraph
    #[arg(long)]
    no_india_context: bool,
}

impl OptionArgs {
    fn apply(&self, mut options: GenerationOptions) -> GenerationOptions {
        if let Some(tone) = self.tone {
            options = options.with_tone(tone);
        }
        if let Some(depth) = self.depth {
            options = options.with_depth(depth);
        }
        if self.no_india_context {
            options = options.with_india_context(false);
        }
        options
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&logging.level))
        .context("Invalid log filter")?;

    let registry = tracing_subscriber::registry().with(filter);
    if logging.json {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
    Ok(())
}

async fn read_record(input: &Path) -> Result<ProposalRecord> {
    load_proposal(input)
        .await
        .with_context(|| format!("Failed to load proposal from {}", input.display()))
}

fn export_handler(config: &AppConfig, out_dir: Option<PathBuf>) -> ExportProposalHandler {
    let out_dir = out_dir.unwrap_or_else(|| config.export.output_dir.clone());
    ExportProposalHandler::new(
        Arc::new(TemplateProposalGenerator::new()),
        Arc::new(PulldownExportService::new().with_default_css(config.export.include_default_css)),
        Arc::new(LocalExportFileStorage::new(out_dir)),
    )
    .with_fallback_stem(config.export.fallback_stem.clone())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_validated().context("Failed to load configuration")?;
    init_tracing(&config.logging)?;
    let defaults = config.generation.options();

    match cli.command {
        Commands::Generate {
            input,
            options,
            output,
        } => {
            let record = read_record(&input).await?;
            let handler = GenerateProposalHandler::new(Arc::new(TemplateProposalGenerator::new()));
            let result = handler.handle(GenerateProposalCommand::new(record, options.apply(defaults)));

            match output {
                Some(path) => {
                    tokio::fs::write(&path, result.content.raw())
                        .await
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    info!(path = %path.display(), "Proposal written");
                }
                None => println!("{}", result.content.raw()),
            }
        }
        Commands::Check { input, options } => {
            let record = read_record(&input).await?;
            let handler = GenerateProposalHandler::new(Arc::new(TemplateProposalGenerator::new()));
            let result = handler.handle(GenerateProposalCommand::new(record, options.apply(defaults)));

            for entry in &result.readiness.results {
                let mark = if entry.passed { "x" } else { " " };
                println!("[{}] {}", mark, entry.item.label());
            }
            println!(
                "Readiness: {} ({}/{})",
                result.readiness.score,
                result.readiness.passed_count(),
                result.readiness.results.len()
            );

            for anchor in ChecklistScorer::missing_anchors(result.content.raw()) {
                println!("missing heading: {}", anchor);
            }

            let issues = MarkdownDocumentParser::new().validate_structure(result.content.raw());
            for issue in &issues {
                println!(
                    "line {}: {}: {}",
                    issue.line,
                    issue.construct.description(),
                    issue.content
                );
            }
        }
        Commands::Export {
            input,
            options,
            format,
            out_dir,
        } => {
            let record = read_record(&input).await?;
            let handler = export_handler(&config, out_dir);
            let result = handler
                .handle(ExportProposalCommand::to_file(
                    record,
                    options.apply(defaults),
                    format,
                ))
                .await
                .context("Export failed")?;

            match result.stored {
                Some(stored) => println!("{}", stored.path.display()),
                None => println!("{}", result.document.filename),
            }
        }
        Commands::Preview { input, options } => {
            let record = read_record(&input).await?;
            let handler = export_handler(&config, None);
            let result = handler
                .handle(ExportProposalCommand::in_memory(
                    record,
                    options.apply(defaults),
                    ExportFormat::Html,
                ))
                .await
                .context("Preview failed")?;

            std::io::stdout()
                .write_all(&result.document.content)
                .context("Failed to write preview")?;
        }
        Commands::Template => {
            let yaml = serde_yaml::to_string(&ProposalRecord::starter())
                .context("Failed to serialize starter record")?;
            print!("{}", yaml);
        }
    }

    Ok(())
}
