use std::collections::BTreeSet;
use std::env;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{Args, Parser, Subcommand};
use seimei_gokaku::{split_filter_terms, EngineConfig, NamePool, SearchQuery, SeimeiEngine};
use seimei_strokes::{CollectedDiagnostics, DiagnosticEvent, LogDiagnostics, StrokeTable};

use crate::flags::LuckFlag;

mod flags;
mod render;

const STROKES_ENV: &str = "SEIMEI_STROKES";
const NAMES_ENV: &str = "SEIMEI_NAMES";
const CONFIG_ENV: &str = "SEIMEI_CONFIG";

/// Missing characters listed in the post-search summary.
const MAX_REPORTED_MISSING: usize = 20;

#[derive(Parser)]
#[command(name = "seimei")]
#[command(about = "Five-grid (gokaku) stroke-count name scoring", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Engine config file (TOML; overrides SEIMEI_CONFIG)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank given-name candidates for a family name
    Search(SearchArgs),

    /// Show the five grids of one full name
    Grid(GridArgs),

    /// Print the stroke-count rank table in effect
    Ranks(RanksArgs),

    /// Stroke table maintenance
    #[command(subcommand)]
    Table(TableCommand),

    /// Given-name pool maintenance
    #[command(subcommand)]
    Pool(PoolCommand),
}

#[derive(Args)]
struct StrokesArg {
    /// Stroke table (.json object or .js master; defaults to SEIMEI_STROKES)
    #[arg(long)]
    strokes: Option<PathBuf>,
}

#[derive(Args)]
struct SearchArgs {
    /// Family name
    family_name: String,

    /// Required characters, whitespace separated; one result group per term
    #[arg(long)]
    kanji: Option<String>,

    /// Keep only candidates whose total grid reaches this fortune
    #[arg(long, value_enum)]
    luck: Option<LuckFlag>,

    #[command(flatten)]
    strokes: StrokesArg,

    /// Given-name pool (.json array, .js master or one name per line; defaults to SEIMEI_NAMES)
    #[arg(long)]
    names: Option<PathBuf>,

    /// Maximum candidates per group
    #[arg(long)]
    limit: Option<usize>,

    /// Show all five grids for every candidate
    #[arg(long)]
    details: bool,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct GridArgs {
    /// Family name
    family_name: String,

    /// Given name
    given_name: String,

    #[command(flatten)]
    strokes: StrokesArg,

    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct RanksArgs {
    /// Output JSON
    #[arg(long)]
    json: bool,
}

#[derive(Subcommand)]
enum TableCommand {
    /// Merge an overlay table into a base table (overlay counts win)
    Merge {
        base: PathBuf,
        overlay: PathBuf,
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[derive(Subcommand)]
enum PoolCommand {
    /// Merge name lists in order, drop duplicates and optionally invalid names
    Clean {
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,
        /// Keep only 1-4 character kanji names
        #[arg(long)]
        valid_only: bool,
    },
}

pub fn main_entry() -> Result<()> {
    let mut cli = Cli::parse();

    // Keep stdout clean for JSON consumers
    let json_output = match &cli.command {
        Commands::Search(args) => args.json,
        Commands::Grid(args) => args.json,
        Commands::Ranks(args) => args.json,
        Commands::Table(_) | Commands::Pool(_) => false,
    };
    if json_output {
        cli.quiet = true;
    }

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();

    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Search(args) => run_search(args, config)?,
        Commands::Grid(args) => run_grid(args, config)?,
        Commands::Ranks(args) => run_ranks(&args, &config)?,
        Commands::Table(TableCommand::Merge {
            base,
            overlay,
            output,
        }) => run_table_merge(&base, &overlay, &output)?,
        Commands::Pool(PoolCommand::Clean {
            inputs,
            output,
            valid_only,
        }) => run_pool_clean(&inputs, &output, valid_only)?,
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<EngineConfig> {
    let path = explicit
        .map(Path::to_path_buf)
        .or_else(|| env::var_os(CONFIG_ENV).map(PathBuf::from));
    match path {
        Some(path) => EngineConfig::load(&path)
            .with_context(|| format!("Failed to load config {}", path.display())),
        None => Ok(EngineConfig::default()),
    }
}

fn data_path(explicit: Option<PathBuf>, env_key: &str, flag: &str) -> Result<PathBuf> {
    explicit
        .or_else(|| env::var_os(env_key).map(PathBuf::from))
        .ok_or_else(|| anyhow!("No {flag} file given: pass --{flag} or set {env_key}"))
}

fn load_strokes(arg: StrokesArg) -> Result<StrokeTable> {
    let path = data_path(arg.strokes, STROKES_ENV, "strokes")?;
    StrokeTable::load(&path)
        .with_context(|| format!("Failed to load stroke table {}", path.display()))
}

fn load_names(explicit: Option<PathBuf>) -> Result<NamePool> {
    let path = data_path(explicit, NAMES_ENV, "names")?;
    NamePool::load(&path).with_context(|| format!("Failed to load name pool {}", path.display()))
}

/// Log application errors individually and missing characters as one summary.
fn report_diagnostics(diagnostics: &CollectedDiagnostics) {
    let mut missing = BTreeSet::new();
    for event in diagnostics.events() {
        match event {
            DiagnosticEvent::AppError { kind, detail } => {
                log::warn!("Application error [{kind}]: {detail}");
            }
            DiagnosticEvent::MissingStrokeData { text, character } => {
                log::debug!("No stroke data for '{character}' (in '{text}')");
                missing.insert(character.as_str());
            }
        }
    }
    if !missing.is_empty() {
        let listed: Vec<&str> = missing.iter().take(MAX_REPORTED_MISSING).copied().collect();
        let more = missing.len().saturating_sub(listed.len());
        let suffix = if more > 0 {
            format!(" (+{more} more)")
        } else {
            String::new()
        };
        log::info!(
            "Names with characters missing from the stroke table were skipped: {}{suffix}",
            listed.join(" ")
        );
    }
}

fn run_search(args: SearchArgs, mut config: EngineConfig) -> Result<()> {
    if let Some(limit) = args.limit {
        config.max_results_per_group = limit;
    }
    let strokes = load_strokes(args.strokes)?;
    let pool = load_names(args.names)?;
    let engine = SeimeiEngine::new(strokes, pool, config)?;

    let query = SearchQuery {
        family_name: args.family_name,
        filter_terms: args
            .kanji
            .as_deref()
            .map(split_filter_terms)
            .unwrap_or_default(),
        luck: args.luck.map(LuckFlag::as_domain),
    };

    let mut diagnostics = CollectedDiagnostics::new();
    let result = engine.search(&query, &mut diagnostics);
    report_diagnostics(&diagnostics);
    let outcome = result?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    } else {
        print!("{}", render::render_outcome(&outcome, args.details));
    }
    Ok(())
}

fn run_grid(args: GridArgs, config: EngineConfig) -> Result<()> {
    let strokes = load_strokes(args.strokes)?;
    let engine = SeimeiEngine::new(strokes, NamePool::default(), config)?;

    let candidate = engine.evaluate(&args.family_name, &args.given_name, &mut LogDiagnostics)?;

    if candidate.grid.given_stroke == 0 {
        log::warn!(
            "Given name '{}' could not be resolved; grids are not meaningful",
            candidate.given_name
        );
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&candidate)?);
    } else {
        print!("{}", render::render_candidate(&candidate));
    }
    Ok(())
}

fn run_ranks(args: &RanksArgs, config: &EngineConfig) -> Result<()> {
    let table = config.rank_table()?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&table.tiers())?);
    } else {
        print!("{}", render::render_ranks(&table));
    }
    Ok(())
}

fn run_table_merge(base: &Path, overlay: &Path, output: &Path) -> Result<()> {
    let mut merged = StrokeTable::load(base)
        .with_context(|| format!("Failed to load base table {}", base.display()))?;
    let extra = StrokeTable::load(overlay)
        .with_context(|| format!("Failed to load overlay table {}", overlay.display()))?;
    let base_len = merged.len();
    let replaced = merged.merge(&extra);
    merged
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    log::info!(
        "Merged {} + {} entries into {} ({} replaced) -> {}",
        base_len,
        extra.len(),
        merged.len(),
        replaced,
        output.display()
    );
    Ok(())
}

fn run_pool_clean(inputs: &[PathBuf], output: &Path, valid_only: bool) -> Result<()> {
    let mut pool = NamePool::default();
    for input in inputs {
        let next = NamePool::load(input)
            .with_context(|| format!("Failed to load name pool {}", input.display()))?;
        log::info!("{}: {} names", input.display(), next.len());
        pool.merge(&next);
    }
    let invalid = if valid_only { pool.retain_valid() } else { 0 };
    pool.save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    log::info!(
        "Wrote {} unique names ({} invalid dropped) -> {}",
        pool.len(),
        invalid,
        output.display()
    );
    Ok(())
}
