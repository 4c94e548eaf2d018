use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use log::{info, LevelFilter};
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::time::Instant;
use treesmith::corrector::corrector_for;
use treesmith::request::{handle, RequestContext, StructureRequest};
use treesmith::{templates, Generator, HistoryStore, IndentStyle};

#[derive(Debug, Parser)]
#[command(
    name = "treesmith",
    version,
    about = "Compile indented-text or JSON structure descriptions into ZIP archives"
)]
struct Cli {
    /// Log at debug level (RUST_LOG still applies)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// SQLite file recording submitted structures
    #[arg(long, global = true, env = "TREESMITH_HISTORY_DB")]
    history_db: Option<PathBuf>,

    /// Owner that history records are filed under
    #[arg(long, global = true, env = "TREESMITH_OWNER", default_value = "local")]
    owner: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Build a structure and write it as a ZIP archive
    Generate(GenerateArgs),
    /// List the built-in templates
    Templates,
    /// Inspect or prune recorded submissions
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },
}

#[derive(Debug, Args)]
struct GenerateArgs {
    /// Structure description file, or "-" for stdin
    #[arg(conflicts_with = "template")]
    input: Option<PathBuf>,

    /// Use a built-in template instead of an input file; file bodies the
    /// template embeds are written out (implies --inline-content)
    #[arg(long)]
    template: Option<String>,

    /// Name of the structure; the archive is written as <NAME>.zip
    #[arg(long)]
    name: Option<String>,

    /// Output archive path (overrides the name-derived file)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Run the description through the corrector first
    #[arg(long)]
    correct: bool,

    /// Write non-empty JSON string values as file content
    #[arg(long)]
    inline_content: bool,

    /// Indent units per tab
    #[arg(long, default_value_t = 4)]
    tab_width: usize,

    /// Indent units per space
    #[arg(long, default_value_t = 1)]
    space_width: usize,

    /// Print the resulting tree instead of writing an archive
    #[arg(long)]
    preview: bool,

    /// Parent directory for scratch space
    #[arg(long, env = "TREESMITH_SCRATCH_DIR")]
    scratch_dir: Option<PathBuf>,

    /// API key for the remote corrector; without it corrections are heuristic
    #[arg(long, env = "TREESMITH_AI_KEY", hide_env_values = true)]
    ai_key: Option<String>,

    /// Endpoint for the remote corrector
    #[arg(long, env = "TREESMITH_AI_URL")]
    ai_url: Option<String>,
}

#[derive(Debug, Subcommand)]
enum HistoryAction {
    /// List records for the owner, newest first
    List,
    /// Delete one record
    Delete { id: i64 },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Generate(args) => run_generate(&cli, args),
        Command::Templates => {
            list_templates();
            Ok(())
        }
        Command::History { action } => run_history(&cli, action),
    }
}

fn init_logging(verbose: bool) {
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();
}

fn run_generate(cli: &Cli, args: &GenerateArgs) -> Result<()> {
    let start_time = Instant::now();
    let content = read_content(args)?;

    // Templates ship file bodies as JSON string values
    let inline_content = args.inline_content || args.template.is_some();
    let mut builder = Generator::builder()
        .indent(IndentStyle::new(args.space_width, args.tab_width))
        .inline_json_content(inline_content);
    if let Some(dir) = &args.scratch_dir {
        builder = builder.scratch_parent(dir);
    }
    let generator = builder.build();

    if args.preview {
        let preview = generator
            .preview(&content)
            .context("Failed to build preview")?;
        print!("{}", preview.text);
        info!(
            "{} input: {} directories, {} files, {} skipped",
            preview.format, preview.stats.directories, preview.stats.files, preview.stats.skipped
        );
        return Ok(());
    }

    let history = open_history(cli.history_db.as_deref())?;
    let corrector = if args.correct {
        Some(
            corrector_for(args.ai_key.as_deref(), args.ai_url.as_deref())
                .context("Failed to set up structure corrector")?,
        )
    } else {
        None
    };

    let mut ctx = RequestContext::new(&generator);
    if let Some(history) = &history {
        ctx = ctx.with_history(history);
    }
    if let Some(corrector) = &corrector {
        ctx = ctx.with_corrector(corrector.as_ref());
    }

    let request = StructureRequest {
        name: args.name.clone().or_else(|| args.template.clone()),
        content,
    };
    let download = handle(&request, &cli.owner, &ctx).context("Failed to generate structure")?;

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| PathBuf::from(&download.file_name));
    fs::write(&output, &download.archive.bytes)
        .with_context(|| format!("Failed to write archive to {}", output.display()))?;

    println!(
        "✓ Wrote {} ({} entries, {} bytes) [{:.2}s]",
        output.display(),
        download.archive.entry_count,
        download.archive.bytes.len(),
        start_time.elapsed().as_secs_f64()
    );
    println!("  sha256: {}", download.archive.sha256);
    if let Some(id) = download.history_id {
        println!("  history id: {}", id);
    }

    Ok(())
}

fn read_content(args: &GenerateArgs) -> Result<String> {
    if let Some(id) = &args.template {
        let template = templates::find(id)
            .with_context(|| format!("Unknown template '{}' (see `treesmith templates`)", id))?;
        return Ok(template.content.to_string());
    }

    match args.input.as_deref() {
        None => bail!("Provide an input file, \"-\" for stdin, or --template"),
        Some(path) if path == Path::new("-") => {
            let mut content = String::new();
            io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read structure from stdin")?;
            Ok(content)
        }
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read structure from {}", path.display())),
    }
}

fn open_history(path: Option<&Path>) -> Result<Option<HistoryStore>> {
    path.map(|path| {
        HistoryStore::open(path)
            .with_context(|| format!("Failed to open history database at {}", path.display()))
    })
    .transpose()
}

fn list_templates() {
    for template in templates::all() {
        println!(
            "{:<22} {:<5} {} - {}",
            template.id, template.format, template.name, template.description
        );
    }
}

fn run_history(cli: &Cli, action: &HistoryAction) -> Result<()> {
    let Some(history) = open_history(cli.history_db.as_deref())? else {
        bail!("No history database configured (use --history-db or TREESMITH_HISTORY_DB)");
    };

    match action {
        HistoryAction::List => {
            let records = history
                .list_for_owner(&cli.owner)
                .context("Failed to list history")?;
            if records.is_empty() {
                println!("No history for {}", cli.owner);
            }
            for record in records {
                println!(
                    "{:>5}  {}  {} ({} bytes)",
                    record.id,
                    record.created_at.format("%Y-%m-%d %H:%M:%S"),
                    record.structure_name,
                    record.structure_content.len()
                );
            }
        }
        HistoryAction::Delete { id } => {
            history
                .delete(*id, &cli.owner)
                .with_context(|| format!("Failed to delete history record {}", id))?;
            println!("✓ Deleted history record {}", id);
        }
    }

    Ok(())
}
