use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "folio", version)]
struct Cli {
    /// Log state transitions (overridden by `RUST_LOG`).
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a page description and its required elements.
    Validate(ValidateArgs),
    /// Run a page (and optional event script) and print the final snapshot as JSON.
    Run(RunArgs),
    /// Render the canvas layers at a point in time as a PNG.
    Frame(FrameArgs),
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct RunArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Event script JSON.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Virtual time to run to, in milliseconds.
    #[arg(long)]
    until: u64,
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Input page JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Event script JSON.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Virtual time of the frame, in milliseconds.
    #[arg(long)]
    at: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Layers to render.
    #[arg(long, value_enum, default_value_t = LayerChoice::All)]
    layer: LayerChoice,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum LayerChoice {
    All,
    Particles,
    Connectors,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Validate(args) => cmd_validate(args),
        Command::Run(args) => cmd_run(args),
        Command::Frame(args) => cmd_frame(args),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "folio=debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn read_page(path: &Path) -> anyhow::Result<folio::Page> {
    folio::Page::from_path(path).with_context(|| format!("load page '{}'", path.display()))
}

fn start_session(
    in_path: &Path,
    script: Option<&Path>,
    until_ms: u64,
) -> anyhow::Result<folio::PageSession> {
    let page = read_page(in_path)?;
    let mut session = folio::PageSession::new(&page, folio::PageSessionOpts::default())
        .with_context(|| format!("start page '{}'", in_path.display()))?;
    let script = match script {
        Some(p) => folio::Script::from_path(p)
            .with_context(|| format!("load script '{}'", p.display()))?,
        None => folio::Script::default(),
    };
    session.run_script(&script, until_ms)?;
    Ok(session)
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let page = read_page(&args.in_path)?;
    page.validate()?;
    eprintln!("ok {}", args.in_path.display());
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let session = start_session(&args.in_path, args.script.as_deref(), args.until)?;
    let json = serde_json::to_string_pretty(&session.snapshot())
        .with_context(|| "serialize snapshot")?;
    println!("{json}");
    Ok(())
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let mut session = start_session(&args.in_path, args.script.as_deref(), args.at)?;
    let layer = match args.layer {
        LayerChoice::All => folio::Layer::All,
        LayerChoice::Particles => folio::Layer::Particles,
        LayerChoice::Connectors => folio::Layer::Connectors,
    };
    let frame = session.render(layer)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    frame.write_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
