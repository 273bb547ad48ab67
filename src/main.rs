use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use sheetchart::chart::{ChartArtifact, ChartRenderer, PaletteGenerator, TargetId};
use sheetchart::data::parse_ingest_json;
use sheetchart::{ChartKind, ChartSession, Settings};

#[derive(Parser, Debug)]
#[command(name = "sheetchart", version)]
struct Cli {
    /// Settings file (defaults to the user config dir).
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a chart descriptor and print it as JSON.
    Render(RenderArgs),
    /// Print the first rows of an ingestion payload.
    Preview(PreviewArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Ingestion payload JSON (`headers` + `data`).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Column for the category axis.
    #[arg(long)]
    x: String,

    /// Column for the value axis.
    #[arg(long)]
    y: String,

    /// bar, line, pie, doughnut, polarArea or radar.
    #[arg(long, default_value_t = ChartKind::Bar)]
    kind: ChartKind,

    /// Seed for randomized palettes.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct PreviewArgs {
    /// Ingestion payload JSON (`headers` + `data`).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Rows to show (defaults to the settings value).
    #[arg(long)]
    rows: Option<usize>,
}

/// Writes every created chart to stdout.
struct JsonRenderer;

impl ChartRenderer for JsonRenderer {
    type Handle = ();

    fn create(&mut self, target: &TargetId, artifact: &ChartArtifact) {
        match artifact.to_json_pretty() {
            Ok(json) => println!("{json}"),
            Err(e) => tracing::error!("Failed to serialize chart for {}: {}", target, e),
        }
    }

    fn destroy(&mut self, target: &TargetId, _handle: ()) {
        tracing::debug!("Destroyed chart on {}", target);
    }
}

fn main() -> anyhow::Result<()> {
    let _ = sheetchart::telemetry::init_default_tracing();

    let cli = Cli::parse();
    let settings = match &cli.settings {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("read settings '{}'", path.display()))?,
        None => Settings::load(),
    };

    match cli.cmd {
        Command::Render(args) => cmd_render(args, settings),
        Command::Preview(args) => cmd_preview(args, settings),
    }
}

fn read_payload(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("read payload '{}'", path.display()))
}

fn cmd_render(args: RenderArgs, settings: Settings) -> anyhow::Result<()> {
    let payload = read_payload(&args.in_path)?;
    let palettes = match args.seed {
        Some(seed) => PaletteGenerator::seeded(seed),
        None => PaletteGenerator::from_entropy(),
    };

    let mut session = ChartSession::with_palettes(JsonRenderer, "stdout", settings, palettes);
    session
        .upload_json(&payload)
        .with_context(|| format!("load payload '{}'", args.in_path.display()))?;
    session.set_x_axis(args.x);
    session.set_y_axis(args.y);
    session.set_kind(args.kind);

    let id = session.generate()?;
    tracing::info!("Rendered {} chart {}", args.kind, id);
    Ok(())
}

fn cmd_preview(args: PreviewArgs, settings: Settings) -> anyhow::Result<()> {
    let payload = read_payload(&args.in_path)?;
    let dataset = parse_ingest_json(&payload)
        .with_context(|| format!("load payload '{}'", args.in_path.display()))?;
    let preview = dataset.preview(args.rows.unwrap_or(settings.preview_rows));

    let header: Vec<&str> = preview.columns.iter().map(|c| c.name.as_str()).collect();
    println!("{}", header.join("\t"));
    for row in preview.rows {
        let cells: Vec<String> = row
            .cells
            .iter()
            .map(sheetchart::data::coercion::to_comparable)
            .collect();
        println!("{}", cells.join("\t"));
    }
    if let Some(summary) = preview.summary() {
        println!("{summary}");
    }
    Ok(())
}
