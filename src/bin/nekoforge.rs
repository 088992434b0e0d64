use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use nekoforge::{
    BatchOpts, DEFAULT_GRID_COLUMNS, Detail, ExportFormat, FrameStyle, PanelOpts, RenderOpts,
    RenderRequest, SurfaceSize,
};

const ASCII_COLUMNS_ENV: &str = "NEKOFORGE_ASCII_COLUMNS";

#[derive(Parser, Debug)]
#[command(name = "nekoforge", version, about = "Render collectible cats from trait JSON")]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one request as PNG, SVG or a character grid.
    Render(RenderArgs),
    /// Print the text panel of one request.
    Panel(PanelArgs),
    /// Render a JSON array of requests in parallel into a directory of PNGs.
    Batch(BatchArgs),
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutFormat {
    Png,
    Svg,
    Ascii,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Request JSON: `{"traits": {...}, "entropy": {...}}`.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path. Character grids go to stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutFormat::Png)]
    format: OutFormat,

    #[arg(long, default_value_t = 500)]
    width: u32,

    #[arg(long, default_value_t = 500)]
    height: u32,

    /// Character-grid columns. Defaults to $NEKOFORGE_ASCII_COLUMNS, then 40.
    #[arg(long)]
    columns: Option<usize>,
}

#[derive(Parser, Debug)]
struct PanelArgs {
    /// Request JSON: `{"traits": {...}, "entropy": {...}}`.
    #[arg(long = "in")]
    in_path: PathBuf,

    #[arg(long, default_value_t = 50)]
    width: usize,

    /// low, medium or high.
    #[arg(long, default_value = "low")]
    detail: String,

    /// simple, double, rounded, themed or themed:TITLE.
    #[arg(long, default_value = "simple")]
    frame: String,

    /// Use the themed template of the subject's category.
    #[arg(long, default_value_t = false)]
    advanced: bool,
}

#[derive(Parser, Debug)]
struct BatchArgs {
    /// JSON array of requests.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output directory; files are named `cat-0000.png`, `cat-0001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,

    /// Override rayon worker threads. Defaults to $NEKOFORGE_THREADS, then rayon defaults.
    #[arg(long)]
    threads: Option<usize>,

    #[arg(long, default_value_t = 500)]
    width: u32,

    #[arg(long, default_value_t = 500)]
    height: u32,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Panel(args) => cmd_panel(args),
        Command::Batch(args) => cmd_batch(args),
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("read '{}'", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse json '{}'", path.display()))
}

fn write_output(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write '{}'", path.display()))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let req: RenderRequest = read_json(&args.in_path)?;
    let columns = args
        .columns
        .or_else(|| {
            std::env::var(ASCII_COLUMNS_ENV)
                .ok()
                .and_then(|v| v.parse::<usize>().ok())
                .filter(|&n| n > 0)
        })
        .unwrap_or(DEFAULT_GRID_COLUMNS);
    let opts = RenderOpts {
        ascii_columns: columns,
        ..RenderOpts::default()
    };
    let size = SurfaceSize::new(args.width, args.height);
    let handle = nekoforge::try_render(&req.traits, req.entropy.as_ref(), size, &opts)
        .with_context(|| format!("render '{}'", args.in_path.display()))?;

    let bytes = match args.format {
        OutFormat::Png => handle.to_image_bytes(ExportFormat::Raster),
        OutFormat::Svg => handle.to_image_bytes(ExportFormat::Vector),
        OutFormat::Ascii => {
            let mut grid = handle.to_default_character_grid();
            grid.push('\n');
            grid.into_bytes()
        }
    };
    if bytes.is_empty() {
        anyhow::bail!("export of '{}' produced no output", args.in_path.display());
    }

    match (&args.out, args.format) {
        (Some(out), _) => {
            write_output(out, &bytes)?;
            eprintln!("wrote {}", out.display());
        }
        (None, OutFormat::Ascii) => print!("{}", String::from_utf8_lossy(&bytes)),
        (None, _) => anyhow::bail!("--out is required for png and svg output"),
    }
    Ok(())
}

fn cmd_panel(args: PanelArgs) -> anyhow::Result<()> {
    let req: RenderRequest = read_json(&args.in_path)?;
    let panel = if args.advanced {
        nekoforge::render_advanced_panel(&req.traits, req.entropy.as_ref(), args.width)
    } else {
        let opts = PanelOpts {
            width: args.width,
            detail: Detail::parse(&args.detail),
            frame: FrameStyle::parse(&args.frame),
        };
        nekoforge::render_panel(&req.traits, req.entropy.as_ref(), &opts)
    };
    println!("{panel}");
    Ok(())
}

fn cmd_batch(args: BatchArgs) -> anyhow::Result<()> {
    let reqs: Vec<RenderRequest> = read_json(&args.in_path)?;
    let mut opts = BatchOpts::default();
    if args.threads.is_some() {
        opts.threads = args.threads;
    }
    let size = SurfaceSize::new(args.width, args.height);
    let handles = nekoforge::render_many(&reqs, size, &opts).context("batch render")?;

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let mut skipped = 0usize;
    for (i, handle) in handles.iter().enumerate() {
        let bytes = handle.to_image_bytes(ExportFormat::Raster);
        if bytes.is_empty() {
            skipped += 1;
            continue;
        }
        write_output(&args.out_dir.join(format!("cat-{i:04}.png")), &bytes)?;
    }
    eprintln!(
        "wrote {} of {} to {}",
        handles.len() - skipped,
        handles.len(),
        args.out_dir.display()
    );
    Ok(())
}
