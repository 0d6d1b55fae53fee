use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "linkcard", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compose a card from command-line parameters and write a PNG.
    Compose(ComposeArgs),
    /// Render a card described by a JSON spec file.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct ComposeArgs {
    /// Background photo path (relative to the current directory).
    #[arg(long)]
    photo: String,

    /// Author avatar image path.
    #[arg(long)]
    avatar: Option<String>,

    /// Title text; a literal `\n` sequence starts a new line.
    #[arg(long)]
    title: Option<String>,

    /// Title font path (TTF/OTF); required for a visible title.
    #[arg(long)]
    font: Option<String>,

    /// Canvas side length in pixels.
    #[arg(long, default_value_t = 300)]
    dim: u32,

    /// Foreground color (title and avatar ring).
    #[arg(long, default_value = "black")]
    fg_color: String,

    /// Background color (halo and avatar backdrop).
    #[arg(long, default_value = "rgba(255, 255, 255, 0.7)")]
    bg_color: String,

    /// Background placement keyword (e.g. "north", "south east", "center").
    #[arg(long)]
    gravity: Option<String>,

    /// Seed string for the decorative dot pattern.
    #[arg(long)]
    seed: Option<String>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input card spec JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Compose(args) => cmd_compose(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn cmd_compose(args: ComposeArgs) -> anyhow::Result<()> {
    let mut spec = linkcard::CardSpec::new(args.dim);
    spec.background_source = Some(args.photo);
    spec.avatar_source = args.avatar;
    spec.font_source = args.font;
    // Query-style titles carry literal `\n` sequences for line breaks.
    spec.title = args.title.map(|t| t.replace("\\n", "\n"));
    spec.foreground_color =
        linkcard::ColorDef::parse(&args.fg_color).map_err(|e| anyhow::anyhow!(e))?;
    spec.background_color =
        linkcard::ColorDef::parse(&args.bg_color).map_err(|e| anyhow::anyhow!(e))?;
    spec.gravity = args.gravity;
    if let Some(seed) = args.seed {
        spec.pattern_seed = seed;
    }

    render_spec(&spec, Path::new("."), &args.out)
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let spec = read_spec_json(&args.in_path)?;
    let assets_root = args.in_path.parent().unwrap_or_else(|| Path::new("."));
    render_spec(&spec, assets_root, &args.out)
}

fn read_spec_json(path: &Path) -> anyhow::Result<linkcard::CardSpec> {
    let f = File::open(path).with_context(|| format!("open card spec '{}'", path.display()))?;
    let r = BufReader::new(f);
    let spec: linkcard::CardSpec =
        serde_json::from_reader(r).with_context(|| "parse card spec JSON")?;
    Ok(spec)
}

fn render_spec(spec: &linkcard::CardSpec, assets_root: &Path, out: &Path) -> anyhow::Result<()> {
    spec.validate()?;

    let assets = linkcard::PreparedCardAssets::prepare(spec, assets_root)?;
    let frame = linkcard::render_card_to_frame(spec, &assets, None)?;

    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        out,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;

    eprintln!("wrote {}", out.display());
    Ok(())
}
