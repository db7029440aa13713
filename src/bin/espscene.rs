//! Command-line front end for the espscene library.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "espscene", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the ESPHome YAML config for a scene file.
    Yaml(SceneArgs),
    /// Print the illustrative display-lambda code for a scene file.
    Lambda(SceneArgs),
    /// Rasterize a string with a font asset and write a PNG.
    RenderText(RenderTextArgs),
}

#[derive(Parser, Debug)]
struct SceneArgs {
    /// Input scene JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

#[derive(Parser, Debug)]
struct RenderTextArgs {
    /// Font asset JSON.
    #[arg(long)]
    font: PathBuf,

    /// The string to rasterize.
    #[arg(long)]
    text: String,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Yaml(args) => cmd_generate(args, espscene::generate_yaml),
        Command::Lambda(args) => cmd_generate(args, espscene::generate_cpp),
        Command::RenderText(args) => cmd_render_text(args),
    }
}

fn load_graph(path: &PathBuf) -> anyhow::Result<espscene::SceneGraph> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read scene file '{}'", path.display()))?;
    let file = espscene::SceneFile::from_json_str(&text)?;
    let mut ids = espscene::RandomIdGen;
    Ok(file.into_graph(&mut ids))
}

fn cmd_generate(
    args: SceneArgs,
    generate: fn(&[espscene::SceneElement]) -> String,
) -> anyhow::Result<()> {
    let graph = load_graph(&args.in_path)?;
    println!("{}", generate(graph.elements()));
    Ok(())
}

fn cmd_render_text(args: RenderTextArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.font)
        .with_context(|| format!("read font asset '{}'", args.font.display()))?;
    let font: espscene::FontAsset =
        serde_json::from_str(&text).context("parse font asset JSON")?;

    let surface = font
        .render(&args.text)
        .context("font asset carries no bitmap data")?;

    if let Some(parent) = args.out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    image::save_buffer_with_format(
        &args.out,
        surface.data(),
        surface.width(),
        surface.height(),
        image::ExtendedColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
