use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dieguys::{CharacterType, OverlayPatch, Studio, StudioConfig, TraitCatalog};

#[derive(Parser, Debug)]
#[command(name = "dieguys", version, about)]
struct Cli {
    /// Log at debug level unless RUST_LOG says otherwise.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List character types, layers and trait names.
    Catalog(CatalogArgs),
    /// Generate a random character and write it as a PNG.
    Generate(GenerateArgs),
    /// Generate a random character, write the share image and print the share URL.
    Share(ShareArgs),
}

#[derive(Parser, Debug)]
struct CatalogArgs {
    /// Only list this character type.
    #[arg(long = "type")]
    character: Option<CharacterType>,
}

#[derive(Parser, Debug)]
struct SessionArgs {
    /// Studio config JSON. Flags below override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory containing the `nfts/` trait tree.
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Character type (`prey`, `golden-predator`, ...).
    #[arg(long = "type")]
    character: Option<CharacterType>,

    /// Seed for trait and caption draws.
    #[arg(long)]
    seed: Option<u64>,

    /// Top overlay text.
    #[arg(long)]
    top: Option<String>,

    /// Bottom overlay text.
    #[arg(long)]
    bottom: Option<String>,

    /// Overlay font preset name.
    #[arg(long)]
    preset: Option<String>,

    /// Overlay font size in pixels.
    #[arg(long)]
    font_size: Option<u32>,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ShareArgs {
    #[command(flatten)]
    session: SessionArgs,

    /// Directory the share image is written into.
    #[arg(long)]
    out_dir: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Catalog(args) => cmd_catalog(args),
        Command::Generate(args) => cmd_generate(args),
        Command::Share(args) => cmd_share(args),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_catalog(args: CatalogArgs) -> anyhow::Result<()> {
    let types = match args.character {
        Some(character) => vec![character],
        None => CharacterType::ALL.to_vec(),
    };
    for character in types {
        println!("{character}");
        for (layer, options) in TraitCatalog::for_type(character).iter() {
            let names: Vec<_> = options.iter().map(|o| o.name).collect();
            println!("  {layer}: {}", names.join(", "));
        }
    }
    Ok(())
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let studio = open_session(&args.session)?;
    let export = studio.export()?;
    write_file(&args.out, &export.png)?;

    println!("{}", studio.state().story());
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_share(args: ShareArgs) -> anyhow::Result<()> {
    let studio = open_session(&args.session)?;
    let share = studio.share()?;
    let out = args.out_dir.join(&share.image.file_name);
    write_file(&out, &share.image.png)?;

    println!("{}", share.url);
    eprintln!("wrote {}", out.display());
    Ok(())
}

fn open_session(args: &SessionArgs) -> anyhow::Result<Studio> {
    let mut config = match &args.config {
        Some(path) => StudioConfig::from_path(path)?,
        None => StudioConfig::default(),
    };
    if let Some(assets) = &args.assets {
        config.assets_root = assets.clone();
    }
    if let Some(character) = args.character {
        config.initial_type = character;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let mut studio = Studio::from_config(config)?;
    let patch = OverlayPatch {
        top: args.top.clone(),
        bottom: args.bottom.clone(),
        font_size: args.font_size,
        preset: args.preset.clone(),
    };
    if patch != OverlayPatch::default() {
        // No selection yet, so this only records the overlay for the first render.
        studio.update_overlay(patch)?;
    }
    studio.start().with_context(|| {
        format!(
            "render initial character from '{}'",
            studio.config().assets_root.display()
        )
    })?;
    Ok(studio)
}

fn write_file(path: &Path, bytes: &[u8]) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(path, bytes).with_context(|| format!("write png '{}'", path.display()))
}
