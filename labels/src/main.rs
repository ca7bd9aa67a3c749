use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use labels_core::{
    LabelConfig, LabelPlan, LayoutOptions, PageGeometry, PaperSize, Template, build_page_svg,
};
use log::{debug, info};

mod catalog;
mod icons;
mod render;

use crate::icons::IconCache;
use crate::render::{OutputFormat, Renderer};

/// Generate printable labels and dividers for Magic: The Gathering sets.
#[derive(Debug, Parser)]
#[command(name = "mtglabels", version, about)]
struct Cli {
    /// Output labels to this directory.
    #[arg(long, default_value = "output")]
    output_dir: PathBuf,

    /// Paper size: letter or a4.
    #[arg(long, default_value = "letter")]
    paper_size: PaperSize,

    /// Sheet layout: labels (4x15) or dividers (4x2).
    #[arg(long, default_value = "labels")]
    template: Template,

    /// Override the number of columns per page.
    #[arg(long)]
    columns: Option<usize>,

    /// Override the number of rows per page.
    #[arg(long)]
    rows: Option<usize>,

    /// Override the page margin, in tenths of a millimetre.
    #[arg(long)]
    margin: Option<f64>,

    /// Only output sets with these codes (eg. MH1 NEO). Can be repeated.
    #[arg(long, value_name = "SET", num_args = 1..)]
    sets: Vec<String>,

    /// One label per colour pip for each set.
    #[arg(long)]
    pips: bool,

    /// Catalog URL or local JSON file. Defaults to the Scryfall sets API.
    #[arg(long, value_name = "URL|PATH")]
    catalog: Option<String>,

    /// JSON configuration file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Where downloaded set icons are kept. Defaults to <output-dir>/.icons.
    #[arg(long)]
    cache_dir: Option<PathBuf>,

    /// Output formats. Defaults to svg and pdf.
    #[arg(long = "format", value_enum, num_args = 1..)]
    formats: Vec<OutputFormat>,

    /// PNG resolution.
    #[arg(long, default_value_t = 4.0)]
    px_per_mm: f64,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);
    debug!("{:?}", cli);
    run(&cli)
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "info" };
    let filter = format!("warn,mtglabels={level},labels_core={level}");
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter))
        .format_timestamp(None)
        .format_target(false)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<LabelConfig> {
    let Some(path) = path else {
        return Ok(LabelConfig::default());
    };
    let txt = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    LabelConfig::from_json(&txt).with_context(|| format!("parsing config {}", path.display()))
}

fn run(cli: &Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    // Bad geometry fails before anything is fetched.
    let geometry =
        PageGeometry::for_paper(cli.paper_size, cli.template, cli.columns, cli.rows, cli.margin)?;

    let location = cli.catalog.as_deref().unwrap_or(&config.api_url);
    let source = catalog::source_for(location, &config.user_agent)?;
    info!("Getting set data from {location}");
    let records = source.fetch()?;

    let options = if cli.pips {
        LayoutOptions::with_variants(config.variants.clone())
    } else {
        LayoutOptions::default()
    };
    let plan = LabelPlan::build(
        &records,
        &config.criteria(cli.sets.as_slice()),
        &config.rename_table(),
        &geometry,
        &options,
    );
    if plan.pages.is_empty() {
        info!("No sets to print");
        return Ok(());
    }

    fs::create_dir_all(&cli.output_dir)
        .with_context(|| format!("creating {}", cli.output_dir.display()))?;
    let cache_dir = cli
        .cache_dir
        .clone()
        .unwrap_or_else(|| cli.output_dir.join(".icons"));
    let icons = IconCache::new(&cache_dir, &config.user_agent)?;
    let formats = if cli.formats.is_empty() {
        vec![OutputFormat::Svg, OutputFormat::Pdf]
    } else {
        cli.formats.clone()
    };
    let renderer = Renderer::new(formats, cli.px_per_mm);

    for page in &plan.pages {
        let resolved = icons.resolve_page(page);
        let svg = build_page_svg(page, &plan.guides, &geometry, |icon| {
            resolved.get(icon).map(|p| p.to_string_lossy().into_owned())
        });
        let stem = format!("{}-{}-{:02}", cli.template, cli.paper_size, page.number());
        for path in renderer.write_page(&svg, &cli.output_dir, &stem)? {
            info!("Wrote {}", path.display());
        }
    }
    info!(
        "{} labels on {} page(s)",
        plan.item_count(),
        plan.pages.len()
    );
    Ok(())
}
