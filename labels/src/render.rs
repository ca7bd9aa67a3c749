use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, anyhow};
use clap::ValueEnum;
use log::warn;
use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Svg,
    Pdf,
    Png,
}

impl OutputFormat {
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Svg => "svg",
            OutputFormat::Pdf => "pdf",
            OutputFormat::Png => "png",
        }
    }
}

/// Writes page documents in the requested formats.
pub struct Renderer {
    formats: Vec<OutputFormat>,
    px_per_mm: f64,
    fontdb: Arc<usvg::fontdb::Database>,
}

impl Renderer {
    pub fn new(formats: Vec<OutputFormat>, px_per_mm: f64) -> Self {
        Self {
            formats,
            px_per_mm,
            fontdb: Arc::new(font_database()),
        }
    }

    /// Write `svg` as `<out_dir>/<stem>.<ext>` for every format.
    pub fn write_page(&self, svg: &str, out_dir: &Path, stem: &str) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        let mut tree = None;
        for &format in &self.formats {
            let path = out_dir.join(format!("{stem}.{}", format.extension()));
            match format {
                OutputFormat::Svg => {
                    fs::write(&path, svg).with_context(|| format!("writing {}", path.display()))?;
                }
                OutputFormat::Pdf => {
                    let tree = self.parsed(&mut tree, svg)?;
                    let pdf = svg2pdf::to_pdf(
                        tree,
                        svg2pdf::ConversionOptions::default(),
                        svg2pdf::PageOptions::default(),
                    )
                    .map_err(|e| anyhow!("PDF conversion failed: {e:?}"))?;
                    fs::write(&path, pdf).with_context(|| format!("writing {}", path.display()))?;
                }
                OutputFormat::Png => {
                    let pixmap = self.rasterize(self.parsed(&mut tree, svg)?)?;
                    encode_png_deterministic(&pixmap, &path)?;
                }
            }
            written.push(path);
        }
        Ok(written)
    }

    /// Parse `svg` on first use; later formats reuse the tree.
    fn parsed<'t>(&self, slot: &'t mut Option<usvg::Tree>, svg: &str) -> Result<&'t usvg::Tree> {
        if slot.is_none() {
            *slot = Some(self.parse(svg)?);
        }
        slot.as_ref().ok_or_else(|| anyhow!("SVG tree missing"))
    }

    fn parse(&self, svg: &str) -> Result<usvg::Tree> {
        let mut opt = usvg::Options::default();
        opt.fontdb = self.fontdb.clone();
        usvg::Tree::from_str(svg, &opt).map_err(|e| anyhow!("SVG parse error: {e:?}"))
    }

    /// Render at `px_per_mm`; the tree's own size is in CSS pixels.
    fn rasterize(&self, tree: &usvg::Tree) -> Result<tiny_skia::Pixmap> {
        let scale = (self.px_per_mm * 25.4 / 96.0) as f32;
        let size = tree.size();
        let w_px = (size.width() * scale).ceil() as u32;
        let h_px = (size.height() * scale).ceil() as u32;
        let mut pixmap = tiny_skia::Pixmap::new(w_px, h_px)
            .ok_or_else(|| anyhow!("pixmap alloc failed for {w_px}x{h_px}"))?;
        let mut pm = pixmap.as_mut();
        resvg::render(tree, tiny_skia::Transform::from_scale(scale, scale), &mut pm);
        Ok(pixmap)
    }
}

fn font_database() -> usvg::fontdb::Database {
    let mut fontdb = usvg::fontdb::Database::new();
    if fonts::has_embedded_font() {
        fontdb.load_font_data(fonts::FONT_BYTES.to_vec());
        // Map generic 'sans-serif' to the embedded family
        let family_name = fontdb
            .faces()
            .next()
            .and_then(|face| face.families.first().map(|(n, _)| n.clone()));
        if let Some(name) = family_name {
            fontdb.set_sans_serif_family(name);
        }
    } else {
        warn!("No embedded font, using system fonts");
        fontdb.load_system_fonts();
    }
    fontdb
}

fn encode_png_deterministic(pixmap: &tiny_skia::Pixmap, path: &Path) -> Result<()> {
    let file = fs::File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let mut enc = Encoder::new(file, pixmap.width(), pixmap.height());
    enc.set_color(ColorType::Rgba);
    enc.set_depth(BitDepth::Eight);
    enc.set_filter(FilterType::NoFilter);
    enc.set_compression(Compression::Default);
    let mut writer = enc.write_header()?;
    writer.write_image_data(pixmap.data())?;
    Ok(())
}
