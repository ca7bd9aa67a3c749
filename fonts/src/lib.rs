//! Font embedded at build time for label text.
//!
//! Empty when the build could neither download the font nor copy it from
//! `FONT_TTF`; renderers then fall back to system fonts.

pub static FONT_BYTES: &[u8] =
    include_bytes!(concat!(env!("OUT_DIR"), "/SourceHanSansSC-Regular.otf"));

/// Whether a real font was embedded.
pub fn has_embedded_font() -> bool {
    !FONT_BYTES.is_empty()
}
