//! Renders the fixed N-tier architecture wiring diagram to PNG and PDF.
//!
//! The diagram content is a literal: thirteen labeled boxes, thirteen
//! connectors, four caption bubbles, and a title, at hand-tuned coordinates
//! (see [`diagram::wiring`]). A run composes one SVG document in memory and
//! writes `wiring_diagram.png` (300 DPI) and `wiring_diagram.pdf` into the
//! given directory, overwriting unconditionally. The first failure aborts
//! the run; a PNG already written is left on disk if the PDF fails.

pub mod color;
pub mod diagram;
pub mod draw;
pub mod error;
pub mod export;
pub mod geometry;

use std::path::{Path, PathBuf};

use log::{debug, info};

pub use error::WiringError;

/// Fixed raster output file name
pub const PNG_FILE: &str = "wiring_diagram.png";

/// Fixed vector output file name
pub const PDF_FILE: &str = "wiring_diagram.pdf";

/// Raster output resolution in dots per inch
pub const RASTER_DPI: f32 = 300.0;

/// Paths of the files a successful run produced.
#[derive(Debug, Clone)]
pub struct Outputs {
    pub png: PathBuf,
    pub pdf: PathBuf,
}

/// Renders the wiring diagram into `out_dir`.
///
/// Writes the PNG first, then the PDF. Existing files are overwritten.
///
/// # Errors
///
/// Returns [`WiringError::Backend`] when the SVG tree cannot be parsed or
/// rasterized, and [`WiringError::Write`] when an output path is not
/// writable.
pub fn run(out_dir: &Path) -> Result<Outputs, WiringError> {
    info!("Building wiring diagram");
    let diagram = diagram::wiring()?;
    debug!(
        boxes = diagram.boxes().len(),
        connectors = diagram.connectors().len();
        "Diagram assembled"
    );

    let (document, size) = export::svg::render_document(&diagram);
    let svg_text = document.to_string();
    debug!(
        width = size.width(),
        height = size.height();
        "SVG document composed"
    );

    let png = out_dir.join(PNG_FILE);
    export::png::write_png(&svg_text, &png, RASTER_DPI)?;

    let pdf = out_dir.join(PDF_FILE);
    export::pdf::write_pdf(&svg_text, &pdf)?;

    info!(png:? = png, pdf:? = pdf; "Diagram exported");

    Ok(Outputs { png, pdf })
}
