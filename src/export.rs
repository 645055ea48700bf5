//! Export backends: SVG composition, PNG rasterization, PDF conversion.
//!
//! The SVG document is the single source for both output formats. PNG goes
//! through `usvg`/`resvg` into a `tiny-skia` pixmap at 300 DPI; PDF goes
//! through `svg2pdf` over the same tree.

pub mod pdf;
pub mod png;
pub mod svg;
