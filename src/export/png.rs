//! PNG rasterization via usvg/resvg into a tiny-skia pixmap.

use std::{fs, path::Path};

use log::{debug, info};
use tiny_skia::Pixmap;

use crate::error::WiringError;

/// SVG documents are composed at 72 points per inch
const SVG_DPI: f32 = 72.0;

/// Rasterizes the SVG text to a PNG at the given DPI over a white background.
pub fn write_png(svg_text: &str, path: &Path, dpi: f32) -> Result<(), WiringError> {
    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg_text, &options)
        .map_err(|err| WiringError::Backend(format!("SVG parsing failed: {err}")))?;

    let scale = dpi / SVG_DPI;
    let width = (tree.size().width() * scale).round().max(1.0) as u32;
    let height = (tree.size().height() * scale).round().max(1.0) as u32;
    debug!(width, height, dpi; "Rasterizing PNG");

    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
        WiringError::Backend(format!("cannot allocate a {width}x{height} pixmap"))
    })?;

    // Opaque white background; the output carries no transparency
    pixmap.fill(tiny_skia::Color::WHITE);

    let transform = tiny_skia::Transform::from_scale(scale, scale);
    resvg::render(&tree, transform, &mut pixmap.as_mut());

    let data = pixmap
        .encode_png()
        .map_err(|err| WiringError::Backend(format!("PNG encoding failed: {err}")))?;

    fs::write(path, data).map_err(|source| WiringError::write(path, source))?;
    info!(path:? = path; "PNG written");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_svg_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("broken.png");

        let err = write_png("this is not svg", &out, 300.0).unwrap_err();
        assert!(matches!(err, WiringError::Backend(_)));
        assert!(!out.exists());
    }

    #[test]
    fn rasterizes_a_minimal_document() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dot.png");
        let svg_text = r#"<svg xmlns="http://www.w3.org/2000/svg" width="72" height="36" viewBox="0 0 72 36"><rect x="0" y="0" width="72" height="36" fill="red"/></svg>"#;

        write_png(svg_text, &out, 300.0).unwrap();

        let pixmap = Pixmap::decode_png(&fs::read(&out).unwrap()).unwrap();
        // 72pt x 36pt at 300 DPI
        assert_eq!(pixmap.width(), 300);
        assert_eq!(pixmap.height(), 150);
    }
}
