//! PDF conversion via svg2pdf.
//!
//! The SVG is re-parsed through `svg2pdf`'s own usvg re-export so the tree
//! and the converter always agree on a version.

use std::{fs, path::Path};

use log::info;

use crate::error::WiringError;

/// Converts the SVG text to a vector PDF at the given path.
pub fn write_pdf(svg_text: &str, path: &Path) -> Result<(), WiringError> {
    let mut options = svg2pdf::usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = svg2pdf::usvg::Tree::from_str(svg_text, &options)
        .map_err(|err| WiringError::Backend(format!("SVG parsing failed: {err}")))?;

    let pdf = svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|err| WiringError::Backend(format!("PDF conversion failed: {err}")))?;

    fs::write(path, pdf).map_err(|source| WiringError::write(path, source))?;
    info!(path:? = path; "PDF written");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_svg_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("broken.pdf");

        let err = write_pdf("<not-svg>", &out).unwrap_err();
        assert!(matches!(err, WiringError::Backend(_)));
        assert!(!out.exists());
    }

    #[test]
    fn converts_a_minimal_document() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("dot.pdf");
        let svg_text = r#"<svg xmlns="http://www.w3.org/2000/svg" width="72" height="36" viewBox="0 0 72 36"><rect x="0" y="0" width="72" height="36" fill="white"/></svg>"#;

        write_pdf(svg_text, &out).unwrap();

        let data = fs::read(&out).unwrap();
        assert!(data.starts_with(b"%PDF"));
    }
}
