//! Arrow rendering with SVG marker arrowheads.
//!
//! Arrowheads are SVG `<marker>` definitions, one left- and one
//! right-pointing marker per color in use. The four supported connector
//! styles are single or double heads, solid or dashed stroke.

use svg::node::element::{Definitions, Marker, Path};

use crate::{
    color::Color,
    diagram::{ArrowHeads, LineStyle},
    draw::Drawable,
    geometry::Point,
};

/// Dash pattern applied to dashed connectors
const DASH_PATTERN: &str = "6,4";

/// A straight arrow between two points in pixel space.
#[derive(Debug, Clone)]
pub struct Arrow {
    start: Point,
    end: Point,
    heads: ArrowHeads,
    line: LineStyle,
    color: Color,
    width: f32,
}

impl Arrow {
    pub fn new(
        start: Point,
        end: Point,
        heads: ArrowHeads,
        line: LineStyle,
        color: Color,
        width: f32,
    ) -> Self {
        Self {
            start,
            end,
            heads,
            line,
            color,
            width,
        }
    }
}

impl Drawable for Arrow {
    fn render_to_svg(&self) -> Box<dyn svg::Node> {
        let path_data = format!(
            "M {} {} L {} {}",
            self.start.x(),
            self.start.y(),
            self.end.x(),
            self.end.y()
        );

        let mut path = Path::new()
            .set("d", path_data)
            .set("fill", "none")
            .set("stroke", self.color.to_string())
            .set("stroke-width", self.width);

        if self.line == LineStyle::Dashed {
            path = path.set("stroke-dasharray", DASH_PATTERN);
        }

        let (start_marker, end_marker) = marker_references(self.heads, &self.color);
        if let Some(marker) = start_marker {
            path = path.set("marker-start", marker);
        }
        path = path.set("marker-end", end_marker);

        Box::new(path)
    }
}

/// Creates marker definitions for SVG arrows based on the colors in use
pub fn marker_definitions<'a, I>(colors: I) -> Definitions
where
    I: Iterator<Item = &'a Color>,
{
    let mut defs = Definitions::new();

    // Create markers for each color
    for color in colors {
        // Right-pointing arrow marker for this color
        let arrow_right = Marker::new()
            .set("id", format!("arrow-right-{}", color.to_id_safe_string()))
            .set("viewBox", "0 0 10 10")
            .set("refX", 9)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 0 0 L 10 5 L 0 10 z")
                    .set("fill", color.to_string()),
            );

        // Left-pointing arrow marker for this color
        let arrow_left = Marker::new()
            .set("id", format!("arrow-left-{}", color.to_id_safe_string()))
            .set("viewBox", "0 0 10 10")
            .set("refX", 1)
            .set("refY", 5)
            .set("markerWidth", 6)
            .set("markerHeight", 6)
            .set("orient", "auto")
            .add(
                Path::new()
                    .set("d", "M 10 0 L 0 5 L 10 10 z")
                    .set("fill", color.to_string()),
            );

        defs = defs.add(arrow_right).add(arrow_left);
    }

    defs
}

/// Get marker references for a head style and color.
///
/// Every connector carries an end marker; double-headed connectors add a
/// start marker pointing backwards along the path.
pub fn marker_references(heads: ArrowHeads, color: &Color) -> (Option<String>, String) {
    let end = format!("url(#arrow-right-{})", color.to_id_safe_string());
    match heads {
        ArrowHeads::Single => (None, end),
        ArrowHeads::Double => (
            Some(format!("url(#arrow-left-{})", color.to_id_safe_string())),
            end,
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_headed_arrows_have_no_start_marker() {
        let black = Color::default();
        let (start, end) = marker_references(ArrowHeads::Single, &black);
        assert!(start.is_none());
        assert!(end.starts_with("url(#arrow-right-"));
    }

    #[test]
    fn double_headed_arrows_mark_both_ends() {
        let black = Color::default();
        let (start, end) = marker_references(ArrowHeads::Double, &black);
        assert!(start.is_some_and(|s| s.starts_with("url(#arrow-left-")));
        assert!(end.starts_with("url(#arrow-right-"));
    }

    #[test]
    fn dashed_arrows_render_a_dasharray() {
        let arrow = Arrow::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 10.0),
            ArrowHeads::Double,
            LineStyle::Dashed,
            Color::new("blue").unwrap(),
            2.0,
        );
        let node = arrow.render_to_svg();
        let rendered = node.to_string();
        assert!(rendered.contains("stroke-dasharray"));
        assert!(rendered.contains("marker-start"));
        assert!(rendered.contains("marker-end"));
    }

    #[test]
    fn solid_arrows_render_without_a_dasharray() {
        let arrow = Arrow::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            ArrowHeads::Single,
            LineStyle::Solid,
            Color::default(),
            1.5,
        );
        let rendered = arrow.render_to_svg().to_string();
        assert!(!rendered.contains("stroke-dasharray"));
        assert!(!rendered.contains("marker-start"));
    }
}
