//! SVG document composition.
//!
//! The diagram model lives in a y-up unit space; SVG is y-down pixel space.
//! One unit maps to 60 pixels (the original's 10-inch-wide figure across 12
//! units, at 72 points per inch), so point-denominated font sizes and line
//! widths carry over unchanged. The viewport tight-crops to the content
//! bounding box plus a small pad.

use svg::Document;
use svg::node::element as svg_element;

use crate::{
    color::Color,
    diagram::{Anchor, Caption, Connector, Diagram, TierBox},
    draw::{self, Drawable},
    geometry::{Bounds, Point, Size},
};

/// Pixels per diagram unit
pub const SCALE: f32 = 60.0;

/// Crop pad around the content, in diagram units
const CROP_PAD: f32 = 0.2;

/// Box text font size in points
const BOX_FONT_SIZE: f32 = 9.0;

/// Tier label font size in points
const TIER_LABEL_FONT_SIZE: f32 = 10.0;

/// Maps y-up diagram units into the y-down pixel space of the document.
#[derive(Debug, Clone, Copy)]
pub struct Viewport {
    bounds: Bounds,
}

impl Viewport {
    /// Fixes the transform over the given content bounds (diagram units)
    pub fn new(bounds: Bounds) -> Self {
        Self { bounds }
    }

    /// Converts a diagram-space point to pixel space
    pub fn to_px(&self, point: Point) -> Point {
        Point::new(
            (point.x() - self.bounds.min_x()) * SCALE,
            (self.bounds.max_y() - point.y()) * SCALE,
        )
    }

    /// Converts a diagram-space bounds rectangle to pixel space
    pub fn bounds_to_px(&self, bounds: Bounds) -> Bounds {
        // y flips, so the unit-space top edge becomes the pixel-space min
        let top_left = self.to_px(Point::new(bounds.min_x(), bounds.max_y()));
        let bottom_right = self.to_px(Point::new(bounds.max_x(), bounds.min_y()));
        Bounds::new(top_left.x(), top_left.y(), bottom_right.x(), bottom_right.y())
    }

    /// Pixel dimensions of the document
    pub fn size_px(&self) -> Size {
        self.bounds.to_size().scale(SCALE)
    }
}

/// Renders the diagram into an SVG document, returning it with its pixel size.
pub fn render_document(diagram: &Diagram) -> (Document, Size) {
    let viewport = Viewport::new(content_bounds(diagram));
    let size = viewport.size_px();

    let mut doc = Document::new()
        .set("width", size.width())
        .set("height", size.height())
        .set(
            "viewBox",
            format!("0 0 {} {}", size.width(), size.height()),
        );

    // Arrowhead markers, one pair per color in use
    let colors = connector_colors(diagram);
    doc = doc.add(draw::marker_definitions(colors.iter()));

    // Opaque white background for both raster and vector output
    let background = svg_element::Rectangle::new()
        .set("x", 0)
        .set("y", 0)
        .set("width", size.width())
        .set("height", size.height())
        .set("fill", "white");
    doc = doc.add(background);

    // Document order is z-order: boxes first, then connectors with their
    // captions, then the title on top.
    for tier_box in diagram.boxes() {
        doc = doc.add(render_box(&viewport, tier_box).render_to_svg());
    }

    for connector in diagram.connectors() {
        doc = doc.add(render_connector(&viewport, connector).render_to_svg());
        if let Some(caption) = connector.caption() {
            doc = doc.add(render_caption(&viewport, caption).render_to_svg());
        }
    }

    doc = doc.add(render_caption(&viewport, diagram.title()).render_to_svg());

    (doc, size)
}

/// Unique connector colors, in first-use order
fn connector_colors(diagram: &Diagram) -> Vec<Color> {
    let mut colors: Vec<Color> = Vec::new();
    for connector in diagram.connectors() {
        if !colors.contains(connector.color()) {
            colors.push(connector.color().clone());
        }
    }
    colors
}

fn render_box(viewport: &Viewport, tier_box: &TierBox) -> draw::RoundedBox {
    let visual = Bounds::new(
        tier_box.origin().x(),
        tier_box.origin().y(),
        tier_box.origin().x() + tier_box.size().width(),
        tier_box.origin().y() + tier_box.size().height(),
    )
    .expand(TierBox::VISUAL_PAD);

    let text = draw::TextBlock::new(
        tier_box.text(),
        viewport.to_px(tier_box.center()),
        BOX_FONT_SIZE,
        true,
        Anchor::Middle,
        false,
    );

    let tier_label = tier_box.tier_label().and_then(|label| {
        tier_box.tier_label_center().map(|center| {
            draw::TextBlock::new(
                label,
                viewport.to_px(center),
                TIER_LABEL_FONT_SIZE,
                true,
                Anchor::Middle,
                false,
            )
        })
    });

    draw::RoundedBox::new(
        viewport.bounds_to_px(visual),
        TierBox::VISUAL_PAD * SCALE,
        tier_box.fill().clone(),
        text,
        tier_label,
    )
}

fn render_connector(viewport: &Viewport, connector: &Connector) -> draw::Arrow {
    draw::Arrow::new(
        viewport.to_px(connector.start()),
        viewport.to_px(connector.end()),
        connector.heads(),
        connector.line(),
        connector.color().clone(),
        connector.width(),
    )
}

fn render_caption(viewport: &Viewport, caption: &Caption) -> draw::TextBlock {
    draw::TextBlock::new(
        caption.text(),
        viewport.to_px(caption.position()),
        caption.font_size(),
        caption.bold(),
        caption.anchor(),
        caption.bubble(),
    )
}

/// Tight content bounding box of the whole diagram, in diagram units.
///
/// Includes box outlines (visual pad), tier labels, connector endpoints,
/// and caption bubbles, then pads by [`CROP_PAD`].
pub fn content_bounds(diagram: &Diagram) -> Bounds {
    let mut bounds = Bounds::empty();

    for tier_box in diagram.boxes() {
        let corner = tier_box
            .origin()
            .translate(tier_box.size().width(), tier_box.size().height());
        bounds = bounds
            .include_point(tier_box.origin().translate(-TierBox::VISUAL_PAD, -TierBox::VISUAL_PAD))
            .include_point(corner.translate(TierBox::VISUAL_PAD, TierBox::VISUAL_PAD));

        if let (Some(label), Some(center)) = (tier_box.tier_label(), tier_box.tier_label_center()) {
            bounds = bounds.union(text_bounds_units(label, TIER_LABEL_FONT_SIZE, center));
        }
    }

    for connector in diagram.connectors() {
        bounds = bounds
            .include_point(connector.start())
            .include_point(connector.end());

        if let Some(caption) = connector.caption() {
            bounds = bounds.union(caption_bounds_units(caption));
        }
    }

    bounds = bounds.union(caption_bounds_units(diagram.title()));

    bounds.expand(CROP_PAD)
}

/// Bounds of a centered text block in diagram units
fn text_bounds_units(text: &str, font_size: f32, center: Point) -> Bounds {
    let block = draw::TextBlock::new(text, Point::default(), font_size, true, Anchor::Middle, false);
    center.to_bounds(block.size().scale(1.0 / SCALE))
}

/// Bounds of a caption (including its bubble pad) in diagram units.
///
/// Delegates to the drawable's own bounds so cropping and rendering share
/// one notion of anchor and bubble pad. The block's bounds are vertically
/// symmetric about its anchor, so the offsets survive the y flip unchanged.
fn caption_bounds_units(caption: &Caption) -> Bounds {
    let block = draw::TextBlock::new(
        caption.text(),
        Point::default(),
        caption.font_size(),
        caption.bold(),
        caption.anchor(),
        caption.bubble(),
    );
    let px = block.bounds();

    let position = caption.position();
    Bounds::new(
        position.x() + px.min_x() / SCALE,
        position.y() + px.min_y() / SCALE,
        position.x() + px.max_x() / SCALE,
        position.y() + px.max_y() / SCALE,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram;

    #[test]
    fn viewport_flips_the_y_axis() {
        let viewport = Viewport::new(Bounds::new(0.0, 0.0, 12.0, 14.0));
        let top = viewport.to_px(Point::new(0.0, 14.0));
        let bottom = viewport.to_px(Point::new(0.0, 0.0));
        assert_eq!(top.y(), 0.0);
        assert_eq!(bottom.y(), 14.0 * SCALE);
    }

    #[test]
    fn viewport_maps_bounds_with_flipped_corners() {
        let viewport = Viewport::new(Bounds::new(2.0, 1.0, 12.0, 14.0));
        let px = viewport.bounds_to_px(Bounds::new(4.0, 12.0, 8.0, 13.2));
        assert!(px.min_y() < px.max_y());
        assert!((px.width() - 4.0 * SCALE).abs() < 1e-3);
        assert!((px.height() - 1.2 * SCALE).abs() < 1e-3);
    }

    #[test]
    fn content_bounds_cover_the_fixed_layout() {
        let diagram = diagram::wiring().unwrap();
        let bounds = content_bounds(&diagram);

        // Leftmost element is the React Router box at x=2.5 minus pads and
        // tier labels; rightmost is the external service box at x=11.5.
        assert!(bounds.min_x() < 2.5);
        assert!(bounds.max_x() > 11.5);
        // Storage box bottom at y=2.0, title at y=13.5.
        assert!(bounds.min_y() < 2.0);
        assert!(bounds.max_y() > 13.5);
        // Everything stays within the original 12x14 axes plus margins.
        assert!(bounds.min_x() > 0.0);
        assert!(bounds.max_y() < 14.5);
    }

    #[test]
    fn document_contains_markers_dashes_and_title() {
        let diagram = diagram::wiring().unwrap();
        let (doc, size) = render_document(&diagram);
        let rendered = doc.to_string();

        assert!(size.width() > 0.0);
        assert!(size.height() > size.width());
        assert!(rendered.contains("<marker"));
        assert!(rendered.contains("stroke-dasharray"));
        assert!(rendered.contains("N-Tier Architecture Wiring Diagram"));
        assert!(rendered.contains("MongoDB Database"));
        assert!(rendered.contains("Tier 4"));
    }

    #[test]
    fn document_draws_one_rect_per_box_plus_backgrounds() {
        let diagram = diagram::wiring().unwrap();
        let (doc, _) = render_document(&diagram);
        let rendered = doc.to_string();

        // 13 boxes + 1 document background + 4 caption bubbles
        let rects = rendered.matches("<rect").count();
        assert_eq!(rects, 13 + 1 + 4);
    }

    #[test]
    fn caption_weight_follows_the_bold_flag_not_the_bubble() {
        let viewport = Viewport::new(Bounds::new(0.0, 0.0, 12.0, 14.0));

        let bold_bubbled = Caption::new(
            "Replica Set",
            Point::new(6.0, 7.0),
            8.0,
            Anchor::Middle,
            true,
            true,
        );
        let rendered = render_caption(&viewport, &bold_bubbled)
            .render_to_svg()
            .to_string();
        assert!(rendered.contains("font-weight=\"bold\""));
        assert!(rendered.contains("<rect"), "bubble background missing");

        let regular_plain = Caption::new(
            "Replica Set",
            Point::new(6.0, 7.0),
            8.0,
            Anchor::Middle,
            false,
            false,
        );
        let rendered = render_caption(&viewport, &regular_plain)
            .render_to_svg()
            .to_string();
        assert!(!rendered.contains("font-weight"));
        assert!(!rendered.contains("<rect"));
    }

    #[test]
    fn caption_crop_bounds_match_the_drawable() {
        let caption = Caption::new(
            "HTTP/HTTPS\nRESTful API\nJSON",
            Point::new(7.5, 9.0),
            7.0,
            Anchor::Start,
            false,
            true,
        );
        let bounds = caption_bounds_units(&caption);

        // The bubble pad extends left of a start anchor and the three lines
        // plus pad extend above and below the anchor symmetrically.
        assert!(bounds.min_x() < 7.5);
        assert!(bounds.max_x() > 7.5);
        let above = bounds.max_y() - 9.0;
        let below = 9.0 - bounds.min_y();
        assert!((above - below).abs() < 1e-4);

        // Unit-space extent is the drawable's pixel extent over SCALE
        let block = draw::TextBlock::new(
            caption.text(),
            Point::default(),
            caption.font_size(),
            caption.bold(),
            caption.anchor(),
            caption.bubble(),
        );
        assert!((bounds.width() - block.bounds().width() / SCALE).abs() < 1e-4);
        assert!((bounds.height() - block.bounds().height() / SCALE).abs() < 1e-4);
    }

    #[test]
    fn one_marker_pair_per_connector_color() {
        let diagram = diagram::wiring().unwrap();
        let (doc, _) = render_document(&diagram);
        let rendered = doc.to_string();

        // black, blue, green, orange, purple
        let markers = rendered.matches("<marker").count();
        assert_eq!(markers, 5 * 2);
    }
}
