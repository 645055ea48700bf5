//! The rounded, labeled box element.

use svg::node::element as svg_element;

use crate::{
    color::Color,
    draw::{Drawable, TextBlock},
    geometry::Bounds,
};

/// Outline width in points, matching the original box style
const OUTLINE_WIDTH: f32 = 1.5;

/// A rounded rectangle with centered bold text and an optional tier label
/// floating to its left. All geometry is in pixel space and includes the
/// visual pad already.
#[derive(Debug, Clone)]
pub struct RoundedBox {
    bounds: Bounds,
    corner_radius: f32,
    fill: Color,
    text: TextBlock,
    tier_label: Option<TextBlock>,
}

impl RoundedBox {
    pub fn new(
        bounds: Bounds,
        corner_radius: f32,
        fill: Color,
        text: TextBlock,
        tier_label: Option<TextBlock>,
    ) -> Self {
        Self {
            bounds,
            corner_radius,
            fill,
            text,
            tier_label,
        }
    }
}

impl Drawable for RoundedBox {
    fn render_to_svg(&self) -> Box<dyn svg::Node> {
        let rect = svg_element::Rectangle::new()
            .set("x", self.bounds.min_x())
            .set("y", self.bounds.min_y())
            .set("width", self.bounds.width())
            .set("height", self.bounds.height())
            .set("stroke", "black")
            .set("stroke-width", OUTLINE_WIDTH)
            .set("fill", &self.fill)
            .set("rx", self.corner_radius);

        let mut group = svg_element::Group::new().add(rect);
        group = group.add(self.text.render_to_svg());

        if let Some(label) = &self.tier_label {
            group = group.add(label.render_to_svg());
        }

        group.into()
    }
}
