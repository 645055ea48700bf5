//! Drawable elements for the wiring diagram.
//!
//! Everything here lives in pixel space; the exporter maps the diagram's
//! y-up unit coordinates before constructing drawables. All elements
//! implement [`Drawable`], which renders to an SVG node.

mod arrow;
mod shape;
mod text;

pub use arrow::{Arrow, marker_definitions, marker_references};
pub use shape::RoundedBox;
pub use text::{LINE_HEIGHT_FACTOR, TextBlock, measure_text};

pub trait Drawable: std::fmt::Debug {
    fn render_to_svg(&self) -> Box<dyn svg::Node>;
}
