//! Text blocks and text measurement.
//!
//! Multi-line text renders as one SVG `<text>` element per line, centered
//! vertically on the anchor point. Measurement goes through a process-wide
//! cosmic-text `FontSystem`, which is expensive to construct and therefore
//! created once.

use std::sync::{Mutex, OnceLock};

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping};
use log::info;
use svg::node::element as svg_element;

use crate::{
    diagram::Anchor,
    draw::Drawable,
    geometry::{Bounds, Point, Size},
};

/// Line height as a multiple of the font size
pub const LINE_HEIGHT_FACTOR: f32 = 1.2;

/// Bubble padding as a multiple of the font size, matching the original's
/// `round,pad=0.3` caption style
const BUBBLE_PAD_FACTOR: f32 = 0.3;

const FONT_FAMILY: &str = "sans-serif";

/// A block of text lines anchored at a point in pixel space.
#[derive(Debug, Clone)]
pub struct TextBlock {
    lines: Vec<String>,
    position: Point,
    font_size: f32,
    bold: bool,
    anchor: Anchor,
    bubble: bool,
}

impl TextBlock {
    /// Creates a text block from newline-separated text.
    ///
    /// `position` is the anchor point: the vertical center of the block,
    /// and either its left edge (`Anchor::Start`) or horizontal center
    /// (`Anchor::Middle`).
    pub fn new(
        text: &str,
        position: Point,
        font_size: f32,
        bold: bool,
        anchor: Anchor,
        bubble: bool,
    ) -> Self {
        Self {
            lines: text.lines().map(str::to_string).collect(),
            position,
            font_size,
            bold,
            anchor,
            bubble,
        }
    }

    /// Size of the text block without bubble padding
    pub fn size(&self) -> Size {
        let widest = self
            .lines
            .iter()
            .map(|line| measure_text(line, self.font_size).width())
            .fold(0.0_f32, f32::max);
        let line_height = self.font_size * LINE_HEIGHT_FACTOR;
        Size::new(widest, self.lines.len() as f32 * line_height)
    }

    /// Bounds of the block including bubble padding, if any
    pub fn bounds(&self) -> Bounds {
        let size = self.size();
        let bounds = match self.anchor {
            Anchor::Middle => self.position.to_bounds(size),
            Anchor::Start => Bounds::new(
                self.position.x(),
                self.position.y() - size.height() / 2.0,
                self.position.x() + size.width(),
                self.position.y() + size.height() / 2.0,
            ),
        };

        if self.bubble {
            bounds.expand(self.font_size * BUBBLE_PAD_FACTOR)
        } else {
            bounds
        }
    }

    fn anchor_attribute(&self) -> &'static str {
        match self.anchor {
            Anchor::Start => "start",
            Anchor::Middle => "middle",
        }
    }

    fn line_elements(&self) -> Vec<svg_element::Text> {
        let line_height = self.font_size * LINE_HEIGHT_FACTOR;
        let line_count = self.lines.len() as f32;

        self.lines
            .iter()
            .enumerate()
            .map(|(index, line)| {
                // Center the block vertically on the anchor point
                let offset = (index as f32 - (line_count - 1.0) / 2.0) * line_height;

                let mut text = svg_element::Text::new(line.clone())
                    .set("x", self.position.x())
                    .set("y", self.position.y() + offset)
                    .set("text-anchor", self.anchor_attribute())
                    .set("dominant-baseline", "central")
                    .set("font-family", FONT_FAMILY)
                    .set("font-size", self.font_size);

                if self.bold {
                    text = text.set("font-weight", "bold");
                }

                text
            })
            .collect()
    }
}

impl Drawable for TextBlock {
    fn render_to_svg(&self) -> Box<dyn svg::Node> {
        let mut group = svg_element::Group::new();

        if self.bubble {
            let bounds = self.bounds();

            let bg = svg_element::Rectangle::new()
                .set("x", bounds.min_x())
                .set("y", bounds.min_y())
                .set("width", bounds.width())
                .set("height", bounds.height())
                .set("fill", "white")
                .set("fill-opacity", 0.8)
                .set("stroke", "black")
                .set("stroke-opacity", 0.8)
                .set("stroke-width", 1)
                .set("rx", 3.0); // Slightly rounded corners

            group = group.add(bg);
        }

        for line in self.line_elements() {
            group = group.add(line);
        }

        group.into()
    }
}

/// Measures a single line of text at the given font size.
///
/// Returns the size in the same units as `font_size`. Falls back to a
/// character-count estimate when no font is available, so headless
/// environments still produce a usable layout.
pub fn measure_text(text: &str, font_size: f32) -> Size {
    TEXT_MEASURER
        .get_or_init(TextMeasurer::new)
        .calculate_text_size(text, font_size)
}

/// TextMeasurer handles text measurement and font operations
/// It maintains a reusable FontSystem instance to avoid expensive recreation
struct TextMeasurer {
    font_system: Mutex<FontSystem>,
}

impl TextMeasurer {
    fn new() -> Self {
        info!("Initializing FontSystem");
        Self {
            font_system: Mutex::new(FontSystem::new()),
        }
    }

    /// Calculate the actual size of text using cosmic-text.
    ///
    /// This provides a measurement based on real font metrics and shaping,
    /// including kerning and ligatures.
    fn calculate_text_size(&self, text: &str, font_size: f32) -> Size {
        if text.is_empty() {
            return Size::default();
        }

        // Lock the FontSystem for use
        let mut font_system = self
            .font_system
            .lock()
            .expect("failed to lock FontSystem");

        let line_height = font_size * LINE_HEIGHT_FACTOR;
        let metrics = Metrics::new(font_size, line_height);

        // Create a buffer with the metrics
        let mut buffer = Buffer::new(&mut font_system, metrics);
        let mut buffer = buffer.borrow_with(&mut font_system);

        let attrs = Attrs::new().family(Family::SansSerif);

        // Set the buffer's size to unlimited to allow text to flow naturally
        buffer.set_size(None, None);

        // Advanced shaping handles ligatures, kerning, etc.
        buffer.set_text(text, &attrs, Shaping::Advanced, None);

        // Shape the text to calculate layout
        buffer.shape_until_scroll(true);

        // Calculate bounds by examining layout runs to determine actual rendered size
        let mut max_width: f32 = 0.0;
        let mut total_height: f32 = 0.0;

        let layout_runs: Vec<_> = buffer.layout_runs().collect();
        if !layout_runs.is_empty() {
            for last in layout_runs.iter().map(|run| run.glyphs.last()) {
                // Find rightmost glyph position
                if let Some(last) = last {
                    let run_width = last.x + last.w;
                    max_width = max_width.max(run_width);
                }
                total_height += metrics.line_height;
            }
        } else {
            // Default size if no runs available (e.g. no system fonts)
            max_width = text.len() as f32 * (font_size * 0.55);
            total_height = metrics.line_height;
        }

        Size::new(max_width, total_height)
    }
}

// Create a global instance for use throughout the application
static TEXT_MEASURER: OnceLock<TextMeasurer> = OnceLock::new();

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn measurement_is_nonzero_and_monotonic() {
        let short = measure_text("API", 9.0);
        let long = measure_text("Presentation Layer", 9.0);
        assert!(short.width() > 0.0);
        assert!(short.height() > 0.0);
        assert!(long.width() > short.width());
    }

    #[test]
    fn block_size_spans_all_lines() {
        let block = TextBlock::new(
            "HTTP/HTTPS\nRESTful API\nJSON",
            Point::new(0.0, 0.0),
            7.0,
            false,
            Anchor::Start,
            true,
        );
        let size = block.size();
        assert!(size.height() >= 3.0 * 7.0);
        assert!(size.width() > 0.0);
    }

    #[test]
    fn bubble_bounds_are_padded_beyond_text() {
        let plain = TextBlock::new("JSON", Point::new(10.0, 10.0), 8.0, false, Anchor::Middle, false);
        let bubbled = TextBlock::new("JSON", Point::new(10.0, 10.0), 8.0, false, Anchor::Middle, true);
        assert!(bubbled.bounds().width() > plain.bounds().width());
        assert!(bubbled.bounds().height() > plain.bounds().height());
    }

    #[test]
    fn start_anchored_blocks_extend_rightward() {
        let block = TextBlock::new("Mongoose", Point::new(5.0, 0.0), 8.0, false, Anchor::Start, false);
        let bounds = block.bounds();
        assert_eq!(bounds.min_x(), 5.0);
        assert!(bounds.max_x() > 5.0);
    }
}
