//! The fixed N-tier wiring diagram model.
//!
//! Every coordinate, size, color, and string in [`wiring`] is a hand-tuned
//! literal. The model lives in a 12x14-unit, y-up coordinate space and is
//! only ever built once per run; there is no layout pass and no input that
//! feeds it. Source order is z-order: later elements draw on top.

use crate::{
    color::Color,
    error::WiringError,
    geometry::{Point, Size},
};

/// Horizontal anchoring for caption text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// Text extends rightward from the anchor point.
    Start,
    /// Text is centered on the anchor point.
    Middle,
}

/// A piece of free-standing text, optionally backed by a white bubble.
#[derive(Debug, Clone)]
pub struct Caption {
    text: String,
    position: Point,
    font_size: f32,
    anchor: Anchor,
    bold: bool,
    bubble: bool,
}

impl Caption {
    pub fn new(
        text: &str,
        position: Point,
        font_size: f32,
        anchor: Anchor,
        bold: bool,
        bubble: bool,
    ) -> Self {
        Self {
            text: text.to_string(),
            position,
            font_size,
            anchor,
            bold,
            bubble,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The anchor point, vertically centered on the text block
    pub fn position(&self) -> Point {
        self.position
    }

    /// Font size in points
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    /// Whether the text renders in a bold weight
    pub fn bold(&self) -> bool {
        self.bold
    }

    /// Whether the text gets a white rounded background at 80% opacity
    pub fn bubble(&self) -> bool {
        self.bubble
    }
}

/// A labeled rounded box.
#[derive(Debug, Clone)]
pub struct TierBox {
    origin: Point,
    size: Size,
    text: String,
    fill: Color,
    tier_label: Option<String>,
}

impl TierBox {
    /// Offset from the box's left edge to the center of its tier label
    pub const TIER_LABEL_OFFSET: f32 = 0.8;

    /// Visual pad added on every side when drawing, matching the original
    /// rounded box style
    pub const VISUAL_PAD: f32 = 0.1;

    pub fn new(origin: Point, size: Size, text: &str, fill: Color) -> Self {
        Self {
            origin,
            size,
            text: text.to_string(),
            fill,
            tier_label: None,
        }
    }

    pub fn with_tier_label(mut self, label: &str) -> Self {
        self.tier_label = Some(label.to_string());
        self
    }

    /// Lower-left corner in diagram units
    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn size(&self) -> Size {
        self.size
    }

    /// Display text; embedded newlines separate lines
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn fill(&self) -> &Color {
        &self.fill
    }

    pub fn tier_label(&self) -> Option<&str> {
        self.tier_label.as_deref()
    }

    /// Center of the box
    pub fn center(&self) -> Point {
        self.origin
            .translate(self.size.width() / 2.0, self.size.height() / 2.0)
    }

    /// Center of the tier label, if one is set
    pub fn tier_label_center(&self) -> Option<Point> {
        self.tier_label
            .as_ref()
            .map(|_| self.origin.translate(-Self::TIER_LABEL_OFFSET, self.size.height() / 2.0))
    }
}

/// Arrowhead configuration for a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrowHeads {
    /// Head at the end point only
    Single,
    /// Heads at both ends
    Double,
}

/// Line pattern for a connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// A directional arrow between two points, optionally captioned.
#[derive(Debug, Clone)]
pub struct Connector {
    start: Point,
    end: Point,
    heads: ArrowHeads,
    line: LineStyle,
    color: Color,
    width: f32,
    caption: Option<Caption>,
}

impl Connector {
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
            caption: None,
        }
    }

    pub fn with_caption(mut self, caption: Caption) -> Self {
        self.caption = Some(caption);
        self
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn end(&self) -> Point {
        self.end
    }

    pub fn heads(&self) -> ArrowHeads {
        self.heads
    }

    pub fn line(&self) -> LineStyle {
        self.line
    }

    pub fn color(&self) -> &Color {
        &self.color
    }

    /// Stroke width in points
    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn caption(&self) -> Option<&Caption> {
        self.caption.as_ref()
    }
}

/// The assembled diagram: boxes, connectors, and a title.
#[derive(Debug, Clone)]
pub struct Diagram {
    boxes: Vec<TierBox>,
    connectors: Vec<Connector>,
    title: Caption,
}

impl Diagram {
    pub fn boxes(&self) -> &[TierBox] {
        &self.boxes
    }

    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    pub fn title(&self) -> &Caption {
        &self.title
    }
}

/// The fixed fill palette of the wiring diagram.
struct Palette {
    presentation: Color,
    business: Color,
    data: Color,
    storage: Color,
    external: Color,
    service: Color,
}

impl Palette {
    fn standard() -> Result<Self, WiringError> {
        Ok(Self {
            presentation: Color::new("#87CEEB")?,
            business: Color::new("#90EE90")?,
            data: Color::new("#FFA500")?,
            storage: Color::new("#FF8C00")?,
            external: Color::new("#DDA0DD")?,
            service: Color::new("#98FB98")?,
        })
    }
}

/// Builds the N-tier architecture wiring diagram.
///
/// Thirteen boxes, thirteen connectors (four caption bubbles among them),
/// and the title, each at literal hand-tuned coordinates. The only failure
/// mode is an unparsable color literal.
pub fn wiring() -> Result<Diagram, WiringError> {
    let palette = Palette::standard()?;
    let black = Color::default();
    let blue = Color::new("blue")?;
    let green = Color::new("green")?;
    let orange = Color::new("orange")?;
    let purple = Color::new("purple")?;

    let mut boxes = Vec::new();

    // Tier 1: presentation layer and its services
    boxes.push(
        TierBox::new(
            Point::new(4.0, 12.0),
            Size::new(4.0, 1.2),
            "Presentation Layer\nReact Frontend",
            palette.presentation.clone(),
        )
        .with_tier_label("Tier 1"),
    );
    boxes.push(TierBox::new(
        Point::new(2.5, 10.2),
        Size::new(1.6, 0.6),
        "React Router",
        palette.service.clone(),
    ));
    boxes.push(TierBox::new(
        Point::new(4.3, 10.2),
        Size::new(1.6, 0.6),
        "AuthContext",
        palette.service.clone(),
    ));
    boxes.push(TierBox::new(
        Point::new(6.1, 10.2),
        Size::new(1.6, 0.6),
        "APIService",
        palette.service.clone(),
    ));
    boxes.push(TierBox::new(
        Point::new(7.9, 10.2),
        Size::new(1.6, 0.6),
        "GeminiService",
        palette.service.clone(),
    ));

    // Tier 2: business logic layer and its components
    boxes.push(
        TierBox::new(
            Point::new(4.0, 8.0),
            Size::new(4.0, 1.2),
            "Business Logic Layer\nExpress Backend",
            palette.business.clone(),
        )
        .with_tier_label("Tier 2"),
    );
    boxes.push(TierBox::new(
        Point::new(3.2, 6.5),
        Size::new(1.3, 0.65),
        "Express.js\nFramework",
        palette.service.clone(),
    ));
    boxes.push(TierBox::new(
        Point::new(4.7, 6.5),
        Size::new(1.3, 0.65),
        "Auth Middleware\n(JWT)",
        palette.service.clone(),
    ));
    boxes.push(TierBox::new(
        Point::new(6.2, 6.5),
        Size::new(1.3, 0.65),
        "REST API\nRoutes",
        palette.service.clone(),
    ));

    // Tier 3: data layer
    boxes.push(
        TierBox::new(
            Point::new(4.5, 5.0),
            Size::new(3.0, 1.0),
            "Data Layer\nMongoose ODM",
            palette.data.clone(),
        )
        .with_tier_label("Tier 3"),
    );
    boxes.push(TierBox::new(
        Point::new(4.5, 3.5),
        Size::new(3.0, 0.8),
        "User Model",
        palette.data.clone(),
    ));

    // Tier 4: storage layer
    boxes.push(
        TierBox::new(
            Point::new(4.5, 2.0),
            Size::new(3.0, 1.0),
            "Storage Layer\nMongoDB Database",
            palette.storage.clone(),
        )
        .with_tier_label("Tier 4"),
    );

    // External service
    boxes.push(TierBox::new(
        Point::new(9.5, 11.5),
        Size::new(2.0, 1.0),
        "External Service\nGoogle Gemini AI",
        palette.external.clone(),
    ));

    let mut connectors = Vec::new();

    // Presentation services to the presentation layer box
    for x in [3.3, 5.1, 6.9, 8.7] {
        connectors.push(Connector::new(
            Point::new(x, 11.2),
            Point::new(x, 10.8),
            ArrowHeads::Double,
            LineStyle::Solid,
            black.clone(),
            1.5,
        ));
    }

    // APIService to the Express backend
    connectors.push(
        Connector::new(
            Point::new(6.9, 10.5),
            Point::new(6.2, 8.0),
            ArrowHeads::Double,
            LineStyle::Dashed,
            blue,
            2.0,
        )
        .with_caption(Caption::new(
            "HTTP/HTTPS\nRESTful API\nJSON",
            Point::new(7.5, 9.0),
            7.0,
            Anchor::Start,
            false,
            true,
        )),
    );

    // Business components fan out from the backend box
    for x in [3.85, 5.35, 6.85] {
        connectors.push(Connector::new(
            Point::new(6.0, 8.0),
            Point::new(x, 6.8),
            ArrowHeads::Single,
            LineStyle::Solid,
            black.clone(),
            1.5,
        ));
    }

    // Routes and middleware down to the data layer
    connectors.push(
        Connector::new(
            Point::new(5.35, 6.83),
            Point::new(6.0, 5.0),
            ArrowHeads::Double,
            LineStyle::Dashed,
            green.clone(),
            2.0,
        )
        .with_caption(Caption::new(
            "Mongoose\nODM",
            Point::new(8.5, 5.5),
            8.0,
            Anchor::Start,
            false,
            true,
        )),
    );
    connectors.push(Connector::new(
        Point::new(6.85, 6.83),
        Point::new(6.0, 5.0),
        ArrowHeads::Double,
        LineStyle::Dashed,
        green,
        2.0,
    ));

    // Data layer to the user model
    connectors.push(Connector::new(
        Point::new(6.0, 5.0),
        Point::new(6.0, 3.5),
        ArrowHeads::Single,
        LineStyle::Solid,
        black.clone(),
        1.5,
    ));

    // Data layer down to storage
    connectors.push(
        Connector::new(
            Point::new(6.0, 3.3),
            Point::new(6.0, 2.0),
            ArrowHeads::Double,
            LineStyle::Dashed,
            orange,
            2.0,
        )
        .with_caption(Caption::new(
            "MongoDB\nProtocol",
            Point::new(7.5, 2.5),
            8.0,
            Anchor::Start,
            false,
            true,
        )),
    );

    // GeminiService out to the external service
    connectors.push(
        Connector::new(
            Point::new(8.7, 10.5),
            Point::new(9.5, 12.0),
            ArrowHeads::Double,
            LineStyle::Dashed,
            purple,
            2.0,
        )
        .with_caption(Caption::new(
            "HTTPS\nAsync\nAjax",
            Point::new(9.0, 11.5),
            7.0,
            Anchor::Middle,
            false,
            true,
        )),
    );

    let title = Caption::new(
        "N-Tier Architecture Wiring Diagram",
        Point::new(6.0, 13.5),
        14.0,
        Anchor::Middle,
        true,
        false,
    );

    Ok(Diagram {
        boxes,
        connectors,
        title,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wiring_builds() {
        assert!(wiring().is_ok());
    }

    #[test]
    fn wiring_has_the_fixed_element_counts() {
        let diagram = wiring().unwrap();
        assert_eq!(diagram.boxes().len(), 13);
        assert_eq!(diagram.connectors().len(), 13);

        let tier_labels: Vec<_> = diagram
            .boxes()
            .iter()
            .filter_map(TierBox::tier_label)
            .collect();
        assert_eq!(tier_labels, ["Tier 1", "Tier 2", "Tier 3", "Tier 4"]);

        let captions: Vec<_> = diagram
            .connectors()
            .iter()
            .filter_map(Connector::caption)
            .collect();
        assert_eq!(captions.len(), 4);

        // Caption bubbles render in regular weight
        assert!(captions.iter().all(|c| c.bubble() && !c.bold()));
    }

    #[test]
    fn wiring_style_breakdown_matches_the_source() {
        let diagram = wiring().unwrap();
        let dashed = diagram
            .connectors()
            .iter()
            .filter(|c| c.line() == LineStyle::Dashed)
            .count();
        let double = diagram
            .connectors()
            .iter()
            .filter(|c| c.heads() == ArrowHeads::Double)
            .count();
        assert_eq!(dashed, 5);
        assert_eq!(double, 9);

        // Dashed connectors are all double-headed inter-tier links
        assert!(
            diagram
                .connectors()
                .iter()
                .filter(|c| c.line() == LineStyle::Dashed)
                .all(|c| c.heads() == ArrowHeads::Double)
        );
    }

    #[test]
    fn title_is_centered_and_unbubbled() {
        let diagram = wiring().unwrap();
        let title = diagram.title();
        assert_eq!(title.text(), "N-Tier Architecture Wiring Diagram");
        assert_eq!(title.anchor(), Anchor::Middle);
        assert!(title.bold());
        assert!(!title.bubble());
        assert_eq!(title.position(), Point::new(6.0, 13.5));
    }
}
