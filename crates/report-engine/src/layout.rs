//! Page geometry and the draw-command model.
//!
//! Layout works in A4 millimeters with a top-down y axis; the PDF
//! writer converts to bottom-up points at serialization time. A page
//! is nothing but absolutely positioned commands plus link
//! annotations, so layout stays pure and directly assertable.

use shared_types::SeverityColor;

/// A4 page size in millimeters.
pub const PAGE_WIDTH: f64 = 210.0;
pub const PAGE_HEIGHT: f64 = 297.0;
/// Outer margin on all four sides.
pub const MARGIN: f64 = 20.0;
/// Usable width between the margins.
pub const CONTENT_WIDTH: f64 = PAGE_WIDTH - 2.0 * MARGIN;
/// Vertical advance of one wrapped body line.
pub const LINE_HEIGHT: f64 = 7.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Report palette, matching the interactive view it reproduces.
pub mod palette {
    use super::Rgb;

    pub const HEADER_FILL: Rgb = Rgb::new(249, 250, 251);
    pub const INK: Rgb = Rgb::new(31, 41, 55);
    pub const LABEL: Rgb = Rgb::new(107, 114, 128);
    pub const LINK: Rgb = Rgb::new(59, 130, 246);
    pub const FOOTER: Rgb = Rgb::new(156, 163, 175);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    pub const MATCH_RED: Rgb = Rgb::new(254, 226, 226);
    pub const MATCH_ORANGE: Rgb = Rgb::new(255, 237, 213);
    pub const MATCH_YELLOW: Rgb = Rgb::new(254, 249, 195);
}

/// Background tint for a matched block.
pub fn severity_fill(severity: SeverityColor) -> Rgb {
    match severity {
        SeverityColor::Red => palette::MATCH_RED,
        SeverityColor::Orange => palette::MATCH_ORANGE,
        SeverityColor::Yellow => palette::MATCH_YELLOW,
        _ => palette::WHITE,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Filled rectangle; `x`/`y` is the top-left corner.
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: Rgb,
    },
    /// One line of text; `y` is the baseline. Centered text is
    /// centered on `x`.
    Text {
        x: f64,
        y: f64,
        text: String,
        size: f64,
        color: Rgb,
        align: TextAlign,
    },
}

/// A clickable region linking to an external URL, serialized as a PDF
/// link annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct LinkAnnotation {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Page {
    pub commands: Vec<DrawCommand>,
    pub links: Vec<LinkAnnotation>,
}
