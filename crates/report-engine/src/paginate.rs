//! Report layout
//!
//! Lays an analysis result out across A4 pages of absolutely
//! positioned draw commands: header band, score boxes, document
//! information grid, then every paragraph re-segmented and rendered
//! with severity-tinted blocks and source captions. Footers are
//! stamped in a second pass once the total page count is known.

use segment_engine::compose;
use shared_types::{
    AnalysisResult, DocumentMetadata, Paragraph, Segment, SeverityColor, SimilarityScores,
    TextStatistics,
};

use crate::layout::{
    palette, severity_fill, DrawCommand, LinkAnnotation, Page, Rgb, TextAlign, CONTENT_WIDTH,
    LINE_HEIGHT, MARGIN, PAGE_HEIGHT, PAGE_WIDTH,
};
use crate::wrap::{text_width_mm, wrap_text};

pub const REPORT_TITLE: &str = "Plagiarism Analysis Report";

const TITLE_SIZE: f64 = 24.0;
const SECTION_SIZE: f64 = 18.0;
const PANEL_TITLE_SIZE: f64 = 16.0;
const SCORE_VALUE_SIZE: f64 = 16.0;
const BODY_SIZE: f64 = 12.0;
const GRID_SIZE: f64 = 11.0;
const FOOTER_SIZE: f64 = 10.0;
const CAPTION_SIZE: f64 = 9.0;

/// Vertical padding wrapped around a matched block's lines.
const BLOCK_PADDING: f64 = 6.0;

/// Lay the whole result out and stamp page footers.
pub fn paginate(result: &AnalysisResult) -> Vec<Page> {
    let mut builder = PageBuilder::new();

    draw_header(&mut builder);
    draw_scores(&mut builder, &result.scores);
    draw_document_info(&mut builder, &result.metadata, &result.statistics);
    draw_content(&mut builder, &result.paragraphs);

    let mut pages = builder.finish();
    stamp_footers(&mut pages);
    pages
}

/// Accumulates pages top-down; `y` is the current vertical cursor on
/// the page under construction.
struct PageBuilder {
    done: Vec<Page>,
    current: Page,
    y: f64,
}

impl PageBuilder {
    fn new() -> Self {
        Self {
            done: Vec::new(),
            current: Page::default(),
            y: MARGIN,
        }
    }

    fn finish(mut self) -> Vec<Page> {
        self.done.push(self.current);
        self.done
    }

    fn break_page(&mut self) {
        self.done.push(std::mem::take(&mut self.current));
        self.y = MARGIN;
    }

    fn fits(&self, height: f64) -> bool {
        self.y + height < PAGE_HEIGHT - MARGIN
    }

    fn break_if_needed(&mut self, height: f64) {
        if !self.fits(height) {
            self.break_page();
        }
    }

    fn remaining_height(&self) -> f64 {
        PAGE_HEIGHT - MARGIN - self.y
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64, fill: Rgb) {
        self.current.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
            fill,
        });
    }

    fn text_left(&mut self, x: f64, y: f64, text: impl Into<String>, size: f64, color: Rgb) {
        self.current.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.into(),
            size,
            color,
            align: TextAlign::Left,
        });
    }

    fn text_center(&mut self, x: f64, y: f64, text: impl Into<String>, size: f64, color: Rgb) {
        self.current.commands.push(DrawCommand::Text {
            x,
            y,
            text: text.into(),
            size,
            color,
            align: TextAlign::Center,
        });
    }

    fn link(&mut self, x: f64, y: f64, width: f64, height: f64, url: impl Into<String>) {
        self.current.links.push(LinkAnnotation {
            x,
            y,
            width,
            height,
            url: url.into(),
        });
    }
}

fn draw_header(builder: &mut PageBuilder) {
    builder.rect(0.0, 0.0, PAGE_WIDTH, 40.0, palette::HEADER_FILL);
    builder.text_center(PAGE_WIDTH / 2.0, 30.0, REPORT_TITLE, TITLE_SIZE, palette::INK);
    builder.y = 50.0;
}

fn draw_scores(builder: &mut PageBuilder, scores: &SimilarityScores) {
    builder.text_left(MARGIN, builder.y, "Analysis Scores", SECTION_SIZE, palette::INK);
    builder.y += 10.0;

    let boxes = [
        ("Overall Score", scores.overall_percent()),
        ("Unique Content", scores.unique_percent()),
        ("Jaccard Score", scores.jaccard_percent()),
        ("Model Score", scores.model_percent()),
    ];
    let box_width = CONTENT_WIDTH / 4.0;
    for (i, (label, value)) in boxes.iter().enumerate() {
        let x = MARGIN + i as f64 * box_width;
        builder.rect(x, builder.y, box_width - 10.0, 40.0, palette::WHITE);
        builder.text_left(x + 5.0, builder.y + 15.0, *label, BODY_SIZE, palette::LABEL);
        builder.text_left(
            x + 5.0,
            builder.y + 30.0,
            format!("{value}%"),
            SCORE_VALUE_SIZE,
            palette::INK,
        );
    }
    builder.y += 50.0;
}

fn draw_document_info(
    builder: &mut PageBuilder,
    metadata: &DocumentMetadata,
    statistics: &TextStatistics,
) {
    builder.break_if_needed(60.0);
    builder.rect(MARGIN, builder.y, CONTENT_WIDTH, 60.0, palette::WHITE);
    builder.text_left(
        MARGIN + 5.0,
        builder.y + 10.0,
        "Document Information",
        PANEL_TITLE_SIZE,
        palette::INK,
    );

    // 8-cell grid alternating metadata and statistics.
    let rows = [
        (
            format!("Title: {}", metadata.title),
            format!("Words: {}", statistics.words),
        ),
        (
            format!("Author: {}", metadata.author),
            format!("Characters: {}", statistics.characters),
        ),
        (
            format!("Subject: {}", metadata.subject),
            format!("Paragraphs: {}", statistics.paragraphs),
        ),
        (
            format!("Keywords: {}", metadata.keywords),
            format!("Syllables: {}", statistics.syllables),
        ),
    ];
    for (i, (left, right)) in rows.into_iter().enumerate() {
        let row_y = builder.y + 20.0 + i as f64 * 10.0;
        builder.text_left(MARGIN + 5.0, row_y, left, GRID_SIZE, palette::LABEL);
        builder.text_left(
            MARGIN + CONTENT_WIDTH / 2.0,
            row_y,
            right,
            GRID_SIZE,
            palette::LABEL,
        );
    }
    builder.y += 70.0;
}

fn draw_content(builder: &mut PageBuilder, paragraphs: &[Paragraph]) {
    builder.break_if_needed(10.0);
    builder.text_left(MARGIN, builder.y, "Content Analysis", SECTION_SIZE, palette::INK);
    builder.y += 15.0;

    for paragraph in paragraphs {
        builder.break_if_needed(10.0);
        builder.y += 10.0;

        for segment in compose(&paragraph.content, &paragraph.match_groups) {
            match segment {
                Segment::Plain { text } => draw_plain_lines(builder, &text),
                Segment::Matched {
                    text,
                    severity,
                    source_url,
                } => draw_matched_block(builder, &text, severity, &source_url),
            }
        }

        // Space between paragraphs.
        builder.y += 10.0;
    }
}

fn draw_plain_lines(builder: &mut PageBuilder, text: &str) {
    for line in wrap_text(text, CONTENT_WIDTH - 10.0, BODY_SIZE) {
        builder.break_if_needed(LINE_HEIGHT);
        builder.text_left(MARGIN, builder.y, line, BODY_SIZE, palette::INK);
        builder.y += LINE_HEIGHT;
    }
}

/// Draw one matched segment: tinted background, wrapped text on top,
/// then the source caption. A block that does not fit on the current
/// page is split at the boundary, with the background sized per chunk
/// so it never bleeds across a break.
fn draw_matched_block(builder: &mut PageBuilder, text: &str, severity: SeverityColor, url: &str) {
    let lines = wrap_text(text, CONTENT_WIDTH - 10.0, BODY_SIZE);
    let fill = severity_fill(severity);

    let mut remaining = lines.as_slice();
    while !remaining.is_empty() {
        if !builder.fits(LINE_HEIGHT + BLOCK_PADDING) {
            builder.break_page();
        }
        let available = builder.remaining_height() - BLOCK_PADDING;
        let fit = ((available / LINE_HEIGHT) as usize).clamp(1, remaining.len());

        let block_height = fit as f64 * LINE_HEIGHT + BLOCK_PADDING;
        builder.rect(
            MARGIN - 2.0,
            builder.y - 2.0,
            CONTENT_WIDTH + 4.0,
            block_height,
            fill,
        );
        for line in &remaining[..fit] {
            builder.text_left(MARGIN, builder.y, line.clone(), BODY_SIZE, palette::INK);
            builder.y += LINE_HEIGHT;
        }

        remaining = &remaining[fit..];
        if !remaining.is_empty() {
            builder.break_page();
        }
    }

    builder.break_if_needed(LINE_HEIGHT);
    let caption = format!("Source: {url}");
    let caption_width = text_width_mm(&caption, CAPTION_SIZE);
    builder.link(MARGIN, builder.y - 2.0, caption_width, 6.0, url);
    builder.text_left(MARGIN, builder.y + 2.0, caption, CAPTION_SIZE, palette::LINK);
    builder.y += 12.0;
}

fn stamp_footers(pages: &mut [Page]) {
    let total = pages.len();
    for (i, page) in pages.iter_mut().enumerate() {
        page.commands.push(DrawCommand::Text {
            x: PAGE_WIDTH / 2.0,
            y: PAGE_HEIGHT - 10.0,
            text: format!("Page {} of {}", i + 1, total),
            size: FOOTER_SIZE,
            color: palette::FOOTER,
            align: TextAlign::Center,
        });
    }
}
