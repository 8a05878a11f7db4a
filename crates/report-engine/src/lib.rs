//! Report engine
//!
//! Turns an analysis result into a downloadable PDF report in two
//! stages: [`paginate`] lays everything out into pages of absolutely
//! positioned draw commands (pure, directly testable), and
//! [`pdf::render_pdf`] serializes those pages with `lopdf`.

pub mod error;
pub mod layout;
pub mod paginate;
pub mod pdf;
pub mod wrap;

pub use error::ReportError;
pub use layout::{DrawCommand, LinkAnnotation, Page};
pub use paginate::{paginate, REPORT_TITLE};

use shared_types::AnalysisResult;

/// Default artifact name for the exported report.
pub const REPORT_FILE_NAME: &str = "plagiarism-report.pdf";

/// Lay out and serialize in one step: the in-memory PDF bytes handed
/// to the file-save boundary.
pub fn render_report(result: &AnalysisResult) -> Result<Vec<u8>, ReportError> {
    let pages = paginate(result);
    pdf::render_pdf(&pages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::{
        DocumentMetadata, MatchGroup, MatchSpan, Paragraph, SeverityColor, SimilarityScores,
        TextStatistics,
    };

    #[test]
    fn end_to_end_report_is_a_valid_pdf() {
        let result = AnalysisResult {
            metadata: DocumentMetadata {
                title: "Thesis".to_string(),
                author: "A. Student".to_string(),
                subject: String::new(),
                keywords: String::new(),
            },
            statistics: TextStatistics {
                words: 22,
                characters: 120,
                paragraphs: 1,
                syllables: 30,
            },
            paragraphs: vec![Paragraph {
                index: 0,
                content: "The cat sat on the mat".to_string(),
                match_groups: vec![MatchGroup {
                    source_url: Some("http://example.com".to_string()),
                    spans: vec![MatchSpan {
                        quoted_text: "cat sat".to_string(),
                        severity: SeverityColor::Red,
                    }],
                }],
            }],
            total_sources_found: 1,
            scores: SimilarityScores {
                overall: 0.42,
                unique: 0.58,
                jaccard: 0.1,
                model: 0.5,
            },
        };

        let bytes = render_report(&result).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));

        let doc = lopdf::Document::load_mem(&bytes).unwrap();
        assert_eq!(doc.get_pages().len(), paginate(&result).len());
    }
}
