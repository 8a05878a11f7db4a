use serde::{Deserialize, Serialize};

/// Root of the analysis service response. Created once per upload and
/// held read-only for the lifetime of the results view.
///
/// Field names on the wire follow the service's JSON (including its
/// historical spellings); the Rust names are the cleaned-up versions.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisResult {
    #[serde(default)]
    pub metadata: DocumentMetadata,
    #[serde(default)]
    pub statistics: TextStatistics,
    #[serde(rename = "plagiarism_results", default)]
    pub paragraphs: Vec<Paragraph>,
    #[serde(default)]
    pub total_sources_found: u32,
    #[serde(rename = "overal", default)]
    pub scores: SimilarityScores,
}

/// Free-form document metadata; missing fields decode to empty strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentMetadata {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub keywords: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TextStatistics {
    #[serde(default)]
    pub words: u64,
    #[serde(default)]
    pub characters: u64,
    #[serde(default)]
    pub paragraphs: u64,
    #[serde(default)]
    pub syllables: u64,
}

/// Aggregate similarity scores, each in [0, 1].
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimilarityScores {
    #[serde(rename = "overal_score_pdf", default)]
    pub overall: f64,
    #[serde(rename = "overal_unique_score_pdf", default)]
    pub unique: f64,
    #[serde(rename = "jaccard_score", default)]
    pub jaccard: f64,
    #[serde(rename = "model_score", default)]
    pub model: f64,
}

impl SimilarityScores {
    pub fn overall_percent(&self) -> u32 {
        percent(self.overall)
    }

    pub fn unique_percent(&self) -> u32 {
        percent(self.unique)
    }

    pub fn jaccard_percent(&self) -> u32 {
        percent(self.jaccard)
    }

    pub fn model_percent(&self) -> u32 {
        percent(self.model)
    }
}

/// Round a [0, 1] score to a whole display percentage.
///
/// Out-of-range and non-finite inputs clamp to 0..=100 instead of
/// panicking.
pub fn percent(score: f64) -> u32 {
    let scaled = (score * 100.0).round();
    if scaled.is_nan() {
        return 0;
    }
    scaled.clamp(0.0, 100.0) as u32
}

/// One paragraph of the analyzed document, with the match groups the
/// service attributed to it (in source-discovery order).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    #[serde(rename = "paragraph_index", default)]
    pub index: u32,
    #[serde(rename = "paragraph_content", default)]
    pub content: String,
    #[serde(rename = "results", default)]
    pub match_groups: Vec<MatchGroup>,
}

/// All spans within one paragraph attributed to the same source URL.
///
/// The service emits a group with a null `url` when a search probe
/// found no source; such a group carries no usable spans.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchGroup {
    #[serde(rename = "url", default)]
    pub source_url: Option<String>,
    #[serde(rename = "plagiarized_sections_in_both", default)]
    pub spans: Vec<MatchSpan>,
}

/// A substring of the paragraph flagged as similar to external content.
/// `quoted_text` must appear verbatim in the paragraph to be honored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchSpan {
    #[serde(rename = "Paragraphe_pdf_Content", default)]
    pub quoted_text: String,
    #[serde(rename = "color", default)]
    pub severity: SeverityColor,
}

/// Three-level categorical match strength. Unrecognized wire values
/// decode to [`SeverityColor::Green`], the neutral no-match fallback,
/// rather than failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityColor {
    Red,
    Orange,
    Yellow,
    #[serde(other)]
    Green,
}

impl Default for SeverityColor {
    fn default() -> Self {
        SeverityColor::Green
    }
}

/// A contiguous, typed run of paragraph text produced by the segment
/// composer. Ephemeral: recomputed on every render pass, never cached.
#[derive(Debug, Clone, PartialEq)]
pub enum Segment {
    Plain {
        text: String,
    },
    Matched {
        text: String,
        severity: SeverityColor,
        source_url: String,
    },
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Plain { text } | Segment::Matched { text, .. } => text,
        }
    }

    pub fn is_matched(&self) -> bool {
        matches!(self, Segment::Matched { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    // A response as the service actually serializes it, including the
    // misspelled historical field names.
    const SAMPLE: &str = r#"{
        "metadata": {
            "title": "Thesis",
            "author": "A. Student",
            "subject": "None",
            "keywords": "None"
        },
        "statistics": { "words": 120, "characters": 640, "paragraphs": 2, "syllables": 180 },
        "plagiarism_results": [
            {
                "paragraph_index": 0,
                "paragraph_content": "The cat sat on the mat",
                "results": [
                    {
                        "url": "http://example.com",
                        "snippet_content": "a cat sat",
                        "jaccard_score": 0.4,
                        "plagiarized_sections_in_both": [
                            {
                                "Paragraphe_pdf_Content": "cat sat",
                                "section_snippet_search": "a cat sat",
                                "similarity": 0.91,
                                "color": "red"
                            }
                        ]
                    },
                    { "url": null, "plagiarized_sections_in_both": [] }
                ]
            },
            { "paragraph_index": 1, "paragraph_content": "Entirely original text.", "results": [] }
        ],
        "total_sources_found": 1,
        "overal": {
            "overal_score_pdf": 0.734,
            "overal_unique_score_pdf": 0.266,
            "jaccard_score": 0.12,
            "model_score": 0.887
        }
    }"#;

    #[test]
    fn decodes_full_service_response() {
        let result: AnalysisResult = serde_json::from_str(SAMPLE).unwrap();

        assert_eq!(result.metadata.title, "Thesis");
        assert_eq!(result.statistics.words, 120);
        assert_eq!(result.total_sources_found, 1);
        assert_eq!(result.paragraphs.len(), 2);

        let first = &result.paragraphs[0];
        assert_eq!(first.content, "The cat sat on the mat");
        assert_eq!(first.match_groups.len(), 2);
        assert_eq!(
            first.match_groups[0].source_url.as_deref(),
            Some("http://example.com")
        );
        assert_eq!(first.match_groups[0].spans[0].quoted_text, "cat sat");
        assert_eq!(first.match_groups[0].spans[0].severity, SeverityColor::Red);
        assert_eq!(first.match_groups[1].source_url, None);
    }

    #[test]
    fn missing_metadata_decodes_to_empty_strings() {
        let result: AnalysisResult =
            serde_json::from_str(r#"{ "plagiarism_results": [] }"#).unwrap();
        assert_eq!(result.metadata.title, "");
        assert_eq!(result.metadata.author, "");
        assert_eq!(result.scores.overall, 0.0);
        assert_eq!(result.total_sources_found, 0);
    }

    #[test]
    fn unknown_color_falls_back_to_green() {
        let span: MatchSpan = serde_json::from_str(
            r#"{ "Paragraphe_pdf_Content": "abc", "color": "magenta" }"#,
        )
        .unwrap();
        assert_eq!(span.severity, SeverityColor::Green);
    }

    #[test]
    fn percent_rounds_half_up() {
        assert_eq!(percent(0.734), 73);
        assert_eq!(percent(1.0), 100);
        assert_eq!(percent(0.0), 0);
        assert_eq!(percent(0.005), 1);
    }

    #[test]
    fn percent_clamps_degenerate_scores() {
        assert_eq!(percent(-0.2), 0);
        assert_eq!(percent(1.7), 100);
        assert_eq!(percent(f64::NAN), 0);
    }

    #[test]
    fn score_accessors_round_for_display() {
        let result: AnalysisResult = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(result.scores.overall_percent(), 73);
        assert_eq!(result.scores.unique_percent(), 27);
        assert_eq!(result.scores.jaccard_percent(), 12);
        assert_eq!(result.scores.model_percent(), 89);
    }
}
