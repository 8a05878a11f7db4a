//! Inline-run mapping for interactive rendering.
//!
//! Renderers consume [`InlineRun`]s in composer output order; there is
//! no re-sorting here.

use shared_types::{Segment, SeverityColor};

/// Visual weight of a highlighted run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightStyle {
    Strong,
    Medium,
    Neutral,
}

impl HighlightStyle {
    /// Red gets the strong highlight, yellow the medium one; every
    /// other severity (including values the service may add later)
    /// falls back to the neutral highlight.
    pub fn for_severity(severity: SeverityColor) -> Self {
        match severity {
            SeverityColor::Red => HighlightStyle::Strong,
            SeverityColor::Yellow => HighlightStyle::Medium,
            _ => HighlightStyle::Neutral,
        }
    }
}

/// A styled run of text ready for an inline renderer. Highlighted runs
/// carry the source URL so the renderer can attach an inline link.
#[derive(Debug, Clone, PartialEq)]
pub enum InlineRun {
    Text(String),
    Highlight {
        text: String,
        style: HighlightStyle,
        source_url: String,
    },
}

pub fn inline_runs(segments: &[Segment]) -> Vec<InlineRun> {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Plain { text } => InlineRun::Text(text.clone()),
            Segment::Matched {
                text,
                severity,
                source_url,
            } => InlineRun::Highlight {
                text: text.clone(),
                style: HighlightStyle::for_severity(*severity),
                source_url: source_url.clone(),
            },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_maps_to_style() {
        assert_eq!(
            HighlightStyle::for_severity(SeverityColor::Red),
            HighlightStyle::Strong
        );
        assert_eq!(
            HighlightStyle::for_severity(SeverityColor::Yellow),
            HighlightStyle::Medium
        );
        assert_eq!(
            HighlightStyle::for_severity(SeverityColor::Orange),
            HighlightStyle::Neutral
        );
        assert_eq!(
            HighlightStyle::for_severity(SeverityColor::Green),
            HighlightStyle::Neutral
        );
    }

    #[test]
    fn runs_preserve_segment_order_and_urls() {
        let segments = vec![
            Segment::Plain {
                text: "The ".to_string(),
            },
            Segment::Matched {
                text: "cat sat".to_string(),
                severity: SeverityColor::Red,
                source_url: "http://example.com".to_string(),
            },
            Segment::Plain {
                text: " on the mat".to_string(),
            },
        ];
        let runs = inline_runs(&segments);
        assert_eq!(
            runs,
            vec![
                InlineRun::Text("The ".to_string()),
                InlineRun::Highlight {
                    text: "cat sat".to_string(),
                    style: HighlightStyle::Strong,
                    source_url: "http://example.com".to_string(),
                },
                InlineRun::Text(" on the mat".to_string()),
            ]
        );
    }
}
