//! Terminal rendering of analysis results.
//!
//! The interactive counterpart of the exported report: score summary,
//! document information, then every paragraph with its matched runs
//! highlighted and each source linked inline, in composer order.

use std::fmt::Write;

use anyhow::Result;

use segment_engine::{compose, inline_runs, HighlightStyle, InlineRun};
use shared_types::AnalysisResult;

const RULE: &str = "────────────────────────────────────────────────────────────";

/// ANSI styling for highlighted runs; disabled wholesale by
/// `--no-color`.
#[derive(Debug, Clone, Copy)]
pub struct Styling {
    enabled: bool,
}

impl Styling {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if self.enabled {
            format!("\x1b[{code}m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn highlight(&self, text: &str, style: HighlightStyle) -> String {
        let code = match style {
            HighlightStyle::Strong => "30;41",
            HighlightStyle::Medium => "30;43",
            HighlightStyle::Neutral => "30;42",
        };
        self.paint(text, code)
    }

    fn link(&self, url: &str) -> String {
        self.paint(&format!("[{url}]"), "34;4")
    }
}

/// Format the whole results view for the terminal.
pub fn format_results(result: &AnalysisResult, styling: Styling) -> Result<String> {
    let mut output = String::new();

    writeln!(output)?;
    writeln!(output, "PDF Document Analyzer")?;
    writeln!(output, "{RULE}")?;
    writeln!(output)?;

    writeln!(output, "Document Information")?;
    writeln!(output, "  Title:      {}", result.metadata.title)?;
    writeln!(output, "  Author:     {}", result.metadata.author)?;
    writeln!(output, "  Subject:    {}", result.metadata.subject)?;
    writeln!(output, "  Keywords:   {}", result.metadata.keywords)?;
    writeln!(output, "  Words:      {}", result.statistics.words)?;
    writeln!(output, "  Characters: {}", result.statistics.characters)?;
    writeln!(output, "  Paragraphs: {}", result.statistics.paragraphs)?;
    writeln!(output, "  Syllables:  {}", result.statistics.syllables)?;
    writeln!(output)?;

    let overall = result.scores.overall_percent();
    if overall == 0 {
        writeln!(output, "No plagiarism detected. The content is original!")?;
    } else {
        writeln!(output, "Similarity Analysis")?;
        writeln!(output, "  Overall Similarity Score: {overall}%")?;
        writeln!(
            output,
            "  Unique Content Score:     {}%",
            result.scores.unique_percent()
        )?;
        writeln!(
            output,
            "  Jaccard Score:            {}%",
            result.scores.jaccard_percent()
        )?;
        writeln!(
            output,
            "  Our Model Score:          {}%",
            result.scores.model_percent()
        )?;
        writeln!(
            output,
            "  Total Sources Found:      {}",
            result.total_sources_found
        )?;
    }
    writeln!(output)?;

    writeln!(output, "Analysis Results")?;
    writeln!(output, "{RULE}")?;
    for paragraph in &result.paragraphs {
        let segments = compose(&paragraph.content, &paragraph.match_groups);
        for run in inline_runs(&segments) {
            match run {
                InlineRun::Text(text) => output.push_str(&text),
                InlineRun::Highlight {
                    text,
                    style,
                    source_url,
                } => {
                    output.push_str(&styling.highlight(&text, style));
                    output.push(' ');
                    output.push_str(&styling.link(&source_url));
                }
            }
        }
        writeln!(output)?;
        writeln!(output)?;
    }

    Ok(output)
}
