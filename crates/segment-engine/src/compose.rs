//! Segment composition
//!
//! Converts one paragraph plus the matched-span records attributed to
//! it into an ordered, non-overlapping sequence of typed text runs.

use std::collections::HashMap;

use shared_types::{MatchGroup, Segment, SeverityColor};

/// A span resolved to a concrete byte range of the paragraph.
struct Candidate<'a> {
    start: usize,
    quoted: &'a str,
    severity: SeverityColor,
    source_url: &'a str,
}

/// Compose the segment sequence for one paragraph.
///
/// Every span is located with a plain substring search. Repeated
/// identical quoted strings resolve to successive occurrences: each
/// search for a given string starts at the end of that string's
/// previously resolved occurrence. Spans that are not found verbatim
/// are dropped without touching the output, so the concatenation of
/// the returned segment texts always reconstructs `content` exactly.
///
/// Candidates are then walked in start-offset order with a single
/// cursor; a candidate that starts inside an already-emitted match is
/// skipped, which keeps the segments non-overlapping and strictly
/// increasing.
pub fn compose(content: &str, match_groups: &[MatchGroup]) -> Vec<Segment> {
    let mut next_search: HashMap<&str, usize> = HashMap::new();
    let mut candidates: Vec<Candidate> = Vec::new();

    for group in match_groups {
        // A match without a source cannot be attributed; skip the group.
        let Some(source_url) = group.source_url.as_deref() else {
            continue;
        };
        for span in &group.spans {
            let quoted = span.quoted_text.as_str();
            if quoted.is_empty() {
                continue;
            }
            let from = next_search.get(quoted).copied().unwrap_or(0);
            let Some(offset) = content.get(from..).and_then(|rest| rest.find(quoted)) else {
                // Not present verbatim: the span is dropped and the
                // output is unaffected.
                continue;
            };
            let start = from + offset;
            next_search.insert(quoted, start + quoted.len());
            candidates.push(Candidate {
                start,
                quoted,
                severity: span.severity,
                source_url,
            });
        }
    }

    // Stable, so discovery order still breaks ties at equal offsets.
    candidates.sort_by_key(|candidate| candidate.start);

    let mut segments = Vec::new();
    let mut cursor = 0;
    for candidate in candidates {
        if candidate.start < cursor {
            continue;
        }
        if candidate.start > cursor {
            segments.push(Segment::Plain {
                text: content[cursor..candidate.start].to_string(),
            });
        }
        segments.push(Segment::Matched {
            text: candidate.quoted.to_string(),
            severity: candidate.severity,
            source_url: candidate.source_url.to_string(),
        });
        cursor = candidate.start + candidate.quoted.len();
    }

    if cursor < content.len() || segments.is_empty() {
        segments.push(Segment::Plain {
            text: content[cursor..].to_string(),
        });
    }

    segments
}
