pub mod types;

pub use types::{
    percent, AnalysisResult, DocumentMetadata, MatchGroup, MatchSpan, Paragraph, Segment,
    SeverityColor, SimilarityScores, TextStatistics,
};
