pub mod coding_style;
pub mod context;
pub mod engine;
pub mod personality;
pub mod predictions;
pub mod recommendations;
pub mod rules;
pub mod sampler;
pub mod scores;
pub mod stats;
pub mod work_patterns;

pub use coding_style::CodingStyleAnalyzer;
pub use context::AnalysisContext;
pub use engine::InsightEngine;
pub use predictions::PredictionEngine;
pub use recommendations::{ActivitySummary, RecommendationGenerator};
pub use sampler::{FixedSampler, PlaceholderSampler, RandomSampler, SeededSampler};
pub use scores::ScoreCalculator;
pub use work_patterns::WorkPatternAnalyzer;
