use chrono::{DateTime, Duration, FixedOffset, Utc};

use crate::analysis::sampler::PlaceholderSampler;
use crate::analysis::stats::round_to;

/// Per-run state shared by every analyzer: the reference instant, the offset used for
/// hour and calendar-day bucketing, and the placeholder sampler.
pub struct AnalysisContext<'a> {
    pub now: DateTime<Utc>,
    pub utc_offset: FixedOffset,
    sampler: &'a dyn PlaceholderSampler,
}

impl<'a> AnalysisContext<'a> {
    pub fn new(
        now: DateTime<Utc>,
        utc_offset: FixedOffset,
        sampler: &'a dyn PlaceholderSampler,
    ) -> Self {
        Self {
            now,
            utc_offset,
            sampler,
        }
    }

    pub fn local(&self, timestamp: DateTime<Utc>) -> DateTime<FixedOffset> {
        timestamp.with_timezone(&self.utc_offset)
    }

    pub fn days_ago(&self, days: i64) -> DateTime<Utc> {
        self.now - Duration::days(days)
    }

    /// Placeholder score for an "insufficient data" branch, rounded like real scores.
    pub fn placeholder(&self, (low, high): (f64, f64)) -> f64 {
        let sample = self.sampler.sample(low, high);
        if !sample.is_finite() {
            return round_to((low + high) / 2.0, 1);
        }
        round_to(sample, 1).clamp(low, high)
    }
}
