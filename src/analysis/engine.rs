//! Orchestrates the analyzers into a single [`Insights`] record.

use std::cmp::Reverse;

use chrono::{DateTime, FixedOffset, Utc};

use crate::analysis::coding_style::CodingStyleAnalyzer;
use crate::analysis::context::AnalysisContext;
use crate::analysis::personality::build_profile;
use crate::analysis::predictions::PredictionEngine;
use crate::analysis::recommendations::{ActivitySummary, RecommendationGenerator};
use crate::analysis::sampler::{PlaceholderSampler, RandomSampler, SeededSampler};
use crate::analysis::scores::ScoreCalculator;
use crate::analysis::work_patterns::WorkPatternAnalyzer;
use crate::config::EngineConfig;
use crate::models::{Event, Insights, UserData};

pub struct InsightEngine {
    utc_offset: FixedOffset,
    sampler: Box<dyn PlaceholderSampler>,
    scores: ScoreCalculator,
    work_patterns: WorkPatternAnalyzer,
    coding_style: CodingStyleAnalyzer,
    recommendations: RecommendationGenerator,
    predictions: PredictionEngine,
}

impl InsightEngine {
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// A configured seed makes placeholder scores reproducible across runs.
    pub fn with_config(config: EngineConfig) -> Self {
        let sampler: Box<dyn PlaceholderSampler> = match config.seed {
            Some(seed) => Box::new(SeededSampler::new(seed)),
            None => Box::new(RandomSampler),
        };
        Self::build(config.utc_offset, sampler)
    }

    pub fn with_sampler(config: EngineConfig, sampler: impl PlaceholderSampler + 'static) -> Self {
        Self::build(config.utc_offset, Box::new(sampler))
    }

    fn build(utc_offset: FixedOffset, sampler: Box<dyn PlaceholderSampler>) -> Self {
        Self {
            utc_offset,
            sampler,
            scores: ScoreCalculator::new(),
            work_patterns: WorkPatternAnalyzer::new(),
            coding_style: CodingStyleAnalyzer::new(),
            recommendations: RecommendationGenerator::new(),
            predictions: PredictionEngine::new(),
        }
    }

    pub fn generate_insights(&self, data: &UserData) -> Insights {
        self.generate_insights_at(data, Utc::now())
    }

    /// Same as [`generate_insights`](Self::generate_insights) with an explicit reference
    /// time for every "last N days" window.
    pub fn generate_insights_at(&self, data: &UserData, now: DateTime<Utc>) -> Insights {
        tracing::info!(
            "Generating insights for {} ({} repositories, {} events)",
            data.login(),
            data.repositories.len(),
            data.events.len()
        );

        let ctx = AnalysisContext::new(now, self.utc_offset, self.sampler.as_ref());
        let profile = &data.profile;
        let repos = &data.repositories;
        let events = newest_first(&data.events);

        let scores = self.scores.calculate_all(&ctx, profile, repos, &events);
        let personality = build_profile(scores);
        tracing::debug!("Personality type: {}", personality.personality_type);

        let work_patterns = self.work_patterns.analyze(&ctx, &events);

        let coding_style = self.coding_style.analyze(repos, &events);
        tracing::debug!(
            "Coding style: {} languages, {}, {}",
            coding_style.languages.len(),
            coding_style.commit_style,
            coding_style.testing_approach
        );

        let summary = ActivitySummary::collect(&ctx, profile, repos, &events);
        let recommendations = self.recommendations.generate(&summary);

        let predictions = self.predictions.predict(&ctx, profile, repos, &events);
        tracing::debug!(
            "Predicted {} next, activity {}",
            predictions.next_technology.primary,
            predictions.activity_trend
        );

        Insights {
            personality,
            work_patterns,
            coding_style,
            recommendations,
            predictions,
            generated_at: now,
        }
    }
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Stable newest-first ordering; events without a timestamp go last.
fn newest_first(events: &[Event]) -> Vec<Event> {
    let mut ordered = events.to_vec();
    ordered.sort_by_key(|e| (e.created_at.is_none(), Reverse(e.created_at)));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sampler::FixedSampler;
    use crate::models::{
        BurnoutRisk, EventType, Profile, Repository, SkillTrend, WorkingStyle,
    };
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    fn rich_data() -> UserData {
        let profile = Profile {
            login: "octo".to_string(),
            followers: 42,
            following: 10,
            ..Default::default()
        };
        let repositories = ["Rust", "TypeScript", "Python", "Go"]
            .iter()
            .enumerate()
            .map(|(i, language)| Repository {
                name: format!("project-{}", i),
                language: Some(language.to_string()),
                stargazers_count: 10 * i as u32,
                created_at: Some(now() - Duration::days(100 + 200 * i as i64)),
                updated_at: Some(now() - Duration::days(5)),
                ..Default::default()
            })
            .collect();
        let events = (0..30)
            .map(|i| {
                let kind = if i % 4 == 0 {
                    EventType::PullRequest
                } else {
                    EventType::Push
                };
                let repo = if i % 4 == 0 { "rust-lang/rust" } else { "octo/project-0" };
                Event::new(kind, repo, now() - Duration::days(i) - Duration::hours(i % 5))
            })
            .collect();
        UserData::new(profile, repositories, events)
    }

    #[test]
    fn test_empty_input_produces_complete_record() {
        let engine = InsightEngine::with_sampler(EngineConfig::default(), FixedSampler::midpoint());
        let insights = engine.generate_insights_at(&UserData::default(), now());

        let scores = insights.personality.scores;
        for (_, score) in scores.iter() {
            assert!((1.0..=10.0).contains(&score));
        }
        assert!(!insights.personality.description.is_empty());
        assert!(!insights.personality.strengths.is_empty());
        assert!(!insights.personality.growth_areas.is_empty());
        assert_eq!(insights.work_patterns.hourly_activity.len(), 24);
        assert_eq!(insights.work_patterns.weekly_activity.len(), 7);
        assert!(insights.work_patterns.peak_hours.is_empty());
        assert_eq!(insights.work_patterns.working_style, WorkingStyle::GettingStarted);
        assert_eq!(insights.work_patterns.burnout.level, BurnoutRisk::Low);
        assert_eq!(insights.coding_style.project_types, vec!["General Development"]);
        assert!(!insights.recommendations.is_empty());
        assert_eq!(insights.predictions.next_technology.primary, "JavaScript");
        assert_eq!(insights.predictions.skill_development.trend, SkillTrend::Emerging);
        assert_eq!(insights.generated_at, now());
    }

    #[test]
    fn test_rich_input_is_deterministic() {
        let engine = InsightEngine::new();
        let data = rich_data();

        let first = engine.generate_insights_at(&data, now());
        let second = engine.generate_insights_at(&data, now());

        assert_eq!(first.personality.scores, second.personality.scores);
        assert_eq!(first.recommendations, second.recommendations);
        assert_eq!(
            first.predictions.next_technology,
            second.predictions.next_technology
        );
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn test_seeded_engines_agree_on_placeholders() {
        let config = EngineConfig {
            seed: Some(7),
            ..Default::default()
        };
        let a = InsightEngine::with_config(config.clone()).generate_insights_at(&UserData::default(), now());
        let b = InsightEngine::with_config(config).generate_insights_at(&UserData::default(), now());
        assert_eq!(a.personality.scores, b.personality.scores);
    }

    #[test]
    fn test_event_order_does_not_matter() {
        let engine = InsightEngine::new();
        let data = rich_data();
        let mut reversed = data.clone();
        reversed.events.reverse();

        let a = engine.generate_insights_at(&data, now());
        let b = engine.generate_insights_at(&reversed, now());
        assert_eq!(a.predictions.activity_trend, b.predictions.activity_trend);
        assert_eq!(a.personality.scores, b.personality.scores);
    }

    #[test]
    fn test_login_does_not_change_insights() {
        let engine = InsightEngine::with_sampler(EngineConfig::default(), FixedSampler::midpoint());
        let data = rich_data();
        let mut anonymous = data.clone();
        anonymous.profile.login.clear();

        let a = engine.generate_insights_at(&data, now());
        let b = engine.generate_insights_at(&anonymous, now());
        assert_eq!(
            serde_json::to_value(&a).unwrap(),
            serde_json::to_value(&b).unwrap()
        );
    }

    #[test]
    fn test_rich_input_classification() {
        let engine = InsightEngine::new();
        let insights = engine.generate_insights_at(&rich_data(), now());
        assert_ne!(insights.work_patterns.working_style, WorkingStyle::GettingStarted);
        assert_eq!(insights.coding_style.languages.len(), 4);
        assert_eq!(insights.personality.scores.consistency, 10.0);
        assert!(insights.recommendations.len() <= 8);
    }

    #[test]
    fn test_newest_first_ordering() {
        let old = Event::new(EventType::Push, "a/b", now() - Duration::days(3));
        let new = Event::new(EventType::Push, "a/b", now());
        let undated = Event::default();
        let ordered = newest_first(&[undated, old, new]);
        assert_eq!(ordered[0].created_at, Some(now()));
        assert_eq!(ordered[1].created_at, Some(now() - Duration::days(3)));
        assert!(ordered[2].created_at.is_none());
    }
}
