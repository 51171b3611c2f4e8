//! Range invariants that must hold for any profile, repository and event mix.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;

use gitinsights::analysis::{FixedSampler, SeededSampler};
use gitinsights::models::{Event, EventType, Profile, PushCommit, Repository};
use gitinsights::{EngineConfig, InsightEngine, UserData};

const LANGUAGES: &[&str] = &[
    "Rust", "Go", "JavaScript", "TypeScript", "Python", "Java", "Kotlin", "C", "Haskell",
    "Dockerfile", "Brainfuck",
];

const EVENT_TYPES: &[EventType] = &[
    EventType::Push,
    EventType::PullRequest,
    EventType::PullRequestReview,
    EventType::IssueComment,
    EventType::Issues,
    EventType::Create,
    EventType::Watch,
    EventType::Fork,
    EventType::Other,
];

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
}

fn repository() -> impl Strategy<Value = Repository> {
    (
        prop::option::of(prop::sample::select(LANGUAGES)),
        0u32..200_000,
        0u32..20_000,
        any::<bool>(),
        prop::option::of(0i64..4000),
    )
        .prop_map(|(language, stars, forks, fork, age_days)| Repository {
            name: format!("repo-{}", stars % 97),
            language: language.map(String::from),
            stargazers_count: stars,
            forks_count: forks,
            fork,
            created_at: age_days.map(|d| now() - Duration::days(d)),
            updated_at: age_days.map(|d| now() - Duration::days(d / 2)),
            ..Default::default()
        })
}

fn event() -> impl Strategy<Value = Event> {
    (
        prop::sample::select(EVENT_TYPES),
        prop::sample::select(&["me/app", "me/lib", "rust-lang/rust", "org/tool", ""][..]),
        prop::option::of(0i64..20_000),
        0usize..8,
        prop::option::of(any::<u32>()),
    )
        .prop_map(|(kind, repo, age_hours, commits, size)| {
            let mut event = Event::new(kind, repo, now());
            event.created_at = age_hours.map(|h| now() - Duration::hours(h));
            event.payload.commits = (0..commits)
                .map(|i| PushCommit {
                    message: if i % 3 == 0 { "add tests".into() } else { "fix".into() },
                    ..Default::default()
                })
                .collect();
            event.payload.size = size;
            event
        })
}

fn user_data() -> impl Strategy<Value = UserData> {
    (
        0u32..1_000_000,
        0u32..10_000,
        prop::collection::vec(repository(), 0..25),
        prop::collection::vec(event(), 0..120),
    )
        .prop_map(|(followers, following, repositories, events)| {
            let profile = Profile {
                login: "me".to_string(),
                followers,
                following,
                ..Default::default()
            };
            UserData::new(profile, repositories, events)
        })
}

proptest! {
    #[test]
    fn prop_scores_stay_in_range(data in user_data(), seed in any::<u64>()) {
        let engine = InsightEngine::with_sampler(EngineConfig::default(), SeededSampler::new(seed));
        let insights = engine.generate_insights_at(&data, now());

        for (name, score) in insights.personality.scores.iter() {
            prop_assert!((1.0..=10.0).contains(&score), "{} out of range: {}", name, score);
        }
    }

    #[test]
    fn prop_confidences_and_recommendation_cap(data in user_data()) {
        let engine = InsightEngine::with_sampler(EngineConfig::default(), FixedSampler::midpoint());
        let insights = engine.generate_insights_at(&data, now());

        prop_assert!(insights.recommendations.len() <= 8);
        for rec in &insights.recommendations {
            prop_assert!((0.0..=1.0).contains(&rec.confidence));
        }

        let next = &insights.predictions.next_technology;
        prop_assert!((0.0..=1.0).contains(&next.confidence));
        prop_assert!(next.alternatives.len() <= 3);
        prop_assert!(!next.alternatives.contains(&next.primary));

        let growth = &insights.predictions.collaboration_growth;
        prop_assert!((0.0..=1.0).contains(&growth.network_score));
        prop_assert!((0.0..=1.0).contains(&growth.diversity_score));
    }

    #[test]
    fn prop_work_pattern_shape(data in user_data()) {
        let engine = InsightEngine::with_sampler(EngineConfig::default(), FixedSampler::midpoint());
        let patterns = engine.generate_insights_at(&data, now()).work_patterns;

        prop_assert_eq!(patterns.hourly_activity.len(), 24);
        prop_assert_eq!(patterns.weekly_activity.len(), 7);
        let hourly: u32 = patterns.hourly_activity.iter().sum();
        let weekly: u32 = patterns.weekly_activity.iter().sum();
        prop_assert_eq!(hourly, weekly);
        prop_assert!(patterns.peak_hours.iter().all(|h| *h < 24));
        prop_assert_eq!(patterns.burnout.score, patterns.burnout.factors.total());
    }

    #[test]
    fn prop_fixed_sampler_is_deterministic(data in user_data()) {
        let engine = InsightEngine::with_sampler(EngineConfig::default(), FixedSampler::new(0.3));
        let first = engine.generate_insights_at(&data, now());
        let second = engine.generate_insights_at(&data, now());
        prop_assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }
}

#[test]
fn maximal_push_sizes_do_not_overflow() {
    let events = (0..4)
        .map(|i| {
            let mut event = Event::new(EventType::Push, "me/app", now() - Duration::hours(i));
            event.payload.size = Some(u32::MAX);
            event
        })
        .collect();
    let data = UserData::new(Profile::default(), Vec::new(), events);
    let engine = InsightEngine::with_sampler(EngineConfig::default(), FixedSampler::midpoint());
    let insights = engine.generate_insights_at(&data, now());

    assert_eq!(
        insights.coding_style.commit_style,
        gitinsights::models::CommitStyle::BatchCommitter
    );
}

#[test]
fn ten_javascript_repositories_have_no_diversity_bonus() {
    let repos: Vec<Repository> = (0..10)
        .map(|i| Repository {
            name: format!("js-{}", i),
            language: Some("JavaScript".to_string()),
            ..Default::default()
        })
        .collect();
    let data = UserData::new(Profile::default(), repos, Vec::new());
    let engine = InsightEngine::with_sampler(EngineConfig::default(), FixedSampler::midpoint());
    let insights = engine.generate_insights_at(&data, now());

    assert_eq!(insights.personality.scores.exploration, 2.5);
}
