use std::collections::{BTreeSet, HashSet};

use chrono::NaiveDate;

use crate::analysis::context::AnalysisContext;
use crate::analysis::stats::{capped, distinct_languages, ratio, round_to};
use crate::models::{Event, EventType, PersonalityScores, Profile, Repository};
use crate::taxonomy::{contains_any_keyword, language_category, INNOVATION_KEYWORDS};

pub const MIN_SCORE: f64 = 1.0;
pub const MAX_SCORE: f64 = 10.0;

/// Minimum timestamped events before consistency is measured.
pub const CONSISTENCY_MIN_EVENTS: usize = 5;
/// Minimum distinct active days before consistency is measured.
pub const CONSISTENCY_MIN_DAYS: usize = 7;

/// `(low, high)` bounds for the placeholder each metric falls back to on sparse input.
#[derive(Debug, Clone)]
pub struct PlaceholderRanges {
    pub innovation: (f64, f64),
    pub collaboration: (f64, f64),
    pub consistency: (f64, f64),
    pub exploration: (f64, f64),
    pub leadership: (f64, f64),
}

impl Default for PlaceholderRanges {
    fn default() -> Self {
        Self {
            innovation: (3.0, 6.0),
            collaboration: (3.0, 6.0),
            consistency: (3.0, 7.0),
            exploration: (3.0, 7.0),
            leadership: (2.0, 5.0),
        }
    }
}

pub struct ScoreCalculator {
    ranges: PlaceholderRanges,
}

impl ScoreCalculator {
    pub fn new() -> Self {
        Self {
            ranges: PlaceholderRanges::default(),
        }
    }

    pub fn calculate_all(
        &self,
        ctx: &AnalysisContext<'_>,
        profile: &Profile,
        repos: &[Repository],
        events: &[Event],
    ) -> PersonalityScores {
        PersonalityScores {
            innovation: self.innovation(ctx, repos),
            collaboration: self.collaboration(ctx, events, profile),
            consistency: self.consistency(ctx, events),
            exploration: self.exploration(ctx, repos),
            leadership: self.leadership(ctx, repos, events, profile),
        }
    }

    pub fn innovation(&self, ctx: &AnalysisContext<'_>, repos: &[Repository]) -> f64 {
        if repos.is_empty() {
            tracing::debug!("No repositories, using placeholder innovation score");
            return ctx.placeholder(self.ranges.innovation);
        }

        let originals = repos.iter().filter(|r| !r.fork).count();
        let original_term = capped(ratio(originals, repos.len()) * 3.0, 3.0);

        let language_term = capped(distinct_languages(repos).len() as f64 * 0.5, 2.5);

        let keyword_repos = repos
            .iter()
            .filter(|r| contains_any_keyword(&r.searchable_text(), INNOVATION_KEYWORDS))
            .count();
        let keyword_term = capped(keyword_repos as f64 * 0.5, 2.0);

        let cutoff = ctx.days_ago(180);
        let recent_repos = repos
            .iter()
            .filter(|r| r.created_at.map_or(false, |t| t >= cutoff))
            .count();
        let recency_term = capped(recent_repos as f64 * 0.5, 1.5);

        let stars: u64 = repos.iter().map(|r| r.stargazers_count as u64).sum();
        let star_term = capped((1.0 + stars as f64).ln() * 0.3, 1.0);

        finalize(1.0 + original_term + language_term + keyword_term + recency_term + star_term)
    }

    pub fn collaboration(
        &self,
        ctx: &AnalysisContext<'_>,
        events: &[Event],
        profile: &Profile,
    ) -> f64 {
        if events.is_empty() {
            tracing::debug!("No events, using placeholder collaboration score");
            return ctx.placeholder(self.ranges.collaboration);
        }

        let reviews = events.iter().filter(|e| e.kind.is_review_activity()).count();
        let review_term = capped(reviews as f64 * 0.3, 3.0);

        let discussions = events
            .iter()
            .filter(|e| e.kind.is_discussion_activity())
            .count();
        let discussion_term = capped(discussions as f64 * 0.2, 2.0);

        let repo_term = capped(collaborative_repositories(events).len() as f64 * 0.5, 2.0);

        let orgs: HashSet<&str> = events.iter().filter_map(Event::org_login).collect();
        let org_term = capped(orgs.len() as f64 * 0.5, 1.5);

        let follower_term = capped((1.0 + profile.followers as f64).ln() * 0.3, 1.5);

        finalize(1.0 + review_term + discussion_term + repo_term + org_term + follower_term)
    }

    pub fn consistency(&self, ctx: &AnalysisContext<'_>, events: &[Event]) -> f64 {
        let days: BTreeSet<NaiveDate> = events
            .iter()
            .filter_map(|e| e.created_at)
            .map(|t| ctx.local(t).date_naive())
            .collect();
        let timestamped = events.iter().filter(|e| e.created_at.is_some()).count();

        if timestamped < CONSISTENCY_MIN_EVENTS || days.len() < CONSISTENCY_MIN_DAYS {
            tracing::debug!(
                "Only {} events over {} days, using placeholder consistency score",
                timestamped,
                days.len()
            );
            return ctx.placeholder(self.ranges.consistency);
        }

        let (first, last) = match (days.first(), days.last()) {
            (Some(first), Some(last)) => (*first, *last),
            _ => return ctx.placeholder(self.ranges.consistency),
        };
        let span_days = (last - first).num_days() + 1;

        let density_term = capped(days.len() as f64 / span_days as f64 * 4.0, 4.0);

        let total_weeks = (span_days + 6) / 7;
        let active_weeks: HashSet<i64> = days.iter().map(|d| (*d - first).num_days() / 7).collect();
        let weekly_term = capped(active_weeks.len() as f64 / total_weeks as f64 * 3.0, 3.0);

        let longest_gap = days
            .iter()
            .zip(days.iter().skip(1))
            .map(|(a, b)| (*b - *a).num_days())
            .max()
            .unwrap_or(0);
        let gap_term = match longest_gap {
            g if g <= 2 => 2.0,
            g if g <= 7 => 1.0,
            _ => 0.0,
        };

        finalize(1.0 + density_term + weekly_term + gap_term)
    }

    pub fn exploration(&self, ctx: &AnalysisContext<'_>, repos: &[Repository]) -> f64 {
        if repos.is_empty() {
            tracing::debug!("No repositories, using placeholder exploration score");
            return ctx.placeholder(self.ranges.exploration);
        }

        let languages = distinct_languages(repos);
        let diversity_term = language_diversity_term(languages.len());

        let categories: HashSet<_> = languages
            .iter()
            .filter_map(|l| language_category(l))
            .collect();
        let category_term = capped(categories.len() as f64 * 0.5, 2.0);

        let forks = repos.iter().filter(|r| r.fork).count();
        let fork_term = capped(ratio(forks, repos.len()) * 1.5, 1.5);

        let volume_term = capped(repos.len() as f64 / 10.0, 1.5);

        finalize(1.0 + diversity_term + category_term + fork_term + volume_term)
    }

    pub fn leadership(
        &self,
        ctx: &AnalysisContext<'_>,
        repos: &[Repository],
        events: &[Event],
        profile: &Profile,
    ) -> f64 {
        if repos.is_empty() && events.is_empty() {
            tracing::debug!("No repositories or events, using placeholder leadership score");
            return ctx.placeholder(self.ranges.leadership);
        }

        let own: Vec<&Repository> = repos.iter().filter(|r| !r.fork).collect();
        let stars: u64 = own.iter().map(|r| r.stargazers_count as u64).sum();
        let forks: u64 = own.iter().map(|r| r.forks_count as u64).sum();

        let star_term = capped((1.0 + stars as f64).ln() * 0.5, 3.0);
        let fork_term = capped((1.0 + forks as f64).ln() * 0.5, 2.0);
        let follower_term = capped((1.0 + profile.followers as f64).ln() * 0.4, 2.0);

        let reviews = events
            .iter()
            .filter(|e| {
                matches!(
                    e.kind,
                    EventType::PullRequestReview | EventType::PullRequestReviewComment
                )
            })
            .count();
        let review_term = capped(reviews as f64 * 0.25, 1.5);

        let created = events.iter().filter(|e| e.creates_repository()).count();
        let creation_term = capped(created as f64 * 0.25, 0.5);

        finalize(1.0 + star_term + fork_term + follower_term + review_term + creation_term)
    }
}

impl Default for ScoreCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Exploration credit for the number of distinct languages. A single language earns
/// nothing; each additional one adds 0.8 up to 4.
pub fn language_diversity_term(unique_languages: usize) -> f64 {
    capped(unique_languages.saturating_sub(1) as f64 * 0.8, 4.0)
}

/// Distinct repositories the user reviewed, discussed or joined.
pub fn collaborative_repositories(events: &[Event]) -> HashSet<&str> {
    events
        .iter()
        .filter(|e| e.kind.is_collaborative() && !e.repo.name.is_empty())
        .map(|e| e.repo.name.as_str())
        .collect()
}

fn finalize(raw: f64) -> f64 {
    round_to(raw, 1).clamp(MIN_SCORE, MAX_SCORE)
}
