use std::collections::{BTreeSet, HashSet};

use crate::analysis::context::AnalysisContext;
use crate::analysis::scores::collaborative_repositories;
use crate::analysis::stats::{capped, distinct_languages, language_frequencies, round_to};
use crate::models::{
    ActivityTrend, CollaborationGrowth, CollaborationTrend, Event, NextTechnology, Predictions,
    Profile, Repository, SkillDevelopment, SkillTrend,
};
use crate::taxonomy::{next_technologies, TRENDING_TECHNOLOGIES};

const RECENT_REPOSITORY_DAYS: i64 = 180;
const NEW_SKILL_DAYS: i64 = 365;
const TREND_MIN_EVENTS: usize = 6;
const MAX_ALTERNATIVES: usize = 3;
const FALLBACK_TECHNOLOGY: &str = "Kubernetes";
const EMERGING_DESCRIPTION: &str = "Your public skill set is just getting started.";

pub struct PredictionEngine;

impl PredictionEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn predict(
        &self,
        ctx: &AnalysisContext<'_>,
        profile: &Profile,
        repos: &[Repository],
        events: &[Event],
    ) -> Predictions {
        Predictions {
            next_technology: self.next_technology(ctx, repos),
            activity_trend: self.activity_trend(events),
            collaboration_growth: self.collaboration_growth(profile, events),
            skill_development: self.skill_development(ctx, repos),
        }
    }

    pub fn next_technology(&self, ctx: &AnalysisContext<'_>, repos: &[Repository]) -> NextTechnology {
        let known = distinct_languages(repos);
        if known.is_empty() {
            return NextTechnology {
                primary: "JavaScript".to_string(),
                alternatives: vec!["Python".to_string(), "HTML".to_string()],
                confidence: 0.3,
                reasoning: "JavaScript is the most approachable entry point for a first public project."
                    .to_string(),
            };
        }

        let cutoff = ctx.days_ago(RECENT_REPOSITORY_DAYS);
        let recent: Vec<Repository> = repos
            .iter()
            .filter(|r| r.updated_at.map_or(false, |t| t >= cutoff))
            .cloned()
            .collect();
        let recent_frequencies = language_frequencies(&recent);
        let source = if recent_frequencies.is_empty() {
            language_frequencies(repos)
        } else {
            recent_frequencies
        };

        let mut pool: Vec<&str> = source
            .iter()
            .flat_map(|(language, _)| next_technologies(language).iter().copied())
            .collect();
        if known.len() >= 3 {
            pool.extend(TRENDING_TECHNOLOGIES.iter().copied());
        }
        let candidates = unused_unique(pool, &known);

        let candidates = if candidates.is_empty() {
            unused_unique(TRENDING_TECHNOLOGIES.to_vec(), &known)
        } else {
            candidates
        };

        let primary = candidates
            .first()
            .copied()
            .unwrap_or(FALLBACK_TECHNOLOGY)
            .to_string();
        let alternatives = candidates
            .iter()
            .skip(1)
            .take(MAX_ALTERNATIVES)
            .map(|c| c.to_string())
            .collect();

        let confidence =
            (0.4 + 0.05 * known.len() as f64 + 0.01 * repos.len() as f64).min(0.9);
        let reasoning = match source.first() {
            Some((top, _)) => format!(
                "{} is a natural next step from your {} work.",
                primary, top
            ),
            None => format!("{} is gaining momentum across the industry.", primary),
        };

        NextTechnology {
            primary,
            alternatives,
            confidence: round_to(confidence, 2),
            reasoning,
        }
    }

    /// Events are expected most recent first.
    pub fn activity_trend(&self, events: &[Event]) -> ActivityTrend {
        let chunk = events.len() / 3;
        if events.len() < TREND_MIN_EVENTS || chunk < 2 {
            return ActivityTrend::Stable;
        }

        let recent = chunk_rate(&events[..chunk]);
        let middle = chunk_rate(&events[chunk..chunk * 2]);
        let older = chunk_rate(&events[chunk * 2..chunk * 3]);

        if recent > middle * 1.2 && middle > older * 1.2 {
            ActivityTrend::RapidlyIncreasing
        } else if recent > middle * 1.1 {
            ActivityTrend::Increasing
        } else if recent < middle * 0.8 && middle < older * 0.8 {
            ActivityTrend::RapidlyDeclining
        } else if recent < middle * 0.9 {
            ActivityTrend::Declining
        } else {
            ActivityTrend::Stable
        }
    }

    pub fn collaboration_growth(&self, profile: &Profile, events: &[Event]) -> CollaborationGrowth {
        let followers = profile.followers as f64;
        let reach = capped((1.0 + followers).ln() / 1001f64.ln(), 1.0);
        let balance = capped(followers / profile.following.max(1) as f64, 2.0) / 2.0;
        let network_score = round_to(0.7 * reach + 0.3 * balance, 2);

        let repositories = collaborative_repositories(events);
        let diversity_score = round_to(capped(repositories.len() as f64 / 10.0, 1.0), 2);

        let (recent_half, older_half) = events.split_at(events.len() / 2);
        let recent = collaborative_count(recent_half);
        let older = collaborative_count(older_half);

        let trend = if recent > older && diversity_score >= 0.3 {
            CollaborationTrend::Expanding
        } else if recent > older || diversity_score >= 0.5 {
            CollaborationTrend::Growing
        } else if recent + older > 0 || network_score >= 0.3 {
            CollaborationTrend::Steady
        } else {
            CollaborationTrend::Limited
        };

        let description = match trend {
            CollaborationTrend::Expanding => format!(
                "Your collaboration is accelerating across {} shared repositories.",
                repositories.len()
            ),
            CollaborationTrend::Growing => {
                "You are engaging with other projects more than before.".to_string()
            }
            CollaborationTrend::Steady => {
                "Your collaboration level is holding steady.".to_string()
            }
            CollaborationTrend::Limited => {
                "Most of your work is solo so far. Reviews and issues on other projects are a good start."
                    .to_string()
            }
        };

        CollaborationGrowth {
            trend,
            network_score,
            diversity_score,
            description,
        }
    }

    pub fn skill_development(&self, ctx: &AnalysisContext<'_>, repos: &[Repository]) -> SkillDevelopment {
        if repos.is_empty() {
            return SkillDevelopment {
                trend: SkillTrend::Emerging,
                new_languages: Vec::new(),
                established_languages: Vec::new(),
                description: EMERGING_DESCRIPTION.to_string(),
            };
        }

        let cutoff = ctx.days_ago(NEW_SKILL_DAYS);
        let (recent, established): (Vec<&Repository>, Vec<&Repository>) = repos
            .iter()
            .partition(|r| r.created_at.map_or(false, |t| t >= cutoff));

        let established_languages: BTreeSet<&str> =
            established.iter().filter_map(|r| r.language()).collect();
        let new_languages: Vec<String> = recent
            .iter()
            .filter_map(|r| r.language())
            .collect::<BTreeSet<_>>()
            .difference(&established_languages)
            .map(|l| l.to_string())
            .collect();

        let trend = match new_languages.len() {
            n if n >= 2 => SkillTrend::RapidlyExpanding,
            1 => SkillTrend::Expanding,
            _ if !recent.is_empty() => SkillTrend::Deepening,
            _ => SkillTrend::Plateaued,
        };

        let description = match trend {
            SkillTrend::RapidlyExpanding => format!(
                "You picked up {} new languages in the past year.",
                new_languages.len()
            ),
            SkillTrend::Expanding => format!("You added {} to your toolkit this year.", new_languages[0]),
            SkillTrend::Deepening => {
                "Recent projects build on languages you already know.".to_string()
            }
            SkillTrend::Plateaued => {
                "No new projects in the past year. A fresh side project could restart growth."
                    .to_string()
            }
            SkillTrend::Emerging => EMERGING_DESCRIPTION.to_string(),
        };

        SkillDevelopment {
            trend,
            new_languages,
            established_languages: established_languages.into_iter().map(String::from).collect(),
            description,
        }
    }
}

impl Default for PredictionEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Candidates in order with duplicates and already-used languages removed.
fn unused_unique<'a>(pool: Vec<&'a str>, known: &BTreeSet<&str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    pool.into_iter()
        .filter(|c| !known.contains(c))
        .filter(|c| seen.insert(*c))
        .collect()
}

/// Events per day spanned by the chunk, treating anything under a day as one day.
fn chunk_rate(chunk: &[Event]) -> f64 {
    let times: Vec<_> = chunk.iter().filter_map(|e| e.created_at).collect();
    let span_days = match (times.iter().min(), times.iter().max()) {
        (Some(first), Some(last)) => (*last - *first).num_seconds() as f64 / 86_400.0,
        _ => 0.0,
    };
    chunk.len() as f64 / span_days.max(1.0)
}

fn collaborative_count(events: &[Event]) -> usize {
    events.iter().filter(|e| e.kind.is_collaborative()).count()
}
