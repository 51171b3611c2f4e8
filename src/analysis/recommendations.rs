use std::collections::BTreeSet;

use crate::analysis::context::AnalysisContext;
use crate::analysis::rules::{all_matches, Rule};
use crate::analysis::stats::distinct_languages;
use crate::models::{Event, Profile, Recommendation, RecommendationKind, Repository};

pub const MAX_RECOMMENDATIONS: usize = 8;
const RECENT_ACTIVITY_DAYS: i64 = 30;

const WEB_LANGUAGES: &[&str] = &["JavaScript", "TypeScript", "HTML", "CSS", "Vue", "Svelte"];

/// Account-level facts the recommendation rules are evaluated against.
#[derive(Debug, Clone, Default)]
pub struct ActivitySummary {
    pub languages: BTreeSet<String>,
    pub repo_count: usize,
    pub followers: u32,
    pub recent_events: usize,
}

impl ActivitySummary {
    pub fn collect(
        ctx: &AnalysisContext<'_>,
        profile: &Profile,
        repos: &[Repository],
        events: &[Event],
    ) -> Self {
        let cutoff = ctx.days_ago(RECENT_ACTIVITY_DAYS);
        Self {
            languages: distinct_languages(repos).into_iter().map(String::from).collect(),
            repo_count: repos.len(),
            followers: profile.followers,
            recent_events: events
                .iter()
                .filter_map(|e| e.created_at)
                .filter(|t| *t >= cutoff)
                .count(),
        }
    }

    pub fn uses(&self, language: &str) -> bool {
        self.languages.contains(language)
    }

    fn uses_any(&self, languages: &[&str]) -> bool {
        languages.iter().any(|l| self.uses(l))
    }
}

/// Static text for one recommendation row.
#[derive(Debug, Clone, Copy)]
pub struct Advice {
    pub title: &'static str,
    pub description: &'static str,
    pub confidence: f64,
    pub icon: &'static str,
}

const fn advice(
    title: &'static str,
    description: &'static str,
    confidence: f64,
    icon: &'static str,
) -> Advice {
    Advice {
        title,
        description,
        confidence,
        icon,
    }
}

type AdviceRule = Rule<ActivitySummary, Advice>;

const TECHNOLOGY_RULES: &[AdviceRule] = &[
    Rule::new(
        advice(
            "Adopt TypeScript",
            "You write a lot of JavaScript. Static types catch bugs earlier and make refactoring safer.",
            0.85,
            "🔷",
        ),
        |s: &ActivitySummary| s.uses("JavaScript") && !s.uses("TypeScript"),
    ),
    Rule::new(
        advice(
            "Try Rust or Go for Performance",
            "Pair your Python with a compiled language for services and tools where speed matters.",
            0.7,
            "⚡",
        ),
        |s: &ActivitySummary| s.uses("Python") && !s.uses("Rust") && !s.uses("Go"),
    ),
    Rule::new(
        advice(
            "Explore Kotlin",
            "Kotlin runs everywhere Java does, with null safety and far less boilerplate.",
            0.7,
            "🟣",
        ),
        |s: &ActivitySummary| s.uses("Java") && !s.uses("Kotlin"),
    ),
    Rule::new(
        advice(
            "Branch Out to a Second Language",
            "A second language broadens how you approach problems and opens new project types.",
            0.75,
            "🌱",
        ),
        |s: &ActivitySummary| s.languages.len() == 1,
    ),
    Rule::new(
        advice(
            "Containerize Your Projects",
            "With several stacks in play, Docker keeps builds and environments reproducible.",
            0.65,
            "🐳",
        ),
        |s: &ActivitySummary| s.languages.len() >= 3 && !s.uses("Dockerfile"),
    ),
    Rule::new(
        advice(
            "Pick a First Language",
            "Start with a versatile language like Python or JavaScript and publish what you build.",
            0.6,
            "🚀",
        ),
        |s: &ActivitySummary| s.languages.is_empty(),
    ),
];

const LEARNING_RULES: &[AdviceRule] = &[
    Rule::new(
        advice(
            "Build More Public Projects",
            "Small public projects are the fastest way to learn and to show what you can do.",
            0.8,
            "🛠️",
        ),
        |s: &ActivitySummary| s.repo_count < 5,
    ),
    Rule::new(
        advice(
            "Learn Web Fundamentals",
            "HTML, CSS and JavaScript let you put a face on any project you build.",
            0.6,
            "🌐",
        ),
        |s: &ActivitySummary| !s.uses_any(WEB_LANGUAGES),
    ),
    Rule::new(
        advice(
            "Add Python to Your Toolkit",
            "Python is the go-to for scripting, automation and data work alongside the web.",
            0.55,
            "🐍",
        ),
        |s: &ActivitySummary| s.uses_any(WEB_LANGUAGES) && !s.uses("Python"),
    ),
    Rule::new(
        advice(
            "Go Deep on Your Primary Language",
            "You already cover a lot of ground. Mastering one language's internals pays off everywhere.",
            0.7,
            "🎯",
        ),
        |s: &ActivitySummary| s.languages.len() >= 4,
    ),
];

const PRODUCTIVITY_RULES: &[AdviceRule] = &[
    Rule::new(
        advice(
            "Re-establish a Coding Routine",
            "There has been no public activity this month. A small daily habit rebuilds momentum.",
            0.75,
            "📅",
        ),
        |s: &ActivitySummary| s.recent_events == 0,
    ),
    Rule::new(
        advice(
            "Pace Yourself",
            "Your recent activity is very high. Sustainable pace beats short bursts.",
            0.7,
            "🧘",
        ),
        |s: &ActivitySummary| s.recent_events > 150,
    ),
    Rule::new(
        advice(
            "Set Weekly Coding Goals",
            "A concrete weekly target turns occasional activity into steady progress.",
            0.65,
            "🎯",
        ),
        |s: &ActivitySummary| (1..30).contains(&s.recent_events),
    ),
    Rule::new(
        advice(
            "Automate Your Workflow",
            "You ship regularly. CI pipelines and pre-commit hooks will save you time on every change.",
            0.6,
            "🤖",
        ),
        |s: &ActivitySummary| (30..=150).contains(&s.recent_events),
    ),
    Rule::new(
        advice(
            "Archive Inactive Repositories",
            "Archiving stale repositories keeps your profile focused on current work.",
            0.6,
            "🗄️",
        ),
        |s: &ActivitySummary| s.repo_count > 20,
    ),
];

const CAREER_RULES: &[AdviceRule] = &[
    Rule::new(
        advice(
            "Grow Your Developer Network",
            "Share your work and engage with other developers to build your audience.",
            0.7,
            "🤝",
        ),
        |s: &ActivitySummary| s.followers < 10,
    ),
    Rule::new(
        advice(
            "Mentor Other Developers",
            "People already follow your work. Mentoring multiplies your impact.",
            0.75,
            "🎓",
        ),
        |s: &ActivitySummary| s.followers >= 100,
    ),
    Rule::new(
        advice(
            "Contribute to Open Source",
            "Your range of projects makes you a strong candidate for contributing upstream.",
            0.7,
            "🌍",
        ),
        |s: &ActivitySummary| s.repo_count >= 5 && s.languages.len() >= 3,
    ),
    Rule::new(
        advice(
            "Curate a Portfolio",
            "Pin and document your best repositories so visitors see your strongest work first.",
            0.65,
            "📁",
        ),
        |s: &ActivitySummary| s.repo_count >= 10,
    ),
];

pub struct RecommendationGenerator {
    limit: usize,
}

impl RecommendationGenerator {
    pub fn new() -> Self {
        Self {
            limit: MAX_RECOMMENDATIONS,
        }
    }

    pub fn generate(&self, summary: &ActivitySummary) -> Vec<Recommendation> {
        let groups: [(RecommendationKind, &[AdviceRule], usize); 4] = [
            (RecommendationKind::Technology, TECHNOLOGY_RULES, 3),
            (RecommendationKind::Learning, LEARNING_RULES, 2),
            (RecommendationKind::Productivity, PRODUCTIVITY_RULES, 2),
            (RecommendationKind::Career, CAREER_RULES, 2),
        ];

        let mut recommendations: Vec<Recommendation> = groups
            .iter()
            .flat_map(|&(kind, rules, cap)| {
                all_matches(rules, summary)
                    .take(cap)
                    .map(move |a| to_recommendation(kind, a))
            })
            .collect();

        recommendations.truncate(self.limit);
        tracing::debug!("Generated {} recommendations", recommendations.len());
        recommendations
    }
}

impl Default for RecommendationGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn to_recommendation(kind: RecommendationKind, advice: &Advice) -> Recommendation {
    Recommendation {
        kind,
        title: advice.title.to_string(),
        description: advice.description.to_string(),
        confidence: advice.confidence.clamp(0.0, 1.0),
        icon: advice.icon.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(languages: &[&str], repo_count: usize, followers: u32, recent: usize) -> ActivitySummary {
        ActivitySummary {
            languages: languages.iter().map(|l| l.to_string()).collect(),
            repo_count,
            followers,
            recent_events: recent,
        }
    }

    fn titles(recs: &[Recommendation]) -> Vec<&str> {
        recs.iter().map(|r| r.title.as_str()).collect()
    }

    #[test]
    fn test_javascript_without_typescript() {
        let recs = RecommendationGenerator::new().generate(&summary(&["JavaScript"], 3, 5, 10));
        assert_eq!(recs[0].title, "Adopt TypeScript");
        assert_eq!(recs[0].kind, RecommendationKind::Technology);
        assert!(titles(&recs).contains(&"Branch Out to a Second Language"));
    }

    #[test]
    fn test_category_caps_and_order() {
        let s = summary(
            &["JavaScript", "Python", "Java", "Ruby"],
            25,
            500,
            200,
        );
        let recs = RecommendationGenerator::new().generate(&s);

        let technology = recs
            .iter()
            .filter(|r| r.kind == RecommendationKind::Technology)
            .count();
        assert_eq!(technology, 3);
        assert!(recs.len() <= MAX_RECOMMENDATIONS);

        let kinds: Vec<_> = recs.iter().map(|r| r.kind).collect();
        let mut sorted = kinds.clone();
        sorted.sort_by_key(|k| match k {
            RecommendationKind::Technology => 0,
            RecommendationKind::Learning => 1,
            RecommendationKind::Productivity => 2,
            RecommendationKind::Career => 3,
        });
        assert_eq!(kinds, sorted);
    }

    #[test]
    fn test_empty_account() {
        let recs = RecommendationGenerator::new().generate(&ActivitySummary::default());
        assert_eq!(
            titles(&recs),
            vec![
                "Pick a First Language",
                "Build More Public Projects",
                "Learn Web Fundamentals",
                "Re-establish a Coding Routine",
                "Grow Your Developer Network",
            ]
        );
    }

    #[test]
    fn test_never_more_than_eight_with_valid_confidence() {
        let busy = summary(
            &["JavaScript", "Python", "Java", "C", "Go"],
            40,
            5,
            100,
        );
        let recs = RecommendationGenerator::new().generate(&busy);
        assert!(recs.len() <= MAX_RECOMMENDATIONS);
        assert!(recs.iter().all(|r| (0.0..=1.0).contains(&r.confidence)));
    }
}
