use crate::analysis::stats::{language_frequencies, ratio, round_to};
use crate::models::{CodingStyle, CommitStyle, Event, EventType, LanguageUsage, Repository, TestingApproach};
use crate::taxonomy::{
    contains_any_keyword, language_category, language_color, PROJECT_KEYWORDS, TESTING_KEYWORDS,
};

pub const GENERAL_DEVELOPMENT: &str = "General Development";

pub struct CodingStyleAnalyzer;

impl CodingStyleAnalyzer {
    pub fn new() -> Self {
        Self
    }

    pub fn analyze(&self, repos: &[Repository], events: &[Event]) -> CodingStyle {
        CodingStyle {
            languages: self.language_distribution(repos),
            project_types: self.project_types(repos),
            commit_style: self.commit_style(events),
            testing_approach: self.testing_approach(repos, events),
        }
    }

    pub fn language_distribution(&self, repos: &[Repository]) -> Vec<LanguageUsage> {
        let frequencies = language_frequencies(repos);
        let total: u32 = frequencies.iter().map(|(_, count)| count).sum();

        frequencies
            .into_iter()
            .map(|(language, count)| LanguageUsage {
                language: language.to_string(),
                repositories: count,
                percentage: round_to(ratio(count as usize, total as usize) * 100.0, 1),
                color: language_color(language).to_string(),
            })
            .collect()
    }

    /// Category tags in language-frequency order, then keyword tags.
    pub fn project_types(&self, repos: &[Repository]) -> Vec<String> {
        let mut types: Vec<String> = Vec::new();
        let mut push_unique = |tag: &str| {
            if !types.iter().any(|t| t == tag) {
                types.push(tag.to_string());
            }
        };

        for (language, _) in language_frequencies(repos) {
            if let Some(category) = language_category(language) {
                push_unique(category.project_type());
            }
        }

        let texts: Vec<String> = repos.iter().map(Repository::searchable_text).collect();
        for &(tag, keywords) in PROJECT_KEYWORDS {
            if texts.iter().any(|text| contains_any_keyword(text, keywords)) {
                push_unique(tag);
            }
        }

        if types.is_empty() {
            types.push(GENERAL_DEVELOPMENT.to_string());
        }
        types
    }

    pub fn commit_style(&self, events: &[Event]) -> CommitStyle {
        let pushes: Vec<&Event> = events.iter().filter(|e| e.kind == EventType::Push).collect();
        if pushes.is_empty() {
            return CommitStyle::Unknown;
        }

        let commits: u64 = pushes.iter().map(|e| u64::from(e.commit_count())).sum();
        let average = commits as f64 / pushes.len() as f64;

        if average >= 5.0 {
            CommitStyle::BatchCommitter
        } else if average >= 2.0 {
            CommitStyle::BalancedCommitter
        } else if average > 0.0 {
            CommitStyle::IncrementalCommitter
        } else {
            CommitStyle::Unknown
        }
    }

    pub fn testing_approach(&self, repos: &[Repository], events: &[Event]) -> TestingApproach {
        let messages: Vec<&str> = events
            .iter()
            .filter(|e| e.kind == EventType::Push)
            .flat_map(Event::commit_messages)
            .collect();

        if repos.is_empty() && messages.is_empty() {
            return TestingApproach::Unknown;
        }

        let testing_messages = messages
            .iter()
            .filter(|m| contains_any_keyword(m, TESTING_KEYWORDS))
            .count();
        let share = ratio(testing_messages, messages.len());
        let repo_marker = repos
            .iter()
            .any(|r| contains_any_keyword(&r.searchable_text(), TESTING_KEYWORDS));

        if share > 0.2 {
            TestingApproach::TestDriven
        } else if share > 0.05 || repo_marker {
            TestingApproach::TestConscious
        } else {
            TestingApproach::MinimalTesting
        }
    }
}

impl Default for CodingStyleAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
