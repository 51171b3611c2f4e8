pub mod languages;

pub use languages::{language_category, language_color, LanguageCategory};

/// Follow-on technologies per language, most natural next step first.
pub const TECHNOLOGY_PROGRESSION: &[(&str, &[&str])] = &[
    ("JavaScript", &["TypeScript", "React", "Node.js", "Vue"]),
    ("TypeScript", &["React", "Next.js", "Deno", "GraphQL"]),
    ("Python", &["Django", "FastAPI", "PyTorch", "Rust"]),
    ("Java", &["Kotlin", "Spring Boot", "Scala"]),
    ("Kotlin", &["Jetpack Compose", "Ktor", "Kotlin Multiplatform"]),
    ("Go", &["Kubernetes", "gRPC", "Rust"]),
    ("Rust", &["WebAssembly", "Tokio", "Embedded Rust"]),
    ("C", &["C++", "Rust", "Zig"]),
    ("C++", &["Rust", "CUDA", "Qt"]),
    ("C#", &[".NET MAUI", "Blazor", "Unity"]),
    ("Swift", &["SwiftUI", "Combine", "Vapor"]),
    ("Objective-C", &["Swift", "SwiftUI"]),
    ("Dart", &["Flutter", "Firebase"]),
    ("Ruby", &["Ruby on Rails", "Elixir", "Crystal"]),
    ("PHP", &["Laravel", "Symfony", "TypeScript"]),
    ("HTML", &["CSS", "JavaScript", "Tailwind CSS"]),
    ("CSS", &["Tailwind CSS", "SCSS", "JavaScript"]),
    ("R", &["Python", "Shiny", "Julia"]),
    ("Jupyter Notebook", &["PyTorch", "TensorFlow", "Pandas"]),
    ("Shell", &["Python", "Docker", "Ansible"]),
    ("Elixir", &["Phoenix", "LiveView", "Erlang"]),
    ("Haskell", &["PureScript", "Idris", "Rust"]),
    ("Scala", &["Apache Spark", "Akka", "ZIO"]),
    ("Dockerfile", &["Kubernetes", "Terraform", "Helm"]),
];

/// Technologies suggested to anyone already comfortable across several languages.
pub const TRENDING_TECHNOLOGIES: &[&str] = &["Rust", "Go", "TypeScript", "WebAssembly", "Kubernetes"];

/// Markers in repository names or descriptions that suggest novel work.
pub const INNOVATION_KEYWORDS: &[&str] = &[
    "ai",
    "ml",
    "machine learning",
    "neural",
    "blockchain",
    "experimental",
    "prototype",
    "novel",
    "innovative",
    "framework",
    "engine",
    "compiler",
    "research",
];

/// Markers of automated testing in repository text or commit messages.
pub const TESTING_KEYWORDS: &[&str] = &[
    "test", "tests", "testing", "spec", "specs", "jest", "pytest", "unittest", "mocha", "tdd",
    "coverage", "cypress", "vitest",
];

/// Keyword-driven project tags that languages alone cannot reveal.
pub const PROJECT_KEYWORDS: &[(&str, &[&str])] = &[
    ("Machine Learning", &["machine learning", "ml", "neural", "model", "ai"]),
    ("Command-Line Tools", &["cli", "command line", "terminal"]),
    ("APIs & Services", &["api", "server", "backend", "service"]),
    ("Documentation & Learning", &["docs", "tutorial", "notes", "awesome", "learning"]),
    ("Game Development", &["game", "unity", "godot"]),
    ("Developer Tooling", &["plugin", "extension", "tool", "linter"]),
];

pub fn next_technologies(language: &str) -> &'static [&'static str] {
    TECHNOLOGY_PROGRESSION
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(language))
        .map(|(_, next)| *next)
        .unwrap_or(&[])
}

/// Whole-word keyword match, so "ai" does not fire on "maintain".
pub fn contains_keyword(text: &str, keyword: &str) -> bool {
    let text = text.to_lowercase();
    text.match_indices(keyword).any(|(start, _)| {
        let end = start + keyword.len();
        let before = text[..start].chars().next_back();
        let after = text[end..].chars().next();
        !before.map_or(false, char::is_alphanumeric) && !after.map_or(false, char::is_alphanumeric)
    })
}

pub fn contains_any_keyword(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| contains_keyword(text, k))
}
