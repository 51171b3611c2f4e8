use serde::{Deserialize, Serialize};

/// Fallback color for languages missing from [`LANGUAGE_COLORS`].
pub const DEFAULT_LANGUAGE_COLOR: &str = "#8b949e";

/// GitHub linguist display colors.
pub const LANGUAGE_COLORS: &[(&str, &str)] = &[
    ("JavaScript", "#f1e05a"),
    ("TypeScript", "#3178c6"),
    ("Python", "#3572A5"),
    ("Java", "#b07219"),
    ("Kotlin", "#A97BFF"),
    ("Scala", "#c22d40"),
    ("Go", "#00ADD8"),
    ("Rust", "#dea584"),
    ("C", "#555555"),
    ("C++", "#f34b7d"),
    ("C#", "#178600"),
    ("Swift", "#F05138"),
    ("Objective-C", "#438eff"),
    ("Dart", "#00B4AB"),
    ("Ruby", "#701516"),
    ("PHP", "#4F5D95"),
    ("Elixir", "#6e4a7e"),
    ("Erlang", "#B83998"),
    ("Haskell", "#5e5086"),
    ("Clojure", "#db5855"),
    ("OCaml", "#ef7a08"),
    ("Lua", "#000080"),
    ("R", "#198CE7"),
    ("Julia", "#a270ba"),
    ("Jupyter Notebook", "#DA5B0B"),
    ("HTML", "#e34c26"),
    ("CSS", "#563d7c"),
    ("SCSS", "#c6538c"),
    ("Vue", "#41b883"),
    ("Svelte", "#ff3e00"),
    ("Shell", "#89e051"),
    ("PowerShell", "#012456"),
    ("Dockerfile", "#384d54"),
    ("HCL", "#844FBA"),
    ("Nix", "#7e7eff"),
    ("Zig", "#ec915c"),
    ("Solidity", "#AA6746"),
    ("GDScript", "#355570"),
    ("TeX", "#3D6117"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LanguageCategory {
    Web,
    Systems,
    Data,
    Mobile,
    Enterprise,
    Functional,
    Scripting,
    Infrastructure,
    GameDev,
    Blockchain,
}

impl LanguageCategory {
    /// Project-type tag shown for repositories in this category.
    pub fn project_type(&self) -> &'static str {
        match self {
            LanguageCategory::Web => "Web Development",
            LanguageCategory::Systems => "Systems Programming",
            LanguageCategory::Data => "Data Science",
            LanguageCategory::Mobile => "Mobile Development",
            LanguageCategory::Enterprise => "Enterprise Applications",
            LanguageCategory::Functional => "Functional Programming",
            LanguageCategory::Scripting => "Scripting & Automation",
            LanguageCategory::Infrastructure => "DevOps & Infrastructure",
            LanguageCategory::GameDev => "Game Development",
            LanguageCategory::Blockchain => "Blockchain",
        }
    }
}

pub const LANGUAGE_CATEGORIES: &[(&str, LanguageCategory)] = &[
    ("JavaScript", LanguageCategory::Web),
    ("TypeScript", LanguageCategory::Web),
    ("HTML", LanguageCategory::Web),
    ("CSS", LanguageCategory::Web),
    ("SCSS", LanguageCategory::Web),
    ("Vue", LanguageCategory::Web),
    ("Svelte", LanguageCategory::Web),
    ("PHP", LanguageCategory::Web),
    ("Ruby", LanguageCategory::Web),
    ("C", LanguageCategory::Systems),
    ("C++", LanguageCategory::Systems),
    ("Rust", LanguageCategory::Systems),
    ("Go", LanguageCategory::Systems),
    ("Zig", LanguageCategory::Systems),
    ("Python", LanguageCategory::Data),
    ("R", LanguageCategory::Data),
    ("Julia", LanguageCategory::Data),
    ("Jupyter Notebook", LanguageCategory::Data),
    ("Swift", LanguageCategory::Mobile),
    ("Objective-C", LanguageCategory::Mobile),
    ("Kotlin", LanguageCategory::Mobile),
    ("Dart", LanguageCategory::Mobile),
    ("Java", LanguageCategory::Enterprise),
    ("C#", LanguageCategory::Enterprise),
    ("Scala", LanguageCategory::Enterprise),
    ("Haskell", LanguageCategory::Functional),
    ("Elixir", LanguageCategory::Functional),
    ("Erlang", LanguageCategory::Functional),
    ("Clojure", LanguageCategory::Functional),
    ("OCaml", LanguageCategory::Functional),
    ("Shell", LanguageCategory::Scripting),
    ("PowerShell", LanguageCategory::Scripting),
    ("Lua", LanguageCategory::Scripting),
    ("Dockerfile", LanguageCategory::Infrastructure),
    ("HCL", LanguageCategory::Infrastructure),
    ("Nix", LanguageCategory::Infrastructure),
    ("GDScript", LanguageCategory::GameDev),
    ("Solidity", LanguageCategory::Blockchain),
];

pub fn language_color(language: &str) -> &'static str {
    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(language))
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_LANGUAGE_COLOR)
}

pub fn language_category(language: &str) -> Option<LanguageCategory> {
    LANGUAGE_CATEGORIES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(language))
        .map(|(_, category)| *category)
}
