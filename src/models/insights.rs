use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Insights {
    pub personality: PersonalityProfile,
    pub work_patterns: WorkPatterns,
    pub coding_style: CodingStyle,
    pub recommendations: Vec<Recommendation>,
    pub predictions: Predictions,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersonalityProfile {
    pub scores: PersonalityScores,
    pub personality_type: PersonalityType,
    pub description: String,
    pub strengths: Vec<String>,
    pub growth_areas: Vec<String>,
}

/// Each score lies in `[1, 10]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PersonalityScores {
    pub innovation: f64,
    pub collaboration: f64,
    pub consistency: f64,
    pub exploration: f64,
    pub leadership: f64,
}

impl PersonalityScores {
    pub fn iter(&self) -> impl Iterator<Item = (PersonalityTrait, f64)> {
        [
            (PersonalityTrait::Innovation, self.innovation),
            (PersonalityTrait::Collaboration, self.collaboration),
            (PersonalityTrait::Consistency, self.consistency),
            (PersonalityTrait::Exploration, self.exploration),
            (PersonalityTrait::Leadership, self.leadership),
        ]
        .into_iter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PersonalityTrait {
    Innovation,
    Collaboration,
    Consistency,
    Exploration,
    Leadership,
}

impl std::fmt::Display for PersonalityTrait {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersonalityTrait::Innovation => write!(f, "Innovation"),
            PersonalityTrait::Collaboration => write!(f, "Collaboration"),
            PersonalityTrait::Consistency => write!(f, "Consistency"),
            PersonalityTrait::Exploration => write!(f, "Exploration"),
            PersonalityTrait::Leadership => write!(f, "Leadership"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PersonalityType {
    Innovator,
    TeamPlayer,
    ReliableContributor,
    TechnologyExplorer,
    BalancedDeveloper,
}

impl std::fmt::Display for PersonalityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersonalityType::Innovator => write!(f, "Innovator"),
            PersonalityType::TeamPlayer => write!(f, "Team Player"),
            PersonalityType::ReliableContributor => write!(f, "Reliable Contributor"),
            PersonalityType::TechnologyExplorer => write!(f, "Technology Explorer"),
            PersonalityType::BalancedDeveloper => write!(f, "Balanced Developer"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkPatterns {
    /// Event counts per hour of day, index 0 is midnight.
    pub hourly_activity: Vec<u32>,
    /// Event counts per weekday, index 0 is Monday.
    pub weekly_activity: Vec<u32>,
    pub peak_hours: Vec<u32>,
    pub working_style: WorkingStyle,
    pub burnout: BurnoutAssessment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkingStyle {
    GettingStarted,
    WeekendEveningWarrior,
    WeekendWarrior,
    ConsistentNightOwl,
    NightOwl,
    EarlyBirdDeveloper,
    EveningCoder,
    AfternoonAchiever,
    ConsistentDaytimeDeveloper,
    FlexibleScheduleDeveloper,
}

impl WorkingStyle {
    pub fn is_weekend_variant(&self) -> bool {
        matches!(
            self,
            WorkingStyle::WeekendWarrior | WorkingStyle::WeekendEveningWarrior
        )
    }
}

impl std::fmt::Display for WorkingStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WorkingStyle::GettingStarted => write!(f, "Getting Started"),
            WorkingStyle::WeekendEveningWarrior => write!(f, "Weekend Evening Warrior"),
            WorkingStyle::WeekendWarrior => write!(f, "Weekend Warrior"),
            WorkingStyle::ConsistentNightOwl => write!(f, "Consistent Night Owl"),
            WorkingStyle::NightOwl => write!(f, "Night Owl"),
            WorkingStyle::EarlyBirdDeveloper => write!(f, "Early Bird Developer"),
            WorkingStyle::EveningCoder => write!(f, "Evening Coder"),
            WorkingStyle::AfternoonAchiever => write!(f, "Afternoon Achiever"),
            WorkingStyle::ConsistentDaytimeDeveloper => write!(f, "Consistent Daytime Developer"),
            WorkingStyle::FlexibleScheduleDeveloper => write!(f, "Flexible Schedule Developer"),
        }
    }
}

/// Ordered from least to most concerning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BurnoutRisk {
    Low,
    LowMedium,
    Medium,
    High,
}

impl std::fmt::Display for BurnoutRisk {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BurnoutRisk::Low => write!(f, "Low"),
            BurnoutRisk::LowMedium => write!(f, "Low-Medium"),
            BurnoutRisk::Medium => write!(f, "Medium"),
            BurnoutRisk::High => write!(f, "High"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BurnoutAssessment {
    pub level: BurnoutRisk,
    pub score: u32,
    pub factors: BurnoutFactors,
    pub advice: String,
    pub recommendations: Vec<String>,
}

/// Points contributed by each signal, 0 to 3 apiece.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BurnoutFactors {
    pub recent_intensity: u32,
    pub weekend_work: u32,
    pub late_night_work: u32,
    pub daily_clustering: u32,
}

impl BurnoutFactors {
    pub fn total(&self) -> u32 {
        self.recent_intensity + self.weekend_work + self.late_night_work + self.daily_clustering
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodingStyle {
    pub languages: Vec<LanguageUsage>,
    pub project_types: Vec<String>,
    pub commit_style: CommitStyle,
    pub testing_approach: TestingApproach,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageUsage {
    pub language: String,
    pub repositories: u32,
    pub percentage: f64,
    pub color: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitStyle {
    BatchCommitter,
    BalancedCommitter,
    IncrementalCommitter,
    Unknown,
}

impl std::fmt::Display for CommitStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommitStyle::BatchCommitter => write!(f, "Batch Committer"),
            CommitStyle::BalancedCommitter => write!(f, "Balanced Committer"),
            CommitStyle::IncrementalCommitter => write!(f, "Incremental Committer"),
            CommitStyle::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestingApproach {
    TestDriven,
    TestConscious,
    MinimalTesting,
    Unknown,
}

impl std::fmt::Display for TestingApproach {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestingApproach::TestDriven => write!(f, "Test-Driven"),
            TestingApproach::TestConscious => write!(f, "Test-Conscious"),
            TestingApproach::MinimalTesting => write!(f, "Minimal Testing"),
            TestingApproach::Unknown => write!(f, "Unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub kind: RecommendationKind,
    pub title: String,
    pub description: String,
    /// In `[0, 1]`.
    pub confidence: f64,
    pub icon: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecommendationKind {
    Technology,
    Learning,
    Productivity,
    Career,
}

impl std::fmt::Display for RecommendationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecommendationKind::Technology => write!(f, "Technology"),
            RecommendationKind::Learning => write!(f, "Learning"),
            RecommendationKind::Productivity => write!(f, "Productivity"),
            RecommendationKind::Career => write!(f, "Career"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Predictions {
    pub next_technology: NextTechnology,
    pub activity_trend: ActivityTrend,
    pub collaboration_growth: CollaborationGrowth,
    pub skill_development: SkillDevelopment,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NextTechnology {
    pub primary: String,
    pub alternatives: Vec<String>,
    pub confidence: f64,
    pub reasoning: String,
}

/// Ordered from strongest decline to strongest growth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActivityTrend {
    RapidlyDeclining,
    Declining,
    Stable,
    Increasing,
    RapidlyIncreasing,
}

impl std::fmt::Display for ActivityTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActivityTrend::RapidlyDeclining => write!(f, "Rapidly Declining"),
            ActivityTrend::Declining => write!(f, "Declining"),
            ActivityTrend::Stable => write!(f, "Stable"),
            ActivityTrend::Increasing => write!(f, "Increasing"),
            ActivityTrend::RapidlyIncreasing => write!(f, "Rapidly Increasing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollaborationGrowth {
    pub trend: CollaborationTrend,
    /// Follower reach, in `[0, 1]`.
    pub network_score: f64,
    /// Breadth of outside repositories collaborated on, in `[0, 1]`.
    pub diversity_score: f64,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CollaborationTrend {
    Limited,
    Steady,
    Growing,
    Expanding,
}

impl std::fmt::Display for CollaborationTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollaborationTrend::Limited => write!(f, "Limited"),
            CollaborationTrend::Steady => write!(f, "Steady"),
            CollaborationTrend::Growing => write!(f, "Growing"),
            CollaborationTrend::Expanding => write!(f, "Expanding"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillDevelopment {
    pub trend: SkillTrend,
    pub new_languages: Vec<String>,
    pub established_languages: Vec<String>,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkillTrend {
    Emerging,
    Plateaued,
    Deepening,
    Expanding,
    RapidlyExpanding,
}

impl std::fmt::Display for SkillTrend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillTrend::Emerging => write!(f, "Emerging"),
            SkillTrend::Plateaued => write!(f, "Plateaued"),
            SkillTrend::Deepening => write!(f, "Deepening"),
            SkillTrend::Expanding => write!(f, "Expanding"),
            SkillTrend::RapidlyExpanding => write!(f, "Rapidly Expanding"),
        }
    }
}
