use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::lenient::{lenient_datetime, lenient_vec, null_as_default};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventType {
    Push,
    PullRequest,
    PullRequestReview,
    PullRequestReviewComment,
    Issues,
    IssueComment,
    CommitComment,
    Create,
    Delete,
    Watch,
    Fork,
    Release,
    Public,
    Member,
    Gollum,
    #[default]
    Other,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Push => "PushEvent",
            EventType::PullRequest => "PullRequestEvent",
            EventType::PullRequestReview => "PullRequestReviewEvent",
            EventType::PullRequestReviewComment => "PullRequestReviewCommentEvent",
            EventType::Issues => "IssuesEvent",
            EventType::IssueComment => "IssueCommentEvent",
            EventType::CommitComment => "CommitCommentEvent",
            EventType::Create => "CreateEvent",
            EventType::Delete => "DeleteEvent",
            EventType::Watch => "WatchEvent",
            EventType::Fork => "ForkEvent",
            EventType::Release => "ReleaseEvent",
            EventType::Public => "PublicEvent",
            EventType::Member => "MemberEvent",
            EventType::Gollum => "GollumEvent",
            EventType::Other => "UnknownEvent",
        }
    }

    /// Pull requests and code review.
    pub fn is_review_activity(&self) -> bool {
        matches!(
            self,
            EventType::PullRequest
                | EventType::PullRequestReview
                | EventType::PullRequestReviewComment
        )
    }

    /// Issue tracking and discussion.
    pub fn is_discussion_activity(&self) -> bool {
        matches!(
            self,
            EventType::Issues | EventType::IssueComment | EventType::CommitComment
        )
    }

    pub fn is_collaborative(&self) -> bool {
        self.is_review_activity() || self.is_discussion_activity() || *self == EventType::Member
    }
}

impl From<&str> for EventType {
    fn from(s: &str) -> Self {
        match s.trim_end_matches("Event") {
            "Push" => EventType::Push,
            "PullRequest" => EventType::PullRequest,
            "PullRequestReview" => EventType::PullRequestReview,
            "PullRequestReviewComment" => EventType::PullRequestReviewComment,
            "Issues" => EventType::Issues,
            "IssueComment" => EventType::IssueComment,
            "CommitComment" => EventType::CommitComment,
            "Create" => EventType::Create,
            "Delete" => EventType::Delete,
            "Watch" => EventType::Watch,
            "Fork" => EventType::Fork,
            "Release" => EventType::Release,
            "Public" => EventType::Public,
            "Member" => EventType::Member,
            "Gollum" => EventType::Gollum,
            _ => EventType::Other,
        }
    }
}

impl From<String> for EventType {
    fn from(s: String) -> Self {
        EventType::from(s.as_str())
    }
}

impl From<EventType> for String {
    fn from(kind: EventType) -> Self {
        kind.as_str().to_string()
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(rename = "type", deserialize_with = "null_as_default")]
    pub kind: EventType,
    #[serde(deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "null_as_default")]
    pub repo: EventRepo,
    pub org: Option<EventOrg>,
    #[serde(deserialize_with = "null_as_default")]
    pub payload: EventPayload,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventRepo {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventOrg {
    #[serde(deserialize_with = "null_as_default")]
    pub login: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventPayload {
    pub size: Option<u32>,
    #[serde(deserialize_with = "lenient_vec")]
    pub commits: Vec<PushCommit>,
    pub action: Option<String>,
    pub ref_type: Option<String>,
    pub issue: Option<PayloadItem>,
    pub pull_request: Option<PayloadItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PushCommit {
    #[serde(deserialize_with = "null_as_default")]
    pub sha: String,
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadItem {
    pub title: Option<String>,
}

impl Event {
    pub fn new(kind: EventType, repo: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            kind,
            created_at: Some(created_at),
            repo: EventRepo {
                name: repo.to_string(),
            },
            ..Default::default()
        }
    }

    pub fn org_login(&self) -> Option<&str> {
        self.org
            .as_ref()
            .map(|org| org.login.as_str())
            .filter(|login| !login.is_empty())
    }

    /// Number of commits a push carried. `size` is authoritative when present since the
    /// API caps the embedded `commits` list at 20.
    pub fn commit_count(&self) -> u32 {
        self.payload
            .size
            .unwrap_or(self.payload.commits.len() as u32)
    }

    pub fn commit_messages(&self) -> impl Iterator<Item = &str> {
        self.payload.commits.iter().map(|c| c.message.as_str())
    }

    pub fn creates_repository(&self) -> bool {
        self.kind == EventType::Create && self.payload.ref_type.as_deref() == Some("repository")
    }
}
