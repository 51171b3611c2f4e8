use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::event::Event;
use super::lenient::{lenient_datetime, lenient_vec, null_as_default};
use crate::error::{Error, Result};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    #[serde(deserialize_with = "null_as_default")]
    pub login: String,
    pub name: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub location: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub followers: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub following: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub public_repos: u32,
    #[serde(deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Repository {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub description: Option<String>,
    pub language: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub stargazers_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub forks_count: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub size: u64,
    #[serde(deserialize_with = "null_as_default")]
    pub fork: bool,
    #[serde(deserialize_with = "lenient_datetime")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(deserialize_with = "lenient_datetime")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Repository {
    /// Name and description, lowercased, for keyword matching.
    pub fn searchable_text(&self) -> String {
        let mut text = self.name.to_lowercase();
        if let Some(ref description) = self.description {
            text.push(' ');
            text.push_str(&description.to_lowercase());
        }
        text
    }

    /// Primary language, ignoring empty strings the API occasionally returns.
    pub fn language(&self) -> Option<&str> {
        self.language
            .as_deref()
            .map(str::trim)
            .filter(|l| !l.is_empty())
    }
}

/// Everything the engine needs about one GitHub user, as handed over by the API client.
///
/// Profile fields sit at the top level next to `repositories` and `events`, matching the
/// shape the dashboard assembles after its fetches complete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserData {
    #[serde(flatten)]
    pub profile: Profile,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub repositories: Vec<Repository>,
    #[serde(default, deserialize_with = "lenient_vec")]
    pub events: Vec<Event>,
}

impl UserData {
    pub fn new(profile: Profile, repositories: Vec<Repository>, events: Vec<Event>) -> Self {
        Self {
            profile,
            repositories,
            events,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(Error::InvalidInput(
                "user data must be a JSON object".to_string(),
            ));
        }
        Ok(serde_json::from_value(value)?)
    }

    pub fn from_reader<R: std::io::Read>(mut reader: R) -> Result<Self> {
        let mut json = String::new();
        reader.read_to_string(&mut json)?;
        Self::from_json_str(&json)
    }

    pub fn login(&self) -> &str {
        if self.profile.login.is_empty() {
            "unknown"
        } else {
            &self.profile.login
        }
    }
}
