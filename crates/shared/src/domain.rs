use std::{fmt, num::NonZeroU64, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identifier assigned to a topic when it is created. Always positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct TopicId(NonZeroU64);

impl TopicId {
    pub const FIRST: TopicId = TopicId(NonZeroU64::MIN);

    pub fn new(raw: u64) -> Option<Self> {
        NonZeroU64::new(raw).map(Self)
    }

    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Returns the id that follows this one, or `None` on overflow.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl fmt::Display for TopicId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<TopicId> for u64 {
    fn from(value: TopicId) -> Self {
        value.get()
    }
}

impl TryFrom<u64> for TopicId {
    type Error = ParseTopicIdError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ParseTopicIdError::Zero)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTopicIdError {
    #[error("topic id is empty")]
    Empty,
    #[error("topic id must be positive")]
    Zero,
    #[error("invalid topic id '{0}'")]
    Invalid(String),
}

impl FromStr for TopicId {
    type Err = ParseTopicIdError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ParseTopicIdError::Empty);
        }
        let value = raw
            .parse::<u64>()
            .map_err(|_| ParseTopicIdError::Invalid(raw.to_string()))?;
        Self::try_from(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    pub id: TopicId,
    pub title: String,
    pub body: String,
}

impl Topic {
    pub fn new(id: TopicId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
        }
    }

    /// Link target used by navigation entries.
    pub fn href(&self) -> String {
        read_href(self.id)
    }
}

pub const READ_HREF_PREFIX: &str = "/read/";

pub fn read_href(id: TopicId) -> String {
    format!("{READ_HREF_PREFIX}{id}")
}

/// Parses either a bare id (`"4"`) or a navigation link (`"/read/4"`).
pub fn parse_nav_target(raw: &str) -> Result<TopicId, ParseTopicIdError> {
    let raw = raw.trim();
    let id = raw
        .strip_prefix(READ_HREF_PREFIX)
        .or_else(|| raw.strip_prefix("read/"))
        .unwrap_or(raw);
    id.parse()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    #[default]
    Welcome,
    Read,
    Create,
    Update,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Welcome => "welcome",
            Mode::Read => "read",
            Mode::Create => "create",
            Mode::Update => "update",
        }
    }

    /// Modes whose content is tied to the current selection.
    pub fn requires_selection(self) -> bool {
        matches!(self, Mode::Read | Mode::Update)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(raw: u64) -> TopicId {
        TopicId::new(raw).expect("non-zero id")
    }

    #[test]
    fn parses_positive_ids_and_trims_whitespace() {
        assert_eq!(" 12 ".parse::<TopicId>(), Ok(id(12)));
    }

    #[test]
    fn rejects_zero_empty_and_garbage() {
        assert_eq!("0".parse::<TopicId>(), Err(ParseTopicIdError::Zero));
        assert_eq!("".parse::<TopicId>(), Err(ParseTopicIdError::Empty));
        assert_eq!(
            "-3".parse::<TopicId>(),
            Err(ParseTopicIdError::Invalid("-3".into()))
        );
    }

    #[test]
    fn nav_target_accepts_href_and_bare_id() {
        assert_eq!(parse_nav_target("/read/3"), Ok(id(3)));
        assert_eq!(parse_nav_target("read/3"), Ok(id(3)));
        assert_eq!(parse_nav_target("3"), Ok(id(3)));
        assert!(parse_nav_target("/read/").is_err());
    }

    #[test]
    fn href_round_trips_through_nav_parser() {
        let topic = Topic::new(id(7), "rust", "rust is ...");
        assert_eq!(topic.href(), "/read/7");
        assert_eq!(parse_nav_target(&topic.href()), Ok(topic.id));
    }

    #[test]
    fn topic_id_serializes_as_plain_number() {
        let topic = Topic::new(id(1), "html", "html is ...");
        let json = serde_json::to_string(&topic).expect("serialize");
        assert_eq!(json, r#"{"id":1,"title":"html","body":"html is ..."}"#);
        assert!(serde_json::from_str::<Topic>(r#"{"id":0,"title":"","body":""}"#).is_err());
    }

    #[test]
    fn only_read_and_update_require_selection() {
        assert!(Mode::Read.requires_selection());
        assert!(Mode::Update.requires_selection());
        assert!(!Mode::Welcome.requires_selection());
        assert!(!Mode::Create.requires_selection());
    }
}
