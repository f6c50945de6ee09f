//! Display-facing values computed from controller and store state.

use serde::Serialize;
use shared::domain::{Topic, TopicId};

/// Uncommitted title/body held by an open form.
///
/// Only lives while its form is shown; leaving the form without submitting
/// drops it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    pub title: String,
    pub body: String,
}

impl EditBuffer {
    pub fn from_topic(topic: &Topic) -> Self {
        Self {
            title: topic.title.clone(),
            body: topic.body.clone(),
        }
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Welcome {
    pub title: String,
    pub body: String,
}

impl Default for Welcome {
    fn default() -> Self {
        Self {
            title: "Welcome".into(),
            body: "Hello, WEB".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Welcome(Welcome),
    Article(Topic),
    CreateForm(EditBuffer),
    UpdateForm { id: TopicId, draft: EditBuffer },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavItem {
    pub id: TopicId,
    pub title: String,
    pub href: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Create,
    Update,
    Delete,
}

impl Control {
    pub fn label(self) -> &'static str {
        match self {
            Control::Create => "create",
            Control::Update => "update",
            Control::Delete => "delete",
        }
    }
}
