//! User actions a presentation shell forwards to the view controller.

use shared::domain::{parse_nav_target, TopicId};

use crate::error::ControllerError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    GoHome,
    Select(TopicId),
    StartCreate,
    SubmitCreate { title: String, body: String },
    StartUpdate,
    SubmitUpdate { title: String, body: String },
    SetDraftTitle(String),
    SetDraftBody(String),
    /// Submits the open form from its draft.
    SubmitDraft,
    DeleteSelected,
}

impl Action {
    /// Builds a `Select` from raw navigation text such as `"/read/2"`.
    pub fn select_from_nav(raw: &str) -> Result<Self, ControllerError> {
        Ok(Action::Select(parse_nav_target(raw)?))
    }

    pub fn name(&self) -> &'static str {
        match self {
            Action::GoHome => "go_home",
            Action::Select(_) => "select",
            Action::StartCreate => "start_create",
            Action::SubmitCreate { .. } => "submit_create",
            Action::StartUpdate => "start_update",
            Action::SubmitUpdate { .. } => "submit_update",
            Action::SetDraftTitle(_) => "set_draft_title",
            Action::SetDraftBody(_) => "set_draft_body",
            Action::SubmitDraft => "submit_draft",
            Action::DeleteSelected => "delete_selected",
        }
    }
}
