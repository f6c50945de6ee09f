use shared::{
    domain::{Mode, Topic, TopicId},
    error::TopicError,
};
use storage::{TopicSnapshot, TopicStore};
use tracing::{debug, warn};

pub mod action;
pub mod error;
pub mod view;

pub use action::Action;
pub use error::ControllerError;
pub use view::{Content, Control, EditBuffer, NavItem, Welcome};

/// Drives the topics page: which view is shown, which topic is selected,
/// and the store mutations behind each user action.
///
/// Every action either completes fully (store mutation plus mode change) or
/// fails and leaves all state as it was.
#[derive(Debug, Clone)]
pub struct ViewController {
    store: TopicStore,
    welcome: Welcome,
    mode: Mode,
    selected_id: Option<TopicId>,
    draft: Option<EditBuffer>,
}

impl ViewController {
    pub fn new(store: TopicStore) -> Self {
        Self::with_welcome(store, Welcome::default())
    }

    pub fn with_welcome(store: TopicStore, welcome: Welcome) -> Self {
        Self {
            store,
            welcome,
            mode: Mode::Welcome,
            selected_id: None,
            draft: None,
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn selected_id(&self) -> Option<TopicId> {
        self.selected_id
    }

    pub fn store(&self) -> &TopicStore {
        &self.store
    }

    pub fn topics(&self) -> TopicSnapshot {
        self.store.list()
    }

    pub fn selected_topic(&self) -> Option<Topic> {
        self.selected_id.and_then(|id| self.store.find(id).ok())
    }

    /// The open form's draft in Create or Update mode.
    pub fn draft(&self) -> Option<&EditBuffer> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut EditBuffer> {
        self.draft.as_mut()
    }

    pub fn dispatch(&mut self, action: Action) -> Result<(), ControllerError> {
        let name = action.name();
        debug!(action = name, mode = %self.mode, "dispatching action");

        let result = match action {
            Action::GoHome => {
                self.go_home();
                Ok(())
            }
            Action::Select(id) => self.select(id),
            Action::StartCreate => {
                self.start_create();
                Ok(())
            }
            Action::SubmitCreate { title, body } => self.submit_create(title, body).map(|_| ()),
            Action::StartUpdate => self.start_update(),
            Action::SubmitUpdate { title, body } => self.submit_update(title, body),
            Action::SetDraftTitle(title) => self.edit_draft(name, |draft| draft.set_title(title)),
            Action::SetDraftBody(body) => self.edit_draft(name, |draft| draft.set_body(body)),
            Action::SubmitDraft => self.submit_draft().map(|_| ()),
            Action::DeleteSelected => self.delete_selected().map(|_| ()),
        };

        if let Err(err) = &result {
            warn!(action = name, mode = %self.mode, error = %err, "action rejected");
        }
        result
    }

    pub fn go_home(&mut self) {
        self.enter(Mode::Welcome);
    }

    pub fn select(&mut self, id: TopicId) -> Result<(), ControllerError> {
        if !self.store.contains(id) {
            return Err(TopicError::NotFound(id).into());
        }
        self.selected_id = Some(id);
        self.enter(Mode::Read);
        Ok(())
    }

    pub fn start_create(&mut self) {
        self.enter(Mode::Create);
        self.draft = Some(EditBuffer::default());
    }

    pub fn submit_create(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<TopicId, ControllerError> {
        let topic = self.store.create(title, body)?;
        self.selected_id = Some(topic.id);
        self.enter(Mode::Read);
        Ok(topic.id)
    }

    pub fn start_update(&mut self) -> Result<(), ControllerError> {
        if self.mode != Mode::Read {
            return Err(self.invalid("start_update"));
        }
        let id = self.selected_id.ok_or(ControllerError::NoSelection)?;
        let topic = self.store.find(id)?;

        self.enter(Mode::Update);
        self.draft = Some(EditBuffer::from_topic(&topic));
        Ok(())
    }

    pub fn submit_update(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<(), ControllerError> {
        if !self.mode.requires_selection() {
            return Err(self.invalid("submit_update"));
        }
        let id = self.selected_id.ok_or(ControllerError::NoSelection)?;
        self.store.update(id, title, body)?;
        self.enter(Mode::Read);
        Ok(())
    }

    /// Submits the open form using its draft. Returns the topic shown afterwards.
    pub fn submit_draft(&mut self) -> Result<TopicId, ControllerError> {
        let Some(draft) = self.draft.clone() else {
            return Err(self.invalid("submit_draft"));
        };
        match self.mode {
            Mode::Create => self.submit_create(draft.title, draft.body),
            Mode::Update => {
                self.submit_update(draft.title, draft.body)?;
                self.selected_id.ok_or(ControllerError::NoSelection)
            }
            Mode::Welcome | Mode::Read => Err(self.invalid("submit_draft")),
        }
    }

    /// Deletes the selected topic and returns to Welcome. The selection moves
    /// to the first remaining topic, or is cleared when none remain.
    pub fn delete_selected(&mut self) -> Result<Option<TopicId>, ControllerError> {
        if !self.mode.requires_selection() {
            return Err(self.invalid("delete_selected"));
        }
        let id = self.selected_id.ok_or(ControllerError::NoSelection)?;
        self.store.delete(id)?;

        self.selected_id = self.store.first_id();
        self.enter(Mode::Welcome);
        Ok(self.selected_id)
    }

    pub fn content(&self) -> Content {
        match self.mode {
            Mode::Welcome => Content::Welcome(self.welcome.clone()),
            Mode::Read => match self.selected_topic() {
                Some(topic) => Content::Article(topic),
                None => Content::Welcome(self.welcome.clone()),
            },
            Mode::Create => Content::CreateForm(self.draft.clone().unwrap_or_default()),
            Mode::Update => match (self.selected_id, &self.draft) {
                (Some(id), Some(draft)) => Content::UpdateForm {
                    id,
                    draft: draft.clone(),
                },
                _ => Content::Welcome(self.welcome.clone()),
            },
        }
    }

    pub fn nav(&self) -> Vec<NavItem> {
        let highlighted = if self.mode.requires_selection() {
            self.selected_id
        } else {
            None
        };
        self.store
            .list()
            .iter()
            .map(|topic| NavItem {
                id: topic.id,
                title: topic.title.clone(),
                href: topic.href(),
                selected: highlighted == Some(topic.id),
            })
            .collect()
    }

    pub fn controls(&self) -> Vec<Control> {
        match self.mode {
            Mode::Read => vec![Control::Create, Control::Update, Control::Delete],
            Mode::Welcome | Mode::Create | Mode::Update => vec![Control::Create],
        }
    }

    fn enter(&mut self, mode: Mode) {
        self.draft = None;
        debug!(from = %self.mode, to = %mode, selected = ?self.selected_id, "mode transition");
        self.mode = mode;
    }

    fn edit_draft(
        &mut self,
        action: &'static str,
        edit: impl FnOnce(&mut EditBuffer),
    ) -> Result<(), ControllerError> {
        let rejected = self.invalid(action);
        let draft = self.draft.as_mut().ok_or(rejected)?;
        edit(draft);
        Ok(())
    }

    fn invalid(&self, action: &'static str) -> ControllerError {
        ControllerError::InvalidTransition {
            action,
            mode: self.mode,
        }
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
