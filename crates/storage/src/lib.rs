use std::{ops::Deref, sync::Arc};

use shared::{
    domain::{Topic, TopicId},
    error::TopicError,
};
use tracing::debug;

/// Immutable view of the store's topics in display order.
///
/// Cloning is cheap. A snapshot never changes after it has been handed out;
/// every store mutation publishes a fresh one, so holders of an older
/// snapshot keep observing the state they were given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicSnapshot {
    topics: Arc<[Topic]>,
}

impl TopicSnapshot {
    fn from_vec(topics: Vec<Topic>) -> Self {
        Self {
            topics: topics.into(),
        }
    }

    pub fn find(&self, id: TopicId) -> Option<&Topic> {
        self.topics.iter().find(|topic| topic.id == id)
    }

    pub fn position(&self, id: TopicId) -> Option<usize> {
        self.topics.iter().position(|topic| topic.id == id)
    }

    pub fn ids(&self) -> Vec<TopicId> {
        self.topics.iter().map(|topic| topic.id).collect()
    }

    /// Returns true when both snapshots share the same backing allocation.
    pub fn ptr_eq(&self, other: &TopicSnapshot) -> bool {
        Arc::ptr_eq(&self.topics, &other.topics)
    }
}

impl Default for TopicSnapshot {
    fn default() -> Self {
        Self::from_vec(Vec::new())
    }
}

impl Deref for TopicSnapshot {
    type Target = [Topic];

    fn deref(&self) -> &Self::Target {
        &self.topics
    }
}

impl<'a> IntoIterator for &'a TopicSnapshot {
    type Item = &'a Topic;
    type IntoIter = std::slice::Iter<'a, Topic>;

    fn into_iter(self) -> Self::IntoIter {
        self.topics.iter()
    }
}

#[derive(Debug, Clone)]
pub struct TopicStore {
    topics: TopicSnapshot,
    next_id: Option<TopicId>,
}

impl Default for TopicStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TopicStore {
    pub fn new() -> Self {
        Self {
            topics: TopicSnapshot::default(),
            next_id: Some(TopicId::FIRST),
        }
    }

    /// Builds a store by creating each `(title, body)` pair in order.
    pub fn with_seed<I, T, B>(seed: I) -> Result<Self, TopicError>
    where
        I: IntoIterator<Item = (T, B)>,
        T: Into<String>,
        B: Into<String>,
    {
        let mut store = Self::new();
        for (title, body) in seed {
            store.create(title, body)?;
        }
        Ok(store)
    }

    pub fn list(&self) -> TopicSnapshot {
        self.topics.clone()
    }

    pub fn find(&self, id: TopicId) -> Result<Topic, TopicError> {
        self.topics
            .find(id)
            .cloned()
            .ok_or(TopicError::NotFound(id))
    }

    pub fn contains(&self, id: TopicId) -> bool {
        self.topics.find(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn first_id(&self) -> Option<TopicId> {
        self.topics.first().map(|topic| topic.id)
    }

    /// The id the next `create` will assign, if any remain.
    pub fn next_id(&self) -> Option<TopicId> {
        self.next_id
    }

    pub fn create(
        &mut self,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Topic, TopicError> {
        let id = self.next_id.ok_or(TopicError::IdsExhausted)?;
        let topic = Topic::new(id, title, body);

        let mut topics = self.topics.to_vec();
        topics.push(topic.clone());
        self.topics = TopicSnapshot::from_vec(topics);
        self.next_id = id.next();

        debug!(topic_id = %id, count = self.topics.len(), "created topic");
        Ok(topic)
    }

    pub fn update(
        &mut self,
        id: TopicId,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<(), TopicError> {
        let position = self.topics.position(id).ok_or(TopicError::NotFound(id))?;

        let mut topics = self.topics.to_vec();
        topics[position] = Topic::new(id, title, body);
        self.topics = TopicSnapshot::from_vec(topics);

        debug!(topic_id = %id, position, "updated topic");
        Ok(())
    }

    pub fn delete(&mut self, id: TopicId) -> Result<(), TopicError> {
        let position = self.topics.position(id).ok_or(TopicError::NotFound(id))?;

        let mut topics = self.topics.to_vec();
        topics.remove(position);
        self.topics = TopicSnapshot::from_vec(topics);

        debug!(topic_id = %id, count = self.topics.len(), "deleted topic");
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
