use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

use super::LEARNING_FLOOR_MINUTES;

/// A study topic surfaced during learning blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningTopic {
    pub id: Uuid,
    pub title: String,
    /// Suggested block length in minutes, at least five.
    pub minutes: u64,
    #[serde(default)]
    pub link: Option<Url>,
}

impl LearningTopic {
    pub fn new(title: impl Into<String>, minutes: u64, link: Option<Url>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            minutes: minutes.max(LEARNING_FLOOR_MINUTES),
            link,
        }
    }

    /// Launch the topic's reference link in the default browser.
    /// Returns `Ok(false)` when the topic has no link.
    ///
    /// # Errors
    /// Returns an error if the system handler could not be spawned.
    pub fn open_link(&self) -> std::io::Result<bool> {
        match &self.link {
            Some(url) => open::that(url.as_str()).map(|_| true),
            None => Ok(false),
        }
    }
}

/// Round-robin topic rotation.
///
/// The cursor counts fires monotonically and is reduced modulo the list
/// length at read time, so edits to the list never need to touch it:
/// after removals the next read simply lands wherever the modulo says.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearningQueue {
    topics: Vec<LearningTopic>,
    cursor: usize,
}

impl LearningQueue {
    pub fn new(topics: Vec<LearningTopic>, cursor: usize) -> Self {
        Self { topics, cursor }
    }

    /// The topic the next fire would surface, without advancing.
    pub fn peek(&self) -> Option<&LearningTopic> {
        if self.topics.is_empty() {
            return None;
        }
        Some(&self.topics[self.cursor % self.topics.len()])
    }

    /// Take the current topic and move the cursor forward one step.
    pub fn advance(&mut self) -> Option<LearningTopic> {
        let topic = self.peek()?.clone();
        self.cursor = self.cursor.wrapping_add(1);
        Some(topic)
    }

    pub fn push(&mut self, topic: LearningTopic) {
        self.topics.push(topic);
    }

    /// Remove a topic by id. The cursor is left alone.
    pub fn remove(&mut self, id: &Uuid) -> bool {
        let before = self.topics.len();
        self.topics.retain(|t| &t.id != id);
        self.topics.len() != before
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LearningTopic> {
        self.topics.iter()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn topics(&self) -> &[LearningTopic] {
        &self.topics
    }
}
