use super::reply::ReplyFrame;
use crate::types::{ChatMessage, MessageState, Sender};
use time::OffsetDateTime;

/// Indices of the pair of entries one submission appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Submission {
    pub text: String,
    pub user_index: usize,
    pub bot_index: usize,
}

/// Messages of the current session, in display order. Entries are only
/// ever appended; bot entries are updated in place by reply frames.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Trims `raw`; when something is left, appends the user entry and
    /// right after it a typing bot placeholder.
    pub fn submit(&mut self, raw: &str) -> Option<Submission> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }

        let user_index = self.messages.len();
        self.messages.push(ChatMessage {
            sender: Sender::User,
            text: text.to_string(),
            state: MessageState::Complete,
            created_at: Some(current_time()),
        });

        let bot_index = self.messages.len();
        self.messages.push(ChatMessage {
            sender: Sender::Bot,
            text: String::new(),
            state: MessageState::Typing,
            created_at: Some(current_time()),
        });

        Some(Submission {
            text: text.to_string(),
            user_index,
            bot_index,
        })
    }

    /// Applies a reply frame to the bot entry at `index`. Frames for user
    /// entries or unknown indices are ignored.
    pub fn apply(&mut self, index: usize, frame: &ReplyFrame) {
        let Some(msg) = self.messages.get_mut(index) else {
            return;
        };
        if msg.sender != Sender::Bot || msg.state == MessageState::Complete {
            return;
        }
        msg.text = frame.text().to_string();
        msg.state = if frame.is_final() {
            MessageState::Complete
        } else {
            MessageState::Revealing
        };
    }
}

fn current_time() -> OffsetDateTime {
    OffsetDateTime::now_utc()
}
