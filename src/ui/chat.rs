//! # Chat Session
//!
//! The chat modal's state: the message log, the input line and replies
//! waiting for their display delay.
//!
//! Replies are answered from the [`FaqTable`] when they become due, so the
//! session itself holds no knowledge of the table.

use crate::faq::FaqTable;
use crate::ui::widgets::{Panel, Toggle};
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::time::{Duration, Instant};
use tracing::debug;

/// Default delay before a bot reply is shown.
pub const DEFAULT_REPLY_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
    pub sent_at: DateTime<Local>,
}

/// Somewhere chat messages can be shown.
pub trait MessageSurface {
    fn add_message(&mut self, text: &str, sender: Sender);
}

/// Append-only message history.
#[derive(Debug, Clone, Default)]
pub struct ChatLog {
    messages: Vec<ChatMessage>,
}

impl ChatLog {
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

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last()
    }
}

impl MessageSurface for ChatLog {
    fn add_message(&mut self, text: &str, sender: Sender) {
        self.messages.push(ChatMessage {
            text: text.to_string(),
            sender,
            sent_at: Local::now(),
        });
    }
}

#[derive(Debug, Clone)]
struct PendingReply {
    query: String,
    due: Instant,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    pub modal: Toggle,
    pub input: String,
    pub log: ChatLog,
    pending: VecDeque<PendingReply>,
    reply_delay: Duration,
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new(DEFAULT_REPLY_DELAY)
    }
}

impl ChatSession {
    pub fn new(reply_delay: Duration) -> Self {
        Self {
            modal: Toggle::default(),
            input: String::new(),
            log: ChatLog::new(),
            pending: VecDeque::new(),
            reply_delay,
        }
    }

    pub fn is_open(&self) -> bool {
        self.modal.is_active()
    }

    pub fn open(&mut self) {
        self.modal.open();
    }

    pub fn close(&mut self) {
        self.modal.close();
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Send the current input. Blank input is ignored and left in place.
    /// Returns whether a message was sent.
    pub fn submit(&mut self, now: Instant) -> bool {
        let message = self.input.trim().to_string();
        if message.is_empty() {
            return false;
        }

        self.log.add_message(&message, Sender::User);
        self.input.clear();
        debug!("Queued chat reply for {:?}", message);
        self.pending.push_back(PendingReply {
            query: message,
            due: now + self.reply_delay,
        });
        true
    }

    /// Show every reply whose delay has elapsed, oldest first.
    /// Returns the number of replies shown.
    pub fn deliver_due(&mut self, now: Instant, faq: &FaqTable) -> usize {
        let mut delivered = 0;
        while let Some(reply) = self.pending.front() {
            if reply.due > now {
                break;
            }
            let response = faq.respond(Some(&reply.query)).to_string();
            self.log.add_message(&response, Sender::Bot);
            self.pending.pop_front();
            delivered += 1;
        }
        delivered
    }
}
