//! Canned buyer/seller and support chat.
//!
//! There is no transport: each session is a local message log with a scripted
//! responder. Sending a message schedules one canned reply, considered
//! delivered after a fixed delay. Scheduled replies cannot be cancelled and
//! carry no ordering guarantee beyond "after the triggering send".

use std::collections::VecDeque;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::CHAT_REPLY_DELAY;

// ---------------------------------------------------------------------------
// Message types
// ---------------------------------------------------------------------------

/// Which scripted counterpart a session talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    Seller,
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Seller,
    Support,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: u64,
    pub sender: Sender,
    pub sender_name: String,
    pub content: String,
}

// ---------------------------------------------------------------------------
// ChatSession
// ---------------------------------------------------------------------------

/// One chat dialog, owned by the session that opened it.
///
/// Seeded with the counterpart's greeting. [`send`](Self::send) appends the
/// user's message and queues the canned reply;
/// [`deliver_replies`](Self::deliver_replies) moves queued replies into the
/// log once their delay has passed. The caller owns the clock; under the
/// `async` feature, `send_and_await_reply` sleeps out the delay on the tokio
/// timer before delivering.
#[derive(Debug)]
pub struct ChatSession {
    kind: ChatKind,
    partner_name: String,
    messages: Vec<ChatMessage>,
    scheduled: VecDeque<ChatMessage>,
    next_id: u64,
}

impl ChatSession {
    /// Open a chat with a named seller.
    pub fn with_seller(seller_name: &str) -> Self {
        Self::new(ChatKind::Seller, seller_name)
    }

    /// Open a support chat.
    pub fn with_support() -> Self {
        Self::new(ChatKind::Support, "Support")
    }

    fn new(kind: ChatKind, partner_name: &str) -> Self {
        let mut session = Self {
            kind,
            partner_name: partner_name.to_string(),
            messages: Vec::new(),
            scheduled: VecDeque::new(),
            next_id: 1,
        };
        let greeting = session.partner_message(greeting_text(kind));
        session.messages.push(greeting);
        session
    }

    /// Send a user message and schedule the canned reply.
    ///
    /// Whitespace-only input is ignored. Returns the id of the appended user
    /// message, or `None` if nothing was sent.
    pub fn send(&mut self, content: &str) -> Option<u64> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.messages.push(ChatMessage {
            id,
            sender: Sender::User,
            sender_name: "You".to_string(),
            content: trimmed.to_string(),
        });

        let reply = self.partner_message(reply_text(self.kind));
        self.scheduled.push_back(reply);

        Some(id)
    }

    /// Move every scheduled reply into the log, in scheduling order.
    ///
    /// Returns the number of replies delivered.
    pub fn deliver_replies(&mut self) -> usize {
        let delivered = self.scheduled.len();
        self.messages.extend(self.scheduled.drain(..));
        delivered
    }

    /// Send, wait out the reply delay on the tokio timer, and deliver.
    ///
    /// Returns the delivered reply, or `None` if the input was ignored.
    #[cfg(feature = "async")]
    pub async fn send_and_await_reply(&mut self, content: &str) -> Option<&ChatMessage> {
        self.send(content)?;
        tokio::time::sleep(self.reply_delay()).await;
        self.deliver_replies();
        self.messages.last()
    }

    // -- Read access ---------------------------------------------------------

    pub fn kind(&self) -> ChatKind {
        self.kind
    }

    pub fn partner_name(&self) -> &str {
        &self.partner_name
    }

    /// The delivered messages, oldest first.
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Number of replies scheduled but not yet delivered.
    pub fn pending_replies(&self) -> usize {
        self.scheduled.len()
    }

    /// The fixed delay after which a scheduled reply is due.
    pub fn reply_delay(&self) -> Duration {
        CHAT_REPLY_DELAY
    }

    // -- Private helpers -----------------------------------------------------

    fn partner_message(&mut self, content: &str) -> ChatMessage {
        let id = self.next_id;
        self.next_id += 1;
        ChatMessage {
            id,
            sender: match self.kind {
                ChatKind::Seller => Sender::Seller,
                ChatKind::Support => Sender::Support,
            },
            sender_name: self.partner_name.clone(),
            content: content.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Canned scripts
// ---------------------------------------------------------------------------

fn greeting_text(kind: ChatKind) -> &'static str {
    match kind {
        ChatKind::Seller => "Hello! Happy to answer any questions about this listing.",
        ChatKind::Support => "Welcome to support! How can I help you?",
    }
}

fn reply_text(kind: ChatKind) -> &'static str {
    match kind {
        ChatKind::Seller => "Thanks for your question! I'll get back to you shortly.",
        ChatKind::Support => "Thanks for reaching out! A specialist will look into your issue.",
    }
}
