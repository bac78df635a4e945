//! Shared message types scanned by the filter.
//!
//! These mirror the chat-completion wire shapes used by LLM providers:
//! a message's `content` is either plain text or an ordered list of typed
//! parts, and assistant messages may carry tool calls whose function
//! arguments are JSON-encoded strings. The filter only ever reads the
//! textual surface of these records — see [`crate::extract`].

use serde::{Deserialize, Serialize};

/// Conversation participant role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// System message.
    System,
    /// Human user message.
    User,
    /// Assistant (LLM) message.
    Assistant,
    /// Tool result (used after a tool call).
    Tool,
}

/// A message in a conversation with an LLM.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The role of the message author.
    pub role: Role,
    /// Message content — plain text or structured parts.
    pub content: MessageContent,
    /// Tool calls requested by this message, if any.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tool_calls: Vec<ToolCall>,
}

impl ChatMessage {
    /// Build a plain-text message with no tool calls.
    pub fn text(role: Role, text: impl Into<String>) -> Self {
        Self {
            role,
            content: MessageContent::Text(text.into()),
            tool_calls: Vec::new(),
        }
    }
}

/// The content of a message — text or structured parts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    /// Plain text content.
    Text(String),
    /// Structured content blocks.
    Parts(Vec<ContentPart>),
}

/// A single structured content part.
///
/// Only [`ContentPart::Text`] contributes to the filter's scan input;
/// other part types carry no scannable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    /// Plain text.
    Text {
        /// The text content.
        text: String,
    },
    /// Image reference (URL or data URI). Not scanned.
    Image {
        /// Image location.
        url: String,
    },
}

/// A tool invocation requested by the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolCall {
    /// Unique call identifier.
    pub id: String,
    /// The function being invoked.
    pub function: FunctionCall,
}

/// The function half of a tool call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionCall {
    /// Tool name.
    pub name: String,
    /// JSON-encoded argument string, scanned verbatim.
    pub arguments: String,
}
