//! Scan-input extraction from chat messages.
//!
//! Collapses a conversation into the single text blob the scan engine
//! consumes: for each message in order, its textual content first, then
//! that message's tool-call arguments in their given order, everything
//! joined by newlines. Non-textual content parts contribute nothing.

use crate::types::{ChatMessage, ContentPart, MessageContent};

/// Build the concatenated scan blob for a message sequence.
pub fn scan_blob(messages: &[ChatMessage]) -> String {
    let mut pieces: Vec<&str> = Vec::new();

    for message in messages {
        match &message.content {
            MessageContent::Text(text) => pieces.push(text),
            MessageContent::Parts(parts) => {
                for part in parts {
                    if let ContentPart::Text { text } = part {
                        pieces.push(text);
                    }
                }
            }
        }
        for call in &message.tool_calls {
            pieces.push(&call.function.arguments);
        }
    }

    pieces.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FunctionCall, Role, ToolCall};

    fn tool_call(id: &str, arguments: &str) -> ToolCall {
        ToolCall {
            id: id.to_string(),
            function: FunctionCall {
                name: "run".to_string(),
                arguments: arguments.to_string(),
            },
        }
    }

    #[test]
    fn test_empty_conversation_yields_empty_blob() {
        assert_eq!(scan_blob(&[]), "");
    }

    #[test]
    fn test_plain_text_messages_in_order() {
        let messages = vec![
            ChatMessage::text(Role::User, "first"),
            ChatMessage::text(Role::Assistant, "second"),
        ];
        assert_eq!(scan_blob(&messages), "first\nsecond");
    }

    #[test]
    fn test_only_textual_parts_included() {
        let messages = vec![ChatMessage {
            role: Role::Assistant,
            content: MessageContent::Parts(vec![
                ContentPart::Text {
                    text: "visible".to_string(),
                },
                ContentPart::Image {
                    url: "https://example.com/skip.png".to_string(),
                },
                ContentPart::Text {
                    text: "also visible".to_string(),
                },
            ]),
            tool_calls: Vec::new(),
        }];
        assert_eq!(scan_blob(&messages), "visible\nalso visible");
    }

    #[test]
    fn test_content_precedes_tool_calls_within_message() {
        let messages = vec![ChatMessage {
            role: Role::Assistant,
            content: MessageContent::Text("deploying now".to_string()),
            tool_calls: vec![
                tool_call("call_1", r#"{"env":"prod"}"#),
                tool_call("call_2", r#"{"env":"staging"}"#),
            ],
        }];
        assert_eq!(
            scan_blob(&messages),
            "deploying now\n{\"env\":\"prod\"}\n{\"env\":\"staging\"}"
        );
    }

    #[test]
    fn test_tool_calls_stay_with_their_message() {
        let messages = vec![
            ChatMessage {
                role: Role::Assistant,
                content: MessageContent::Text("a".to_string()),
                tool_calls: vec![tool_call("call_1", "args_a")],
            },
            ChatMessage::text(Role::User, "b"),
        ];
        assert_eq!(scan_blob(&messages), "a\nargs_a\nb");
    }
}
