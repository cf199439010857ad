use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ClientError, Result};

pub const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    #[default]
    Assistant,
    #[serde(other)]
    Other,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::System => "system",
            Self::User => "user",
            Self::Assistant => "assistant",
            Self::Other => "other",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: Role,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    pub fn new(model: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            messages: vec![ChatMessage::system(SYSTEM_PROMPT), ChatMessage::user(prompt)],
        }
    }

    pub fn to_body(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(ClientError::Serialize)
    }
}

/// Decoded chat completion. Every field defaults when the service omits it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChatResponse {
    #[serde(deserialize_with = "null_as_default")]
    pub id: String,
    #[serde(deserialize_with = "null_as_default")]
    pub object: String,
    #[serde(deserialize_with = "null_as_default")]
    pub created: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub model: String,
    #[serde(deserialize_with = "null_as_default")]
    pub system_fingerprint: String,
    #[serde(deserialize_with = "null_as_default")]
    pub choices: Vec<Choice>,
    #[serde(deserialize_with = "null_as_default")]
    pub usage: Usage,
}

impl ChatResponse {
    pub fn first_choice(&self) -> Result<&Choice> {
        self.choices.first().ok_or(ClientError::NoChoices)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Choice {
    #[serde(deserialize_with = "null_as_default")]
    pub index: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub message: ChatMessage,
    #[serde(deserialize_with = "null_as_default")]
    pub finish_reason: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Usage {
    #[serde(deserialize_with = "null_as_default")]
    pub prompt_tokens: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub completion_tokens: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub total_tokens: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::{ChatMessage, ChatRequest, ChatResponse, Role, SYSTEM_PROMPT, Usage};
    use crate::error::ClientError;

    #[test]
    fn request_carries_system_then_user_message() {
        let request = ChatRequest::new("gpt-4o-mini", "why is the sky blue?");
        let body: Value =
            serde_json::from_slice(&request.to_body().expect("serialize")).expect("valid json");

        assert_eq!(
            body,
            json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": SYSTEM_PROMPT},
                    {"role": "user", "content": "why is the sky blue?"}
                ]
            })
        );
    }

    #[test]
    fn response_ignores_unknown_fields_and_defaults_missing_ones() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"model":"gpt-x","choices":[{"message":{"content":"hi"},"logprobs":null}],"extra":1}"#,
        )
        .expect("lenient decode");

        assert_eq!(parsed.id, "");
        assert_eq!(parsed.created, 0);
        assert_eq!(parsed.usage.total_tokens, 0);
        let choice = parsed.first_choice().expect("one choice");
        assert_eq!(choice.message.role, Role::Assistant);
        assert_eq!(choice.message.content, "hi");
        assert_eq!(choice.finish_reason, "");
    }

    #[test]
    fn null_content_decodes_as_empty_text() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"index":0,"message":{"role":"assistant","content":null},"finish_reason":null}]}"#,
        )
        .expect("null content should decode");
        assert_eq!(parsed.first_choice().unwrap().message.content, "");
    }

    #[test]
    fn first_choice_on_empty_choices_is_named_failure() {
        let parsed: ChatResponse =
            serde_json::from_str(r#"{"choices":[],"usage":{"total_tokens":3}}"#).unwrap();
        assert!(matches!(
            parsed.first_choice(),
            Err(ClientError::NoChoices)
        ));
    }

    #[test]
    fn unknown_role_decodes_as_other() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"tool","content":"x"}}]}"#,
        )
        .expect("unknown role should decode");
        let message = &parsed.first_choice().unwrap().message;
        assert_eq!(message.role, Role::Other);
        assert_eq!(message.content, "x");
    }

    #[test]
    fn null_numbers_and_role_decode_as_zero_values() {
        let parsed: ChatResponse = serde_json::from_str(
            r#"{"created":null,"choices":[{"index":null,"message":{"role":null,"content":"still here"}}],
                "usage":{"prompt_tokens":null,"completion_tokens":null,"total_tokens":7}}"#,
        )
        .expect("nulls should decode");

        assert_eq!(parsed.created, 0);
        assert_eq!(
            parsed.usage,
            Usage {
                prompt_tokens: 0,
                completion_tokens: 0,
                total_tokens: 7,
            }
        );
        let choice = parsed.first_choice().expect("one choice");
        assert_eq!(choice.index, 0);
        assert_eq!(choice.message.role, Role::Assistant);
        assert_eq!(choice.message.content, "still here");
    }

    #[test]
    fn null_message_decodes_as_empty_message() {
        let parsed: ChatResponse =
            serde_json::from_str(r#"{"choices":[{"index":0,"message":null}],"usage":null}"#)
                .expect("null message should decode");
        let choice = parsed.first_choice().expect("one choice");
        assert_eq!(choice.message, ChatMessage::default());
        assert_eq!(parsed.usage.total_tokens, 0);
    }
}
