use chrono::{DateTime, Utc};

/// First message shown when the chat widget opens.
pub const GREETING: &str =
    "Привет! Я Quantum Core. Готов ответить на любые научные вопросы. Что обсудим?";

/// Reply shown when the assistant could not be reached.
pub const FALLBACK_REPLY: &str = "Ошибка связи с ядром.";

/// Reply shown when the assistant answered with no text.
pub const EMPTY_REPLY: &str = "Ошибка данных.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub text: String,
    pub sent_at: DateTime<Utc>,
}

/// Messages exchanged in the chat widget plus the in-flight flag.
///
/// Messages are append-only; earlier turns are displayed but never resent.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatTranscript {
    messages: Vec<ChatMessage>,
    loading: bool,
}

impl ChatTranscript {
    /// New transcript seeded with the greeting.
    #[must_use]
    pub fn new(started_at: DateTime<Utc>) -> Self {
        Self {
            messages: vec![ChatMessage {
                role: ChatRole::Assistant,
                text: GREETING.to_string(),
                sent_at: started_at,
            }],
            loading: false,
        }
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Whether `input` may be sent now: non-blank and nothing in flight.
    #[must_use]
    pub fn can_send(&self, input: &str) -> bool {
        !self.loading && !input.trim().is_empty()
    }

    /// Append the user's message and mark a request as in flight.
    ///
    /// Returns `false` without changes when `can_send` does not hold.
    pub fn begin_request(&mut self, input: &str, at: DateTime<Utc>) -> bool {
        if !self.can_send(input) {
            return false;
        }
        self.messages.push(ChatMessage {
            role: ChatRole::User,
            text: input.to_string(),
            sent_at: at,
        });
        self.loading = true;
        true
    }

    /// Append the assistant's reply and clear the in-flight flag.
    pub fn finish_request(&mut self, reply: impl Into<String>, at: DateTime<Utc>) {
        self.messages.push(ChatMessage {
            role: ChatRole::Assistant,
            text: reply.into(),
            sent_at: at,
        });
        self.loading = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn starts_with_greeting() {
        let transcript = ChatTranscript::new(fixed_now());
        assert_eq!(transcript.messages().len(), 1);
        assert_eq!(transcript.messages()[0].role, ChatRole::Assistant);
        assert_eq!(transcript.messages()[0].text, GREETING);
        assert!(!transcript.is_loading());
    }

    #[test]
    fn blank_input_is_ignored() {
        let mut transcript = ChatTranscript::new(fixed_now());
        assert!(!transcript.begin_request("   ", fixed_now()));
        assert_eq!(transcript.messages().len(), 1);
        assert!(!transcript.is_loading());
    }

    #[test]
    fn second_send_while_loading_is_ignored() {
        let mut transcript = ChatTranscript::new(fixed_now());
        assert!(transcript.begin_request("Что такое энтропия?", fixed_now()));
        assert!(transcript.is_loading());
        assert!(!transcript.begin_request("И ещё?", fixed_now()));
        assert_eq!(transcript.messages().len(), 2);
    }

    #[test]
    fn finish_appends_reply_and_clears_loading() {
        let mut transcript = ChatTranscript::new(fixed_now());
        transcript.begin_request("Привет", fixed_now());
        transcript.finish_request(FALLBACK_REPLY, fixed_now());
        assert!(!transcript.is_loading());
        let texts: Vec<&str> = transcript
            .messages()
            .iter()
            .map(|m| m.text.as_str())
            .collect();
        assert_eq!(texts, vec![GREETING, "Привет", FALLBACK_REPLY]);
    }
}
