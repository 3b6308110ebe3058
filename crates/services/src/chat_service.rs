use std::sync::Arc;

use quantum_core::Clock;
use quantum_core::model::{ChatTranscript, EMPTY_REPLY, FALLBACK_REPLY};

use crate::assistant::AssistantClient;
use crate::error::AssistantError;

/// Chat widget backend. Assistant failures never escape: they become reply
/// text in the transcript.
#[derive(Clone)]
pub struct ChatService {
    clock: Clock,
    assistant: Arc<dyn AssistantClient>,
}

impl ChatService {
    #[must_use]
    pub fn new(clock: Clock, assistant: Arc<dyn AssistantClient>) -> Self {
        Self { clock, assistant }
    }

    /// Transcript seeded with the greeting.
    #[must_use]
    pub fn new_transcript(&self) -> ChatTranscript {
        ChatTranscript::new(self.clock.now())
    }

    /// Append the user's message. Returns `false` if nothing was sent.
    pub fn begin(&self, transcript: &mut ChatTranscript, input: &str) -> bool {
        transcript.begin_request(input, self.clock.now())
    }

    /// Ask the assistant and map any failure to a reply string.
    pub async fn reply_to(&self, prompt: &str) -> String {
        match self.assistant.ask(prompt).await {
            Ok(text) => text,
            Err(AssistantError::EmptyResponse) => {
                tracing::warn!("assistant returned no text");
                EMPTY_REPLY.to_string()
            }
            Err(err) => {
                tracing::warn!("assistant request failed: {err}");
                FALLBACK_REPLY.to_string()
            }
        }
    }

    /// Append the assistant's reply and clear the loading flag.
    pub fn finish(&self, transcript: &mut ChatTranscript, reply: String) {
        transcript.finish_request(reply, self.clock.now());
    }

    /// Run one full exchange on an owned transcript.
    pub async fn send(&self, transcript: &mut ChatTranscript, input: &str) -> bool {
        if !self.begin(transcript, input) {
            return false;
        }
        let reply = self.reply_to(input).await;
        self.finish(transcript, reply);
        true
    }
}
