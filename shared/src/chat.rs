use crate::error::{GatewayError, ValidationError};
use crate::gateway::Gateway;
use crate::model::{ChatMessage, ChatReply};

pub const GREETING: &str = "Hello! How can I assist you with your tracking today?";
pub const FAILURE_REPLY: &str = "Sorry, something went wrong.";

/// One chat transcript. Append-only; a message is identified by its index.
///
/// Only the latest user utterance is sent to the server, never the history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    draft: String,
    is_loading: bool,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// A session whose transcript opens with an assistant message.
    pub fn with_greeting(greeting: impl Into<String>) -> Self {
        Self { messages: vec![ChatMessage::assistant(greeting)], ..Self::default() }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
    }

    /// Moves the trimmed draft into the transcript and returns the text to send.
    ///
    /// Refused while a send is in flight or when the draft is blank; the
    /// transcript is left untouched in both cases.
    pub fn begin_send(&mut self) -> Result<String, ValidationError> {
        if self.is_loading {
            return Err(ValidationError::SendInFlight);
        }
        let text = self.draft.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyDraft);
        }

        let text = text.to_string();
        self.messages.push(ChatMessage::user(text.clone()));
        self.draft.clear();
        self.is_loading = true;
        Ok(text)
    }

    /// Appends the assistant's answer. Failures become an apology in the transcript.
    pub fn complete(&mut self, outcome: Result<ChatReply, GatewayError>) {
        if !self.is_loading {
            log::warn!("Ignoring chat reply with no message in flight");
            return;
        }
        let reply = match outcome {
            Ok(ChatReply { reply }) => reply,
            Err(err) => {
                log::error!("Chat request failed: {}", err);
                FAILURE_REPLY.to_string()
            }
        };
        self.messages.push(ChatMessage::assistant(reply));
        self.is_loading = false;
    }

    /// Runs a whole send against `gateway`. Returns whether a request was sent.
    pub async fn send<G: Gateway>(&mut self, gateway: &G) -> bool {
        let Ok(text) = self.begin_send() else {
            return false;
        };
        let outcome = gateway.send_chat(&text).await;
        self.complete(outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::fake::FakeGateway;
    use crate::model::ChatRole;

    #[tokio::test]
    async fn reply_is_appended_after_user_message() {
        let gateway =
            FakeGateway::default().with_chat(Ok(ChatReply { reply: "42 packages today".into() }));
        let mut session = ChatSession::new();
        session.set_draft("  how many packages today?  ");

        assert!(session.send(&gateway).await);

        assert_eq!(gateway.calls(), vec!["send_chat:how many packages today?"]);
        assert_eq!(
            session.messages(),
            &[
                ChatMessage::user("how many packages today?"),
                ChatMessage::assistant("42 packages today"),
            ]
        );
        assert_eq!(session.draft(), "");
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn failure_becomes_an_apology() {
        let gateway = FakeGateway::default().with_chat(Err(GatewayError::Status {
            status: 500,
            body: "boom".into(),
        }));
        let mut session = ChatSession::new();
        session.set_draft("hello");

        session.send(&gateway).await;

        let last = session.messages().last().unwrap();
        assert_eq!(last.role, ChatRole::Assistant);
        assert_eq!(last.content, FAILURE_REPLY);
        assert!(!session.is_loading());
    }

    #[tokio::test]
    async fn blank_draft_is_ignored() {
        let gateway = FakeGateway::default();
        let mut session = ChatSession::new();
        session.set_draft("   ");

        assert!(!session.send(&gateway).await);
        assert!(gateway.calls().is_empty());
        assert!(session.messages().is_empty());
    }

    #[test]
    fn second_send_while_in_flight_is_refused() {
        let mut session = ChatSession::new();
        session.set_draft("first");
        assert_eq!(session.begin_send(), Ok("first".to_string()));

        session.set_draft("second");
        assert_eq!(session.begin_send(), Err(ValidationError::SendInFlight));

        assert_eq!(session.messages(), &[ChatMessage::user("first")]);
        assert_eq!(session.draft(), "second");
    }

    #[test]
    fn sessions_do_not_share_transcripts() {
        let mut sidebar = ChatSession::new();
        let mut floating = ChatSession::with_greeting(GREETING);

        sidebar.set_draft("only in the sidebar");
        sidebar.begin_send().unwrap();
        sidebar.complete(Ok(ChatReply { reply: "ok".into() }));

        assert_eq!(floating.messages(), &[ChatMessage::assistant(GREETING)]);
        assert!(sidebar.messages().iter().all(|m| m.content != GREETING));

        floating.set_draft("only in the widget");
        floating.begin_send().unwrap();
        assert!(sidebar.messages().iter().all(|m| m.content != "only in the widget"));
        assert_eq!(sidebar.messages().len(), 2);
    }

    #[test]
    fn reply_without_pending_send_is_ignored() {
        let mut session = ChatSession::with_greeting(GREETING);
        session.complete(Ok(ChatReply { reply: "unexpected".into() }));
        assert_eq!(session.messages().len(), 1);
    }
}
