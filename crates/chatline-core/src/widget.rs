//! The chat widget: message-state/UI synchronization plus the exchange cycle.
//!
//! [`ChatWidget`] owns the conversation log and coordinates the storage,
//! responder, and view collaborators: append message -> persist -> render ->
//! scroll, and the submit/reply cycle with its transient typing indicator.
//! It is generic over the three ports so tests can inject doubles.

use chatline_types::error::{StorageError, WidgetError};
use chatline_types::message::{Message, Sender};
use chatline_types::responder::BotReply;
use tracing::{debug, error};

use crate::log::ConversationLog;
use crate::responder::Responder;
use crate::store::LogStore;
use crate::view::ThreadView;

/// Fixed bot message when the responder answers without a reply.
pub const NO_REPLY_FALLBACK: &str = "Hmm, I don't have a response for that.";

/// Fixed bot message when the exchange fails (transport or HTTP status).
pub const EXCHANGE_FAILED_FALLBACK: &str = "Oops, something went wrong. Try again later.";

/// Fixed bot message appended after a reply that signals high interest.
pub const HIGH_INTEREST_NOTICE: &str =
    "\u{26a1}\u{fe0f} Looks like you're really interested! We'll get back to you soon.";

/// Input-control state. The only transitions are submit (to
/// `AwaitingResponse`) and exchange completion (back to `Idle`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputState {
    Idle,
    AwaitingResponse,
}

/// Maintains the ordered message list, renders it, and exchanges data with
/// the responder service.
///
/// A second submission while one is in flight is physically prevented by
/// the disabled input controls, not queued; the widget itself is driven by
/// a single logical actor.
pub struct ChatWidget<S: LogStore, R: Responder, V: ThreadView> {
    store: S,
    responder: R,
    view: V,
    log: ConversationLog,
    state: InputState,
}

impl<S: LogStore, R: Responder, V: ThreadView> ChatWidget<S, R, V> {
    /// Create a widget with an empty log.
    pub fn new(store: S, responder: R, view: V) -> Self {
        Self {
            store,
            responder,
            view,
            log: ConversationLog::new(),
            state: InputState::Idle,
        }
    }

    /// Current input-control state.
    pub fn state(&self) -> InputState {
        self.state
    }

    /// The in-memory conversation log.
    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// Access the view (used by callers that share it, and by tests).
    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Load the persisted log and replay it into the view.
    ///
    /// A missing or malformed blob yields an empty log. Replayed messages
    /// are rendered in order without re-persisting; bot messages get the
    /// intro render variant.
    pub async fn load_messages(&mut self) -> Result<(), WidgetError> {
        let blob = self.store.get().await?;
        self.log = match blob {
            Some(blob) => ConversationLog::from_blob(&blob),
            None => ConversationLog::new(),
        };
        debug!(count = self.log.len(), "loaded persisted conversation");

        for message in self.log.messages() {
            self.view
                .append_bubble(message, message.sender == Sender::Bot);
        }
        if !self.log.is_empty() {
            self.view.scroll_to_end();
        }
        Ok(())
    }

    /// Render one message bubble and, if `persist`, commit it to the log
    /// and overwrite persisted storage before returning.
    ///
    /// Persistence is all-or-nothing: the message is fully constructed and
    /// appended in memory first, then the whole log is written.
    pub async fn append_message(
        &mut self,
        text: &str,
        sender: Sender,
        persist: bool,
        with_intro: bool,
    ) -> Result<(), WidgetError> {
        let message = Message::now(sender, text);
        self.view.append_bubble(&message, with_intro);
        self.view.scroll_to_end();

        if persist {
            self.log.push(message);
            let blob = self
                .log
                .to_blob()
                .map_err(|e| StorageError::Write(e.to_string()))?;
            self.store.set(&blob).await?;
        }
        Ok(())
    }

    /// Handle one user submission.
    ///
    /// Empty or whitespace-only input is a guarded no-op: no message, no
    /// request. Otherwise the user message is appended (persisted), input is
    /// disabled for the duration of the exchange, and input is re-enabled
    /// and refocused on completion regardless of outcome.
    pub async fn submit(&mut self, input: &str) -> Result<(), WidgetError> {
        let text = input.trim();
        if text.is_empty() {
            return Ok(());
        }

        self.append_message(text, Sender::User, true, false).await?;

        self.state = InputState::AwaitingResponse;
        self.view.set_input_enabled(false);

        let result = self.exchange().await;

        self.state = InputState::Idle;
        self.view.set_input_enabled(true);
        self.view.focus_input();
        result
    }

    /// One request/reply cycle with the responder, bracketed by the typing
    /// placeholder. The request carries every message text so far, newest
    /// last.
    async fn exchange(&mut self) -> Result<(), WidgetError> {
        self.view.show_typing();
        self.view.scroll_to_end();

        let texts = self.log.texts();
        let outcome = self.responder.respond(&texts).await;

        self.view.hide_typing();
        match outcome {
            Ok(BotReply {
                reply: Some(reply),
                high_interest,
            }) => {
                self.append_message(&reply, Sender::Bot, true, true).await?;
                if high_interest {
                    self.append_message(HIGH_INTEREST_NOTICE, Sender::Bot, true, false)
                        .await?;
                }
            }
            Ok(BotReply { reply: None, .. }) => {
                self.append_message(NO_REPLY_FALLBACK, Sender::Bot, true, false)
                    .await?;
            }
            Err(err) => {
                error!(error = %err, "exchange with responder failed");
                self.append_message(EXCHANGE_FAILED_FALLBACK, Sender::Bot, true, false)
                    .await?;
            }
        }
        Ok(())
    }

    /// Empty the rendered thread, the in-memory log, and persisted storage.
    pub async fn clear(&mut self) -> Result<(), WidgetError> {
        self.view.clear_thread();
        self.log.clear();
        self.store.remove().await?;
        self.view.focus_input();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatline_types::error::ResponderError;
    use std::collections::VecDeque;
    use std::sync::{Arc, Mutex};

    /// Storage double: one blob behind a shared cell, so two widgets can
    /// observe the same persisted state across "reloads".
    #[derive(Clone, Default)]
    struct MemoryLogStore {
        blob: Arc<Mutex<Option<String>>>,
    }

    impl MemoryLogStore {
        fn blob(&self) -> Option<String> {
            self.blob.lock().unwrap().clone()
        }
    }

    impl LogStore for MemoryLogStore {
        async fn get(&self) -> Result<Option<String>, StorageError> {
            Ok(self.blob.lock().unwrap().clone())
        }

        async fn set(&self, blob: &str) -> Result<(), StorageError> {
            *self.blob.lock().unwrap() = Some(blob.to_string());
            Ok(())
        }

        async fn remove(&self) -> Result<(), StorageError> {
            *self.blob.lock().unwrap() = None;
            Ok(())
        }
    }

    /// Responder double: scripted outcomes, recorded request payloads.
    #[derive(Clone, Default)]
    struct ScriptedResponder {
        script: Arc<Mutex<VecDeque<Result<BotReply, ResponderError>>>>,
        calls: Arc<Mutex<Vec<Vec<String>>>>,
    }

    impl ScriptedResponder {
        fn push(&self, outcome: Result<BotReply, ResponderError>) {
            self.script.lock().unwrap().push_back(outcome);
        }

        fn calls(&self) -> Vec<Vec<String>> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Responder for ScriptedResponder {
        async fn respond(&self, texts: &[String]) -> Result<BotReply, ResponderError> {
            self.calls.lock().unwrap().push(texts.to_vec());
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(BotReply::default()))
        }
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum ViewEvent {
        Bubble {
            sender: Sender,
            text: String,
            with_intro: bool,
        },
        ShowTyping,
        HideTyping,
        Scroll,
        ClearThread,
        InputEnabled(bool),
        Focus,
    }

    #[derive(Default)]
    struct RecordingView {
        events: Vec<ViewEvent>,
    }

    impl ThreadView for RecordingView {
        fn append_bubble(&mut self, message: &Message, with_intro: bool) {
            self.events.push(ViewEvent::Bubble {
                sender: message.sender,
                text: message.text.clone(),
                with_intro,
            });
        }

        fn show_typing(&mut self) {
            self.events.push(ViewEvent::ShowTyping);
        }

        fn hide_typing(&mut self) {
            self.events.push(ViewEvent::HideTyping);
        }

        fn scroll_to_end(&mut self) {
            self.events.push(ViewEvent::Scroll);
        }

        fn clear_thread(&mut self) {
            self.events.push(ViewEvent::ClearThread);
        }

        fn set_input_enabled(&mut self, enabled: bool) {
            self.events.push(ViewEvent::InputEnabled(enabled));
        }

        fn focus_input(&mut self) {
            self.events.push(ViewEvent::Focus);
        }
    }

    type TestWidget = ChatWidget<MemoryLogStore, ScriptedResponder, RecordingView>;

    fn widget(store: MemoryLogStore, responder: ScriptedResponder) -> TestWidget {
        ChatWidget::new(store, responder, RecordingView::default())
    }

    fn bubbles(view: &RecordingView) -> Vec<(Sender, String, bool)> {
        view.events
            .iter()
            .filter_map(|e| match e {
                ViewEvent::Bubble {
                    sender,
                    text,
                    with_intro,
                } => Some((*sender, text.clone(), *with_intro)),
                _ => None,
            })
            .collect()
    }

    #[tokio::test]
    async fn test_append_then_reload_reproduces_order() {
        let store = MemoryLogStore::default();
        let mut w = widget(store.clone(), ScriptedResponder::default());

        w.append_message("one", Sender::User, true, false).await.unwrap();
        w.append_message("two", Sender::Bot, true, true).await.unwrap();
        w.append_message("three", Sender::User, true, false).await.unwrap();

        let mut reloaded = widget(store, ScriptedResponder::default());
        reloaded.load_messages().await.unwrap();

        let pairs: Vec<(Sender, &str)> = reloaded
            .log()
            .messages()
            .iter()
            .map(|m| (m.sender, m.text.as_str()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                (Sender::User, "one"),
                (Sender::Bot, "two"),
                (Sender::User, "three"),
            ]
        );

        // Replay renders bot messages with the intro variant, user without.
        assert_eq!(
            bubbles(reloaded.view()),
            vec![
                (Sender::User, "one".to_string(), false),
                (Sender::Bot, "two".to_string(), true),
                (Sender::User, "three".to_string(), false),
            ]
        );
    }

    #[tokio::test]
    async fn test_load_without_persisted_state_is_empty() {
        let mut w = widget(MemoryLogStore::default(), ScriptedResponder::default());
        w.load_messages().await.unwrap();
        assert!(w.log().is_empty());
        assert!(bubbles(w.view()).is_empty());
    }

    #[tokio::test]
    async fn test_load_malformed_blob_is_empty() {
        let store = MemoryLogStore::default();
        store.set("{{{ not json").await.unwrap();

        let mut w = widget(store, ScriptedResponder::default());
        w.load_messages().await.unwrap();
        assert!(w.log().is_empty());
    }

    #[tokio::test]
    async fn test_empty_submit_is_a_no_op() {
        let responder = ScriptedResponder::default();
        let mut w = widget(MemoryLogStore::default(), responder.clone());

        w.submit("").await.unwrap();
        w.submit("   \t  ").await.unwrap();

        assert!(w.log().is_empty());
        assert!(responder.calls().is_empty());
        assert!(w.view().events.is_empty());
    }

    #[tokio::test]
    async fn test_reply_with_high_interest_appends_two_bot_messages() {
        let responder = ScriptedResponder::default();
        responder.push(Ok(BotReply {
            reply: Some("Hi".to_string()),
            high_interest: true,
        }));
        let mut w = widget(MemoryLogStore::default(), responder);

        w.submit("hello").await.unwrap();

        assert_eq!(
            bubbles(w.view()),
            vec![
                (Sender::User, "hello".to_string(), false),
                (Sender::Bot, "Hi".to_string(), true),
                (Sender::Bot, HIGH_INTEREST_NOTICE.to_string(), false),
            ]
        );
        assert_eq!(w.log().len(), 3);
    }

    #[tokio::test]
    async fn test_reply_without_interest_appends_one_bot_message() {
        let responder = ScriptedResponder::default();
        responder.push(Ok(BotReply {
            reply: Some("Sure".to_string()),
            high_interest: false,
        }));
        let mut w = widget(MemoryLogStore::default(), responder);

        w.submit("question").await.unwrap();
        let bot: Vec<_> = bubbles(w.view())
            .into_iter()
            .filter(|(s, _, _)| *s == Sender::Bot)
            .collect();
        assert_eq!(bot, vec![(Sender::Bot, "Sure".to_string(), true)]);
    }

    #[tokio::test]
    async fn test_missing_reply_yields_no_reply_fallback() {
        let responder = ScriptedResponder::default();
        responder.push(Ok(BotReply::default()));
        let mut w = widget(MemoryLogStore::default(), responder);

        w.submit("anyone there?").await.unwrap();

        let bot: Vec<_> = bubbles(w.view())
            .into_iter()
            .filter(|(s, _, _)| *s == Sender::Bot)
            .collect();
        assert_eq!(bot, vec![(Sender::Bot, NO_REPLY_FALLBACK.to_string(), false)]);
    }

    #[tokio::test]
    async fn test_failed_exchange_yields_fallback_and_restores_input() {
        let responder = ScriptedResponder::default();
        responder.push(Err(ResponderError::Transport("refused".to_string())));
        let mut w = widget(MemoryLogStore::default(), responder);

        w.submit("hello").await.unwrap();

        let bot: Vec<_> = bubbles(w.view())
            .into_iter()
            .filter(|(s, _, _)| *s == Sender::Bot)
            .collect();
        assert_eq!(
            bot,
            vec![(Sender::Bot, EXCHANGE_FAILED_FALLBACK.to_string(), false)]
        );
        assert_eq!(w.state(), InputState::Idle);

        // Input is disabled for the exchange, re-enabled and refocused after.
        let tail: Vec<_> = w.view().events.iter().rev().take(2).cloned().collect();
        assert_eq!(tail, vec![ViewEvent::Focus, ViewEvent::InputEnabled(true)]);
        assert!(w.view().events.contains(&ViewEvent::InputEnabled(false)));
    }

    #[tokio::test]
    async fn test_http_status_failure_behaves_like_transport_failure() {
        let responder = ScriptedResponder::default();
        responder.push(Err(ResponderError::Status {
            status: 500,
            body: "boom".to_string(),
        }));
        let mut w = widget(MemoryLogStore::default(), responder);

        w.submit("hi").await.unwrap();
        let bot: Vec<_> = bubbles(w.view())
            .into_iter()
            .filter(|(s, _, _)| *s == Sender::Bot)
            .collect();
        assert_eq!(
            bot,
            vec![(Sender::Bot, EXCHANGE_FAILED_FALLBACK.to_string(), false)]
        );
    }

    #[tokio::test]
    async fn test_typing_bracketed_around_exchange() {
        let responder = ScriptedResponder::default();
        responder.push(Ok(BotReply {
            reply: Some("yo".to_string()),
            high_interest: false,
        }));
        let mut w = widget(MemoryLogStore::default(), responder);

        w.submit("hey").await.unwrap();

        let events = &w.view().events;
        let show = events.iter().position(|e| *e == ViewEvent::ShowTyping).unwrap();
        let hide = events.iter().position(|e| *e == ViewEvent::HideTyping).unwrap();
        let bot_bubble = events
            .iter()
            .position(|e| {
                matches!(e, ViewEvent::Bubble { sender: Sender::Bot, .. })
            })
            .unwrap();
        assert!(show < hide);
        assert!(hide < bot_bubble);
    }

    #[tokio::test]
    async fn test_request_carries_all_texts_in_order() {
        let store = MemoryLogStore::default();
        let responder = ScriptedResponder::default();
        responder.push(Ok(BotReply {
            reply: Some("first reply".to_string()),
            high_interest: false,
        }));
        responder.push(Ok(BotReply {
            reply: Some("second reply".to_string()),
            high_interest: false,
        }));
        let mut w = widget(store, responder.clone());

        w.submit("first question").await.unwrap();
        w.submit("second question").await.unwrap();

        let calls = responder.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], vec!["first question".to_string()]);
        assert_eq!(
            calls[1],
            vec![
                "first question".to_string(),
                "first reply".to_string(),
                "second question".to_string(),
            ]
        );
    }

    #[tokio::test]
    async fn test_clear_empties_thread_log_and_storage() {
        let store = MemoryLogStore::default();
        let mut w = widget(store.clone(), ScriptedResponder::default());
        w.append_message("keep me", Sender::User, true, false).await.unwrap();
        assert!(store.blob().is_some());

        w.clear().await.unwrap();

        assert!(w.log().is_empty());
        assert!(store.blob().is_none());
        assert!(w.view().events.contains(&ViewEvent::ClearThread));

        let mut reloaded = widget(store, ScriptedResponder::default());
        reloaded.load_messages().await.unwrap();
        assert!(reloaded.log().is_empty());
    }

    #[tokio::test]
    async fn test_persisted_blob_matches_memory_after_each_append() {
        let store = MemoryLogStore::default();
        let mut w = widget(store.clone(), ScriptedResponder::default());

        for (i, text) in ["a", "b", "c"].iter().enumerate() {
            w.append_message(text, Sender::User, true, false).await.unwrap();
            assert_eq!(store.blob().unwrap(), w.log().to_blob().unwrap());
            assert_eq!(w.log().len(), i + 1);
        }
    }

    #[tokio::test]
    async fn test_unpersisted_append_renders_but_does_not_store() {
        let store = MemoryLogStore::default();
        let mut w = widget(store.clone(), ScriptedResponder::default());

        w.append_message("ephemeral", Sender::Bot, false, true).await.unwrap();

        assert_eq!(bubbles(w.view()).len(), 1);
        assert!(w.log().is_empty());
        assert!(store.blob().is_none());
    }
}
