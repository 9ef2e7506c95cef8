//! Message processing
//!
//! Runs a message through the TEA update loop, following up chained messages
//! and dispatching any resulting actions.

use std::sync::Arc;

use tokio::sync::mpsc;

use termaid_client::Backend;

use crate::actions::handle_action;
use crate::handler;
use crate::message::Message;
use crate::state::AppState;

/// Process a message through the TEA update function
pub fn process_message<B>(
    state: &mut AppState,
    message: Message,
    msg_tx: &mpsc::Sender<Message>,
    backend: &Arc<B>,
) where
    B: Backend + Sync + 'static,
{
    let mut msg = Some(message);
    while let Some(m) = msg {
        let result = handler::update(state, m);

        if let Some(action) = result.action {
            handle_action(action, msg_tx.clone(), Arc::clone(backend));
        }

        msg = result.message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat_view::GREETING;
    use crate::config::Settings;
    use crate::input_key::InputKey;
    use termaid_client::test_utils::FakeBackend;
    use termaid_client::ExecutionResult;
    use termaid_core::TerminalLine;

    fn type_text(
        state: &mut AppState,
        text: &str,
        tx: &mpsc::Sender<Message>,
        backend: &Arc<FakeBackend>,
    ) {
        for c in text.chars() {
            process_message(state, Message::Key(InputKey::Char(c)), tx, backend);
        }
    }

    /// Feed completions back until nothing is in flight
    async fn settle(
        state: &mut AppState,
        tx: &mpsc::Sender<Message>,
        rx: &mut mpsc::Receiver<Message>,
        backend: &Arc<FakeBackend>,
    ) {
        while state.is_busy() {
            let msg = rx.recv().await.expect("channel closed while busy");
            process_message(state, msg, tx, backend);
        }
    }

    #[tokio::test]
    async fn test_failing_command_flows_into_chat_suggestion() {
        let backend = Arc::new(FakeBackend::new());
        backend.push_execution(ExecutionResult::failure("'foo' is not recognized"));
        backend.push_suggestion("Did you mean 'dir'?");
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new(Settings::default(), "C:\\Users\\dev");

        type_text(&mut state, "foo", &tx, &backend);
        process_message(&mut state, Message::Key(InputKey::Enter), &tx, &backend);
        settle(&mut state, &tx, &mut rx, &backend).await;

        assert_eq!(
            backend.executed(),
            vec![("foo".to_string(), "C:\\Users\\dev".to_string())]
        );
        assert_eq!(backend.analyzed(), vec!["'foo' is not recognized"]);
        assert!(state.terminal.lines()[1].is_error());

        let contents: Vec<&str> = state.chat.messages().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec![GREETING, "Did you mean 'dir'?"]);
    }

    #[tokio::test]
    async fn test_cd_then_command_uses_new_cwd() {
        let backend = Arc::new(FakeBackend::new());
        backend.push_execution(ExecutionResult::success("").with_cwd("/home/dev/src"));
        backend.push_execution(ExecutionResult::success("main.rs"));
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new(Settings::default(), "/home/dev");

        type_text(&mut state, "cd src", &tx, &backend);
        process_message(&mut state, Message::SubmitCommand, &tx, &backend);
        settle(&mut state, &tx, &mut rx, &backend).await;

        type_text(&mut state, "ls", &tx, &backend);
        process_message(&mut state, Message::SubmitCommand, &tx, &backend);
        settle(&mut state, &tx, &mut rx, &backend).await;

        assert_eq!(state.cwd, "/home/dev/src");
        assert_eq!(backend.executed()[1], ("ls".to_string(), "/home/dev/src".to_string()));
        assert!(matches!(
            &state.terminal.lines()[2],
            TerminalLine::Command { prompt, .. } if prompt == "/home/dev/src>"
        ));
    }

    #[tokio::test]
    async fn test_chat_with_backend_down_apologizes() {
        let backend = Arc::new(FakeBackend::new());
        backend.push_analysis_failure("connection refused");
        let (tx, mut rx) = mpsc::channel(16);
        let mut state = AppState::new(Settings::default(), "/");

        process_message(&mut state, Message::ToggleFocus, &tx, &backend);
        type_text(&mut state, "help", &tx, &backend);
        process_message(&mut state, Message::Key(InputKey::Enter), &tx, &backend);
        assert!(state.chat.has_pending());
        settle(&mut state, &tx, &mut rx, &backend).await;

        assert_eq!(
            state.chat.last().unwrap().content,
            "Sorry, I couldn't process your message. Please check if the backend is running."
        );
    }
}
