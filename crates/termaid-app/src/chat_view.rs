//! Chat pane contents.
//!
//! Placeholders ("Analyzing error...", "Thinking...") are ordinary messages
//! flagged `is_placeholder`, addressed by [`MessageId`] so the completion
//! handler can remove exactly the one it created. Ids are never reused, so a
//! completion arriving after [`ChatView::reset`] removes nothing.

use termaid_core::{ChatMessage, Sender};

use crate::scroll_state::ScrollState;

/// Greeting shown when the chat starts or is cleared
pub const GREETING: &str = "Hello! I'm your CLI AI Assistant. I'll help you fix terminal errors \
and suggest the right commands. Try running a command in the terminal!";

/// Stable handle to a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MessageId(u64);

impl MessageId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// Ordered chat messages plus scroll position
#[derive(Debug, Clone)]
pub struct ChatView {
    messages: Vec<(MessageId, ChatMessage)>,
    next_id: u64,
    pub scroll: ScrollState,
}

impl Default for ChatView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatView {
    /// A chat holding only the assistant greeting
    pub fn new() -> Self {
        let mut view = Self {
            messages: Vec::new(),
            next_id: 0,
            scroll: ScrollState::new(),
        };
        view.append(Sender::Assistant, GREETING);
        view
    }

    fn push(&mut self, message: ChatMessage) -> MessageId {
        let id = MessageId(self.next_id);
        self.next_id += 1;
        self.messages.push((id, message));
        self.scroll.scroll_to_bottom();
        id
    }

    /// Append a finished message
    pub fn append(&mut self, sender: Sender, content: impl Into<String>) -> MessageId {
        self.push(ChatMessage::new(sender, content))
    }

    /// Append a loading placeholder with a caption
    pub fn append_placeholder(&mut self, sender: Sender, caption: impl Into<String>) -> MessageId {
        self.push(ChatMessage::placeholder(sender, caption))
    }

    /// Remove a message by id. Returns whether it was present.
    pub fn remove(&mut self, id: MessageId) -> bool {
        let before = self.messages.len();
        self.messages.retain(|(existing, _)| *existing != id);
        self.messages.len() != before
    }

    /// Clear everything and show the greeting again
    pub fn reset(&mut self) {
        self.messages.clear();
        self.scroll.reset();
        self.append(Sender::Assistant, GREETING);
    }

    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.messages.iter().map(|(_, m)| m)
    }

    /// Messages and scroll state borrowed together for rendering
    pub fn render_parts(&mut self) -> (Vec<&ChatMessage>, &mut ScrollState) {
        let messages = self.messages.iter().map(|(_, m)| m).collect();
        (messages, &mut self.scroll)
    }

    pub fn get(&self, id: MessageId) -> Option<&ChatMessage> {
        self.messages
            .iter()
            .find(|(existing, _)| *existing == id)
            .map(|(_, m)| m)
    }

    /// Whether any placeholder is still waiting on a response
    pub fn has_pending(&self) -> bool {
        self.messages.iter().any(|(_, m)| m.is_placeholder)
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.messages.last().map(|(_, m)| m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chat_shows_greeting() {
        let chat = ChatView::new();
        assert_eq!(chat.len(), 1);
        let greeting = chat.last().unwrap();
        assert_eq!(greeting.sender, Sender::Assistant);
        assert_eq!(greeting.content, GREETING);
        assert!(!chat.has_pending());
    }

    #[test]
    fn test_placeholder_lifecycle() {
        let mut chat = ChatView::new();
        let id = chat.append_placeholder(Sender::Assistant, "Thinking...");
        assert!(chat.has_pending());
        assert!(chat.get(id).unwrap().is_placeholder);

        assert!(chat.remove(id));
        assert!(!chat.has_pending());
        assert!(chat.get(id).is_none());
        assert!(!chat.remove(id));
    }

    #[test]
    fn test_remove_only_targets_one_placeholder() {
        let mut chat = ChatView::new();
        let first = chat.append_placeholder(Sender::Assistant, "Analyzing error...");
        let second = chat.append_placeholder(Sender::Assistant, "Thinking...");

        chat.remove(first);

        assert!(chat.get(second).is_some());
        assert!(chat.has_pending());
    }

    #[test]
    fn test_reset_restores_greeting_and_ids_stay_unique() {
        let mut chat = ChatView::new();
        let before = chat.append(Sender::User, "hello");
        chat.reset();

        assert_eq!(chat.len(), 1);
        assert_eq!(chat.last().unwrap().content, GREETING);

        let after = chat.append(Sender::User, "again");
        assert!(after > before);
        assert!(!chat.remove(before));
    }

    #[test]
    fn test_messages_in_order() {
        let mut chat = ChatView::new();
        chat.append(Sender::User, "q");
        chat.append(Sender::Assistant, "a");

        let contents: Vec<&str> = chat.messages().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, vec![GREETING, "q", "a"]);
    }
}
