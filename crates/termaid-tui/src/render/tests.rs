//! Full-screen render tests

use super::view;
use crate::test_utils::{test_state, TestTerminal};
use termaid_app::{AppState, Focus};
use termaid_core::{ConnectivityStatus, ResultKind, Sender};

fn render_screen(term: &mut TestTerminal, state: &mut AppState) -> String {
    term.draw_with(|frame| view(frame, state));
    term.content()
}

#[test]
fn test_initial_screen() {
    let mut term = TestTerminal::new();
    let mut state = test_state("/home/dev");

    let content = render_screen(&mut term, &mut state);

    assert!(content.contains("termaid"));
    assert!(content.contains("Connecting..."));
    assert!(content.contains("Terminal"));
    assert!(content.contains("AI Assistant"));
    assert!(content.contains("Hello! I'm your CLI AI Assistant."));
    assert!(content.contains("/home/dev>"));
    assert!(content.contains("[Tab] Switch"));
}

#[test]
fn test_transcript_and_chat_render_together() {
    let mut term = TestTerminal::new();
    let mut state = test_state("/home/dev");
    state.connectivity = ConnectivityStatus::Connected;
    state.terminal.append_command("git pus", "/home/dev");
    state
        .terminal
        .append_result(ResultKind::Error, "git: 'pus' is not a git command.");
    state
        .chat
        .append(Sender::Assistant, "Did you mean git push?");

    let content = render_screen(&mut term, &mut state);

    assert!(content.contains("Connected"));
    assert!(content.contains("/home/dev> git pus"));
    assert!(content.contains("git: 'pus' is not a git command."));
    assert!(content.contains("Did you mean git push?"));
}

#[test]
fn test_cursor_follows_terminal_input() {
    let mut term = TestTerminal::new();
    let mut state = test_state("/home/dev");
    state.command_input.set("ls");

    render_screen(&mut term, &mut state);

    // pane border + "/home/dev>" + space + "ls"
    assert_eq!(term.cursor(), (1 + 10 + 1 + 2, 4));
}

#[test]
fn test_cursor_follows_chat_input() {
    let mut term = TestTerminal::new();
    let mut state = test_state("/home/dev");
    state.focus = Focus::Chat;

    render_screen(&mut term, &mut state);

    // chat pane starts at 60% of 100 columns; input row sits above the bottom border
    assert_eq!(term.cursor(), (60 + 1 + 2, 27));
}

#[test]
fn test_running_commands_in_footer() {
    let mut term = TestTerminal::new();
    let mut state = test_state("/");
    state.pending_commands = 3;

    let content = render_screen(&mut term, &mut state);

    assert!(content.contains("3 running"));
}

#[test]
fn test_narrow_screen_stacks_panes() {
    let mut term = TestTerminal::with_size(60, 30);
    let mut state = test_state("/srv");

    render_screen(&mut term, &mut state);

    assert!(term.line_contains(3, "Terminal"));
    assert!(!term.line_contains(3, "AI Assistant"));
    assert!(term.buffer_contains("AI Assistant"));
}

#[test]
fn test_scroll_state_records_viewport() {
    let mut term = TestTerminal::new();
    let mut state = test_state("/");
    for i in 0..100 {
        state.terminal.append_result(ResultKind::Output, format!("{i}"));
    }

    render_screen(&mut term, &mut state);

    assert_eq!(state.terminal.scroll.total_lines, 101);
    assert_eq!(state.terminal.scroll.visible_lines, 24);
    assert!(state.terminal.scroll.auto_scroll);
}
