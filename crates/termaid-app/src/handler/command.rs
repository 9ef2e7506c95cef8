//! Command submission and execution results

use termaid_client::ExecutionResult;
use termaid_core::prelude::*;
use termaid_core::ResultKind;

use crate::history::{HistoryDirection, HistoryStep};
use crate::message::{AnalysisOrigin, RequestId};
use crate::state::AppState;

use super::{chat, UpdateAction, UpdateResult};

/// Whether the command is a directory change (`cd ` prefix, any case)
pub(crate) fn is_cd_command(command: &str) -> bool {
    command
        .get(..3)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("cd "))
}

/// Handle Enter in the terminal input.
///
/// Whitespace-only input does nothing. Otherwise the command is recorded,
/// echoed with the current prompt, and sent with the cwd as it is now.
pub fn handle_submit_command(state: &mut AppState) -> UpdateResult {
    if state.command_input.text().trim().is_empty() {
        return UpdateResult::none();
    }
    let command = state.command_input.take().trim().to_string();

    state.history.push(command.clone());
    state.terminal.append_command(command.clone(), &state.cwd);

    let request_id = state.next_request_id();
    state.pending_commands += 1;
    info!("Executing {} '{}' in {}", request_id, command, state.cwd);

    UpdateResult::action(UpdateAction::ExecuteCommand {
        request_id,
        command,
        cwd: state.cwd.clone(),
    })
}

/// Apply an execution result.
///
/// Results are applied in arrival order; the request id is only used for
/// bookkeeping. Error results trigger an automatic analysis.
pub fn handle_command_completed(
    state: &mut AppState,
    request_id: RequestId,
    command: &str,
    result: ExecutionResult,
) -> UpdateResult {
    state.pending_commands = state.pending_commands.saturating_sub(1);

    if result.error {
        debug!("{} '{}' failed", request_id, command);
        state
            .terminal
            .append_result(ResultKind::Error, result.output.clone());
        return chat::begin_analysis(state, AnalysisOrigin::ErrorOutput, result.output);
    }

    if result.is_clear_screen() {
        debug!("{} requested a clear screen", request_id);
        state.terminal.clear();
    } else {
        state
            .terminal
            .append_result(ResultKind::Output, result.output);
    }

    if is_cd_command(command) {
        if let Some(cwd) = result.cwd {
            info!("Working directory is now {}", cwd);
            state.cwd = cwd;
        }
    }

    UpdateResult::none()
}

/// Recall history into the terminal input
pub fn handle_navigate_history(state: &mut AppState, direction: HistoryDirection) -> UpdateResult {
    match state.history.navigate(direction) {
        HistoryStep::Entry(command) => state.command_input.set(command),
        HistoryStep::Blank => state.command_input.clear(),
        HistoryStep::Empty => {}
    }
    UpdateResult::none()
}
