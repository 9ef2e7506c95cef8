//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every backend call runs on its own task and reports back through the
//! message channel, so several executions and analyses may be in flight at
//! once. Their completions are applied in whatever order they arrive.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use termaid_client::Backend;

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action<B>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, backend: Arc<B>)
where
    B: Backend + Sync + 'static,
{
    match action {
        UpdateAction::ExecuteCommand {
            request_id,
            command,
            cwd,
        } => {
            tokio::spawn(async move {
                let result = backend.execute(&command, &cwd).await;
                debug!("{} finished (error: {})", request_id, result.error);
                send(
                    &msg_tx,
                    Message::CommandCompleted {
                        request_id,
                        command,
                        result,
                    },
                )
                .await;
            });
        }

        UpdateAction::Analyze {
            placeholder,
            origin,
            text,
        } => {
            tokio::spawn(async move {
                let outcome = backend.analyze(&text).await.map_err(|e| e.to_string());
                send(
                    &msg_tx,
                    Message::AnalysisCompleted {
                        placeholder,
                        origin,
                        outcome,
                    },
                )
                .await;
            });
        }

        UpdateAction::ProbeHealth => {
            tokio::spawn(async move {
                let status = backend.check_health().await;
                send(&msg_tx, Message::HealthChecked(status)).await;
            });
        }
    }
}

/// Re-probe `/health` every `interval` until the receiver is dropped.
///
/// The first probe happens after one interval; the start-up probe is issued
/// separately through [`UpdateAction::ProbeHealth`].
pub fn spawn_health_polling<B>(
    backend: Arc<B>,
    msg_tx: mpsc::Sender<Message>,
    interval: Duration,
) -> JoinHandle<()>
where
    B: Backend + Sync + 'static,
{
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);
        // interval() fires immediately; skip that one
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let status = backend.check_health().await;
            if msg_tx.send(Message::HealthChecked(status)).await.is_err() {
                debug!("Health polling stopped: channel closed");
                break;
            }
        }
    })
}

async fn send(msg_tx: &mpsc::Sender<Message>, msg: Message) {
    if let Err(e) = msg_tx.send(msg).await {
        warn!("Dropping completion, channel closed: {}", e);
    }
}
