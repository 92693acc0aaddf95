use std::sync::Arc;

use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent};

use super::api::BoardApi;

/// Owns the API client and turns UI commands into events.
///
/// Each command runs on its own task, so a slow list request never holds up a
/// health check or a delete. Responses may therefore come back out of order.
pub struct ApiWorker<A> {
    api: Arc<A>,
    event_sender: mpsc::Sender<ApiEvent>,
    command_receiver: mpsc::Receiver<ApiCommand>,
}

impl<A: BoardApi + 'static> ApiWorker<A> {
    pub fn new(
        api: A,
        event_sender: mpsc::Sender<ApiEvent>,
        command_receiver: mpsc::Receiver<ApiCommand>,
    ) -> Self {
        Self {
            api: Arc::new(api),
            event_sender,
            command_receiver,
        }
    }

    /// Runs until every command sender has been dropped.
    pub async fn run(mut self) {
        log::info!("API worker started");

        while let Some(command) = self.command_receiver.recv().await {
            let api = Arc::clone(&self.api);
            let event_sender = self.event_sender.clone();

            tokio::spawn(async move {
                let event = execute(api.as_ref(), command).await;
                if let Err(err) = event_sender.send(event).await {
                    log::warn!("Failed to deliver API event to UI: {err}");
                }
            });
        }

        log::info!("API worker stopped");
    }
}

/// Perform one command against `api`. Never fails: errors travel inside the
/// returned event.
pub async fn execute<A: BoardApi + ?Sized>(api: &A, command: ApiCommand) -> ApiEvent {
    log::debug!("Executing {command:?}");

    match command {
        ApiCommand::CheckHealth => ApiEvent::HealthChecked(api.health().await),
        ApiCommand::LoadMessages { seq } => ApiEvent::MessagesLoaded {
            seq,
            result: api.list_messages().await,
        },
        ApiCommand::CreateMessage { content } => {
            ApiEvent::MessageCreated(api.create_message(&content).await)
        }
        ApiCommand::DeleteMessage { id } => {
            let result = api.delete_message(&id).await;
            ApiEvent::MessageDeleted { id, result }
        }
    }
}
