use tokio::sync::mpsc;

use crate::common::{ApiCommand, ApiEvent, MessageId};
use crate::network::{ApiWorker, BoardApi};
use crate::ui::state::BoardState;

/// Capacity of both the command and the event channel.
pub const CHANNEL_CAPACITY: usize = 100;

/// The board state wired to an API worker.
///
/// UI actions go through here so that whatever commands a transition yields
/// are dispatched, and every event coming back is folded into the state.
pub struct BoardSession {
    state: BoardState,
    command_sender: mpsc::Sender<ApiCommand>,
    event_receiver: mpsc::Receiver<ApiEvent>,
    in_flight: usize,
}

impl BoardSession {
    pub fn new(
        command_sender: mpsc::Sender<ApiCommand>,
        event_receiver: mpsc::Receiver<ApiEvent>,
    ) -> Self {
        Self {
            state: BoardState::new(),
            command_sender,
            event_receiver,
            in_flight: 0,
        }
    }

    /// Start an [`ApiWorker`] for `api` on the current tokio runtime and
    /// return a session connected to it.
    pub fn spawn<A: BoardApi + 'static>(api: A) -> Self {
        // UI -> API worker
        let (cmd_tx, cmd_rx) = mpsc::channel(CHANNEL_CAPACITY);
        // API worker -> UI
        let (event_tx, event_rx) = mpsc::channel(CHANNEL_CAPACITY);

        tokio::spawn(ApiWorker::new(api, event_tx, cmd_rx).run());
        Self::new(cmd_tx, event_rx)
    }

    pub fn state(&self) -> &BoardState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut BoardState {
        &mut self.state
    }

    pub fn into_state(self) -> BoardState {
        self.state
    }

    /// Number of dispatched commands whose event has not arrived yet.
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn initialize(&mut self) {
        let commands = self.state.initialize();
        self.dispatch(commands);
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.state.set_draft(draft);
    }

    pub fn submit(&mut self) {
        let command = self.state.submit();
        self.dispatch(command);
    }

    pub fn delete(&mut self, id: MessageId) {
        let command = self.state.delete(id);
        self.dispatch([command]);
    }

    pub fn handle_event(&mut self, event: ApiEvent) {
        self.in_flight = self.in_flight.saturating_sub(1);
        let follow_up = self.state.apply(event);
        self.dispatch(follow_up);
    }

    /// Apply every event that is already waiting. Never blocks; meant to be
    /// called once per frame.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            self.handle_event(event);
            handled += 1;
        }
        handled
    }

    /// Wait until every dispatched command, including follow-up reloads, has
    /// come back.
    pub async fn settle(&mut self) {
        while self.in_flight > 0 {
            match self.event_receiver.recv().await {
                Some(event) => self.handle_event(event),
                None => {
                    log::warn!("API worker went away with {} requests pending", self.in_flight);
                    self.in_flight = 0;
                }
            }
        }
    }

    fn dispatch(&mut self, commands: impl IntoIterator<Item = ApiCommand>) {
        for command in commands {
            match self.command_sender.try_send(command) {
                Ok(()) => self.in_flight += 1,
                Err(err) => {
                    log::warn!("Failed to send command to API worker: {err}");
                    self.state
                        .set_error(format!("Failed to reach the API worker: {err}"));
                }
            }
        }
    }
}
