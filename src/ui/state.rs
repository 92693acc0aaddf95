use crate::common::{ApiCommand, ApiEvent, BoardError, HealthStatus, Message, MessageId};

pub const EMPTY_DRAFT_ERROR: &str = "Please enter a message.";
pub const LOAD_FAILED: &str = "Failed to load messages";
pub const SAVE_FAILED: &str = "Failed to save message";
pub const DELETE_FAILED: &str = "Failed to delete message";

/// Local state of the message board.
///
/// Every transition is a method on this one owned value; the ones that need
/// network I/O return the [`ApiCommand`]s to dispatch instead of doing it
/// themselves. The message list is only ever replaced by a fetched snapshot.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    health: HealthStatus,
    backend_version: Option<String>,
    messages: Vec<Message>,
    draft: String,
    error: String,
    /// Sequence of the newest list request issued so far.
    list_seq: u64,
}

impl BoardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn health(&self) -> HealthStatus {
        self.health
    }

    pub fn backend_version(&self) -> Option<&str> {
        self.backend_version.as_deref()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    /// Binding for the compose text field.
    pub fn draft_mut(&mut self) -> &mut String {
        &mut self.draft
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    /// First render: health and message list are requested together.
    pub fn initialize(&mut self) -> Vec<ApiCommand> {
        self.health = HealthStatus::Checking;
        vec![ApiCommand::CheckHealth, self.reload()]
    }

    /// Issue a fresh list request; older in-flight responses become stale.
    pub fn reload(&mut self) -> ApiCommand {
        self.list_seq += 1;
        ApiCommand::LoadMessages { seq: self.list_seq }
    }

    pub fn set_health(&mut self, health: HealthStatus) {
        self.health = health;
    }

    /// Replace the list with the snapshot of list request `seq`. Returns
    /// `false` when a newer request has already been issued.
    pub fn set_messages(&mut self, seq: u64, messages: Vec<Message>) -> bool {
        if self.is_stale(seq) {
            return false;
        }
        self.messages = messages;
        true
    }

    pub fn set_draft(&mut self, draft: impl Into<String>) {
        self.draft = draft.into();
    }

    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = error.into();
    }

    pub fn clear_error(&mut self) {
        self.error.clear();
    }

    /// Validate the draft and, when it has content, request its creation.
    /// The raw draft is sent; only the emptiness check trims.
    pub fn submit(&mut self) -> Option<ApiCommand> {
        if self.draft.trim().is_empty() {
            self.set_error(BoardError::Validation(EMPTY_DRAFT_ERROR.to_string()).to_string());
            return None;
        }

        Some(ApiCommand::CreateMessage {
            content: self.draft.clone(),
        })
    }

    pub fn delete(&self, id: MessageId) -> ApiCommand {
        ApiCommand::DeleteMessage { id }
    }

    /// Fold a worker event into the state, returning follow-up commands.
    pub fn apply(&mut self, event: ApiEvent) -> Vec<ApiCommand> {
        match event {
            ApiEvent::HealthChecked(Ok(report)) => {
                self.health = report.status();
                self.backend_version = report.version;
                Vec::new()
            }
            ApiEvent::HealthChecked(Err(err)) => {
                log::warn!("Health check failed: {err}");
                self.health = HealthStatus::Down;
                self.backend_version = None;
                Vec::new()
            }
            ApiEvent::MessagesLoaded { seq, result } => {
                if self.is_stale(seq) {
                    log::debug!(
                        "Dropping stale message list #{seq} (latest is #{})",
                        self.list_seq
                    );
                    return Vec::new();
                }
                match result {
                    Ok(messages) => {
                        self.set_messages(seq, messages);
                    }
                    Err(err) => {
                        log::warn!("Loading messages failed: {err}");
                        self.set_error(err.user_message(LOAD_FAILED));
                    }
                }
                Vec::new()
            }
            ApiEvent::MessageCreated(Ok(())) => {
                self.draft.clear();
                self.clear_error();
                vec![self.reload()]
            }
            ApiEvent::MessageCreated(Err(err)) => {
                log::warn!("Saving message failed: {err}");
                self.set_error(err.user_message(SAVE_FAILED));
                Vec::new()
            }
            ApiEvent::MessageDeleted { result: Ok(()), .. } => {
                self.clear_error();
                vec![self.reload()]
            }
            ApiEvent::MessageDeleted { id, result: Err(err) } => {
                log::warn!("Deleting message {id} failed: {err}");
                self.set_error(err.user_message_with_body(DELETE_FAILED));
                Vec::new()
            }
        }
    }

    fn is_stale(&self, seq: u64) -> bool {
        seq < self.list_seq
    }
}
