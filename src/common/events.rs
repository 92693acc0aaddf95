use super::error::BoardError;
use super::types::{HealthReport, Message, MessageId};

/// Sự kiện từ API worker gửi lên UI. Mỗi `ApiCommand` sinh đúng một sự kiện.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    HealthChecked(Result<HealthReport, BoardError>),
    MessagesLoaded {
        seq: u64,
        result: Result<Vec<Message>, BoardError>,
    },
    MessageCreated(Result<(), BoardError>),
    MessageDeleted {
        id: MessageId,
        result: Result<(), BoardError>,
    },
}
