use super::types::MessageId;

/// Lệnh UI gửi xuống API worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiCommand {
    /// `GET /api/health`
    CheckHealth,
    /// `GET /api/messages`
    /// - seq: số thứ tự của lần tải, dùng để bỏ các phản hồi cũ
    LoadMessages { seq: u64 },
    /// `POST /api/messages`
    CreateMessage { content: String },
    /// `DELETE /api/messages?id={id}`
    DeleteMessage { id: MessageId },
}
