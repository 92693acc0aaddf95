//! One-shot board operations for the command line, driven through the same
//! state machine and worker as the desktop UI.

use std::fmt::Write as _;

use crate::common::MessageId;
use crate::network::BoardApi;
use crate::session::BoardSession;
use crate::ui::components::message_list::format_created_at;
use crate::ui::state::BoardState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeadlessAction {
    Health,
    List,
    Post(String),
    Delete(MessageId),
}

/// Load the board like a first render, perform `action`, and wait for every
/// resulting request (including re-fetches) to finish.
pub async fn run<A: BoardApi + 'static>(api: A, action: HeadlessAction) -> BoardState {
    let mut session = BoardSession::spawn(api);
    session.initialize();
    session.settle().await;

    match action {
        HeadlessAction::Health | HeadlessAction::List => {}
        HeadlessAction::Post(content) => {
            session.set_draft(content);
            session.submit();
        }
        HeadlessAction::Delete(id) => session.delete(id),
    }
    session.settle().await;

    session.into_state()
}

/// Plain-text rendering of the board: one line per message, newest first.
pub fn render_messages(state: &BoardState) -> String {
    if state.messages().is_empty() {
        return "No messages yet.\n".to_string();
    }

    let mut out = String::new();
    for message in state.messages() {
        let _ = writeln!(
            out,
            "{}\t{}\t{}",
            message.id,
            format_created_at(&message.created_at),
            message.content
        );
    }
    out
}
