pub mod compose_form;
pub mod header;
pub mod message_list;
