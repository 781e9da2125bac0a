//! Inbox module

mod api;

pub use api::inbox_email;
