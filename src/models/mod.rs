//! Command and reply models for the cache shell
//!
//! This module defines the commands accepted on input lines and the DTOs
//! serialized as JSON reply lines.

pub mod command;
pub mod replies;

// Re-export commonly used types
pub use command::{Command, CommandError};
pub use replies::{
    DeleteReply, ErrorReply, GetReply, KeysReply, MessageReply, SetReply, StatsReply,
};
