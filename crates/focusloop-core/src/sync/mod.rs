//! Task synchronization.
//!
//! One relay holds the authoritative mirror of the shared task list; N
//! viewers connect over TCP and exchange newline-delimited JSON messages.
//! Synchronization is snapshot-based: the relay always rebroadcasts the
//! entire list, never a delta, and every accept starts with a snapshot so
//! a reconnecting viewer catches up immediately.

pub mod client;
pub mod protocol;
pub mod relay;

pub use client::RelayClient;
pub use protocol::Message;
pub use relay::Relay;
