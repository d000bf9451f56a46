//! Floating chat widget for the Tether workspace front-end.
//!
//! Builds the widget state object on top of `tether-core`: the
//! open/closed state machine, the message log view with sender-relative
//! bubble alignment, the composer, the advisory connection-liveness
//! flag, and the drag coordination that keeps the trigger button and
//! the panel tethered.

pub mod chat;
pub mod message;

pub use chat::{ChatEffect, ChatWidget, STALL_TIMEOUT};
pub use message::{ChatMessage, MessageAlignment, MessageLog, Sender};
