//! # Intent Queue Module
//!
//! Hotkey and pointer-hook callbacks run outside the owner thread. They never
//! touch overlay state directly; they push an [`Intent`] onto a bounded queue
//! that the owner thread drains once per frame.
//!
//! ## Usage
//!
//! ```rust
//! use poolguide_core::intent::{intent_queue, Intent};
//!
//! let (sender, mut receiver) = intent_queue(16);
//!
//! // From a hook callback (any thread)
//! let hook_sender = sender.clone();
//! std::thread::spawn(move || {
//!     let _ = hook_sender.send(Intent::ToggleEditing);
//! })
//! .join()
//! .unwrap();
//!
//! // On the owner thread
//! for intent in receiver.drain() {
//!     assert_eq!(intent, Intent::ToggleEditing);
//! }
//! ```

mod intents;
mod queue;

pub use intents::*;
pub use queue::*;
