//! Vim-style modal keyboard dispatch for keynav
//!
//! Key events go in, host messages (`scroll-top`, `command:open x`, ...)
//! come out through an [`Ipc`] channel.

mod chord;
mod ipc;
mod key;
mod message;
mod modal;
mod timer;

pub use chord::{ChordBuffer, ChordTable, CHORD_TIMEOUT};
pub use ipc::{Ipc, IpcError};
pub use key::{key_name, KeyToken, CONTROL_PREFIX};
pub use message::{Message, COMMAND_PREFIX};
pub use modal::{Dispatcher, Disposition, Mode};
pub use timer::{Clock, DecayTimer, ManualClock, SystemClock};
