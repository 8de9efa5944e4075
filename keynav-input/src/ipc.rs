//! Outbound channel to the host

use crossbeam_channel::Sender;
use thiserror::Error;

/// Errors from posting a message to the host
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IpcError {
    #[error("Host channel disconnected, dropped message: {0}")]
    Disconnected(String),
}

/// Message-send primitive toward the host
///
/// Payloads are opaque strings; the host decides what they mean.
pub trait Ipc {
    fn post_message(&self, payload: &str) -> Result<(), IpcError>;
}

impl<T: Ipc + ?Sized> Ipc for &T {
    fn post_message(&self, payload: &str) -> Result<(), IpcError> {
        (**self).post_message(payload)
    }
}

impl Ipc for Sender<String> {
    fn post_message(&self, payload: &str) -> Result<(), IpcError> {
        self.send(payload.to_owned())
            .map_err(|err| IpcError::Disconnected(err.into_inner()))
    }
}
