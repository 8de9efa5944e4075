//! Host side of the message channel
//!
//! Stands in for the page surface: it receives payloads and echoes them
//! above a status line instead of navigating anything.

use std::io::{self, Write};

use crossbeam_channel::Receiver;
use crossterm::{
    cursor::MoveToColumn,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

pub struct EchoHost<W: Write> {
    messages: Receiver<String>,
    out: W,
    received: usize,
}

impl<W: Write> EchoHost<W> {
    pub fn new(messages: Receiver<String>, out: W) -> Self {
        Self {
            messages,
            out,
            received: 0,
        }
    }

    /// Number of payloads seen so far
    pub fn received(&self) -> usize {
        self.received
    }

    /// Echo every pending payload, then redraw the status line
    pub fn drain(&mut self, status: &str) -> io::Result<()> {
        while let Ok(payload) = self.messages.try_recv() {
            tracing::info!(%payload, "host received");
            self.received += 1;
            queue!(
                self.out,
                MoveToColumn(0),
                Clear(ClearType::CurrentLine),
                Print(format!("-> {payload}\r\n"))
            )?;
        }

        queue!(
            self.out,
            MoveToColumn(0),
            Clear(ClearType::CurrentLine),
            Print(status)
        )?;
        self.out.flush()
    }
}
