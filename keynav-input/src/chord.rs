//! Multi-key chord buffer and the chord table

use std::time::{Duration, Instant};

use crate::key::KeyToken;
use crate::message::Message;
use crate::timer::DecayTimer;

/// Delay after which an incomplete chord is abandoned
pub const CHORD_TIMEOUT: Duration = Duration::from_millis(500);

/// Normal-mode chords, matched against the whole buffer
const NORMAL_CHORDS: &[(&[&str], Message)] = &[
    (&["g", "g"], Message::ScrollTop),
    (&["g", "G"], Message::ScrollBottom),
    (&["C-d"], Message::ScrollHalfDown),
    (&["C-u"], Message::ScrollHalfUp),
    (&["g", "o"], Message::ShowUrl),
    (&["u", "y"], Message::CopyUrl),
    (&["u", "p"], Message::PasteUrl),
];

/// Exact-match table from token sequences to messages
#[derive(Debug, Clone, Copy)]
pub struct ChordTable {
    entries: &'static [(&'static [&'static str], Message)],
}

impl ChordTable {
    pub fn normal() -> Self {
        Self {
            entries: NORMAL_CHORDS,
        }
    }

    /// Message bound to exactly this sequence; prefixes never match
    pub fn lookup(&self, tokens: &[KeyToken]) -> Option<Message> {
        self.entries
            .iter()
            .find(|(sequence, _)| {
                sequence.len() == tokens.len()
                    && tokens.iter().zip(sequence.iter()).all(|(t, s)| t == s)
            })
            .map(|(_, message)| message.clone())
    }
}

impl Default for ChordTable {
    fn default() -> Self {
        Self::normal()
    }
}

/// Pending key tokens plus the decay timer guarding them
///
/// The timer is armed exactly while the buffer holds tokens.
#[derive(Debug, Clone)]
pub struct ChordBuffer {
    tokens: Vec<KeyToken>,
    decay: DecayTimer,
}

impl ChordBuffer {
    pub fn new(timeout: Duration) -> Self {
        Self {
            tokens: Vec::with_capacity(4),
            decay: DecayTimer::new(timeout),
        }
    }

    /// Append a token and restart the decay window
    pub fn push(&mut self, token: KeyToken, now: Instant) {
        self.tokens.push(token);
        self.decay.arm(now);
        tracing::trace!(chord = %self.joined(), "chord buffer");
    }

    /// Drop all tokens and cancel the decay
    pub fn clear(&mut self) {
        self.tokens.clear();
        self.decay.cancel();
    }

    /// Clear the buffer if its decay is due; returns true when it decayed
    pub fn expire(&mut self, now: Instant) -> bool {
        if self.decay.fire_if_due(now) {
            tracing::trace!(chord = %self.joined(), "chord decayed");
            self.tokens.clear();
            true
        } else {
            false
        }
    }

    pub fn tokens(&self) -> &[KeyToken] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Canonical joined form, e.g. `gg` or `C-d`
    pub fn joined(&self) -> String {
        self.tokens.iter().map(KeyToken::as_str).collect()
    }

    pub fn timeout(&self) -> Duration {
        self.decay.delay()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.decay.deadline()
    }

    pub fn time_until_decay(&self, now: Instant) -> Option<Duration> {
        self.decay.remaining(now)
    }
}

impl Default for ChordBuffer {
    fn default() -> Self {
        Self::new(CHORD_TIMEOUT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{Clock, ManualClock};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn token(c: char) -> KeyToken {
        KeyToken::from_event(&KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE))
    }

    fn ctrl(c: char) -> KeyToken {
        KeyToken::from_event(&KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    #[test]
    fn test_lookup_exact_sequences() {
        let table = ChordTable::normal();
        assert_eq!(table.lookup(&[token('g'), token('g')]), Some(Message::ScrollTop));
        assert_eq!(
            table.lookup(&[token('g'), token('G')]),
            Some(Message::ScrollBottom)
        );
        assert_eq!(table.lookup(&[ctrl('d')]), Some(Message::ScrollHalfDown));
        assert_eq!(table.lookup(&[ctrl('u')]), Some(Message::ScrollHalfUp));
        assert_eq!(table.lookup(&[token('u'), token('y')]), Some(Message::CopyUrl));
    }

    #[test]
    fn test_prefix_does_not_match() {
        let table = ChordTable::normal();
        assert_eq!(table.lookup(&[token('g')]), None);
        assert_eq!(table.lookup(&[]), None);
    }

    #[test]
    fn test_longer_buffer_does_not_match() {
        let table = ChordTable::normal();
        assert_eq!(table.lookup(&[token('j'), token('g'), token('g')]), None);
        assert_eq!(table.lookup(&[token('g'), token('g'), token('g')]), None);
    }

    #[test]
    fn test_plain_d_is_not_control_d() {
        let table = ChordTable::normal();
        assert_eq!(table.lookup(&[token('d')]), None);
    }

    #[test]
    fn test_push_arms_decay() {
        let clock = ManualClock::new();
        let mut buffer = ChordBuffer::default();
        assert!(buffer.deadline().is_none());

        buffer.push(token('g'), clock.now());
        assert_eq!(buffer.joined(), "g");
        assert_eq!(buffer.deadline(), Some(clock.now() + CHORD_TIMEOUT));
    }

    #[test]
    fn test_expire_after_timeout() {
        let clock = ManualClock::new();
        let mut buffer = ChordBuffer::default();
        buffer.push(token('g'), clock.now());

        clock.advance(Duration::from_millis(300));
        assert!(!buffer.expire(clock.now()));
        assert_eq!(buffer.joined(), "g");

        clock.advance(Duration::from_millis(200));
        assert!(buffer.expire(clock.now()));
        assert!(buffer.is_empty());
        assert!(buffer.deadline().is_none());
    }

    #[test]
    fn test_push_restarts_window() {
        let clock = ManualClock::new();
        let mut buffer = ChordBuffer::default();
        buffer.push(token('u'), clock.now());
        clock.advance(Duration::from_millis(400));
        buffer.push(token('x'), clock.now());
        clock.advance(Duration::from_millis(400));

        assert!(!buffer.expire(clock.now()));
        assert_eq!(buffer.joined(), "ux");
    }

    #[test]
    fn test_clear_cancels_decay() {
        let clock = ManualClock::new();
        let mut buffer = ChordBuffer::new(Duration::from_millis(100));
        buffer.push(ctrl('d'), clock.now());
        assert_eq!(buffer.joined(), "C-d");

        buffer.clear();
        assert!(buffer.is_empty());
        assert!(buffer.deadline().is_none());
        assert_eq!(buffer.time_until_decay(clock.now()), None);
    }
}
