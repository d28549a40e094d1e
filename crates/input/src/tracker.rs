//! Held-key tracking for terminal environments.
//!
//! Terminals report key transitions, never "is this key down right now". The
//! tracker rebuilds that from press/repeat/release events. For terminals
//! that do not emit key-release events it falls back to timeouts. A fresh
//! press stays held for `first_repeat_timeout_ms` while the OS repeat delay
//! runs out. Once repeats flow, a key with no press or repeat for
//! `release_timeout_ms` counts as released.

use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use tracing::trace;

use crate::types::{
    Key, DEFAULT_FIRST_REPEAT_TIMEOUT_MS, DEFAULT_KEY_RELEASE_TIMEOUT_MS, MAX_HELD_KEYS,
};

#[derive(Debug, Clone, Copy)]
struct HeldKey {
    key: Key,
    last_seen: Instant,
    /// Set once a second press or a repeat arrived for this hold.
    repeating: bool,
}

/// Tracks which keys are currently down.
#[derive(Debug, Clone)]
pub struct KeyTracker {
    held: ArrayVec<HeldKey, MAX_HELD_KEYS>,
    release_events: bool,
    release_timeout_ms: u32,
    first_repeat_timeout_ms: u32,
}

impl KeyTracker {
    pub fn new() -> Self {
        Self {
            held: ArrayVec::new(),
            release_events: false,
            release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            first_repeat_timeout_ms: DEFAULT_FIRST_REPEAT_TIMEOUT_MS,
        }
    }

    pub fn with_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.release_timeout_ms = timeout_ms;
        self
    }

    pub fn with_first_repeat_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.first_repeat_timeout_ms = timeout_ms;
        self
    }

    pub fn release_timeout_ms(&self) -> u32 {
        self.release_timeout_ms
    }

    pub fn first_repeat_timeout_ms(&self) -> u32 {
        self.first_repeat_timeout_ms
    }

    /// Tell the tracker whether the terminal reports key releases.
    ///
    /// With release events the timeouts are not used.
    pub fn set_release_events(&mut self, enabled: bool) {
        self.release_events = enabled;
    }

    pub fn release_events(&self) -> bool {
        self.release_events
    }

    /// Record a press. Returns `true` when the key went from up to down.
    ///
    /// A press of a key that is still held is an auto-repeat in disguise.
    pub fn handle_press(&mut self, key: Key) -> bool {
        self.handle_press_at(key, Instant::now())
    }

    pub fn handle_press_at(&mut self, key: Key, now: Instant) -> bool {
        self.expire(now);
        if let Some(held) = self.held.iter_mut().find(|h| h.key == key) {
            held.last_seen = now;
            held.repeating = true;
            return false;
        }
        // A full set drops the newest key.
        let _ = self.held.try_push(HeldKey {
            key,
            last_seen: now,
            repeating: false,
        });
        true
    }

    /// Record an auto-repeat. Keeps the key alive, never a transition.
    pub fn handle_repeat(&mut self, key: Key) {
        self.handle_repeat_at(key, Instant::now());
    }

    pub fn handle_repeat_at(&mut self, key: Key, now: Instant) {
        if let Some(held) = self.held.iter_mut().find(|h| h.key == key) {
            held.last_seen = now;
            held.repeating = true;
        } else {
            let _ = self.held.try_push(HeldKey {
                key,
                last_seen: now,
                repeating: true,
            });
        }
    }

    pub fn handle_release(&mut self, key: Key) {
        self.held.retain(|h| h.key != key);
    }

    /// Keys currently down, in table order.
    pub fn pressed(&mut self) -> Vec<Key> {
        self.pressed_at(Instant::now())
    }

    pub fn pressed_at(&mut self, now: Instant) -> Vec<Key> {
        self.expire(now);
        let mut keys: Vec<Key> = self.held.iter().map(|h| h.key).collect();
        keys.sort_unstable();
        keys
    }

    pub fn is_pressed(&self, key: Key) -> bool {
        self.held.iter().any(|h| h.key == key)
    }

    pub fn reset(&mut self) {
        self.held.clear();
    }

    fn expire(&mut self, now: Instant) {
        if self.release_events {
            return;
        }
        let between = Duration::from_millis(self.release_timeout_ms as u64);
        let first = Duration::from_millis(self.first_repeat_timeout_ms as u64).max(between);
        let before = self.held.len();
        self.held.retain(|h| {
            let timeout = if h.repeating { between } else { first };
            now.saturating_duration_since(h.last_seen) <= timeout
        });
        if self.held.len() != before {
            trace!(released = before - self.held.len(), "held keys timed out");
        }
    }
}

impl Default for KeyTracker {
    fn default() -> Self {
        Self::new()
    }
}
