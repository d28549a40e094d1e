//! The seam between the facade and a concrete display/input library.

use std::collections::{BTreeSet, VecDeque};
use std::io;
use std::time::Duration;

use crate::surface::Surface;
use crate::types::{Key, MouseButton, PixelPos, RawEvent};

/// What the facade needs from the underlying graphics/input library.
pub trait Backend {
    /// Make the surface visible.
    fn present(&mut self, surface: &Surface) -> io::Result<()>;

    /// Append every pending input notification to `out`, without blocking.
    fn poll_events(&mut self, out: &mut Vec<RawEvent>) -> io::Result<()>;

    /// Keys held down right now, in any order.
    fn pressed_keys(&mut self) -> Vec<Key>;

    /// Block for frame pacing.
    fn sleep(&mut self, dur: Duration) {
        std::thread::sleep(dur);
    }
}

/// A backend with no display: events are scripted and presents are counted.
///
/// Useful for tests and for driving games without a terminal.
#[derive(Debug, Default)]
pub struct HeadlessBackend {
    pending: VecDeque<RawEvent>,
    held: BTreeSet<Key>,
    presented: Option<Surface>,
    present_count: usize,
    poll_count: usize,
    slept: Vec<Duration>,
}

impl HeadlessBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw event for the next poll.
    pub fn push(&mut self, event: RawEvent) {
        self.pending.push_back(event);
    }

    /// Queue a key-down transition.
    pub fn press(&mut self, key: Key) {
        self.push(RawEvent::KeyDown(key));
    }

    /// Queue a key-up transition.
    pub fn release(&mut self, key: Key) {
        self.push(RawEvent::KeyUp(key));
    }

    /// Queue a mouse-button release at a surface pixel.
    pub fn click(&mut self, button: MouseButton, x: u32, y: u32) {
        self.push(RawEvent::MouseUp {
            button,
            pos: PixelPos::new(x, y),
        });
    }

    pub fn quit(&mut self) {
        self.push(RawEvent::Quit);
    }

    /// Mark a key as held without queueing a transition.
    pub fn hold(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// The most recently presented surface.
    pub fn presented(&self) -> Option<&Surface> {
        self.presented.as_ref()
    }

    pub fn present_count(&self) -> usize {
        self.present_count
    }

    pub fn poll_count(&self) -> usize {
        self.poll_count
    }

    /// Every frame-pacing wait requested so far, in order.
    pub fn slept(&self) -> &[Duration] {
        &self.slept
    }
}

impl Backend for HeadlessBackend {
    fn present(&mut self, surface: &Surface) -> io::Result<()> {
        match &mut self.presented {
            Some(prev) => prev.copy_from(surface),
            None => self.presented = Some(surface.clone()),
        }
        self.present_count += 1;
        Ok(())
    }

    fn poll_events(&mut self, out: &mut Vec<RawEvent>) -> io::Result<()> {
        self.poll_count += 1;
        for event in self.pending.drain(..) {
            match event {
                RawEvent::KeyDown(key) => {
                    self.held.insert(key);
                }
                RawEvent::KeyUp(key) => {
                    self.held.remove(&key);
                }
                _ => {}
            }
            out.push(event);
        }
        Ok(())
    }

    fn pressed_keys(&mut self) -> Vec<Key> {
        self.held.iter().copied().collect()
    }

    fn sleep(&mut self, dur: Duration) {
        self.slept.push(dur);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgb;

    #[test]
    fn poll_drains_in_arrival_order() {
        let mut b = HeadlessBackend::new();
        b.press(Key::A);
        b.click(MouseButton::Left, 3, 4);
        b.quit();

        let mut out = Vec::new();
        b.poll_events(&mut out).unwrap();
        assert_eq!(
            out,
            vec![
                RawEvent::KeyDown(Key::A),
                RawEvent::MouseUp {
                    button: MouseButton::Left,
                    pos: PixelPos::new(3, 4)
                },
                RawEvent::Quit,
            ]
        );
        assert_eq!(b.pending(), 0);
    }

    #[test]
    fn held_keys_follow_transitions_once_polled() {
        let mut b = HeadlessBackend::new();
        b.press(Key::Up);
        b.press(Key::Left);
        assert!(b.pressed_keys().is_empty(), "not polled yet");

        let mut out = Vec::new();
        b.poll_events(&mut out).unwrap();
        assert_eq!(b.pressed_keys(), vec![Key::Up, Key::Left]);

        b.release(Key::Up);
        b.poll_events(&mut out).unwrap();
        assert_eq!(b.pressed_keys(), vec![Key::Left]);
    }

    #[test]
    fn present_keeps_a_copy_and_counts() {
        let mut b = HeadlessBackend::new();
        let s = Surface::new(2, 2, Rgb::new(1, 2, 3));
        b.present(&s).unwrap();
        b.present(&s).unwrap();
        assert_eq!(b.present_count(), 2);
        assert_eq!(b.presented(), Some(&s));
    }

    #[test]
    fn sleep_is_recorded_not_performed() {
        let mut b = HeadlessBackend::new();
        b.sleep(Duration::from_secs(3600));
        assert_eq!(b.slept(), &[Duration::from_secs(3600)]);
    }
}
