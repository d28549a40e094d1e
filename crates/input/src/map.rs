//! Mapping from crossterm events to the symbolic input vocabulary.
//!
//! Every mapping here is partial: codes without a table entry give `None` and
//! are dropped by the caller.

use std::time::Instant;

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, ModifierKeyCode,
    MouseButton as TermMouseButton, MouseEvent, MouseEventKind,
};

use tracing::debug;

use crate::tracker::KeyTracker;
use crate::types::{Key, MouseButton, PixelPos, RawEvent};

/// Symbolic key for a terminal key event.
///
/// Keypad keys are recognised when the terminal reports them as such
/// (`KeyEventState::KEYPAD`, needs keyboard enhancement).
pub fn key_from_event(key: &KeyEvent) -> Option<Key> {
    if key.state.contains(KeyEventState::KEYPAD) {
        match key.code {
            KeyCode::Char(c) => return keypad_char(c),
            KeyCode::Enter => return Some(Key::KpEnter),
            _ => {}
        }
    }
    key_from_code(key.code)
}

/// Symbolic key for a raw terminal key code.
pub fn key_from_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Enter => Some(Key::Return),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Home => Some(Key::Home),
        KeyCode::End => Some(Key::End),
        KeyCode::PageUp => Some(Key::PageUp),
        KeyCode::PageDown => Some(Key::PageDown),
        KeyCode::Tab | KeyCode::BackTab => Some(Key::Tab),
        KeyCode::Delete => Some(Key::Delete),
        KeyCode::Insert => Some(Key::Insert),
        KeyCode::F(n) => Key::function(n),
        KeyCode::Char(c) => char_key(c),
        KeyCode::Esc => Some(Key::Escape),
        KeyCode::CapsLock => Some(Key::CapsLock),
        KeyCode::ScrollLock => Some(Key::ScrollLock),
        KeyCode::NumLock => Some(Key::NumLock),
        KeyCode::PrintScreen => Some(Key::Print),
        KeyCode::Pause => Some(Key::Pause),
        KeyCode::Menu => Some(Key::Menu),
        KeyCode::KeypadBegin => Some(Key::Kp5),
        KeyCode::Modifier(m) => modifier_key(m),
        KeyCode::Null | KeyCode::Media(_) => None,
    }
}

fn char_key(c: char) -> Option<Key> {
    match c {
        'a'..='z' | 'A'..='Z' => Key::letter(c),
        '0'..='9' => Key::digit(c),
        ' ' => Some(Key::Space),
        '!' => Some(Key::Exclaim),
        '"' => Some(Key::QuoteDbl),
        '#' => Some(Key::Hash),
        '$' => Some(Key::Dollar),
        '&' => Some(Key::Ampersand),
        '\'' => Some(Key::Quote),
        '(' => Some(Key::LeftParen),
        ')' => Some(Key::RightParen),
        '*' => Some(Key::Asterisk),
        '+' => Some(Key::Plus),
        ',' => Some(Key::Comma),
        '-' => Some(Key::Minus),
        '.' => Some(Key::Period),
        '/' => Some(Key::Slash),
        ':' => Some(Key::Colon),
        ';' => Some(Key::Semicolon),
        '<' => Some(Key::Less),
        '=' => Some(Key::Equals),
        '>' => Some(Key::Greater),
        '?' => Some(Key::Question),
        '@' => Some(Key::At),
        '[' => Some(Key::LeftBracket),
        '\\' => Some(Key::Backslash),
        ']' => Some(Key::RightBracket),
        '^' => Some(Key::Caret),
        '_' => Some(Key::Underscore),
        '`' => Some(Key::Backquote),
        '€' => Some(Key::Euro),
        _ => None,
    }
}

fn keypad_char(c: char) -> Option<Key> {
    match c {
        '0'..='9' => Key::keypad_digit(c),
        '.' => Some(Key::KpPeriod),
        '/' => Some(Key::KpDivide),
        '*' => Some(Key::KpMultiply),
        '-' => Some(Key::KpMinus),
        '+' => Some(Key::KpPlus),
        '=' => Some(Key::KpEquals),
        _ => char_key(c),
    }
}

fn modifier_key(m: ModifierKeyCode) -> Option<Key> {
    match m {
        ModifierKeyCode::LeftShift => Some(Key::LShift),
        ModifierKeyCode::LeftControl => Some(Key::LCtrl),
        ModifierKeyCode::LeftAlt => Some(Key::LAlt),
        ModifierKeyCode::LeftSuper => Some(Key::LSuper),
        ModifierKeyCode::LeftMeta => Some(Key::LMeta),
        ModifierKeyCode::RightShift => Some(Key::RShift),
        ModifierKeyCode::RightControl => Some(Key::RCtrl),
        ModifierKeyCode::RightAlt => Some(Key::RAlt),
        ModifierKeyCode::RightSuper => Some(Key::RSuper),
        ModifierKeyCode::RightMeta => Some(Key::RMeta),
        ModifierKeyCode::IsoLevel3Shift => Some(Key::Mode),
        ModifierKeyCode::LeftHyper
        | ModifierKeyCode::RightHyper
        | ModifierKeyCode::IsoLevel5Shift => None,
    }
}

pub fn button_from_mouse(button: TermMouseButton) -> MouseButton {
    match button {
        TermMouseButton::Left => MouseButton::Left,
        TermMouseButton::Right => MouseButton::Right,
        TermMouseButton::Middle => MouseButton::Middle,
    }
}

/// A released mouse button becomes a click at the cell under the pointer.
///
/// One terminal cell is one surface pixel, so the terminal position is the
/// pixel position. Presses, drags, moves and wheel events give `None`.
pub fn raw_from_mouse(event: &MouseEvent) -> Option<RawEvent> {
    match event.kind {
        MouseEventKind::Up(button) => Some(RawEvent::MouseUp {
            button: button_from_mouse(button),
            pos: PixelPos::new(event.column as u32, event.row as u32),
        }),
        _ => None,
    }
}

/// Ctrl+C is the terminal's "close window": raw mode swallows the signal, so
/// it arrives as a key press.
pub fn is_quit(key: &KeyEvent) -> bool {
    key.kind != KeyEventKind::Release
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

/// Turn a terminal key event into raw events, updating `tracker`.
///
/// Ctrl+C becomes [`RawEvent::Quit`]. Only an up-to-down transition yields
/// `KeyDown`; repeats just keep the key held. Unmapped codes are dropped.
pub fn translate_key(key: &KeyEvent, tracker: &mut KeyTracker, out: &mut Vec<RawEvent>) {
    translate_key_at(key, Instant::now(), tracker, out);
}

pub fn translate_key_at(
    key: &KeyEvent,
    now: Instant,
    tracker: &mut KeyTracker,
    out: &mut Vec<RawEvent>,
) {
    if is_quit(key) {
        out.push(RawEvent::Quit);
        return;
    }
    let Some(sym) = key_from_event(key) else {
        debug!(code = ?key.code, "unmapped key dropped");
        return;
    };
    match key.kind {
        KeyEventKind::Press => {
            if tracker.handle_press_at(sym, now) {
                out.push(RawEvent::KeyDown(sym));
            }
        }
        KeyEventKind::Repeat => tracker.handle_repeat_at(sym, now),
        KeyEventKind::Release => {
            tracker.handle_release(sym);
            out.push(RawEvent::KeyUp(sym));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[test]
    fn arrows_and_editing_keys() {
        assert_eq!(key_from_code(KeyCode::Up), Some(Key::Up));
        assert_eq!(key_from_code(KeyCode::Down), Some(Key::Down));
        assert_eq!(key_from_code(KeyCode::Left), Some(Key::Left));
        assert_eq!(key_from_code(KeyCode::Right), Some(Key::Right));
        assert_eq!(key_from_code(KeyCode::Enter), Some(Key::Return));
        assert_eq!(key_from_code(KeyCode::Esc), Some(Key::Escape));
        assert_eq!(key_from_code(KeyCode::BackTab), Some(Key::Tab));
    }

    #[test]
    fn letters_ignore_case() {
        assert_eq!(key_from_code(KeyCode::Char('k')), Some(Key::K));
        assert_eq!(key_from_code(KeyCode::Char('K')), Some(Key::K));
        assert_eq!(key_from_code(KeyCode::Char('5')), Some(Key::Num5));
        assert_eq!(key_from_code(KeyCode::Char(' ')), Some(Key::Space));
    }

    #[test]
    fn function_keys_stop_at_f15() {
        assert_eq!(key_from_code(KeyCode::F(12)), Some(Key::F12));
        assert_eq!(key_from_code(KeyCode::F(15)), Some(Key::F15));
        assert_eq!(key_from_code(KeyCode::F(20)), None);
    }

    #[test]
    fn unknown_codes_are_absent() {
        assert_eq!(key_from_code(KeyCode::Null), None);
        assert_eq!(key_from_code(KeyCode::Char('%')), None);
        assert_eq!(key_from_code(KeyCode::Char('é')), None);
        assert_eq!(
            key_from_code(KeyCode::Modifier(ModifierKeyCode::LeftHyper)),
            None
        );
    }

    #[test]
    fn keypad_state_selects_keypad_keys() {
        let kp = |code| KeyEvent::new_with_kind_and_state(
            code,
            KeyModifiers::NONE,
            KeyEventKind::Press,
            KeyEventState::KEYPAD,
        );
        assert_eq!(key_from_event(&kp(KeyCode::Char('7'))), Some(Key::Kp7));
        assert_eq!(key_from_event(&kp(KeyCode::Char('+'))), Some(Key::KpPlus));
        assert_eq!(key_from_event(&kp(KeyCode::Enter)), Some(Key::KpEnter));
        assert_eq!(
            key_from_event(&KeyEvent::from(KeyCode::Char('7'))),
            Some(Key::Num7)
        );
    }

    #[test]
    fn modifiers_map_to_sided_keys() {
        assert_eq!(
            key_from_code(KeyCode::Modifier(ModifierKeyCode::LeftShift)),
            Some(Key::LShift)
        );
        assert_eq!(
            key_from_code(KeyCode::Modifier(ModifierKeyCode::RightControl)),
            Some(Key::RCtrl)
        );
    }

    #[test]
    fn only_mouse_up_becomes_a_click() {
        let ev = |kind| MouseEvent {
            kind,
            column: 7,
            row: 3,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            raw_from_mouse(&ev(MouseEventKind::Up(TermMouseButton::Right))),
            Some(RawEvent::MouseUp {
                button: MouseButton::Right,
                pos: PixelPos::new(7, 3)
            })
        );
        assert_eq!(raw_from_mouse(&ev(MouseEventKind::Down(TermMouseButton::Left))), None);
        assert_eq!(raw_from_mouse(&ev(MouseEventKind::ScrollUp)), None);
        assert_eq!(raw_from_mouse(&ev(MouseEventKind::Moved)), None);
    }

    fn with_kind(code: KeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent::new_with_kind(code, KeyModifiers::NONE, kind)
    }

    #[test]
    fn ctrl_c_translates_to_quit_only() {
        let mut tracker = KeyTracker::new();
        let mut out = Vec::new();
        translate_key(
            &KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut tracker,
            &mut out,
        );
        assert_eq!(out, vec![RawEvent::Quit]);
        assert!(!tracker.is_pressed(Key::C));
    }

    #[test]
    fn held_press_translates_to_a_single_key_down() {
        let mut tracker = KeyTracker::new();
        let mut out = Vec::new();
        let t0 = Instant::now();
        let right = KeyEvent::from(KeyCode::Right);

        translate_key_at(&right, t0, &mut tracker, &mut out);
        translate_key_at(&right, t0 + Duration::from_millis(500), &mut tracker, &mut out);
        translate_key_at(
            &with_kind(KeyCode::Right, KeyEventKind::Repeat),
            t0 + Duration::from_millis(533),
            &mut tracker,
            &mut out,
        );
        assert_eq!(out, vec![RawEvent::KeyDown(Key::Right)]);
        assert!(tracker.is_pressed(Key::Right));
    }

    #[test]
    fn release_translates_to_key_up() {
        let mut tracker = KeyTracker::new();
        tracker.set_release_events(true);
        let mut out = Vec::new();

        translate_key(&KeyEvent::from(KeyCode::Char('a')), &mut tracker, &mut out);
        translate_key(
            &with_kind(KeyCode::Char('a'), KeyEventKind::Release),
            &mut tracker,
            &mut out,
        );
        assert_eq!(out, vec![RawEvent::KeyDown(Key::A), RawEvent::KeyUp(Key::A)]);
        assert!(!tracker.is_pressed(Key::A));
    }

    #[test]
    fn unmapped_keys_translate_to_nothing() {
        let mut tracker = KeyTracker::new();
        let mut out = Vec::new();
        translate_key(&KeyEvent::from(KeyCode::Null), &mut tracker, &mut out);
        translate_key(&KeyEvent::from(KeyCode::Char('%')), &mut tracker, &mut out);
        assert!(out.is_empty());
        assert!(tracker.pressed().is_empty());
    }

    #[test]
    fn test_quit_keys() {
        assert!(is_quit(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!is_quit(&KeyEvent::from(KeyCode::Char('c'))));
        assert!(!is_quit(&KeyEvent::from(KeyCode::Char('q'))));
    }
}
