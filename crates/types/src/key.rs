//! Symbolic key vocabulary.
//!
//! A fixed, process-wide table. Backends translate their raw codes into
//! [`Key`] through a partial mapping, so a raw code with no entry here never
//! reaches the facade.

use std::fmt;

macro_rules! key_table {
    ($($variant:ident => $name:literal,)*) => {
        /// A recognized key, in table order.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Key {
            $($variant,)*
        }

        impl Key {
            /// Every key, in table order.
            pub const ALL: &'static [Key] = &[$(Key::$variant,)*];

            /// The symbolic name, e.g. `"UP"` or `"KP5"`.
            pub const fn name(self) -> &'static str {
                match self {
                    $(Key::$variant => $name,)*
                }
            }

            /// Parse a symbolic name (case-insensitive).
            pub fn from_name(s: &str) -> Option<Key> {
                match s.to_uppercase().as_str() {
                    $($name => Some(Key::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

key_table! {
    Num0 => "0",
    Num1 => "1",
    Num2 => "2",
    Num3 => "3",
    Num4 => "4",
    Num5 => "5",
    Num6 => "6",
    Num7 => "7",
    Num8 => "8",
    Num9 => "9",
    A => "A",
    B => "B",
    C => "C",
    D => "D",
    E => "E",
    F => "F",
    G => "G",
    H => "H",
    I => "I",
    J => "J",
    K => "K",
    L => "L",
    M => "M",
    N => "N",
    O => "O",
    P => "P",
    Q => "Q",
    R => "R",
    S => "S",
    T => "T",
    U => "U",
    V => "V",
    W => "W",
    X => "X",
    Y => "Y",
    Z => "Z",
    F1 => "F1",
    F2 => "F2",
    F3 => "F3",
    F4 => "F4",
    F5 => "F5",
    F6 => "F6",
    F7 => "F7",
    F8 => "F8",
    F9 => "F9",
    F10 => "F10",
    F11 => "F11",
    F12 => "F12",
    F13 => "F13",
    F14 => "F14",
    F15 => "F15",
    Kp0 => "KP0",
    Kp1 => "KP1",
    Kp2 => "KP2",
    Kp3 => "KP3",
    Kp4 => "KP4",
    Kp5 => "KP5",
    Kp6 => "KP6",
    Kp7 => "KP7",
    Kp8 => "KP8",
    Kp9 => "KP9",
    KpPeriod => "KP_PERIOD",
    KpDivide => "KP_DIVIDE",
    KpMultiply => "KP_MULTIPLY",
    KpMinus => "KP_MINUS",
    KpPlus => "KP_PLUS",
    KpEnter => "KP_ENTER",
    KpEquals => "KP_EQUALS",
    Up => "UP",
    Down => "DOWN",
    Right => "RIGHT",
    Left => "LEFT",
    Insert => "INSERT",
    Home => "HOME",
    End => "END",
    PageUp => "PAGEUP",
    PageDown => "PAGEDOWN",
    Backspace => "BACKSPACE",
    Tab => "TAB",
    Clear => "CLEAR",
    Return => "RETURN",
    Pause => "PAUSE",
    Escape => "ESCAPE",
    Space => "SPACE",
    Delete => "DELETE",
    NumLock => "NUMLOCK",
    CapsLock => "CAPSLOCK",
    ScrollLock => "SCROLLOCK",
    RShift => "RSHIFT",
    LShift => "LSHIFT",
    RCtrl => "RCTRL",
    LCtrl => "LCTRL",
    RAlt => "RALT",
    LAlt => "LALT",
    RMeta => "RMETA",
    LMeta => "LMETA",
    LSuper => "LSUPER",
    RSuper => "RSUPER",
    Mode => "MODE",
    Help => "HELP",
    Print => "PRINT",
    SysReq => "SYSREQ",
    Break => "BREAK",
    Menu => "MENU",
    Power => "POWER",
    Euro => "EURO",
    Exclaim => "EXCLAIM",
    QuoteDbl => "QUOTEDBL",
    Hash => "HASH",
    Dollar => "DOLLAR",
    Ampersand => "AMPERSAND",
    Quote => "QUOTE",
    LeftParen => "LEFTPAREN",
    RightParen => "RIGHTPAREN",
    Asterisk => "ASTERISK",
    Plus => "PLUS",
    Comma => "COMMA",
    Minus => "MINUS",
    Period => "PERIOD",
    Slash => "SLASH",
    Colon => "COLON",
    Semicolon => "SEMICOLON",
    Less => "LESS",
    Equals => "EQUALS",
    Greater => "GREATER",
    Question => "QUESTION",
    At => "AT",
    LeftBracket => "LEFTBRACKET",
    Backslash => "BACKSLASH",
    RightBracket => "RIGHTBRACKET",
    Caret => "CARET",
    Underscore => "UNDERSCORE",
    Backquote => "BACKQUOTE",
}

impl Key {
    /// Letter key for an ASCII letter of either case.
    pub fn letter(c: char) -> Option<Key> {
        let upper = c.to_ascii_uppercase();
        if !upper.is_ascii_uppercase() {
            return None;
        }
        Key::ALL
            .get(Key::A as usize + (upper as u8 - b'A') as usize)
            .copied()
    }

    /// Top-row digit key for an ASCII digit.
    pub fn digit(c: char) -> Option<Key> {
        let d = c.to_digit(10)?;
        Key::ALL.get(Key::Num0 as usize + d as usize).copied()
    }

    /// Keypad digit key for an ASCII digit.
    pub fn keypad_digit(c: char) -> Option<Key> {
        let d = c.to_digit(10)?;
        Key::ALL.get(Key::Kp0 as usize + d as usize).copied()
    }

    /// Function key `F1`..`F15`.
    pub fn function(n: u8) -> Option<Key> {
        if !(1..=15).contains(&n) {
            return None;
        }
        Key::ALL.get(Key::F1 as usize + (n - 1) as usize).copied()
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
