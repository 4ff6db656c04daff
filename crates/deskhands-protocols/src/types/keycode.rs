//! Backend key codes.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! key_codes {
    ($($key:ident),+ $(,)?) => {
        /// Key codes understood by every backend.
        ///
        /// Numeric values follow declaration order starting at 0 and are stable.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[repr(u32)]
        pub enum KeyCode {
            $($key),+
        }

        impl KeyCode {
            /// Every key code, indexed by its numeric value.
            pub const ALL: &'static [KeyCode] = &[$(KeyCode::$key),+];

            /// Canonical name of the key code.
            pub fn name(self) -> &'static str {
                match self {
                    $(KeyCode::$key => stringify!($key)),+
                }
            }

            /// Exact, case-sensitive lookup by canonical name.
            pub fn from_name(name: &str) -> Option<Self> {
                match name {
                    $(stringify!($key) => Some(KeyCode::$key),)+
                    _ => None,
                }
            }
        }
    };
}

key_codes! {
    Escape,
    F1, F2, F3, F4, F5, F6, F7, F8, F9, F10, F11, F12,
    F13, F14, F15, F16, F17, F18, F19, F20, F21, F22, F23, F24,
    Print, ScrollLock, Pause,
    Grave,
    Num0, Num1, Num2, Num3, Num4, Num5, Num6, Num7, Num8, Num9,
    Minus, Equal, Backspace,
    Insert, Home, PageUp,
    NumLock, Divide, Multiply, Subtract,
    Tab,
    Q, W, E, R, T, Y, U, I, O, P,
    LeftBracket, RightBracket, Backslash,
    Delete, End, PageDown,
    NumPad7, NumPad8, NumPad9, Add,
    CapsLock,
    A, S, D, F, G, H, J, K, L,
    Semicolon, Quote, Return,
    NumPad4, NumPad5, NumPad6,
    LeftShift,
    Z, X, C, V, B, N, M,
    Comma, Period, Slash,
    RightShift,
    Up,
    NumPad1, NumPad2, NumPad3, NumPadEnter,
    LeftControl, LeftSuper, LeftWin, LeftCmd, LeftMeta, LeftAlt,
    Space,
    RightAlt, RightSuper, RightWin, RightCmd, RightMeta,
    Menu, RightControl, Fn,
    Left, Down, Right,
    NumPad0, Decimal, Clear,
    AudioMute, AudioVolDown, AudioVolUp, AudioPlay, AudioStop, AudioPause, AudioPrev, AudioNext,
}

impl KeyCode {
    /// Numeric value of the key code.
    pub fn code(self) -> u32 {
        self as u32
    }

    /// Lookup by numeric value.
    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }

    /// Case-insensitive lookup by canonical name.
    pub fn from_name_ignore_case(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(name))
    }

    /// Whether this is one of the modifier keys.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            KeyCode::LeftShift
                | KeyCode::RightShift
                | KeyCode::LeftControl
                | KeyCode::RightControl
                | KeyCode::LeftAlt
                | KeyCode::RightAlt
                | KeyCode::LeftSuper
                | KeyCode::RightSuper
                | KeyCode::LeftWin
                | KeyCode::RightWin
                | KeyCode::LeftCmd
                | KeyCode::RightCmd
                | KeyCode::LeftMeta
                | KeyCode::RightMeta
                | KeyCode::Fn
        )
    }
}

impl fmt::Display for KeyCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
