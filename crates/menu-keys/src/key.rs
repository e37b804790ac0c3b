//! Non-modifier keys an accelerator can bind.

use std::collections::HashMap;
use std::fmt;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

/// A non-modifier key.
///
/// Digits map to the `Number*` family, the arithmetic symbols to their keypad
/// names. [`Key::None`] is the toolkit's "no key" value and is what unknown
/// key names resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Key {
    #[default]
    None,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,
    Number0,
    Number1,
    Number2,
    Number3,
    Number4,
    Number5,
    Number6,
    Number7,
    Number8,
    Number9,
    Add,
    Subtract,
    Multiply,
    Divide,
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

/// Lowercase key names and the key each one binds.
const KEY_NAMES: &[(&str, Key)] = &[
    ("a", Key::A),
    ("b", Key::B),
    ("c", Key::C),
    ("d", Key::D),
    ("e", Key::E),
    ("f", Key::F),
    ("g", Key::G),
    ("h", Key::H),
    ("i", Key::I),
    ("j", Key::J),
    ("k", Key::K),
    ("l", Key::L),
    ("m", Key::M),
    ("n", Key::N),
    ("o", Key::O),
    ("p", Key::P),
    ("q", Key::Q),
    ("r", Key::R),
    ("s", Key::S),
    ("t", Key::T),
    ("u", Key::U),
    ("v", Key::V),
    ("w", Key::W),
    ("x", Key::X),
    ("y", Key::Y),
    ("z", Key::Z),
    ("0", Key::Number0),
    ("1", Key::Number1),
    ("2", Key::Number2),
    ("3", Key::Number3),
    ("4", Key::Number4),
    ("5", Key::Number5),
    ("6", Key::Number6),
    ("7", Key::Number7),
    ("8", Key::Number8),
    ("9", Key::Number9),
    ("+", Key::Add),
    ("-", Key::Subtract),
    ("*", Key::Multiply),
    ("/", Key::Divide),
    ("f1", Key::F1),
    ("f2", Key::F2),
    ("f3", Key::F3),
    ("f4", Key::F4),
    ("f5", Key::F5),
    ("f6", Key::F6),
    ("f7", Key::F7),
    ("f8", Key::F8),
    ("f9", Key::F9),
    ("f10", Key::F10),
    ("f11", Key::F11),
    ("f12", Key::F12),
];

static KEY_TABLE: OnceLock<HashMap<&'static str, Key>> = OnceLock::new();

fn key_table() -> &'static HashMap<&'static str, Key> {
    KEY_TABLE.get_or_init(|| KEY_NAMES.iter().copied().collect())
}

impl Key {
    /// Resolve a lowercase key name.
    ///
    /// Unknown names yield [`Key::None`] rather than an error.
    pub fn from_name(name: &str) -> Self {
        key_table().get(name).copied().unwrap_or_default()
    }

    /// The canonical lowercase name, or `None` for [`Key::None`].
    pub fn name(self) -> Option<&'static str> {
        KEY_NAMES
            .iter()
            .find(|(_, key)| *key == self)
            .map(|(name, _)| *name)
    }

    pub fn is_none(self) -> bool {
        self == Key::None
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(&name.to_uppercase()),
            None => f.write_str("None"),
        }
    }
}
