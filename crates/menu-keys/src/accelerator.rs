//! Accelerator parsing.

use std::fmt;

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use crate::Key;

bitflags! {
    /// Modifier keys held together with an accelerator's key.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Modifiers: u8 {
        const CONTROL = 0b0001;
        const SHIFT = 0b0010;
        /// Secondary modifier, spelled `fn` by hosts.
        const ALT = 0b0100;
        /// Platform/OS key, spelled `meta` by hosts.
        const META = 0b1000;
    }
}

/// Modifier token spellings accepted in accelerator strings.
const MODIFIER_TOKENS: &[(&str, Modifiers)] = &[
    ("ctrl", Modifiers::CONTROL),
    ("cmdorctrl", Modifiers::CONTROL),
    ("shift", Modifiers::SHIFT),
    ("fn", Modifiers::ALT),
    ("meta", Modifiers::META),
];

fn modifier_for(token: &str) -> Option<Modifiers> {
    MODIFIER_TOKENS
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, modifier)| *modifier)
}

/// A keyboard shortcut: modifier flags plus one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Accelerator {
    pub modifiers: Modifiers,
    pub key: Key,
}

impl Accelerator {
    pub fn new(modifiers: Modifiers, key: Key) -> Self {
        Self { modifiers, key }
    }

    /// Parse a `+`-joined accelerator description.
    ///
    /// Tokens are matched case-insensitively. `ctrl`/`cmdorctrl`, `shift`,
    /// `fn` and `meta` accumulate into [`Modifiers`]; any other token is the
    /// key. An empty token, produced by a leading or trailing `+`, stands for
    /// the `+` key. Unknown key names resolve to [`Key::None`]. When several
    /// key tokens are present the last one wins.
    ///
    /// Parsing never fails.
    pub fn parse(spec: &str) -> Self {
        let spec = spec.to_lowercase();
        let mut accelerator = Self::default();

        for token in spec.split('+') {
            if let Some(modifier) = modifier_for(token) {
                accelerator.modifiers |= modifier;
                continue;
            }
            let name = if token.is_empty() { "+" } else { token };
            accelerator.key = Key::from_name(name);
        }

        accelerator
    }
}

impl fmt::Display for Accelerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let labels = [
            (Modifiers::CONTROL, "Ctrl"),
            (Modifiers::ALT, "Alt"),
            (Modifiers::SHIFT, "Shift"),
            (Modifiers::META, "Meta"),
        ];
        let mut parts: Vec<String> = labels
            .into_iter()
            .filter(|(modifier, _)| self.modifiers.contains(*modifier))
            .map(|(_, label)| label.to_string())
            .collect();
        if !self.key.is_none() {
            parts.push(self.key.to_string());
        }
        f.write_str(&parts.join("+"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_modifiers_and_key() {
        let acc = Accelerator::parse("cmdorctrl+shift+x");
        assert_eq!(acc.modifiers, Modifiers::CONTROL | Modifiers::SHIFT);
        assert_eq!(acc.key, Key::X);
    }

    #[test]
    fn trailing_plus_is_the_plus_key() {
        let acc = Accelerator::parse("cmdorctrl+shift+");
        assert_eq!(acc.modifiers, Modifiers::CONTROL | Modifiers::SHIFT);
        assert_eq!(acc.key, Key::Add);
    }

    #[test]
    fn double_plus_is_the_plus_key() {
        let acc = Accelerator::parse("ctrl++");
        assert_eq!(acc.modifiers, Modifiers::CONTROL);
        assert_eq!(acc.key, Key::Add);
    }

    #[test]
    fn fn_and_meta_map_to_alt_and_platform_key() {
        let acc = Accelerator::parse("fn+meta+f5");
        assert_eq!(acc.modifiers, Modifiers::ALT | Modifiers::META);
        assert_eq!(acc.key, Key::F5);
    }

    #[test]
    fn digits_use_number_family() {
        assert_eq!(Accelerator::parse("ctrl+1").key, Key::Number1);
    }

    #[test]
    fn unknown_key_is_no_key() {
        let acc = Accelerator::parse("ctrl+pageup");
        assert_eq!(acc.modifiers, Modifiers::CONTROL);
        assert_eq!(acc.key, Key::None);
    }

    #[test]
    fn modifiers_only_leaves_key_unset() {
        let acc = Accelerator::parse("ctrl+shift");
        assert_eq!(acc.modifiers, Modifiers::CONTROL | Modifiers::SHIFT);
        assert!(acc.key.is_none());
    }

    #[test]
    fn repeated_modifier_is_idempotent() {
        assert_eq!(
            Accelerator::parse("ctrl+cmdorctrl+a"),
            Accelerator::new(Modifiers::CONTROL, Key::A)
        );
    }

    #[test]
    fn display_orders_modifiers() {
        let acc = Accelerator::parse("meta+shift+fn+ctrl+c");
        assert_eq!(acc.to_string(), "Ctrl+Alt+Shift+Meta+C");
        assert_eq!(Accelerator::parse("ctrl+-").to_string(), "Ctrl+-");
    }

    #[test]
    fn display_omits_missing_key() {
        assert_eq!(Accelerator::parse("ctrl+shift").to_string(), "Ctrl+Shift");
        assert_eq!(Accelerator::parse("ctrl+pageup").to_string(), "Ctrl");
        assert_eq!(Accelerator::default().to_string(), "");
    }
}
