//! Semantic item roles.
//!
//! A role decorates an item with a stock icon, sometimes a standard
//! accelerator, and may change its visibility.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::toolkit::Symbol;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleEffect {
    pub icon: Option<Symbol>,
    /// Accelerator description, in the same syntax as the `keys` attribute.
    pub keys: Option<&'static str>,
    pub visible: Option<bool>,
}

impl RoleEffect {
    const fn glyph(symbol: Symbol) -> Self {
        Self {
            icon: Some(symbol),
            keys: None,
            visible: None,
        }
    }

    const fn glyph_keys(symbol: Symbol, keys: &'static str) -> Self {
        Self {
            icon: Some(symbol),
            keys: Some(keys),
            visible: None,
        }
    }

    const NONE: Self = Self {
        icon: None,
        keys: None,
        visible: None,
    };

    const HIDDEN: Self = Self {
        icon: None,
        keys: None,
        visible: Some(false),
    };

    /// Applied for roles outside the table.
    pub const FALLBACK: Self = Self {
        icon: None,
        keys: None,
        visible: Some(true),
    };
}

const ROLES: &[(&str, RoleEffect)] = &[
    ("undo", RoleEffect::glyph(Symbol::Undo)),
    ("redo", RoleEffect::glyph(Symbol::Redo)),
    ("cut", RoleEffect::glyph_keys(Symbol::Cut, "cmdorctrl+x")),
    ("copy", RoleEffect::glyph_keys(Symbol::Copy, "cmdorctrl+c")),
    ("paste", RoleEffect::glyph_keys(Symbol::Paste, "cmdorctrl+v")),
    ("pasteAndMatchStyle", RoleEffect::glyph(Symbol::Paste)),
    ("selectAll", RoleEffect::glyph_keys(Symbol::SelectAll, "cmdorctrl+a")),
    ("delete", RoleEffect::glyph(Symbol::Delete)),
    ("minimize", RoleEffect::HIDDEN),
    ("close", RoleEffect::NONE),
    ("quit", RoleEffect::NONE),
    ("reload", RoleEffect::glyph(Symbol::Refresh)),
    ("forceReload", RoleEffect::glyph(Symbol::Refresh)),
    ("toggleFullScreen", RoleEffect::glyph(Symbol::FullScreen)),
];

static ROLE_TABLE: OnceLock<HashMap<&'static str, RoleEffect>> = OnceLock::new();

/// Look up a role. Role names are case-sensitive.
pub fn role_effect(role: &str) -> RoleEffect {
    ROLE_TABLE
        .get_or_init(|| ROLES.iter().copied().collect())
        .get(role)
        .copied()
        .unwrap_or(RoleEffect::FALLBACK)
}
