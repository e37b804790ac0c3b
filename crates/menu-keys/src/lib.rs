//! Keyboard accelerators for native menu items.
//!
//! An accelerator is a set of modifier flags plus exactly one key. Hosts
//! describe accelerators as `+`-joined, case-insensitive token strings such as
//! `cmdorctrl+shift+x`; [`Accelerator::parse`] turns those into the typed form.
//!
//! # Example
//!
//! ```
//! use menu_keys::{Accelerator, Key, Modifiers};
//!
//! let acc = Accelerator::parse("CmdOrCtrl+Shift+X");
//! assert_eq!(acc.modifiers, Modifiers::CONTROL | Modifiers::SHIFT);
//! assert_eq!(acc.key, Key::X);
//!
//! // A trailing `+` names the plus key itself.
//! assert_eq!(Accelerator::parse("ctrl++").key, Key::Add);
//! ```

mod accelerator;
mod key;

pub use accelerator::{Accelerator, Modifiers};
pub use key::Key;
