//! Library side of the `menu-replay` binary.

pub mod logging;
pub mod replay;
pub mod summary;
