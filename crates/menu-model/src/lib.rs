//! Wire model for menu tree diffs.

pub mod change;
pub mod error;
pub mod protocol;

pub use change::{Change, ChangeAction, Mutation, parse_changes};
pub use error::{ModelError, Result};
pub use protocol::{
    HostCall, HostReturn, METHOD_DELETE, METHOD_LOAD, METHOD_NEW, METHOD_RENDER, MenuCall,
};
