mod command_result;
mod context;
pub mod exists;
pub mod get;
pub mod init;
pub mod show;

pub use command_result::*;
pub use context::LookupContext;
