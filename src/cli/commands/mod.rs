pub mod check;
mod command_result;
mod context;
pub mod generate;
pub mod init;
pub mod preview;

pub use command_result::*;
pub use context::CompileContext;
