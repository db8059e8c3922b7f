mod command_result;
pub mod context;
pub mod export;
pub mod import;
pub mod init;
pub mod translate;

pub use command_result::*;
