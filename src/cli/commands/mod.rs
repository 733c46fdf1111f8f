mod command_result;
pub mod init;
pub mod scan;
pub mod show;

pub use command_result::*;
