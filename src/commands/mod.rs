pub mod help;
pub mod result;
pub mod session;
pub mod status;
pub mod upload;

pub use result::CommandResult;
