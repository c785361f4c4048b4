mod command_result;
pub mod context;
pub mod extract;
pub mod rewrite;

pub use command_result::*;
