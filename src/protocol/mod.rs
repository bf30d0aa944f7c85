mod command;
mod data;
mod message;
pub mod constants;

pub use command::*;
pub use data::*;
pub use message::*;
pub use constants::*;
