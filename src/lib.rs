mod utils;
mod amf;
mod protocol;
mod message;
mod handlers;
mod stream;

// Re-export commonly used types at crate root
pub use utils::*;
pub use amf::*;
pub use protocol::*;
pub use message::*;
pub use handlers::*;
pub use stream::*;
