mod amf0;

pub use amf0::*;
