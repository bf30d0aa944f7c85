// Message types
pub const MSG_TYPE_AUDIO: u8 = 8;
pub const MSG_TYPE_VIDEO: u8 = 9;
pub const MSG_TYPE_DATA_AMF3: u8 = 15;
pub const MSG_TYPE_COMMAND_AMF3: u8 = 17;
pub const MSG_TYPE_DATA_AMF0: u8 = 18;
pub const MSG_TYPE_COMMAND_AMF0: u8 = 20;

// Chunk stream IDs
pub const CHUNK_STREAM_COMMAND: u32 = 3;
pub const CHUNK_STREAM_AUDIO: u32 = 4;
pub const CHUNK_STREAM_VIDEO: u32 = 6;
pub const CHUNK_STREAM_DATA: u32 = 8;

// Well-known envelope names
pub const SET_DATA_FRAME: &str = "@setDataFrame";
pub const ON_METADATA: &str = "onMetaData";
