use crate::Result;
use crate::protocol::RtmpMessage;
use crate::utils::{current_timestamp, timestamp_delta};

/// Identification handle for one logical message stream.
///
/// Owned by the connection layer, which creates it on `createStream`
/// and tears it down with the connection. The dispatcher only reads it
/// for identification and logging.
#[derive(Debug, Clone)]
pub struct LogicalStream {
    id: u32,
    created_at: u32,
}

impl LogicalStream {
    /// Create a stream handle
    pub fn new(id: u32) -> Self {
        LogicalStream {
            id,
            created_at: current_timestamp(),
        }
    }

    /// Get stream ID
    pub fn id(&self) -> u32 {
        self.id
    }

    /// Millisecond timestamp of stream creation
    pub fn created_at(&self) -> u32 {
        self.created_at
    }

    /// Milliseconds since stream creation
    pub fn age_ms(&self) -> u32 {
        timestamp_delta(self.created_at, current_timestamp())
    }
}

/// Outbound path for wire messages.
///
/// Provided by the connection/transport layer, which owns chunking and
/// serialization. Writes may block on I/O or backpressure and may fail;
/// failures propagate to the dispatcher's caller unchanged.
#[async_trait::async_trait]
pub trait StreamWriter: Send + Sync {
    async fn write(
        &self,
        chunk_stream_id: u32,
        timestamp: u32,
        message: RtmpMessage,
    ) -> Result<()>;
}
