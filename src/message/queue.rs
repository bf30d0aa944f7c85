use log::debug;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::message::NetStreamDispatcher;
use crate::protocol::RtmpMessage;
use crate::stream::LogicalStream;
use crate::{Error, Result};

/// One queued message with its delivery metadata
#[derive(Debug, Clone)]
pub struct QueuedMessage {
    pub chunk_stream_id: u32,
    pub timestamp: u32,
    pub message: RtmpMessage,
}

/// Ordered delivery queue feeding one stream's dispatcher.
///
/// The demultiplexer pushes messages as it reassembles them; a single
/// worker drains them in arrival order, which satisfies the
/// dispatcher's single-writer requirement without locking. Messages
/// are never reordered. Backpressure comes from the bounded channel:
/// `push` waits while the worker is behind.
///
/// A dispatch error stops the worker; later pushes fail and `close`
/// returns the error that stopped it.
pub struct StreamDeliveryQueue {
    sender: mpsc::Sender<QueuedMessage>,
    worker: JoinHandle<Result<()>>,
}

impl StreamDeliveryQueue {
    /// Spawn the delivery worker for one logical stream
    pub fn spawn(
        mut dispatcher: NetStreamDispatcher,
        stream: LogicalStream,
        capacity: usize,
    ) -> Self {
        let (sender, mut receiver) = mpsc::channel(capacity);

        let worker = tokio::spawn(async move {
            while let Some(queued) = receiver.recv().await {
                let QueuedMessage {
                    chunk_stream_id,
                    timestamp,
                    message,
                } = queued;

                dispatcher
                    .handle(chunk_stream_id, timestamp, message, &stream)
                    .await?;
            }
            debug!("stream {}: delivery queue drained", stream.id());

            Ok(())
        });

        StreamDeliveryQueue { sender, worker }
    }

    /// Queue one message for dispatch
    pub async fn push(
        &self,
        chunk_stream_id: u32,
        timestamp: u32,
        message: RtmpMessage,
    ) -> Result<()> {
        self.sender
            .send(QueuedMessage {
                chunk_stream_id,
                timestamp,
                message,
            })
            .await
            .map_err(|_| Error::stream("Delivery worker is gone"))
    }

    /// Close the queue and wait for the worker to drain.
    ///
    /// Returns the dispatch error that stopped the worker, if any.
    pub async fn close(self) -> Result<()> {
        drop(self.sender);
        self.worker
            .await
            .map_err(|_| Error::stream("Delivery worker panicked"))?
    }
}
