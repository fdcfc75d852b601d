//! Viewer-side relay client.
//!
//! A background task reads relay snapshots into an mpsc channel; writes go
//! straight to the socket. When the relay disappears the channel closes
//! and the viewer simply keeps its last-known list -- there is no automatic
//! retry. Reconnecting builds a fresh client, and the relay re-sends the
//! full snapshot on accept.

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::OwnedWriteHalf;
use tokio::net::TcpStream;
use tokio::sync::mpsc;

use super::protocol::Message;
use crate::error::SyncError;
use crate::task::Task;

const SNAPSHOT_CHANNEL_CAPACITY: usize = 16;

pub struct RelayClient {
    writer: OwnedWriteHalf,
    snapshots: mpsc::Receiver<Vec<Task>>,
}

impl RelayClient {
    pub async fn connect(addr: &str) -> Result<Self, SyncError> {
        let stream = TcpStream::connect(addr).await.map_err(SyncError::Connect)?;
        let (reader, writer) = stream.into_split();
        let (tx, snapshots) = mpsc::channel(SNAPSHOT_CHANNEL_CAPACITY);

        tokio::spawn(async move {
            let mut lines = BufReader::new(reader).lines();
            while let Ok(Some(line)) = lines.next_line().await {
                match Message::from_line(&line) {
                    Ok(Message::Tasks { tasks }) => {
                        if tx.send(tasks).await.is_err() {
                            break;
                        }
                    }
                    // Viewers only ever receive snapshots.
                    Ok(_) => {}
                    Err(e) => log::warn!("malformed relay message: {e}"),
                }
            }
        });

        Ok(Self { writer, snapshots })
    }

    /// Send a single new task for the relay to append.
    pub async fn add_task(&mut self, task: Task) -> Result<(), SyncError> {
        self.send(Message::AddTask { task }).await
    }

    /// Send the complete local list for wholesale replacement.
    pub async fn replace_tasks(&mut self, tasks: Vec<Task>) -> Result<(), SyncError> {
        self.send(Message::ReplaceTasks { tasks }).await
    }

    async fn send(&mut self, msg: Message) -> Result<(), SyncError> {
        self.writer
            .write_all(msg.to_line().as_bytes())
            .await
            .map_err(SyncError::Send)
    }

    /// Next full snapshot from the relay; `None` once disconnected.
    pub async fn next_snapshot(&mut self) -> Option<Vec<Task>> {
        self.snapshots.recv().await
    }
}
