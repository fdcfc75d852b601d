//! Task relay.
//!
//! The mirror is explicitly owned state behind one mutex -- the single
//! coordination point for all connections. Updates are last-write-wins at
//! whole-list granularity: whichever `replaceTasks` is applied last
//! determines the final state, and concurrent edits from two viewers can
//! overwrite each other. There is no merge and no conflict detection.
//!
//! Nothing is persisted; a relay restart loses the list for every viewer.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::tcp::OwnedWriteHalf;
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{broadcast, Mutex};

use super::protocol::Message;
use crate::task::Task;

const UPDATE_CHANNEL_CAPACITY: usize = 64;

#[derive(Clone)]
pub struct Relay {
    mirror: Arc<Mutex<Vec<Task>>>,
    updates: broadcast::Sender<Vec<Task>>,
}

impl Relay {
    pub fn new() -> Self {
        let (updates, _) = broadcast::channel(UPDATE_CHANNEL_CAPACITY);
        Self {
            mirror: Arc::new(Mutex::new(Vec::new())),
            updates,
        }
    }

    /// Current mirror contents.
    pub async fn tasks(&self) -> Vec<Task> {
        self.mirror.lock().await.clone()
    }

    /// Apply a viewer message to the mirror and rebroadcast the full list
    /// to every subscriber, the sender included. `tasks` messages only
    /// originate from the relay and are ignored on the way in.
    pub async fn apply(&self, msg: Message) {
        let snapshot = {
            let mut mirror = self.mirror.lock().await;
            match msg {
                Message::AddTask { task } => mirror.push(task),
                Message::ReplaceTasks { tasks } => *mirror = tasks,
                Message::Tasks { .. } => return,
            }
            mirror.clone()
        };
        // No receivers is fine: nobody is watching right now.
        let _ = self.updates.send(snapshot);
    }

    /// Accept loop. Each connection gets its own task.
    pub async fn serve(self, listener: TcpListener) -> std::io::Result<()> {
        loop {
            let (socket, addr) = listener.accept().await?;
            log::info!("viewer connected: {addr}");
            let relay = self.clone();
            tokio::spawn(async move {
                if let Err(e) = relay.handle_connection(socket).await {
                    log::debug!("viewer {addr} dropped: {e}");
                }
                log::info!("viewer disconnected: {addr}");
            });
        }
    }

    async fn handle_connection(&self, socket: TcpStream) -> std::io::Result<()> {
        let (reader, mut writer) = socket.into_split();
        let mut updates = self.updates.subscribe();

        // Snapshot semantics: every accept starts with the full list.
        send_snapshot(&mut writer, self.tasks().await).await?;

        let mut lines = BufReader::new(reader).lines();
        loop {
            tokio::select! {
                update = updates.recv() => {
                    match update {
                        Ok(tasks) => send_snapshot(&mut writer, tasks).await?,
                        Err(broadcast::error::RecvError::Lagged(_)) => {
                            // Skipped intermediate states; the current
                            // snapshot is all a viewer ever needs.
                            send_snapshot(&mut writer, self.tasks().await).await?;
                        }
                        Err(broadcast::error::RecvError::Closed) => break,
                    }
                }
                line = lines.next_line() => {
                    match line? {
                        Some(text) => match Message::from_line(&text) {
                            Ok(msg) => self.apply(msg).await,
                            Err(e) => log::warn!("malformed message: {e}"),
                        },
                        None => break,
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for Relay {
    fn default() -> Self {
        Self::new()
    }
}

async fn send_snapshot(writer: &mut OwnedWriteHalf, tasks: Vec<Task>) -> std::io::Result<()> {
    let line = Message::Tasks { tasks }.to_line();
    writer.write_all(line.as_bytes()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn add_task_appends_to_the_mirror() {
        let relay = Relay::new();
        let task = Task::new("Meditate").unwrap();
        relay.apply(Message::AddTask { task: task.clone() }).await;
        assert_eq!(relay.tasks().await, vec![task]);
    }

    #[tokio::test]
    async fn replace_is_last_write_wins_not_a_merge() {
        let relay = Relay::new();
        let list_a = vec![Task::new("from viewer A").unwrap()];
        let list_b = vec![Task::new("from viewer B").unwrap()];

        relay.apply(Message::ReplaceTasks { tasks: list_a.clone() }).await;
        relay.apply(Message::ReplaceTasks { tasks: list_b.clone() }).await;

        let final_state = relay.tasks().await;
        assert_eq!(final_state, list_b);
        // Never a union of the two lists.
        assert_eq!(final_state.len(), 1);
    }

    #[tokio::test]
    async fn inbound_tasks_message_is_ignored() {
        let relay = Relay::new();
        relay
            .apply(Message::Tasks {
                tasks: vec![Task::new("spoofed").unwrap()],
            })
            .await;
        assert!(relay.tasks().await.is_empty());
    }
}
