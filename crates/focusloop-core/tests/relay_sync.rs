//! End-to-end relay tests over real localhost sockets.
//!
//! Each test binds an ephemeral port, serves the relay on a background
//! task, and drives it through `RelayClient` viewers.

use focusloop_core::sync::{Relay, RelayClient};
use focusloop_core::task::Task;
use tokio::net::TcpListener;
use tokio::time::{timeout, Duration};

async fn start_relay() -> (Relay, String) {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr").to_string();
    let relay = Relay::new();
    tokio::spawn(relay.clone().serve(listener));
    (relay, addr)
}

async fn recv_snapshot(client: &mut RelayClient) -> Vec<Task> {
    timeout(Duration::from_secs(5), client.next_snapshot())
        .await
        .expect("snapshot within deadline")
        .expect("relay still connected")
}

#[tokio::test]
async fn connect_receives_the_current_snapshot() {
    let (relay, addr) = start_relay().await;
    let seeded = Task::new("already shared").unwrap();
    relay
        .apply(focusloop_core::sync::Message::AddTask {
            task: seeded.clone(),
        })
        .await;

    let mut viewer = RelayClient::connect(&addr).await.unwrap();
    let snapshot = recv_snapshot(&mut viewer).await;
    assert_eq!(snapshot, vec![seeded]);
}

#[tokio::test]
async fn add_task_reaches_both_viewers_including_sender() {
    let (_relay, addr) = start_relay().await;

    let mut viewer_a = RelayClient::connect(&addr).await.unwrap();
    let mut viewer_b = RelayClient::connect(&addr).await.unwrap();
    // Drain the empty on-connect snapshots.
    assert!(recv_snapshot(&mut viewer_a).await.is_empty());
    assert!(recv_snapshot(&mut viewer_b).await.is_empty());

    let task = Task::new("Meditate").unwrap();
    viewer_a.add_task(task.clone()).await.unwrap();

    for viewer in [&mut viewer_a, &mut viewer_b] {
        let snapshot = recv_snapshot(viewer).await;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].text, "Meditate");
        assert!(!snapshot[0].done);
        assert_eq!(snapshot[0].id, task.id);
    }
}

#[tokio::test]
async fn divergent_replaces_end_as_one_list_never_a_union() {
    let (relay, addr) = start_relay().await;

    let mut viewer_a = RelayClient::connect(&addr).await.unwrap();
    let mut viewer_b = RelayClient::connect(&addr).await.unwrap();
    recv_snapshot(&mut viewer_a).await;
    recv_snapshot(&mut viewer_b).await;

    let list_a = vec![Task::new("A1").unwrap(), Task::new("A2").unwrap()];
    let list_b = vec![Task::new("B1").unwrap()];

    viewer_a.replace_tasks(list_a.clone()).await.unwrap();
    viewer_b.replace_tasks(list_b.clone()).await.unwrap();

    // Wait until both writes have been applied, then check the mirror.
    let final_state = timeout(Duration::from_secs(5), async {
        loop {
            let tasks = relay.tasks().await;
            if tasks == list_a || tasks == list_b {
                // Both messages are in flight; give the second a moment to
                // land, then take whatever won.
                tokio::time::sleep(Duration::from_millis(50)).await;
                return relay.tasks().await;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("mirror settles");

    // Whole-list last-write-wins: one of the two lists, never a merge.
    assert!(final_state == list_a || final_state == list_b);
    assert_ne!(final_state.len(), list_a.len() + list_b.len());
}

#[tokio::test]
async fn reconnecting_viewer_catches_up_via_snapshot() {
    let (_relay, addr) = start_relay().await;

    let mut viewer = RelayClient::connect(&addr).await.unwrap();
    recv_snapshot(&mut viewer).await;
    viewer.add_task(Task::new("persists on relay").unwrap()).await.unwrap();
    recv_snapshot(&mut viewer).await;
    drop(viewer);

    // A fresh connection re-requests nothing; the snapshot just arrives.
    let mut rejoined = RelayClient::connect(&addr).await.unwrap();
    let snapshot = recv_snapshot(&mut rejoined).await;
    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot[0].text, "persists on relay");
}
