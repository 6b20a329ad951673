use std::time::{Duration, Instant};

use game_client::UPDATE_COUNT;

use crate::helpers::{config, lines_with, run_client, TestServer};

#[tokio::test(flavor = "multi_thread")]
async fn test_echo_round_trip() {
    // Arrange
    let server = TestServer::spawn_echo().await;

    // Act
    let (result, output) =
        run_client(config(&server.addr, UPDATE_COUNT, Duration::from_millis(5))).await;

    // Assert
    let report = result.unwrap();
    assert!(report.is_complete());
    assert_eq!(report.updates, UPDATE_COUNT);
    assert_eq!(server.received(), UPDATE_COUNT);

    let sending = lines_with(&output, "Sending player position: ");
    let sent = lines_with(&output, "Sent player position: ");
    let received = lines_with(&output, "Received game state: ");
    assert_eq!(sending.len(), UPDATE_COUNT);
    assert_eq!(sending, sent);
    assert_eq!(sending, received);
    assert!(server.saw_close(Duration::from_secs(2)).await);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_payload_is_coordinate_pair() {
    // Arrange
    let server = TestServer::spawn_echo().await;

    // Act
    let (result, output) = run_client(config(&server.addr, 5, Duration::ZERO)).await;

    // Assert
    assert!(result.unwrap().is_complete());
    for payload in lines_with(&output, "Sending player position: ") {
        let (x, y) = serde_json::from_str::<(f32, f32)>(payload).unwrap();
        assert!((0.0..10.0).contains(&x), "x = {}", x);
        assert!((0.0..10.0).contains(&y), "y = {}", y);
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_large_reply_is_truncated() {
    // Arrange
    let server = TestServer::spawn_replying(vec![b's'; 2000]).await;

    // Act
    let (result, output) = run_client(config(&server.addr, 1, Duration::ZERO)).await;

    // Assert
    assert!(result.unwrap().is_complete());
    let received = lines_with(&output, "Received game state: ");
    assert_eq!(received.len(), 1);
    assert_eq!(received[0], "s".repeat(1024));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_updates_are_paced() {
    // Arrange
    let server = TestServer::spawn_echo().await;
    let interval = Duration::from_millis(200);

    // Act
    let started = Instant::now();
    let (result, _) = run_client(config(&server.addr, 3, interval)).await;
    let elapsed = started.elapsed();

    // Assert
    assert_eq!(result.unwrap().updates, 3);
    assert!(elapsed >= interval * 3, "finished after {:?}", elapsed);
    assert!(elapsed < interval * 3 + Duration::from_secs(2), "took {:?}", elapsed);
}
