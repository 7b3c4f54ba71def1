use axum::body::{Body, Bytes};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use conway::prelude::{advance, Board, DEFAULT_DIM};
use conway_server::{router, ServerConfig};
use conway_test_utils::{soup, BLINKER_H, BLINKER_V};
use http_body_util::BodyExt;
use tower::ServiceExt;

fn app() -> Router {
    router(&ServerConfig::default())
}

async fn send(app: Router, method: Method, uri: &str, body: impl Into<Body>) -> (StatusCode, Bytes) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes)
}

async fn post_game(body: impl Into<Body>) -> (StatusCode, Bytes) {
    send(app(), Method::POST, "/game", body).await
}

fn reason(bytes: &Bytes) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

// ── Successful advance ──────────────────────────────────────────────

#[tokio::test]
async fn blinker_round_trips_through_post_game() {
    let h = BLINKER_H.place(DEFAULT_DIM, (49, 50));
    let (status, bytes) = post_game(serde_json::to_vec(&h).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    let next: Board = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(next, BLINKER_V.place(DEFAULT_DIM, (49, 50)));
}

#[tokio::test]
async fn response_is_json_rows_of_booleans() {
    let b = soup(DEFAULT_DIM, 17, 30);
    let request = Request::builder()
        .method(Method::POST)
        .uri("/game")
        .body(Body::from(serde_json::to_vec(&b).unwrap()))
        .unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let rows: Vec<Vec<bool>> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(rows.len(), DEFAULT_DIM as usize);
    assert!(rows.iter().all(|r| r.len() == DEFAULT_DIM as usize));
    assert_eq!(rows, advance(&b).to_rows());
}

#[tokio::test]
async fn all_dead_board_stays_dead() {
    let dead = Board::dead(DEFAULT_DIM).unwrap();
    let (status, bytes) = post_game(serde_json::to_vec(&dead).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    let next: Board = serde_json::from_slice(&bytes).unwrap();
    assert!(next.is_extinct());
}

#[tokio::test]
async fn configured_dimension_is_served() {
    let config = ServerConfig {
        board_dim: 5,
        ..ServerConfig::default()
    };
    let h = BLINKER_H.place(5, (4, 2));
    let (status, bytes) = send(
        router(&config),
        Method::POST,
        "/game",
        serde_json::to_vec(&h).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let next: Board = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(next, BLINKER_V.place(5, (4, 2)));
}

// ── Rejected input ──────────────────────────────────────────────────

#[tokio::test]
async fn invalid_json_is_bad_request() {
    let (status, bytes) = post_game("[[true, false").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(reason(&bytes).starts_with("malformed board"));
}

#[tokio::test]
async fn empty_body_is_bad_request() {
    let (status, _) = post_game(Body::empty()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn empty_grid_is_bad_request() {
    let (status, bytes) = post_game("[]").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(reason(&bytes).contains("at least one row"));
}

#[tokio::test]
async fn wrong_element_type_is_bad_request() {
    let (status, _) = post_game("[[1, 0], [0, 1]]").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let (status, _) = post_game(r#"{"cells": []}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn non_square_grid_is_bad_request() {
    let mut rows = vec![vec![false; 100]; 100];
    rows[7].pop();
    let (status, bytes) = post_game(serde_json::to_vec(&rows).unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(reason(&bytes).contains("row 7 has 99 cells, expected 100"));
}

#[tokio::test]
async fn rectangular_grid_is_bad_request() {
    let rows = vec![vec![false; 100]; 99];
    let (status, _) = post_game(serde_json::to_vec(&rows).unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn wrong_dimension_is_bad_request() {
    let small = BLINKER_H.place(10, (3, 3));
    let (status, bytes) = post_game(serde_json::to_vec(&small).unwrap()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        reason(&bytes),
        "unsupported board size: expected a 100x100 board, got 10x10"
    );
}

#[tokio::test]
async fn oversized_body_is_payload_too_large() {
    let config = ServerConfig {
        max_body_bytes: 1024,
        ..ServerConfig::default()
    };
    let dead = Board::dead(DEFAULT_DIM).unwrap();
    let (status, _) = send(
        router(&config),
        Method::POST,
        "/game",
        serde_json::to_vec(&dead).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

// ── Routing ─────────────────────────────────────────────────────────

#[tokio::test]
async fn get_game_is_method_not_allowed() {
    let (status, _) = send(app(), Method::GET, "/game", Body::empty()).await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let (status, _) = send(app(), Method::POST, "/board", Body::empty()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn healthz_reports_board_dim() {
    let (status, bytes) = send(app(), Method::GET, "/healthz", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, serde_json::json!({ "status": "ok", "board_dim": 100 }));
}

// ── Concurrency ─────────────────────────────────────────────────────

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_requests_are_independent() {
    let app = app();
    let boards: Vec<Board> = (0..16).map(|seed| soup(DEFAULT_DIM, seed, 35)).collect();
    let handles: Vec<_> = boards
        .iter()
        .map(|b| {
            let app = app.clone();
            let body = serde_json::to_vec(b).unwrap();
            tokio::spawn(async move { send(app, Method::POST, "/game", body).await })
        })
        .collect();
    for (b, handle) in boards.iter().zip(handles) {
        let (status, bytes) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        let next: Board = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(next, advance(b));
    }
}
