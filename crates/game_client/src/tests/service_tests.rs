use std::sync::Arc;

use super::*;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use shared::{domain::Square, protocol::GameResult};
use tokio::{net::TcpListener, sync::Mutex};

#[derive(Clone, Default)]
struct ServerState {
    requests: Arc<Mutex<Vec<String>>>,
}

impl ServerState {
    async fn record(&self, line: String) {
        self.requests.lock().await.push(line);
    }
}

fn state_body(moves: &[&str], result: Value) -> Value {
    json!({
        "fen": "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1",
        "hist": { "moves": moves, "result": result, "date": "2019.06.01" }
    })
}

async fn handle_get_game(State(state): State<ServerState>) -> Json<Value> {
    state.record("GET /game".into()).await;
    Json(state_body(&[], Value::Null))
}

async fn handle_delete_game(State(state): State<ServerState>) -> &'static str {
    state.record("DELETE /game".into()).await;
    "Deleted"
}

async fn handle_post_move(
    State(state): State<ServerState>,
    Path(token): Path<String>,
) -> Json<Value> {
    state.record(format!("POST /game/{token}")).await;
    Json(state_body(&["e4"], Value::Null))
}

async fn handle_put_game(State(state): State<ServerState>, Path(color): Path<String>) -> &'static str {
    state.record(format!("PUT /game/{color}")).await;
    "Changed"
}

async fn spawn_server(app: Router) -> Url {
    std::env::set_var("NO_PROXY", "127.0.0.1,localhost");
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });
    Url::parse(&format!("http://{addr}/")).expect("url")
}

async fn spawn_game_server() -> (HttpGameService, ServerState) {
    let state = ServerState::default();
    let app = Router::new()
        .route("/game", get(handle_get_game).delete(handle_delete_game))
        .route("/game/:arg", post(handle_post_move).put(handle_put_game))
        .with_state(state.clone());
    (HttpGameService::new(spawn_server(app).await), state)
}

fn sq(text: &str) -> Square {
    text.parse().expect("square")
}

#[tokio::test]
async fn fetch_state_gets_game_resource() {
    let (service, server) = spawn_game_server().await;

    let state = service.fetch_state().await.expect("fetch");

    assert!(state.history.moves.is_empty());
    assert_eq!(state.history.result, None);
    assert_eq!(*server.requests.lock().await, vec!["GET /game".to_string()]);
}

#[tokio::test]
async fn submit_move_posts_token_in_path() {
    let (service, server) = spawn_game_server().await;

    let token = MoveToken::new(sq("e7"), sq("e8"), Some(shared::domain::PromotionPiece::Queen));
    let state = service.submit_move(&token).await.expect("submit");

    assert_eq!(state.history.moves, vec!["e4".to_string()]);
    assert_eq!(
        *server.requests.lock().await,
        vec!["POST /game/e7e8q".to_string()]
    );
}

#[tokio::test]
async fn reset_puts_player_color_code() {
    let (service, server) = spawn_game_server().await;

    service.reset(Color::White).await.expect("reset white");
    service.reset(Color::Black).await.expect("reset black");
    service.delete_game().await.expect("delete");

    assert_eq!(
        *server.requests.lock().await,
        vec![
            "PUT /game/1".to_string(),
            "PUT /game/0".to_string(),
            "DELETE /game".to_string(),
        ]
    );
}

#[tokio::test]
async fn error_status_carries_body() {
    let app = Router::new().route(
        "/game/:arg",
        post(|| async { (StatusCode::BAD_REQUEST, "illegal move") }),
    );
    let service = HttpGameService::new(spawn_server(app).await);

    let err = service
        .submit_move(&MoveToken::new(sq("e2"), sq("e5"), None))
        .await
        .expect_err("should fail");

    match err {
        ServiceError::Status { status, body } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body, "illegal move");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn missing_history_is_a_decode_error() {
    let app = Router::new().route(
        "/game",
        get(|| async { Json(json!({ "fen": "8/8/8/8/8/8/8/8 w - - 0 1" })) }),
    );
    let service = HttpGameService::new(spawn_server(app).await);

    let err = service.fetch_state().await.expect_err("should fail");
    assert!(matches!(err, ServiceError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn finished_game_decodes_result() {
    let app = Router::new().route(
        "/game",
        get(|| async { Json(state_body(&["f3", "e5", "g4", "Qh4"], json!(-1))) }),
    );
    let service = HttpGameService::new(spawn_server(app).await);

    let state = service.fetch_state().await.expect("fetch");
    assert_eq!(state.history.result, Some(GameResult::BlackWins));
    assert!(state.is_finished());
}

#[test]
fn from_settings_builds_base_url() {
    let settings = ClientSettings {
        server_host: "chess.local".into(),
        server_port: 5000,
        request_timeout_secs: Some(5),
    };
    let service = HttpGameService::from_settings(&settings).expect("service");
    assert_eq!(service.base_url().as_str(), "http://chess.local:5000/");
    assert_eq!(
        service.endpoint("game/e2e4").expect("endpoint").as_str(),
        "http://chess.local:5000/game/e2e4"
    );
}

#[test]
fn invalid_host_is_rejected() {
    let settings = ClientSettings {
        server_host: "bad host name".into(),
        ..ClientSettings::default()
    };
    assert!(matches!(
        HttpGameService::from_settings(&settings),
        Err(ServiceError::InvalidAddress(_))
    ));
}
