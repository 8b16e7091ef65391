//! Tests for the catalog client against an in-process mock catalog.

use axum::{Json, Router, extract::Path, http::StatusCode, routing::get};
use serde_json::{Value, json};
use std::time::Duration;

use strictly_creatures::{
    CatalogClient, FetchErrorKind, FetchStage, GameConfig, IdSampler, Phase, SessionController,
    SubjectSource, UNKNOWN_GENUS, UNKNOWN_LABEL,
};

fn pokemon_body(id: u32) -> Value {
    json!({
        "id": id,
        "name": "charizard",
        "types": [
            {"slot": 2, "type": {"name": "flying", "url": "https://pokeapi.co/api/v2/type/3/"}},
            {"slot": 1, "type": {"name": "fire", "url": "https://pokeapi.co/api/v2/type/10/"}}
        ],
        "sprites": {"front_default": format!("https://sprites.test/{id}.png")}
    })
}

fn species_body() -> Value {
    json!({
        "generation": {"name": "generation-i", "url": "x"},
        "color": {"name": "red", "url": "x"},
        "genera": [
            {"genus": "Pokémon Flamme", "language": {"name": "fr", "url": "x"}},
            {"genus": "Flame Pokémon", "language": {"name": "en", "url": "x"}}
        ]
    })
}

/// Serves the two catalog routes with the given statuses and species body.
async fn spawn_catalog(
    pokemon_status: StatusCode,
    species_status: StatusCode,
    species: Value,
) -> String {
    let app = Router::new()
        .route(
            "/pokemon/{id}",
            get(move |Path(id): Path<u32>| async move { (pokemon_status, Json(pokemon_body(id))) }),
        )
        .route(
            "/pokemon-species/{id}",
            get(move |Path(_id): Path<u32>| {
                let species = species.clone();
                async move { (species_status, Json(species)) }
            }),
        );
    serve(app).await
}

async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind mock catalog");
    let addr = listener.local_addr().expect("No local address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Mock catalog failed");
    });
    format!("http://{addr}")
}

fn client_for(base_url: &str) -> CatalogClient {
    let config = GameConfig::default()
        .with_api_base_url(base_url)
        .with_request_timeout_ms(2_000);
    CatalogClient::new(&config).expect("Client build failed")
}

#[tokio::test]
async fn test_fetch_subject_normalizes_response() {
    let base = spawn_catalog(StatusCode::OK, StatusCode::OK, species_body()).await;
    let subject = client_for(&base).fetch_subject(6).await.expect("Fetch failed");

    assert_eq!(*subject.id(), 6);
    assert_eq!(subject.name(), "charizard");
    assert_eq!(subject.categories(), &["fire".to_string(), "flying".to_string()]);
    assert_eq!(subject.generation(), "generation-i");
    assert_eq!(subject.color(), "red");
    assert_eq!(subject.genus(), "Flame Pokémon");
    assert_eq!(subject.image().as_deref(), Some("https://sprites.test/6.png"));
    assert!(subject.audio().is_none());
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let base = spawn_catalog(StatusCode::OK, StatusCode::OK, species_body()).await;
    let client = client_for(&format!("{base}/"));
    assert!(client.fetch_subject(6).await.is_ok());
}

#[tokio::test]
async fn test_missing_species_fields_default() {
    let base = spawn_catalog(StatusCode::OK, StatusCode::OK, json!({"genera": []})).await;
    let subject = client_for(&base).fetch_subject(6).await.expect("Fetch failed");
    assert_eq!(subject.generation(), UNKNOWN_LABEL);
    assert_eq!(subject.color(), UNKNOWN_LABEL);
    assert_eq!(subject.genus(), UNKNOWN_GENUS);
}

#[tokio::test]
async fn test_pokemon_status_failure() {
    let base = spawn_catalog(StatusCode::NOT_FOUND, StatusCode::OK, species_body()).await;
    let err = client_for(&base).fetch_subject(6).await.expect_err("Should fail");
    assert_eq!(err.stage, FetchStage::Pokemon);
    assert_eq!(err.kind, FetchErrorKind::Status(404));
}

#[tokio::test]
async fn test_species_status_failure() {
    let base = spawn_catalog(StatusCode::OK, StatusCode::INTERNAL_SERVER_ERROR, species_body()).await;
    let err = client_for(&base).fetch_subject(6).await.expect_err("Should fail");
    assert_eq!(err.stage, FetchStage::Species);
    assert_eq!(err.kind, FetchErrorKind::Status(500));
}

#[tokio::test]
async fn test_malformed_body_is_decode_error() {
    let app = Router::new().route("/pokemon/{id}", get(|| async { "not json" }));
    let base = serve(app).await;
    let err = client_for(&base).fetch_subject(1).await.expect_err("Should fail");
    assert_eq!(err.stage, FetchStage::Pokemon);
    assert!(matches!(err.kind, FetchErrorKind::Decode(_)));
}

#[tokio::test]
async fn test_slow_response_times_out() {
    let app = Router::new().route(
        "/pokemon/{id}",
        get(|| async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Json(pokemon_body(1))
        }),
    );
    let base = serve(app).await;
    let config = GameConfig::default()
        .with_api_base_url(base)
        .with_request_timeout_ms(100);
    let client = CatalogClient::new(&config).expect("Client build failed");

    let err = client.fetch_subject(1).await.expect_err("Should time out");
    assert_eq!(err.kind, FetchErrorKind::Timeout);
}

#[tokio::test]
async fn test_unreachable_catalog_is_transport_error() {
    // Bind then drop to get a port nothing listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    drop(listener);

    let err = client_for(&format!("http://{addr}"))
        .fetch_subject(1)
        .await
        .expect_err("Should fail");
    assert_eq!(err.stage, FetchStage::Pokemon);
    assert!(matches!(err.kind, FetchErrorKind::Transport(_)));
}

#[tokio::test]
async fn test_controller_error_phase_on_fetch_failure() {
    let base = spawn_catalog(StatusCode::OK, StatusCode::NOT_FOUND, species_body()).await;
    let client = client_for(&base);
    let mut controller = SessionController::new(IdSampler::new(6, 6));

    assert_eq!(controller.load(&client).await, Phase::Error);
    assert_eq!(controller.attempts(), 0);
    assert!(controller.subject().is_none());
}

#[tokio::test]
async fn test_controller_plays_fetched_subject() {
    let base = spawn_catalog(StatusCode::OK, StatusCode::OK, species_body()).await;
    let client = client_for(&base);
    let mut controller = SessionController::new(IdSampler::new(6, 6));

    assert_eq!(controller.load(&client).await, Phase::Playing);
    assert_eq!(controller.visible_hints(), vec!["Type: Fire / Flying".to_string()]);
    controller.submit_guess("Charizard");
    assert_eq!(controller.phase(), Phase::Won);
}

#[test]
fn test_stage_path_independent_of_error_text() {
    assert_eq!(FetchStage::Pokemon.path(), "pokemon");
    assert_eq!(FetchStage::Species.path(), "pokemon-species");
    assert_ne!(FetchStage::Species.to_string(), FetchStage::Species.path());
}

#[test]
fn test_invalid_base_url_is_config_error() {
    let config = GameConfig::default().with_api_base_url("not a url");
    let err = CatalogClient::new(&config).expect_err("Should reject base URL");
    assert!(err.message.contains("api_base_url"), "{}", err.message);
}
