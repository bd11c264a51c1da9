use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use serde_json::Value;
use uuid::Uuid;

use wayfare_api::api::{create_router, AppState};
use wayfare_api::db::InMemoryStore;
use wayfare_api::models::{BudgetRange, InteractionType, Place, Preferences, User};

fn create_test_server(store: InMemoryStore) -> TestServer {
    let app = create_router(AppState::in_memory(store));
    TestServer::new(app).unwrap()
}

fn names(body: &[Value]) -> Vec<String> {
    body.iter()
        .map(|p| p["name"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server(InMemoryStore::new());
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["store"], "memory");
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let server = create_test_server(InMemoryStore::new());
    let request_id = Uuid::new_v4().to_string();

    let response = server
        .get("/health")
        .add_header(
            HeaderName::from_static("x-request-id"),
            HeaderValue::from_str(&request_id).unwrap(),
        )
        .await;

    response.assert_status_ok();
    assert_eq!(response.header("x-request-id"), request_id.as_str());
}

#[tokio::test]
async fn test_unknown_user_is_not_found() {
    let server = create_test_server(InMemoryStore::new());

    let response = server
        .get("/recommendations/ultimate")
        .add_query_param("userId", Uuid::new_v4())
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "User not found");
}

#[tokio::test]
async fn test_malformed_user_id_is_rejected() {
    let server = create_test_server(InMemoryStore::new());

    let response = server
        .get("/recommendations/ultimate")
        .add_query_param("userId", "not-a-uuid")
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    let message = body["error"].as_str().unwrap();
    assert!(message.starts_with("Failed to deserialize query string"));
}

#[tokio::test]
async fn test_missing_user_id_is_rejected_as_json() {
    let server = create_test_server(InMemoryStore::new());

    for path in ["/recommendations/ultimate", "/recommendations"] {
        let response = server.get(path).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        assert_eq!(response.header("content-type"), "application/json");
        let body: Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("userId"));
    }
}

#[tokio::test]
async fn test_no_candidates_is_empty_list() {
    let user = User::new();
    let store =
        InMemoryStore::with_data(vec![Place::new("Office Park", "office")], vec![user.clone()])
            .await;
    let server = create_test_server(store);

    let response = server
        .get("/recommendations/ultimate")
        .add_query_param("userId", user.id)
        .await;

    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_ultimate_recommendations_ranking() {
    let trattoria = Place::new("Trattoria", "restaurant")
        .with_cuisine("italian")
        .with_budget(30.0)
        .with_location("centro")
        .with_time_preference("evening");
    let market = Place::new("Night Market", "market").trending();
    let ice_rink = Place::new("Ice Rink", "sport").seasonal();
    let quiet = Place::new("Archive", "library");

    let user = User::new().with_preferences(Preferences {
        favorite_cuisines: ["italian".to_string()].into_iter().collect(),
        preferred_place_types: ["restaurant".to_string()].into_iter().collect(),
        budget_range: BudgetRange { min: 20.0, max: 50.0 },
    });

    let store = InMemoryStore::with_data(
        vec![quiet, ice_rink, market, trattoria],
        vec![user.clone()],
    )
    .await;
    let server = create_test_server(store);

    let response = server
        .get("/recommendations/ultimate")
        .add_query_param("userId", user.id)
        .add_query_param("location", "centro")
        .add_query_param("timeOfDay", "evening")
        .await;

    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    assert_eq!(names(&body), vec!["Trattoria", "Night Market", "Ice Rink"]);
    assert_eq!(body[0]["type"], "restaurant");
    assert_eq!(body[0]["cuisineType"], "italian");
}

#[tokio::test]
async fn test_collaborative_and_graph_signals_reach_the_endpoint() {
    let mut lighthouse = Place::new("Lighthouse", "landmark");
    let harbour = Place::new("Harbour", "landmark");
    let mut cliff_walk = Place::new("Cliff Walk", "trail");
    cliff_walk.relate_to(harbour.id);
    lighthouse.relate_to(Uuid::new_v4());

    let mut target = User::new();
    target.record(harbour.id, InteractionType::Visited);

    let mut peer = User::new();
    peer.record(harbour.id, InteractionType::Visited);
    peer.record(lighthouse.id, InteractionType::Favorite);

    let store = InMemoryStore::with_data(
        vec![lighthouse, harbour, cliff_walk],
        vec![target.clone(), peer],
    )
    .await;
    let server = create_test_server(store);

    let response = server
        .get("/recommendations/ultimate")
        .add_query_param("userId", target.id)
        .await;

    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    // collaborative: 5 * 0.2 = 1.0, graph: 0.3
    assert_eq!(names(&body), vec!["Lighthouse", "Cliff Walk"]);
}

#[tokio::test]
async fn test_favorite_recommendations() {
    let favorite = Place::new("Jazz Cellar", "bar").with_tags(["jazz", "late-night"]);
    let club = Place::new("Blue Note", "bar")
        .with_tags(["jazz"])
        .with_budget(25.0);
    let peer_pick = Place::new("Rooftop", "bar");

    let mut user = User::new();
    user.add_favorite(favorite.id);
    let mut peer = User::new();
    peer.add_favorite(favorite.id);
    peer.add_favorite(peer_pick.id);

    let store = InMemoryStore::with_data(
        vec![favorite, club, peer_pick],
        vec![user.clone(), peer],
    )
    .await;
    let server = create_test_server(store);

    let response = server
        .get("/recommendations")
        .add_query_param("userId", user.id)
        .await;

    response.assert_status_ok();
    let body: Vec<Value> = response.json();
    assert_eq!(names(&body), vec!["Blue Note", "Rooftop"]);
}

#[tokio::test]
async fn test_favorite_recommendations_unknown_user() {
    let server = create_test_server(InMemoryStore::new());

    let response = server
        .get("/recommendations")
        .add_query_param("userId", Uuid::new_v4())
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
}
