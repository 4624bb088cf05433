// cafe-client/tests/client_integration.rs
// Loader and order tests against a mock backend

use cafe_client::{CafeClient, ClientConfig, OrderFailure, OrderLine, OrderRequest, fallback};
use chrono::Utc;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> CafeClient {
    let config = ClientConfig::new(server.uri()).with_page_url(format!("{}/app/", server.uri()));
    CafeClient::from_config(config).unwrap()
}

fn sample_order() -> OrderRequest {
    OrderRequest::new(
        vec![
            OrderLine { id: 1, name: "Американо".into(), qty: 2, price: 150 },
            OrderLine { id: 2, name: "Капучино".into(), qty: 1, price: 210 },
        ],
        "You Coffee - ул. Кабардинская, 25",
        Some(1),
        None,
        Utc::now(),
    )
}

#[tokio::test]
async fn test_menu_uses_static_file_when_api_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/app/menu.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 42, "name": "Флэт уайт", "price": 240, "category": "drinks"}
        ])))
        .mount(&server)
        .await;

    let menu = client_for(&server).load_menu().await;
    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0].id, 42);
    assert_eq!(menu[0].name, "Флэт уайт");
    assert_ne!(menu, fallback::sample_menu());
}

#[tokio::test]
async fn test_menu_root_file_is_last_resort() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/menu.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 9, "name": "Раф", "price": 260, "category": "drinks"}
        ])))
        .mount(&server)
        .await;

    let menu = client_for(&server).load_menu().await;
    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0].id, 9);
}

#[tokio::test]
async fn test_menu_from_products_api() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/products"))
        .and(header("cache-control", "no-store"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "products": [{
                "id": 1, "name": "Американо", "price": 150, "discount_price": 130,
                "description": "250 мл", "category": {"name": "Напитки"},
                "is_available": true, "stock": 10, "restaurant_id": 1
            }]
        })))
        .mount(&server)
        .await;

    let menu = client_for(&server).load_menu().await;
    assert_eq!(menu.len(), 1);
    assert_eq!(menu[0].price, 130);
    assert_eq!(menu[0].category, "напитки");
    assert_eq!(menu[0].restaurant_id, Some(1));
}

#[tokio::test]
async fn test_menu_fallback_when_backend_down() {
    let server = MockServer::start().await;
    let menu = client_for(&server).load_menu().await;
    assert_eq!(menu, fallback::sample_menu());
}

#[tokio::test]
async fn test_catalog_loads_all_three() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/restaurants"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "restaurants": [
                {"id": 1, "name": "You Coffee (Nalchik)", "address": "г. Нальчик, ул. Кабардинская, 25"},
                {"id": 2, "name": "Coffee House (Moscow)", "address": "г. Москва, ул. Арбат, 15"}
            ]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/categories"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "categories": [{"id": 1, "name": "Напитки", "restaurant_id": 1}]
        })))
        .mount(&server)
        .await;

    let catalog = client_for(&server).load_catalog().await;
    let restaurants = catalog.restaurants.expect("restaurants loaded");
    assert_eq!(restaurants.len(), 2);
    assert_eq!(catalog.categories.len(), 1);
    assert_eq!(catalog.categories[0].slug, "напитки");
    // products endpoint not mounted: sample menu
    assert_eq!(catalog.menu, fallback::sample_menu());
}

#[tokio::test]
async fn test_order_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .and(body_partial_json(json!({"totalSum": 510, "restaurant_id": 1})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "success", "order_id": 17})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let response = client_for(&server).submit_order(&sample_order()).await.unwrap();
    assert!(response.is_success());
}

#[tokio::test]
async fn test_order_rejected_with_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"status": "error", "message": "X"})),
        )
        .mount(&server)
        .await;

    let failure = client_for(&server)
        .submit_order(&sample_order())
        .await
        .unwrap_err();
    assert_eq!(failure, OrderFailure::Api { message: "X".into() });
}

#[tokio::test]
async fn test_order_http_error_without_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/orders"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"detail": "boom"})))
        .mount(&server)
        .await;

    let failure = client_for(&server)
        .submit_order(&sample_order())
        .await
        .unwrap_err();
    assert_eq!(failure.user_message(), "Ошибка API: Неизвестная ошибка");
}

#[tokio::test]
async fn test_order_network_failure() {
    // Grab a free port, then close it so nothing is listening
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = CafeClient::from_config(ClientConfig::new(format!("http://127.0.0.1:{port}")))
        .unwrap();

    let failure = client.submit_order(&sample_order()).await.unwrap_err();
    assert!(matches!(failure, OrderFailure::Network(_)), "{failure:?}");
}
