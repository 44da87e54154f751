//! API integration tests against a running server
//!
//! Start the server with an empty database, then run
//! `cargo test --test api_tests -- --ignored`.

use reqwest::Client;
use serde_json::{json, Value};
use uuid::Uuid;

const BASE_URL: &str = "http://localhost:8080/api/v1";
const PASSWORD: &str = "Str0ng!pass";

/// Register a fresh user and return its token and id
async fn register(client: &Client) -> (String, String) {
    let email = format!("user-{}@example.com", Uuid::new_v4());
    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "email": email,
            "password": PASSWORD,
            "confirm_password": PASSWORD,
            "first_name": "Test",
            "last_name": "User"
        }))
        .send()
        .await
        .expect("Failed to send register request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse register response");
    (
        body["token"].as_str().expect("No token in response").to_string(),
        body["user"]["id"].as_str().expect("No user id").to_string(),
    )
}

/// Create a property owned by the token holder using the first property type
async fn create_property(client: &Client, token: &str, price: &str) -> Value {
    let types: Value = client
        .get(format!("{}/property-types", BASE_URL))
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    let type_id = types[0]["id"].as_str().expect("No property type seeded");

    let response = client
        .post(format!("{}/properties", BASE_URL))
        .bearer_auth(token)
        .json(&json!({
            "title": "Test cottage",
            "description": "Integration test listing",
            "price_per_day": price,
            "address": "1 Test Street",
            "city": "Testville",
            "state_or_province": "Test County",
            "country": "Testland",
            "property_type_id": type_id
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    response.json().await.expect("Failed to parse response")
}

#[tokio::test]
#[ignore] // Run with: cargo test -- --ignored
async fn test_health_check() {
    let client = Client::new();

    let response = client
        .get(format!("{}/health", BASE_URL))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());

    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
#[ignore]
async fn test_register_and_login() {
    let client = Client::new();
    let email = format!("login-{}@example.com", Uuid::new_v4());

    let response = client
        .post(format!("{}/auth/register", BASE_URL))
        .json(&json!({
            "email": email,
            "password": PASSWORD,
            "confirm_password": PASSWORD,
            "first_name": "Ada",
            "last_name": "Lovelace"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);

    let response = client
        .post(format!("{}/auth/login", BASE_URL))
        .json(&json!({ "email": email.to_uppercase(), "password": PASSWORD }))
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert!(body["token"].is_string());
    assert_eq!(body["token_type"], "Bearer");
    assert_eq!(body["user"]["roles"][0], "renter");
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
#[ignore]
async fn test_duplicate_registration_conflicts() {
    let client = Client::new();
    let email = format!("dup-{}@example.com", Uuid::new_v4());
    let payload = json!({
        "email": email,
        "password": PASSWORD,
        "confirm_password": PASSWORD,
        "first_name": "Dup",
        "last_name": "User"
    });

    for expected in [201, 409] {
        let response = client
            .post(format!("{}/auth/register", BASE_URL))
            .json(&payload)
            .send()
            .await
            .expect("Failed to send request");
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
#[ignore]
async fn test_booking_price_is_computed_by_server() {
    let client = Client::new();
    let (token, user_id) = register(&client).await;
    let property = create_property(&client, &token, "50.00").await;

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "property_id": property["id"],
            "start_date": "2024-01-01",
            "end_date": "2024-01-03",
            "total_price": "1.00"
        }))
        .send()
        .await
        .expect("Failed to send request");

    assert_eq!(response.status(), 201);
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["total_price"], "150.00");
    assert_eq!(body["status"], "Pending");
    assert_eq!(body["booker_id"], user_id);
}

#[tokio::test]
#[ignore]
async fn test_quote_matches_inclusive_day_count() {
    let client = Client::new();
    let (token, _) = register(&client).await;
    let property = create_property(&client, &token, "100.00").await;

    let response = client
        .get(format!(
            "{}/bookings/quote?property_id={}&start_date=2024-01-01&end_date=2024-01-01",
            BASE_URL,
            property["id"].as_str().unwrap()
        ))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request");

    assert!(response.status().is_success());
    let body: Value = response.json().await.expect("Failed to parse response");
    assert_eq!(body["day_count"], 1);
    assert_eq!(body["total_price"], "100.00");
}

#[tokio::test]
#[ignore]
async fn test_inverted_range_stores_nothing() {
    let client = Client::new();
    let (token, _) = register(&client).await;
    let property = create_property(&client, &token, "75.25").await;

    let response = client
        .post(format!("{}/bookings", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({
            "property_id": property["id"],
            "start_date": "2024-03-10",
            "end_date": "2024-03-09"
        }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let bookings: Value = client
        .get(format!("{}/bookings", BASE_URL))
        .bearer_auth(&token)
        .send()
        .await
        .expect("Failed to send request")
        .json()
        .await
        .expect("Failed to parse response");
    assert_eq!(bookings.as_array().map(Vec::len), Some(0));
}

#[tokio::test]
#[ignore]
async fn test_review_rating_out_of_range() {
    let client = Client::new();
    let (token, _) = register(&client).await;
    let property = create_property(&client, &token, "80.00").await;

    let response = client
        .post(format!("{}/reviews", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "property_id": property["id"], "rating": 6 }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 400);

    let response = client
        .post(format!("{}/reviews", BASE_URL))
        .bearer_auth(&token)
        .json(&json!({ "property_id": property["id"], "rating": 4, "comment": "Cosy" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 201);
}

#[tokio::test]
#[ignore]
async fn test_other_users_cannot_edit_property() {
    let client = Client::new();
    let (owner_token, _) = register(&client).await;
    let (other_token, _) = register(&client).await;
    let property = create_property(&client, &owner_token, "60.00").await;

    let response = client
        .put(format!("{}/properties/{}", BASE_URL, property["id"].as_str().unwrap()))
        .bearer_auth(&other_token)
        .json(&json!({ "title": "Hijacked" }))
        .send()
        .await
        .expect("Failed to send request");
    assert_eq!(response.status(), 403);
}
