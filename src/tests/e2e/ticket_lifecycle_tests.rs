use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::tests::fixtures::state::make_test_state;

const COMICON: &str = include_str!("../fixtures/json/event_registration.json");

#[fixture]
fn app() -> Router {
    router(make_test_state())
}

fn json_request(method: &str, uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

fn ticket_body(event_id: i64, holder: &str, price: Option<&str>) -> String {
    let mut body = serde_json::json!({
        "eventId": event_id,
        "holderName": holder,
        "holderEmail": format!("{}@example.com", holder.to_lowercase()),
    });
    if let Some(price) = price {
        body["price"] = serde_json::Value::String(price.to_string());
    }
    body.to_string()
}

#[rstest]
#[tokio::test]
async fn it_should_sell_tickets_for_an_event_and_clean_up(app: Router) {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/event", COMICON.to_string()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let (status, event) = get_json(&app, "/api/event/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(event["name"], "comicon");

    for (holder, price) in [("Ann", Some("49.00")), ("Bob", None)] {
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/ticket", ticket_body(1, holder, price)))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let (_, tickets) = get_json(&app, "/api/ticket/event/1").await;
    let tickets = tickets.as_array().unwrap().clone();
    assert_eq!(tickets.len(), 2);
    assert!(tickets.iter().all(|t| t["status"] == "Available"));
    assert!(tickets.iter().all(|t| t["purchaseDate"].is_null()));
    assert_eq!(tickets[0]["price"], 49.0);
    assert_eq!(tickets[1]["price"], 0.0);

    let response = app
        .clone()
        .oneshot(json_request("PUT", "/api/ticket/2", ticket_body(1, "Bobby", None)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let (_, ticket) = get_json(&app, "/api/ticket/2").await;
    assert_eq!(ticket["holderName"], "Bobby");

    let response = app
        .clone()
        .oneshot(Request::delete("/api/event/1").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // No cascade: tickets outlive their event.
    let (_, tickets) = get_json(&app, "/api/ticket/event/1").await;
    assert_eq!(tickets.as_array().unwrap().len(), 2);
}

#[rstest]
#[tokio::test]
async fn it_should_accept_tickets_for_an_unknown_event(app: Router) {
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/ticket", ticket_body(999, "Orphan", None)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let (status, event) = get_json(&app, "/api/event/999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(event, serde_json::Value::Null);
}

#[rstest]
#[tokio::test]
async fn it_should_apply_one_of_two_concurrent_updates(app: Router) {
    app.clone()
        .oneshot(json_request("POST", "/api/ticket", ticket_body(1, "Ann", None)))
        .await
        .unwrap();

    let (first, second) = tokio::join!(
        app.clone()
            .oneshot(json_request("PUT", "/api/ticket/1", ticket_body(1, "Carl", None))),
        app.clone()
            .oneshot(json_request("PUT", "/api/ticket/1", ticket_body(1, "Dora", None))),
    );
    assert_eq!(first.unwrap().status(), StatusCode::OK);
    assert_eq!(second.unwrap().status(), StatusCode::OK);

    let (_, ticket) = get_json(&app, "/api/ticket/1").await;
    let holder = ticket["holderName"].as_str().unwrap();
    assert!(holder == "Carl" || holder == "Dora");
}
