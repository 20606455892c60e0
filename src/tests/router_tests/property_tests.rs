use astra::Body;
use http::Method;
use serde_json::json;

use crate::errors::ServerError;
use crate::responses::error_to_response;
use crate::router::handle;
use crate::tests::utils::{body_json, make_db, make_zillow, request};

#[test]
fn create_then_find_returns_equal_record() {
    let db = make_db();
    let zillow = make_zillow();

    let payload = json!({
        "address": "1 Main St",
        "city": "Springfield",
        "state": "IL",
        "zip": "62704",
        "price": 250000.0
    });

    let req = request(Method::POST, "/property", Body::new(payload.to_string()));
    let mut resp = handle(req, &db, &zillow).unwrap();
    assert_eq!(resp.status(), 200);

    let created = body_json(&mut resp);
    let id = created["id"].as_i64().expect("store assigned an id");
    assert_eq!(created["address"], "1 Main St");
    assert_eq!(created["price"], 250000.0);

    let req = request(Method::GET, &format!("/property/{id}"), Body::empty());
    let mut resp = handle(req, &db, &zillow).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(body_json(&mut resp), created);
}

#[test]
fn list_contains_created_records() {
    let db = make_db();
    let zillow = make_zillow();

    for n in 0..3 {
        let payload = json!({ "address": format!("{n} Elm St"), "price": 100_000.0 + n as f64 });
        let req = request(Method::POST, "/property", Body::new(payload.to_string()));
        handle(req, &db, &zillow).unwrap();
    }

    let req = request(Method::GET, "/property", Body::empty());
    let mut resp = handle(req, &db, &zillow).unwrap();
    assert_eq!(resp.status(), 200);

    let listed = body_json(&mut resp);
    let listed = listed.as_array().expect("list response is an array");
    assert_eq!(listed.len(), 3);
    assert_eq!(listed[0]["address"], "0 Elm St");
    assert_eq!(listed[2]["address"], "2 Elm St");
}

#[test]
fn partial_payload_is_accepted() {
    let db = make_db();
    let zillow = make_zillow();

    // Nothing is required beyond field typing.
    let req = request(Method::POST, "/property", Body::new(r#"{"city":"Springfield"}"#));
    let mut resp = handle(req, &db, &zillow).unwrap();
    assert_eq!(resp.status(), 200);

    let created = body_json(&mut resp);
    assert_eq!(created["city"], "Springfield");
    assert!(created["address"].is_null());
}

#[test]
fn invalid_payload_is_bad_request() {
    let db = make_db();
    let zillow = make_zillow();

    let req = request(Method::POST, "/property", Body::new("not json"));
    let err = handle(req, &db, &zillow).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
    assert_eq!(error_to_response(err).status(), 400);

    // Right shape, wrong type on a field.
    let req = request(Method::POST, "/property", Body::new(r#"{"price":"expensive"}"#));
    let err = handle(req, &db, &zillow).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn find_missing_is_not_found() {
    let db = make_db();
    let zillow = make_zillow();

    let req = request(Method::GET, "/property/9999", Body::empty());
    let err = handle(req, &db, &zillow).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(error_to_response(err).status(), 404);
}

#[test]
fn non_numeric_id_is_bad_request() {
    let db = make_db();
    let zillow = make_zillow();

    let req = request(Method::GET, "/property/abc", Body::empty());
    let err = handle(req, &db, &zillow).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));
}

#[test]
fn delete_missing_id_succeeds() {
    let db = make_db();
    let zillow = make_zillow();

    let req = request(Method::DELETE, "/property/9999", Body::empty());
    let resp = handle(req, &db, &zillow).unwrap();
    assert_eq!(resp.status(), 204);
}

#[test]
fn delete_all_then_list_is_empty() {
    let db = make_db();
    let zillow = make_zillow();

    for _ in 0..2 {
        let req = request(
            Method::POST,
            "/property",
            Body::new(r#"{"address":"9 Oak Ave"}"#),
        );
        handle(req, &db, &zillow).unwrap();
    }

    let req = request(Method::DELETE, "/property", Body::empty());
    let resp = handle(req, &db, &zillow).unwrap();
    assert_eq!(resp.status(), 204);

    let req = request(Method::GET, "/property", Body::empty());
    let mut resp = handle(req, &db, &zillow).unwrap();
    assert_eq!(body_json(&mut resp), json!([]));
}

#[test]
fn unknown_route_is_not_found() {
    let db = make_db();
    let zillow = make_zillow();

    let req = request(Method::GET, "/nope", Body::empty());
    let err = handle(req, &db, &zillow).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));

    // Method not wired for the path.
    let req = request(Method::PUT, "/property", Body::empty());
    let err = handle(req, &db, &zillow).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

// The end-to-end lifecycle: store, list, fetch, delete, gone.
#[test]
fn property_lifecycle() {
    let db = make_db();
    let zillow = make_zillow();

    let payload = json!({
        "address": "1 Main St",
        "city": "Springfield",
        "state": "IL",
        "zip": "62704",
        "price": 250000.0
    });

    let req = request(Method::POST, "/property", Body::new(payload.to_string()));
    let mut resp = handle(req, &db, &zillow).unwrap();
    let created = body_json(&mut resp);
    let id = created["id"].as_i64().unwrap();

    let req = request(Method::GET, "/property", Body::empty());
    let mut resp = handle(req, &db, &zillow).unwrap();
    let listed = body_json(&mut resp);
    assert!(listed.as_array().unwrap().contains(&created));

    let req = request(Method::GET, &format!("/property/{id}"), Body::empty());
    let mut resp = handle(req, &db, &zillow).unwrap();
    assert_eq!(body_json(&mut resp), created);

    let req = request(Method::DELETE, &format!("/property/{id}"), Body::empty());
    let resp = handle(req, &db, &zillow).unwrap();
    assert_eq!(resp.status(), 204);

    let req = request(Method::GET, &format!("/property/{id}"), Body::empty());
    let err = handle(req, &db, &zillow).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}
