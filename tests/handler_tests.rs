//! Handler-level tests: each handler is a pure function from request to
//! response, so every observable property can be checked without the
//! router or the invocation adapter in the loop.

use http::Method;
use microroute::dispatcher::{HandlerRequest, HeaderVec};
use microroute::handlers::{create_item, get_item, list_items};
use microroute::ids::RequestId;
use microroute::router::ParamVec;
use serde_json::{json, Value};
use std::sync::Arc;

fn request(method: Method, path: &str, handler_name: &str) -> HandlerRequest {
    HandlerRequest {
        request_id: RequestId::new(),
        method,
        path: path.to_string(),
        handler_name: handler_name.to_string(),
        path_params: ParamVec::new(),
        query_params: ParamVec::new(),
        headers: HeaderVec::new(),
        body: None,
    }
}

fn list_request(category: Option<&str>) -> HandlerRequest {
    let mut req = request(Method::GET, "/items", "list_items");
    if let Some(category) = category {
        req.query_params
            .push((Arc::from("category"), category.to_string()));
    }
    req
}

fn get_request(id: &str) -> HandlerRequest {
    let mut req = request(Method::GET, "/items/:id", "get_item");
    req.path_params.push((Arc::from("id"), id.to_string()));
    req
}

fn create_request(body: Option<Value>) -> HandlerRequest {
    let mut req = request(Method::POST, "/items", "create_item");
    req.body = body;
    req
}

#[test]
fn test_list_items_with_category() {
    let response = list_items::handle(list_request(Some("books")));
    assert_eq!(response.status, 200);
    assert_eq!(
        response.body,
        json!({"message": "Fetching items in category: books"})
    );
}

#[test]
fn test_list_items_without_category() {
    let response = list_items::handle(list_request(None));
    assert_eq!(response.status, 200);
    assert_eq!(
        response.body,
        json!({"message": "Fetching items in category: "})
    );
}

#[test]
fn test_list_items_empty_category_value() {
    let response = list_items::handle(list_request(Some("")));
    assert_eq!(
        response.body,
        json!({"message": "Fetching items in category: "})
    );
}

#[test]
fn test_get_item_numeric_id() {
    let response = get_item::handle(get_request("42"));
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({"message": "Fetching item with ID: 42"}));
}

#[test]
fn test_get_item_echoes_id_unmodified() {
    let response = get_item::handle(get_request("a b%2F!#"));
    assert_eq!(
        response.body,
        json!({"message": "Fetching item with ID: a b%2F!#"})
    );
}

#[test]
fn test_get_item_empty_id() {
    let response = get_item::handle(get_request(""));
    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({"message": "Fetching item with ID: "}));
}

#[test]
fn test_create_item_valid_body() {
    let response = create_item::handle(create_request(Some(
        json!({"name": "Widget", "price": 9.5}),
    )));
    assert_eq!(response.status, 201);
    assert_eq!(
        response.body,
        json!({"message": "Created item: Widget with price: 9.50"})
    );
}

#[test]
fn test_create_item_integer_price_is_numeric() {
    let response = create_item::handle(create_request(Some(json!({"name": "Widget", "price": 5}))));
    assert_eq!(response.status, 201);
    assert_eq!(
        response.body,
        json!({"message": "Created item: Widget with price: 5.00"})
    );
}

#[test]
fn test_create_item_price_rounds_to_two_decimals() {
    let response = create_item::handle(create_request(Some(
        json!({"name": "Widget", "price": 5.999}),
    )));
    assert_eq!(
        response.body,
        json!({"message": "Created item: Widget with price: 6.00"})
    );
}

#[test]
fn test_create_item_missing_price() {
    let response = create_item::handle(create_request(Some(json!({"name": "Widget"}))));
    assert_eq!(response.status, 400);
    assert_eq!(response.body, json!({"error": "Invalid data types in JSON body"}));
}

#[test]
fn test_create_item_missing_name() {
    let response = create_item::handle(create_request(Some(json!({"price": 1.0}))));
    assert_eq!(response.status, 400);
    assert_eq!(response.body, json!({"error": "Invalid data types in JSON body"}));
}

#[test]
fn test_create_item_name_not_a_string() {
    let response = create_item::handle(create_request(Some(json!({"name": 7, "price": 1.0}))));
    assert_eq!(response.status, 400);
    assert_eq!(response.body, json!({"error": "Invalid data types in JSON body"}));
}

#[test]
fn test_create_item_price_not_a_number() {
    let response = create_item::handle(create_request(Some(
        json!({"name": "Widget", "price": "9.5"}),
    )));
    assert_eq!(response.status, 400);
    assert_eq!(response.body, json!({"error": "Invalid data types in JSON body"}));
}

#[test]
fn test_create_item_absent_body() {
    let response = create_item::handle(create_request(None));
    assert_eq!(response.status, 400);
    assert_eq!(response.body, json!({"error": "Invalid JSON body"}));
}

#[test]
fn test_create_item_body_not_an_object() {
    let response = create_item::handle(create_request(Some(json!([1, 2, 3]))));
    assert_eq!(response.status, 400);
    assert_eq!(response.body, json!({"error": "Invalid JSON body"}));

    let response = create_item::handle(create_request(Some(json!(42))));
    assert_eq!(response.status, 400);
    assert_eq!(response.body, json!({"error": "Invalid JSON body"}));
}
