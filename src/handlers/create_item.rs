use crate::dispatcher::{HandlerRequest, HandlerResponse};
use serde_json::{json, Value};

/// POST `/items` — acknowledge an item creation. Nothing is persisted.
///
/// The body must be a JSON object with a string `name` and a numeric
/// `price`; the price is rendered to exactly two decimal places. An
/// integer-looking price still satisfies the numeric check.
pub fn handle(req: HandlerRequest) -> HandlerResponse {
    let Some(fields) = req.body.as_ref().and_then(Value::as_object) else {
        return HandlerResponse::error(400, "Invalid JSON body");
    };

    let name = fields.get("name").and_then(Value::as_str);
    let price = fields.get("price").and_then(Value::as_f64);
    let (Some(name), Some(price)) = (name, price) else {
        return HandlerResponse::error(400, "Invalid data types in JSON body");
    };

    HandlerResponse::json(
        201,
        json!({ "message": format!("Created item: {name} with price: {price:.2}") }),
    )
}
