use crate::dispatcher::{HandlerRequest, HandlerResponse};
use serde_json::json;

/// GET `/items` — list items filtered by the `category` query parameter.
///
/// An absent `category` formats as the empty string; the request never
/// fails.
pub fn handle(req: HandlerRequest) -> HandlerResponse {
    let category = req.get_query_param("category").unwrap_or("");
    HandlerResponse::json(
        200,
        json!({ "message": format!("Fetching items in category: {category}") }),
    )
}
