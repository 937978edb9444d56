use crate::dispatcher::{HandlerRequest, HandlerResponse};
use serde_json::json;

/// GET `/items/:id` — fetch a single item by its path parameter.
///
/// The id is echoed into the message unmodified, whatever the URL carried.
pub fn handle(req: HandlerRequest) -> HandlerResponse {
    let id = req.get_path_param("id").unwrap_or("");
    HandlerResponse::json(
        200,
        json!({ "message": format!("Fetching item with ID: {id}") }),
    )
}
