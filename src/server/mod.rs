pub mod request;
pub mod response;
pub mod service;

pub use request::{parse_event, parse_query_params, ParsedEvent};
pub use response::{into_envelope, json_error};
pub use service::AppService;
