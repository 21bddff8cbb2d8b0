use abstractions::{HandlerRef, PredicateHandler};
use common::HandlerConfig;

pub type AmenityRef = HandlerRef<String, String>;

pub const DEFAULT_REQUESTS: [&str; 3] = ["Gymnasium", "Pool", "Buffet"];

/// Handler that serves exactly the amenity named `tag`.
pub fn amenity(label: &str, tag: &str) -> AmenityRef {
    let tag = tag.to_owned();
    PredicateHandler::new(
        label,
        move |request: &String| *request == tag,
        |label, request| format!("{label}: I'll avail the {request}."),
    )
    .into_ref()
}

pub fn default_handlers() -> Vec<AmenityRef> {
    vec![
        amenity("Amenities1", "Gymnasium"),
        amenity("Amenities2", "Pool"),
        amenity("Amenities3", "Buffet"),
    ]
}

pub fn from_config(handlers: &[HandlerConfig]) -> Vec<AmenityRef> {
    handlers
        .iter()
        .map(|handler| amenity(&handler.label, &handler.tag))
        .collect()
}

pub fn default_requests() -> Vec<String> {
    DEFAULT_REQUESTS.iter().map(|request| request.to_string()).collect()
}
