use std::fmt;

use log::info;

use crate::amenities::AmenityRef;

/// What happened to one request sent through the chain.
///
/// Renders as `Client: Which {request}?` (one space after "Which")
/// followed by the indented answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Served { request: String, response: String },
    Unavailable { request: String },
}

impl Outcome {
    pub fn request(&self) -> &str {
        match self {
            Outcome::Served { request, .. } | Outcome::Unavailable { request } => request,
        }
    }

    pub fn is_served(&self) -> bool {
        matches!(self, Outcome::Served { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Client: Which {}?", self.request())?;
        match self {
            Outcome::Served { response, .. } => write!(f, "   {response}"),
            Outcome::Unavailable { request } => write!(f, "   {request} was unavailable."),
        }
    }
}

/// Sends a fixed sequence of requests to whichever handler it is given.
/// It never needs to know whether that handler heads a longer chain.
pub struct Client {
    requests: Vec<String>,
}

impl Client {
    pub fn new(requests: Vec<String>) -> Self {
        Self { requests }
    }

    pub fn serve(&self, entry: &AmenityRef) -> Vec<Outcome> {
        let handler = entry.borrow();
        info!("client: {} requests via {}", self.requests.len(), handler.label());

        self.requests
            .iter()
            .map(|request| match handler.handle(request.clone()) {
                Some(response) => Outcome::Served {
                    request: request.clone(),
                    response,
                },
                None => Outcome::Unavailable {
                    request: request.clone(),
                },
            })
            .collect()
    }
}
