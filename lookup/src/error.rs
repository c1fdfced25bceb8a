use thiserror::Error;

/// Raised when no resource with the requested name exists.
///
/// This is an expected outcome, not a failure of the service: callers test for it
/// with [`is_not_found`] and treat everything else as a real error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("No {kind} matching name \"{name}\" was found{}", request_suffix(.last_request))]
pub struct NotFoundError {
    kind: String,
    name: String,
    last_request: Option<String>,
}

impl NotFoundError {
    #[must_use]
    pub fn new(kind: &str, name: &str) -> Self {
        Self {
            kind: kind.to_string(),
            name: name.to_string(),
            last_request: None,
        }
    }

    #[must_use]
    pub fn with_last_request(mut self, request: String) -> Self {
        self.last_request = Some(request);
        self
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn last_request(&self) -> Option<&str> {
        self.last_request.as_deref()
    }
}

fn request_suffix(request: &Option<String>) -> String {
    request
        .as_ref()
        .map(|request| format!(" (last request: {request})"))
        .unwrap_or_default()
}

/// The API answered with a status code the caller did not expect.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Received unexpected status code {status} - {reason} from {url}")]
pub struct ApiError {
    pub url: String,
    pub status: i32,
    pub reason: String,
}

pub fn is_not_found(error: &anyhow::Error) -> bool {
    error.downcast_ref::<NotFoundError>().is_some()
}

#[cfg(test)]
mod tests {
    use anyhow::{Context, anyhow};
    use pretty_assertions::assert_eq;

    use super::{ApiError, NotFoundError, is_not_found};

    #[test]
    fn message_names_the_resource_kind() {
        let error = NotFoundError::new("node", "alpha");
        assert_eq!(error.to_string(), "No node matching name \"alpha\" was found");

        let error = error.with_last_request("GET node 7".to_string());
        assert_eq!(
            error.to_string(),
            "No node matching name \"alpha\" was found (last request: GET node 7)"
        );
    }

    #[test]
    fn not_found_is_recognised_through_context() {
        let error = Err::<(), _>(NotFoundError::new("user", "bob"))
            .context("Failed to resolve owner")
            .unwrap_err();
        assert!(is_not_found(&error));
    }

    #[test]
    fn other_errors_are_not_not_found() {
        assert!(!is_not_found(&anyhow!("connection reset")));
        assert!(!is_not_found(&anyhow::Error::new(ApiError {
            url: "https://panel/nodes".to_string(),
            status: 500,
            reason: "Internal Server Error".to_string(),
        })));
    }
}
