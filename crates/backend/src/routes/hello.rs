//! Hello message endpoint.

use axum::Json;
use serde::Serialize;

/// Message carried by the `/api/hello` payload.
pub const HELLO_MESSAGE: &str = "Hello from the backend!";

#[derive(Debug, Serialize)]
pub struct HelloResponse {
    pub message: &'static str,
}

/// GET /api/hello — returns a fixed JSON greeting.
pub async fn get() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: HELLO_MESSAGE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_to_single_message_field() {
        let body = serde_json::to_string(&HelloResponse {
            message: HELLO_MESSAGE,
        })
        .unwrap();
        assert_eq!(body, r#"{"message":"Hello from the backend!"}"#);
    }

    #[tokio::test]
    async fn test_get_wraps_constant() {
        let Json(response) = get().await;
        assert_eq!(response.message, HELLO_MESSAGE);
    }
}
