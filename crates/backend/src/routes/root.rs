//! Liveness text at the site root.

/// Plain text body served at `/`.
pub const ROOT_BODY: &str = "Backend is working!";

/// GET / — confirms the backend is up.
pub async fn index() -> &'static str {
    ROOT_BODY
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_returns_constant() {
        assert_eq!(index().await, "Backend is working!");
    }
}
