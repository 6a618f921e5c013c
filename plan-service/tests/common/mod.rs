use std::sync::Arc;

use auth::TokenClaims;
use auth::TokenVerifier;
use jsonwebtoken::EncodingKey;
use jsonwebtoken::Header;
use plan_service::inbound::http::router::create_router;

/// Secret shared between the spawned server and minted test tokens
pub const TEST_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub api_client: reqwest::Client,
}

impl TestApp {
    /// Spawn the application in a background task and return TestApp
    pub async fn spawn() -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let verifier = Arc::new(TokenVerifier::new(TEST_SECRET));
        let router = create_router(verifier);

        // Spawn server in background
        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            api_client: reqwest::Client::new(),
        }
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }

    /// Mint a signed token expiring `ttl_secs` from now. Negative values
    /// produce an already expired token.
    pub fn mint_token(&self, user_id: i64, email: &str, ttl_secs: i64) -> String {
        mint_token_with_secret(user_id, email, ttl_secs, TEST_SECRET)
    }
}

pub fn mint_token_with_secret(user_id: i64, email: &str, ttl_secs: i64, secret: &[u8]) -> String {
    let now = chrono::Utc::now().timestamp();
    let claims = TokenClaims {
        user_id,
        email: email.to_string(),
        exp: now + ttl_secs,
        iat: Some(now),
    };

    jsonwebtoken::encode(&Header::default(), &claims, &EncodingKey::from_secret(secret))
        .expect("Failed to encode token")
}
