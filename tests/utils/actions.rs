use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt; // for `oneshot`

use super::setup::TestSetup;

// ============================================================================
// Action Helpers
// ============================================================================

impl TestSetup {
    /// Send a request through the router and decode the JSON body
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&body).unwrap_or(Value::Null);
        (status, json)
    }

    /// POST a result as `username`
    pub async fn submit(&self, username: &str, text: &str) -> (StatusCode, Value) {
        self.post_result(json!({ "text": text, "username": username }))
            .await
    }

    /// POST a result without storing it
    pub async fn submit_dry_run(&self, username: &str, text: &str) -> (StatusCode, Value) {
        self.post_result(json!({ "text": text, "username": username, "dry_run": true }))
            .await
    }

    async fn post_result(&self, body: Value) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri("/results")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        self.send(request).await
    }

    /// GET a path with no body
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
        self.send(request).await
    }

    // ============================================================================
    // Convenience Action Methods
    // ============================================================================

    pub async fn leaderboard(&self, game_type: &str, date: &str) -> (StatusCode, Value) {
        self.get(&format!("/leaderboard/{game_type}?date={date}"))
            .await
    }

    pub async fn all_leaderboards(&self, date: &str) -> (StatusCode, Value) {
        self.get(&format!("/leaderboard?date={date}")).await
    }
}
