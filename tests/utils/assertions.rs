//! Test assertion helpers - fluent API for verifying test expectations
#![allow(dead_code)] // Test utilities may not all be used in every test

use axum::http::StatusCode;
use serde_json::Value;

// ============================================================================
// Assertion Helpers
// ============================================================================

pub struct SubmissionAssertion {
    status: StatusCode,
    body: Value,
}

impl SubmissionAssertion {
    pub fn new((status, body): (StatusCode, Value)) -> Self {
        Self { status, body }
    }

    /// Assert the submission was accepted and created a new record
    pub fn created(self) -> Self {
        assert_eq!(self.status, StatusCode::OK, "body: {}", self.body);
        assert_eq!(self.body["is_new"], true);
        assert_eq!(self.body["outcome"], "created");
        self
    }

    /// Assert the submission replaced an existing record
    pub fn updated(self) -> Self {
        assert_eq!(self.status, StatusCode::OK, "body: {}", self.body);
        assert_eq!(self.body["is_new"], false);
        assert_eq!(self.body["outcome"], "updated");
        self
    }

    pub fn dry_run(self) -> Self {
        assert_eq!(self.status, StatusCode::OK, "body: {}", self.body);
        assert_eq!(self.body["outcome"], "dry_run");
        self
    }

    /// Assert the submission was rejected with `message`
    pub fn rejected_with(self, message: &str) -> Self {
        assert_eq!(self.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(self.body["error"], message);
        self
    }

    pub fn summary(self, expected: &str) -> Self {
        assert_eq!(self.body["summary"], expected);
        self
    }

    pub fn game_number(self, expected: i64) -> Self {
        assert_eq!(self.body["result"]["game_number"], expected);
        self
    }

    pub fn score(self, expected: i64) -> Self {
        assert_eq!(self.body["result"]["score"], expected);
        self
    }

    /// Assert a derived detail such as `seconds` or `purple_first`
    pub fn detail(self, name: &str, expected: Value) -> Self {
        assert_eq!(self.body["result"][name], expected, "detail {name}");
        self
    }
}

pub struct LeaderboardAssertion {
    body: Value,
}

impl LeaderboardAssertion {
    pub fn new((status, body): (StatusCode, Value)) -> Self {
        assert_eq!(status, StatusCode::OK, "body: {body}");
        Self { body }
    }

    pub fn game_number(self, expected: i64) -> Self {
        assert_eq!(self.body["game_number"], expected);
        self
    }

    /// Assert the ranked (username, score) pairs in order
    pub fn ranked(self, expected: &[(&str, i64)]) -> Self {
        let entries = self.body["entries"].as_array().expect("entries array");
        let actual: Vec<(String, i64)> = entries
            .iter()
            .map(|entry| {
                (
                    entry["username"].as_str().unwrap().to_string(),
                    entry["score"].as_i64().unwrap(),
                )
            })
            .collect();
        let expected: Vec<(String, i64)> = expected
            .iter()
            .map(|(name, score)| (name.to_string(), *score))
            .collect();
        assert_eq!(actual, expected);

        for (index, entry) in entries.iter().enumerate() {
            assert_eq!(entry["rank"], (index + 1) as i64);
        }
        self
    }

    pub fn is_empty(self) -> Self {
        assert_eq!(self.body["entries"].as_array().map(Vec::len), Some(0));
        self
    }
}
