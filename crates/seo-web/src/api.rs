//! API Client

use serde::{Deserialize, Serialize};

/// SEO suggestion as returned by the backend
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub improvements: Vec<String>,
}

/// Request SEO suggestions for the given content
pub async fn request_suggestions(content: &str) -> Result<Suggestion, String> {
    let client = reqwest::Client::new();

    let body = serde_json::json!({
        "content": content,
    });

    let response = client
        .post("/api/seo/suggest")
        .json(&body)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        response.json::<Suggestion>().await.map_err(|e| e.to_string())
    } else {
        let data: serde_json::Value = response.json().await.unwrap_or_default();
        Err(data["error"]
            .as_str()
            .unwrap_or("Failed to generate SEO suggestions. Please try again.")
            .to_string())
    }
}
