use reqwest::header::CONTENT_TYPE;
use serde_json::Value;

use super::method::HttpMethod;
use super::response::ApiResponse;

/// Issue a GET request and capture the response.
pub async fn get(client: &reqwest::Client, url: &str) -> Result<ApiResponse, String> {
    send(client, HttpMethod::Get, url, None).await
}

/// Issue a POST request with a JSON body and capture the response.
pub async fn post_json(
    client: &reqwest::Client,
    url: &str,
    body: &Value,
) -> Result<ApiResponse, String> {
    send(client, HttpMethod::Post, url, Some(body)).await
}

async fn send(
    client: &reqwest::Client,
    method: HttpMethod,
    url: &str,
    body: Option<&Value>,
) -> Result<ApiResponse, String> {
    let mut req_builder = client.request(method.into(), url);
    if let Some(json) = body {
        req_builder = req_builder.json(json);
    }

    let response = req_builder
        .send()
        .await
        .map_err(|e| format!("{method} {url} failed: {e}"))?;

    let url = response.url().to_string();
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read response from {url}: {e}"))?;

    Ok(ApiResponse {
        url,
        status,
        content_type,
        body,
    })
}
