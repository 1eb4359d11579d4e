use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde_json::{Map, Value};
use thiserror::Error;

/// What the spreadsheet script answers after recording a row.
#[derive(Debug, Default, Deserialize)]
pub struct WebhookReceipt {
    #[serde(default)]
    pub id: Option<Value>,
}

#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("webhook answered {status}: {body}")]
    Rejected { status: StatusCode, body: String },
}

/// Posts one registration row to the spreadsheet webhook.
///
/// A 2xx answer whose body is not the expected JSON still counts as recorded,
/// the receipt just carries no id.
pub async fn forward_registration(
    client: &Client,
    url: &str,
    payload: &Map<String, Value>,
) -> Result<WebhookReceipt, WebhookError> {
    let response = client.post(url).json(payload).send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !status.is_success() {
        return Err(WebhookError::Rejected { status, body });
    }

    Ok(serde_json::from_str::<WebhookReceipt>(&body).unwrap_or_else(|e| {
        tracing::warn!("Webhook accepted the registration but sent an unreadable body: {}", e);
        WebhookReceipt::default()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn payload() -> Map<String, Value> {
        let mut map = Map::new();
        map.insert("fullName".into(), json!("Ada Lovelace"));
        map.insert("timestamp".into(), json!("2025-12-01T10:00:00.000Z"));
        map
    }

    #[tokio::test]
    async fn posts_json_and_reads_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "fullName": "Ada Lovelace",
                "timestamp": "2025-12-01T10:00:00.000Z",
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "row-17"})))
            .expect(1)
            .mount(&server)
            .await;

        let receipt = forward_registration(&Client::new(), &server.uri(), &payload())
            .await
            .unwrap();
        assert_eq!(receipt.id, Some(json!("row-17")));
    }

    #[tokio::test]
    async fn non_json_success_has_no_id() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let receipt = forward_registration(&Client::new(), &server.uri(), &payload())
            .await
            .unwrap();
        assert!(receipt.id.is_none());
    }

    #[tokio::test]
    async fn failure_status_keeps_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(502).set_body_string("quota exceeded"))
            .mount(&server)
            .await;

        let err = forward_registration(&Client::new(), &server.uri(), &payload())
            .await
            .unwrap_err();
        match err {
            WebhookError::Rejected { status, body } => {
                assert_eq!(status, StatusCode::BAD_GATEWAY);
                assert_eq!(body, "quota exceeded");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
