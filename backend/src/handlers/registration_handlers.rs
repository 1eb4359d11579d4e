use std::sync::Arc;
use axum::{
    body::Bytes,
    extract::State,
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde_json::Value;

use crate::api::{recaptcha, sheets_webhook};
use crate::handlers::api_error::ApiError;
use crate::handlers::registration_dtos::{RegistrationRequest, RegistrationResponse};
use crate::AppState;

/// `POST /api/register`: verify the CAPTCHA, then record the registration
/// in the spreadsheet webhook.
pub async fn register(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<RegistrationResponse>, ApiError> {
    let Some((secret, script_url)) = state.settings.registration_credentials() else {
        tracing::error!("RECAPTCHA_SECRET_KEY or GOOGLE_SCRIPT_URL is not set");
        return Err(ApiError::Configuration);
    };

    let body: Value = serde_json::from_slice(&body).map_err(|e| {
        tracing::error!("Unreadable registration body: {}", e);
        ApiError::Internal
    })?;
    let request = RegistrationRequest::from_json(body).ok_or_else(|| {
        tracing::error!("Registration body is not a JSON object");
        ApiError::Internal
    })?;

    if !request.has_required_fields() {
        return Err(ApiError::MissingFields);
    }
    let Some(token) = request.captcha_token.as_deref() else {
        return Err(ApiError::CaptchaRequired);
    };

    let verification = recaptcha::verify_token(
        &state.http_client,
        &state.settings.recaptcha_verify_url,
        secret,
        token,
    )
    .await
    .map_err(|e| {
        tracing::error!("Captcha verification request failed: {}", e);
        ApiError::Internal
    })?;

    if !verification.success {
        tracing::info!("Captcha rejected: {:?}", verification.error_codes);
        return Err(ApiError::CaptchaRejected);
    }
    tracing::debug!(
        "Captcha solved on {:?} at {:?}",
        verification.hostname,
        verification.challenge_ts
    );

    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    let payload = request.into_webhook_payload(timestamp);

    let receipt = sheets_webhook::forward_registration(&state.http_client, script_url, &payload)
        .await
        .map_err(|e| {
            tracing::error!("Google Apps Script error: {}", e);
            ApiError::Upstream
        })?;

    tracing::info!("Registration recorded with id {:?}", receipt.id);

    Ok(Json(RegistrationResponse {
        success: true,
        message: "Registration submitted successfully".to_string(),
        id: receipt.id,
    }))
}

/// `GET /api/register` is not a thing.
pub async fn register_method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::settings::Settings;
    use axum::{
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use serde_json::json;
    use tower::ServiceExt;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn state_for(server: &MockServer) -> Arc<AppState> {
        let settings = Settings {
            recaptcha_secret: Some("test-secret".to_string()),
            recaptcha_verify_url: format!("{}/recaptcha/api/siteverify", server.uri()),
            google_script_url: Some(format!("{}/macros/s/sheet/exec", server.uri())),
            ..Settings::default()
        };
        Arc::new(AppState::new(settings).unwrap())
    }

    fn valid_form() -> Value {
        json!({
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "phone": "+91 9876543210",
            "university": "RGIPT",
            "teamSize": 3,
            "techStack": ["Rust", "Figma"],
            "captchaToken": "good-token",
        })
    }

    async fn mount_captcha(server: &MockServer, success: bool) {
        Mock::given(method("POST"))
            .and(path("/recaptcha/api/siteverify"))
            .and(query_param("secret", "test-secret"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": success })))
            .mount(server)
            .await;
    }

    async fn send(state: Arc<AppState>, method: Method, body: Body) -> (StatusCode, Value) {
        let request = Request::builder()
            .method(method)
            .uri("/api/register")
            .header("content-type", "application/json")
            .body(body)
            .unwrap();
        let response = crate::app(state).oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, body)
    }

    async fn post(state: Arc<AppState>, body: Value) -> (StatusCode, Value) {
        send(state, Method::POST, Body::from(body.to_string())).await
    }

    #[tokio::test]
    async fn test_missing_required_fields() {
        let server = MockServer::start().await;
        for field in ["fullName", "email", "phone"] {
            let mut body = valid_form();
            body.as_object_mut().unwrap().remove(field);

            let (status, body) = post(state_for(&server), body).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "missing {field}");
            assert_eq!(body["error"], "Missing required fields");
        }
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_missing_captcha_token() {
        let server = MockServer::start().await;
        let mut body = valid_form();
        body.as_object_mut().unwrap().remove("captchaToken");

        let (status, body) = post(state_for(&server), body).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Captcha verification required");
    }

    #[tokio::test]
    async fn test_rejected_captcha() {
        let server = MockServer::start().await;
        mount_captcha(&server, false).await;
        Mock::given(method("POST"))
            .and(path("/macros/s/sheet/exec"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1})))
            .expect(0)
            .mount(&server)
            .await;

        let (status, body) = post(state_for(&server), valid_form()).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Captcha verification failed");
    }

    #[tokio::test]
    async fn test_unconfigured_server_refuses_everything() {
        let state = Arc::new(AppState::new(Settings::default()).unwrap());

        let (status, body) = post(state.clone(), valid_form()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Server configuration error");

        let (status, _) = post(state, json!({})).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_missing_webhook_url_only() {
        let server = MockServer::start().await;
        let settings = Settings {
            recaptcha_secret: Some("test-secret".to_string()),
            recaptcha_verify_url: format!("{}/recaptcha/api/siteverify", server.uri()),
            ..Settings::default()
        };
        let state = Arc::new(AppState::new(settings).unwrap());

        let (status, _) = post(state, valid_form()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_successful_registration() {
        let server = MockServer::start().await;
        mount_captcha(&server, true).await;
        Mock::given(method("POST"))
            .and(path("/macros/s/sheet/exec"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": "row-42"})))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = post(state_for(&server), valid_form()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["message"], "Registration submitted successfully");
        assert_eq!(body["id"], "row-42");

        let requests = server.received_requests().await.unwrap();
        let webhook_calls: Vec<_> = requests
            .iter()
            .filter(|r| r.url.path() == "/macros/s/sheet/exec")
            .collect();
        assert_eq!(webhook_calls.len(), 1);

        let forwarded: Value = serde_json::from_slice(&webhook_calls[0].body).unwrap();
        assert_eq!(forwarded["fullName"], "Ada Lovelace");
        assert_eq!(forwarded["teamSize"], 3);
        assert_eq!(forwarded["techStack"], json!(["Rust", "Figma"]));
        assert!(forwarded.get("captchaToken").is_none());
        let timestamp = forwarded["timestamp"].as_str().unwrap();
        assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
    }

    #[tokio::test]
    async fn test_webhook_failure() {
        let server = MockServer::start().await;
        mount_captcha(&server, true).await;
        Mock::given(method("POST"))
            .and(path("/macros/s/sheet/exec"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Script error"))
            .expect(1)
            .mount(&server)
            .await;

        let (status, body) = post(state_for(&server), valid_form()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Failed to submit registration");
    }

    #[tokio::test]
    async fn test_captcha_service_down() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/recaptcha/api/siteverify"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let (status, body) = post(state_for(&server), valid_form()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");
    }

    #[tokio::test]
    async fn test_unreadable_body_is_an_internal_error() {
        let server = MockServer::start().await;
        let (status, body) = send(state_for(&server), Method::POST, Body::from("{not json")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");

        let (status, body) = post(state_for(&server), json!(["fullName", "email"])).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], "Internal server error");

        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_is_not_allowed() {
        let server = MockServer::start().await;
        let (status, body) = send(state_for(&server), Method::GET, Body::empty()).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body["error"], "Method not allowed");

        let unconfigured = Arc::new(AppState::new(Settings::default()).unwrap());
        let (status, _) = send(unconfigured, Method::GET, Body::empty()).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}
