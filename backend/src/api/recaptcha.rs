use reqwest::Client;
use serde::Deserialize;

/// Body returned by the reCAPTCHA `siteverify` endpoint.
#[derive(Debug, Deserialize)]
pub struct SiteVerifyResponse {
    pub success: bool,
    #[serde(default)]
    pub challenge_ts: Option<String>,
    #[serde(default)]
    pub hostname: Option<String>,
    #[serde(rename = "error-codes", default)]
    pub error_codes: Vec<String>,
}

/// Asks the verification service whether `token` is a valid CAPTCHA solution.
pub async fn verify_token(
    client: &Client,
    verify_url: &str,
    secret: &str,
    token: &str,
) -> Result<SiteVerifyResponse, reqwest::Error> {
    client
        .post(verify_url)
        .query(&[("secret", secret), ("response", token)])
        .send()
        .await?
        .error_for_status()?
        .json::<SiteVerifyResponse>()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn sends_secret_and_token_as_query() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/siteverify"))
            .and(query_param("secret", "s3cret"))
            .and(query_param("response", "tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": true,
                "hostname": "irh.example",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let url = format!("{}/siteverify", server.uri());
        let result = verify_token(&Client::new(), &url, "s3cret", "tok").await.unwrap();

        assert!(result.success);
        assert_eq!(result.hostname.as_deref(), Some("irh.example"));
    }

    #[tokio::test]
    async fn reads_error_codes_on_rejection() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "success": false,
                "error-codes": ["invalid-input-response"],
            })))
            .mount(&server)
            .await;

        let result = verify_token(&Client::new(), &server.uri(), "s3cret", "bad").await.unwrap();

        assert!(!result.success);
        assert_eq!(result.error_codes, vec!["invalid-input-response".to_string()]);
    }

    #[tokio::test]
    async fn server_error_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = verify_token(&Client::new(), &server.uri(), "s3cret", "tok").await;
        assert!(result.is_err());
    }
}
