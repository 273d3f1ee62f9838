use color_eyre::{Report, Result, eyre::eyre};
use log::debug;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

mod error;
pub use error::GoogleApiError;

pub const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Builds `POST {base_url}/models/{model}:{method}?key={api_key}`
pub fn model_request(
    client: &Client,
    base_url: &str,
    model: &str,
    method: &str,
    api_key: &str,
) -> RequestBuilder {
    client
        .post(format!("{base_url}/models/{model}:{method}"))
        .query(&[("key", api_key)])
}

/// Sends `body` as json and decodes a successful response as `Resp`.
///
/// Non-success responses become a [`GoogleApiError`] when the body is a Google
/// error envelope, otherwise a plain error carrying status and body. The url is
/// stripped from transport errors, since it contains the api key.
pub async fn post_json<Req, Resp>(request: RequestBuilder, body: &Req) -> Result<Resp>
where
    Req: Serialize,
    Resp: DeserializeOwned,
{
    debug!("Json-data: {}", serde_json::to_string(body)?);
    let res = request
        .json(body)
        .send()
        .await
        .map_err(reqwest::Error::without_url)?;

    let status = res.status();
    let text = res.text().await.map_err(reqwest::Error::without_url)?;
    decode_response(status, &text)
}

/// A non-success status is an error, whatever the body holds
pub fn decode_response<Resp: DeserializeOwned>(status: StatusCode, body: &str) -> Result<Resp> {
    if !status.is_success() {
        return Err(error_from_body(status, body));
    }
    Ok(serde_json::from_str(body)?)
}

pub fn error_from_body(status: StatusCode, body: &str) -> Report {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) => {
            GoogleApiError::from_status(&error.status, error.code, error.message).into()
        }
        Err(_) => eyre!("Google API error {status}: {body}"),
    }
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    code: u16,
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_model::imagen::imagen_api::ResponseBody;

    #[test]
    fn error_envelope_becomes_typed_error() {
        let body = r#"{
            "error": {
                "code": 400,
                "message": "API key not valid. Please pass a valid API key.",
                "status": "INVALID_ARGUMENT"
            }
        }"#;

        let report = error_from_body(StatusCode::BAD_REQUEST, body);
        let err = report
            .downcast_ref::<GoogleApiError>()
            .expect("should be a GoogleApiError");
        assert!(matches!(err, GoogleApiError::InvalidArgument { .. }));
        assert_eq!(
            err.to_string(),
            "Invalid argument (400): API key not valid. Please pass a valid API key."
        );
    }

    #[test]
    fn unknown_body_keeps_status_and_text() {
        let report = error_from_body(StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded");
        assert!(report.downcast_ref::<GoogleApiError>().is_none());
        assert_eq!(
            report.to_string(),
            "Google API error 500 Internal Server Error: upstream exploded"
        );
    }

    const PREDICTIONS: &str = r#"{"predictions":[{"bytesBase64Encoded":"iVBORw0KGgo=","mimeType":"image/png"}]}"#;

    #[test]
    fn server_error_rejects_well_formed_body() {
        let res = decode_response::<ResponseBody>(StatusCode::INTERNAL_SERVER_ERROR, PREDICTIONS);
        let err = res.unwrap_err();
        assert!(err.to_string().starts_with("Google API error 500"), "{err}");
    }

    #[test]
    fn success_decodes_body() -> Result<()> {
        let res: ResponseBody = decode_response(StatusCode::OK, PREDICTIONS)?;
        assert_eq!(res.into_image()?.mime_type, "image/png");
        Ok(())
    }

    #[test]
    fn request_url_carries_model_method_and_key() -> Result<()> {
        let client = Client::new();
        let req = model_request(&client, BASE_URL, "imagen-4.0-generate-001", "predict", "abc")
            .build()?;
        assert_eq!(
            req.url().as_str(),
            "https://generativelanguage.googleapis.com/v1beta/models/imagen-4.0-generate-001:predict?key=abc"
        );
        Ok(())
    }
}
