use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

/// Outcome of a request that did not produce a result envelope.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A path or query parameter is missing or could not be parsed.
    #[error("{0}")]
    BadRequest(String),

    /// The read succeeded but matched nothing.
    #[error("{0}")]
    NotFound(String),

    /// The store read itself failed.
    #[error("{0:#}")]
    Store(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct MessageJsonResp {
    message: String,
}

#[derive(Serialize)]
struct ErrJsonResp {
    error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            Self::BadRequest(hint) => tracing::warn!("reject request: {hint}"),
            Self::NotFound(message) => tracing::debug!("{message}"),
            Self::Store(err) => tracing::error!("fail to read store: {err:#}"),
        }

        let mut resp = HttpResponse::build(self.status_code());
        match self {
            Self::NotFound(message) => resp.json(MessageJsonResp {
                message: message.clone(),
            }),
            _ => resp.json(ErrJsonResp {
                error: self.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    async fn body_of(err: ApiError) -> (StatusCode, serde_json::Value) {
        let resp = err.error_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn test_not_found_uses_message_field() {
        let (status, body) = body_of(ApiError::NotFound("No Dishes Found.".into())).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({ "message": "No Dishes Found." }));
    }

    #[actix_web::test]
    async fn test_store_error_exposes_context_chain() {
        let err = anyhow::anyhow!("no such table: dishes").context("fail to fetch dishes");
        let (status, body) = body_of(ApiError::from(err)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "fail to fetch dishes: no such table: dishes"
        );
    }

    #[actix_web::test]
    async fn test_bad_request_uses_error_field() {
        let (status, body) = body_of(ApiError::BadRequest("bad id".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad id");
    }
}
