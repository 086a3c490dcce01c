//! Request extractors that run `validator` rules before the handler sees
//! the payload. Rejections surface as structured `AppError`s.

use axum::extract::{FromRequest, FromRequestParts, Json, Query, Request};
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// JSON body extractor with validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

/// Query string extractor with validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> AppResult<Self> {
        let Query(value) = Query::<T>::from_request_parts(parts, state).await?;
        value.validate()?;
        Ok(ValidatedQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{header, Method};
    use serde::Deserialize;

    #[derive(Debug, Deserialize, Validate)]
    struct SignUpBody {
        #[validate(length(min = 4, max = 20, message = "Login id must be between 4 and 20 characters"))]
        login_id: String,
        #[validate(length(min = 6, max = 30, message = "Password must be between 6 and 30 characters"))]
        password: String,
    }

    #[tokio::test]
    async fn valid_body_passes() {
        let body = r#"{"login_id": "alice01", "password": "secret1"}"#;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let result = ValidatedJson::<SignUpBody>::from_request(request, &()).await;
        assert!(result.is_ok());
        let ValidatedJson(parsed) = result.unwrap();
        assert_eq!(parsed.login_id, "alice01");
    }

    #[tokio::test]
    async fn short_field_is_rejected_with_validation_error() {
        let body = r#"{"login_id": "al", "password": "secret1"}"#;
        let request = Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap();

        let result = ValidatedJson::<SignUpBody>::from_request(request, &()).await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[tokio::test]
    async fn malformed_json_is_rejected_as_bad_request() {
        let request = Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();

        let result = ValidatedJson::<SignUpBody>::from_request(request, &()).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }

    #[derive(Debug, Deserialize, Validate)]
    struct PageQuery {
        #[validate(range(min = 1, message = "Page must be at least 1"))]
        page: u32,
    }

    #[tokio::test]
    async fn query_validation_rejects_out_of_range() {
        let request = Request::builder()
            .method(Method::GET)
            .uri("/test?page=0")
            .body(Body::empty())
            .unwrap();
        let (mut parts, _) = request.into_parts();

        let result = ValidatedQuery::<PageQuery>::from_request_parts(&mut parts, &()).await;
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }
}
