use poem::{Endpoint, EndpointExt, Response, http::StatusCode};
use poem_openapi::{
    Object,
    error::{ContentTypeError, ParseParamError, ParseRequestPayloadError},
    payload::Json,
};

#[derive(Object, Debug, Clone, PartialEq)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            message: message.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

/// Renders bodies, parameters and content types that fail to parse with the
/// same JSON shape as every other error of the API.
pub fn with_json_errors<E>(endpoint: E) -> impl Endpoint<Output = Response>
where
    E: Endpoint,
{
    endpoint
        .catch_error(|err: ParseRequestPayloadError| async move {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("ValidationError", err.reason)),
            )
        })
        .catch_error(|err: ParseParamError| async move {
            (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new(
                    "ValidationError",
                    format!("{}: {}", err.name, err.reason),
                )),
            )
        })
        .catch_error(|err: ContentTypeError| async move {
            (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorResponse::new("UnsupportedMediaType", err.to_string())),
            )
        })
}
