use lambda_http::http::StatusCode;
use lambda_http::Response as LambdaResponse;

use crate::common::utils::json_response;
use crate::common::Message;
use crate::store::StoreError;

pub const CREATE_VALIDATION_ERROR: &str = "Couldn't create the todo item.";
pub const UPDATE_VALIDATION_ERROR: &str = "Couldn't update the todo item.";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Required body field or path parameter is absent.
    #[error("{0}")]
    Validation(String),

    #[error("Item not found: {0}")]
    NotFound(String),

    /// Language detection or translation failed; carries the cause's message.
    #[error("[ErrorMessage]: {0}")]
    Translation(String),

    #[error(transparent)]
    Store(StoreError),

    #[error(transparent)]
    Http(#[from] lambda_http::http::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl From<StoreError> for Error {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound(id) => Error::NotFound(id),
            other => Error::Store(other),
        }
    }
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::Validation(_) => StatusCode::BAD_REQUEST,
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::Translation(_) => StatusCode::BAD_GATEWAY,
            Error::Store(_) | Error::Http(_) | Error::Json(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Shapes the error as a `{"message": ...}` envelope with its status code.
    pub fn into_response(self) -> Result<LambdaResponse<String>, lambda_http::Error> {
        let status = self.status_code();
        let body = Message {
            message: self.to_string(),
        };

        Ok(json_response(status, &body)?)
    }
}
