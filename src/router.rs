use lambda_http::http::StatusCode;
use lambda_http::{Request as LambdaRequest, Response as LambdaResponse};
use tracing::{error, info};

use crate::common::errors::{Error, CREATE_VALIDATION_ERROR, UPDATE_VALIDATION_ERROR};
use crate::common::utils::{extract_body, json_response, path_parameter, path_segment};
use crate::common::{CreateTodo, Message, UpdateTodo};
use crate::service::TodoService;

pub const ENDPOINT_NOT_FOUND_ERROR: &str = "Error: Endpoint not found!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Create,
    Delete,
    Get,
    Show,
    Translate,
    Update,
}

/// Path segment to endpoint. The HTTP method plays no part in routing.
const ENDPOINTS: [(&str, Endpoint); 6] = [
    ("create", Endpoint::Create),
    ("delete", Endpoint::Delete),
    ("get", Endpoint::Get),
    ("show", Endpoint::Show),
    ("translate", Endpoint::Translate),
    ("update", Endpoint::Update),
];

impl Endpoint {
    pub fn from_segment(segment: &str) -> Option<Self> {
        ENDPOINTS
            .iter()
            .find(|(name, _)| *name == segment)
            .map(|(_, endpoint)| *endpoint)
    }
}

async fn process_request(
    endpoint: Endpoint,
    request: &LambdaRequest,
    service: &TodoService,
) -> Result<LambdaResponse<String>, Error> {
    info!(">> You have accessed the {:?} endpoint!", endpoint);

    match endpoint {
        Endpoint::Create => {
            let payload = extract_body::<CreateTodo>(request, CREATE_VALIDATION_ERROR)?;
            let item = service.create(payload).await?;
            json_response(StatusCode::OK, &item)
        }
        Endpoint::Delete => {
            let id = path_parameter(request, "id")?;
            let deleted = service.delete(&id).await?;
            json_response(StatusCode::OK, &deleted)
        }
        Endpoint::Get => {
            let id = path_parameter(request, "id")?;
            let item = service.get(&id).await?;
            json_response(StatusCode::OK, &item)
        }
        Endpoint::Show => {
            let items = service.show().await?;
            json_response(StatusCode::OK, &items)
        }
        Endpoint::Translate => {
            let id = path_parameter(request, "id")?;
            let lang = path_parameter(request, "lang")?;
            let item = service.translate(&id, &lang).await?;
            json_response(StatusCode::OK, &item)
        }
        Endpoint::Update => {
            let id = path_parameter(request, "id")?;
            let payload = extract_body::<UpdateTodo>(request, UPDATE_VALIDATION_ERROR)?;
            let item = service.update(&id, payload).await?;
            json_response(StatusCode::OK, &item)
        }
    }
}

/// Routes the request by its first path segment and turns every failure into
/// a `{"message": ...}` response carrying the error's status code.
#[tracing::instrument(skip(request, service), fields(path = %request.uri().path()))]
pub async fn dispatch(
    request: LambdaRequest,
    service: &TodoService,
) -> Result<LambdaResponse<String>, lambda_http::Error> {
    let segment = path_segment(&request);
    let Some(endpoint) = Endpoint::from_segment(&segment) else {
        info!("No endpoint for segment: {:?}", segment);
        let body = Message {
            message: ENDPOINT_NOT_FOUND_ERROR.into(),
        };
        return Ok(json_response(StatusCode::NOT_FOUND, &body)?);
    };

    match process_request(endpoint, &request, service).await {
        Ok(val) => Ok(val),
        Err(err) => {
            error!("{:?} failed: {:?}", endpoint, err);
            err.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_segments_map_to_endpoints() {
        assert_eq!(Endpoint::from_segment("create"), Some(Endpoint::Create));
        assert_eq!(Endpoint::from_segment("translate"), Some(Endpoint::Translate));
        assert_eq!(Endpoint::from_segment("Create"), None);
        assert_eq!(Endpoint::from_segment(""), None);
    }
}
