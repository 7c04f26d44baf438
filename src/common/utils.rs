use lambda_http::http::StatusCode;
use lambda_http::{Request, RequestExt, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::common::errors::Error;

/// Decodes the request body as JSON whatever the declared content type.
/// An empty or undecodable body is reported as `Error::Validation(message)`.
pub fn extract_body<T: DeserializeOwned>(request: &Request, message: &str) -> Result<T, Error> {
    let body: &[u8] = request.body().as_ref();
    if body.is_empty() {
        return Err(Error::Validation(message.into()));
    }

    serde_json::from_slice(body).map_err(|_| Error::Validation(message.into()))
}

pub fn path_parameter(request: &Request, name: &str) -> Result<String, Error> {
    request
        .path_parameters_ref()
        .and_then(|params| params.first(name))
        .map(String::from)
        .ok_or_else(|| Error::Validation(format!("Missing path parameter: {name}")))
}

/// First segment of the request path, the routing key. Uses the gateway's raw
/// path when the event carried one, the request URI otherwise.
pub fn path_segment(request: &Request) -> String {
    let path = match request.raw_http_path() {
        "" => request.uri().path(),
        raw => raw,
    };

    path.split('/').nth(1).unwrap_or_default().to_string()
}

pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(serde_json::to_string(body)?)?;

    Ok(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::CreateTodo;
    use lambda_http::Body;
    use std::collections::HashMap;

    fn request(path: &str, body: Body) -> Request {
        lambda_http::http::Request::builder()
            .uri(path)
            .body(body)
            .unwrap()
    }

    #[test]
    fn segment_is_first_path_component() {
        assert_eq!(path_segment(&request("/create", Body::Empty)), "create");
        assert_eq!(path_segment(&request("/get/123", Body::Empty)), "get");
        assert_eq!(path_segment(&request("/", Body::Empty)), "");
        assert_eq!(path_segment(&request("//create", Body::Empty)), "");
    }

    #[test]
    fn segment_prefers_gateway_raw_path() {
        let req = request("/prod/create", Body::Empty).with_raw_http_path("/create");
        assert_eq!(path_segment(&req), "create");
    }

    #[test]
    fn body_is_decoded_without_content_type() {
        let req = request("/create", Body::from(r#"{"text":"buy milk"}"#));
        let payload: CreateTodo = extract_body(&req, "bad").unwrap();
        assert_eq!(payload.text.as_deref(), Some("buy milk"));
    }

    #[test]
    fn empty_or_broken_body_is_a_validation_error() {
        let empty = request("/create", Body::Empty);
        assert!(matches!(
            extract_body::<CreateTodo>(&empty, "bad"),
            Err(Error::Validation(msg)) if msg == "bad"
        ));

        let broken = request("/create", Body::from("{not json"));
        assert!(matches!(
            extract_body::<CreateTodo>(&broken, "bad"),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn path_parameters_are_looked_up_by_name() {
        let req = request("/get/abc", Body::Empty)
            .with_path_parameters(HashMap::from([("id".to_string(), "abc".to_string())]));

        assert_eq!(path_parameter(&req, "id").unwrap(), "abc");
        assert!(matches!(path_parameter(&req, "lang"), Err(Error::Validation(_))));
    }
}
