use lambda_http::{Body, Error, Request, RequestExt, Response};
use serde::Serialize;
use tracing::{error, info};

use crate::error::LookupError;
use crate::store::UserStore;

const ALLOWED_HEADERS: &str = "origin,Accept,Authorization,Content-Type";

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

/// Look up the user named by the `userID` path parameter and answer with the
/// record as JSON. Every failure becomes a structured response carrying the
/// same headers as a success; nothing here terminates the invocation.
pub(crate) async fn function_handler<S: UserStore>(
    store: &S,
    event: Request,
) -> Result<Response<Body>, Error> {
    let params = event.path_parameters();
    let user_id = match params.first("userID") {
        Some(id) if !id.is_empty() => id,
        _ => return error_response(&LookupError::MissingUserId),
    };

    let user = match store.get_user(user_id).await {
        Ok(user) => user,
        Err(err) => {
            error!("lookup for {user_id} failed: {err}");
            return error_response(&err);
        }
    };

    let body = match serde_json::to_string(&user) {
        Ok(body) => body,
        Err(err) => {
            let err = LookupError::Serialization(err.to_string());
            error!("encoding response for {user_id} failed: {err}");
            return error_response(&err);
        }
    };

    info!("returning user {user_id}");
    json_response(200, body)
}

fn error_response(err: &LookupError) -> Result<Response<Body>, Error> {
    let body = serde_json::to_string(&ErrorResponse {
        error: err.to_string(),
    })?;
    json_response(err.status().as_u16(), body)
}

/// Build a JSON response with the fixed permissive CORS headers. The header
/// set is identical across the success and failure shapes.
fn json_response(status: u16, body: String) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Headers", ALLOWED_HEADERS)
        .header("Content-Type", "application/json")
        .body(Body::Text(body))?)
}
