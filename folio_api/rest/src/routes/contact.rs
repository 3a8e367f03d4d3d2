use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Extension, Json, Router,
};
use folio_core_contact_contracts::{ContactFeatureService, ContactRelayError};
use folio_models::client_address::ClientAddressInfo;
use tracing::warn;

use crate::{
    errors::{error, error_with_details, CONFIGURATION_MISSING, RELAY_FAILED, SUBMISSION_FAILED},
    models::{contact::ApiContactSubmission, ApiSuccess},
    CONTACT_ENDPOINT,
};

pub fn router(service: Arc<impl ContactFeatureService>) -> Router<()> {
    Router::new()
        .route(CONTACT_ENDPOINT, routing::post(send_telegram))
        .with_state(service)
}

async fn send_telegram(
    service: State<Arc<impl ContactFeatureService>>,
    client_address: Option<Extension<ClientAddressInfo>>,
    body: Bytes,
) -> Response {
    // the body is parsed regardless of the declared content type
    let submission = match serde_json::from_slice::<ApiContactSubmission>(&body) {
        Ok(submission) => submission,
        Err(err) => {
            warn!("rejected contact submission: {err}");
            return error(StatusCode::INTERNAL_SERVER_ERROR, SUBMISSION_FAILED);
        }
    };

    let client_address = client_address
        .map(|Extension(x)| x)
        .unwrap_or_default();

    match service
        .relay_submission(submission.into(), client_address)
        .await
    {
        Ok(()) => Json(ApiSuccess { success: true }).into_response(),
        Err(ContactRelayError::Configuration) => {
            error(StatusCode::INTERNAL_SERVER_ERROR, CONFIGURATION_MISSING)
        }
        Err(ContactRelayError::Rejected(details)) => {
            error_with_details(StatusCode::INTERNAL_SERVER_ERROR, RELAY_FAILED, details)
        }
        Err(ContactRelayError::Other(err)) => {
            tracing::error!("failed to relay contact submission: {err:#}");
            error(StatusCode::INTERNAL_SERVER_ERROR, SUBMISSION_FAILED)
        }
    }
}
