//! Booking Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use showroom_app::domain::bookings::BookingsServiceError;

use crate::observability::{Upstream, record_upstream_failure};

pub(crate) fn into_status_error(error: BookingsServiceError) -> StatusError {
    match error {
        BookingsServiceError::InvalidInput(message) => {
            warn!("rejected booking request: {message}");

            StatusError::bad_request().brief(message)
        }
        BookingsServiceError::Connector(source) => {
            error!("ERP booking call failed: {source}");
            record_upstream_failure(Upstream::Erp);

            StatusError::bad_gateway().brief("ERP request failed")
        }
    }
}
