//! Purchase Errors

use salvo::http::StatusError;
use tracing::{error, warn};

use showroom_app::{connector::ConnectorError, domain::purchases::PurchasesServiceError};

use crate::observability::{Upstream, record_upstream_failure};

pub(crate) fn into_status_error(error: PurchasesServiceError) -> StatusError {
    match error {
        PurchasesServiceError::Connector(ConnectorError::InvalidInput(message)) => {
            warn!("rejected purchase request: {message}");

            StatusError::bad_request().brief(message)
        }
        PurchasesServiceError::Connector(source) => {
            error!("ERP purchase call failed: {source}");
            record_upstream_failure(Upstream::Erp);

            StatusError::bad_gateway().brief("ERP request failed")
        }
        PurchasesServiceError::Storefront(source) => {
            error!("storefront notification failed: {source}");
            record_upstream_failure(Upstream::Storefront);

            StatusError::bad_gateway().brief("Storefront notification failed")
        }
    }
}
