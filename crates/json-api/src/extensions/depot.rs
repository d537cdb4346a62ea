//! Depot helper extensions.

use std::any::{Any, type_name};

use salvo::prelude::{Depot, StatusError};
use tracing::error;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    /// Injected value of type `T`, or a logged 500 when the router was built
    /// without it.
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>().map_err(|_missing| {
            error!(value = type_name::<T>(), "value missing from depot");

            StatusError::internal_server_error()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use salvo::http::StatusCode;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn injected_value_is_returned() -> TestResult {
        let mut depot = Depot::new();

        depot.inject(Arc::new(7_u8));

        assert_eq!(**depot.obtain_or_500::<Arc<u8>>()?, 7);

        Ok(())
    }

    #[test]
    fn missing_value_is_internal_error() {
        let depot = Depot::new();

        let status = depot.obtain_or_500::<Arc<u8>>().err();

        assert_eq!(
            status.map(|error| error.code),
            Some(StatusCode::INTERNAL_SERVER_ERROR)
        );
    }
}
