//! EV Availability Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    bookings::{errors::into_status_error, models::EvLocationResponse},
    extensions::*,
    state::State,
};

/// EV Availability Handler
///
/// Lists locations with the products they offer for test drives.
#[endpoint(
    tags("bookings"),
    summary = "List EV Availability",
    responses(
        (status_code = StatusCode::OK, description = "Locations with their products"),
        (status_code = StatusCode::BAD_GATEWAY, description = "ERP request failed"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<Vec<EvLocationResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let locations = state
        .app
        .bookings
        .ev_available()
        .await
        .map_err(into_status_error)?;

    Ok(Json(locations.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use showroom_app::{
        connector::models::{EvAvailable, EvProduct},
        domain::bookings::MockBookingsService,
    };

    use crate::test_helpers::bookings_service;

    use super::*;

    #[tokio::test]
    async fn test_ev_available_success() -> TestResult {
        let mut bookings = MockBookingsService::new();

        bookings.expect_ev_available().once().return_once(|| {
            Ok(vec![EvAvailable {
                location_id: 4,
                company_name: "Showroom Kemang".to_string(),
                products: vec![
                    EvProduct {
                        product_id: 9,
                        product_code: "EV-1".to_string(),
                        product_name: "EV One".to_string(),
                    },
                    EvProduct {
                        product_id: 10,
                        product_code: "EV-2".to_string(),
                        product_name: "EV Two".to_string(),
                    },
                ],
                ..EvAvailable::default()
            }])
        });

        let mut res = TestClient::get("http://example.com/bookings/ev-available")
            .send(&bookings_service(
                bookings,
                Router::with_path("bookings/ev-available").get(handler),
            ))
            .await;

        let body: Vec<EvLocationResponse> = res.take_json().await?;
        let location = body.first().ok_or("missing location")?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(location.company_name, "Showroom Kemang");
        assert_eq!(location.products.len(), 2);

        Ok(())
    }
}
