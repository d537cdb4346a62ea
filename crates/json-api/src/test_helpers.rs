//! Test helpers.

use std::sync::Arc;

use salvo::{affix_state::inject, prelude::*};

use showroom_app::{
    context::AppContext,
    domain::{bookings::MockBookingsService, purchases::MockPurchasesService},
};

use crate::state::State;

fn strict_purchases_mock() -> MockPurchasesService {
    let mut purchases = MockPurchasesService::new();

    purchases.expect_dealer_list().never();
    purchases.expect_product_price().never();
    purchases.expect_order_confirmation().never();
    purchases.expect_purchase_stock().never();
    purchases.expect_payment().never();
    purchases.expect_payment_notification().never();
    purchases.expect_voucher_list().never();
    purchases.expect_order_status_webhook().never();
    purchases.expect_licence_status_webhook().never();
    purchases.expect_pre_order_confirmation().never();
    purchases.expect_pre_order_payment_confirm().never();
    purchases.expect_pre_order_payment_status().never();

    purchases
}

fn strict_bookings_mock() -> MockBookingsService {
    let mut bookings = MockBookingsService::new();

    bookings.expect_create_booking().never();
    bookings.expect_reschedule_booking().never();
    bookings.expect_cancel_booking().never();
    bookings.expect_bookings_by_customer().never();
    bookings.expect_time_slots().never();
    bookings.expect_ev_available().never();
    bookings.expect_service_bookings().never();

    bookings
}

fn state(purchases: MockPurchasesService, bookings: MockBookingsService) -> Arc<State> {
    State::from_app_context(AppContext {
        purchases: Arc::new(purchases),
        bookings: Arc::new(bookings),
    })
}

pub(crate) fn purchases_service(purchases: MockPurchasesService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(purchases, strict_bookings_mock())))
            .push(route),
    )
}

pub(crate) fn bookings_service(bookings: MockBookingsService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state(strict_purchases_mock(), bookings)))
            .push(route),
    )
}
