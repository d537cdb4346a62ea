//! App Router

use salvo::Router;

use crate::{bookings, pre_orders, purchases, webhooks};

pub(crate) fn app_router() -> Router {
    Router::new()
        .push(
            Router::with_path("purchases")
                .push(Router::with_path("dealers").post(purchases::dealers::handler))
                .push(Router::with_path("price").post(purchases::price::handler))
                .push(Router::with_path("stock").post(purchases::stock::handler))
                .push(
                    Router::with_path("order-confirmation")
                        .post(purchases::order_confirmation::handler),
                )
                .push(Router::with_path("payment").post(purchases::payment::handler))
                .push(
                    Router::with_path("payment-notification")
                        .post(purchases::payment_notification::handler),
                )
                .push(Router::with_path("vouchers").post(purchases::vouchers::handler)),
        )
        .push(
            Router::with_path("pre-orders")
                .push(Router::with_path("confirmation").post(pre_orders::confirmation::handler))
                .push(
                    Router::with_path("payment-confirm").post(pre_orders::payment_confirm::handler),
                )
                .push(
                    Router::with_path("payment-status").post(pre_orders::payment_status::handler),
                ),
        )
        .push(
            Router::with_path("webhooks")
                .push(Router::with_path("order-status").post(webhooks::order_status::handler))
                .push(Router::with_path("licence-status").post(webhooks::licence_status::handler)),
        )
        .push(
            Router::with_path("bookings")
                .post(bookings::create::handler)
                .push(Router::with_path("reschedule").post(bookings::reschedule::handler))
                .push(Router::with_path("cancel").post(bookings::cancel::handler))
                .push(Router::with_path("customers/{uid}").get(bookings::customer::handler))
                .push(Router::with_path("slots").post(bookings::slots::handler))
                .push(Router::with_path("ev-available").get(bookings::ev_available::handler))
                .push(Router::with_path("services/{uid}").get(bookings::services::handler)),
        )
}
