//! Webhook Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use showroom_app::storefront::models::NotificationReply;

/// Storefront acknowledgement relayed back to the ERP
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub(crate) struct NotificationResponse {
    pub success: bool,
    pub message: String,
}

impl From<NotificationReply> for NotificationResponse {
    fn from(reply: NotificationReply) -> Self {
        NotificationResponse {
            success: reply.success,
            message: reply.message,
        }
    }
}
