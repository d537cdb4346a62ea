//! Storefront Notification Models

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Order status change reported by the ERP.
///
/// Fields this adapter does not know about are kept in `extra` and forwarded
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrderStatusNotification {
    #[serde(default)]
    pub invoice_number: String,

    #[serde(default)]
    pub status: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Licence plate registration status reported by the ERP.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlateStatusNotification {
    #[serde(default)]
    pub invoice_number: String,

    #[serde(default)]
    pub license_plate: String,

    #[serde(default)]
    pub status: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Storefront acknowledgement of a notification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationReply {
    pub success: bool,
    pub message: String,
}
