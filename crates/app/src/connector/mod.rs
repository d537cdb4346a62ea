//! ERP connector.
//!
//! Typed operations over the two ERP channels: stored procedures in the ERP
//! database ([`ProcedureStore`]) and object-model RPC calls ([`ErpRpc`]).

use std::{fmt, sync::Arc};

use crate::erp::ErpRpc;

mod bookings;
mod errors;
pub mod grouping;
pub mod models;
mod orders;
mod payments;
mod pre_orders;
mod procedures;

pub use bookings::*;
pub use errors::*;
pub use orders::*;
pub use payments::*;
pub use pre_orders::*;
pub use procedures::*;

/// ERP models addressed over RPC.
pub mod erp_models {
    pub const APPOINTMENT: &str = "em.appointment.system";
    pub const SALES_ORDER: &str = "sale.order";
    pub const SALES_ORDER_LINE: &str = "sale.order.line";
    pub const COUPON_APPLY_CODE: &str = "sale.coupon.apply.code";
    pub const BOOKING_FEE: &str = "x.booking.fee";
}

/// Connector backed by the ERP database and its RPC endpoint.
#[derive(Clone)]
pub struct OdooConnector {
    procedures: Arc<dyn ProcedureStore>,
    rpc: Arc<dyn ErpRpc>,
}

impl OdooConnector {
    #[must_use]
    pub fn new(procedures: Arc<dyn ProcedureStore>, rpc: Arc<dyn ErpRpc>) -> Self {
        Self { procedures, rpc }
    }
}

impl fmt::Debug for OdooConnector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OdooConnector").finish_non_exhaustive()
    }
}
