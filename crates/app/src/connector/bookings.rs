//! Test-drive and service booking operations.

use async_trait::async_trait;
use jiff::civil::Date;
use mockall::automock;
use serde_json::json;
use tracing::{info, instrument, warn};

use crate::{
    connector::{
        ConnectorError, OdooConnector, erp_models,
        grouping::{group_ev_available, group_time_slots},
        models::{
            BookingKind, BookingParams, BookingResponse, CancelBookingParams, EvAvailable,
            ON_WHEELS_APPOINTMENT_TYPE, ServiceBooking, SlotQuery, SlotRange, SlotTimeResponse,
        },
    },
    erp::{
        DelimitedReply, FAILURE_CODE, ReplyError, coerce::decode_json,
        fields::{MESSAGE, booking},
    },
};

#[automock]
#[async_trait]
/// Test-drive and service booking operations.
pub trait BookingConnector: Send + Sync {
    /// Book a test drive and confirm the appointment in the ERP.
    async fn create_booking(
        &self,
        booking: BookingParams,
    ) -> Result<BookingResponse, ConnectorError>;

    /// Move an existing test drive to another slot.
    async fn reschedule_booking(
        &self,
        booking: BookingParams,
    ) -> Result<BookingResponse, ConnectorError>;

    /// Cancel a test drive; the reply echoes the booking id.
    async fn cancel_booking(
        &self,
        cancel: CancelBookingParams,
    ) -> Result<BookingResponse, ConnectorError>;

    /// Test drives booked by a customer.
    async fn bookings_by_customer(&self, uid: i32) -> Result<Vec<BookingResponse>, ConnectorError>;

    /// Bookable slots in a date range, grouped per day.
    async fn time_slots(&self, query: SlotQuery) -> Result<Vec<SlotTimeResponse>, ConnectorError>;

    /// Locations with EV units available for a test drive.
    async fn ev_available(&self) -> Result<Vec<EvAvailable>, ConnectorError>;

    /// Service appointments of a customer.
    async fn service_bookings(&self, uid: String) -> Result<Vec<ServiceBooking>, ConnectorError>;
}

#[async_trait]
impl BookingConnector for OdooConnector {
    #[instrument(skip_all, fields(booking_type_id = booking.booking_type_id))]
    async fn create_booking(
        &self,
        booking: BookingParams,
    ) -> Result<BookingResponse, ConnectorError> {
        let raw = match booking.kind() {
            BookingKind::Standard => self.procedures.book_test_drive(&booking).await?,
            BookingKind::OnWheels => self.procedures.book_test_drive_on_wheels(&booking).await?,
        };

        let reply = DelimitedReply::parse(&raw);

        if !reply.is_success() {
            let message = reply.message()?;

            info!(message, "booking rejected");

            return Ok(BookingResponse::outcome(reply.code(), message));
        }

        let mut response = decode_booking(&reply)?;
        let booking_id = reply.int(booking::BOOKING_ID)?;

        if let Err(error) = self
            .rpc
            .execute_kw(
                erp_models::APPOINTMENT,
                "action_confirm",
                vec![json!([booking_id])],
                None,
            )
            .await
        {
            warn!(booking_id, %error, "booking created but not confirmed");

            return Ok(BookingResponse {
                code: FAILURE_CODE.to_string(),
                message: error.to_string(),
                booking_id: response.booking_id,
                booking_code: response.booking_code,
                ..BookingResponse::default()
            });
        }

        response.message = format!("{} {}", response.message, response.booking_code);

        Ok(response)
    }

    #[instrument(skip_all, fields(booking_id = booking.booking_id))]
    async fn reschedule_booking(
        &self,
        booking: BookingParams,
    ) -> Result<BookingResponse, ConnectorError> {
        let raw = self.procedures.reschedule_test_drive(&booking).await?;
        let reply = DelimitedReply::parse(&raw);

        if !reply.is_success() {
            let message = reply.message()?;

            info!(message, "reschedule rejected");

            return Ok(BookingResponse::outcome(reply.code(), message));
        }

        Ok(decode_booking(&reply)?)
    }

    #[instrument(skip_all, fields(booking_id = cancel.booking_id))]
    async fn cancel_booking(
        &self,
        cancel: CancelBookingParams,
    ) -> Result<BookingResponse, ConnectorError> {
        let raw = self.procedures.cancel_test_drive(&cancel).await?;
        let reply = DelimitedReply::parse(&raw);

        Ok(BookingResponse {
            booking_id: cancel.booking_id.to_string(),
            ..BookingResponse::outcome(reply.code(), reply.message()?)
        })
    }

    async fn bookings_by_customer(&self, uid: i32) -> Result<Vec<BookingResponse>, ConnectorError> {
        Ok(self.procedures.test_drives_by_customer(uid).await?)
    }

    #[instrument(skip_all, fields(product_id = query.product_id, location_id = query.location_id))]
    async fn time_slots(&self, query: SlotQuery) -> Result<Vec<SlotTimeResponse>, ConnectorError> {
        self.procedures.disable_stale_slots().await?;

        let range = SlotRange {
            product_id: query.product_id,
            location_id: query.location_id,
            start: parse_date(&query.start_date)?,
            end: parse_date(&query.end_date)?,
            appointment_type_id: query.appointment_type_id,
        };

        let rows = if query.appointment_type_id == ON_WHEELS_APPOINTMENT_TYPE {
            self.procedures.on_wheels_slot_rows(&range).await?
        } else {
            self.procedures.slot_rows(&range).await?
        };

        Ok(group_time_slots(rows))
    }

    async fn ev_available(&self) -> Result<Vec<EvAvailable>, ConnectorError> {
        let rows = self.procedures.ev_available_rows().await?;

        Ok(group_ev_available(rows))
    }

    async fn service_bookings(&self, uid: String) -> Result<Vec<ServiceBooking>, ConnectorError> {
        let raw = self.procedures.service_bookings(&uid).await?;

        Ok(decode_json(&raw)?)
    }
}

fn decode_booking(reply: &DelimitedReply) -> Result<BookingResponse, ReplyError> {
    Ok(BookingResponse {
        code: reply.code().to_string(),
        message: reply.text(MESSAGE)?,
        booking_id: reply.text(booking::BOOKING_ID)?,
        product_id: reply.text(booking::PRODUCT_ID)?,
        product_name: reply.text(booking::PRODUCT_NAME)?,
        booking_code: reply.text(booking::BOOKING_CODE)?,
        date: reply.text(booking::DATE)?,
        start_time: reply.text(booking::START_TIME)?,
        end_time: reply.text(booking::END_TIME)?,
        location_id: reply.text(booking::LOCATION_ID)?,
        location_name: reply.text(booking::LOCATION_NAME)?,
        address: reply.text(booking::ADDRESS)?,
        latitude: reply.text(booking::LATITUDE)?,
        longitude: reply.text(booking::LONGITUDE)?,
        city: reply.text(booking::CITY)?,
        state: reply.text(booking::STATE)?,
        country: reply.text(booking::COUNTRY)?,
        operating_hours: reply.text(booking::OPERATING_HOURS)?,
        ..BookingResponse::default()
    })
}

fn parse_date(value: &str) -> Result<Date, ConnectorError> {
    value
        .trim()
        .parse()
        .map_err(|error| ConnectorError::InvalidInput(format!("invalid date {value:?}: {error}")))
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;
    use serde_json::Value;
    use testresult::TestResult;

    use super::*;
    use crate::{
        connector::{MockProcedureStore, models::SlotRow, test_support::connector},
        erp::{ErpRpcError, MockErpRpc},
    };

    const BOOKED: &str = "0|Inserting Succesfully TD/D0202/22/00187|733|1|Product 1|TD/D0202/22/00187|2022-03-01|2022-03-01T11:00:00+07:00|2022-03-01T12:00:00+07:00|1|Indy Office Bintaro|Jl. Al Hidayah No.44|-6.27466|106.72046|Kota Tangerang Selatan|Banten|Indonesia|Everydays 10.00 - 18.00";
    const REJECTED: &str = "1| Slot ID not exists in database|0|||||||||||||||";

    fn standard_booking() -> BookingParams {
        BookingParams {
            location_id: 1,
            product_id: 1,
            booking_type_id: 1,
            slot_date: "2022-03-01".to_string(),
            slot_start_time: "11:00".to_string(),
            uid: 1083,
            ..BookingParams::default()
        }
    }

    fn expect_confirmation(rpc: &mut MockErpRpc, result: Result<Value, ErpRpcError>) {
        rpc.expect_execute_kw()
            .once()
            .withf(|model, method, args, kwargs| {
                model == erp_models::APPOINTMENT
                    && method == "action_confirm"
                    && *args == vec![json!([733])]
                    && kwargs.is_none()
            })
            .return_once(move |_, _, _, _| result);
    }

    #[tokio::test]
    async fn standard_booking_is_created_and_confirmed() -> TestResult {
        let mut procedures = MockProcedureStore::new();
        let mut rpc = MockErpRpc::new();

        procedures
            .expect_book_test_drive()
            .once()
            .withf(|booking| booking.uid == 1083)
            .return_once(|_| Ok(BOOKED.to_string()));

        procedures.expect_book_test_drive_on_wheels().never();

        expect_confirmation(&mut rpc, Ok(json!(true)));

        let response = connector(procedures, rpc)
            .create_booking(standard_booking())
            .await?;

        assert_eq!(response.code, "0");
        assert_eq!(
            response.message,
            "Inserting Succesfully TD/D0202/22/00187 TD/D0202/22/00187"
        );
        assert_eq!(response.booking_id, "733");
        assert_eq!(response.booking_code, "TD/D0202/22/00187");
        assert_eq!(response.latitude, "-6.27466");
        assert_eq!(response.longitude, "106.72046");
        assert_eq!(response.operating_hours, "Everydays 10.00 - 18.00");
        assert_eq!(response.notes, "");

        Ok(())
    }

    #[tokio::test]
    async fn other_booking_types_go_on_wheels() -> TestResult {
        let mut procedures = MockProcedureStore::new();
        let mut rpc = MockErpRpc::new();

        procedures.expect_book_test_drive().never();
        procedures
            .expect_book_test_drive_on_wheels()
            .once()
            .withf(|booking| booking.address == "Jl. Sudirman 1")
            .return_once(|_| Ok(BOOKED.to_string()));

        expect_confirmation(&mut rpc, Ok(json!(true)));

        let response = connector(procedures, rpc)
            .create_booking(BookingParams {
                booking_type_id: 2,
                address: "Jl. Sudirman 1".to_string(),
                ..standard_booking()
            })
            .await?;

        assert_eq!(response.code, "0");

        Ok(())
    }

    #[tokio::test]
    async fn rejected_booking_is_not_confirmed() -> TestResult {
        let mut procedures = MockProcedureStore::new();
        let mut rpc = MockErpRpc::new();

        procedures
            .expect_book_test_drive()
            .once()
            .return_once(|_| Ok(REJECTED.to_string()));

        rpc.expect_execute_kw().never();

        let response = connector(procedures, rpc)
            .create_booking(standard_booking())
            .await?;

        assert_eq!(response.code, "1");
        assert_eq!(response.message, " Slot ID not exists in database");
        assert_eq!(response.booking_id, "");

        Ok(())
    }

    #[tokio::test]
    async fn failed_confirmation_downgrades_to_failure() -> TestResult {
        let mut procedures = MockProcedureStore::new();
        let mut rpc = MockErpRpc::new();

        procedures
            .expect_book_test_drive()
            .once()
            .return_once(|_| Ok(BOOKED.to_string()));

        expect_confirmation(
            &mut rpc,
            Err(ErpRpcError::Fault("Appointment already confirmed".to_string())),
        );

        let response = connector(procedures, rpc)
            .create_booking(standard_booking())
            .await?;

        assert_eq!(response.code, "1");
        assert_eq!(response.message, "Appointment already confirmed");
        assert_eq!(response.booking_id, "733");

        Ok(())
    }

    #[tokio::test]
    async fn storage_error_is_propagated() {
        let mut procedures = MockProcedureStore::new();

        procedures
            .expect_book_test_drive()
            .once()
            .return_once(|_| Err(sqlx::Error::PoolTimedOut));

        let result = connector(procedures, MockErpRpc::new())
            .create_booking(standard_booking())
            .await;

        assert!(matches!(result, Err(ConnectorError::Sql(_))));
    }

    #[tokio::test]
    async fn short_success_reply_is_an_error() {
        let mut procedures = MockProcedureStore::new();

        procedures
            .expect_book_test_drive()
            .once()
            .return_once(|_| Ok("0|ok|733".to_string()));

        let result = connector(procedures, MockErpRpc::new())
            .create_booking(standard_booking())
            .await;

        assert!(matches!(result, Err(ConnectorError::Reply(_))));
    }

    #[tokio::test]
    async fn reschedule_keeps_backend_message() -> TestResult {
        let mut procedures = MockProcedureStore::new();

        procedures
            .expect_reschedule_test_drive()
            .once()
            .withf(|booking| booking.booking_id == 733)
            .return_once(|_| Ok(BOOKED.to_string()));

        let response = connector(procedures, MockErpRpc::new())
            .reschedule_booking(BookingParams {
                booking_id: 733,
                ..standard_booking()
            })
            .await?;

        assert_eq!(response.message, "Inserting Succesfully TD/D0202/22/00187");
        assert_eq!(response.date, "2022-03-01");

        Ok(())
    }

    #[tokio::test]
    async fn cancel_echoes_booking_id() -> TestResult {
        let mut procedures = MockProcedureStore::new();

        procedures
            .expect_cancel_test_drive()
            .once()
            .return_once(|_| Ok("0|Cancel Succesfully".to_string()));

        let response = connector(procedures, MockErpRpc::new())
            .cancel_booking(CancelBookingParams {
                booking_id: 733,
                category_id: 2,
                comment: "Changed plans".to_string(),
                updated_by: "customer".to_string(),
            })
            .await?;

        assert_eq!(response.booking_id, "733");
        assert_eq!(response.code, "0");
        assert_eq!(response.message, "Cancel Succesfully");

        Ok(())
    }

    fn slot_query(appointment_type_id: i32) -> SlotQuery {
        SlotQuery {
            product_id: 1,
            location_id: 1,
            start_date: "2022-03-01".to_string(),
            end_date: "2022-03-07".to_string(),
            appointment_type_id,
        }
    }

    #[tokio::test]
    async fn time_slots_use_standard_schedule() -> TestResult {
        let mut procedures = MockProcedureStore::new();

        procedures
            .expect_disable_stale_slots()
            .once()
            .return_once(|| Ok(()));

        procedures
            .expect_slot_rows()
            .once()
            .withf(|range| {
                range.start.to_string() == "2022-03-01" && range.end.to_string() == "2022-03-07"
            })
            .return_once(|_| {
                Ok(vec![SlotRow {
                    booking_date: "2022-03-01".to_string(),
                    available: 2,
                    ..SlotRow::default()
                }])
            });

        procedures.expect_on_wheels_slot_rows().never();

        let slots = connector(procedures, MockErpRpc::new())
            .time_slots(slot_query(1))
            .await?;

        assert_eq!(slots.len(), 1);

        Ok(())
    }

    #[tokio::test]
    async fn on_wheels_time_slots_use_on_wheels_schedule() -> TestResult {
        let mut procedures = MockProcedureStore::new();

        procedures
            .expect_disable_stale_slots()
            .once()
            .return_once(|| Ok(()));

        procedures.expect_slot_rows().never();
        procedures
            .expect_on_wheels_slot_rows()
            .once()
            .return_once(|_| Ok(Vec::new()));

        let slots = connector(procedures, MockErpRpc::new())
            .time_slots(slot_query(ON_WHEELS_APPOINTMENT_TYPE))
            .await?;

        assert!(slots.is_empty());

        Ok(())
    }

    #[tokio::test]
    async fn invalid_slot_date_is_rejected() {
        let mut procedures = MockProcedureStore::new();

        procedures
            .expect_disable_stale_slots()
            .once()
            .return_once(|| Ok(()));

        procedures.expect_slot_rows().never();

        let result = connector(procedures, MockErpRpc::new())
            .time_slots(SlotQuery {
                start_date: "01/03/2022".to_string(),
                ..slot_query(1)
            })
            .await;

        assert!(matches!(result, Err(ConnectorError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn service_bookings_decode_json() -> TestResult {
        let mut procedures = MockProcedureStore::new();

        procedures
            .expect_service_bookings()
            .once()
            .with(eq("1083"))
            .return_once(|_| {
                Ok(r#"[{"booking_id":12,"booking_code":"SV/001","status":false}]"#.to_string())
            });

        let bookings = connector(procedures, MockErpRpc::new())
            .service_bookings("1083".to_string())
            .await?;

        assert_eq!(bookings.len(), 1);
        assert_eq!(
            bookings.first().map(|booking| booking.booking_id.as_str()),
            Some("12")
        );

        Ok(())
    }
}
