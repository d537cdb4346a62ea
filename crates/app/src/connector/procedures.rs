//! Stored procedures and views exposed by the ERP database.

use async_trait::async_trait;
use jiff_sqlx::Date as SqlxDate;
use mockall::automock;
use sqlx::{FromRow, PgPool, Postgres, Row, postgres::PgRow, query, query_as, query_scalar};

use crate::connector::models::{
    BookingParams, BookingResponse, CancelBookingParams, DealerQuery, EvAvailableRow,
    ProductLookup, SlotRange, SlotRow,
};

const BOOK_TEST_DRIVE_SQL: &str = include_str!("sql/book_test_drive.sql");
const BOOK_TEST_DRIVE_ON_WHEELS_SQL: &str = include_str!("sql/book_test_drive_on_wheels.sql");
const RESCHEDULE_TEST_DRIVE_SQL: &str = include_str!("sql/reschedule_test_drive.sql");
const CANCEL_TEST_DRIVE_SQL: &str = include_str!("sql/cancel_test_drive.sql");
const TEST_DRIVES_BY_CUSTOMER_SQL: &str = include_str!("sql/test_drives_by_customer.sql");
const DISABLE_STALE_SLOTS_SQL: &str = include_str!("sql/disable_stale_slots.sql");
const SLOT_ROWS_SQL: &str = include_str!("sql/slot_rows.sql");
const ON_WHEELS_SLOT_ROWS_SQL: &str = include_str!("sql/on_wheels_slot_rows.sql");
const EV_AVAILABLE_ROWS_SQL: &str = include_str!("sql/ev_available_rows.sql");
const VOUCHER_CODE_SQL: &str = include_str!("sql/voucher_code.sql");
const VOUCHER_LINE_SQL: &str = include_str!("sql/voucher_line.sql");
const SALES_ORDER_DETAIL_SQL: &str = include_str!("sql/sales_order_detail.sql");
const PRODUCT_TEMPLATE_PRICE_SQL: &str = include_str!("sql/product_template_price.sql");
const VOUCHER_LIST_SQL: &str = include_str!("sql/voucher_list.sql");
const GUEST_PRODUCT_SQL: &str = include_str!("sql/guest_product.sql");
const PRODUCT_SQL: &str = include_str!("sql/product.sql");
const PRODUCT_STOCK_SQL: &str = include_str!("sql/product_stock.sql");
const SERVICE_BOOKINGS_SQL: &str = include_str!("sql/service_bookings.sql");
const DEALERS_SQL: &str = include_str!("sql/dealers.sql");

/// Insert mode flag for the booking procedures.
const INSERT_MODE: &str = "I";

/// Stored procedures, functions and views used by the connector.
///
/// Procedures answering with a delimited reply or a JSON document return the
/// raw text; `NULL` comes back as an empty string.
#[automock]
#[async_trait]
pub trait ProcedureStore: Send + Sync {
    /// Book a test drive at a dealer.
    async fn book_test_drive(&self, booking: &BookingParams) -> Result<String, sqlx::Error>;

    /// Book a test drive delivered to the customer.
    async fn book_test_drive_on_wheels(
        &self,
        booking: &BookingParams,
    ) -> Result<String, sqlx::Error>;

    /// Move a booking to another slot.
    async fn reschedule_test_drive(&self, booking: &BookingParams)
    -> Result<String, sqlx::Error>;

    /// Cancel a booking.
    async fn cancel_test_drive(&self, cancel: &CancelBookingParams)
    -> Result<String, sqlx::Error>;

    /// Test drives booked by a customer, newest first.
    async fn test_drives_by_customer(&self, uid: i32)
    -> Result<Vec<BookingResponse>, sqlx::Error>;

    /// Deactivate slots that have already started.
    async fn disable_stale_slots(&self) -> Result<(), sqlx::Error>;

    /// Dealer slot rows in a date range.
    async fn slot_rows(&self, range: &SlotRange) -> Result<Vec<SlotRow>, sqlx::Error>;

    /// On-wheels slot rows in a date range.
    async fn on_wheels_slot_rows(&self, range: &SlotRange) -> Result<Vec<SlotRow>, sqlx::Error>;

    /// EV units offered for test drives, one row per unit.
    async fn ev_available_rows(&self) -> Result<Vec<EvAvailableRow>, sqlx::Error>;

    /// Coupon code and redemption flag of a voucher on a sales order.
    async fn voucher_code(&self, sales_order_id: i32, voucher_id: i32)
    -> Result<String, sqlx::Error>;

    /// Reward line added by the last redeemed voucher.
    async fn voucher_line(&self, sales_order_id: i32) -> Result<String, sqlx::Error>;

    /// Sales order summary as a JSON document.
    async fn sales_order_detail(&self, sales_order_id: i32) -> Result<String, sqlx::Error>;

    /// Template price list at a dealer as a JSON document.
    async fn product_template_price(
        &self,
        dealer_id: i32,
        product_code: &str,
    ) -> Result<String, sqlx::Error>;

    /// Vouchers offered for a sales order as a JSON document.
    async fn voucher_list(&self, sales_order_id: i32) -> Result<String, sqlx::Error>;

    /// Priced product lookup for a guest quote.
    async fn guest_product(&self, lookup: &ProductLookup) -> Result<String, sqlx::Error>;

    /// Product lookup for a customer order line.
    async fn product(&self, lookup: &ProductLookup) -> Result<String, sqlx::Error>;

    /// Stock of a product variant.
    async fn product_stock(&self, lookup: &ProductLookup) -> Result<String, sqlx::Error>;

    /// Service appointments of a customer as a JSON document.
    async fn service_bookings(&self, uid: &str) -> Result<String, sqlx::Error>;

    /// Dealers near a coordinate as a JSON document.
    async fn dealers(&self, query: &DealerQuery) -> Result<String, sqlx::Error>;
}

#[derive(Debug, Clone)]
pub struct PgProcedureStore {
    pool: PgPool,
}

impl PgProcedureStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn lookup(&self, sql: &str, lookup: &ProductLookup) -> Result<String, sqlx::Error> {
        let variants = &lookup.variants;

        query_scalar::<Postgres, Option<String>>(sql)
            .bind(lookup.dealer_id)
            .bind(lookup.customer_id)
            .bind(&variants.vehicle_code)
            .bind(&variants.color)
            .bind(&variants.battery)
            .bind(&variants.mirror)
            .bind(&variants.wheel)
            .fetch_one(&self.pool)
            .await
            .map(Option::unwrap_or_default)
    }
}

#[async_trait]
impl ProcedureStore for PgProcedureStore {
    async fn book_test_drive(&self, booking: &BookingParams) -> Result<String, sqlx::Error> {
        query_scalar::<Postgres, Option<String>>(BOOK_TEST_DRIVE_SQL)
            .bind(INSERT_MODE)
            .bind(booking.location_id)
            .bind(booking.product_id)
            .bind(booking.booking_type_id)
            .bind(&booking.slot_date)
            .bind(&booking.slot_start_time)
            .bind(booking.uid)
            .fetch_one(&self.pool)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn book_test_drive_on_wheels(
        &self,
        booking: &BookingParams,
    ) -> Result<String, sqlx::Error> {
        query_scalar::<Postgres, Option<String>>(BOOK_TEST_DRIVE_ON_WHEELS_SQL)
            .bind(INSERT_MODE)
            .bind(booking.location_id)
            .bind(booking.product_id)
            .bind(booking.booking_type_id)
            .bind(&booking.slot_date)
            .bind(&booking.slot_start_time)
            .bind(booking.uid)
            .bind(&booking.address)
            .bind("")
            .bind(&booking.city)
            .bind(&booking.notes)
            .bind(&booking.latitude)
            .bind(&booking.longitude)
            .fetch_one(&self.pool)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn reschedule_test_drive(
        &self,
        booking: &BookingParams,
    ) -> Result<String, sqlx::Error> {
        query_scalar::<Postgres, Option<String>>(RESCHEDULE_TEST_DRIVE_SQL)
            .bind(booking.booking_id)
            .bind(booking.location_id)
            .bind(booking.product_id)
            .bind(booking.booking_type_id)
            .bind(&booking.slot_date)
            .bind(&booking.slot_start_time)
            .bind(booking.uid)
            .fetch_one(&self.pool)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn cancel_test_drive(
        &self,
        cancel: &CancelBookingParams,
    ) -> Result<String, sqlx::Error> {
        query_scalar::<Postgres, Option<String>>(CANCEL_TEST_DRIVE_SQL)
            .bind(cancel.booking_id)
            .bind(cancel.category_id)
            .bind(&cancel.comment)
            .bind(&cancel.updated_by)
            .fetch_one(&self.pool)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn test_drives_by_customer(
        &self,
        uid: i32,
    ) -> Result<Vec<BookingResponse>, sqlx::Error> {
        query_as::<Postgres, BookingResponse>(TEST_DRIVES_BY_CUSTOMER_SQL)
            .bind(uid)
            .fetch_all(&self.pool)
            .await
    }

    async fn disable_stale_slots(&self) -> Result<(), sqlx::Error> {
        query(DISABLE_STALE_SLOTS_SQL).execute(&self.pool).await?;

        Ok(())
    }

    async fn slot_rows(&self, range: &SlotRange) -> Result<Vec<SlotRow>, sqlx::Error> {
        query_as::<Postgres, SlotRow>(SLOT_ROWS_SQL)
            .bind(range.product_id)
            .bind(range.location_id)
            .bind(SqlxDate::from(range.start))
            .bind(SqlxDate::from(range.end))
            .bind(range.appointment_type_id)
            .fetch_all(&self.pool)
            .await
    }

    async fn on_wheels_slot_rows(&self, range: &SlotRange) -> Result<Vec<SlotRow>, sqlx::Error> {
        query_as::<Postgres, SlotRow>(ON_WHEELS_SLOT_ROWS_SQL)
            .bind(range.product_id)
            .bind(range.location_id)
            .bind(SqlxDate::from(range.start))
            .bind(SqlxDate::from(range.end))
            .bind(range.appointment_type_id)
            .fetch_all(&self.pool)
            .await
    }

    async fn ev_available_rows(&self) -> Result<Vec<EvAvailableRow>, sqlx::Error> {
        query_as::<Postgres, EvAvailableRow>(EV_AVAILABLE_ROWS_SQL)
            .fetch_all(&self.pool)
            .await
    }

    async fn voucher_code(
        &self,
        sales_order_id: i32,
        voucher_id: i32,
    ) -> Result<String, sqlx::Error> {
        query_scalar::<Postgres, Option<String>>(VOUCHER_CODE_SQL)
            .bind(sales_order_id)
            .bind(voucher_id)
            .fetch_one(&self.pool)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn voucher_line(&self, sales_order_id: i32) -> Result<String, sqlx::Error> {
        query_scalar::<Postgres, Option<String>>(VOUCHER_LINE_SQL)
            .bind(sales_order_id)
            .fetch_one(&self.pool)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn sales_order_detail(&self, sales_order_id: i32) -> Result<String, sqlx::Error> {
        query_scalar::<Postgres, Option<String>>(SALES_ORDER_DETAIL_SQL)
            .bind(sales_order_id)
            .fetch_one(&self.pool)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn product_template_price(
        &self,
        dealer_id: i32,
        product_code: &str,
    ) -> Result<String, sqlx::Error> {
        query_scalar::<Postgres, Option<String>>(PRODUCT_TEMPLATE_PRICE_SQL)
            .bind(dealer_id)
            .bind(product_code)
            .fetch_one(&self.pool)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn voucher_list(&self, sales_order_id: i32) -> Result<String, sqlx::Error> {
        query_scalar::<Postgres, Option<String>>(VOUCHER_LIST_SQL)
            .bind(sales_order_id)
            .fetch_one(&self.pool)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn guest_product(&self, lookup: &ProductLookup) -> Result<String, sqlx::Error> {
        self.lookup(GUEST_PRODUCT_SQL, lookup).await
    }

    async fn product(&self, lookup: &ProductLookup) -> Result<String, sqlx::Error> {
        self.lookup(PRODUCT_SQL, lookup).await
    }

    async fn product_stock(&self, lookup: &ProductLookup) -> Result<String, sqlx::Error> {
        self.lookup(PRODUCT_STOCK_SQL, lookup).await
    }

    async fn service_bookings(&self, uid: &str) -> Result<String, sqlx::Error> {
        query_scalar::<Postgres, Option<String>>(SERVICE_BOOKINGS_SQL)
            .bind(uid)
            .fetch_one(&self.pool)
            .await
            .map(Option::unwrap_or_default)
    }

    async fn dealers(&self, query: &DealerQuery) -> Result<String, sqlx::Error> {
        query_scalar::<Postgres, Option<String>>(DEALERS_SQL)
            .bind(query.erp_partner_id)
            .bind(&query.longitude)
            .bind(&query.latitude)
            .fetch_one(&self.pool)
            .await
            .map(Option::unwrap_or_default)
    }
}

fn text(row: &PgRow, column: &str) -> sqlx::Result<String> {
    Ok(row.try_get::<Option<String>, _>(column)?.unwrap_or_default())
}

fn id_text(row: &PgRow, column: &str) -> sqlx::Result<String> {
    Ok(row
        .try_get::<Option<i32>, _>(column)?
        .unwrap_or_default()
        .to_string())
}

impl<'r> FromRow<'r, PgRow> for BookingResponse {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            booking_id: id_text(row, "booking_id")?,
            booking_code: text(row, "booking_code")?,
            product_id: id_text(row, "product_id")?,
            product_name: text(row, "product_name")?,
            date: text(row, "date")?,
            start_time: text(row, "start_time")?,
            end_time: text(row, "end_time")?,
            location_id: id_text(row, "location_id")?,
            location_name: text(row, "location_name")?,
            address: text(row, "address")?,
            address2: String::new(),
            city: text(row, "city")?,
            state: text(row, "state")?,
            country: text(row, "country")?,
            latitude: text(row, "latitude")?,
            longitude: text(row, "longitude")?,
            operating_hours: text(row, "operating_hours")?,
            notes: text(row, "notes")?,
            booking_status: text(row, "booking_status")?,
            cancel_category_id: id_text(row, "cancel_category_id")?,
            cancel_category_text: text(row, "cancel_category_text")?,
            cancel_date: text(row, "cancel_date")?,
            comment: text(row, "comment")?,
            appointment_type_id: id_text(row, "appointment_type_id")?,
            ..Self::default()
        })
    }
}

impl<'r> FromRow<'r, PgRow> for SlotRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            location_id: row.try_get("location_id")?,
            location_name: text(row, "location_name")?,
            product_id: row.try_get("product_id")?,
            product_name: text(row, "product_name")?,
            appointment_type_id: row.try_get("appointment_type_id")?,
            appointment_type_name: text(row, "appointment_type_name")?,
            booking_date: text(row, "booking_date")?,
            start_time: text(row, "start_time")?,
            end_time: text(row, "end_time")?,
            iso_start_time: text(row, "iso_start_time")?,
            iso_end_time: text(row, "iso_end_time")?,
            available: row.try_get::<Option<i64>, _>("available")?.unwrap_or_default(),
        })
    }
}

impl<'r> FromRow<'r, PgRow> for EvAvailableRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            location_id: row.try_get("location_id")?,
            street: text(row, "street")?,
            street2: text(row, "street2")?,
            city_id: row.try_get::<Option<i32>, _>("city_id")?.unwrap_or_default(),
            city: text(row, "city")?,
            state: text(row, "state")?,
            longitude: text(row, "longitude")?,
            latitude: text(row, "latitude")?,
            company_name: text(row, "company_name")?,
            product_id: row.try_get("product_id")?,
            product_code: text(row, "product_code")?,
            product_name: text(row, "product_name")?,
        })
    }
}
