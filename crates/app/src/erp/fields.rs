//! Positional field tables for delimited stored-procedure replies.
//!
//! Each procedure fixes its own field order. These tables are the only place
//! positions are spelled out; decoders refer to them by name.

/// Status code, common to every reply.
pub const CODE: usize = 0;

/// Human readable message, common to every reply.
pub const MESSAGE: usize = 1;

/// Test-drive booking create and reschedule replies.
pub mod booking {
    /// Booking record id.
    pub const BOOKING_ID: usize = 2;
    /// Product id.
    pub const PRODUCT_ID: usize = 3;
    /// Product display name.
    pub const PRODUCT_NAME: usize = 4;
    /// Booking reference shown to the customer.
    pub const BOOKING_CODE: usize = 5;
    /// Booked day, `YYYY-MM-DD`.
    pub const DATE: usize = 6;
    /// Slot start.
    pub const START_TIME: usize = 7;
    /// Slot end.
    pub const END_TIME: usize = 8;
    /// Dealer or location id.
    pub const LOCATION_ID: usize = 9;
    /// Dealer or location name.
    pub const LOCATION_NAME: usize = 10;
    /// Street address.
    pub const ADDRESS: usize = 11;
    /// Latitude.
    pub const LATITUDE: usize = 12;
    /// Longitude.
    pub const LONGITUDE: usize = 13;
    /// City.
    pub const CITY: usize = 14;
    /// State or province.
    pub const STATE: usize = 15;
    /// Country.
    pub const COUNTRY: usize = 16;
    /// Opening hours text.
    pub const OPERATING_HOURS: usize = 17;
}

/// Priced product lookup for a guest checkout.
pub mod guest_product {
    /// Product id.
    pub const PRODUCT_ID: usize = 2;
    /// Unit price.
    pub const PRICE: usize = 3;
    /// Unit of measure id.
    pub const UOM_ID: usize = 4;
    /// Product display name.
    pub const PRODUCT_NAME: usize = 5;
    /// Pricelist the price came from.
    pub const PRICELIST_ID: usize = 6;
    /// Product code.
    pub const PRODUCT_CODE: usize = 7;
    /// Selected variant id.
    pub const VARIANT_ID: usize = 8;
    /// Selected variant name.
    pub const VARIANT_NAME: usize = 9;
    /// Variant attribute id.
    pub const ATTRIBUTE_ID: usize = 10;
    /// Variant attribute name.
    pub const ATTRIBUTE_NAME: usize = 11;
    /// Formatted price.
    pub const PRICE_LABEL: usize = 12;
    /// Reduction line name.
    pub const REDUCTION_NAME: usize = 13;
    /// Reduction amount, negative.
    pub const REDUCTION_VALUE: usize = 14;
    /// Formatted grand total.
    pub const GRAND_TOTAL: usize = 15;
    /// Formatted reduction amount.
    pub const REDUCTION_LABEL: usize = 17;
    /// Formatted tax amount.
    pub const TAX: usize = 18;
    /// Formatted untaxed amount.
    pub const AMOUNT_UNTAXED: usize = 19;
    /// Formatted purchase total.
    pub const PURCHASE_TOTAL: usize = 20;
}

/// Product lookup used when creating a sales order for a known customer.
pub mod product {
    /// Product id.
    pub const PRODUCT_ID: usize = 2;
    /// Unit price.
    pub const UNIT_PRICE: usize = 3;
    /// Unit of measure id.
    pub const UOM_ID: usize = 4;
    /// Product display name.
    pub const PRODUCT_NAME: usize = 5;
    /// Pricelist the price came from.
    pub const PRICELIST_ID: usize = 6;
}

/// Stock availability lookup.
pub mod stock {
    /// Unit price.
    pub const PRICE: usize = 3;
    /// Quantity on hand.
    pub const QTY: usize = 7;
    /// Product code.
    pub const PRODUCT_CODE: usize = 8;
}

/// Voucher code lookup for a sales order.
pub mod voucher_code {
    /// Coupon code of the voucher.
    pub const COUPON_CODE: usize = 2;
    /// Redemption flag, `Y` or `N`.
    pub const APPLIED: usize = 3;

    /// Value of [`APPLIED`] for a voucher that has not been redeemed yet.
    pub const NOT_APPLIED: &str = "N";
}

/// Reward line created by a redeemed voucher.
pub mod voucher_line {
    /// Reward line id.
    pub const LINE_ID: usize = 2;
}
