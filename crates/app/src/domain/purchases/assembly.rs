//! Order breakdown assembly.
//!
//! Reshapes the ERP's sales order summary into an [`Order`]: amounts arrive
//! as formatted strings (`"33.000.000"`), reductions as negative values with
//! a minus sign in their label, and tax as a separate figure that belongs in
//! the administration section.

use crate::{
    connector::models::{LineItem, OrderConfirmation},
    domain::purchases::models::{Order, OrderComponent, OrderItem},
    erp::parse_int,
};

/// Name of the synthesized administration line carrying tax.
pub const TAX_LINE_NAME: &str = "Tax";

/// Parse a formatted amount, dropping `.` thousands separators.
///
/// Unparsable amounts read as zero.
#[must_use]
pub fn parse_amount(raw: &str) -> i64 {
    parse_int(&raw.replace('.', ""))
}

/// Append a tax line to the administration section and add it to the
/// section total. Does nothing when no tax figure is present.
pub fn add_admin_tax(confirmation: &mut OrderConfirmation) {
    if confirmation.tax.is_empty() {
        return;
    }

    let total = parse_amount(&confirmation.administrations.total) + parse_amount(&confirmation.tax);

    confirmation.administrations.items.push(LineItem {
        name: TAX_LINE_NAME.to_string(),
        value: confirmation.tax.clone(),
        label: confirmation.tax.clone(),
        ..LineItem::default()
    });

    confirmation.administrations.total = total.to_string();
}

/// Split lines into regular and discount items, normalizing their sign.
#[must_use]
pub fn extract_items(items: &[LineItem]) -> (Vec<OrderItem>, Vec<OrderItem>) {
    items
        .iter()
        .map(|item| (item.is_discount(), order_item(item)))
        .fold(
            (Vec::new(), Vec::new()),
            |(mut regular, mut discounts), (is_discount, item)| {
                if is_discount {
                    discounts.push(item);
                } else {
                    regular.push(item);
                }

                (regular, discounts)
            },
        )
}

fn order_item(item: &LineItem) -> OrderItem {
    let value = parse_int(&item.value);

    let (value, label) = if value < 0 {
        (-value, item.label.replace('-', ""))
    } else {
        (value, item.label.clone())
    };

    OrderItem {
        name: item.name.clone(),
        value,
        label,
        attributes: item.attributes.clone(),
    }
}

/// Build the outward order breakdown from an ERP sales order summary.
#[must_use]
pub fn build_order(mut confirmation: OrderConfirmation) -> Order {
    add_admin_tax(&mut confirmation);

    let (purchase_items, _) = extract_items(&confirmation.purchase.items);
    let (administration_items, _) = extract_items(&confirmation.administrations.items);
    let (vouchers, discounts) = extract_items(&confirmation.reductions.items);

    Order {
        purchase: OrderComponent {
            items: purchase_items,
            total: parse_amount(&confirmation.purchase.total),
            ..OrderComponent::default()
        },
        administration: OrderComponent {
            items: administration_items,
            total: parse_amount(&confirmation.administrations.total),
            ..OrderComponent::default()
        },
        reduction: OrderComponent {
            vouchers,
            discounts,
            total: parse_amount(&confirmation.reductions.total).abs(),
            ..OrderComponent::default()
        },
        total: parse_amount(&confirmation.grand_total),
        sales_order_id: confirmation.so_id,
        sales_order_number: confirmation.so_number,
        ..Order::default()
    }
}
