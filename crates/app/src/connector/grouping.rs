//! Grouping of flat availability rows into nested responses.
//!
//! Groups keep the order in which their key first appears, and members keep
//! row order within a group.

use rustc_hash::FxHashMap;

use crate::connector::models::{EvAvailable, EvAvailableRow, EvProduct, SlotRow, SlotTimeResponse, TimeSlot};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SlotKey {
    product_id: i32,
    location_id: i32,
    date: String,
    appointment_type_id: i32,
}

impl From<&SlotRow> for SlotKey {
    fn from(row: &SlotRow) -> Self {
        Self {
            product_id: row.product_id,
            location_id: row.location_id,
            date: row.booking_date.clone(),
            appointment_type_id: row.appointment_type_id,
        }
    }
}

/// Group slot rows by (product, location, date, appointment type).
#[must_use]
pub fn group_time_slots(rows: Vec<SlotRow>) -> Vec<SlotTimeResponse> {
    let mut index: FxHashMap<SlotKey, usize> = FxHashMap::default();
    let mut groups: Vec<SlotTimeResponse> = Vec::new();

    for row in rows {
        let position = *index.entry(SlotKey::from(&row)).or_insert_with(|| {
            groups.push(SlotTimeResponse {
                location_id: row.location_id,
                location_name: row.location_name.clone(),
                product_id: row.product_id,
                product_name: row.product_name.clone(),
                appointment_type_id: row.appointment_type_id,
                appointment_type_name: row.appointment_type_name.clone(),
                date: row.booking_date.clone(),
                time_slots: Vec::new(),
            });

            groups.len() - 1
        });

        if let Some(group) = groups.get_mut(position) {
            group.time_slots.push(TimeSlot {
                start_time: row.start_time,
                end_time: row.end_time,
                iso_start_time: row.iso_start_time,
                iso_end_time: row.iso_end_time,
                available: row.available.to_string(),
            });
        }
    }

    groups
}

/// Group available test-drive units by location.
#[must_use]
pub fn group_ev_available(rows: Vec<EvAvailableRow>) -> Vec<EvAvailable> {
    let mut index: FxHashMap<i32, usize> = FxHashMap::default();
    let mut groups: Vec<EvAvailable> = Vec::new();

    for row in rows {
        let position = *index.entry(row.location_id).or_insert_with(|| {
            groups.push(EvAvailable {
                location_id: row.location_id,
                street: row.street.clone(),
                street2: row.street2.clone(),
                city_id: row.city_id,
                city: row.city.clone(),
                state: row.state.clone(),
                longitude: row.longitude.clone(),
                latitude: row.latitude.clone(),
                company_name: row.company_name.clone(),
                products: Vec::new(),
            });

            groups.len() - 1
        });

        if let Some(group) = groups.get_mut(position) {
            group.products.push(EvProduct {
                product_id: row.product_id,
                product_code: row.product_code,
                product_name: row.product_name,
            });
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(location_id: i32, date: &str, start_time: &str, available: i64) -> SlotRow {
        SlotRow {
            location_id,
            location_name: format!("Location {location_id}"),
            product_id: 1,
            product_name: "EV-V".to_string(),
            appointment_type_id: 1,
            appointment_type_name: "Showroom".to_string(),
            booking_date: date.to_string(),
            start_time: start_time.to_string(),
            end_time: String::new(),
            iso_start_time: String::new(),
            iso_end_time: String::new(),
            available,
        }
    }

    fn unit(location_id: i32, product_id: i32) -> EvAvailableRow {
        EvAvailableRow {
            location_id,
            product_id,
            product_code: format!("P{product_id}"),
            ..EvAvailableRow::default()
        }
    }

    #[test]
    fn slots_group_in_first_appearance_order() {
        let groups = group_time_slots(vec![
            slot(2, "2022-03-02", "10:00", 3),
            slot(1, "2022-03-01", "10:00", 1),
            slot(2, "2022-03-02", "11:00", 0),
            slot(2, "2022-03-03", "10:00", 5),
        ]);

        let keys: Vec<(i32, &str)> = groups
            .iter()
            .map(|group| (group.location_id, group.date.as_str()))
            .collect();

        assert_eq!(keys, vec![(2, "2022-03-02"), (1, "2022-03-01"), (2, "2022-03-03")]);

        let first: Vec<(&str, &str)> = groups
            .first()
            .map(|group| {
                group
                    .time_slots
                    .iter()
                    .map(|slot| (slot.start_time.as_str(), slot.available.as_str()))
                    .collect()
            })
            .unwrap_or_default();

        assert_eq!(first, vec![("10:00", "3"), ("11:00", "0")]);
    }

    #[test]
    fn appointment_type_splits_groups() {
        let mut on_wheels = slot(1, "2022-03-01", "10:00", 1);
        on_wheels.appointment_type_id = 2;

        let groups = group_time_slots(vec![slot(1, "2022-03-01", "10:00", 1), on_wheels]);

        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn no_rows_no_groups() {
        assert!(group_time_slots(Vec::new()).is_empty());
        assert!(group_ev_available(Vec::new()).is_empty());
    }

    #[test]
    fn ev_units_group_by_location() {
        let groups = group_ev_available(vec![unit(7, 1), unit(3, 1), unit(7, 2)]);

        let shape: Vec<(i32, Vec<i32>)> = groups
            .iter()
            .map(|group| {
                (
                    group.location_id,
                    group.products.iter().map(|product| product.product_id).collect(),
                )
            })
            .collect();

        assert_eq!(shape, vec![(7, vec![1, 2]), (3, vec![1])]);
    }
}
