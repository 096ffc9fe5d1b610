use serde::{Deserialize, Serialize};
use crate::domain::models::availability::{AvailabilityBlock, TimeSlot};

/// One season as submitted to the bulk-creation endpoint. Dates pass
/// through as entered; prices are minor units.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SeasonPayload {
    pub start_date: String,
    pub end_date: String,
    pub capacity: i32,
    pub price_per_adult_cents: i64,
    pub price_per_child_cents: i64,
    pub commission_per_adult_cents: i64,
    pub commission_per_child_cents: i64,
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct BulkAvailabilityPayload {
    pub experience_id: String,
    pub blocks: Vec<SeasonPayload>,
}

/// Prices are whole currency units end-to-end, so the conversion to minor
/// units is an exact multiply.
pub fn major_to_cents(units: i64) -> i64 {
    units * 100
}

/// Converts the form's season blocks into the bulk-submission payload.
///
/// Blocks without slots are excluded: an empty season is not yet
/// submittable, which is a filter rather than an error. An empty
/// `experience_id` still yields a payload; required-ness is validated by
/// the endpoint, not here.
pub fn build_bulk_payload(experience_id: &str, blocks: &[AvailabilityBlock]) -> BulkAvailabilityPayload {
    let blocks = blocks
        .iter()
        .filter(|b| !b.slots.is_empty())
        .map(|b| SeasonPayload {
            start_date: b.start_date.clone(),
            end_date: b.end_date.clone(),
            capacity: b.default_capacity,
            price_per_adult_cents: major_to_cents(b.price_per_adult),
            price_per_child_cents: major_to_cents(b.price_per_child),
            commission_per_adult_cents: major_to_cents(b.commission_per_adult),
            commission_per_child_cents: major_to_cents(b.commission_per_child),
            slots: b.slots.clone(),
        })
        .collect();

    BulkAvailabilityPayload {
        experience_id: experience_id.to_string(),
        blocks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn block_with_slot() -> AvailabilityBlock {
        let mut block = AvailabilityBlock::new();
        block.start_date = "2024-06-01".into();
        block.end_date = "2024-06-30".into();
        block.default_capacity = 10;
        block.price_per_adult = 150000;
        block.price_per_child = 100000;
        block.commission_per_adult = 30000;
        block.commission_per_child = 20000;
        block.slots.push(TimeSlot {
            start_hour: 9,
            start_minute: 0,
            end_hour: 17,
            end_minute: 0,
            capacity: Some(10),
            days_of_week: Some(vec![1, 2, 3, 4, 5]),
        });
        block
    }

    #[test]
    fn test_empty_slot_blocks_are_excluded() {
        let empty = AvailabilityBlock::new();
        let full = block_with_slot();

        let payload = build_bulk_payload("exp-1", &[empty, full.clone()]);

        assert_eq!(payload.blocks.len(), 1);
        assert_eq!(payload.blocks[0].start_date, full.start_date);
    }

    #[test]
    fn test_cents_conversion() {
        assert_eq!(major_to_cents(190000), 19000000);
        assert_eq!(major_to_cents(0), 0);

        let payload = build_bulk_payload("exp-1", &[block_with_slot()]);
        assert_eq!(payload.blocks[0].price_per_adult_cents, 15000000);
        assert_eq!(payload.blocks[0].commission_per_child_cents, 2000000);
    }

    #[test]
    fn test_empty_experience_id_still_produces_payload() {
        let payload = build_bulk_payload("", &[block_with_slot()]);
        assert_eq!(payload.experience_id, "");
        assert_eq!(payload.blocks.len(), 1);
    }

    #[test]
    fn test_example_payload_shape() {
        let payload = build_bulk_payload("exp-1", &[block_with_slot()]);

        let expected = json!({
            "experience_id": "exp-1",
            "blocks": [{
                "start_date": "2024-06-01",
                "end_date": "2024-06-30",
                "capacity": 10,
                "price_per_adult_cents": 15000000,
                "price_per_child_cents": 10000000,
                "commission_per_adult_cents": 3000000,
                "commission_per_child_cents": 2000000,
                "slots": [{
                    "start_hour": 9,
                    "start_minute": 0,
                    "end_hour": 17,
                    "end_minute": 0,
                    "capacity": 10,
                    "days_of_week": [1, 2, 3, 4, 5]
                }]
            }]
        });

        assert_eq!(serde_json::to_value(&payload).unwrap(), expected);
    }
}
