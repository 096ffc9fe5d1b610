use crate::domain::models::availability::{AvailabilityBlock, TimeSlot, DEFAULT_CAPACITY};
use crate::domain::services::currency::parse_digits_only;
use crate::error::AppError;

/// Partial update for a season block. Fields left as `None` are untouched.
/// Numeric fields may carry transient zeros while the user is typing; they
/// are only normalized when the matching commit operation runs.
#[derive(Debug, Default, Clone)]
pub struct BlockPatch {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub default_capacity: Option<i32>,
    pub price_per_adult: Option<i64>,
    pub price_per_child: Option<i64>,
    pub commission_per_adult: Option<i64>,
    pub commission_per_child: Option<i64>,
}

/// A single-field replacement on a slot.
#[derive(Debug, Clone)]
pub enum SlotField {
    StartHour(i32),
    StartMinute(i32),
    EndHour(i32),
    EndMinute(i32),
    Capacity(Option<i32>),
    DaysOfWeek(Option<Vec<i32>>),
}

/// Price fields that accept raw text input from the form.
#[derive(Debug, Clone, Copy)]
pub enum PriceField {
    PricePerAdult,
    PricePerChild,
    CommissionPerAdult,
    CommissionPerChild,
}

/// Holds the ordered season blocks of one availability form session.
///
/// The list is never empty: a configurator starts with one fresh block and
/// refuses to remove the last one. Blocks and slots keep insertion order;
/// the only implicit reorder anywhere is the ascending sort of
/// `days_of_week` on toggle.
pub struct BlockConfigurator {
    blocks: Vec<AvailabilityBlock>,
}

impl BlockConfigurator {
    pub fn new() -> Self {
        Self {
            blocks: vec![AvailabilityBlock::new()],
        }
    }

    pub fn blocks(&self) -> &[AvailabilityBlock] {
        &self.blocks
    }

    /// Appends a fresh block (empty dates, zero prices, no slots) and
    /// returns its locally minted id.
    pub fn add_block(&mut self) -> String {
        let block = AvailabilityBlock::new();
        let id = block.id.clone();
        self.blocks.push(block);
        id
    }

    pub fn remove_block(&mut self, id: &str) -> Result<(), AppError> {
        if self.blocks.len() == 1 {
            return Err(AppError::InvariantViolation(
                "Cannot remove the last remaining season block".into(),
            ));
        }
        let pos = self
            .blocks
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Season block '{}' not found", id)))?;
        self.blocks.remove(pos);
        Ok(())
    }

    pub fn update_block(&mut self, id: &str, patch: BlockPatch) -> Result<(), AppError> {
        let block = self.block_mut(id)?;

        if let Some(val) = patch.start_date { block.start_date = val; }
        if let Some(val) = patch.end_date { block.end_date = val; }
        if let Some(val) = patch.default_capacity { block.default_capacity = val; }
        if let Some(val) = patch.price_per_adult { block.price_per_adult = val; }
        if let Some(val) = patch.price_per_child { block.price_per_child = val; }
        if let Some(val) = patch.commission_per_adult { block.commission_per_adult = val; }
        if let Some(val) = patch.commission_per_child { block.commission_per_child = val; }

        Ok(())
    }

    /// In-flight capacity input: anything non-numeric degrades to 0 so the
    /// form can keep rendering while the user types.
    pub fn set_default_capacity_input(&mut self, id: &str, raw: &str) -> Result<(), AppError> {
        let block = self.block_mut(id)?;
        block.default_capacity = parse_digits_only(raw) as i32;
        Ok(())
    }

    /// Blur normalization: a capacity still below 1 when the field loses
    /// focus is replaced with the default.
    pub fn commit_default_capacity(&mut self, id: &str) -> Result<(), AppError> {
        let block = self.block_mut(id)?;
        if block.default_capacity < 1 {
            block.default_capacity = DEFAULT_CAPACITY;
        }
        Ok(())
    }

    /// In-flight price input, tolerating pasted currency strings.
    pub fn set_price_input(&mut self, id: &str, field: PriceField, raw: &str) -> Result<(), AppError> {
        let value = parse_digits_only(raw);
        let block = self.block_mut(id)?;
        match field {
            PriceField::PricePerAdult => block.price_per_adult = value,
            PriceField::PricePerChild => block.price_per_child = value,
            PriceField::CommissionPerAdult => block.commission_per_adult = value,
            PriceField::CommissionPerChild => block.commission_per_child = value,
        }
        Ok(())
    }

    /// Appends the default slot (09:00-17:00, Mon-Fri) to a block.
    pub fn add_slot(&mut self, block_id: &str) -> Result<(), AppError> {
        self.add_slot_with(block_id, TimeSlot::weekday_default())
    }

    /// Appends a caller-supplied slot verbatim. No time-ordering or
    /// duplicate checks happen at this layer.
    pub fn add_slot_with(&mut self, block_id: &str, slot: TimeSlot) -> Result<(), AppError> {
        let block = self.block_mut(block_id)?;
        block.slots.push(slot);
        Ok(())
    }

    pub fn remove_slot(&mut self, block_id: &str, index: usize) -> Result<(), AppError> {
        let block = self.block_mut(block_id)?;
        check_slot_index(block, index)?;
        block.slots.remove(index);
        Ok(())
    }

    /// Replaces exactly one field of the slot at `index`, leaving the others
    /// untouched. The slot value is rebuilt rather than patched in place so
    /// the block always holds a fresh slot after an update.
    pub fn update_slot(&mut self, block_id: &str, index: usize, field: SlotField) -> Result<(), AppError> {
        let block = self.block_mut(block_id)?;
        check_slot_index(block, index)?;

        let mut slot = block.slots[index].clone();
        match field {
            SlotField::StartHour(v) => slot.start_hour = v,
            SlotField::StartMinute(v) => slot.start_minute = v,
            SlotField::EndHour(v) => slot.end_hour = v,
            SlotField::EndMinute(v) => slot.end_minute = v,
            SlotField::Capacity(v) => slot.capacity = v,
            SlotField::DaysOfWeek(v) => slot.days_of_week = v,
        }
        block.slots[index] = slot;
        Ok(())
    }

    /// Symmetric difference on a slot's weekday set: a present day is
    /// removed, an absent one inserted and the set re-sorted ascending.
    /// An empty result collapses to `None` ("no weekday restriction"),
    /// never to an empty list.
    pub fn toggle_weekday(&mut self, block_id: &str, index: usize, day: i32) -> Result<(), AppError> {
        if !(0..=6).contains(&day) {
            return Err(AppError::Validation(format!("Weekday {} out of range 0-6", day)));
        }

        let block = self.block_mut(block_id)?;
        check_slot_index(block, index)?;

        let mut slot = block.slots[index].clone();
        let mut days = slot.days_of_week.take().unwrap_or_default();

        if let Some(pos) = days.iter().position(|d| *d == day) {
            days.remove(pos);
        } else {
            days.push(day);
            days.sort_unstable();
        }

        slot.days_of_week = if days.is_empty() { None } else { Some(days) };
        block.slots[index] = slot;
        Ok(())
    }

    fn block_mut(&mut self, id: &str) -> Result<&mut AvailabilityBlock, AppError> {
        self.blocks
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Season block '{}' not found", id)))
    }
}

impl Default for BlockConfigurator {
    fn default() -> Self {
        Self::new()
    }
}

fn check_slot_index(block: &AvailabilityBlock, index: usize) -> Result<(), AppError> {
    if index >= block.slots.len() {
        return Err(AppError::IndexOutOfRange(format!(
            "Slot index {} out of range for block with {} slots",
            index,
            block.slots.len()
        )));
    }
    Ok(())
}
