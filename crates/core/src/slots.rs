//! Fixed layout of the academic week: eleven one-hour slots per day,
//! Monday through Saturday.

/// First valid slot index.
pub const FIRST_SLOT: u8 = 1;

/// Last valid slot index.
pub const LAST_SLOT: u8 = 11;

/// Wall-clock label for every slot, indexed by `slot - 1`.
pub const SLOT_MAP: [(u8, &str); 11] = [
    (1, "08:00-09:00"),
    (2, "09:00-10:00"),
    (3, "10:00-11:00"),
    (4, "11:00-12:00"),
    (5, "12:00-13:00"),
    (6, "13:00-14:00"),
    (7, "14:00-15:00"),
    (8, "15:00-16:00"),
    (9, "16:00-17:00"),
    (10, "17:00-18:00"),
    (11, "18:00-19:00"),
];

pub fn is_valid_slot(slot: u8) -> bool {
    (FIRST_SLOT..=LAST_SLOT).contains(&slot)
}

/// Returns the wall-clock range for a slot, or `None` outside `1..=11`.
pub fn slot_label(slot: u8) -> Option<&'static str> {
    if !is_valid_slot(slot) {
        return None;
    }
    Some(SLOT_MAP[usize::from(slot - FIRST_SLOT)].1)
}

/// Iterates every valid slot index in order.
pub fn all_slots() -> impl Iterator<Item = u8> {
    FIRST_SLOT..=LAST_SLOT
}
