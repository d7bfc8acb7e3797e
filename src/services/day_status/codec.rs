use crate::models::day_status::{DayStatus, DayStatusEntry, DAY_SLOT_COUNT};

const ENTRY_SEPARATOR: char = ',';
const FIELD_SEPARATOR: char = ':';

/// Decode a comma-separated feed into at most `DAY_SLOT_COUNT` entries.
///
/// Positions are preserved: a blank entry still occupies its slot, so the
/// feed can pad the first week.
pub fn decode_feed(feed: &str) -> Vec<DayStatusEntry> {
    if feed.trim().is_empty() {
        return Vec::new();
    }

    let total = feed.split(ENTRY_SEPARATOR).count();
    if total > DAY_SLOT_COUNT {
        log::debug!(
            "Day feed has {} entries, ignoring the last {}",
            total,
            total - DAY_SLOT_COUNT
        );
    }

    feed.split(ENTRY_SEPARATOR)
        .take(DAY_SLOT_COUNT)
        .map(decode_entry)
        .collect()
}

/// Decode a single `day:status[:time]` entry. Never fails; anything that
/// cannot be read becomes an `Empty` entry labelled with its first field.
pub fn decode_entry(raw: &str) -> DayStatusEntry {
    // The time itself contains ':' so only the first two separators split
    let mut fields = raw.trim().splitn(3, FIELD_SEPARATOR);
    let day_label = fields.next().unwrap_or_default().trim().to_string();

    let Some(code) = fields.next() else {
        if !day_label.is_empty() {
            log::warn!("Malformed day entry '{}'", raw);
        }
        return DayStatusEntry {
            day_label,
            status: DayStatus::Empty,
            detail_time: None,
        };
    };

    let status = DayStatus::from_code(code.trim());
    let detail_time = fields
        .next()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    DayStatusEntry {
        day_label,
        status,
        detail_time,
    }
}
