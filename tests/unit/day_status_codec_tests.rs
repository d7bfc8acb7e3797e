// Day-status codec tests
// Each feed entry maps to one cell text and status

use test_case::test_case;
use work_hours_widget::models::day_status::{DayStatus, DAY_SLOT_COUNT};
use work_hours_widget::services::day_status::{decode_entry, decode_feed};

use crate::fixtures::feeds;

#[test_case("1:completed:09:15", "1\n09:15 ✅", DayStatus::Completed ; "completed with time")]
#[test_case("1:completed", "1\n✓ ✅", DayStatus::Completed ; "completed without time")]
#[test_case("2:inprogress", "2\n○ 🕒", DayStatus::InProgress ; "in progress without time")]
#[test_case("2:inprogress:14:05", "2\n14:05 🕒", DayStatus::InProgress ; "in progress with time")]
#[test_case("3:offday", "3\nOFF 💤", DayStatus::OffDay ; "off day")]
#[test_case("3:offday:10:00", "3\nOFF 💤", DayStatus::OffDay ; "off day ignores time")]
#[test_case("4:bogus", "4\n ", DayStatus::Empty ; "unknown status")]
#[test_case("5", "5\n ", DayStatus::Empty ; "missing status")]
#[test_case("", "\n ", DayStatus::Empty ; "blank entry")]
fn test_decode_entry(raw: &str, expected_text: &str, expected_status: DayStatus) {
    let entry = decode_entry(raw);
    assert_eq!(entry.display_text(), expected_text);
    assert_eq!(entry.status, expected_status);
}

#[test]
fn test_mixed_feed_in_order() {
    let labels: Vec<String> = decode_feed(feeds::MIXED)
        .into_iter()
        .map(|e| e.day_label)
        .collect();
    assert_eq!(labels, vec!["1", "2", "3", "4"]);
}

#[test]
fn test_overflowing_feed_is_truncated() {
    let entries = decode_feed(&feeds::overflowing());
    assert_eq!(entries.len(), DAY_SLOT_COUNT);
    assert!(entries.iter().all(|e| e.status == DayStatus::Completed));
}

#[test_case(DayStatus::Completed, true, "#A5D6A7" ; "completed on dark")]
#[test_case(DayStatus::Completed, false, "#388E3C" ; "completed on light")]
#[test_case(DayStatus::InProgress, true, "#FFD180" ; "in progress on dark")]
#[test_case(DayStatus::InProgress, false, "#FFA500" ; "in progress on light")]
#[test_case(DayStatus::OffDay, true, "#90CAF9" ; "off day on dark")]
#[test_case(DayStatus::OffDay, false, "#1976D2" ; "off day on light")]
#[test_case(DayStatus::Empty, true, "#FFFFFF" ; "empty on dark")]
#[test_case(DayStatus::Empty, false, "#000000" ; "empty on light")]
fn test_status_colors(status: DayStatus, dark: bool, hex: &str) {
    assert_eq!(status.color(dark).to_hex(), hex);
}
