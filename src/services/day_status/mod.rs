// Day-status codec
// Decodes the compact `day:status[:time]` feed behind the mini calendar

mod codec;

pub use codec::{decode_entry, decode_feed};
