//! Presentation Helpers
//!
//! Color contrast, date badges, ordering and avatar URLs for sticky notes.

use chrono::{DateTime, Local, TimeZone, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::config::DEFAULT_NOTE_COLOR;
use crate::models::{TodoItem, UserInfo};

const LIGHT_FOREGROUND: &str = "#fff";
const DARK_FOREGROUND: &str = "#000";

/// Whether a `#rrggbb` color is dark enough to need light text.
///
/// Uses `0.299·R + 0.587·G + 0.114·B` on 8-bit channels with a threshold
/// of 128. Colors whose channels cannot be decoded count as light.
pub fn is_dark_color(hex_color: &str) -> bool {
    let hex = hex_color.replace('#', "");
    let channel = |range: std::ops::Range<usize>| {
        hex.get(range).and_then(|s| u8::from_str_radix(s, 16).ok())
    };

    match (channel(0..2), channel(2..4), channel(4..6)) {
        (Some(r), Some(g), Some(b)) => {
            let luminance = 0.299 * f64::from(r) + 0.587 * f64::from(g) + 0.114 * f64::from(b);
            luminance < 128.0
        }
        _ => false,
    }
}

/// Background color of a note, falling back to the default pink.
pub fn note_color(item: &TodoItem) -> &str {
    item.color.as_deref().filter(|c| !c.is_empty()).unwrap_or(DEFAULT_NOTE_COLOR)
}

/// Text color to put over `background`.
pub fn foreground_for(background: &str) -> &'static str {
    if is_dark_color(background) { LIGHT_FOREGROUND } else { DARK_FOREGROUND }
}

/// CSS class for icon buttons over `background`.
pub fn icon_class_for(background: &str) -> &'static str {
    if is_dark_color(background) { "light-text" } else { "dark-text" }
}

/// Date and time badge text
#[derive(Debug, Clone, PartialEq)]
pub struct DateBadges {
    /// `5 March 2024`
    pub date: String,
    /// `08:15`
    pub time: String,
}

pub fn format_date_time_in<Tz: TimeZone>(dt: &DateTime<Utc>, tz: &Tz) -> DateBadges
where
    Tz::Offset: std::fmt::Display,
{
    let local = dt.with_timezone(tz);
    DateBadges {
        date: local.format("%-d %B %Y").to_string(),
        time: local.format("%H:%M").to_string(),
    }
}

/// Badges in the browser's time zone
pub fn format_date_time(dt: &DateTime<Utc>) -> DateBadges {
    format_date_time_in(dt, &Local)
}

/// Most recently created first. Display-time only.
pub fn sort_newest_first(items: &mut [TodoItem]) {
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
}

pub fn sorted_newest_first(items: &[TodoItem]) -> Vec<TodoItem> {
    let mut sorted = items.to_vec();
    sort_newest_first(&mut sorted);
    sorted
}

/// Generated avatar for the header; `U` stands in for a missing profile.
/// Key of a rendered note. Covers every field the note displays, so an edit
/// rebuilds the note even when the backend leaves `updatedAt` untouched.
pub type NoteKey = (String, DateTime<Utc>, bool, String, Option<String>, Option<String>);

pub fn note_key(item: &TodoItem) -> NoteKey {
    (
        item.id.clone(),
        item.updated_at,
        item.is_done,
        item.title.clone(),
        item.description.clone(),
        item.color.clone(),
    )
}

pub fn avatar_url(owner: Option<&UserInfo>) -> String {
    let first = owner.map(|o| o.first_name.as_str()).filter(|n| !n.is_empty()).unwrap_or("U");
    let last = owner.map(|o| o.last_name.as_str()).unwrap_or("");
    format!(
        "https://ui-avatars.com/api/?name={}+{}",
        utf8_percent_encode(first, NON_ALPHANUMERIC),
        utf8_percent_encode(last, NON_ALPHANUMERIC),
    )
}

pub fn owner_label(owner: Option<&UserInfo>) -> String {
    owner.map(UserInfo::display_name).unwrap_or_else(|| "User".to_string())
}
