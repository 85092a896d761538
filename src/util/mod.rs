use chrono::{DateTime, Local, SecondsFormat, Utc};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicUsize, Ordering};

const NOTE_ID_PREFIX: &str = "notes-";
const NOTE_ID_LEN: usize = 9;
const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

static COUNTER: AtomicUsize = AtomicUsize::new(1);

/// Client-side id for a note that has not reached the server yet: `notes-` + 9 base-36 chars.
pub(crate) fn new_note_id() -> String {
    let mut bytes = [0u8; NOTE_ID_LEN];
    if getrandom::getrandom(&mut bytes).is_err() {
        // No entropy source: fall back to a hashed counter, still unique per session.
        let mut hasher = DefaultHasher::new();
        COUNTER.fetch_add(1, Ordering::SeqCst).hash(&mut hasher);
        Utc::now().timestamp_nanos_opt().hash(&mut hasher);
        let h = hasher.finish().to_le_bytes();
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = h[i % h.len()].wrapping_add(i as u8);
        }
    }

    let suffix: String = bytes
        .iter()
        .map(|b| BASE36[(*b as usize) % BASE36.len()] as char)
        .collect();
    format!("{NOTE_ID_PREFIX}{suffix}")
}

pub(crate) fn now_rfc3339() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Renders a `createdAt` value in the viewer's local time.
///
/// Values that are not RFC 3339 are shown as-is.
pub(crate) fn format_created(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw.trim()) {
        Ok(dt) => dt
            .with_timezone(&Local)
            .format("%-d %B %Y, %H:%M")
            .to_string(),
        Err(_) => raw.to_string(),
    }
}
