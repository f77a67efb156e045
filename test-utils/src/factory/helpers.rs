use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(100_000_000);

/// Returns a process-unique numeric ID for factory defaults.
///
/// Keeps generated Discord-style IDs distinct across factories within a test
/// run so unique-key collisions only happen when a test asks for them.
pub fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}
