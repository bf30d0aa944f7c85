use std::time::{SystemTime, UNIX_EPOCH};

/// Get current Unix timestamp in milliseconds, truncated to the
/// unsigned 32-bit range RTMP timestamps live in
pub fn current_timestamp() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("System time before UNIX epoch")
        .as_millis() as u32
}

/// Distance in milliseconds between two RTMP timestamps.
///
/// RTMP timestamps wrap at 2^32; the wrapping subtraction keeps the
/// delta correct across a rollover as long as the real distance is
/// under ~49.7 days.
pub fn timestamp_delta(earlier: u32, later: u32) -> u32 {
    later.wrapping_sub(earlier)
}
