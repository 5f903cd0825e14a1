/// Horizontal offset of the incoming screen `elapsed_ms` into a transition.
///
/// `OverLeft` moves linearly from `width` (just off the right edge) to 0;
/// `None` and zero-length transitions land at 0 immediately.
pub fn incoming_offset(animation: super::Animation, elapsed_ms: u64, duration_ms: u16, width: u32) -> i32 {
    let duration = u64::from(duration_ms);
    if animation == super::Animation::None || duration == 0 || elapsed_ms >= duration {
        return 0;
    }
    let remaining = duration - elapsed_ms;
    (u64::from(width) * remaining / duration) as i32
}
