//! Position → centered-item mapping.

use crate::config::CarouselConfig;

/// Returns the index of the item currently centered under the viewport.
///
/// Total over every finite position — including positions far outside the
/// wrap domain — so pagination reads never observe an out-of-range index.
/// The double modulo folds Rust's signed remainder into `[0, item_count)`.
pub fn current_index(position: f32, config: &CarouselConfig) -> usize {
    let n = config.item_count as i64;
    let slot = (-position / config.item_extent).round() as i64;
    (((slot % n) + n) % n) as usize
}
