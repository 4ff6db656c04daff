//! Wheel scrolling in bounded chunks.

use deskhands_config::TunablesConfig;
use deskhands_protocols::{ActionError, Mouse, ScrollDirection};
use std::time::Duration;
use tracing::debug;

/// Largest chunk a backend scroll call accepts.
const MAX_CHUNK: u32 = i32::MAX as u32;

/// Converts a pixel distance to wheel units and dispatches it in chunks no
/// larger than the per-call maximum.
#[derive(Debug, Clone)]
pub struct ScrollBatcher {
    once_max: u32,
    wheel_to_pixel: f64,
    chunk_delay: Duration,
}

impl ScrollBatcher {
    pub fn new(once_max: u32, wheel_to_pixel: f64, chunk_delay: Duration) -> Self {
        Self {
            once_max: once_max.clamp(1, MAX_CHUNK),
            wheel_to_pixel,
            chunk_delay,
        }
    }

    pub fn from_tunables(tunables: &TunablesConfig) -> Self {
        Self::new(
            tunables.wheel_once_max,
            tunables.wheel_to_pixel,
            Duration::from_millis(tunables.wheel_chunk_delay_ms),
        )
    }

    /// Wheel units for a pixel distance, or `None` when the distance is not
    /// finite or does not fit in `u32` wheel units. The sign of `pixels` is
    /// ignored.
    pub fn scaled(&self, pixels: f64) -> Option<u32> {
        let scaled = (pixels.abs() * self.wheel_to_pixel).round();
        if scaled.is_finite() && scaled <= f64::from(u32::MAX) {
            Some(scaled as u32)
        } else {
            None
        }
    }

    /// Chunk sizes for a pixel distance: full chunks of the maximum followed
    /// by the remainder. The chunks always sum to [`scaled`](Self::scaled).
    pub fn plan(&self, pixels: f64) -> Option<Vec<u32>> {
        let total = self.scaled(pixels)?;
        if total == 0 {
            return Some(Vec::new());
        }
        if total <= self.once_max {
            return Some(vec![total]);
        }

        let mut chunks = vec![self.once_max; (total / self.once_max) as usize];
        let remainder = total % self.once_max;
        if remainder > 0 {
            chunks.push(remainder);
        }
        Some(chunks)
    }

    /// Scroll `pixels` in `direction`. Returns the total wheel units sent.
    pub async fn dispatch(
        &self,
        mouse: &dyn Mouse,
        direction: ScrollDirection,
        pixels: f64,
    ) -> Result<u32, ActionError> {
        let chunks = self.plan(pixels).ok_or_else(|| {
            ActionError::InvalidParameters(format!("Scroll distance {} is out of range", pixels))
        })?;
        let batched = chunks.len() > 1;

        let mut sent = 0;
        for chunk in chunks {
            let amount = i32::try_from(chunk).unwrap_or(i32::MAX);
            mouse.scroll(direction, amount).await?;
            sent += chunk;
            if batched && !self.chunk_delay.is_zero() {
                tokio::time::sleep(self.chunk_delay).await;
            }
        }

        debug!("Scrolled {:?} by {} wheel units", direction, sent);
        Ok(sent)
    }
}

impl Default for ScrollBatcher {
    fn default() -> Self {
        Self::from_tunables(&TunablesConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batcher() -> ScrollBatcher {
        ScrollBatcher::new(1000, 1.6, Duration::ZERO)
    }

    #[test]
    fn test_small_distance_is_one_chunk() {
        assert_eq!(batcher().plan(500.0), Some(vec![800]));
    }

    #[test]
    fn test_exactly_max_is_one_chunk() {
        assert_eq!(batcher().plan(625.0), Some(vec![1000]));
    }

    #[test]
    fn test_large_distance_ends_with_remainder() {
        assert_eq!(batcher().plan(1000.0), Some(vec![1000, 600]));
    }

    #[test]
    fn test_multiple_of_max_has_no_remainder_chunk() {
        let chunks = batcher().plan(20000.0).unwrap();
        assert_eq!(chunks.len(), 32);
        assert!(chunks.iter().all(|c| *c == 1000));
    }

    #[test]
    fn test_zero_distance_sends_nothing() {
        assert_eq!(batcher().plan(0.0), Some(Vec::new()));
    }

    #[test]
    fn test_negative_distance_uses_magnitude() {
        assert_eq!(batcher().plan(-500.0), Some(vec![800]));
    }

    #[test]
    fn test_chunks_sum_to_scaled_and_respect_max() {
        let batcher = batcher();
        for pixels in [0.0, 1.0, 312.4, 624.9, 625.0, 625.7, 999.0, 4321.5, 20000.0, 123456.0] {
            let chunks = batcher.plan(pixels).unwrap();
            let sum: u64 = chunks.iter().map(|c| *c as u64).sum();
            assert_eq!(sum, batcher.scaled(pixels).unwrap() as u64, "pixels {}", pixels);
            assert!(chunks.iter().all(|c| *c <= 1000 && *c > 0), "pixels {}", pixels);
        }
    }

    #[test]
    fn test_non_finite_distance_has_no_plan() {
        assert_eq!(batcher().plan(f64::NAN), None);
        assert_eq!(batcher().plan(f64::INFINITY), None);
    }

    #[test]
    fn test_distance_beyond_wheel_range_has_no_plan() {
        let batcher = batcher();
        assert_eq!(batcher.scaled(3.0e9), None);
        assert_eq!(batcher.plan(-3.0e9), None);
        assert_eq!(batcher.scaled(2.0e9), Some(3_200_000_000));
    }

    #[test]
    fn test_oversized_max_is_capped_to_scroll_range() {
        let batcher = ScrollBatcher::new(u32::MAX, 1.0, Duration::ZERO);
        let chunks = batcher.plan(f64::from(u32::MAX)).unwrap();
        assert_eq!(chunks, vec![MAX_CHUNK, MAX_CHUNK, 1]);
        assert!(chunks.iter().all(|c| i32::try_from(*c).is_ok()));
    }

    #[test]
    fn test_zero_max_is_treated_as_one() {
        let batcher = ScrollBatcher::new(0, 1.0, Duration::ZERO);
        assert_eq!(batcher.plan(3.0), Some(vec![1, 1, 1]));
    }

    #[test]
    fn test_from_tunables() {
        let batcher = ScrollBatcher::from_tunables(&TunablesConfig::default());
        assert_eq!(batcher.plan(500.0), Some(vec![800]));
    }
}
