//! Delay abstraction for simulated latency.
//!
//! Every step of the hunt waits a fixed amount of time before resolving.
//! Production code sleeps on the tokio timer; tests inject a delay that
//! records the requested duration and returns immediately.

use std::time::Duration;

use async_trait::async_trait;

/// Abstraction over waiting, so step latency can be simulated or skipped.
#[async_trait]
pub trait Delay: Send + Sync {
    /// Suspends the caller for `duration`.
    async fn sleep(&self, duration: Duration);
}

/// Production delay backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Wraps another delay and multiplies every requested duration by `factor`.
///
/// A factor of `0.0` turns all waits into no-ops, `1.0` keeps them as-is.
#[derive(Debug, Clone, Copy)]
pub struct ScaledDelay<D> {
    inner: D,
    factor: f64,
}

impl<D: Delay> ScaledDelay<D> {
    /// Creates a scaled delay. Negative or non-finite factors clamp to zero.
    #[must_use]
    pub fn new(inner: D, factor: f64) -> Self {
        let factor = if factor.is_finite() && factor > 0.0 {
            factor
        } else {
            0.0
        };
        Self { inner, factor }
    }

    /// Returns the effective scale factor.
    #[must_use]
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Applies the factor to `duration`, saturating at `Duration::MAX` when
    /// the product does not fit.
    #[must_use]
    pub fn scale(&self, duration: Duration) -> Duration {
        Duration::try_from_secs_f64(duration.as_secs_f64() * self.factor)
            .unwrap_or(Duration::MAX)
    }
}

#[async_trait]
impl<D: Delay> Delay for ScaledDelay<D> {
    async fn sleep(&self, duration: Duration) {
        let scaled = self.scale(duration);
        if scaled.is_zero() {
            return;
        }
        self.inner.sleep(scaled).await;
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    /// Remembers the last requested duration without waiting.
    #[derive(Debug, Clone, Default)]
    struct LastRequest(Arc<Mutex<Option<Duration>>>);

    #[async_trait]
    impl Delay for LastRequest {
        async fn sleep(&self, duration: Duration) {
            *self.0.lock().unwrap() = Some(duration);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_delay_waits_for_requested_duration() {
        // Arrange
        let start = tokio::time::Instant::now();

        // Act
        TokioDelay.sleep(Duration::from_millis(1500)).await;

        // Assert
        assert!(start.elapsed() >= Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn test_scaled_delay_shrinks_wait() {
        // Arrange
        let delay = ScaledDelay::new(TokioDelay, 0.5);
        let start = tokio::time::Instant::now();

        // Act
        delay.sleep(Duration::from_millis(2000)).await;

        // Assert
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(1000));
        assert!(elapsed < Duration::from_millis(2000));
    }

    #[test]
    fn test_scaled_delay_clamps_invalid_factors() {
        assert!(ScaledDelay::new(TokioDelay, -1.0).factor().abs() < f64::EPSILON);
        assert!(ScaledDelay::new(TokioDelay, f64::NAN).factor().abs() < f64::EPSILON);
        assert!((ScaledDelay::new(TokioDelay, 2.0).factor() - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_scale_saturates_instead_of_overflowing() {
        let delay = ScaledDelay::new(TokioDelay, "1e20".parse().unwrap());

        assert_eq!(delay.scale(Duration::from_millis(2000)), Duration::MAX);
    }

    #[tokio::test]
    async fn test_scaled_delay_with_huge_factor_forwards_saturated_wait() {
        // Arrange
        let inner = LastRequest::default();
        let delay = ScaledDelay::new(inner.clone(), 1e20);

        // Act
        delay.sleep(Duration::from_millis(2000)).await;

        // Assert
        assert_eq!(*inner.0.lock().unwrap(), Some(Duration::MAX));
    }

    #[tokio::test]
    async fn test_scaled_delay_with_zero_factor_skips_inner() {
        let inner = LastRequest::default();
        let delay = ScaledDelay::new(inner.clone(), 0.0);

        delay.sleep(Duration::from_millis(2000)).await;

        assert_eq!(*inner.0.lock().unwrap(), None);
    }
}
