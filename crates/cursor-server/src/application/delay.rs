//! Simulated action durations.
//!
//! Nothing physical moves; the service only pretends that moves and focuses
//! take time.  The two actions use the delay differently:
//!
//! - **move** spawns the delay as a detached task and returns at once.  The
//!   task's completion is never observed and it has no error channel.
//! - **focus** awaits the delay while holding the action gate, so the caller
//!   and every queued action wait the full duration.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

/// Suspends the current task for a given duration.
///
/// Infrastructure uses [`TokioDelay`]; tests substitute a mock to observe the
/// requested durations without waiting.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DelaySimulator: Send + Sync {
    /// Resolves after `duration` has elapsed.
    async fn simulate(&self, duration: Duration);
}

/// [`DelaySimulator`] backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioDelay;

#[async_trait]
impl DelaySimulator for TokioDelay {
    async fn simulate(&self, duration: Duration) {
        debug!("simulating a delay of {}ms", duration.as_millis());
        tokio::time::sleep(duration).await;
    }
}

/// Runs `delay` for `duration` on a detached task.
///
/// The `JoinHandle` is dropped immediately: the caller cannot await, cancel
/// or observe the task.  Must be called from within a Tokio runtime.
pub fn spawn_detached(delay: Arc<dyn DelaySimulator>, duration: Duration) {
    tokio::spawn(async move {
        delay.simulate(duration).await;
        debug!("background move delay of {}ms finished", duration.as_millis());
    });
}

/// Converts a millisecond count from the move calculator into a [`Duration`].
///
/// NaN and negative values become zero; values too large for a `Duration`
/// saturate to [`Duration::MAX`].
pub fn duration_from_ms(ms: f64) -> Duration {
    if ms.is_nan() || ms <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(ms / 1000.0).unwrap_or(Duration::MAX)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_from_ms_whole_values() {
        assert_eq!(duration_from_ms(2000.0), Duration::from_millis(2000));
        assert_eq!(duration_from_ms(3000.0), Duration::from_secs(3));
    }

    #[test]
    fn test_duration_from_ms_clamps_invalid_values() {
        assert_eq!(duration_from_ms(0.0), Duration::ZERO);
        assert_eq!(duration_from_ms(-5.0), Duration::ZERO);
        assert_eq!(duration_from_ms(f64::NAN), Duration::ZERO);
        assert_eq!(duration_from_ms(f64::INFINITY), Duration::MAX);
    }

    #[tokio::test(start_paused = true)]
    async fn test_tokio_delay_waits_for_duration() {
        // Arrange
        let start = tokio::time::Instant::now();

        // Act
        TokioDelay.simulate(Duration::from_millis(750)).await;

        // Assert: the paused clock advanced by at least the requested duration
        assert!(start.elapsed() >= Duration::from_millis(750));
    }

    #[tokio::test]
    async fn test_spawn_detached_runs_delay_in_background() {
        // Arrange: a mock that reports each requested duration on a channel
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let mut mock = MockDelaySimulator::new();
        mock.expect_simulate().returning(move |d| {
            let _ = tx.send(d);
        });

        // Act: spawn and return without awaiting anything
        spawn_detached(Arc::new(mock), Duration::from_millis(1234));

        // Assert: the background task ran the delay
        assert_eq!(rx.recv().await, Some(Duration::from_millis(1234)));
    }
}
