//! Live local-time clock
//!
//! Continuously derives the wall-clock time at a caller-supplied UTC offset
//! and republishes it once per second. The clock has two lifecycle states,
//! keyed on the presence of an offset: `Idle` (no offset, no producer) and
//! `Running` (one producer task per offset value). Supplying a different
//! offset retires the current producer and starts a fresh cycle; tearing the
//! clock down retires the producer for good.
//!
//! The offset is applied as a flat shift on top of the UTC clock source. It
//! is intentionally never resolved against a timezone database, so DST rules
//! of the host or of the target locale do not affect the displayed time.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use domain::value_objects::UtcOffset;
use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Interval between clock republications
const TICK_PERIOD: Duration = Duration::from_secs(1);

/// Format of the published time-of-day string
const DISPLAY_FORMAT: &str = "%H:%M:%S";

/// State shared between the clock owner and its producer task
struct ClockShared {
    /// Latest published display value; `None` until the first tick
    display: watch::Sender<Option<String>>,
    /// Current cycle generation. Every transition bumps this under the
    /// lock, and ticks publish under the same lock only while their own
    /// generation is still current, so a retired cycle can never land a
    /// stale tick after a restart or teardown.
    generation: Mutex<u64>,
}

impl ClockShared {
    /// Compute and publish one tick, unless `generation` has been retired.
    ///
    /// Returns `false` once the cycle is stale so the producer loop stops.
    fn publish_tick(&self, generation: u64, offset: UtcOffset) -> bool {
        let current = self.generation.lock();
        if *current != generation {
            return false;
        }
        let time = offset.wall_time_at(Utc::now());
        self.display
            .send_replace(Some(time.format(DISPLAY_FORMAT).to_string()));
        true
    }
}

/// A running producer cycle for one offset value
struct Cycle {
    offset: UtcOffset,
    handle: JoinHandle<()>,
}

/// Periodically self-refreshing local-time display for a fixed UTC offset
///
/// ```no_run
/// use application::LocalClock;
/// use domain::value_objects::UtcOffset;
///
/// # async fn run() {
/// let mut clock = LocalClock::new();
/// let mut display = clock.subscribe();
///
/// // Entering `Running` publishes the first reading immediately and then
/// // once per second until the offset changes or the clock is torn down.
/// clock.set_offset(Some(UtcOffset::from_seconds(3600)));
/// assert!(clock.display().is_some());
///
/// display.changed().await.unwrap();
/// clock.shutdown();
/// # }
/// ```
#[derive(Default)]
pub struct LocalClock {
    shared: Arc<ClockShared>,
    cycle: Option<Cycle>,
}

impl std::fmt::Debug for LocalClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalClock")
            .field("offset", &self.offset())
            .field("running", &self.is_running())
            .finish_non_exhaustive()
    }
}

impl Default for ClockShared {
    fn default() -> Self {
        let (display, _) = watch::channel(None);
        Self {
            display,
            generation: Mutex::new(0),
        }
    }
}

impl LocalClock {
    /// Create an idle clock with no display value
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe to display updates
    ///
    /// The receiver observes every published tick; the value is `None`
    /// while no tick has ever been published.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<String>> {
        self.shared.display.subscribe()
    }

    /// Latest published display value
    #[must_use]
    pub fn display(&self) -> Option<String> {
        self.shared.display.borrow().clone()
    }

    /// Whether a producer cycle is currently active
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.cycle.is_some()
    }

    /// The offset of the active cycle, if any
    #[must_use]
    pub fn offset(&self) -> Option<UtcOffset> {
        self.cycle.as_ref().map(|cycle| cycle.offset)
    }

    /// Supply the clock's offset input
    ///
    /// `None` stops the producer and leaves the last display value in
    /// place. `Some(offset)` starts a producer for that offset, publishing
    /// the first reading synchronously (no initial one-second delay);
    /// re-supplying the value of the active cycle is a no-op, while a
    /// different value retires the active cycle first so that no tick from
    /// the old offset can be published after the change.
    ///
    /// Starting a cycle spawns a task and therefore must happen inside a
    /// tokio runtime.
    pub fn set_offset(&mut self, offset: Option<UtcOffset>) {
        match offset {
            None => self.stop(),
            Some(offset) if self.offset() == Some(offset) => {}
            Some(offset) => self.start(offset),
        }
    }

    /// Tear the clock down; idempotent
    ///
    /// After this returns no further display update occurs, even for ticks
    /// the runtime had already scheduled.
    pub fn shutdown(&mut self) {
        self.stop();
    }

    fn start(&mut self, offset: UtcOffset) {
        let generation = self.retire_cycle();

        // First tick, synchronous with the transition into `Running`.
        self.shared.publish_tick(generation, offset);

        let shared = Arc::clone(&self.shared);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(TICK_PERIOD);
            // The interval's immediate first tick was already covered by
            // the synchronous publish above.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if !shared.publish_tick(generation, offset) {
                    break;
                }
            }
        });

        debug!(offset = offset.as_seconds(), "clock cycle started");
        self.cycle = Some(Cycle { offset, handle });
    }

    fn stop(&mut self) {
        self.retire_cycle();
    }

    /// Invalidate the active cycle and return the next generation.
    ///
    /// The generation bump happens under the gate lock before the task is
    /// aborted, so even a tick that is already mid-poll observes the
    /// retirement and refuses to publish.
    fn retire_cycle(&mut self) -> u64 {
        let generation = {
            let mut current = self.shared.generation.lock();
            *current += 1;
            *current
        };
        if let Some(cycle) = self.cycle.take() {
            cycle.handle.abort();
            debug!(offset = cycle.offset.as_seconds(), "clock cycle retired");
        }
        generation
    }
}

impl Drop for LocalClock {
    fn drop(&mut self) {
        self.stop();
    }
}
