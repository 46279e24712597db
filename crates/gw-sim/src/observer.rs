//! World observer trait for progress reporting and instrumentation.

/// Callbacks invoked by the tick loop at tick boundaries.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl WorldObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, tick: u64, delivered: usize, living: usize) {
///         if tick % self.interval == 0 {
///             println!("tick {tick}: {delivered} events, {living} entities");
///         }
///     }
/// }
/// ```
pub trait WorldObserver {
    /// Called at the very start of each tick, before event delivery.
    fn on_tick_start(&mut self, _tick: u64) {}

    /// Called at the end of each tick.
    ///
    /// `delivered` is the number of events delivered this tick; `living`
    /// the entity count after the sweep.
    fn on_tick_end(&mut self, _tick: u64, _delivered: usize, _living: usize) {}
}

/// A [`WorldObserver`] that does nothing.  Use when you need to call the
/// step functions but don't want callbacks.
pub struct NoopObserver;

impl WorldObserver for NoopObserver {}
