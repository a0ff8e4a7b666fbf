//! Battery state intake. Uses real platform telemetry when it's there, and
//! a simulated walker when it isn't.

pub mod simulator;
#[cfg(feature = "battery")]
pub mod starship;

use thiserror::Error;

use self::simulator::BatterySimulator;

/// The authoritative battery state. Mutated only by telemetry events (real
/// mode) or simulator ticks (fallback mode), never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatteryState {
    /// Percentage charge, always within `0..=100`.
    pub level: u8,
    pub charging: bool,
    /// Whether the platform provided real telemetry versus simulated data.
    pub supported: bool,
}

impl Default for BatteryState {
    fn default() -> Self {
        BatteryState {
            level: 50,
            charging: false,
            supported: false,
        }
    }
}

impl BatteryState {
    /// Set the level, clamping anything above 100.
    pub fn set_level(&mut self, level: u8) {
        self.level = level.min(100);
    }

    /// Convert a `0..=1` charge fraction to a whole percentage, rounding
    /// down the way the platform APIs report it.
    pub fn level_from_fraction(fraction: f64) -> u8 {
        (fraction * 100.0).floor().clamp(0.0, 100.0) as u8
    }
}

/// A single change reported by a telemetry source. Each variant carries only
/// its own field, so applying events in any interleaving can never clobber
/// the other field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TelemetryEvent {
    LevelChanged(u8),
    ChargingChanged(bool),
}

/// Why telemetry acquisition didn't happen. Both variants route to the
/// fallback simulator and are never surfaced to a caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TelemetryError {
    #[error("no battery telemetry on this platform")]
    Unavailable,
    #[error("battery telemetry acquisition failed, {0}")]
    Acquisition(String),
}

/// The state read off a freshly-acquired telemetry handle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TelemetrySnapshot {
    /// Charge as a `0..=1` fraction, as the platform reports it.
    pub fraction: f64,
    pub charging: bool,
}

/// A source of battery telemetry. Injected into the collector so tests can
/// substitute a fake without touching the real platform API.
pub trait TelemetrySource {
    /// Try to acquire the underlying platform handle and read its initial
    /// state. Any failure here means the caller falls back to simulation.
    fn acquire(&mut self) -> Result<TelemetrySnapshot, TelemetryError>;

    /// Drain the changes that happened since the last poll.
    fn poll(&mut self) -> Vec<TelemetryEvent>;

    /// Release the platform handle. Called exactly once on teardown.
    fn release(&mut self);
}

/// A telemetry source that never acquires. Used when the `battery` feature
/// is compiled out or the user forces simulation.
#[derive(Debug, Default)]
pub struct NullTelemetry;

impl TelemetrySource for NullTelemetry {
    fn acquire(&mut self) -> Result<TelemetrySnapshot, TelemetryError> {
        Err(TelemetryError::Unavailable)
    }

    fn poll(&mut self) -> Vec<TelemetryEvent> {
        Vec::new()
    }

    fn release(&mut self) {}
}

/// Owns the [`BatteryState`] and whichever update mode `init` settled on.
#[derive(Debug)]
pub struct BatteryCollector<S: TelemetrySource> {
    pub state: BatteryState,
    source: S,
    simulator: Option<BatterySimulator>,
    running: bool,
}

impl<S: TelemetrySource> BatteryCollector<S> {
    pub fn new(source: S) -> Self {
        BatteryCollector {
            state: BatteryState::default(),
            source,
            simulator: None,
            running: false,
        }
    }

    /// Like [`BatteryCollector::new`], but with a caller-chosen starting
    /// state for the simulated walker.
    pub fn with_starting_state(source: S, level: u8, charging: bool) -> Self {
        let mut collector = Self::new(source);
        collector.state.set_level(level);
        collector.state.charging = charging;
        collector
    }

    /// Attempt to acquire real telemetry; on any failure fall back to the
    /// simulator. Exactly one of the two update modes is active afterwards,
    /// and the failure path is never an error to the caller.
    pub fn init(&mut self) {
        match self.source.acquire() {
            Ok(snapshot) => {
                self.state.supported = true;
                self.state
                    .set_level(BatteryState::level_from_fraction(snapshot.fraction));
                self.state.charging = snapshot.charging;
            }
            Err(_err) => {
                #[cfg(feature = "log")]
                debug!("falling back to simulated telemetry: {_err}");

                self.state.supported = false;
                self.simulator = Some(BatterySimulator);
            }
        }
        self.running = true;
    }

    /// Run one collection pass: drain telemetry events in real mode, or take
    /// one simulator step in fallback mode. A no-op after teardown.
    pub fn update(&mut self) {
        if !self.running {
            return;
        }

        if self.state.supported {
            for event in self.source.poll() {
                match event {
                    TelemetryEvent::LevelChanged(level) => self.state.set_level(level),
                    TelemetryEvent::ChargingChanged(charging) => self.state.charging = charging,
                }
            }
        } else if let Some(simulator) = &mut self.simulator {
            simulator.tick(&mut self.state);
        }
    }

    /// Stop future updates and release whatever `init` acquired. Idempotent;
    /// a tick fired after this must not alter the state.
    pub fn teardown(&mut self) {
        if self.running {
            self.running = false;
            self.simulator = None;
            self.source.release();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A scriptable stand-in for platform telemetry.
    struct FakeTelemetry {
        acquire_result: Result<TelemetrySnapshot, TelemetryError>,
        pending: Vec<TelemetryEvent>,
        released: bool,
    }

    impl FakeTelemetry {
        fn unavailable() -> Self {
            FakeTelemetry {
                acquire_result: Err(TelemetryError::Unavailable),
                pending: Vec::new(),
                released: false,
            }
        }

        fn failing() -> Self {
            FakeTelemetry {
                acquire_result: Err(TelemetryError::Acquisition("dbus went away".to_string())),
                pending: Vec::new(),
                released: false,
            }
        }

        fn live(fraction: f64, charging: bool) -> Self {
            FakeTelemetry {
                acquire_result: Ok(TelemetrySnapshot { fraction, charging }),
                pending: Vec::new(),
                released: false,
            }
        }
    }

    impl TelemetrySource for FakeTelemetry {
        fn acquire(&mut self) -> Result<TelemetrySnapshot, TelemetryError> {
            self.acquire_result.clone()
        }

        fn poll(&mut self) -> Vec<TelemetryEvent> {
            std::mem::take(&mut self.pending)
        }

        fn release(&mut self) {
            assert!(!self.released, "release must only be called once");
            self.released = true;
        }
    }

    #[test]
    fn missing_telemetry_falls_back_to_simulation() {
        let mut collector = BatteryCollector::new(FakeTelemetry::unavailable());
        collector.init();

        assert!(!collector.state.supported);
        assert!(collector.simulator.is_some());
    }

    #[test]
    fn failed_acquisition_falls_back_to_simulation() {
        let mut collector = BatteryCollector::new(FakeTelemetry::failing());
        collector.init();

        assert!(!collector.state.supported);
        assert!(collector.simulator.is_some());
    }

    #[test]
    fn successful_acquisition_reads_the_initial_snapshot() {
        let mut collector = BatteryCollector::new(FakeTelemetry::live(0.679, true));
        collector.init();

        assert!(collector.state.supported);
        assert!(collector.simulator.is_none());
        assert_eq!(collector.state.level, 67);
        assert!(collector.state.charging);
    }

    #[test]
    fn events_update_only_their_own_field() {
        let mut collector = BatteryCollector::new(FakeTelemetry::live(0.50, false));
        collector.init();

        collector.source.pending = vec![
            TelemetryEvent::ChargingChanged(true),
            TelemetryEvent::LevelChanged(49),
        ];
        collector.update();
        assert_eq!(collector.state.level, 49);
        assert!(collector.state.charging);

        // The opposite interleaving must end in the same place.
        let mut collector = BatteryCollector::new(FakeTelemetry::live(0.50, false));
        collector.init();
        collector.source.pending = vec![
            TelemetryEvent::LevelChanged(49),
            TelemetryEvent::ChargingChanged(true),
        ];
        collector.update();
        assert_eq!(collector.state.level, 49);
        assert!(collector.state.charging);
    }

    #[test]
    fn level_events_are_clamped() {
        let mut collector = BatteryCollector::new(FakeTelemetry::live(1.0, false));
        collector.init();

        collector.source.pending = vec![TelemetryEvent::LevelChanged(250)];
        collector.update();
        assert_eq!(collector.state.level, 100);
    }

    #[test]
    fn teardown_stops_the_simulator() {
        let mut collector = BatteryCollector::new(FakeTelemetry::unavailable());
        collector.init();
        collector.update();
        assert_eq!(collector.state.level, 49);

        collector.teardown();
        let before = collector.state;

        // An artificially fired tick after teardown must change nothing.
        collector.update();
        assert_eq!(collector.state, before);
    }

    #[test]
    fn teardown_releases_the_source_once() {
        let mut collector = BatteryCollector::new(FakeTelemetry::live(0.5, false));
        collector.init();
        collector.teardown();
        assert!(collector.source.released);

        // A second teardown must not release again; FakeTelemetry asserts.
        collector.teardown();
    }

    #[test]
    fn fraction_conversion_rounds_down() {
        assert_eq!(BatteryState::level_from_fraction(0.0), 0);
        assert_eq!(BatteryState::level_from_fraction(0.999), 99);
        assert_eq!(BatteryState::level_from_fraction(1.0), 100);
        assert_eq!(BatteryState::level_from_fraction(0.305), 30);
    }
}
