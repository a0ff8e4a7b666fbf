//! Real battery telemetry via the battery crate.
//!
//! Covers battery readings for:
//! - Linux 2.6.39+
//! - MacOS 10.10+
//! - iOS
//! - Windows 7+
//! - FreeBSD
//! - DragonFlyBSD
//!
//! For more information, refer to the [starship_battery](https://github.com/starship/rust-battery) repo/docs.

use starship_battery::{Battery, Manager, State, units::ratio::ratio};

use super::{TelemetryError, TelemetryEvent, TelemetrySnapshot, TelemetrySource};

/// Telemetry backed by the first battery `starship_battery` reports.
/// Aggregating multiple batteries is out of scope; laptops with more than
/// one get whichever the platform lists first.
#[derive(Default)]
pub struct StarshipTelemetry {
    handle: Option<(Manager, Battery)>,
    last_level: u8,
    last_charging: bool,
}

impl StarshipTelemetry {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(battery: &Battery) -> (u8, bool) {
        let fraction = f64::from(battery.state_of_charge().get::<ratio>());
        let level = super::BatteryState::level_from_fraction(fraction);
        let charging = matches!(battery.state(), State::Charging);
        (level, charging)
    }
}

impl TelemetrySource for StarshipTelemetry {
    fn acquire(&mut self) -> Result<TelemetrySnapshot, TelemetryError> {
        let manager =
            Manager::new().map_err(|err| TelemetryError::Acquisition(err.to_string()))?;

        let battery = manager
            .batteries()
            .map_err(|err| TelemetryError::Acquisition(err.to_string()))?
            .flatten()
            .next()
            .ok_or(TelemetryError::Unavailable)?;

        let (level, charging) = Self::read(&battery);
        self.last_level = level;
        self.last_charging = charging;

        let fraction = f64::from(battery.state_of_charge().get::<ratio>());
        self.handle = Some((manager, battery));

        Ok(TelemetrySnapshot { fraction, charging })
    }

    fn poll(&mut self) -> Vec<TelemetryEvent> {
        let mut events = Vec::new();

        if let Some((manager, battery)) = &mut self.handle {
            // A failed refresh just means no change events this pass.
            if manager.refresh(battery).is_ok() {
                let (level, charging) = Self::read(battery);

                if level != self.last_level {
                    self.last_level = level;
                    events.push(TelemetryEvent::LevelChanged(level));
                }
                if charging != self.last_charging {
                    self.last_charging = charging;
                    events.push(TelemetryEvent::ChargingChanged(charging));
                }
            }
        }

        events
    }

    fn release(&mut self) {
        self.handle = None;
    }
}
