//! The fallback battery simulator.
//!
//! A bounded walker that moves the level by one unit per tick so the avatar
//! still has something to react to on platforms without battery telemetry.
//! Note that it never flips `charging` on its own; unless something external
//! set the flag beforehand, a simulated battery only ever drains.

use super::BatteryState;

/// Walks [`BatteryState::level`] one unit per tick: up toward 100 while
/// charging, down toward 0 otherwise, holding at the bound it reaches.
#[derive(Debug, Clone, Copy, Default)]
pub struct BatterySimulator;

impl BatterySimulator {
    pub fn tick(&mut self, state: &mut BatteryState) {
        if state.charging {
            state.level = state.level.saturating_add(1).min(100);
        } else {
            state.level = state.level.saturating_sub(1);
        }
    }
}
