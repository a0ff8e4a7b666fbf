//! Just a bunch of constants used throughout the program.

use indoc::indoc;

pub const DEFAULT_TICK_RATE_IN_MILLISECONDS: u64 = 200;
pub const MINIMUM_TICK_RATE_IN_MILLISECONDS: u64 = 50;

/// How often the input thread polls crossterm for pending events.
pub const INPUT_POLL_IN_MILLISECONDS: u64 = 20;

pub const DEFAULT_CONFIG_FILE_LOCATION: &str = "bpal/bpal.toml";

/// The default config file, written out the first time bpal runs without one.
pub const DEFAULT_CONFIG_CONTENT: &str = indoc! {r##"
    # This is bpal's config file. All of the settings are commented out
    # with their default values; uncomment and edit to change them.

    #[flags]
    # How often the avatar refreshes (and the simulated battery ticks).
    # Either a number in milliseconds or a human duration (e.g. "200ms").
    #rate = 200
    # Force the simulated battery even if real telemetry is available.
    #simulate = false

    #[style]
    # Colors accept hex strings ("#00ff88" or "#0f8"), RGB triplets
    # ("0, 255, 136"), or names ("green").
    #charging_color = "#00ff88"
    #high_battery_color = "#4caf50"
    #medium_battery_color = "#ff9800"
    #low_battery_color = "#f44336"
"##};
