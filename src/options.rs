//! How user config and arguments turn into the running app.

pub mod args;
pub mod config;
mod error;

use std::{
    fs,
    path::{Path, PathBuf},
};

pub use args::Args;
pub use config::Config;
pub use error::OptionError;
pub(crate) use error::OptionResult;

use crate::{
    app::{App, AppConfigFields},
    constants::{
        DEFAULT_CONFIG_CONTENT, DEFAULT_CONFIG_FILE_LOCATION, DEFAULT_TICK_RATE_IN_MILLISECONDS,
        MINIMUM_TICK_RATE_IN_MILLISECONDS,
    },
    options::config::StringOrNum,
};

/// Find the config file path: an explicit override wins, otherwise the
/// default location under the platform config directory. Returns `None` if
/// there is no override and no config directory, in which case defaults are
/// used without touching the filesystem.
pub fn get_config_path(override_config_path: Option<&str>) -> Option<PathBuf> {
    if let Some(conf_loc) = override_config_path {
        Some(PathBuf::from(conf_loc))
    } else {
        dirs::config_dir().map(|path| path.join(DEFAULT_CONFIG_FILE_LOCATION))
    }
}

/// Read the config file, creating it from the default template if it does
/// not exist yet.
pub fn create_or_get_config(config_path: Option<&Path>) -> Result<Config, OptionError> {
    if let Some(path) = config_path {
        if let Ok(config_string) = fs::read_to_string(path) {
            Ok(toml_edit::de::from_str(&config_string)?)
        } else {
            if let Some(parent_path) = path.parent() {
                fs::create_dir_all(parent_path)?;
            }
            fs::write(path, DEFAULT_CONFIG_CONTENT)?;

            Ok(toml_edit::de::from_str(DEFAULT_CONFIG_CONTENT)?)
        }
    } else {
        Ok(Config::default())
    }
}

/// Build the [`App`] from arguments and the config file. Arguments always
/// take precedence over config values.
pub fn init_app(args: &Args, config: &Config) -> Result<App, OptionError> {
    let tick_rate_in_milliseconds = get_tick_rate_in_milliseconds(args, config)?;
    let force_simulation = args.simulation_args.simulate
        || config.flags.as_ref().is_some_and(|flags| flags.simulate);

    let app_config_fields = AppConfigFields {
        tick_rate_in_milliseconds,
        force_simulation,
        starting_level: args.simulation_args.starting_level.unwrap_or(50),
        starting_charging: args.simulation_args.charging,
    };

    let starting_mode = args.general_args.mode.unwrap_or_default();

    Ok(App::new(app_config_fields, starting_mode))
}

fn get_tick_rate_in_milliseconds(args: &Args, config: &Config) -> OptionResult<u64> {
    let tick_rate = if let Some(rate) = &args.general_args.rate {
        try_parse_ms(rate).map_err(|_| OptionError::invalid_arg_value("rate"))?
    } else if let Some(rate) = config.flags.as_ref().and_then(|flags| flags.rate.as_ref()) {
        match rate {
            StringOrNum::String(s) => {
                try_parse_ms(s).map_err(|_| OptionError::invalid_config_value("rate"))?
            }
            StringOrNum::Num(n) => *n,
        }
    } else {
        DEFAULT_TICK_RATE_IN_MILLISECONDS
    };

    if tick_rate < MINIMUM_TICK_RATE_IN_MILLISECONDS {
        if args.general_args.rate.is_some() {
            Err(OptionError::arg(
                "'--rate' must be greater than 50 milliseconds.",
            ))
        } else {
            Err(OptionError::config(
                "'rate' must be greater than 50 milliseconds.",
            ))
        }
    } else {
        Ok(tick_rate)
    }
}

/// Parse a string to a millisecond count, accepting either a humantime
/// duration or a raw number of milliseconds.
fn try_parse_ms(s: &str) -> Result<u64, ()> {
    if let Ok(duration) = humantime::parse_duration(s) {
        Ok(duration.as_millis() as u64)
    } else if let Ok(ms) = s.parse::<u64>() {
        Ok(ms)
    } else {
        Err(())
    }
}
