//! The config file schema.

pub mod style;

use serde::Deserialize;

/// Workaround as per <https://github.com/serde-rs/serde/issues/1030>.
fn default_as_false() -> bool {
    false
}

#[derive(Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub struct Config {
    pub flags: Option<FlagConfig>,
    pub style: Option<style::StyleConfig>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields))]
pub struct FlagConfig {
    pub(crate) rate: Option<StringOrNum>,
    #[serde(default = "default_as_false")]
    pub(crate) simulate: bool,
}

/// A value that can be represented in TOML as either a string (e.g. a
/// humantime duration) or a plain number of milliseconds.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub(crate) enum StringOrNum {
    String(String),
    Num(u64),
}

impl From<String> for StringOrNum {
    fn from(value: String) -> Self {
        StringOrNum::String(value)
    }
}

impl From<u64> for StringOrNum {
    fn from(value: u64) -> Self {
        StringOrNum::Num(value)
    }
}
