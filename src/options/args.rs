//! Argument parsing via clap.

use clap::*;
use indoc::indoc;

use crate::avatar::ModeOverride;

const TEMPLATE: &str = indoc! {
    "{name} {version}
    {author}

    {about}

    {usage-heading} {usage}

    {all-args}"
};

const USAGE: &str = "bpal [OPTIONS]";

/// The arguments for bpal.
#[derive(Parser, Clone, Debug, Default)]
#[command(
    name = crate_name!(),
    version = crate_version!(),
    author = crate_authors!(),
    about = crate_description!(),
    color = ColorChoice::Auto,
    help_template = TEMPLATE,
    override_usage = USAGE,
)]
pub struct Args {
    #[command(flatten)]
    pub general_args: GeneralArgs,

    #[command(flatten)]
    pub simulation_args: SimulationArgs,
}

#[derive(clap::Args, Clone, Debug, Default)]
#[command(next_help_heading = "General Options")]
pub struct GeneralArgs {
    #[arg(
        short = 'C',
        long,
        value_name = "PATH",
        help = "Sets the location of the config file.",
        long_help = "Sets the location of the config file. Expects a config file in the TOML format. \
                    If it doesn't exist, a default config file is created at the path."
    )]
    pub config_location: Option<String>,

    #[arg(
        short = 'm',
        long,
        value_name = "MODE",
        help = "Sets the starting mood override.",
        long_help = "Sets the mood override active at startup. One of 'auto', 'happy', 'party', \
                    'cool', 'angry', 'sleepy', or 'love'. Defaults to 'auto', which derives the \
                    mood from the battery state. Never persisted across sessions."
    )]
    pub mode: Option<ModeOverride>,

    #[arg(
        short = 'r',
        long,
        value_name = "TIME",
        help = "Sets how often the avatar refreshes.",
        long_help = "Sets how often the avatar refreshes and how often the simulated battery \
                    ticks. Takes a number in milliseconds or a human duration (e.g. 200ms). The \
                    minimum is 50ms, and the default is 200ms."
    )]
    pub rate: Option<String>,
}

#[derive(clap::Args, Clone, Debug, Default)]
#[command(next_help_heading = "Simulation Options")]
pub struct SimulationArgs {
    #[arg(
        short = 'c',
        long,
        help = "Starts the simulated battery charging.",
        long_help = "Starts the simulated battery with the charging flag set, so the level walks \
                    up toward 100 instead of draining. The simulator itself never flips this flag; \
                    this is the only way to see charging visuals without real telemetry."
    )]
    pub charging: bool,

    #[arg(
        short = 'S',
        long,
        help = "Forces the simulated battery.",
        long_help = "Forces the fallback battery simulator, even on platforms where real battery \
                    telemetry is available."
    )]
    pub simulate: bool,

    #[arg(
        short = 'l',
        long,
        value_name = "LEVEL",
        value_parser = value_parser!(u8).range(0..=100),
        help = "Sets the simulated battery's starting level.",
        long_help = "Sets the starting charge level of the simulated battery, from 0 to 100. \
                    Defaults to 50. Ignored when real telemetry is in use."
    )]
    pub starting_level: Option<u8>,
}

/// Returns an [`Args`].
pub fn get_args() -> Args {
    Args::parse()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn verify_cli() {
        Args::command().debug_assert();
    }

    #[test]
    fn mode_arg_is_strict() {
        assert!(Args::try_parse_from(["bpal", "-m", "party"]).is_ok());
        assert!(Args::try_parse_from(["bpal", "-m", "bogus"]).is_err());
    }

    #[test]
    fn level_arg_is_bounded() {
        assert!(Args::try_parse_from(["bpal", "-l", "100"]).is_ok());
        assert!(Args::try_parse_from(["bpal", "-l", "101"]).is_err());
    }
}
