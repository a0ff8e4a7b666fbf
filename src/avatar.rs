//! The mapping from battery state (or a pinned mood) to what gets drawn.
//!
//! This is deliberately a pure function over [`BatteryState`] and
//! [`ModeOverride`]; everything stateful lives in [`crate::collection`] and
//! [`crate::app`].

use std::str::FromStr;

use tui::style::Color;

use crate::collection::BatteryState;

/// The mood an avatar can be in. Auto-derived moods come first, followed by
/// the moods only reachable through an override.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Charging,
    Happy,
    Good,
    Neutral,
    Worried,
    Critical,
    Party,
    Cool,
    Angry,
    Sleepy,
    Love,
}

impl Mood {
    /// Return the string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Mood::Charging => "charging",
            Mood::Happy => "happy",
            Mood::Good => "good",
            Mood::Neutral => "neutral",
            Mood::Worried => "worried",
            Mood::Critical => "critical",
            Mood::Party => "party",
            Mood::Cool => "cool",
            Mood::Angry => "angry",
            Mood::Sleepy => "sleepy",
            Mood::Love => "love",
        }
    }
}

/// A user-selected mood. [`ModeOverride::Auto`] derives the mood from the
/// battery state; anything else pins it regardless of charge.
///
/// Never persisted; a fresh session always starts on `Auto`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ModeOverride {
    #[default]
    Auto,
    Happy,
    Party,
    Cool,
    Angry,
    Sleepy,
    Love,
}

impl ModeOverride {
    /// Parse a mode tag, treating anything unrecognized as `Happy` rather
    /// than failing. Resolution must stay total even for garbage input.
    pub fn from_tag_lossy(tag: &str) -> Self {
        Self::from_str(tag).unwrap_or(ModeOverride::Happy)
    }
}

impl FromStr for ModeOverride {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().trim() {
            "auto" => Ok(ModeOverride::Auto),
            "happy" => Ok(ModeOverride::Happy),
            "party" => Ok(ModeOverride::Party),
            "cool" => Ok(ModeOverride::Cool),
            "angry" => Ok(ModeOverride::Angry),
            "sleepy" => Ok(ModeOverride::Sleepy),
            "love" => Ok(ModeOverride::Love),
            _ => Err(format!(
                "'{s}' is not a valid mode; expected one of 'auto', 'happy', 'party', 'cool', 'angry', 'sleepy', or 'love'."
            )),
        }
    }
}

/// Everything the presentation layer needs to draw one frame of the avatar.
///
/// Fully determined by `(BatteryState, ModeOverride)`; recomputed on every
/// read since it's just a table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisualDescriptor {
    pub character: &'static str,
    pub color: Color,
    pub expression: &'static str,
    pub hat: &'static str,
    pub mood: Mood,
}

const CHARGING: VisualDescriptor = VisualDescriptor {
    character: "⚡",
    color: Color::Rgb(0, 255, 136),
    expression: "😊",
    hat: "🔌",
    mood: Mood::Charging,
};

const HAPPY: VisualDescriptor = VisualDescriptor {
    character: "🚀",
    color: Color::Rgb(76, 175, 80),
    expression: "😄",
    hat: "👑",
    mood: Mood::Happy,
};

const GOOD: VisualDescriptor = VisualDescriptor {
    character: "🌟",
    color: Color::Rgb(139, 195, 74),
    expression: "😊",
    hat: "🎩",
    mood: Mood::Good,
};

const NEUTRAL: VisualDescriptor = VisualDescriptor {
    character: "⚽",
    color: Color::Rgb(255, 152, 0),
    expression: "😐",
    hat: "🧢",
    mood: Mood::Neutral,
};

const WORRIED: VisualDescriptor = VisualDescriptor {
    character: "🔋",
    color: Color::Rgb(255, 193, 7),
    expression: "😟",
    hat: "🎭",
    mood: Mood::Worried,
};

const CRITICAL: VisualDescriptor = VisualDescriptor {
    character: "💀",
    color: Color::Rgb(244, 67, 54),
    expression: "😵",
    hat: "⚠️",
    mood: Mood::Critical,
};

const PARTY: VisualDescriptor = VisualDescriptor {
    character: "🎉",
    color: Color::Rgb(255, 107, 53),
    expression: "🥳",
    hat: "🎊",
    mood: Mood::Party,
};

const COOL: VisualDescriptor = VisualDescriptor {
    character: "😎",
    color: Color::Rgb(33, 150, 243),
    expression: "😎",
    hat: "🕶️",
    mood: Mood::Cool,
};

const ANGRY: VisualDescriptor = VisualDescriptor {
    character: "💥",
    color: Color::Rgb(244, 67, 54),
    expression: "😡",
    hat: "⚡",
    mood: Mood::Angry,
};

const SLEEPY: VisualDescriptor = VisualDescriptor {
    character: "💤",
    color: Color::Rgb(156, 39, 176),
    expression: "😴",
    hat: "🌙",
    mood: Mood::Sleepy,
};

const LOVE: VisualDescriptor = VisualDescriptor {
    character: "💖",
    color: Color::Rgb(233, 30, 99),
    expression: "😍",
    hat: "💕",
    mood: Mood::Love,
};

/// Resolve the avatar's visual for the given state and override.
///
/// Total; always returns exactly one descriptor. In auto mode the first
/// matching rule wins: charging beats everything, then the level tiers from
/// full down to empty. The tier boundaries are exclusive, so level 80 is
/// still "good" and 81 is the first "happy" level.
pub fn resolve(battery: &BatteryState, mode: ModeOverride) -> VisualDescriptor {
    match mode {
        ModeOverride::Happy => HAPPY,
        ModeOverride::Party => PARTY,
        ModeOverride::Cool => COOL,
        ModeOverride::Angry => ANGRY,
        ModeOverride::Sleepy => SLEEPY,
        ModeOverride::Love => LOVE,
        ModeOverride::Auto => {
            if battery.charging {
                CHARGING
            } else if battery.level > 80 {
                HAPPY
            } else if battery.level > 60 {
                GOOD
            } else if battery.level > 40 {
                NEUTRAL
            } else if battery.level > 20 {
                WORRIED
            } else {
                CRITICAL
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auto(level: u8, charging: bool) -> VisualDescriptor {
        let battery = BatteryState {
            level,
            charging,
            supported: true,
        };
        resolve(&battery, ModeOverride::Auto)
    }

    #[test]
    fn tier_boundaries_are_exclusive() {
        assert_eq!(auto(81, false).mood, Mood::Happy);
        assert_eq!(auto(80, false).mood, Mood::Good);
        assert_eq!(auto(61, false).mood, Mood::Good);
        assert_eq!(auto(60, false).mood, Mood::Neutral);
        assert_eq!(auto(41, false).mood, Mood::Neutral);
        assert_eq!(auto(40, false).mood, Mood::Worried);
        assert_eq!(auto(21, false).mood, Mood::Worried);
        assert_eq!(auto(20, false).mood, Mood::Critical);
        assert_eq!(auto(0, false).mood, Mood::Critical);
        assert_eq!(auto(100, false).mood, Mood::Happy);
    }

    #[test]
    fn every_level_resolves_to_exactly_one_auto_tier() {
        for level in 0..=100 {
            let mood = auto(level, false).mood;
            let expected = match level {
                81..=100 => Mood::Happy,
                61..=80 => Mood::Good,
                41..=60 => Mood::Neutral,
                21..=40 => Mood::Worried,
                _ => Mood::Critical,
            };
            assert_eq!(mood, expected, "level {level}");
        }
    }

    #[test]
    fn charging_wins_over_any_level() {
        for level in [0, 20, 21, 50, 80, 81, 100] {
            assert_eq!(auto(level, true).mood, Mood::Charging);
        }
    }

    #[test]
    fn pinned_modes_ignore_battery_state() {
        let cases = [
            (ModeOverride::Happy, Mood::Happy),
            (ModeOverride::Party, Mood::Party),
            (ModeOverride::Cool, Mood::Cool),
            (ModeOverride::Angry, Mood::Angry),
            (ModeOverride::Sleepy, Mood::Sleepy),
            (ModeOverride::Love, Mood::Love),
        ];

        for (mode, mood) in cases {
            for (level, charging) in [(0, false), (100, false), (50, true)] {
                let battery = BatteryState {
                    level,
                    charging,
                    supported: false,
                };
                let visual = resolve(&battery, mode);
                assert_eq!(visual.mood, mood);
            }
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let battery = BatteryState {
            level: 73,
            charging: false,
            supported: true,
        };
        assert_eq!(
            resolve(&battery, ModeOverride::Auto),
            resolve(&battery, ModeOverride::Auto)
        );
    }

    #[test]
    fn unknown_tag_falls_back_to_happy() {
        assert_eq!(ModeOverride::from_tag_lossy("bogus"), ModeOverride::Happy);

        let battery = BatteryState::default();
        assert_eq!(
            resolve(&battery, ModeOverride::from_tag_lossy("bogus")),
            resolve(&battery, ModeOverride::Happy)
        );
    }

    #[test]
    fn mode_parsing_is_case_insensitive() {
        assert_eq!("Party".parse(), Ok(ModeOverride::Party));
        assert_eq!(" AUTO ".parse(), Ok(ModeOverride::Auto));
        assert!("bogus".parse::<ModeOverride>().is_err());
    }
}
