//! Identifiers of the screens a show can be assigned to

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::io::error::CinetileError;

macro_rules! display_ids {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        /// One of the fixed screens a show can be assigned to
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum DisplayId {
            $(
                #[doc = concat!("The `", $name, "` screen")]
                $variant,
            )+
        }

        impl DisplayId {
            /// Every display identifier in alphabetical order
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Serialized name, e.g. `screen_alpha`
            pub const fn name(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }
    };
}

display_ids! {
    ScreenAlpha => "screen_alpha",
    ScreenBravo => "screen_bravo",
    ScreenCharlie => "screen_charlie",
    ScreenDelta => "screen_delta",
    ScreenEcho => "screen_echo",
    ScreenFoxtrot => "screen_foxtrot",
    ScreenGolf => "screen_golf",
    ScreenHotel => "screen_hotel",
    ScreenIndia => "screen_india",
    ScreenJuliet => "screen_juliet",
    ScreenKilo => "screen_kilo",
    ScreenLima => "screen_lima",
    ScreenMike => "screen_mike",
    ScreenNovember => "screen_november",
    ScreenOscar => "screen_oscar",
    ScreenPapa => "screen_papa",
    ScreenQuebec => "screen_quebec",
    ScreenRomeo => "screen_romeo",
    ScreenSierra => "screen_sierra",
    ScreenTango => "screen_tango",
    ScreenUniform => "screen_uniform",
    ScreenVictor => "screen_victor",
    ScreenWhiskey => "screen_whiskey",
    ScreenXray => "screen_xray",
    ScreenYankee => "screen_yankee",
    ScreenZulu => "screen_zulu",
}

impl DisplayId {
    /// Title-cased form of the name, e.g. `Screen Alpha`
    pub fn readable_name(self) -> String {
        self.name()
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                chars.next().map_or_else(String::new, |first| {
                    first.to_uppercase().chain(chars).collect()
                })
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for DisplayId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DisplayId {
    type Err = CinetileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|id| id.name() == s)
            .ok_or_else(|| CinetileError::UnknownDisplay {
                name: s.to_string(),
            })
    }
}
