//! Flag colors shared between the reviewer menu and card metadata
//!
//! Flag ids are stable and externally meaningful: the flag child actions in
//! the reviewer menu reuse them as their menu ids, and they round-trip
//! through the collection backend.

use std::fmt;

/// A card flag color
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    None,
    Red,
    Orange,
    Green,
    Blue,
    Pink,
    Turquoise,
    Purple,
}

impl Flag {
    /// All flags, in id order
    pub const ALL: [Flag; 8] = [
        Flag::None,
        Flag::Red,
        Flag::Orange,
        Flag::Green,
        Flag::Blue,
        Flag::Pink,
        Flag::Turquoise,
        Flag::Purple,
    ];

    /// Stable numeric id, shared with the collection backend
    pub const fn id(self) -> u32 {
        match self {
            Flag::None => 0,
            Flag::Red => 1,
            Flag::Orange => 2,
            Flag::Green => 3,
            Flag::Blue => 4,
            Flag::Pink => 5,
            Flag::Turquoise => 6,
            Flag::Purple => 7,
        }
    }

    /// Icon resource key for this flag
    pub const fn icon(self) -> &'static str {
        match self {
            Flag::None => "ic_flag_transparent",
            Flag::Red => "ic_flag_red",
            Flag::Orange => "ic_flag_orange",
            Flag::Green => "ic_flag_green",
            Flag::Blue => "ic_flag_blue",
            Flag::Pink => "ic_flag_pink",
            Flag::Turquoise => "ic_flag_turquoise",
            Flag::Purple => "ic_flag_purple",
        }
    }

    /// Title resource key for this flag's menu label
    pub const fn label_res(self) -> &'static str {
        match self {
            Flag::None => "flag_none",
            Flag::Red => "flag_red",
            Flag::Orange => "flag_orange",
            Flag::Green => "flag_green",
            Flag::Blue => "flag_blue",
            Flag::Pink => "flag_pink",
            Flag::Turquoise => "flag_turquoise",
            Flag::Purple => "flag_purple",
        }
    }

    /// Look up a flag by its stable id
    pub fn from_id(id: u32) -> Option<Flag> {
        Flag::ALL.iter().copied().find(|f| f.id() == id)
    }
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Flag::None => "None",
            Flag::Red => "Red",
            Flag::Orange => "Orange",
            Flag::Green => "Green",
            Flag::Blue => "Blue",
            Flag::Pink => "Pink",
            Flag::Turquoise => "Turquoise",
            Flag::Purple => "Purple",
        };
        write!(f, "{}", name)
    }
}
