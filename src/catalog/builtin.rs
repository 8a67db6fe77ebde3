//! Festivals that are always listed

use chrono::NaiveDate;

use crate::search::Named;
use crate::utils::time::next_annual_occurrence;

/// A festival that falls on the same calendar day every year
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuiltinFestival {
    pub name: &'static str,
    pub month: u32,
    pub day: u32,
    pub emoji: &'static str,
    pub tagline: &'static str,
    pub image: &'static str,
    pub description: &'static str,
}

impl BuiltinFestival {
    /// Next date of this festival on or after `today`
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        next_annual_occurrence(self.month, self.day, today)
    }
}

impl Named for BuiltinFestival {
    fn display_name(&self) -> &str {
        self.name
    }
}

pub const BUILTIN_FESTIVALS: &[BuiltinFestival] = &[
    BuiltinFestival {
        name: "Gandhi Jayanti",
        month: 10,
        day: 2,
        emoji: "🕊",
        tagline: "Honoring the Mahatma 🙏",
        image: "https://via.placeholder.com/400x300/FFD700/ffffff?text=🕊+Gandhi+Jayanti",
        description: "Gandhi Jayanti commemorates the birth anniversary of Mahatma Gandhi, \
                      the Father of the Nation, who led India to independence through \
                      non-violent resistance.",
    },
    BuiltinFestival {
        name: "Christmas",
        month: 12,
        day: 25,
        emoji: "🎄",
        tagline: "Merry Christmas in advance 🎅",
        image: "https://via.placeholder.com/400x300/228B22/ffffff?text=🎄+Christmas+Festival",
        description: "Christmas is a Christian holiday celebrating the birth of Jesus Christ, \
                      observed by billions of people worldwide with joy, gifts, and festive \
                      celebrations.",
    },
    BuiltinFestival {
        name: "New Year",
        month: 1,
        day: 1,
        emoji: "🎆",
        tagline: "A new beginning awaits 🌟",
        image: "https://via.placeholder.com/400x300/4B0082/ffffff?text=🎆+New+Year+Festival",
        description: "New Year's Day marks the beginning of a new calendar year, celebrated \
                      worldwide with fireworks, parties, and resolutions for the year ahead.",
    },
];

/// The built-in festival list
pub fn builtin_festivals() -> &'static [BuiltinFestival] {
    BUILTIN_FESTIVALS
}
