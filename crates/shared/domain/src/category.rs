use crate::constants::ALL_CATEGORIES;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// Coarse part classification used to narrow a catalog fetch.
///
/// String forms match the remote API exactly (`"Power Supply"` has a space).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
)]
pub enum Category {
    #[strum(serialize = "CPU")]
    #[serde(rename = "CPU")]
    Cpu,
    #[strum(serialize = "GPU")]
    #[serde(rename = "GPU")]
    Gpu,
    #[strum(serialize = "RAM")]
    #[serde(rename = "RAM")]
    Ram,
    Storage,
    Motherboard,
    #[strum(serialize = "Power Supply")]
    #[serde(rename = "Power Supply")]
    PowerSupply,
    Cabinet,
}

impl Category {
    /// Options offered by the category selector, `All` first.
    #[must_use]
    pub fn selector_options() -> Vec<&'static str> {
        std::iter::once(ALL_CATEGORIES).chain(Self::iter().map(Self::label)).collect()
    }

    /// The remote API spelling of this category.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cpu => "CPU",
            Self::Gpu => "GPU",
            Self::Ram => "RAM",
            Self::Storage => "Storage",
            Self::Motherboard => "Motherboard",
            Self::PowerSupply => "Power Supply",
            Self::Cabinet => "Cabinet",
        }
    }
}
