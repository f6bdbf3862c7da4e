//! Disposition: the keep/sell/donate/dump decision state of an item.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use clearout_core::DomainError;

/// Decision status of an item.
///
/// Five states with free transitions: any state is reachable from any other
/// in one user action. Every item starts at `ToSort`; there is no terminal
/// state (an item stays mutable until deleted).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Disposition {
    #[default]
    #[serde(rename = "To Sort")]
    ToSort,
    Keep,
    Sell,
    Donate,
    Dump,
}

impl Disposition {
    /// Every disposition, undecided first.
    pub const ALL: [Disposition; 5] = [
        Disposition::ToSort,
        Disposition::Keep,
        Disposition::Sell,
        Disposition::Donate,
        Disposition::Dump,
    ];

    /// The decided dispositions, in the fixed order the progress bar draws
    /// its segments.
    pub const DECIDED: [Disposition; 4] = [
        Disposition::Keep,
        Disposition::Sell,
        Disposition::Donate,
        Disposition::Dump,
    ];

    /// User-facing label (also the stored representation).
    pub const fn label(&self) -> &'static str {
        match self {
            Disposition::ToSort => "To Sort",
            Disposition::Keep => "Keep",
            Disposition::Sell => "Sell",
            Disposition::Donate => "Donate",
            Disposition::Dump => "Dump",
        }
    }

    /// Whether the destination note is editable for an item in this state.
    ///
    /// Only `Keep` surfaces the destination field; the stored note itself is
    /// never cleared by a transition away from `Keep`.
    pub const fn destination_editable(&self) -> bool {
        matches!(self, Disposition::Keep)
    }
}

impl core::fmt::Display for Disposition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Disposition {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Disposition::ALL
            .into_iter()
            .find(|d| d.label() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown disposition: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_to_sort() {
        assert_eq!(Disposition::default(), Disposition::ToSort);
    }

    #[test]
    fn only_keep_surfaces_the_destination_field() {
        for d in Disposition::ALL {
            assert_eq!(d.destination_editable(), d == Disposition::Keep);
        }
    }

    #[test]
    fn decided_order_matches_the_progress_bar() {
        assert_eq!(
            Disposition::DECIDED,
            [
                Disposition::Keep,
                Disposition::Sell,
                Disposition::Donate,
                Disposition::Dump
            ]
        );
    }

    #[test]
    fn to_sort_serializes_with_a_space() {
        let json = serde_json::to_string(&Disposition::ToSort).unwrap();
        assert_eq!(json, "\"To Sort\"");
    }
}
