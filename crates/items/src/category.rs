//! Fixed category set for classifying items.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use clearout_core::DomainError;

/// Classification tag for an item.
///
/// The set is closed; records in the remote collection carry the user-facing
/// label, so the serde representation is the label, not the variant name.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Category {
    #[default]
    #[serde(rename = "Kitchen Items")]
    KitchenItems,
    #[serde(rename = "Lamps & Lighting")]
    LampsLighting,
    #[serde(rename = "Office Supplies")]
    OfficeSupplies,
    Furniture,
    #[serde(rename = "Sporting Goods")]
    SportingGoods,
    Electronics,
    Tools,
    Decor,
    Clothing,
    #[serde(rename = "Books & Media")]
    BooksMedia,
    #[serde(rename = "Holiday Items")]
    HolidayItems,
    #[serde(rename = "Outdoor/Garden")]
    OutdoorGarden,
    Other,
}

impl Category {
    /// Every category, in the order the filter chips render them.
    pub const ALL: [Category; 13] = [
        Category::KitchenItems,
        Category::LampsLighting,
        Category::OfficeSupplies,
        Category::Furniture,
        Category::SportingGoods,
        Category::Electronics,
        Category::Tools,
        Category::Decor,
        Category::Clothing,
        Category::BooksMedia,
        Category::HolidayItems,
        Category::OutdoorGarden,
        Category::Other,
    ];

    /// User-facing label (also the stored representation).
    pub const fn label(&self) -> &'static str {
        match self {
            Category::KitchenItems => "Kitchen Items",
            Category::LampsLighting => "Lamps & Lighting",
            Category::OfficeSupplies => "Office Supplies",
            Category::Furniture => "Furniture",
            Category::SportingGoods => "Sporting Goods",
            Category::Electronics => "Electronics",
            Category::Tools => "Tools",
            Category::Decor => "Decor",
            Category::Clothing => "Clothing",
            Category::BooksMedia => "Books & Media",
            Category::HolidayItems => "Holiday Items",
            Category::OutdoorGarden => "Outdoor/Garden",
            Category::Other => "Other",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown category: {s}")))
    }
}
