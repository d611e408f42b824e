//! Product categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of categories a product can belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Earrings,
    HairClips,
    HairAccessories,
    Bracelets,
    Necklaces,
    Rings,
}

impl Category {
    /// Every category, in sidebar order.
    pub const ALL: [Category; 6] = [
        Category::Earrings,
        Category::HairClips,
        Category::HairAccessories,
        Category::Bracelets,
        Category::Necklaces,
        Category::Rings,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Earrings => "earrings",
            Category::HairClips => "hair-clips",
            Category::HairAccessories => "hair-accessories",
            Category::Bracelets => "bracelets",
            Category::Necklaces => "necklaces",
            Category::Rings => "rings",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Category::Earrings => "Earrings",
            Category::HairClips => "Hair Clips",
            Category::HairAccessories => "Hair Accessories",
            Category::Bracelets => "Bracelets",
            Category::Necklaces => "Necklaces",
            Category::Rings => "Rings",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s.trim().to_lowercase())
            .ok_or_else(|| format!("unknown category: {}", s))
    }
}

/// Category selector used by the shopper-facing filter.
///
/// `All` is the `"all"` sentinel from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Check whether a product category passes this selector.
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => *selected == category,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryFilter::All => "all",
            CategoryFilter::Only(category) => category.as_str(),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse().map(CategoryFilter::Only)
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}
