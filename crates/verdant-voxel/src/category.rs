//! Plant archetypes. Each category selects exactly one generative recipe.

use serde::{Deserialize, Serialize};

/// The archetype controlling which recipe builds a plant.
///
/// Parsed leniently from snake_case names: anything unknown becomes
/// [`PlantCategory::Unrecognized`], which synthesizes a plain fallback column
/// instead of failing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlantCategory {
    /// Bird-of-paradise style: parallel stalks crowned with beaked flowers.
    TallFlower,
    /// Round flowering shrub.
    BushFlower,
    /// Small tree with a tapering trunk and diamond canopy patches.
    TreeSmall,
    /// Broad fenestrated leaves on radiating stalks.
    BroadLeaf,
    /// Climbing vine winding around a vertical axis.
    Vine,
    /// Potted orchid with an arching flower spike.
    Orchid,
    /// Any category name the garden does not know.
    Unrecognized,
}

impl PlantCategory {
    /// Every category that has a dedicated recipe.
    pub const ALL: [Self; 6] = [
        Self::TallFlower,
        Self::BushFlower,
        Self::TreeSmall,
        Self::BroadLeaf,
        Self::Vine,
        Self::Orchid,
    ];

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::TallFlower => "tall_flower",
            Self::BushFlower => "bush_flower",
            Self::TreeSmall => "tree_small",
            Self::BroadLeaf => "broad_leaf",
            Self::Vine => "vine",
            Self::Orchid => "orchid",
            Self::Unrecognized => "unrecognized",
        }
    }

    /// Parses a category name. Case and `-`/`_` are ignored, so
    /// `"TALL_FLOWER"` and `"tall-flower"` both resolve.
    pub fn from_name(name: &str) -> Self {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|c| c.name() == normalized)
            .unwrap_or(Self::Unrecognized)
    }
}

impl From<String> for PlantCategory {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<PlantCategory> for String {
    fn from(category: PlantCategory) -> Self {
        category.name().to_string()
    }
}

impl std::fmt::Display for PlantCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
