//! The equipment catalog.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;

/// One of the bookable equipment items.
///
/// The catalog is fixed; the wire form is the kebab-case id (`projector`,
/// `mobile-screen`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EquipmentId {
    Projector,
    MobileScreen,
}

impl EquipmentId {
    /// Every catalog item, in display order.
    pub const ALL: [EquipmentId; 2] = [EquipmentId::Projector, EquipmentId::MobileScreen];

    /// The stable wire identifier.
    pub const fn as_str(&self) -> &'static str {
        match self {
            EquipmentId::Projector => "projector",
            EquipmentId::MobileScreen => "mobile-screen",
        }
    }

    /// Human-readable name.
    pub const fn name(&self) -> &'static str {
        match self {
            EquipmentId::Projector => "Projector",
            EquipmentId::MobileScreen => "Mobile screen",
        }
    }

    pub const fn icon(&self) -> &'static str {
        match self {
            EquipmentId::Projector => "📽️",
            EquipmentId::MobileScreen => "🖥️",
        }
    }

    /// Look up a catalog item by its wire identifier.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.as_str() == id)
    }
}

impl FromStr for EquipmentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ValidationError::UnknownEquipment(s.to_owned()))
    }
}

impl fmt::Display for EquipmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
