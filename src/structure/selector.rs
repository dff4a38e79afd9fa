use serde::{Deserialize, Serialize};

use super::AtomRef;

/// A query over atoms, used to target a style command or a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Selector {
    /// Every atom in the model.
    All,
    /// All atoms of the residue with this id.
    Residue(i32),
    /// All atoms of residues with this type name (e.g. `DA`).
    ResidueName(String),
    /// All atoms of this element.
    Element(String),
    /// The single atom with this serial number.
    Serial(u32),
}

impl Selector {
    /// Whether `atom` is matched by this selector.
    ///
    /// Name and element comparisons ignore surrounding whitespace, since
    /// fixed-width structure formats pad them.
    #[must_use]
    pub fn matches(&self, atom: &AtomRef) -> bool {
        match self {
            Self::All => true,
            Self::Residue(id) => atom.residue_id == Some(*id),
            Self::ResidueName(name) => atom.residue_name.trim() == name,
            Self::Element(element) => {
                atom.element.trim().eq_ignore_ascii_case(element)
            }
            Self::Serial(serial) => atom.serial == *serial,
        }
    }
}
