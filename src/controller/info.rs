//! Residue info box and label text for a selection.

use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::structure::AtomRef;

/// Human-readable details of a clicked atom and its residue, shown in the
/// page's info box.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ResidueInfo {
    /// Residue id.
    pub residue_id: i32,
    /// Residue type name; `UNK` when the engine did not report one.
    pub residue_name: String,
    /// Chain id; `A` when the engine did not report one.
    pub chain: String,
    /// Name of the clicked atom.
    pub atom_name: String,
    /// Element of the clicked atom.
    pub element: String,
    /// Position of the clicked atom.
    pub position: Vec3,
}

impl ResidueInfo {
    /// Read the info fields from an atom. `None` if the atom has no residue.
    #[must_use]
    pub fn from_atom(atom: &AtomRef) -> Option<Self> {
        let residue_id = atom.residue_id?;
        Some(Self {
            residue_id,
            residue_name: non_empty_or(&atom.residue_name, "UNK"),
            chain: non_empty_or(&atom.chain, "A"),
            atom_name: atom.atom_name.trim().to_owned(),
            element: atom.element.trim().to_owned(),
            position: atom.position,
        })
    }
}

fn non_empty_or(value: &str, fallback: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        fallback.to_owned()
    } else {
        trimmed.to_owned()
    }
}

impl fmt::Display for ResidueInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Residue: {} {} (Chain {})",
            self.residue_name, self.residue_id, self.chain
        )?;
        write!(f, "Clicked atom: {}", self.atom_name)
    }
}

/// Text of the label placed on a selected residue.
#[must_use]
pub fn residue_label_text(residue_id: i32) -> String {
    format!("Residue {residue_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_text_matches_the_info_box() {
        let atom = AtomRef {
            residue_id: Some(7),
            residue_name: "DA".to_owned(),
            chain: "B".to_owned(),
            atom_name: " N1 ".to_owned(),
            ..AtomRef::default()
        };
        let info = ResidueInfo::from_atom(&atom).unwrap();
        assert_eq!(
            info.to_string(),
            "Residue: DA 7 (Chain B)\nClicked atom: N1"
        );
    }

    #[test]
    fn missing_names_fall_back() {
        let atom = AtomRef {
            residue_id: Some(3),
            ..AtomRef::default()
        };
        let info = ResidueInfo::from_atom(&atom).unwrap();
        assert_eq!(info.residue_name, "UNK");
        assert_eq!(info.chain, "A");
    }

    #[test]
    fn unassigned_atoms_have_no_info() {
        assert!(ResidueInfo::from_atom(&AtomRef::default()).is_none());
    }

    #[test]
    fn label_text() {
        assert_eq!(residue_label_text(12), "Residue 12");
    }
}
