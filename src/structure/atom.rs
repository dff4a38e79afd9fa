use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Read-only view of one atom, as reported by the structure engine's
/// hit-test or selector lookup.
///
/// The controller never mutates atoms. It reads the residue id to target
/// selection and styling, and the remaining fields to build label and info
/// text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AtomRef {
    /// Engine-wide atom serial number.
    pub serial: u32,
    /// Residue index within its chain. `None` for points the engine could
    /// not assign to a residue.
    pub residue_id: Option<i32>,
    /// Residue type name (e.g. `DA`, `DT`, `HOH`). Empty if unknown.
    pub residue_name: String,
    /// Chain identifier. Empty if unknown.
    pub chain: String,
    /// Atom name within its residue (e.g. `N1`, `C4'`).
    pub atom_name: String,
    /// Element symbol.
    pub element: String,
    /// World-space position in Angstroms.
    pub position: Vec3,
}

impl AtomRef {
    /// Whether this atom can be selected (it belongs to a residue).
    #[must_use]
    pub fn is_selectable(&self) -> bool {
        self.residue_id.is_some()
    }
}

/// Mean position of a set of atoms, or `None` for an empty set.
#[must_use]
pub fn centroid(atoms: &[AtomRef]) -> Option<Vec3> {
    if atoms.is_empty() {
        return None;
    }
    let sum = atoms.iter().map(|a| a.position).sum::<Vec3>();
    Some(sum / atoms.len() as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: f32, y: f32, z: f32) -> AtomRef {
        AtomRef {
            residue_id: Some(1),
            position: Vec3::new(x, y, z),
            ..AtomRef::default()
        }
    }

    #[test]
    fn centroid_of_empty_set_is_none() {
        assert_eq!(centroid(&[]), None);
    }

    #[test]
    fn centroid_averages_positions() {
        let atoms = [at(0.0, 0.0, 0.0), at(2.0, 4.0, -6.0)];
        assert_eq!(centroid(&atoms), Some(Vec3::new(1.0, 2.0, -3.0)));
    }

    #[test]
    fn atoms_without_residue_are_not_selectable() {
        assert!(at(0.0, 0.0, 0.0).is_selectable());
        assert!(!AtomRef::default().is_selectable());
    }
}
