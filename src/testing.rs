//! Recording engine doubles for unit tests.

use std::collections::BTreeMap;
use std::time::Duration;

use glam::Vec3;

use crate::options::LabelOptions;
use crate::scene::{AnnotationHandle, SceneRenderer};
use crate::structure::{AtomRef, Selector, StructureEngine, StyleSpec};

/// One call made on [`RecordingStructure`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum StructureCall {
    SetStyle(Selector, StyleSpec),
    ClearStyles,
}

/// Structure engine over a fixed atom list that records every call.
pub(crate) struct RecordingStructure {
    pub atoms: Vec<AtomRef>,
    pub ready: bool,
    pub calls: Vec<StructureCall>,
}

impl RecordingStructure {
    pub(crate) fn with_atoms(atoms: Vec<AtomRef>) -> Self {
        Self {
            atoms,
            ready: true,
            calls: Vec::new(),
        }
    }

    /// Calls issued since (and including) the most recent `ClearStyles`:
    /// the commands that define what is on screen now.
    pub(crate) fn applied(&self) -> &[StructureCall] {
        let start = self
            .calls
            .iter()
            .rposition(|c| *c == StructureCall::ClearStyles)
            .unwrap_or(0);
        &self.calls[start..]
    }

    /// The style `atom` has on screen, replaying replace semantics.
    pub(crate) fn effective_style(&self, atom: &AtomRef) -> StyleSpec {
        let mut style = StyleSpec::default();
        for call in &self.calls {
            match call {
                StructureCall::ClearStyles => style = StyleSpec::default(),
                StructureCall::SetStyle(selector, spec) => {
                    if selector.matches(atom) {
                        style = *spec;
                    }
                }
            }
        }
        style
    }
}

impl StructureEngine for RecordingStructure {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn set_style(&mut self, selector: &Selector, style: &StyleSpec) {
        self.calls
            .push(StructureCall::SetStyle(selector.clone(), *style));
    }

    fn clear_styles(&mut self) {
        self.calls.push(StructureCall::ClearStyles);
    }

    fn find_atoms(&self, selector: &Selector) -> Vec<AtomRef> {
        self.atoms
            .iter()
            .filter(|a| selector.matches(a))
            .cloned()
            .collect()
    }
}

/// One call made on [`RecordingScene`].
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum SceneCall {
    Create(AnnotationHandle),
    Destroy(AnnotationHandle),
    Frame,
    Reframe(Option<Duration>),
}

/// Scene renderer that tracks live labels and records every call.
pub(crate) struct RecordingScene {
    pub ready: bool,
    pub live: BTreeMap<AnnotationHandle, (String, Vec3)>,
    pub calls: Vec<SceneCall>,
    next_id: u64,
}

impl RecordingScene {
    pub(crate) fn new() -> Self {
        Self {
            ready: true,
            live: BTreeMap::new(),
            calls: Vec::new(),
            next_id: 1,
        }
    }

    pub(crate) fn frames(&self) -> usize {
        self.calls.iter().filter(|c| **c == SceneCall::Frame).count()
    }
}

impl SceneRenderer for RecordingScene {
    fn is_ready(&self) -> bool {
        self.ready
    }

    fn create_annotation(
        &mut self,
        text: &str,
        anchor: Vec3,
        _style: &LabelOptions,
    ) -> AnnotationHandle {
        let handle = AnnotationHandle::new(self.next_id);
        self.next_id += 1;
        let _ = self.live.insert(handle, (text.to_owned(), anchor));
        self.calls.push(SceneCall::Create(handle));
        handle
    }

    fn destroy_annotation(&mut self, handle: AnnotationHandle) {
        let _ = self.live.remove(&handle);
        self.calls.push(SceneCall::Destroy(handle));
    }

    fn request_frame(&mut self) {
        self.calls.push(SceneCall::Frame);
    }

    fn reframe_to_fit(&mut self, duration: Option<Duration>) {
        self.calls.push(SceneCall::Reframe(duration));
    }
}

fn atom(
    serial: u32,
    residue: Option<(i32, &str)>,
    chain: &str,
    name: &str,
    position: Vec3,
) -> AtomRef {
    AtomRef {
        serial,
        residue_id: residue.map(|(id, _)| id),
        residue_name: residue.map(|(_, n)| n.to_owned()).unwrap_or_default(),
        chain: chain.to_owned(),
        atom_name: name.to_owned(),
        element: name[..1].to_owned(),
        position,
    }
}

/// A few atoms from a B-DNA dodecamer plus an unassigned water oxygen.
pub(crate) fn dna_fragment() -> Vec<AtomRef> {
    vec![
        atom(1, Some((1, "DC")), "A", "P", Vec3::new(0.0, 0.0, 0.0)),
        atom(2, Some((1, "DC")), "A", "N3", Vec3::new(2.0, 0.0, 0.0)),
        atom(3, Some((7, "DA")), "A", "N1", Vec3::new(1.0, 1.0, 1.0)),
        atom(4, Some((7, "DA")), "A", "C2", Vec3::new(3.0, 1.0, 1.0)),
        atom(5, Some((7, "DA")), "A", "N3", Vec3::new(2.0, 4.0, 1.0)),
        atom(6, Some((9, "DT")), "A", "O4", Vec3::new(-4.0, 0.0, 2.0)),
        atom(7, Some((9, "DT")), "A", "N3", Vec3::new(-2.0, 0.0, 2.0)),
        atom(8, None, "", "O", Vec3::new(10.0, 10.0, 10.0)),
    ]
}

/// The fragment atom with `serial`.
pub(crate) fn fragment_atom(serial: u32) -> AtomRef {
    dna_fragment()
        .into_iter()
        .find(|a| a.serial == serial)
        .unwrap_or_default()
}
