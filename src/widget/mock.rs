//! Mock widget for unit testing.
//!
//! Real widgets belong to a GUI toolkit and cannot exist in a headless test
//! run. `MockWidget` stands in for them: it serves canned blobs from plain
//! fields and records every restore call so tests can inspect exactly what
//! the store handed back.

use super::{GeometryPersist, StatePersist};

/// A mock implementation of both widget capabilities.
///
/// All fields are public: tests set `geometry`/`state` to the blobs the
/// widget should report, and read the `restored_*` records afterwards.
#[derive(Debug, Default)]
pub struct MockWidget {
    /// Blob returned by `save_geometry`. Also overwritten by
    /// `restore_geometry`, like a real widget adopting the restored
    /// placement.
    pub geometry: Vec<u8>,
    /// Blob returned by `save_state`. Overwritten by `restore_state`.
    pub state: Vec<u8>,
    /// Every blob passed to `restore_geometry`, in call order.
    pub restored_geometries: Vec<Vec<u8>>,
    /// Every blob passed to `restore_state`, in call order.
    pub restored_states: Vec<Vec<u8>>,
}

impl MockWidget {
    /// Creates a mock widget with empty blobs and no recorded calls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock widget reporting the given geometry and state blobs.
    pub fn with_blobs(geometry: Vec<u8>, state: Vec<u8>) -> Self {
        Self {
            geometry,
            state,
            ..Self::default()
        }
    }
}

impl GeometryPersist for MockWidget {
    fn save_geometry(&self) -> Vec<u8> {
        self.geometry.clone()
    }

    fn restore_geometry(&mut self, bytes: &[u8]) {
        self.geometry = bytes.to_vec();
        self.restored_geometries.push(bytes.to_vec());
    }
}

impl StatePersist for MockWidget {
    fn save_state(&self) -> Vec<u8> {
        self.state.clone()
    }

    fn restore_state(&mut self, bytes: &[u8]) {
        self.state = bytes.to_vec();
        self.restored_states.push(bytes.to_vec());
    }
}
