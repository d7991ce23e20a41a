//! Widget capability traits.
//!
//! GUI toolkits can serialize a window's placement ("geometry") and its
//! internal arrangement such as splitter positions or dock layout ("state")
//! into opaque byte blobs. The store persists those blobs without
//! interpreting them; these traits are the seam between the store and
//! whatever toolkit the application uses.
//!
//! A widget type implements whichever capabilities apply. A plain dialog
//! usually has only [`GeometryPersist`]; a main window with toolbars and
//! docks implements both.
//!
//! # Testability
//!
//! Tests use [`mock::MockWidget`], which records every restore call and
//! serves canned blobs, so persistence can be exercised without a GUI
//! toolkit.

pub mod mock;

/// A widget whose screen placement can be captured and reapplied.
pub trait GeometryPersist {
    /// Serializes the current geometry (position, size) into an opaque blob.
    fn save_geometry(&self) -> Vec<u8>;

    /// Reapplies a previously saved geometry blob.
    ///
    /// `bytes` may be empty (nothing was stored); the widget keeps its
    /// current placement in that case.
    fn restore_geometry(&mut self, bytes: &[u8]);
}

/// A widget whose internal layout state can be captured and reapplied.
pub trait StatePersist {
    /// Serializes the current internal state (toolbars, docks, splitters)
    /// into an opaque blob.
    fn save_state(&self) -> Vec<u8>;

    /// Reapplies a previously saved state blob.
    ///
    /// `bytes` may be empty (nothing was stored); the widget keeps its
    /// current state in that case.
    fn restore_state(&mut self, bytes: &[u8]);
}
