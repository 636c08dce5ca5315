//! Row identity contract for [`crate::TableGeneric`].

use egui::Id;

/// A record that can be displayed as a table row.
///
/// The returned id must be stable across re-renders and unique within one
/// dataset; it seeds the per-row widget ids (most importantly the action-menu
/// popup, so that opening a menu always opens *that* row's menu). Duplicate
/// ids within one dataset leave row-identity behavior undefined, though
/// rendering will not panic.
///
/// The typical implementation hashes the record's primary-key field:
///
/// ```
/// use egui::Id;
/// use tablegen::RowKey;
///
/// struct User {
///     id: u64,
///     name: String,
/// }
///
/// impl RowKey for User {
///     fn row_id(&self) -> Id {
///         Id::new(self.id)
///     }
/// }
/// ```
pub trait RowKey {
    /// Stable unique identity of this record.
    fn row_id(&self) -> Id;
}
