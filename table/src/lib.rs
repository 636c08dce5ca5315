#![warn(clippy::all, rust_2018_idioms)]
//! Generic paginated data table for egui.
//!
//! The building blocks are split into focused modules:
//! - `record`: the row-identity contract
//! - `column`: caller-owned column schema
//! - `action`: per-row action descriptors and the action factory contract
//! - `table`: the [`TableGeneric`] widget itself
//!
//! Internals:
//! - `menu`: the per-row action dropdown
//! - `pager`: client-side pagination (fixed page size)

pub mod action;
pub mod column;
mod menu;
mod pager;
pub mod record;
pub mod table;

pub use action::{ActionDescriptor, ActionFactory};
pub use column::ColumnSpec;
pub use record::RowKey;
pub use table::{PAGE_SIZE, TableGeneric};
