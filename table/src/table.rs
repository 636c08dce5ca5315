//! The generic table widget.

use egui::{Align, Id, Layout, Ui};
use egui_extras::{Column, TableBuilder};

use crate::action::{ActionDescriptor, ActionFactory};
use crate::column::{ACTION_COLUMN_WIDTH, ColumnSpec, merged_titles};
use crate::menu;
use crate::pager;
use crate::record::RowKey;

pub use crate::pager::PAGE_SIZE;

/// Fixed row and header heights, matching the rest of the admin surface.
const ROW_HEIGHT: f32 = 30.0;
const HEADER_HEIGHT: f32 = 24.0;

/// A paginated table over a caller-defined column schema, with an optional
/// synthesized per-row actions column.
///
/// The caller owns the data and the action semantics; the widget owns the
/// column-schema merging and the menu wiring, nothing else. It performs no
/// I/O, mutates none of its inputs and keeps no state across frames beyond
/// the current page index (held in egui temp memory).
///
/// ```no_run
/// # use egui::Id;
/// # use tablegen::{ActionDescriptor, ColumnSpec, RowKey, TableGeneric};
/// # struct User { id: u64, name: String }
/// # impl RowKey for User {
/// #     fn row_id(&self) -> Id { Id::new(self.id) }
/// # }
/// # fn ui(ui: &mut egui::Ui, users: &[User]) {
/// TableGeneric::new(users)
///     .column(ColumnSpec::new("Name", |ui, user: &User| {
///         ui.label(&user.name);
///     }))
///     .actions(|_user| {
///         vec![ActionDescriptor::new("delete", "Delete").danger(true)]
///     })
///     .show(ui);
/// # }
/// ```
pub struct TableGeneric<'a, T> {
    data: &'a [T],
    columns: Vec<ColumnSpec<'a, T>>,
    loading: bool,
    id_salt: Id,
    get_actions: Option<Box<ActionFactory<'a, T>>>,
    context_holder: Option<Box<dyn FnOnce(&mut Ui) + 'a>>,
}

impl<'a, T: RowKey> TableGeneric<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self {
            data,
            columns: Vec::new(),
            loading: false,
            id_salt: Id::new("table_generic"),
            get_actions: None,
            context_holder: None,
        }
    }

    /// Replaces the column schema. Order is preserved as rendered.
    pub fn columns(mut self, columns: Vec<ColumnSpec<'a, T>>) -> Self {
        self.columns = columns;
        self
    }

    /// Appends one column to the schema.
    pub fn column(mut self, column: ColumnSpec<'a, T>) -> Self {
        self.columns.push(column);
        self
    }

    /// Busy indication: shows a spinner and suppresses interaction.
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Distinguishes this table from others in the same `Ui`; also keys the
    /// stored page index.
    pub fn id_salt(mut self, id_salt: impl std::hash::Hash) -> Self {
        self.id_salt = Id::new(id_salt);
        self
    }

    /// Supplies the per-row action factory and thereby the trailing actions
    /// column. Without it no extra column is rendered.
    ///
    /// The factory runs once per visible row per render pass and must be
    /// pure; side effects belong in [`ActionDescriptor::on_click`].
    pub fn actions(mut self, get_actions: impl Fn(&T) -> Vec<ActionDescriptor<'a>> + 'a) -> Self {
        self.get_actions = Some(Box::new(get_actions));
        self
    }

    /// Opaque renderable emitted verbatim below the table, uninterpreted.
    /// Integration point for an external notification subsystem.
    pub fn context_holder(mut self, context_holder: impl FnOnce(&mut Ui) + 'a) -> Self {
        self.context_holder = Some(Box::new(context_holder));
        self
    }

    /// Number of columns the merged schema will render: the caller's schema
    /// plus one trailing actions column when a factory is present.
    pub fn column_count(&self) -> usize {
        self.columns.len() + usize::from(self.get_actions.is_some())
    }

    /// Header labels of the merged schema, in render order.
    pub fn merged_titles(&self) -> Vec<&str> {
        merged_titles(&self.columns, self.get_actions.is_some())
    }

    pub fn show(self, ui: &mut Ui) {
        let Self {
            data,
            columns,
            loading,
            id_salt,
            get_actions,
            context_holder,
        } = self;
        let table_id = ui.id().with(id_salt);

        if loading {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
        }

        ui.add_enabled_ui(!loading, |ui| {
            let page = pager::current_page(ui, table_id, data.len());
            let visible = &data[pager::page_bounds(data.len(), page)];

            let mut builder = TableBuilder::new(ui)
                .id_salt(id_salt)
                .striped(true)
                .cell_layout(Layout::left_to_right(Align::Center));
            for column in &columns {
                builder = builder.column(column.layout());
            }
            if get_actions.is_some() {
                builder = builder.column(Column::exact(ACTION_COLUMN_WIDTH));
            }

            builder
                .header(HEADER_HEIGHT, |mut header| {
                    for title in merged_titles(&columns, get_actions.is_some()) {
                        header.col(|ui| {
                            ui.strong(title);
                        });
                    }
                })
                .body(|mut body| {
                    if visible.is_empty() {
                        body.row(ROW_HEIGHT, |mut row| {
                            row.col(|ui| {
                                ui.weak("No records");
                            });
                        });
                    }
                    for record in visible {
                        body.row(ROW_HEIGHT, |mut row| {
                            for column in &columns {
                                row.col(|ui| column.render_cell(ui, record));
                            }
                            if let Some(get_actions) = &get_actions {
                                row.col(|ui| {
                                    menu::action_cell(ui, record.row_id(), get_actions(record));
                                });
                            }
                        });
                    }
                });

            pager::controls(ui, table_id, data.len());
        });

        if let Some(context_holder) = context_holder {
            context_holder(ui);
        }
    }
}
