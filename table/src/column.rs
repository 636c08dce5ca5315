//! Caller-owned column schema.

use egui::Ui;
use egui_extras::Column;

/// Header label of the synthesized trailing actions column.
pub(crate) const ACTION_COLUMN_TITLE: &str = "Action";

/// Width of the synthesized actions column.
pub(crate) const ACTION_COLUMN_WIDTH: f32 = 70.0;

/// One column of a [`crate::TableGeneric`]: a header title, a width policy
/// and a cell renderer projecting a record into its displayed cell.
///
/// The schema is owned entirely by the caller; the table treats it as opaque
/// and only ever appends to it when synthesizing the actions column.
pub struct ColumnSpec<'a, T> {
    title: String,
    width: Column,
    render: Box<dyn Fn(&mut Ui, &T) + 'a>,
}

impl<'a, T> ColumnSpec<'a, T> {
    /// A flexible column with the given header title and cell renderer.
    pub fn new(title: impl Into<String>, render: impl Fn(&mut Ui, &T) + 'a) -> Self {
        Self {
            title: title.into(),
            width: Column::remainder().at_least(60.0),
            render: Box::new(render),
        }
    }

    /// Override the width policy (defaults to `Column::remainder()`).
    pub fn width(mut self, width: Column) -> Self {
        self.width = width;
        self
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    #[inline]
    pub(crate) fn layout(&self) -> Column {
        self.width
    }

    #[inline]
    pub(crate) fn render_cell(&self, ui: &mut Ui, record: &T) {
        (self.render)(ui, record);
    }
}

/// Header labels of the rendered schema: the caller's titles in order, plus
/// exactly one trailing actions title when an action factory is present.
#[inline]
pub(crate) fn merged_titles<'s, T>(
    columns: &'s [ColumnSpec<'_, T>],
    has_actions: bool,
) -> Vec<&'s str> {
    let mut titles: Vec<&str> = columns.iter().map(|c| c.title()).collect();
    if has_actions {
        titles.push(ACTION_COLUMN_TITLE);
    }
    titles
}
