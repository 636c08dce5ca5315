//! Client-side pagination with a fixed page size.
//!
//! The widget itself is stateless per render; the current page index lives in
//! egui temp memory keyed by the table id, and is re-clamped every frame so a
//! shrinking dataset can never leave the pager pointing past the end.

use egui::{Id, Ui};

/// Items per page. Page-size driven, fixed.
pub const PAGE_SIZE: usize = 10;

/// Number of pages needed for `len` records. An empty dataset still has one
/// (empty) page so the pager readout stays well-formed.
pub(crate) fn page_count(len: usize) -> usize {
    len.div_ceil(PAGE_SIZE).max(1)
}

/// Clamps a stored page index to the dataset.
pub(crate) fn clamp_page(len: usize, page: usize) -> usize {
    page.min(page_count(len) - 1)
}

/// Index range of `page` within a dataset of `len` records.
pub(crate) fn page_bounds(len: usize, page: usize) -> std::ops::Range<usize> {
    let start = (page * PAGE_SIZE).min(len);
    let end = (start + PAGE_SIZE).min(len);
    start..end
}

/// Current page for the table identified by `table_id`, clamped to `len`.
pub(crate) fn current_page(ui: &Ui, table_id: Id, len: usize) -> usize {
    let stored = ui
        .data(|data| data.get_temp::<usize>(table_id))
        .unwrap_or(0);
    clamp_page(len, stored)
}

/// Renders the prev/next controls and the position readout, updating the
/// stored page index on interaction.
pub(crate) fn controls(ui: &mut Ui, table_id: Id, len: usize) {
    let page = current_page(ui, table_id, len);
    let pages = page_count(len);
    let mut next_page = page;

    ui.horizontal(|ui| {
        if ui.add_enabled(page > 0, egui::Button::new("Prev")).clicked() {
            next_page = page - 1;
        }
        ui.label(format!("Page {}/{pages}", page + 1));
        if ui
            .add_enabled(page + 1 < pages, egui::Button::new("Next"))
            .clicked()
        {
            next_page = page + 1;
        }
    });

    if next_page != page {
        log::debug!("table page changed: {page} -> {next_page}");
        ui.data_mut(|data| data.insert_temp(table_id, next_page));
    }
}
