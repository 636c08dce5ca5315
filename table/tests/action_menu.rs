//! Interaction tests for the per-row action menu: open, dispatch-once,
//! disabled gating.

use std::cell::Cell;
use std::rc::Rc;

use egui_kittest::Harness;
use kittest::Queryable;
use tablegen::{ActionDescriptor, TableGeneric};

mod common;

use common::{name_column, people};

#[test]
fn opening_a_menu_lists_that_rows_actions() {
    let data = people(2);
    let mut harness = Harness::new_ui(move |ui| {
        TableGeneric::new(&data)
            .column(name_column())
            .actions(|_| {
                vec![
                    ActionDescriptor::new("edit", "Edit"),
                    ActionDescriptor::new("del", "Delete").danger(true),
                ]
            })
            .show(ui);
    });
    harness.step();

    // Items are not visible until a trigger is clicked.
    assert!(harness.query_by_label("Edit").is_none());
    assert!(harness.query_by_label("Delete").is_none());

    if let Some(trigger) = harness.query_all_by_label("⋯").next() {
        trigger.click();
    }
    harness.step();
    harness.step();

    assert!(
        harness.query_by_label("Edit").is_some(),
        "menu should list the Edit item"
    );
    assert!(
        harness.query_by_label("Delete").is_some(),
        "menu should list the Delete item"
    );
}

#[test]
fn trigger_opens_exactly_that_rows_menu() {
    let data = people(2);
    let mut harness = Harness::new_ui(move |ui| {
        TableGeneric::new(&data)
            .column(name_column())
            .actions(|person| {
                vec![ActionDescriptor::new(
                    "del",
                    format!("Delete {}", person.name),
                )]
            })
            .show(ui);
    });
    harness.step();

    if let Some(trigger) = harness.query_all_by_label("⋯").next() {
        trigger.click();
    }
    harness.step();
    harness.step();

    assert!(
        harness.query_by_label("Delete person-01").is_some(),
        "first row's menu should list its own action"
    );
    assert!(
        harness.query_by_label("Delete person-02").is_none(),
        "second row's actions must not leak into the first row's menu"
    );
}

#[test]
fn clicking_an_enabled_item_invokes_its_handler_exactly_once() {
    let clicks = Rc::new(Cell::new(0_usize));
    let data = people(2);
    let factory_clicks = clicks.clone();

    let mut harness = Harness::new_ui(move |ui| {
        let clicks = factory_clicks.clone();
        TableGeneric::new(&data)
            .column(name_column())
            .actions(move |_| {
                let clicks = clicks.clone();
                vec![
                    ActionDescriptor::new("del", "Delete")
                        .danger(true)
                        .on_click(move || clicks.set(clicks.get() + 1)),
                ]
            })
            .show(ui);
    });
    harness.step();

    if let Some(trigger) = harness.query_all_by_label("⋯").next() {
        trigger.click();
    }
    harness.step();
    harness.step();

    harness.get_by_label("Delete").click();
    harness.step();

    assert_eq!(clicks.get(), 1, "handler should fire exactly once");
}

#[test]
fn clicking_a_disabled_item_is_a_no_op() {
    let clicks = Rc::new(Cell::new(0_usize));
    let data = people(1);
    let factory_clicks = clicks.clone();

    let mut harness = Harness::new_ui(move |ui| {
        let clicks = factory_clicks.clone();
        TableGeneric::new(&data)
            .column(name_column())
            .actions(move |_| {
                let clicks = clicks.clone();
                vec![
                    ActionDescriptor::new("del", "Delete")
                        .disabled(true)
                        .on_click(move || clicks.set(clicks.get() + 1)),
                ]
            })
            .show(ui);
    });
    harness.step();

    if let Some(trigger) = harness.query_all_by_label("⋯").next() {
        trigger.click();
    }
    harness.step();
    harness.step();

    if let Some(item) = harness.query_by_label("Delete") {
        item.click();
    }
    harness.step();

    assert_eq!(clicks.get(), 0, "disabled item must not invoke its handler");
}

#[test]
fn an_item_without_a_handler_is_inert() {
    let data = people(1);
    let mut harness = Harness::new_ui(move |ui| {
        TableGeneric::new(&data)
            .column(name_column())
            .actions(|_| vec![ActionDescriptor::new("noop", "Noop")])
            .show(ui);
    });
    harness.step();

    if let Some(trigger) = harness.query_all_by_label("⋯").next() {
        trigger.click();
    }
    harness.step();
    harness.step();

    if let Some(item) = harness.query_by_label("Noop") {
        item.click();
    }
    // Nothing to observe beyond not panicking; the click simply closes the menu.
    harness.step();
}
