//! Shared fixtures for the harness tests.

use egui::Id;
use tablegen::{ColumnSpec, RowKey};

pub struct Person {
    pub id: u64,
    pub name: String,
}

impl RowKey for Person {
    fn row_id(&self) -> Id {
        Id::new(self.id)
    }
}

/// `count` people named `person-01`, `person-02`, ...
pub fn people(count: usize) -> Vec<Person> {
    (1..=count as u64)
        .map(|id| Person {
            id,
            name: format!("person-{id:02}"),
        })
        .collect()
}

pub fn name_column<'a>() -> ColumnSpec<'a, Person> {
    ColumnSpec::new("Name", |ui, person: &Person| {
        ui.label(&person.name);
    })
}
