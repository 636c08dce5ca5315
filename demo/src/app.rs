//! The demo application shell: a menu bar, the user table and a status line
//! fed through the table's context-holder slot.

use egui::RichText;
use egui_extras::Column;
use flume::{Receiver, Sender};
use tablegen::{ActionDescriptor, ColumnSpec, TableGeneric};

use crate::data::User;

/// Row commands dispatched from the action menu.
///
/// Menu handlers only enqueue; the app applies them at the end of the frame,
/// after the table has released its borrow of the user list.
#[derive(Debug, Clone, Copy)]
pub enum UserAction {
    Edit(u64),
    ResetPassword(u64),
    Deactivate(u64),
    Delete(u64),
}

pub struct DemoApp {
    users: Vec<User>,
    loading: bool,
    status: Option<String>,
    actions_tx: Sender<UserAction>,
    actions_rx: Receiver<UserAction>,
}

impl DemoApp {
    pub fn new(users: Vec<User>) -> Self {
        let (actions_tx, actions_rx) = flume::unbounded();
        Self {
            users,
            loading: false,
            status: None,
            actions_tx,
            actions_rx,
        }
    }

    fn apply(&mut self, action: UserAction) {
        log::debug!("applying {action:?}");
        match action {
            UserAction::Edit(id) => {
                self.status = Some(format!("Edit requested for user #{id}"));
            }
            UserAction::ResetPassword(id) => {
                self.status = Some(format!("Password reset link sent for user #{id}"));
            }
            UserAction::Deactivate(id) => {
                if let Some(user) = self.users.iter_mut().find(|u| u.id == id) {
                    user.active = false;
                    self.status = Some(format!("Deactivated {}", user.name));
                }
            }
            UserAction::Delete(id) => {
                self.users.retain(|u| u.id != id);
                self.status = Some(format!("Deleted user #{id}"));
            }
        }
    }

    fn columns() -> Vec<ColumnSpec<'static, User>> {
        vec![
            ColumnSpec::new("ID", |ui, user: &User| {
                ui.label(RichText::new(user.id.to_string()).monospace());
            })
            .width(Column::exact(50.0)),
            ColumnSpec::new("Name", |ui, user: &User| {
                ui.label(&user.name);
            })
            .width(Column::remainder().at_least(120.0)),
            ColumnSpec::new("Email", |ui, user: &User| {
                ui.label(RichText::new(&user.email).monospace());
            })
            .width(Column::remainder().at_least(160.0)),
            ColumnSpec::new("Status", |ui, user: &User| {
                if user.active {
                    ui.label("Active");
                } else {
                    ui.weak("Inactive");
                }
            })
            .width(Column::exact(70.0)),
        ]
    }
}

impl eframe::App for DemoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.label("Tablegen Demo");
                ui.separator();
                ui.label(format!("{} users", self.users.len()));
                ui.separator();
                ui.checkbox(&mut self.loading, "Simulate loading");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Users");
            ui.add_space(8.0);

            let tx = self.actions_tx.clone();
            let status = self.status.clone();
            TableGeneric::new(&self.users)
                .id_salt("demo_users")
                .columns(Self::columns())
                .loading(self.loading)
                .actions(move |user: &User| {
                    let id = user.id;
                    let edit_tx = tx.clone();
                    let reset_tx = tx.clone();
                    let deactivate_tx = tx.clone();
                    let delete_tx = tx.clone();
                    vec![
                        ActionDescriptor::new("edit", "Edit").on_click(move || {
                            edit_tx.send(UserAction::Edit(id)).ok();
                        }),
                        ActionDescriptor::new("reset", "Reset password").on_click(move || {
                            reset_tx.send(UserAction::ResetPassword(id)).ok();
                        }),
                        ActionDescriptor::new("deactivate", "Deactivate")
                            .disabled(!user.active)
                            .on_click(move || {
                                deactivate_tx.send(UserAction::Deactivate(id)).ok();
                            }),
                        ActionDescriptor::new("delete", "Delete")
                            .danger(true)
                            .on_click(move || {
                                delete_tx.send(UserAction::Delete(id)).ok();
                            }),
                    ]
                })
                .context_holder(move |ui| {
                    if let Some(status) = status {
                        ui.add_space(8.0);
                        ui.horizontal(|ui| {
                            ui.weak("Last action:");
                            ui.label(status);
                        });
                    }
                })
                .show(ui);
        });

        // Flush row actions enqueued during this frame.
        while let Ok(action) = self.actions_rx.try_recv() {
            self.apply(action);
        }
    }
}
