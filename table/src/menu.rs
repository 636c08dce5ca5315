//! Per-row action dropdown.

use egui::{Button, Color32, Id, RichText, Ui, Visuals};

use crate::action::ActionDescriptor;

/// Label of the per-row menu trigger button.
pub(crate) const MENU_TRIGGER_LABEL: &str = "⋯";

/// Renders the actions cell for one row: a trigger button that opens a
/// dropdown listing `actions` in order.
///
/// The row id salts the trigger's widget id so that each row owns a distinct
/// popup and opening a menu always opens that row's menu.
#[inline]
pub(crate) fn action_cell(ui: &mut Ui, row_id: Id, actions: Vec<ActionDescriptor<'_>>) {
    ui.push_id(row_id, |ui| {
        ui.menu_button(MENU_TRIGGER_LABEL, |ui| {
            for action in actions {
                menu_item(ui, action);
            }
        });
    });
}

/// Renders one menu item and dispatches its handler on click.
///
/// Disabled items never report a click, so the handler gate is enforced by
/// the widget layer rather than re-checked here. An enabled item without a
/// handler still closes the menu.
#[inline]
pub(crate) fn menu_item(ui: &mut Ui, action: ActionDescriptor<'_>) {
    let ActionDescriptor {
        key,
        label,
        on_click,
        danger,
        disabled,
    } = action;

    let mut text = RichText::new(label);
    if let Some(color) = item_color(danger, ui.visuals()) {
        text = text.color(color);
    }

    if ui.add_enabled(!disabled, Button::new(text)).clicked() {
        log::debug!("row action dispatched: {key}");
        if let Some(on_click) = on_click {
            on_click();
        }
        ui.close();
    }
}

/// Text-color override for a menu item. Danger items use the theme's error
/// foreground; everything else keeps the default text color.
#[inline]
pub(crate) fn item_color(danger: bool, visuals: &Visuals) -> Option<Color32> {
    danger.then_some(visuals.error_fg_color)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn danger_items_use_the_error_color() {
        let visuals = Visuals::dark();
        assert_eq!(item_color(true, &visuals), Some(visuals.error_fg_color));
    }

    #[test]
    fn plain_items_keep_the_default_text_color() {
        let visuals = Visuals::dark();
        assert_eq!(item_color(false, &visuals), None);
    }

    #[test]
    fn danger_and_plain_items_are_distinguishable() {
        let visuals = Visuals::light();
        assert_ne!(item_color(true, &visuals), item_color(false, &visuals));
    }
}
