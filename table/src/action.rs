//! Per-row action descriptors.

/// One selectable command attached to a row.
///
/// Descriptors are built fresh for every row on every render pass by the
/// caller's action factory; they are never cached. The handler is `FnOnce`
/// for exactly that reason: a descriptor lives for one frame and its handler
/// fires at most once.
pub struct ActionDescriptor<'a> {
    pub(crate) key: String,
    pub(crate) label: String,
    pub(crate) on_click: Option<Box<dyn FnOnce() + 'a>>,
    pub(crate) danger: bool,
    pub(crate) disabled: bool,
}

impl<'a> ActionDescriptor<'a> {
    /// A new enabled, non-danger action with no handler.
    ///
    /// `key` must be unique within one row's action set.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            on_click: None,
            danger: false,
            disabled: false,
        }
    }

    /// Handler invoked when the menu item is clicked and the item is enabled.
    pub fn on_click(mut self, on_click: impl FnOnce() + 'a) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    /// Render with error/warning emphasis. Cosmetic only.
    pub fn danger(mut self, danger: bool) -> Self {
        self.danger = danger;
        self
    }

    /// Dim the item and suppress its handler.
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Derives a row's available actions from that row's data.
///
/// Invoked once per visible row per render pass; must be side-effect-free
/// with respect to rendering (side effects belong inside `on_click`).
pub type ActionFactory<'a, T> = dyn Fn(&T) -> Vec<ActionDescriptor<'a>> + 'a;
