#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// Transient toast notifications.
#[derive(Clone, Debug, Default)]
pub struct NotifyState {
    pub toasts: Vec<Toast>,
}

/// A single toast message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: String,
    pub kind: ToastKind,
    pub message: String,
}

/// Visual flavor of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Info,
    Success,
    Error,
}

impl NotifyState {
    /// Append a toast and return its id for later dismissal.
    pub fn push(&mut self, kind: ToastKind, message: impl Into<String>) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.toasts.push(Toast {
            id: id.clone(),
            kind,
            message: message.into(),
        });
        id
    }

    /// Remove a toast by id. Removing an unknown id is a no-op.
    pub fn dismiss(&mut self, id: &str) {
        self.toasts.retain(|toast| toast.id != id);
    }
}
