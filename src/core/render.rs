use crate::core::controller::{FormState, StatusKind};
use std::fmt::Write;

/// Plain-text view of the form: inline errors, status line, submit control.
pub fn render(state: &FormState) -> String {
    let mut out = String::new();

    for (field, message) in state.errors.iter() {
        let _ = writeln!(out, "  ✗ {:<9} {}", field.id(), message);
    }

    if let Some(status) = &state.status {
        let marker = match status.kind {
            StatusKind::Success => "✅",
            StatusKind::Error => "❌",
        };
        let _ = writeln!(out, "{} {}", marker, status.text);
    }

    let _ = write!(
        out,
        "[ {} ]{}",
        state.submit.label,
        if state.submit.disabled { " (disabled)" } else { "" }
    );
    out
}
