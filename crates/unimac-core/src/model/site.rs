// ── Site ──

use serde::{Deserialize, Serialize};

/// A logical partition of the controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Site {
    /// Internal reference used in API paths (e.g. `default`).
    pub name: String,
    /// Human-readable description; may be empty.
    pub description: String,
}

impl Site {
    /// Name stamped on every client and device fetched from this site.
    pub fn display_name(&self) -> String {
        if self.description.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.description, self.name)
        }
    }
}
