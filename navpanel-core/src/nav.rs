use serde::{Deserialize, Serialize};

/// Navigation entry shown in the panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavEntry {
    label: String,
    #[serde(default)]
    anchor: Option<String>,
}

impl NavEntry {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            anchor: None,
        }
    }

    /// Attach the in-page section this entry scrolls to.
    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = Some(anchor.into());
        self
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn anchor(&self) -> Option<&str> {
        self.anchor.as_deref()
    }
}
