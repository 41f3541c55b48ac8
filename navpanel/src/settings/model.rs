use navpanel_core::{ControllerConfig, NavEntry};
use serde::{Deserialize, Serialize};

/// Content card rendered in the scrollable page area.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct CardData {
    pub(crate) title: String,
    pub(crate) body: String,
    /// Anchor name navigation entries scroll to.
    #[serde(default)]
    pub(crate) anchor: Option<String>,
}

impl CardData {
    fn new(title: &str, body: &str, anchor: &str) -> Self {
        Self {
            title: title.to_string(),
            body: body.to_string(),
            anchor: Some(anchor.to_string()),
        }
    }
}

/// Application settings read at startup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct SettingsData {
    pub(crate) controller: ControllerConfig,
    pub(crate) entries: Vec<NavEntry>,
    pub(crate) cards: Vec<CardData>,
}

impl SettingsData {
    /// Parse settings from a JSON value, keeping defaults for missing keys.
    pub(crate) fn from_json(
        value: serde_json::Value,
    ) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }
}

/// Index of the card carrying `anchor`.
pub(crate) fn card_for_anchor(
    cards: &[CardData],
    anchor: &str,
) -> Option<usize> {
    cards
        .iter()
        .position(|card| card.anchor.as_deref() == Some(anchor))
}

impl Default for SettingsData {
    fn default() -> Self {
        let sections = [
            ("Dashboard", "dashboard", "Overview of recent activity."),
            ("Analytics", "analytics", "Traffic and conversion trends."),
            ("Projects", "projects", "Active and archived projects."),
            ("Team", "team", "People, roles and invitations."),
            ("Messages", "messages", "Conversations awaiting a reply."),
            ("Settings", "settings", "Account and workspace preferences."),
        ];

        Self {
            controller: ControllerConfig::default(),
            entries: sections
                .iter()
                .map(|(label, anchor, _)| {
                    NavEntry::new(*label).with_anchor(*anchor)
                })
                .collect(),
            cards: sections
                .iter()
                .map(|(label, anchor, body)| CardData::new(label, body, anchor))
                .collect(),
        }
    }
}
