//! Dock layout state: panels assigned to zones, collapse flags and a
//! single in-flight drag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TokenError;
use crate::icons::IconName;

/// Region of the dock a panel lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockZone {
    Left,
    Center,
    Right,
    Bottom,
}

impl DockZone {
    pub const ALL: [DockZone; 4] = [DockZone::Left, DockZone::Center, DockZone::Right, DockZone::Bottom];

    pub fn as_str(&self) -> &'static str {
        match self {
            DockZone::Left => "left",
            DockZone::Center => "center",
            DockZone::Right => "right",
            DockZone::Bottom => "bottom",
        }
    }

    /// Icon for the collapse toggle of a side zone.
    pub fn icon(&self) -> IconName {
        match self {
            DockZone::Left => IconName::PanelLeft,
            DockZone::Right => IconName::PanelRight,
            DockZone::Bottom => IconName::PanelBottom,
            DockZone::Center => IconName::Grip,
        }
    }
}

impl fmt::Display for DockZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DockZone {
    type Err = TokenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DockZone::ALL
            .into_iter()
            .find(|zone| zone.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| TokenError::InvalidValue {
                kind: "dock zone",
                value: s.to_string(),
            })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DockPanel {
    pub id: String,
    pub title: String,
    pub zone: DockZone,
    #[serde(default)]
    pub collapsed: bool,
}

impl DockPanel {
    pub fn new(id: impl Into<String>, title: impl Into<String>, zone: DockZone) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            zone,
            collapsed: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DockState {
    panels: Vec<DockPanel>,
    dragging: Option<String>,
}

impl DockState {
    pub fn new(panels: Vec<DockPanel>) -> Self {
        Self {
            panels,
            dragging: None,
        }
    }

    pub fn panels(&self) -> &[DockPanel] {
        &self.panels
    }

    pub fn panel(&self, id: &str) -> Option<&DockPanel> {
        self.panels.iter().find(|panel| panel.id == id)
    }

    /// Panels in `zone`, in docking order.
    pub fn panels_in(&self, zone: DockZone) -> Vec<&DockPanel> {
        self.panels.iter().filter(|panel| panel.zone == zone).collect()
    }

    /// Start dragging `id`. Returns `false` when no such panel exists.
    pub fn begin_drag(&mut self, id: &str) -> bool {
        if self.panel(id).is_none() {
            return false;
        }
        self.dragging = Some(id.to_string());
        true
    }

    pub fn dragging(&self) -> Option<&str> {
        self.dragging.as_deref()
    }

    pub fn cancel_drag(&mut self) {
        self.dragging = None;
    }

    /// Finish the current drag by docking the panel at the end of `zone`.
    /// Returns `false` when nothing was being dragged.
    pub fn drop_into(&mut self, zone: DockZone) -> bool {
        let Some(id) = self.dragging.take() else {
            return false;
        };
        let Some(index) = self.panels.iter().position(|panel| panel.id == id) else {
            return false;
        };
        let mut panel = self.panels.remove(index);
        tracing::debug!(panel = %panel.id, from = %panel.zone, to = %zone, "docked panel");
        panel.zone = zone;
        self.panels.push(panel);
        true
    }

    /// Flip the collapsed flag; returns the new value, or `None` for unknown ids.
    pub fn toggle_collapsed(&mut self, id: &str) -> Option<bool> {
        let panel = self.panels.iter_mut().find(|panel| panel.id == id)?;
        panel.collapsed = !panel.collapsed;
        Some(panel.collapsed)
    }

    /// Remove a panel, abandoning any drag of it.
    pub fn close(&mut self, id: &str) -> Option<DockPanel> {
        let index = self.panels.iter().position(|panel| panel.id == id)?;
        if self.dragging.as_deref() == Some(id) {
            self.dragging = None;
        }
        Some(self.panels.remove(index))
    }
}
