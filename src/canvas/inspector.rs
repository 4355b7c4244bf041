// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use crate::model::NodeId;

/// Binding between canvas selection and the node detail panel.
///
/// Selecting a single node auto-opens its panel, unless the user closed
/// the panel for that node before, which is remembered until an explicit
/// open (double-click on the canvas) overrides it. Ids are never reused
/// within a session, so the dismissal memory cannot leak onto a new node.
#[derive(Debug, Clone, Default)]
pub struct InspectorBinding {
    open_node: Option<NodeId>,
    dismissed: BTreeSet<NodeId>,
}

impl InspectorBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.open_node.is_some()
    }

    /// The node the panel is currently open for.
    pub fn open_node(&self) -> Option<&NodeId> {
        self.open_node.as_ref()
    }

    pub fn is_dismissed(&self, id: &NodeId) -> bool {
        self.dismissed.contains(id)
    }

    /// Selection settled on exactly one node. Opens the panel unless that
    /// node was dismissed earlier; returns whether the panel is now open.
    pub fn on_single_selection(&mut self, id: &NodeId) -> bool {
        if self.dismissed.contains(id) {
            return self.open_node.as_ref() == Some(id);
        }
        self.open_node = Some(id.clone());
        true
    }

    /// Selection cleared or widened beyond one node: close and forget the
    /// inspected id (dismissal memory stays).
    pub fn on_selection_cleared(&mut self) {
        self.open_node = None;
    }

    /// Explicit open (double-click), overriding any dismissal.
    pub fn open_override(&mut self, id: &NodeId) {
        self.open_node = Some(id.clone());
    }

    /// User-initiated close: remember the dismissal so re-selecting the
    /// same node does not reopen the panel.
    pub fn close(&mut self) {
        if let Some(id) = self.open_node.take() {
            self.dismissed.insert(id);
        }
    }

    /// The node is gone; close without recording a dismissal and drop any
    /// memory tied to the id.
    pub fn on_node_deleted(&mut self, id: &NodeId) {
        if self.open_node.as_ref() == Some(id) {
            self.open_node = None;
        }
        self.dismissed.remove(id);
    }
}
