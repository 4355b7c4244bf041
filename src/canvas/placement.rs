// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::{CanvasGraph, NodeId, Position};

/// Horizontal gap between a node and its successor in the chain layout.
pub const NODE_OFFSET_X: f64 = 300.0;

/// Where a new node lands and which node it auto-links from.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    pub position: Position,
    /// Auto-link source: the previously most-recent node, absent for the
    /// first node of a session.
    pub link_from: Option<NodeId>,
}

/// Chain layout policy: the first node sits at the canonical origin, every
/// later node at a fixed offset right of the most recently added one, at
/// the same vertical coordinate. Not a general auto-layout, deliberately a
/// left-to-right chain.
pub fn next_placement(graph: &CanvasGraph) -> Placement {
    match graph.last_node() {
        Some(last) => Placement {
            position: Position::new(last.position().x + NODE_OFFSET_X, last.position().y),
            link_from: Some(last.id().clone()),
        },
        None => Placement {
            position: Position::ORIGIN,
            link_from: None,
        },
    }
}
