// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::{EdgeId, NodeId};

/// A directed link between two nodes, used for visual chaining only.
///
/// The id is derived from the endpoints (`e<source>-<target>`), so the same
/// pair always produces the same id and accidental duplicates are cheap to
/// detect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowEdge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
}

impl FlowEdge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        let id = derive_edge_id(&source, &target);
        Self { id, source, target }
    }

    /// Rebuilds an edge with a previously persisted id.
    pub fn with_id(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self { id, source, target }
    }

    pub fn id(&self) -> &EdgeId {
        &self.id
    }

    pub fn source(&self) -> &NodeId {
        &self.source
    }

    pub fn target(&self) -> &NodeId {
        &self.target
    }

    pub fn is_incident_to(&self, node_id: &NodeId) -> bool {
        &self.source == node_id || &self.target == node_id
    }
}

pub fn derive_edge_id(source: &NodeId, target: &NodeId) -> EdgeId {
    EdgeId::new(format!("e{source}-{target}")).expect("derived edge id is non-empty")
}
