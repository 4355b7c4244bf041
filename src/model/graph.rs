// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use smallvec::SmallVec;

use super::edge::{derive_edge_id, FlowEdge};
use super::ids::{EdgeId, NodeId};
use super::node::{Position, TaskNode};
use super::task::TaskKind;

/// The canonical node/edge collections plus the monotonic node-id counter.
///
/// Nodes keep insertion order: the placement policy reads "most recently
/// added", and the persisted envelope preserves the same order. The counter
/// only ever moves forward, so ids are not reused across delete/undo cycles
/// within a session.
///
/// Invariant: every edge's endpoints reference nodes currently present.
/// All mutation paths below maintain it; hydration re-establishes it by
/// dropping dangling edges.
#[derive(Debug, Clone, PartialEq)]
pub struct CanvasGraph {
    nodes: Vec<TaskNode>,
    edges: Vec<FlowEdge>,
    next_node_seq: u64,
}

impl Default for CanvasGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl CanvasGraph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            next_node_seq: 1,
        }
    }

    /// Rebuilds a graph from persisted parts. Edges whose endpoints are
    /// missing are dropped silently; the counter is bumped past every
    /// numeric id suffix so a stale persisted counter cannot cause reuse.
    pub fn from_parts(nodes: Vec<TaskNode>, edges: Vec<FlowEdge>, next_node_seq: u64) -> Self {
        let mut graph = Self {
            nodes,
            edges: Vec::new(),
            next_node_seq: 1,
        };

        let edges = edges
            .into_iter()
            .filter(|edge| {
                graph.contains_node(edge.source()) && graph.contains_node(edge.target())
            })
            .collect();
        graph.edges = edges;

        let max_seq = graph
            .nodes
            .iter()
            .filter_map(|node| id_seq_suffix(node.id()))
            .max()
            .unwrap_or(0);
        graph.next_node_seq = next_node_seq.max(max_seq + 1);

        graph
    }

    pub fn nodes(&self) -> &[TaskNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn next_node_seq(&self) -> u64 {
        self.next_node_seq
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    pub fn node(&self, id: &NodeId) -> Option<&TaskNode> {
        self.nodes.iter().find(|node| node.id() == id)
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node(id).is_some()
    }

    /// The most recently added node, if any.
    pub fn last_node(&self) -> Option<&TaskNode> {
        self.nodes.last()
    }

    pub fn has_edge(&self, id: &EdgeId) -> bool {
        self.edges.iter().any(|edge| edge.id() == id)
    }

    /// Edges incident to the given node, in insertion order.
    pub fn incident_edges(&self, id: &NodeId) -> SmallVec<[&FlowEdge; 4]> {
        self.edges
            .iter()
            .filter(|edge| edge.is_incident_to(id))
            .collect()
    }

    /// Adds a node with a fresh id minted from the counter. Label and the
    /// rest of the display metadata come from the kind's static table.
    pub fn add_node(&mut self, kind: TaskKind, position: Position) -> &TaskNode {
        let seq = self.next_node_seq;
        self.next_node_seq += 1;

        let id = NodeId::new(format!("{}-{seq}", kind.wire_name()))
            .expect("minted node id is non-empty");
        self.nodes.push(TaskNode::new(id, kind, position));
        self.nodes.last().expect("node was just pushed")
    }

    /// Adds an edge between two existing nodes; a silent no-op (`None`) when
    /// either endpoint is missing. A duplicate of an existing pair is
    /// accepted; the derived id makes it detectable upstream via
    /// [`has_edge`](Self::has_edge).
    pub fn add_edge(&mut self, source: &NodeId, target: &NodeId) -> Option<&FlowEdge> {
        if !self.contains_node(source) || !self.contains_node(target) {
            return None;
        }

        self.edges.push(FlowEdge::new(source.clone(), target.clone()));
        self.edges.last()
    }

    /// The id an edge between the given endpoints would get.
    pub fn edge_id_for(&self, source: &NodeId, target: &NodeId) -> EdgeId {
        derive_edge_id(source, target)
    }

    /// Removes the node and every incident edge in one mutation. Returns
    /// `false` (and changes nothing) when the node is unknown.
    pub fn delete_node(&mut self, id: &NodeId) -> bool {
        let Some(index) = self.nodes.iter().position(|node| node.id() == id) else {
            return false;
        };

        self.nodes.remove(index);
        self.edges.retain(|edge| !edge.is_incident_to(id));
        true
    }

    pub fn delete_edge(&mut self, id: &EdgeId) -> bool {
        let before = self.edges.len();
        self.edges.retain(|edge| edge.id() != id);
        self.edges.len() != before
    }

    /// Empties both collections. The counter is preserved: ids minted after
    /// a clear must not collide with ids still reachable through history.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
    }

    /// Inspector write-back: rename a node's label.
    pub fn rename_node(&mut self, id: &NodeId, label: impl Into<String>) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.set_label(label);
                true
            }
            None => false,
        }
    }

    /// Inspector write-back: replace a node's opaque payload wholesale.
    pub fn set_node_payload(
        &mut self,
        id: &NodeId,
        payload: serde_json::Map<String, serde_json::Value>,
    ) -> bool {
        match self.node_mut(id) {
            Some(node) => {
                node.set_payload(payload);
                true
            }
            None => false,
        }
    }

    pub fn snapshot(&self) -> GraphFrame {
        GraphFrame {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    /// Restores collections from a history frame. The counter is left
    /// untouched so ids stay monotonic across undo/redo.
    pub fn restore(&mut self, frame: &GraphFrame) {
        self.nodes = frame.nodes.clone();
        self.edges = frame.edges.clone();
    }

    fn node_mut(&mut self, id: &NodeId) -> Option<&mut TaskNode> {
        self.nodes.iter_mut().find(|node| node.id() == id)
    }
}

/// An immutable snapshot of the full node/edge collections, the unit of
/// undo/redo.
#[derive(Debug, Clone, PartialEq)]
pub struct GraphFrame {
    nodes: Vec<TaskNode>,
    edges: Vec<FlowEdge>,
}

impl GraphFrame {
    pub fn nodes(&self) -> &[TaskNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[FlowEdge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }
}

fn id_seq_suffix(id: &NodeId) -> Option<u64> {
    id.as_str().rsplit_once('-')?.1.parse().ok()
}
