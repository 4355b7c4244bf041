// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::model::{
    CanvasGraph, EdgeId, FlowEdge, NodeId, Position, TaskKind, TaskNode, Viewport,
};

use super::slots::{SessionSlots, StoreError};

pub const NODES_SLOT: &str = "flow-nodes";
pub const EDGES_SLOT: &str = "flow-edges";
pub const NODE_ID_SLOT: &str = "flow-nodeId";
pub const VIEWPORT_SLOT: &str = "flow-viewport";
pub const SIDEBAR_SLOT: &str = "sidebar-open";

/// Typed envelope codec over the five session slots.
///
/// Graph slots (`flow-nodes`, `flow-edges`, `flow-nodeId`) are written and
/// removed together; the viewport and sidebar slots have independent
/// lifecycles. An empty graph removes its slots instead of writing empty
/// arrays: "had a graph, now empty" and "never had one" persist the same
/// way, and the camera survives both.
pub struct SessionStore {
    slots: Box<dyn SessionSlots>,
}

#[derive(Debug, Serialize, Deserialize)]
struct NodeRecord {
    id: String,
    #[serde(rename = "type")]
    kind: String,
    position: PositionRecord,
    label: String,
    #[serde(default)]
    payload: Map<String, Value>,
}

#[derive(Debug, Serialize, Deserialize)]
struct PositionRecord {
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize, Deserialize)]
struct EdgeRecord {
    id: String,
    source: String,
    target: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct ViewportRecord {
    x: f64,
    y: f64,
    zoom: f64,
}

impl SessionStore {
    pub fn new(slots: Box<dyn SessionSlots>) -> Self {
        Self { slots }
    }

    pub fn in_memory() -> Self {
        Self::new(Box::new(super::slots::MemorySlots::new()))
    }

    /// Hydrates a graph from the envelope. `None` when no graph was
    /// persisted or the envelope does not decode; malformed state is
    /// recovered as "no prior graph", never surfaced.
    pub fn load_graph(&self) -> Option<CanvasGraph> {
        let nodes_raw = self.slots.get(NODES_SLOT).ok()??;
        let edges_raw = self.slots.get(EDGES_SLOT).ok()??;

        let node_records: Vec<NodeRecord> = serde_json::from_str(&nodes_raw).ok()?;
        let edge_records: Vec<EdgeRecord> = serde_json::from_str(&edges_raw).ok()?;

        let mut nodes = Vec::with_capacity(node_records.len());
        for record in node_records {
            nodes.push(decode_node(record)?);
        }
        let mut edges = Vec::with_capacity(edge_records.len());
        for record in edge_records {
            edges.push(decode_edge(record)?);
        }

        let next_node_seq = self
            .slots
            .get(NODE_ID_SLOT)
            .ok()
            .flatten()
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .unwrap_or(1);

        Some(CanvasGraph::from_parts(nodes, edges, next_node_seq))
    }

    /// One write per committed mutation: either all three graph slots or,
    /// when the graph emptied, their removal. The viewport slot is never
    /// touched from here.
    pub fn save_graph(&mut self, graph: &CanvasGraph) -> Result<(), StoreError> {
        if graph.is_empty() {
            self.slots.remove(NODES_SLOT)?;
            self.slots.remove(EDGES_SLOT)?;
            self.slots.remove(NODE_ID_SLOT)?;
            return Ok(());
        }

        let nodes: Vec<NodeRecord> = graph.nodes().iter().map(encode_node).collect();
        let edges: Vec<EdgeRecord> = graph.edges().iter().map(encode_edge).collect();

        let nodes_raw = serde_json::to_string(&nodes).map_err(|source| StoreError::Json {
            slot: NODES_SLOT.to_owned(),
            source,
        })?;
        let edges_raw = serde_json::to_string(&edges).map_err(|source| StoreError::Json {
            slot: EDGES_SLOT.to_owned(),
            source,
        })?;

        self.slots.put(NODES_SLOT, &nodes_raw)?;
        self.slots.put(EDGES_SLOT, &edges_raw)?;
        self.slots
            .put(NODE_ID_SLOT, &graph.next_node_seq().to_string())?;
        Ok(())
    }

    /// Falls back to the default viewport when the slot is absent, corrupt,
    /// or unreadable.
    pub fn load_viewport(&self) -> Viewport {
        self.slots
            .get(VIEWPORT_SLOT)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str::<ViewportRecord>(&raw).ok())
            .map(|record| Viewport::new(record.x, record.y, record.zoom))
            .unwrap_or_default()
    }

    pub fn save_viewport(&mut self, viewport: Viewport) -> Result<(), StoreError> {
        let record = ViewportRecord {
            x: viewport.x,
            y: viewport.y,
            zoom: viewport.zoom,
        };
        let raw = serde_json::to_string(&record).map_err(|source| StoreError::Json {
            slot: VIEWPORT_SLOT.to_owned(),
            source,
        })?;
        self.slots.put(VIEWPORT_SLOT, &raw)
    }

    pub fn load_sidebar_open(&self) -> Option<bool> {
        self.slots
            .get(SIDEBAR_SLOT)
            .ok()
            .flatten()
            .and_then(|raw| serde_json::from_str(&raw).ok())
    }

    pub fn save_sidebar_open(&mut self, open: bool) -> Result<(), StoreError> {
        self.slots.put(SIDEBAR_SLOT, if open { "true" } else { "false" })
    }
}

fn encode_node(node: &TaskNode) -> NodeRecord {
    NodeRecord {
        id: node.id().to_string(),
        kind: node.kind().wire_name().to_owned(),
        position: PositionRecord {
            x: node.position().x,
            y: node.position().y,
        },
        label: node.label().to_owned(),
        payload: node.payload().clone(),
    }
}

fn decode_node(record: NodeRecord) -> Option<TaskNode> {
    let id = NodeId::new(&record.id).ok()?;
    let kind: TaskKind = record.kind.parse().ok()?;
    Some(TaskNode::new_with(
        id,
        kind,
        Position::new(record.position.x, record.position.y),
        record.label,
        record.payload,
    ))
}

fn encode_edge(edge: &FlowEdge) -> EdgeRecord {
    EdgeRecord {
        id: edge.id().to_string(),
        source: edge.source().to_string(),
        target: edge.target().to_string(),
    }
}

fn decode_edge(record: EdgeRecord) -> Option<FlowEdge> {
    let id = EdgeId::new(&record.id).ok()?;
    let source = NodeId::new(&record.source).ok()?;
    let target = NodeId::new(&record.target).ok()?;
    Some(FlowEdge::with_id(id, source, target))
}

#[cfg(test)]
mod tests;
