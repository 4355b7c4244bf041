// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! The canvas state machine.
//!
//! `CanvasState` owns the graph, the undo/redo history, the transient
//! selection, the inspector binding, and the camera, and runs every
//! mutation through the same commit path: one history frame plus one
//! session-persistence write per committed mutation. All operations are
//! synchronous and local.

pub mod camera;
pub mod inspector;
pub mod placement;

use std::collections::BTreeSet;

use crate::history::History;
use crate::model::{
    CanvasGraph, NodeId, Position, TaskKind, ViewSize, Viewport,
};
use crate::store::{SessionStore, StoreError};

pub use camera::CameraMotion;
pub use inspector::InspectorBinding;
pub use placement::{next_placement, Placement, NODE_OFFSET_X};

/// The toolbar intents. All are synchronous, local, and safe to issue at
/// any time: out-of-bounds undo/redo and delete-with-no-selection are
/// no-ops, matching the disabled states the UI renders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    ZoomIn,
    ZoomOut,
    ZoomTo(f64),
    ZoomToFit,
    Undo,
    Redo,
    DeleteSelection,
    AddNode(TaskKind),
}

pub struct CanvasState {
    graph: CanvasGraph,
    history: History,
    selection: BTreeSet<NodeId>,
    inspector: InspectorBinding,
    camera: CameraMotion,
    viewport: Viewport,
    sidebar_open: bool,
    has_loaded: bool,
    store: SessionStore,
}

impl CanvasState {
    /// A cold state: nothing hydrated yet, mutations not persisted until
    /// [`hydrate`](Self::hydrate) has run.
    pub fn new(store: SessionStore) -> Self {
        Self {
            graph: CanvasGraph::new(),
            history: History::new(),
            selection: BTreeSet::new(),
            inspector: InspectorBinding::new(),
            camera: CameraMotion::default(),
            viewport: Viewport::default(),
            sidebar_open: true,
            has_loaded: false,
            store,
        }
    }

    /// Loads the persisted envelope and arms persistence. Replaces any
    /// in-memory graph state; run before the first interactive event.
    /// mutations made earlier are discarded, not persisted.
    pub fn hydrate(&mut self) {
        self.graph = self.store.load_graph().unwrap_or_default();
        self.history = History::new();
        self.selection.clear();
        self.inspector = InspectorBinding::new();
        if !self.graph.is_empty() {
            // The reloaded graph is the undo baseline, same as a fresh
            // first mutation would be.
            self.history.record(self.graph.snapshot());
        }
        self.viewport = self.store.load_viewport();
        self.sidebar_open = self.store.load_sidebar_open().unwrap_or(true);
        self.has_loaded = true;
    }

    pub fn graph(&self) -> &CanvasGraph {
        &self.graph
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn selection(&self) -> &BTreeSet<NodeId> {
        &self.selection
    }

    pub fn inspector(&self) -> &InspectorBinding {
        &self.inspector
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn has_loaded(&self) -> bool {
        self.has_loaded
    }

    pub fn sidebar_open(&self) -> bool {
        self.sidebar_open
    }

    pub fn is_centering(&self) -> bool {
        self.camera.is_centering()
    }

    pub fn centering_target(&self) -> Option<Viewport> {
        self.camera.target()
    }

    pub fn execute(&mut self, command: Command, view: ViewSize) -> Result<(), StoreError> {
        match command {
            Command::ZoomIn => {
                self.settle_centering();
                self.viewport.zoom_in(view);
                self.persist_viewport()
            }
            Command::ZoomOut => {
                self.settle_centering();
                self.viewport.zoom_out(view);
                self.persist_viewport()
            }
            Command::ZoomTo(level) => {
                self.settle_centering();
                self.viewport.zoom_to(level, view);
                self.persist_viewport()
            }
            Command::ZoomToFit => {
                self.settle_centering();
                match Viewport::fitted(self.graph.nodes(), view) {
                    Some(viewport) => {
                        self.viewport = viewport;
                        self.persist_viewport()
                    }
                    None => Ok(()),
                }
            }
            Command::Undo => self.undo(),
            Command::Redo => self.redo(),
            Command::DeleteSelection => self.delete_selection(),
            Command::AddNode(kind) => self.add_node(kind, view),
        }
    }

    /// Places a node per the chain policy, auto-linking from the previous
    /// tail. The first node of a session starts the camera-centering
    /// transition on the origin.
    pub fn add_node(&mut self, kind: TaskKind, view: ViewSize) -> Result<(), StoreError> {
        let placement = next_placement(&self.graph);
        let node_id = self.graph.add_node(kind, placement.position).id().clone();

        match placement.link_from {
            Some(source) => {
                self.graph.add_edge(&source, &node_id);
            }
            None => {
                self.camera
                    .begin_centering(Viewport::centered_on(Position::ORIGIN, 1.0, view));
            }
        }

        self.commit()
    }

    /// User-drawn connection between two explicit endpoints. Uses the same
    /// edge path as auto-linking; exact duplicates are skipped.
    pub fn connect(&mut self, source: &NodeId, target: &NodeId) -> Result<(), StoreError> {
        if self.graph.has_edge(&self.graph.edge_id_for(source, target)) {
            return Ok(());
        }
        if self.graph.add_edge(source, target).is_none() {
            return Ok(());
        }
        self.commit()
    }

    /// Deletes every selected node and its incident edges as one mutation,
    /// clearing selection and inspector state atomically. No-op without a
    /// selection.
    pub fn delete_selection(&mut self) -> Result<(), StoreError> {
        if self.selection.is_empty() {
            return Ok(());
        }

        let selected: Vec<NodeId> = self.selection.iter().cloned().collect();
        self.selection.clear();
        let mut removed = false;
        for id in &selected {
            self.inspector.on_node_deleted(id);
            removed |= self.graph.delete_node(id);
        }

        if !removed {
            return Ok(());
        }
        self.commit()
    }

    pub fn undo(&mut self) -> Result<(), StoreError> {
        let Some(frame) = self.history.undo().cloned() else {
            return Ok(());
        };
        self.graph.restore(&frame);
        self.reconcile_after_restore();
        self.persist_graph()
    }

    pub fn redo(&mut self) -> Result<(), StoreError> {
        let Some(frame) = self.history.redo().cloned() else {
            return Ok(());
        };
        self.graph.restore(&frame);
        self.reconcile_after_restore();
        self.persist_graph()
    }

    /// Inspector write-back: rename the open node's label.
    pub fn rename_node(&mut self, id: &NodeId, label: &str) -> Result<(), StoreError> {
        if !self.graph.rename_node(id, label) {
            return Ok(());
        }
        self.commit()
    }

    /// Inspector write-back: replace the node's opaque payload.
    pub fn set_node_payload(
        &mut self,
        id: &NodeId,
        payload: serde_json::Map<String, serde_json::Value>,
    ) -> Result<(), StoreError> {
        if !self.graph.set_node_payload(id, payload) {
            return Ok(());
        }
        self.commit()
    }

    /// Selection settled (from the rendering surface). Exactly one node
    /// auto-opens the inspector, subject to dismissal memory; anything else
    /// closes it.
    pub fn on_selection_change(&mut self, selected: &[NodeId]) {
        self.selection = selected
            .iter()
            .filter(|id| self.graph.contains_node(id))
            .cloned()
            .collect();

        if self.selection.len() == 1 {
            let id = self.selection.iter().next().cloned().expect("one selected");
            self.inspector.on_single_selection(&id);
        } else {
            self.inspector.on_selection_cleared();
        }
    }

    /// Double-click: select the node and force the inspector open,
    /// overriding any dismissal.
    pub fn on_node_double_click(&mut self, id: &NodeId) {
        if !self.graph.contains_node(id) {
            return;
        }
        self.selection.clear();
        self.selection.insert(id.clone());
        self.inspector.open_override(id);
    }

    /// User-initiated close of the inspector panel: arms the dismissal.
    pub fn close_inspector(&mut self) {
        self.inspector.close();
    }

    /// Camera pan, screen-space. A gesture during the centering transition
    /// settles it first so the two motions cannot fight.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.settle_centering();
        self.viewport.pan_by(dx, dy);
    }

    /// Pan/zoom gesture ended: persist the camera, unless the centering
    /// transition owns it right now.
    pub fn on_pan_zoom_end(&mut self) -> Result<(), StoreError> {
        self.persist_viewport()
    }

    /// One animation step of the centering transition. Ignored when idle;
    /// never persisted.
    pub fn apply_centering_frame(&mut self, viewport: Viewport) {
        if self.camera.is_centering() {
            self.viewport = viewport;
        }
    }

    /// Ends the centering transition on its target. The settled camera is
    /// not persisted (it was not a user gesture).
    pub fn centering_complete(&mut self) {
        if let Some(target) = self.camera.complete() {
            self.viewport = target;
        }
    }

    pub fn set_sidebar_open(&mut self, open: bool) -> Result<(), StoreError> {
        self.sidebar_open = open;
        if !self.has_loaded {
            return Ok(());
        }
        self.store.save_sidebar_open(open)
    }

    /// One committed mutation: exactly one frame, exactly one envelope
    /// write.
    fn commit(&mut self) -> Result<(), StoreError> {
        self.history.record(self.graph.snapshot());
        self.persist_graph()
    }

    fn persist_graph(&mut self) -> Result<(), StoreError> {
        if !self.has_loaded {
            return Ok(());
        }
        self.store.save_graph(&self.graph)
    }

    fn persist_viewport(&mut self) -> Result<(), StoreError> {
        if !self.has_loaded || self.camera.is_centering() {
            return Ok(());
        }
        self.store.save_viewport(self.viewport)
    }

    fn settle_centering(&mut self) {
        if let Some(target) = self.camera.complete() {
            self.viewport = target;
        }
    }

    /// Undo/redo restored a frame: selection and inspector must not point
    /// at nodes that no longer exist.
    fn reconcile_after_restore(&mut self) {
        let graph = &self.graph;
        self.selection.retain(|id| graph.contains_node(id));

        if let Some(open) = self.inspector.open_node().cloned() {
            if !self.graph.contains_node(&open) {
                self.inspector.on_node_deleted(&open);
            }
        }

        if self.selection.len() != 1 {
            self.inspector.on_selection_cleared();
        }
    }
}
