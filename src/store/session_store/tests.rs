// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rstest::{fixture, rstest};

use super::{SessionStore, EDGES_SLOT, NODES_SLOT, NODE_ID_SLOT, VIEWPORT_SLOT};
use crate::model::fixtures::chain_graph;
use crate::model::{CanvasGraph, Position, TaskKind, Viewport};
use crate::store::{FolderSlots, MemorySlots, SessionSlots};

static TEMP_DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

struct TempDir {
    path: std::path::PathBuf,
}

impl TempDir {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_nanos();
        let counter = TEMP_DIR_COUNTER.fetch_add(1, Ordering::Relaxed);
        let mut path = env::temp_dir();
        path.push(format!("triton-{prefix}-{}-{nanos}-{counter}", std::process::id()));
        std::fs::create_dir_all(&path).unwrap();
        Self { path }
    }

    fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

struct FolderCtx {
    tmp: TempDir,
    store: SessionStore,
}

impl FolderCtx {
    fn reopen(&self) -> SessionStore {
        SessionStore::new(Box::new(FolderSlots::new(self.tmp.path().join("session"))))
    }

    fn slot_file(&self, key: &str) -> std::path::PathBuf {
        self.tmp.path().join("session").join(format!("{key}.json"))
    }
}

#[fixture]
fn ctx() -> FolderCtx {
    let tmp = TempDir::new("session-store");
    let store = SessionStore::new(Box::new(FolderSlots::new(tmp.path().join("session"))));
    FolderCtx { tmp, store }
}

#[rstest]
fn graph_round_trips_through_the_folder(mut ctx: FolderCtx) {
    let graph = chain_graph(3);
    ctx.store.save_graph(&graph).expect("save graph");

    let loaded = ctx.reopen().load_graph().expect("graph persisted");
    assert_eq!(loaded.nodes(), graph.nodes());
    assert_eq!(loaded.edges(), graph.edges());
    assert_eq!(loaded.next_node_seq(), graph.next_node_seq());
}

#[rstest]
fn empty_graph_removes_the_graph_slots_but_not_the_viewport(mut ctx: FolderCtx) {
    let graph = chain_graph(2);
    ctx.store.save_graph(&graph).expect("save graph");
    ctx.store
        .save_viewport(Viewport::new(12.0, -3.0, 1.5))
        .expect("save viewport");

    ctx.store.save_graph(&CanvasGraph::new()).expect("save empty");

    assert!(!ctx.slot_file(NODES_SLOT).exists());
    assert!(!ctx.slot_file(EDGES_SLOT).exists());
    assert!(!ctx.slot_file(NODE_ID_SLOT).exists());
    assert!(ctx.slot_file(VIEWPORT_SLOT).exists());

    let reopened = ctx.reopen();
    assert!(reopened.load_graph().is_none());
    assert_eq!(reopened.load_viewport(), Viewport::new(12.0, -3.0, 1.5));
}

#[rstest]
fn corrupt_nodes_slot_loads_as_no_graph(mut ctx: FolderCtx) {
    ctx.store.save_graph(&chain_graph(2)).expect("save graph");

    std::fs::write(ctx.slot_file(NODES_SLOT), "{not json").expect("corrupt slot");

    assert!(ctx.reopen().load_graph().is_none());
}

#[rstest]
fn corrupt_viewport_slot_falls_back_to_the_default(mut ctx: FolderCtx) {
    std::fs::create_dir_all(ctx.tmp.path().join("session")).expect("session dir");
    std::fs::write(ctx.slot_file(VIEWPORT_SLOT), "]]").expect("corrupt slot");

    assert_eq!(ctx.reopen().load_viewport(), Viewport::default());
}

#[rstest]
fn missing_counter_slot_is_recovered_from_node_ids(mut ctx: FolderCtx) {
    ctx.store.save_graph(&chain_graph(3)).expect("save graph");
    std::fs::remove_file(ctx.slot_file(NODE_ID_SLOT)).expect("drop counter slot");

    let loaded = ctx.reopen().load_graph().expect("graph persisted");
    assert_eq!(loaded.next_node_seq(), 4);
}

#[rstest]
fn sidebar_slot_round_trips(mut ctx: FolderCtx) {
    assert_eq!(ctx.store.load_sidebar_open(), None);

    ctx.store.save_sidebar_open(false).expect("save sidebar");
    assert_eq!(ctx.reopen().load_sidebar_open(), Some(false));

    ctx.store.save_sidebar_open(true).expect("save sidebar");
    assert_eq!(ctx.reopen().load_sidebar_open(), Some(true));
}

#[test]
fn memory_store_round_trips_without_touching_disk() {
    let mut store = SessionStore::in_memory();
    let mut graph = CanvasGraph::new();
    graph.add_node(TaskKind::Portfolio, Position::ORIGIN);

    store.save_graph(&graph).expect("save graph");
    let loaded = store.load_graph().expect("graph persisted");
    assert_eq!(loaded.nodes(), graph.nodes());
}

#[test]
fn node_payload_survives_the_round_trip() {
    let mut store = SessionStore::in_memory();
    let mut graph = CanvasGraph::new();
    let id = graph.add_node(TaskKind::UpdatePortfolio, Position::ORIGIN).id().clone();

    let mut payload = serde_json::Map::new();
    payload.insert("headline".to_owned(), serde_json::json!("Hello"));
    payload.insert("items".to_owned(), serde_json::json!([1, 2, 3]));
    assert!(graph.set_node_payload(&id, payload.clone()));

    store.save_graph(&graph).expect("save graph");
    let loaded = store.load_graph().expect("graph persisted");
    assert_eq!(loaded.node(&id).expect("node").payload(), &payload);
}

#[test]
fn dangling_persisted_edges_are_dropped_on_load() {
    let mut slots = MemorySlots::new();
    slots
        .put(
            NODES_SLOT,
            r#"[{"id":"portfolio-1","type":"portfolio","position":{"x":0.0,"y":0.0},"label":"Portfolio"}]"#,
        )
        .expect("put nodes");
    slots
        .put(
            EDGES_SLOT,
            r#"[{"id":"eportfolio-1-resumes-2","source":"portfolio-1","target":"resumes-2"}]"#,
        )
        .expect("put edges");

    let store = SessionStore::new(Box::new(slots));
    let graph = store.load_graph().expect("graph persisted");
    assert_eq!(graph.nodes().len(), 1);
    assert!(graph.edges().is_empty());
}
