// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use triton::model::{CanvasGraph, Position, TaskKind};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

pub struct TempDir {
    path: PathBuf,
}

impl TempDir {
    pub fn new(prefix: &str) -> Self {
        let pid = std::process::id();
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);

        let mut path = std::env::temp_dir();
        path.push(format!("triton_bench_{prefix}_{pid}_{nanos}_{counter}"));
        std::fs::create_dir_all(&path).expect("create bench temp dir");
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.path);
    }
}

/// A placement-policy-shaped chain: node `i` at `(i * 300, 0)`, linked from
/// its predecessor.
pub fn chain_graph(len: usize) -> CanvasGraph {
    let mut graph = CanvasGraph::new();

    let mut prev: Option<triton::model::NodeId> = None;
    for index in 0..len {
        let kind = TaskKind::ALL[index % TaskKind::ALL.len()];
        let position = Position::new(index as f64 * 300.0, 0.0);
        let id = graph.add_node(kind, position).id().clone();
        if let Some(prev) = prev {
            graph.add_edge(&prev, &id);
        }
        prev = Some(id);
    }

    graph
}

pub fn small_graph() -> CanvasGraph {
    chain_graph(8)
}

pub fn medium_graph() -> CanvasGraph {
    chain_graph(128)
}
