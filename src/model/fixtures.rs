// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::graph::CanvasGraph;
use super::node::Position;
use super::task::TaskKind;

/// A left-to-right chain of `len` nodes with an edge between each
/// consecutive pair, the shape the placement policy produces.
pub(crate) fn chain_graph(len: usize) -> CanvasGraph {
    let mut graph = CanvasGraph::new();

    let mut prev = None;
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
