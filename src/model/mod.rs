// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core canvas data model.
//!
//! A canvas holds typed task nodes and the directed edges chaining them,
//! plus the camera viewport with its independent lifecycle.

pub mod edge;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod graph;
pub mod ids;
pub mod node;
pub mod task;
pub mod viewport;

pub use edge::{derive_edge_id, FlowEdge};
pub use graph::{CanvasGraph, GraphFrame};
pub use ids::{EdgeId, Id, IdError, NodeId};
pub use node::{Position, TaskNode, NODE_HEIGHT, NODE_WIDTH};
pub use task::{ParseTaskKindError, TaskKind, TaskKindMeta};
pub use viewport::{
    ViewSize, Viewport, FIT_PADDING, MAX_ZOOM, MIN_ZOOM, ZOOM_PRESETS, ZOOM_STEP,
};
