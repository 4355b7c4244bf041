// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde_json::{Map, Value};

use super::ids::NodeId;
use super::task::TaskKind;

/// Node box extent in world units. Placement offsets and fit-view framing are
/// expressed against this box.
pub const NODE_WIDTH: f64 = 225.0;
pub const NODE_HEIGHT: f64 = 56.0;

/// A point in world (canvas) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    pub const ORIGIN: Position = Position { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A typed, positioned unit of portfolio content placed on the canvas.
///
/// The payload is opaque to the canvas; the inspector panel owns its
/// structure and writes it back wholesale.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskNode {
    id: NodeId,
    kind: TaskKind,
    position: Position,
    label: String,
    payload: Map<String, Value>,
}

impl TaskNode {
    pub fn new(id: NodeId, kind: TaskKind, position: Position) -> Self {
        Self {
            id,
            kind,
            position,
            label: kind.meta().label().to_owned(),
            payload: Map::new(),
        }
    }

    pub fn new_with(
        id: NodeId,
        kind: TaskKind,
        position: Position,
        label: impl Into<String>,
        payload: Map<String, Value>,
    ) -> Self {
        Self {
            id,
            kind,
            position,
            label: label.into(),
            payload,
        }
    }

    pub fn id(&self) -> &NodeId {
        &self.id
    }

    pub fn kind(&self) -> TaskKind {
        self.kind
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    pub fn payload(&self) -> &Map<String, Value> {
        &self.payload
    }

    pub fn set_payload(&mut self, payload: Map<String, Value>) {
        self.payload = payload;
    }
}
