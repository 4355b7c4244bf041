// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Linear undo/redo over graph snapshots.
//!
//! The history is an ordered list of frames plus a cursor. Recording after
//! one or more undos truncates the redo tail: linear history, not a DAG.
//! The pre-first-mutation empty canvas never occupies a frame, so undo
//! cannot reach it; emptying the canvas *is* recorded, so delete-to-empty
//! stays undoable.

use crate::model::GraphFrame;

#[derive(Debug, Clone, Default)]
pub struct History {
    frames: Vec<GraphFrame>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor > 0)
    }

    pub fn can_redo(&self) -> bool {
        self.cursor.is_some_and(|cursor| cursor + 1 < self.frames.len())
    }

    /// Appends a frame at the cursor, discarding any redo tail.
    pub fn record(&mut self, frame: GraphFrame) {
        match self.cursor {
            Some(cursor) => self.frames.truncate(cursor + 1),
            None => self.frames.clear(),
        }
        self.frames.push(frame);
        self.cursor = Some(self.frames.len() - 1);
    }

    /// Steps the cursor back and returns the frame to restore; `None` at the
    /// lower bound (safe to call regardless of `can_undo`).
    pub fn undo(&mut self) -> Option<&GraphFrame> {
        let cursor = self.cursor?;
        if cursor == 0 {
            return None;
        }
        self.cursor = Some(cursor - 1);
        self.frames.get(cursor - 1)
    }

    /// Steps the cursor forward and returns the frame to restore; `None` at
    /// the upper bound.
    pub fn redo(&mut self) -> Option<&GraphFrame> {
        let cursor = self.cursor?;
        if cursor + 1 >= self.frames.len() {
            return None;
        }
        self.cursor = Some(cursor + 1);
        self.frames.get(cursor + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::History;
    use crate::model::fixtures::chain_graph;
    use crate::model::{CanvasGraph, GraphFrame, Position, TaskKind};

    fn frame_of(len: usize) -> GraphFrame {
        chain_graph(len).snapshot()
    }

    #[test]
    fn undo_and_redo_are_no_ops_on_an_empty_history() {
        let mut history = History::new();
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo().is_none());
        assert!(history.redo().is_none());
    }

    #[test]
    fn first_frame_is_not_undoable() {
        let mut history = History::new();
        history.record(frame_of(1));

        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert!(history.undo().is_none());
    }

    #[test]
    fn undo_then_redo_restores_the_exact_frames() {
        let mut graph = CanvasGraph::new();
        let mut history = History::new();

        graph.add_node(TaskKind::Portfolio, Position::ORIGIN);
        let first = graph.snapshot();
        history.record(first.clone());

        graph.add_node(TaskKind::Resumes, Position::new(300.0, 0.0));
        let second = graph.snapshot();
        history.record(second.clone());

        assert_eq!(history.undo(), Some(&first));
        assert_eq!(history.redo(), Some(&second));
    }

    #[test]
    fn recording_after_undo_discards_the_redo_tail() {
        let mut history = History::new();
        history.record(frame_of(1));
        history.record(frame_of(2));
        history.record(frame_of(3));

        history.undo();
        history.undo();
        assert!(history.can_redo());

        history.record(frame_of(4));
        assert!(!history.can_redo());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn bounds_stay_safe_when_called_past_the_ends() {
        let mut history = History::new();
        history.record(frame_of(1));
        history.record(frame_of(2));

        assert!(history.undo().is_some());
        assert!(history.undo().is_none());
        assert!(history.undo().is_none());

        assert!(history.redo().is_some());
        assert!(history.redo().is_none());
    }

    #[test]
    fn empty_frames_are_recordable() {
        // Deleting the last node records the resulting empty state so the
        // deletion itself can be undone.
        let mut history = History::new();
        history.record(frame_of(1));
        history.record(CanvasGraph::new().snapshot());

        assert!(history.can_undo());
        let restored = history.undo().expect("frame");
        assert_eq!(restored.nodes().len(), 1);
    }
}
