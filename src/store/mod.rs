// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Session-scoped persistence.
//!
//! The store exposes a slot port (`SessionSlots`) with in-memory and
//! on-disk implementations, and the typed envelope codec (`SessionStore`)
//! both the TUI and the canvas reducer run against.

pub mod session_store;
pub mod slots;

pub use session_store::{
    SessionStore, EDGES_SLOT, NODES_SLOT, NODE_ID_SLOT, SIDEBAR_SLOT, VIEWPORT_SLOT,
};
pub use slots::{FolderSlots, MemorySlots, SessionSlots, StoreError, WriteDurability};
