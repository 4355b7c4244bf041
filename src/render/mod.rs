// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Unicode rasterization of the canvas.
//!
//! The renderer maps world geometry through the viewport into a cell grid
//! with semantic ink per cell; the TUI turns ink into styles. It is pure:
//! no terminal types, no side effects.

pub mod canvas;

pub use canvas::{
    render_canvas, view_size_for, CanvasRaster, Cell, Ink, CELL_PX_X, CELL_PX_Y,
};
