// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use crate::model::{
    CanvasGraph, NodeId, Position, ViewSize, Viewport, NODE_HEIGHT, NODE_WIDTH,
};

/// Screen units covered by one terminal cell. Cells are roughly twice as
/// tall as wide, so the vertical factor doubles the horizontal one; at zoom
/// 1 a node box comes out at about 22×3 cells.
pub const CELL_PX_X: f64 = 10.0;
pub const CELL_PX_Y: f64 = 20.0;

/// World pitch of the background dot grid.
const GRID_PITCH: f64 = 160.0;

/// Semantic ink of a rasterized cell; the TUI maps ink to styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ink {
    Blank,
    Grid,
    Edge,
    Box { kind: crate::model::TaskKind, selected: bool },
    Text { kind: crate::model::TaskKind, selected: bool },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub ch: char,
    pub ink: Ink,
}

const BLANK: Cell = Cell {
    ch: ' ',
    ink: Ink::Blank,
};

/// A rasterized canvas: `height` rows of `width` cells, row-major.
#[derive(Debug, Clone)]
pub struct CanvasRaster {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl CanvasRaster {
    fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width.max(1))
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.cells.get(y * self.width + x)
    }

    fn put(&mut self, x: i64, y: i64, ch: char, ink: Ink) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        self.cells[y * self.width + x] = Cell { ch, ink };
    }
}

/// The screen extent a cell area maps to, for the camera math.
pub fn view_size_for(columns: u16, rows: u16) -> ViewSize {
    ViewSize::new(f64::from(columns) * CELL_PX_X, f64::from(rows) * CELL_PX_Y)
}

/// Rasterizes the canvas for one frame: dot grid, then edges, then node
/// boxes on top. Geometry outside the cell area is clipped, never an
/// error.
pub fn render_canvas(
    graph: &CanvasGraph,
    viewport: Viewport,
    selection: &BTreeSet<NodeId>,
    columns: u16,
    rows: u16,
) -> CanvasRaster {
    let mut raster = CanvasRaster::new(usize::from(columns), usize::from(rows));

    draw_grid(&mut raster, viewport);
    for edge in graph.edges() {
        let (Some(source), Some(target)) = (graph.node(edge.source()), graph.node(edge.target()))
        else {
            continue;
        };
        draw_edge(&mut raster, viewport, source.position(), target.position());
    }
    for node in graph.nodes() {
        let selected = selection.contains(node.id());
        draw_node(&mut raster, viewport, node, selected);
    }

    raster
}

fn to_cell(viewport: Viewport, point: Position) -> (i64, i64) {
    let (sx, sy) = viewport.world_to_screen(point);
    ((sx / CELL_PX_X).round() as i64, (sy / CELL_PX_Y).round() as i64)
}

fn draw_grid(raster: &mut CanvasRaster, viewport: Viewport) {
    for y in 0..raster.height as i64 {
        for x in 0..raster.width as i64 {
            let world = viewport.screen_to_world(x as f64 * CELL_PX_X, y as f64 * CELL_PX_Y);
            let near_x = (world.x / GRID_PITCH).round() * GRID_PITCH;
            let near_y = (world.y / GRID_PITCH).round() * GRID_PITCH;
            let tol_x = CELL_PX_X / viewport.zoom / 2.0;
            let tol_y = CELL_PX_Y / viewport.zoom / 2.0;
            if (world.x - near_x).abs() < tol_x && (world.y - near_y).abs() < tol_y {
                raster.put(x, y, '·', Ink::Grid);
            }
        }
    }
}

fn draw_edge(raster: &mut CanvasRaster, viewport: Viewport, from: Position, to: Position) {
    // Anchors: right-center of the source box, left-center of the target.
    let start = Position::new(from.x + NODE_WIDTH, from.y + NODE_HEIGHT / 2.0);
    let end = Position::new(to.x, to.y + NODE_HEIGHT / 2.0);

    let (x0, y0) = to_cell(viewport, start);
    let (x1, y1) = to_cell(viewport, end);

    if y0 == y1 {
        for x in span(x0, x1) {
            raster.put(x, y0, '─', Ink::Edge);
        }
        raster.put(x1, y1, '▶', Ink::Edge);
        return;
    }

    // L-path: out to the horizontal midpoint, down/up, then in.
    let mid = (x0 + x1) / 2;
    for x in span(x0, mid) {
        raster.put(x, y0, '─', Ink::Edge);
    }
    for y in span(y0, y1) {
        raster.put(mid, y, '│', Ink::Edge);
    }
    raster.put(mid, y0, if y1 > y0 { '┐' } else { '┘' }, Ink::Edge);
    raster.put(mid, y1, if y1 > y0 { '└' } else { '┌' }, Ink::Edge);
    for x in span(mid, x1) {
        raster.put(x, y1, '─', Ink::Edge);
    }
    raster.put(x1, y1, '▶', Ink::Edge);
}

fn span(a: i64, b: i64) -> std::ops::Range<i64> {
    if a <= b {
        a..b
    } else {
        b + 1..a + 1
    }
}

fn draw_node(
    raster: &mut CanvasRaster,
    viewport: Viewport,
    node: &crate::model::TaskNode,
    selected: bool,
) {
    let kind = node.kind();
    let (x0, y0) = to_cell(viewport, node.position());
    let width = ((NODE_WIDTH * viewport.zoom) / CELL_PX_X).round() as i64;
    let height = ((NODE_HEIGHT * viewport.zoom) / CELL_PX_Y).round() as i64;

    // Too small for a box at this zoom: a single marker cell.
    if width < 4 || height < 2 {
        raster.put(x0, y0, '◆', Ink::Box { kind, selected });
        return;
    }

    let box_ink = Ink::Box { kind, selected };
    let (x1, y1) = (x0 + width - 1, y0 + height - 1);

    for x in x0 + 1..x1 {
        raster.put(x, y0, '─', box_ink);
        raster.put(x, y1, '─', box_ink);
    }
    for y in y0 + 1..y1 {
        raster.put(x0, y, '│', box_ink);
        raster.put(x1, y, '│', box_ink);
        for x in x0 + 1..x1 {
            raster.put(x, y, ' ', box_ink);
        }
    }
    raster.put(x0, y0, '╭', box_ink);
    raster.put(x1, y0, '╮', box_ink);
    raster.put(x0, y1, '╰', box_ink);
    raster.put(x1, y1, '╯', box_ink);

    let title_y = y0 + height / 2;
    let text_ink = Ink::Text { kind, selected };
    let budget = (width - 3).max(0) as usize;
    let title: String = format!("{} {}", kind.meta().icon(), node.label())
        .chars()
        .take(budget)
        .collect();
    for (offset, ch) in title.chars().enumerate() {
        raster.put(x0 + 2 + offset as i64, title_y, ch, text_ink);
    }
}
