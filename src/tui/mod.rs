// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive canvas shell (ratatui + crossterm): pannable canvas with
//! the rasterized node graph, a task palette, a zoom menu, the node sidebar,
//! and the node detail panel. All graph intents funnel through the canvas
//! command surface; the TUI owns no graph state of its own.

use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
};

use crate::canvas::{CanvasState, Command};
use crate::model::{NodeId, TaskKind, ViewSize, ZOOM_PRESETS};
use crate::render::{render_canvas, view_size_for, CELL_PX_X, CELL_PX_Y};

mod theme;

use theme::TuiTheme;

const FOOTER_BRAND: &str = "🅣 🅡 🅘 🅣 🅞 🅝 ";
/// Cells moved per pan keypress.
const PAN_STEP_CELLS: f64 = 4.0;
/// Per-tick interpolation factor of the centering transition.
const CENTERING_LERP: f64 = 0.5;

pub fn run(canvas: CanvasState, workspace: String) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(canvas, workspace);

    while !app.should_quit {
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                _ => {}
            }
        }

        app.tick_centering();
    }

    Ok(())
}

struct Toast {
    message: String,
    expires_at: Instant,
}

/// Which popup currently captures input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Popup {
    None,
    Palette { index: usize },
    ZoomMenu { index: usize },
}

struct App {
    canvas: CanvasState,
    workspace: String,
    theme: TuiTheme,
    popup: Popup,
    /// Label edit buffer while the inspector rename is active.
    label_edit: Option<String>,
    sidebar_state: ListState,
    /// Canvas pane extent from the last draw, for the camera math.
    canvas_cols: u16,
    canvas_rows: u16,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(canvas: CanvasState, workspace: String) -> Self {
        Self {
            canvas,
            workspace,
            theme: TuiTheme,
            popup: Popup::None,
            label_edit: None,
            sidebar_state: ListState::default(),
            canvas_cols: 80,
            canvas_rows: 24,
            toast: None,
            should_quit: false,
        }
    }

    fn view(&self) -> ViewSize {
        view_size_for(self.canvas_cols, self.canvas_rows)
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(2),
        });
    }

    fn active_toast(&self) -> Option<&str> {
        let toast = self.toast.as_ref()?;
        (Instant::now() < toast.expires_at).then_some(toast.message.as_str())
    }

    fn report(&mut self, result: Result<(), crate::store::StoreError>) {
        if let Err(err) = result {
            self.set_toast(format!("Save failed: {err}"));
        }
    }

    fn execute(&mut self, command: Command) {
        let view = self.view();
        let result = self.canvas.execute(command, view);
        self.report(result);
    }

    /// Advances the one-shot centering transition between frames.
    fn tick_centering(&mut self) {
        let Some(target) = self.canvas.centering_target() else {
            return;
        };
        let current = self.canvas.viewport();
        let dx = target.x - current.x;
        let dy = target.y - current.y;
        let dz = target.zoom - current.zoom;

        if dx.abs() < 1.0 && dy.abs() < 1.0 && dz.abs() < 0.01 {
            self.canvas.centering_complete();
            return;
        }

        self.canvas.apply_centering_frame(crate::model::Viewport::new(
            current.x + dx * CENTERING_LERP,
            current.y + dy * CENTERING_LERP,
            current.zoom + dz * CENTERING_LERP,
        ));
    }

    fn selected_node(&self) -> Option<NodeId> {
        if self.canvas.selection().len() == 1 {
            self.canvas.selection().iter().next().cloned()
        } else {
            None
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        self.handle_key_code(key.code);
    }

    fn handle_key_code(&mut self, code: KeyCode) {
        if self.label_edit.is_some() {
            self.handle_label_edit_key(code);
            return;
        }

        match self.popup {
            Popup::Palette { index } => {
                self.handle_palette_key(code, index);
                return;
            }
            Popup::ZoomMenu { index } => {
                self.handle_zoom_menu_key(code, index);
                return;
            }
            Popup::None => {}
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('a') => self.popup = Popup::Palette { index: 0 },
            KeyCode::Char('z') => self.popup = Popup::ZoomMenu { index: 0 },
            KeyCode::Char('+') | KeyCode::Char('=') => self.execute(Command::ZoomIn),
            KeyCode::Char('-') => self.execute(Command::ZoomOut),
            KeyCode::Char('f') => self.execute(Command::ZoomToFit),
            KeyCode::Char('u') => self.execute(Command::Undo),
            KeyCode::Char('r') => self.execute(Command::Redo),
            KeyCode::Char('x') | KeyCode::Delete => self.execute(Command::DeleteSelection),
            KeyCode::Char('s') => {
                let open = !self.canvas.sidebar_open();
                let result = self.canvas.set_sidebar_open(open);
                self.report(result);
            }
            KeyCode::Char('e') => self.begin_label_edit(),
            KeyCode::Tab => self.cycle_selection(1),
            KeyCode::BackTab => self.cycle_selection(-1),
            KeyCode::Enter => {
                if let Some(id) = self.selected_node() {
                    self.canvas.on_node_double_click(&id);
                }
            }
            KeyCode::Esc => {
                if self.canvas.inspector().is_open() {
                    self.canvas.close_inspector();
                } else {
                    self.canvas.on_selection_change(&[]);
                }
            }
            KeyCode::Left | KeyCode::Char('h') => self.pan(PAN_STEP_CELLS * CELL_PX_X, 0.0),
            KeyCode::Right | KeyCode::Char('l') => self.pan(-PAN_STEP_CELLS * CELL_PX_X, 0.0),
            KeyCode::Up | KeyCode::Char('k') => self.pan(0.0, PAN_STEP_CELLS * CELL_PX_Y),
            KeyCode::Down | KeyCode::Char('j') => self.pan(0.0, -PAN_STEP_CELLS * CELL_PX_Y),
            _ => {}
        }
    }

    fn handle_palette_key(&mut self, code: KeyCode, index: usize) {
        let count = TaskKind::ALL.len();
        match code {
            KeyCode::Esc => self.popup = Popup::None,
            KeyCode::Up => {
                self.popup = Popup::Palette {
                    index: index.checked_sub(1).unwrap_or(count - 1),
                };
            }
            KeyCode::Down => {
                self.popup = Popup::Palette {
                    index: (index + 1) % count,
                };
            }
            KeyCode::Enter => {
                self.popup = Popup::None;
                self.execute(Command::AddNode(TaskKind::ALL[index]));
            }
            KeyCode::Char(ch) => {
                if let Some(digit) = ch.to_digit(10) {
                    let digit = digit as usize;
                    if (1..=count).contains(&digit) {
                        self.popup = Popup::None;
                        self.execute(Command::AddNode(TaskKind::ALL[digit - 1]));
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_zoom_menu_key(&mut self, code: KeyCode, index: usize) {
        // Presets plus the trailing "zoom to fit" entry.
        let count = ZOOM_PRESETS.len() + 1;
        match code {
            KeyCode::Esc => self.popup = Popup::None,
            KeyCode::Up => {
                self.popup = Popup::ZoomMenu {
                    index: index.checked_sub(1).unwrap_or(count - 1),
                };
            }
            KeyCode::Down => {
                self.popup = Popup::ZoomMenu {
                    index: (index + 1) % count,
                };
            }
            KeyCode::Enter => {
                self.popup = Popup::None;
                match ZOOM_PRESETS.get(index) {
                    Some(level) => self.execute(Command::ZoomTo(*level)),
                    None => self.execute(Command::ZoomToFit),
                }
            }
            _ => {}
        }
    }

    fn handle_label_edit_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => {
                self.label_edit = None;
            }
            KeyCode::Enter => {
                let Some(buffer) = self.label_edit.take() else {
                    return;
                };
                let Some(id) = self.canvas.inspector().open_node().cloned() else {
                    return;
                };
                let result = self.canvas.rename_node(&id, buffer.trim());
                self.report(result);
            }
            KeyCode::Backspace => {
                if let Some(buffer) = self.label_edit.as_mut() {
                    buffer.pop();
                }
            }
            KeyCode::Char(ch) => {
                if let Some(buffer) = self.label_edit.as_mut() {
                    buffer.push(ch);
                }
            }
            _ => {}
        }
    }

    fn begin_label_edit(&mut self) {
        let Some(id) = self.canvas.inspector().open_node() else {
            self.set_toast("Open a node panel first");
            return;
        };
        let label = self
            .canvas
            .graph()
            .node(id)
            .map(|node| node.label().to_owned())
            .unwrap_or_default();
        self.label_edit = Some(label);
    }

    /// Tab-order selection over the node list; mirrors clicking nodes on
    /// the canvas one at a time.
    fn cycle_selection(&mut self, step: i64) {
        let nodes = self.canvas.graph().nodes();
        if nodes.is_empty() {
            return;
        }

        let current = self
            .selected_node()
            .and_then(|id| nodes.iter().position(|node| node.id() == &id));
        let len = nodes.len() as i64;
        let next = match current {
            Some(index) => (index as i64 + step).rem_euclid(len),
            None => {
                if step >= 0 {
                    0
                } else {
                    len - 1
                }
            }
        };

        let id = nodes[next as usize].id().clone();
        self.canvas.on_selection_change(&[id]);
    }

    /// Each pan keypress is a complete gesture: move, then gesture-end.
    fn pan(&mut self, dx: f64, dy: f64) {
        self.canvas.pan_by(dx, dy);
        let result = self.canvas.on_pan_zoom_end();
        self.report(result);
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.size();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let main_area = layout[0];
    let status_area = layout[1];

    let sidebar_panel_count =
        usize::from(app.canvas.sidebar_open()) + usize::from(app.canvas.inspector().is_open());
    let (canvas_area, sidebar_content_area) = if sidebar_panel_count > 0 {
        let panes = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_area);
        (panes[0], Some(panes[1]))
    } else {
        (main_area, None)
    };

    app.canvas_cols = canvas_area.width.saturating_sub(2);
    app.canvas_rows = canvas_area.height.saturating_sub(2);

    draw_canvas(frame, app, canvas_area);

    if let Some(sidebar_content_area) = sidebar_content_area {
        let constraints = if sidebar_panel_count == 2 {
            vec![Constraint::Percentage(50), Constraint::Percentage(50)]
        } else {
            vec![Constraint::Min(0)]
        };
        let content = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(sidebar_content_area);

        let mut next = 0;
        if app.canvas.sidebar_open() {
            draw_sidebar(frame, app, content[next]);
            next += 1;
        }
        if app.canvas.inspector().is_open() {
            draw_inspector(frame, app, content[next]);
        }
    }

    match app.popup {
        Popup::Palette { index } => draw_palette(frame, app, area, index),
        Popup::ZoomMenu { index } => draw_zoom_menu(frame, app, area, index),
        Popup::None => {}
    }

    draw_footer(frame, app, status_area);
}

fn draw_canvas(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let selected_label = app
        .selected_node()
        .and_then(|id| app.canvas.graph().node(&id).map(|n| n.label().to_owned()));
    let mut crumb = format!(" Triton › {}", app.workspace);
    if let Some(label) = selected_label {
        crumb.push_str(" › ");
        crumb.push_str(&label);
    }
    crumb.push(' ');

    let raster = render_canvas(
        app.canvas.graph(),
        app.canvas.viewport(),
        app.canvas.selection(),
        app.canvas_cols,
        app.canvas_rows,
    );

    let mut lines = Vec::with_capacity(raster.height());
    for row in raster.rows() {
        let mut spans = Vec::new();
        let mut run = String::new();
        let mut run_ink = None;
        for cell in row {
            if run_ink != Some(cell.ink) {
                if let Some(ink) = run_ink {
                    spans.push(Span::styled(std::mem::take(&mut run), app.theme.ink_style(ink)));
                }
                run_ink = Some(cell.ink);
            }
            run.push(cell.ch);
        }
        if let Some(ink) = run_ink {
            spans.push(Span::styled(run, app.theme.ink_style(ink)));
        }
        lines.push(Line::from(spans));
    }

    let canvas = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(crumb)
            .border_style(app.theme.panel_border_style(true)),
    );
    frame.render_widget(canvas, area);
}

fn draw_sidebar(frame: &mut Frame<'_>, app: &mut App, area: Rect) {
    let nodes = app.canvas.graph().nodes();
    let items: Vec<ListItem<'_>> = nodes
        .iter()
        .map(|node| {
            let meta = node.kind().meta();
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{} ", meta.icon()),
                    Style::default().fg(app.theme.kind_color(node.kind())),
                ),
                Span::raw(node.label().to_owned()),
                Span::styled(format!("  {}", node.id()), app.theme.disabled_style()),
            ]))
        })
        .collect();

    let selected_index = app
        .selected_node()
        .and_then(|id| nodes.iter().position(|node| node.id() == &id));
    app.sidebar_state.select(selected_index);

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Tasks ({}) ", nodes.len()))
                .border_style(app.theme.panel_border_style(false)),
        )
        .highlight_style(app.theme.selection_style());
    frame.render_stateful_widget(list, area, &mut app.sidebar_state);
}

fn draw_inspector(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let Some(id) = app.canvas.inspector().open_node() else {
        return;
    };
    let Some(node) = app.canvas.graph().node(id) else {
        return;
    };
    let meta = node.kind().meta();

    let mut lines = vec![
        Line::from(vec![
            Span::styled("id    ", app.theme.footer_label_style()),
            Span::raw(node.id().to_string()),
        ]),
        Line::from(vec![
            Span::styled("type  ", app.theme.footer_label_style()),
            Span::styled(
                node.kind().wire_name(),
                Style::default().fg(app.theme.kind_color(node.kind())),
            ),
        ]),
        Line::from(vec![
            Span::styled("about ", app.theme.footer_label_style()),
            Span::raw(meta.description()),
        ]),
        Line::from(vec![
            Span::styled("links ", app.theme.footer_label_style()),
            Span::raw(format!(
                "{} connection(s)",
                app.canvas.graph().incident_edges(id).len()
            )),
        ]),
    ];

    match &app.label_edit {
        Some(buffer) => {
            lines.push(Line::from(vec![
                Span::styled("label ", app.theme.footer_label_style()),
                Span::styled(format!("{buffer}▏"), app.theme.selection_style()),
            ]));
        }
        None => {
            lines.push(Line::from(vec![
                Span::styled("label ", app.theme.footer_label_style()),
                Span::raw(node.label().to_owned()),
            ]));
        }
    }

    lines.push(Line::from(""));
    if node.payload().is_empty() {
        lines.push(Line::from(Span::styled(
            "no content yet",
            app.theme.disabled_style(),
        )));
    } else {
        let payload = serde_json::to_string_pretty(node.payload()).unwrap_or_default();
        for raw in payload.lines() {
            lines.push(Line::from(raw.to_owned()));
        }
    }

    let panel = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} {} ", meta.icon(), meta.label()))
            .border_style(app.theme.panel_border_style(app.label_edit.is_some())),
    );
    frame.render_widget(panel, area);
}

fn draw_palette(frame: &mut Frame<'_>, app: &App, area: Rect, index: usize) {
    let popup = centered_rect(area, 44, (TaskKind::ALL.len() + 2) as u16);
    frame.render_widget(Clear, popup);

    let lines: Vec<Line<'_>> = TaskKind::ALL
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let meta = kind.meta();
            let text =
                format!("{} {} {}  {}", i + 1, meta.icon(), meta.label(), meta.description());
            if i == index {
                Line::from(Span::styled(text, app.theme.selection_style()))
            } else {
                Line::from(Span::styled(
                    text,
                    Style::default().fg(app.theme.kind_color(*kind)),
                ))
            }
        })
        .collect();

    let palette = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Add task ")
            .border_style(app.theme.panel_border_style(true)),
    );
    frame.render_widget(palette, popup);
}

fn draw_zoom_menu(frame: &mut Frame<'_>, app: &App, area: Rect, index: usize) {
    let popup = centered_rect(area, 20, (ZOOM_PRESETS.len() + 3) as u16);
    frame.render_widget(Clear, popup);

    let mut lines: Vec<Line<'_>> = ZOOM_PRESETS
        .iter()
        .enumerate()
        .map(|(i, level)| {
            let text = format!("{}%", (level * 100.0).round() as i64);
            if i == index {
                Line::from(Span::styled(text, app.theme.selection_style()))
            } else {
                Line::from(text)
            }
        })
        .collect();
    let fit = "Zoom to fit";
    if index == ZOOM_PRESETS.len() {
        lines.push(Line::from(Span::styled(fit, app.theme.selection_style())));
    } else {
        lines.push(Line::from(fit));
    }

    let menu = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Zoom ")
            .border_style(app.theme.panel_border_style(true)),
    );
    frame.render_widget(menu, popup);
}

fn draw_footer(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if let Some(message) = app.active_toast() {
        let toast = Paragraph::new(Line::from(Span::styled(
            format!(" {message} "),
            app.theme.toast_style(),
        )));
        frame.render_widget(toast, area);
        return;
    }

    let mut zoom_buf = itoa::Buffer::new();
    let zoom_pct = zoom_buf.format((app.canvas.viewport().zoom * 100.0).round() as i64);

    let hint = |key: &'static str, label: &'static str, enabled: bool| {
        let key_style = if enabled {
            app.theme.footer_key_style()
        } else {
            app.theme.disabled_style()
        };
        let label_style = if enabled {
            app.theme.footer_label_style()
        } else {
            app.theme.disabled_style()
        };
        [
            Span::styled(key, key_style),
            Span::styled(label, label_style),
            Span::raw(" "),
        ]
    };

    let mut spans = vec![Span::styled(FOOTER_BRAND, Style::default().fg(Color::White))];
    spans.extend(hint("a", ":add", true));
    spans.extend(hint("u", ":undo", app.canvas.can_undo()));
    spans.extend(hint("r", ":redo", app.canvas.can_redo()));
    spans.extend(hint("x", ":delete", !app.canvas.selection().is_empty()));
    spans.extend(hint("z", ":zoom", true));
    spans.extend(hint("f", ":fit", true));
    spans.extend(hint("s", ":tasks", true));
    spans.extend(hint("q", ":quit", true));
    spans.push(Span::styled(
        format!(" {zoom_pct}%"),
        app.theme.footer_label_style(),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
}
