// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use ratatui::style::{Color, Modifier, Style};

use crate::model::TaskKind;
use crate::render::Ink;

/// Style mapping for the canvas raster and the panel chrome.
///
/// Task-kind accents come from the kind metadata table so the canvas, the
/// palette, and the sidebar agree on colors.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TuiTheme;

impl TuiTheme {
    pub(crate) fn kind_color(&self, kind: TaskKind) -> Color {
        let (r, g, b) = kind.meta().accent();
        Color::Rgb(r, g, b)
    }

    pub(crate) fn ink_style(&self, ink: Ink) -> Style {
        match ink {
            Ink::Blank => Style::default(),
            Ink::Grid => Style::default().fg(Color::DarkGray),
            Ink::Edge => Style::default().fg(Color::Gray),
            Ink::Box { kind, selected } => {
                let style = Style::default().fg(self.kind_color(kind));
                if selected {
                    style.add_modifier(Modifier::BOLD)
                } else {
                    style
                }
            }
            Ink::Text { kind, selected } => {
                let style = Style::default().fg(self.kind_color(kind));
                if selected {
                    style.add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    style
                }
            }
        }
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::LightGreen)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    pub(crate) fn selection_style(&self) -> Style {
        Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn disabled_style(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub(crate) fn footer_label_style(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    pub(crate) fn footer_key_style(&self) -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub(crate) fn toast_style(&self) -> Style {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    }
}
