// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

/// The type of task a canvas node represents.
///
/// The kind fixes the node's display metadata at creation time; only the
/// label can diverge afterwards (via an inspector rename).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TaskKind {
    Portfolio,
    Resumes,
    UpdateProfile,
    UpdatePortfolio,
}

/// Fixed display metadata for a task kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskKindMeta {
    label: &'static str,
    icon: &'static str,
    description: &'static str,
    accent: (u8, u8, u8),
}

impl TaskKindMeta {
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn icon(&self) -> &'static str {
        self.icon
    }

    pub fn description(&self) -> &'static str {
        self.description
    }

    /// Accent color as an RGB triple.
    pub fn accent(&self) -> (u8, u8, u8) {
        self.accent
    }
}

impl TaskKind {
    pub const ALL: [TaskKind; 4] = [
        TaskKind::Portfolio,
        TaskKind::Resumes,
        TaskKind::UpdateProfile,
        TaskKind::UpdatePortfolio,
    ];

    /// The name used in node ids and the persisted envelope.
    pub fn wire_name(&self) -> &'static str {
        match self {
            Self::Portfolio => "portfolio",
            Self::Resumes => "resumes",
            Self::UpdateProfile => "update-profile",
            Self::UpdatePortfolio => "update-portfolio",
        }
    }

    pub fn meta(&self) -> &'static TaskKindMeta {
        match self {
            Self::Portfolio => &TaskKindMeta {
                label: "Portfolio",
                icon: "💼",
                description: "Display portfolio items",
                accent: (0x10, 0xb9, 0x81),
            },
            Self::Resumes => &TaskKindMeta {
                label: "Resumes",
                icon: "📋",
                description: "Manage resume documents",
                accent: (0x3b, 0x82, 0xf6),
            },
            Self::UpdateProfile => &TaskKindMeta {
                label: "Update Profile",
                icon: "👤",
                description: "Edit profile information",
                accent: (0xf5, 0x9e, 0x0b),
            },
            Self::UpdatePortfolio => &TaskKindMeta {
                label: "Update Portfolio",
                icon: "✏️",
                description: "Edit portfolio content",
                accent: (0x8b, 0x5c, 0xf6),
            },
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTaskKindError {
    value: String,
}

impl ParseTaskKindError {
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseTaskKindError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown task kind '{}'", self.value)
    }
}

impl std::error::Error for ParseTaskKindError {}

impl FromStr for TaskKind {
    type Err = ParseTaskKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TaskKind::ALL
            .into_iter()
            .find(|kind| kind.wire_name() == s)
            .ok_or_else(|| ParseTaskKindError {
                value: s.to_owned(),
            })
    }
}
