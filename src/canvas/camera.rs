// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::Viewport;

/// Camera motion state.
///
/// `Centering` is the suppression window around the one-shot "center on the
/// first node" transition: while it is active, viewport changes are not
/// user gestures and must not be persisted. The transition ends with an
/// explicit [`complete`](CameraMotion::complete) call, not a timer, so the
/// window is deterministic under test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraMotion {
    Idle,
    Centering { target: Viewport },
}

impl Default for CameraMotion {
    fn default() -> Self {
        Self::Idle
    }
}

impl CameraMotion {
    pub fn is_centering(&self) -> bool {
        matches!(self, Self::Centering { .. })
    }

    pub fn target(&self) -> Option<Viewport> {
        match self {
            Self::Centering { target } => Some(*target),
            Self::Idle => None,
        }
    }

    pub fn begin_centering(&mut self, target: Viewport) {
        *self = Self::Centering { target };
    }

    /// Ends the transition, returning the target viewport to settle on.
    /// A no-op (`None`) when the camera was already idle.
    pub fn complete(&mut self) -> Option<Viewport> {
        match *self {
            Self::Centering { target } => {
                *self = Self::Idle;
                Some(target)
            }
            Self::Idle => None,
        }
    }
}
