// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Triton-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Triton and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Triton CLI entrypoint.
//!
//! Runs the interactive canvas TUI against a session directory (the current
//! working directory by default). Use `--ephemeral` for an in-memory
//! session that leaves no files behind.

use std::error::Error;
use std::path::Path;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<session-dir>] [--durable-writes]\n  {program} [--session <dir>] [--durable-writes]\n  {program} --ephemeral\n\nIf session-dir/--session is omitted, the current working directory is used.\n--ephemeral keeps the whole session in memory and cannot be combined with\nsession-dir/--session.\n\n--durable-writes opts into slower, best-effort durable persistence (fsync/sync where supported)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    ephemeral: bool,
    session_dir: Option<String>,
    durable_writes: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--ephemeral" => {
                if options.ephemeral {
                    return Err(());
                }
                options.ephemeral = true;
            }
            "--session" => {
                if options.session_dir.is_some() {
                    return Err(());
                }
                let dir = args.next().ok_or(())?;
                options.session_dir = Some(dir);
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.session_dir.is_some() {
                    return Err(());
                }
                options.session_dir = Some(arg);
            }
        }
    }

    if options.ephemeral && options.session_dir.is_some() {
        return Err(());
    }

    Ok(options)
}

fn workspace_name(dir: &str, ephemeral: bool) -> String {
    if ephemeral {
        return "ephemeral".to_owned();
    }
    Path::new(dir)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| dir.to_owned())
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "triton".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let (store, workspace) = if options.ephemeral {
            (
                triton::store::SessionStore::in_memory(),
                workspace_name("", true),
            )
        } else {
            let dir = options.session_dir.unwrap_or_else(|| ".".to_owned());
            let slots = if options.durable_writes {
                triton::store::FolderSlots::new(&dir)
                    .with_durability(triton::store::WriteDurability::Durable)
            } else {
                triton::store::FolderSlots::new(&dir)
            };
            (
                triton::store::SessionStore::new(Box::new(slots)),
                workspace_name(&dir, false),
            )
        };

        let mut canvas = triton::canvas::CanvasState::new(store);
        canvas.hydrate();

        triton::tui::run(canvas, workspace)?;

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("triton: {err}");
        std::process::exit(1);
    }
}
