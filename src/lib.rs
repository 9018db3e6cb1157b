//! # modal-input — vi-style modal key dispatch
//!
//! The key-dispatch skeleton of a modal editor: mode tracking, repeat-count
//! accumulation, multi-character command buffering, line-wise visual
//! selection, and the consumed-vs-fallthrough decision for every keystroke.
//! The text buffer and the command vocabulary stay outside, injected through
//! the traits in [`host`] — this crate only decides *what a key means right
//! now*, never what an edit does.
//!
//! - **[`key`]** — logical `KeyEvent`s: key codes and modifier masks
//! - **[`mode`]** — `Normal` / `Insert` / `Visual` and their caret shapes
//! - **[`command`]** — the pending (count, verb, args) command buffer
//! - **[`selection`]** — anchor/endpoint tracking for visual selection
//! - **[`host`]** — the injected `HostEditor` and `CommandExecutor` seams
//! - **[`controller`]** — `ModeController`, the per-mode dispatch machine
//!
//! One controller per editor instance; everything is synchronous and
//! single-threaded.

pub mod command;
pub mod controller;
pub mod host;
pub mod key;
pub mod mode;
pub mod selection;
