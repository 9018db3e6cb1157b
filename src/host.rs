//! External interfaces — the seams between the dispatch core and its host.
//!
//! The core owns no text. Everything it needs from the surrounding editor
//! comes through [`HostEditor`], and everything it doesn't understand about
//! command semantics goes through [`CommandExecutor`]. Both are injected, so
//! the whole state machine runs against a fake in tests
//! (see the suite in [`controller`](crate::controller)).
//!
//! Offsets are char offsets into the document; lines and columns are
//! 0-indexed. Conversions to anything user-facing belong to the host.

use crate::key::KeyEvent;
use crate::mode::{CaretShape, Mode};

// ---------------------------------------------------------------------------
// HostEditor
// ---------------------------------------------------------------------------

/// The host editor's primitive surface, as seen by the dispatch core.
///
/// The controller reads this state fresh on every call — a caret moved by
/// something other than the controller (mouse, another plugin) is simply
/// picked up the next time a key arrives. No method here may re-enter the
/// controller.
pub trait HostEditor {
    /// The caret's char offset into the document.
    fn caret(&self) -> usize;

    /// Move the caret to a char offset.
    fn set_caret(&mut self, offset: usize);

    /// The 0-indexed line the caret is on.
    fn caret_line(&self) -> usize;

    /// The 0-indexed column the caret is at within its line.
    fn caret_column(&self) -> usize;

    /// Set the caret's display shape.
    fn set_caret_shape(&mut self, shape: CaretShape);

    /// Step the caret one position left.
    ///
    /// Must actually move whenever [`caret_column`](Self::caret_column) is
    /// greater than zero — the end-of-line fixup loop relies on that.
    fn caret_left(&mut self);

    /// Step the caret one position right.
    fn caret_right(&mut self);

    /// The character at a char offset, or `None` past the end of the document.
    fn char_at(&self, offset: usize) -> Option<char>;

    /// Select the inclusive line span between `start` and `end`.
    ///
    /// `start` may exceed `end` when the selection grew upward — the host
    /// reads the pair as a span in either direction (see
    /// [`VisualSelection::line_range`](crate::selection::VisualSelection::line_range)).
    fn select_lines(&mut self, start: usize, end: usize);

    /// Drop any active selection.
    fn clear_selection(&mut self);

    /// Cut the current selection to the clipboard.
    fn cut_selection(&mut self);

    /// Copy the current selection to the clipboard.
    fn copy_selection(&mut self);

    /// Scroll one page up.
    fn page_up(&mut self);

    /// Scroll one page down.
    fn page_down(&mut self);

    /// The host's default key handling — insertion, built-in bindings.
    ///
    /// Invoked by the controller for every event the active mode reports as
    /// fallthrough.
    fn default_keypress(&mut self, key: &KeyEvent);
}

// ---------------------------------------------------------------------------
// CommandExecutor
// ---------------------------------------------------------------------------

/// Verdict of a command execution attempt.
///
/// The controller treats the verdict as authoritative and never retries a
/// triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecResult {
    /// Recognized and performed — the command buffer resets.
    Handled,
    /// Not recognized (so far) — the verb stays pending and keeps collecting
    /// argument characters. This is how `dd` finishes on its second `d`.
    NotHandled,
    /// Performed, and the controller should switch to the given mode
    /// (`i` → Insert, `v` → Visual, …).
    Enter(Mode),
}

/// Interprets a resolved (count, verb, args) triple against the host.
///
/// This is where the actual modal-editing vocabulary lives — motions,
/// operators, registers. The dispatch core only assembles triples and hands
/// them over.
pub trait CommandExecutor<H: HostEditor> {
    /// Attempt the command. `count` is always at least 1.
    fn execute(&mut self, host: &mut H, count: usize, command: char, args: &[char]) -> ExecResult;
}
