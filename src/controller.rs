//! Mode controller — the key-dispatch state machine.
//!
//! A single [`ModeController`] sits between the host editor's input layer
//! and its default key handling. Each keypress flows through:
//!
//!   host input → `handle_key` → active-mode handler → consumed?
//!                                      │
//!                                      └─ fallthrough → host default handler
//!
//! Normal mode assembles (count, verb, args) triples in a
//! [`CommandBuffer`] and hands them to the injected
//! [`CommandExecutor`]; Visual mode drives a [`VisualSelection`] against the
//! host; Insert mode only watches for the exit keys. Mode transitions apply
//! their caret and selection side effects in [`set_mode`].
//!
//! Everything is synchronous and single-threaded: one key event is fully
//! processed — dispatch, buffer mutation, optional execution, side effects —
//! before the next is accepted. Each editor instance gets its own
//! controller; there is no shared state between them.
//!
//! [`CommandBuffer`]: crate::command::CommandBuffer
//! [`CommandExecutor`]: crate::host::CommandExecutor
//! [`VisualSelection`]: crate::selection::VisualSelection
//! [`set_mode`]: ModeController::set_mode

use log::{debug, trace};

use crate::command::CommandBuffer;
use crate::host::{CommandExecutor, ExecResult, HostEditor};
use crate::key::{KeyCode, KeyEvent, Modifiers};
use crate::mode::Mode;
use crate::selection::VisualSelection;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// What happened to a key event.
///
/// An explicit result type instead of a bare bool, so the
/// consumed-vs-forwarded contract is visible at every call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// The active mode handled the event; the host sees nothing.
    Consumed,
    /// The active mode declined the event. By the time the caller sees this,
    /// the controller has already forwarded the event to the host's default
    /// handler — the value is informational, not a request.
    Fallthrough,
}

/// True for the characters a caret must not rest on in normal mode.
#[inline]
#[must_use]
pub const fn is_eol(ch: char) -> bool {
    matches!(ch, '\r' | '\n')
}

/// Unmodified Escape or Ctrl-C — the universal cancel chord.
fn is_cancel(key: &KeyEvent) -> bool {
    (key.modifiers.is_empty() && key.code == KeyCode::Escape)
        || (key.modifiers == Modifiers::CTRL && key.code == KeyCode::Char('c'))
}

// ---------------------------------------------------------------------------
// ModeController
// ---------------------------------------------------------------------------

/// The modal key-dispatch state machine.
///
/// Owns the current [`Mode`], the pending [`CommandBuffer`], and the active
/// [`VisualSelection`] (when in Visual mode), plus the injected host adapter
/// and command executor it runs against.
pub struct ModeController<H, X> {
    host: H,
    executor: X,
    mode: Mode,
    buffer: CommandBuffer,

    /// The live selection while in Visual mode. `Some` exactly when
    /// `mode == Mode::Visual`.
    selection: Option<VisualSelection>,
}

impl<H: HostEditor, X: CommandExecutor<H>> ModeController<H, X> {
    /// Create a controller over the given host and executor.
    ///
    /// Starts in Normal mode and applies its entry side effects (block
    /// caret) immediately.
    pub fn new(host: H, executor: X) -> Self {
        let mut controller = Self {
            host,
            executor,
            mode: Mode::Normal,
            buffer: CommandBuffer::new(),
            selection: None,
        };
        controller.set_mode(Mode::Normal);
        controller
    }

    /// The active mode.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// The pending command buffer (for inspection — status lines show the
    /// count being typed).
    #[inline]
    #[must_use]
    pub const fn command_buffer(&self) -> &CommandBuffer {
        &self.buffer
    }

    /// The current visual selection bounds, for UI highlighting.
    /// `None` outside Visual mode.
    #[inline]
    #[must_use]
    pub const fn visual_selection(&self) -> Option<&VisualSelection> {
        self.selection.as_ref()
    }

    /// The host adapter.
    #[inline]
    pub const fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the host adapter.
    #[inline]
    pub const fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The command executor.
    #[inline]
    pub const fn executor(&self) -> &X {
        &self.executor
    }

    // ── Mode transitions ────────────────────────────────────────────────

    /// Switch modes, applying entry and exit side effects.
    ///
    /// - Leaving Visual clears the host selection and drops the tracker.
    /// - Every entry sets the mode's caret shape.
    /// - Entering Normal from Insert steps the caret one position left —
    ///   insertion leaves the caret just past the last typed character,
    ///   while a normal-mode caret rests on one.
    /// - Entering Visual anchors a fresh selection at the caret line.
    pub fn set_mode(&mut self, new_mode: Mode) {
        debug!("mode transition: {} -> {}", self.mode, new_mode);

        if self.mode == Mode::Visual && new_mode != Mode::Visual {
            self.host.clear_selection();
            self.selection = None;
        }

        self.host.set_caret_shape(new_mode.caret_shape());

        match new_mode {
            Mode::Normal => {
                if self.mode == Mode::Insert {
                    self.host.caret_left();
                }
            }
            Mode::Insert => {}
            Mode::Visual => {
                self.selection = Some(VisualSelection::new(self.host.caret_line()));
            }
        }

        self.mode = new_mode;
    }

    // ── Entry point ─────────────────────────────────────────────────────

    /// Handle one key event.
    ///
    /// Routes the event to the active mode's handler. When the handler
    /// declines it, the controller forwards the event verbatim to the host's
    /// default handler before returning — from the caller's perspective the
    /// event is fully processed either way.
    pub fn handle_key(&mut self, key: &KeyEvent) -> Dispatch {
        let mode = self.mode;
        let dispatch = match mode {
            Mode::Normal => self.normal_keypress(key),
            Mode::Insert => self.insert_keypress(key),
            Mode::Visual => self.visual_keypress(key),
        };

        if dispatch == Dispatch::Fallthrough {
            self.host.default_keypress(key);
        }

        trace!("{mode} key {key:?} -> {dispatch:?}");
        dispatch
    }

    // ── Normal mode ─────────────────────────────────────────────────────

    fn normal_keypress(&mut self, key: &KeyEvent) -> Dispatch {
        // Cancel wipes the whole pending command — count included.
        if is_cancel(key) {
            self.buffer.clear();
            return Dispatch::Consumed;
        }

        // Ctrl-F / Ctrl-B page the view through the host.
        if key.modifiers == Modifiers::CTRL {
            match key.code {
                KeyCode::Char('f') => {
                    self.host.page_down();
                    return Dispatch::Consumed;
                }
                KeyCode::Char('b') => {
                    self.host.page_up();
                    return Dispatch::Consumed;
                }
                _ => {}
            }
        }

        // Unrecognized chords belong to the host.
        if !key.modifiers.is_empty() {
            self.fix_caret_eol();
            return Dispatch::Fallthrough;
        }

        // The physical page keys are deliberately left to host defaults.
        if matches!(key.code, KeyCode::PageUp | KeyCode::PageDown) {
            return Dispatch::Fallthrough;
        }

        // Keys without a resolved character (arrows, Enter, …) buffer
        // nothing but are still swallowed — normal mode owns its input.
        if let Some(ch) = key.code.char() {
            self.buffer_keypress(ch);
        }

        self.fix_caret_eol();
        Dispatch::Consumed
    }

    /// Buffer one character and attempt execution once a verb exists.
    ///
    /// `1`–`9` start or extend a count; `0` only extends one already in
    /// progress — a leading `0` is the line-start command. The first
    /// non-count character becomes the verb, later ones append to the args,
    /// and each of those keystrokes triggers an execution attempt. The
    /// executor's verdict decides whether the cycle ends: a handled command
    /// resets the buffer, an unrecognized one keeps the verb pending so
    /// multi-character commands can finish on a later key.
    fn buffer_keypress(&mut self, ch: char) {
        let verb = if let Some(pending) = self.buffer.command() {
            self.buffer.push_arg(ch);
            pending
        } else {
            if ch.is_ascii_digit() && (ch != '0' || self.buffer.has_count()) {
                self.buffer.push_digit(ch);
                return;
            }
            self.buffer.set_command(ch);
            ch
        };

        let count = self.buffer.count();
        trace!(
            "execute attempt: count={count} verb={verb:?} args={:?}",
            self.buffer.args()
        );
        match self
            .executor
            .execute(&mut self.host, count, verb, self.buffer.args())
        {
            ExecResult::NotHandled => {}
            ExecResult::Handled => self.buffer.finish_command(),
            ExecResult::Enter(mode) => {
                self.buffer.finish_command();
                self.set_mode(mode);
            }
        }
    }

    /// Never let the caret rest on a line terminator in normal mode.
    ///
    /// Steps left until the caret is off the terminator or at column 0.
    /// The mode check matters: an executed command may have just switched
    /// to Insert, where past-the-end positions are legal.
    fn fix_caret_eol(&mut self) {
        while self.mode == Mode::Normal
            && self.host.caret_column() > 0
            && self.host.char_at(self.host.caret()).is_some_and(is_eol)
        {
            self.host.caret_left();
        }
    }

    // ── Insert mode ─────────────────────────────────────────────────────

    fn insert_keypress(&mut self, key: &KeyEvent) -> Dispatch {
        if is_cancel(key) {
            self.set_mode(Mode::Normal);
            return Dispatch::Consumed;
        }

        // Everything else is ordinary typing — the host's job.
        Dispatch::Fallthrough
    }

    // ── Visual mode ─────────────────────────────────────────────────────

    fn visual_keypress(&mut self, key: &KeyEvent) -> Dispatch {
        if is_cancel(key) {
            // Leaving Visual clears the selection in set_mode.
            self.set_mode(Mode::Normal);
            return Dispatch::Consumed;
        }

        if key.modifiers.is_empty() {
            match key.code.char() {
                Some(ch @ ('j' | 'k')) => {
                    if let Some(sel) = self.selection.as_mut() {
                        if ch == 'j' {
                            sel.extend_down();
                        } else {
                            sel.extend_up();
                        }
                        let (start, end) = sel.line_range();
                        self.host.select_lines(start, end);
                    }
                }
                Some('d') => {
                    self.host.cut_selection();
                    self.set_mode(Mode::Normal);
                }
                Some('y' | 'Y') => {
                    self.host.copy_selection();
                    self.set_mode(Mode::Normal);
                }
                _ => {}
            }
        }

        // Visual mode consumes everything — no fallthrough.
        Dispatch::Consumed
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
