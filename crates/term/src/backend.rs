//! TerminalBackend: a `Backend` that draws into the terminal and reads
//! keyboard and mouse input through crossterm.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal;
use tracing::trace;

use gridgame_core::{Backend, Surface};
use gridgame_input::{raw_from_mouse, translate_key, KeyTracker};

use crate::fb::FrameBuffer;
use crate::renderer::TerminalRenderer;
use crate::types::{Key, RawEvent};
use crate::view::{SurfaceView, Viewport};

/// Fallback when the terminal size cannot be queried.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

pub struct TerminalBackend {
    renderer: TerminalRenderer,
    view: SurfaceView,
    fb: FrameBuffer,
    tracker: KeyTracker,
    active: bool,
}

impl TerminalBackend {
    /// Take over the terminal. It is restored on [`restore`](Self::restore)
    /// or on drop.
    pub fn new() -> io::Result<Self> {
        Self::with_view(SurfaceView::default())
    }

    pub fn with_view(view: SurfaceView) -> io::Result<Self> {
        let mut renderer = TerminalRenderer::new();
        renderer.enter()?;

        let mut tracker = KeyTracker::new();
        tracker.set_release_events(renderer.keyboard_enhanced());

        Ok(Self {
            renderer,
            view,
            fb: FrameBuffer::new(0, 0),
            tracker,
            active: true,
        })
    }

    /// Give the terminal back. Safe to call more than once.
    pub fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        self.renderer.exit()
    }
}

impl Backend for TerminalBackend {
    fn present(&mut self, surface: &Surface) -> io::Result<()> {
        let (w, h) = terminal::size().unwrap_or(FALLBACK_SIZE);
        self.view.render_into(surface, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }

    fn poll_events(&mut self, out: &mut Vec<RawEvent>) -> io::Result<()> {
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) => translate_key(&key, &mut self.tracker, out),
                Event::Mouse(mouse) => {
                    if let Some(raw) = raw_from_mouse(&mouse) {
                        out.push(raw);
                    }
                }
                Event::Resize(w, h) => {
                    trace!(w, h, "terminal resized");
                    self.renderer.invalidate();
                    out.push(RawEvent::Resize);
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn pressed_keys(&mut self) -> Vec<Key> {
        self.tracker.pressed()
    }
}

impl Drop for TerminalBackend {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Current terminal size in columns and rows.
pub fn terminal_size() -> (u16, u16) {
    terminal::size().unwrap_or(FALLBACK_SIZE)
}

/// Shrink `dimensions` so a grid of `cell_size` cells fits in `available`
/// terminal cells. Each axis keeps at least one cell.
pub fn fit_within(dimensions: (u16, u16), cell_size: (u16, u16), available: (u16, u16)) -> (u16, u16) {
    let fit = |want: u16, cell: u16, room: u16| want.min(room / cell.max(1)).max(1);
    (
        fit(dimensions.0, cell_size.0, available.0),
        fit(dimensions.1, cell_size.1, available.1),
    )
}
