//! Terminal runner (default binary).
//!
//! Polls crossterm for key presses, feeds elapsed time to the board's ticker
//! and repaints whenever the board asks for it.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::config::parse_args;
use blockfall::core::{Board, EngineConfig};
use blockfall::input::{handle_key_event, should_quit};
use blockfall::term::{BoardView, FrameBuffer, TerminalRenderer, Viewport};
use blockfall::types::FRAME_MS;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: EngineConfig) -> Result<()> {
    let mut board = Board::with_config(config);
    board.start();

    let view = BoardView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut viewport = current_viewport();
    let mut needs_paint = true;

    let frame = Duration::from_millis(FRAME_MS as u64);
    let mut last_frame = Instant::now();

    loop {
        if needs_paint || board.take_redraw_request() {
            view.render_into(
                &board.snapshot(),
                board.status_sink().text(),
                viewport,
                &mut fb,
            );
            term.draw(&fb)?;
            needs_paint = false;
        }

        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        board.apply_action(action);
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                    needs_paint = true;
                }
                _ => {}
            }
        }

        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            board.update(elapsed.as_millis() as u32);
        }
    }
}

fn current_viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}
