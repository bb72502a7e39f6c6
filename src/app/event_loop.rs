use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, update};
use crate::perf;

impl App {
    /// Run the main event loop.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal initialization, buffer allocation,
    /// or the event loop encounters an I/O failure.
    pub fn run(&self) -> Result<()> {
        let _run_scope = perf::scope("app.run.total");

        let init_start = Instant::now();
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - bytepad requires an interactive terminal")?;

        let result = terminal
            .size()
            .context("Failed to query terminal size")
            .and_then(|size| {
                perf::log_event(
                    "init.terminal",
                    format!(
                        "terminal={}x{} init_ms={:.3}",
                        size.width,
                        size.height,
                        perf::elapsed_ms(init_start)
                    ),
                );
                Model::new(
                    self.body_capacity,
                    self.status_capacity,
                    (size.width, size.height),
                )
                .context("Failed to allocate editor buffers")
            })
            .and_then(|mut model| {
                perf::log_event("init.model", format!("heap={}", model.heap_bytes()));
                Self::event_loop(&mut terminal, &mut model)
            });

        // Restore terminal
        ratatui::restore();

        result
    }

    fn dispatch(model: &mut Model, msg: Message, frame_idx: u64) {
        let start = Instant::now();
        *model = update(std::mem::take(model), msg);
        if perf::is_debug_log_enabled() {
            perf::log_event(
                "event.message",
                format!(
                    "frame={frame_idx} msg={msg:?} update_ms={:.3}",
                    perf::elapsed_ms(start)
                ),
            );
        }
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            // Handle events
            let poll_ms = if needs_render { 0 } else { 250 };
            if event::poll(Duration::from_millis(poll_ms))? {
                if let Some(msg) = Self::handle_event(&event::read()?, model) {
                    Self::dispatch(model, msg, frame_idx);
                    needs_render = true;
                }

                // Coalesce key repeat bursts into a single render.
                let mut drained = 0_u32;
                while !model.should_quit && event::poll(Duration::from_millis(0))? {
                    if let Some(msg) = Self::handle_event(&event::read()?, model) {
                        drained += 1;
                        Self::dispatch(model, msg, frame_idx);
                        needs_render = true;
                    }
                }
                if drained > 0 {
                    perf::log_event(
                        "event.drain",
                        format!("frame={frame_idx} drained={drained}"),
                    );
                }
            }

            if model.should_quit {
                break;
            }

            if needs_render {
                frame_idx += 1;

                let draw_start = Instant::now();
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                if perf::is_debug_log_enabled() {
                    perf::log_event(
                        "frame.draw",
                        format!(
                            "frame={} draw_ms={:.3} offset={}",
                            frame_idx,
                            perf::elapsed_ms(draw_start),
                            model.active().offset()
                        ),
                    );
                }
                needs_render = false;
            }
        }
        Ok(())
    }
}
