use anyhow::Result;
use unveil_page::Page;
use unveil_scroll::{EngineEvent, RevealEvent};

use super::{Scenario, run_frames, run_until};

/// Oscillates between two sections fast enough to interrupt entrances
/// mid-flight, exercising replay and reversal.
pub struct Bounce {
    pub cycles: usize,
}

impl Default for Bounce {
    fn default() -> Self {
        Self { cycles: 4 }
    }
}

impl Scenario for Bounce {
    fn name(&self) -> &'static str {
        "bounce"
    }

    fn run(&mut self, page: &mut Page) -> Result<()> {
        run_until(page, 20_000.0, Page::is_loaded)?;
        run_frames(page, 60);
        page.drain_events().count();

        let mut enters = 0usize;
        let mut exits = 0usize;
        for cycle in 0..self.cycles {
            page.request_scroll("about");
            run_frames(page, 70);
            page.request_scroll("hero");
            run_frames(page, 70);

            for event in page.drain_events() {
                match event {
                    EngineEvent::Reveal(RevealEvent::EnterStarted { .. }) => enters += 1,
                    EngineEvent::Reveal(RevealEvent::ExitStarted { .. }) => exits += 1,
                    _ => {}
                }
            }
            log::info!("cycle={cycle} enters={enters} exits={exits}");
        }

        // Settle on the about section so the last entrance completes.
        page.request_scroll("about");
        run_until(page, 20_000.0, |p| {
            !p.is_scrolling() && p.active_anchor() == Some("about")
        })?;
        run_frames(page, 150);

        page.teardown();
        page.drain_events().count();
        Ok(())
    }
}
