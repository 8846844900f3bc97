use anyhow::Result;
use unveil_page::Page;

use super::{Scenario, run_frames, run_until};

/// Loads the page, visits every anchor, submits the contact form and
/// tears the page down.
pub struct Walkthrough;

impl Scenario for Walkthrough {
    fn name(&self) -> &'static str {
        "walkthrough"
    }

    fn run(&mut self, page: &mut Page) -> Result<()> {
        run_until(page, 20_000.0, Page::is_loaded)?;
        log::info!("loading complete, bar at {}%", page.loading_percent());

        // Let the hero intro and nav entrance settle.
        run_frames(page, 240);
        log::info!(
            "active={:?} scroll_y={}",
            page.active_anchor(),
            page.viewport().scroll_y
        );

        let anchors: Vec<&'static str> = page.nav().items().iter().map(|i| i.anchor).collect();
        for anchor in anchors.iter().skip(1) {
            page.request_scroll(anchor);
            run_until(page, 20_000.0, |p| {
                !p.is_scrolling() && p.active_anchor() == Some(*anchor)
            })?;
            run_frames(page, 150);
            log::info!("visited {anchor}, scroll_y={}", page.viewport().scroll_y);
        }

        let form = page.form_mut();
        form.set_name("Visitor");
        form.set_email("visitor@example.com");
        form.set_message("Enjoyed the animations.");
        form.submit()?;
        run_until(page, 20_000.0, |p| !p.form().is_submitting())?;
        for note in page.drain_notifications() {
            log::info!("notification: {}: {}", note.title, note.body);
        }

        page.request_scroll("hero");
        run_until(page, 20_000.0, |p| !p.is_scrolling())?;

        let events = page.drain_events().count();
        log::info!("drained {events} engine events");

        page.teardown();
        let disposed = page.drain_events().filter(|e| e.is_disposed()).count();
        log::info!("disposed {disposed} reveals");
        Ok(())
    }
}
