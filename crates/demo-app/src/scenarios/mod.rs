use anyhow::Result;
use unveil_page::Page;

pub mod bounce;
pub mod walkthrough;

pub const FRAME_MS: f32 = 16.7;

/// A scripted run against the page, driven frame by frame.
pub trait Scenario {
    fn name(&self) -> &'static str;
    fn run(&mut self, page: &mut Page) -> Result<()>;
}

pub fn by_name(name: &str) -> Option<Box<dyn Scenario>> {
    match name {
        "walkthrough" => Some(Box::new(walkthrough::Walkthrough)),
        "bounce" => Some(Box::new(bounce::Bounce::default())),
        _ => None,
    }
}

/// Advance `page` a fixed number of frames.
pub fn run_frames(page: &mut Page, frames: usize) {
    for _ in 0..frames {
        page.update(FRAME_MS);
    }
}

/// Advance `page` until `done` holds, failing past `limit_ms`.
pub fn run_until(page: &mut Page, limit_ms: f32, mut done: impl FnMut(&Page) -> bool) -> Result<()> {
    let mut elapsed = 0.0;
    while !done(page) {
        if elapsed >= limit_ms {
            anyhow::bail!("page stalled after {elapsed}ms");
        }
        page.update(FRAME_MS);
        elapsed += FRAME_MS;
    }
    Ok(())
}
