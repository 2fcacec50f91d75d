//! Project gallery paging state.
//!
//! The gallery is a plain paging cursor over the project list: a few
//! slides are visible at once (by viewport width), the page advances on
//! a timer and wraps around when looping is enabled. All the numbers come
//! from [`GalleryConfig`].

use folio::GalleryConfig;

/// Paging cursor for the project gallery.
#[derive(Debug, Clone, Copy, Default)]
pub struct GalleryState {
    page: usize,
    last_advance: f64,
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages needed to show `total` slides at `width`.
    pub fn page_count(config: &GalleryConfig, total: usize, width: f32) -> usize {
        let per_page = config.slides_for_width(width).max(1);
        total.div_ceil(per_page).max(1)
    }

    /// Advances one page when the autoplay delay elapsed.
    ///
    /// Returns true when the page changed. Without looping the cursor
    /// parks on the last page.
    pub fn maybe_advance(
        &mut self,
        config: &GalleryConfig,
        total: usize,
        width: f32,
        now: f64,
    ) -> bool {
        if now - self.last_advance < config.autoplay_delay {
            return false;
        }
        self.last_advance = now;

        let pages = Self::page_count(config, total, width);
        let next = if self.page + 1 >= pages {
            if config.looping { 0 } else { self.page }
        } else {
            self.page + 1
        };

        let changed = next != self.page;
        self.page = next;
        changed
    }

    /// Jumps to a page (pagination dot click) and restarts the autoplay
    /// delay so the selection is not immediately advanced away.
    pub fn select_page(&mut self, page: usize, config: &GalleryConfig, total: usize, width: f32, now: f64) {
        let pages = Self::page_count(config, total, width);
        self.page = page.min(pages.saturating_sub(1));
        self.last_advance = now;
    }

    /// Clamps the cursor after a resize changed the page count.
    pub fn clamp_to(&mut self, config: &GalleryConfig, total: usize, width: f32) {
        let pages = Self::page_count(config, total, width);
        if self.page >= pages {
            self.page = pages - 1;
        }
    }
}
