use std::time::Instant;

use glide_engine::coords::{Rect, Vec2};

use crate::animator::Animator;
use crate::drawer::Drawer;
use crate::drawers::ExtendedLineDrawer;
use crate::host::{IndicatorHost, TickerId};
use crate::painter::Painter;
use crate::style::IndicatorStyle;

/// Animated paging indicator.
///
/// Owns a drawing strategy (default [`ExtendedLineDrawer`]) and the
/// page-jump driver. A host embeds it by implementing
/// [`IndicatorHost`] and, while the indicator holds a ticker registration,
/// forwarding one [`on_frame`](PageIndicator::on_frame) call per display
/// refresh.
///
/// Two navigation paths:
/// - [`set_offset`](PageIndicator::set_offset) — direct, unanimated; for
///   live gesture tracking.
/// - [`set_page`](PageIndicator::set_page) — discrete jump, animated over a
///   fixed 0.2 s.
pub struct PageIndicator {
    drawer: Box<dyn Drawer>,
    animator: Animator,
    ticker: Option<TickerId>,
}

impl PageIndicator {
    pub fn new(style: IndicatorStyle) -> Self {
        Self::with_drawer(Box::new(ExtendedLineDrawer::new(style)))
    }

    /// Builds an indicator over a custom drawing strategy.
    pub fn with_drawer(drawer: Box<dyn Drawer>) -> Self {
        Self {
            drawer,
            animator: Animator::new(),
            ticker: None,
        }
    }

    pub fn page_count(&self) -> usize {
        self.drawer.page_count()
    }

    /// Sets the number of pages and marks the view dirty.
    pub fn set_page_count(&mut self, count: usize, host: &mut dyn IndicatorHost) {
        self.drawer.set_page_count(count);
        host.request_redraw();
    }

    /// Current fractional position. Integer = settled page, fractional =
    /// mid-transition.
    pub fn current_item(&self) -> f32 {
        self.drawer.current_item()
    }

    /// Direct, unanimated positioning — the live gesture-tracking path.
    ///
    /// Takes effect immediately and requests a redraw synchronously. A
    /// running page jump is not cancelled; its next tick overwrites this
    /// offset.
    pub fn set_offset(&mut self, offset: f32, host: &mut dyn IndicatorHost) {
        self.drawer.set_current_item(offset);
        host.request_redraw();
    }

    /// Animated jump to `index`.
    ///
    /// Requesting the already pending target is a no-op. A different target
    /// supersedes a running jump: the ramp restarts from the rounded
    /// in-flight position and the ticker registration is replaced, never
    /// stacked.
    pub fn set_page(&mut self, index: usize, now: Instant, host: &mut dyn IndicatorHost) {
        if self
            .animator
            .request(self.drawer.current_item(), index as f32, now)
        {
            self.replace_ticker(host);
        }
    }

    /// Per-display-refresh tick. Call once per refresh while a ticker
    /// registration is live; harmless when idle.
    pub fn on_frame(&mut self, now: Instant, host: &mut dyn IndicatorHost) {
        let Some(tick) = self.animator.tick(now) else {
            return;
        };

        self.drawer.set_current_item(tick.position);

        if tick.finished {
            self.stop_ticker(host);
        }

        host.request_redraw();
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_running()
    }

    /// Preferred (intrinsic) size for host layout.
    pub fn preferred_size(&self) -> Vec2 {
        self.drawer.content_size()
    }

    /// Emits this frame's draw commands into `rect`.
    pub fn paint(&self, painter: &mut Painter, rect: Rect) {
        self.drawer.paint(painter, rect);
    }

    pub fn drawer(&self) -> &dyn Drawer {
        self.drawer.as_ref()
    }

    pub fn drawer_mut(&mut self) -> &mut dyn Drawer {
        self.drawer.as_mut()
    }

    /// Replaces the drawing strategy. Indicator state (page count, current
    /// item) lives in the drawer, so the replacement starts from its own
    /// state.
    pub fn set_drawer(&mut self, drawer: Box<dyn Drawer>) {
        self.drawer = drawer;
    }

    fn replace_ticker(&mut self, host: &mut dyn IndicatorHost) {
        self.stop_ticker(host);
        self.ticker = Some(host.start_ticker());
    }

    fn stop_ticker(&mut self, host: &mut dyn IndicatorHost) {
        if let Some(ticker) = self.ticker.take() {
            host.cancel_ticker(ticker);
        }
    }
}

impl Default for PageIndicator {
    fn default() -> Self {
        Self::new(IndicatorStyle::new())
    }
}
