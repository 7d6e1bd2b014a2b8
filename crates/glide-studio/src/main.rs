use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use glide_engine::logging::{self, LoggingConfig};
use glide_ui::prelude::*;

/// Headless host: flags dirtiness and models the platform's recurring
/// frame-callback registration with a plain boolean.
#[derive(Default)]
struct ConsoleHost {
    dirty: bool,
    ticking: bool,
    next_ticker: u64,
}

impl IndicatorHost for ConsoleHost {
    fn request_redraw(&mut self) {
        self.dirty = true;
    }

    fn start_ticker(&mut self) -> TickerId {
        self.ticking = true;
        let id = TickerId(self.next_ticker);
        self.next_ticker += 1;
        id
    }

    fn cancel_ticker(&mut self, _ticker: TickerId) {
        self.ticking = false;
    }
}

const VIEW: Rect = Rect::new(0.0, 0.0, 240.0, 40.0);
const COLUMNS: usize = 72;

fn main() -> Result<()> {
    logging::init_logging(LoggingConfig::default());

    let pages: usize = match std::env::args().nth(1) {
        Some(arg) => arg
            .parse()
            .context("page count must be a non-negative integer")?,
        None => 5,
    };

    println!();
    println!("  glide — paging indicator demo · {pages} pages");
    println!();

    let style = IndicatorStyle::new()
        .spacing(6.0)
        .item_width(18.0)
        .item_color(Color::from_srgb_u8(90, 99, 112, 255))
        .selected_item_color(Color::from_srgb_u8(255, 122, 41, 255).with_alpha(0.9));

    let mut host = ConsoleHost::default();
    let mut indicator = PageIndicator::new(style);
    indicator.set_page_count(pages, &mut host);

    // Live gesture tracking: a drag reported as fractional page offsets.
    println!("  drag tracking:");
    for offset in [0.0, 0.35, 0.8, 1.0] {
        indicator.set_offset(offset, &mut host);
        present(&indicator, &mut host);
    }

    // Discrete jump driven by a real frame loop.
    let target = pages.saturating_sub(1);
    println!();
    println!("  jump to page {target}:");

    let mut clock = FrameClock::new();
    let mut frames = 0u32;
    indicator.set_page(target, clock.tick().now, &mut host);

    while host.ticking {
        thread::sleep(Duration::from_millis(32));
        indicator.on_frame(clock.tick().now, &mut host);
        present(&indicator, &mut host);
        frames += 1;
    }

    log::info!("jump to page {target} settled after {frames} frames");
    println!();

    Ok(())
}

/// Paints the current indicator state and prints the frame's command stream
/// as a fixed-width text strip.
fn present(indicator: &PageIndicator, host: &mut ConsoleHost) {
    if !host.dirty {
        return;
    }
    host.dirty = false;

    let mut draw_list = DrawList::new();
    let mut painter = Painter::new(&mut draw_list);

    // Backdrop panel with a hairline border, then the indicator on top.
    painter.fill_rounded_rect(
        VIEW,
        8.0,
        Color::from_srgb_u8(24, 26, 31, 255),
        Some(Border::new(1.0, Color::from_srgb_u8(58, 62, 70, 255))),
    );
    indicator.paint(&mut painter, VIEW);

    println!("    [{}]", strip(&mut draw_list));
}

/// Maps rounded-rect commands onto a character strip, widest-on-top in
/// paint order.
fn strip(draw_list: &mut DrawList) -> String {
    let mut cells = vec![' '; COLUMNS];
    let scale = COLUMNS as f32 / VIEW.size.x;

    for item in draw_list.iter_in_paint_order() {
        let DrawCmd::RoundedRect(cmd) = &item.cmd;

        // The backdrop spans the whole view; render it as a dotted floor.
        let glyph = if cmd.rect.size.x >= VIEW.size.x {
            '·'
        } else if cmd.rect.size.x > 20.0 {
            '█'
        } else {
            '▄'
        };

        let lo = (cmd.rect.min().x * scale).floor().max(0.0) as usize;
        let hi = (cmd.rect.max().x * scale).ceil().min(COLUMNS as f32) as usize;

        for cell in &mut cells[lo.min(COLUMNS)..hi] {
            *cell = glyph;
        }
    }

    cells.into_iter().collect()
}
