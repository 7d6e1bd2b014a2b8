/// Opaque handle to a recurring frame-tick registration.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TickerId(pub u64);

/// Services an embedding view provides to a
/// [`PageIndicator`](crate::indicator::PageIndicator).
///
/// Everything here runs on the host's render thread; the indicator is
/// single-threaded by contract and never paints or blocks inside these
/// calls.
pub trait IndicatorHost {
    /// Marks the hosting view dirty. Painting happens later in the host's
    /// render pass, which supplies the target rectangle to
    /// [`PageIndicator::paint`](crate::indicator::PageIndicator::paint).
    fn request_redraw(&mut self);

    /// Begins a recurring display-refresh callback. While a registration is
    /// live the host calls
    /// [`PageIndicator::on_frame`](crate::indicator::PageIndicator::on_frame)
    /// once per refresh, passing the current frame timestamp.
    ///
    /// The refresh interval is not guaranteed; consumers measure elapsed
    /// time instead of counting invocations.
    fn start_ticker(&mut self) -> TickerId;

    /// Cancels a registration returned by
    /// [`start_ticker`](IndicatorHost::start_ticker). Canceling an already
    /// finished registration must be harmless.
    fn cancel_ticker(&mut self, ticker: TickerId);
}
