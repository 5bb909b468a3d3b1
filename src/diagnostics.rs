//! Receivers for the per-pixel greyscale sums computed while thresholding.
//!
//! Sinks only observe. Pixel results are identical whichever sink is used.

pub trait DiagnosticsSink {
    fn greyscale(&mut self, x: u32, y: u32, sum: u16);
}

/// Discards every report.
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopSink;

impl DiagnosticsSink for NoopSink {
    #[inline]
    fn greyscale(&mut self, _x: u32, _y: u32, _sum: u16) {}
}

/// Forwards every report to the `log` facade at trace level.
#[derive(Debug, Default, Copy, Clone)]
pub struct LogSink;

impl DiagnosticsSink for LogSink {
    fn greyscale(&mut self, x: u32, y: u32, sum: u16) {
        log::trace!(target: "raster_image::threshold", "greyscale without alpha at ({x}, {y}): {sum}");
    }
}

impl<F> DiagnosticsSink for F
where
    F: FnMut(u32, u32, u16),
{
    fn greyscale(&mut self, x: u32, y: u32, sum: u16) {
        self(x, y, sum)
    }
}
