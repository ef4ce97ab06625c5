use serde::Serialize;

/// A byte range `[start, end)` into the message.
///
/// Extractors report the spans they claim instead of rewriting the message,
/// so the residual text is always derived from the same scan that produced
/// the structured blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns true if `other` lies entirely within this span.
    #[must_use]
    pub fn contains(self, other: Span) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Sorts spans and coalesces the ones that overlap or touch.
    ///
    /// Empty spans are dropped.
    pub fn merge_all(mut spans: Vec<Span>) -> Vec<Span> {
        spans.retain(|s| !s.is_empty());
        spans.sort();

        let mut out: Vec<Span> = Vec::with_capacity(spans.len());
        for sp in spans {
            match out.last_mut() {
                Some(last) if sp.start <= last.end => last.end = last.end.max(sp.end),
                _ => out.push(sp),
            }
        }
        out
    }

    /// Returns the complement of `spans` within `[0, total)`.
    ///
    /// `spans` must already be merged (sorted, non-overlapping).
    pub fn gaps(spans: &[Span], total: usize) -> Vec<Span> {
        let mut out = vec![];
        let mut at = 0;
        for sp in spans {
            if sp.start > at {
                out.push(Span::new(at, sp.start));
            }
            at = at.max(sp.end);
        }
        if at < total {
            out.push(Span::new(at, total));
        }
        out
    }
}
