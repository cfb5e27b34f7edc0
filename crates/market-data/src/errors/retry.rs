/// Classification for retry policy.
///
/// Used by the registry to decide what to do after a provider fails.
///
/// | Class | Retry same provider? | Try next provider? |
/// |-------|----------------------|--------------------|
/// | `Never` | No | No |
/// | `WithBackoff` | Once, after a short delay | Yes |
/// | `NextProvider` | No | Yes |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RetryClass {
    /// The request is fundamentally invalid and retrying won't help.
    Never,

    /// Transient failure (rate limit, timeout). Worth one more attempt
    /// against the same provider before moving on.
    WithBackoff,

    /// This provider can't serve the request but another one might.
    NextProvider,
}
