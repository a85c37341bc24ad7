//! Forwarding calls across the module boundary to a high-five partner.

/// A collaborator that "high-fives" an integer.
///
/// The partner is expected to compute `p + 5`, but the caller never checks:
/// whatever the partner returns is passed back unchanged.
pub trait HighFive {
    fn high_five(&self, p: i32) -> i32;
}

impl<F> HighFive for F
where
    F: Fn(i32) -> i32,
{
    #[inline]
    fn high_five(&self, p: i32) -> i32 {
        self(p)
    }
}

/// Calls into a partner module that owns the high-five function.
#[derive(Debug, Clone, Copy, Default)]
pub struct CrossCaller<H> {
    partner: H,
}

impl<H: HighFive> CrossCaller<H> {
    pub fn new(partner: H) -> Self {
        Self { partner }
    }

    /// Invokes the partner with `p` and returns its result as-is.
    pub fn call(&self, p: i32) -> i32 {
        let ret = self.partner.high_five(p);
        tracing::info!(p, ret, "calling_partner");
        ret
    }
}
