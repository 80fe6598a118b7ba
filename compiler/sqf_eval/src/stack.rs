//! Native stack growth for nested statements.
//!
//! Every nested statement adds a few evaluator frames, and a long operator
//! chain nests once per operator. `stacker` moves evaluation onto a fresh
//! segment whenever the remaining stack runs low.

/// Remaining stack below which a new segment is allocated.
#[cfg(not(target_arch = "wasm32"))]
const HEADROOM: usize = 128 * 1024;

/// Size of each newly allocated segment.
#[cfg(not(target_arch = "wasm32"))]
const SEGMENT: usize = 2 * 1024 * 1024;

/// Run one level of statement evaluation with enough native stack.
///
/// wasm32 manages its own stack; there `evaluate` is called directly.
#[inline]
pub(crate) fn with_stack_headroom<R>(evaluate: impl FnOnce() -> R) -> R {
    #[cfg(not(target_arch = "wasm32"))]
    {
        stacker::maybe_grow(HEADROOM, SEGMENT, evaluate)
    }
    #[cfg(target_arch = "wasm32")]
    {
        evaluate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nesting(depth: u32) -> u32 {
        with_stack_headroom(|| if depth == 0 { 0 } else { nesting(depth - 1) + 1 })
    }

    #[test]
    fn grows_past_the_thread_stack() {
        assert_eq!(nesting(100_000), 100_000);
    }

    #[test]
    fn passes_results_through() {
        let outcome: Result<u8, &str> = with_stack_headroom(|| Err("stop"));
        assert_eq!(outcome, Err("stop"));
    }
}
