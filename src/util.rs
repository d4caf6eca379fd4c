use crate::error::Result;

/// Returns how many nodes a perfect tree with `height` levels holds.
pub(crate) fn full_tree_len(height: usize) -> usize {
    // Saturate instead of overflowing; no real tree gets near this height.
    1usize
        .checked_shl(height as u32)
        .map_or(usize::MAX, |n| n - 1)
}

/// Unwraps the result of an internal step at the boundary of a public
/// operation. The only errors internal steps produce are invariant
/// violations, which are bugs in the tree, so they are logged and turned
/// into a panic.
pub(crate) fn assert_invariant<R>(operation: &'static str, result: Result<R>) -> R {
    match result {
        Ok(r) => r,
        Err(err) => {
            log::error!("{}: {}", operation, err);
            panic!("{}: {}", operation, err)
        }
    }
}
