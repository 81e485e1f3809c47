//! URL sets, and the symmetric-difference engine at the center of the
//! pipeline.

use fxhash::FxBuildHasher;
use indexmap::IndexSet;

/// A set of distinct URL strings.
///
/// Backed by an [`IndexSet`], so membership is hash-based but
/// iteration order is the deterministic first-insertion order: reruns
/// over the same inputs emit the same bytes without any sorting.
pub type UrlSet = IndexSet<String, FxBuildHasher>;

/// The values present in exactly one of `a` and `b`.
///
/// Pure, and O(|a|+|b|) expected: hash membership decides, and
/// equality is exact string equality on the upstream-trimmed values,
/// with no case folding and no URL canonicalization. A value in both
/// inputs is never in the result. The result iterates
/// deterministically: members only in `a` first, in `a`'s order, then
/// members only in `b`, in `b`'s order.
#[must_use]
pub fn symmetric_difference(a: &UrlSet, b: &UrlSet) -> UrlSet {
    a.symmetric_difference(b).cloned().collect()
}
