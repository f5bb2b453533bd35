use std::collections::BTreeSet;

use subscout_common::Subdomain;

/// Merges the contributions of all sources.
///
/// The result holds every name exactly once, sorted lexicographically, so the
/// same inputs always produce the same sequence regardless of their order.
pub fn aggregate<I, S>(sets: I) -> Vec<Subdomain>
where
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = Subdomain>,
{
    let union: BTreeSet<Subdomain> = sets.into_iter().flatten().collect();
    union.into_iter().collect()
}
