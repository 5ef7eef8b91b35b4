/// Merges two sorted runs into a single sorted sequence.
///
/// - The output holds exactly `left.len() + right.len()` elements and is an
///   interleaving of both inputs: every element appears exactly once.
/// - Only strict `<` is consulted. On equal elements the right-hand run is
///   drained first, a deterministic tie-break but not left-stability.
/// - The output vector is pre-sized, so no reallocation happens mid-merge.
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut i = 0;
    let mut j = 0;

    while i < left.len() && j < right.len() {
        if left[i] < right[j] {
            out.push(left[i].clone());
            i += 1;
        } else {
            out.push(right[j].clone());
            j += 1;
        }
    }

    // At most one of these appends anything; the leftover run is already
    // sorted, so it goes out verbatim.
    out.extend_from_slice(&left[i..]);
    out.extend_from_slice(&right[j..]);
    out
}
