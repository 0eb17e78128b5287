//! Stable merge sort of the render order.
//!
//! Top-down: split at the midpoint, sort each half, merge through the scratch
//! buffer. Ties take from the left run, which keeps equal keys in queue order.
//! Recursion depth is `log2(n)`; nothing is allocated.

use super::sort_key::SortKey;

/// Sorts `order` ascending by `keys[order[i]]`.
///
/// `scratch` must be at least as long as `order`; every index in `order`
/// must be a valid index into `keys`.
pub fn sort_render_order(order: &mut [u16], scratch: &mut [u16], keys: &[SortKey]) {
    let len = order.len();
    sort_run(order, &mut scratch[..len], keys);
}

fn sort_run(order: &mut [u16], scratch: &mut [u16], keys: &[SortKey]) {
    let len = order.len();
    if len < 2 {
        return;
    }

    let middle = len / 2;
    {
        let (left, right) = order.split_at_mut(middle);
        let (left_scratch, right_scratch) = scratch.split_at_mut(middle);
        sort_run(left, left_scratch, keys);
        sort_run(right, right_scratch, keys);
    }

    let (left, right) = order.split_at(middle);
    let mut a = 0;
    let mut b = 0;
    let mut output = 0;

    while a < left.len() && b < right.len() {
        if keys[usize::from(left[a])] <= keys[usize::from(right[b])] {
            scratch[output] = left[a];
            a += 1;
        } else {
            scratch[output] = right[b];
            b += 1;
        }
        output += 1;
    }

    let left_tail = &left[a..];
    scratch[output..output + left_tail.len()].copy_from_slice(left_tail);
    output += left_tail.len();
    scratch[output..].copy_from_slice(&right[b..]);

    order.copy_from_slice(scratch);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(keys: &[u32]) -> Vec<u16> {
        let keys: Vec<SortKey> = keys.iter().copied().map(SortKey::from_raw).collect();
        let mut order: Vec<u16> = (0..u16::try_from(keys.len()).unwrap()).collect();
        let mut scratch = vec![0; order.len()];
        sort_render_order(&mut order, &mut scratch, &keys);
        order
    }

    #[test]
    fn test_sorts_ascending() {
        assert_eq!(sorted(&[5, 3, 9, 1, 7]), vec![3, 1, 0, 4, 2]);
    }

    #[test]
    fn test_equal_keys_keep_queue_order() {
        assert_eq!(sorted(&[2, 1, 2, 1, 2, 1]), vec![1, 3, 5, 0, 2, 4]);
    }

    #[test]
    fn test_trivial_inputs() {
        assert!(sorted(&[]).is_empty());
        assert_eq!(sorted(&[4]), vec![0]);
    }

    #[test]
    fn test_order_indirection() {
        // Only some objects are queued, in arbitrary order.
        let keys = [50, 0, 10, 40, 20].map(SortKey::from_raw);
        let mut order = vec![3, 0, 4, 2];
        let mut scratch = vec![0; keys.len()];
        sort_render_order(&mut order, &mut scratch, &keys);
        assert_eq!(order, vec![2, 4, 3, 0]);
    }

    #[test]
    fn test_stable_over_many_runs() {
        // Deterministic pseudo-random keys with heavy duplication.
        let mut state = 0x2545_f491_u32;
        let keys: Vec<u32> = (0..500)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 17;
                state ^= state << 5;
                state % 7
            })
            .collect();

        let order = sorted(&keys);
        for pair in order.windows(2) {
            let (x, y) = (usize::from(pair[0]), usize::from(pair[1]));
            assert!(keys[x] <= keys[y]);
            if keys[x] == keys[y] {
                assert!(x < y, "equal keys reordered");
            }
        }
    }
}
