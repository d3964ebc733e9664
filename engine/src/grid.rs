//! Grid helpers shared by the win strategies.

/// Transpose a column-major grid into row-major order.
///
/// `columns[i][j]` becomes `result[j][i]`. All columns must have equal
/// length. An empty input, or one whose first column is empty, yields an
/// empty result rather than an error.
pub fn transpose<T: Clone>(columns: &[Vec<T>]) -> Vec<Vec<T>> {
    let rows = match columns.first() {
        Some(first) if !first.is_empty() => first.len(),
        _ => return Vec::new(),
    };
    debug_assert!(columns.iter().all(|c| c.len() == rows));

    let mut result = vec![Vec::with_capacity(columns.len()); rows];
    for column in columns {
        for (j, item) in column.iter().take(rows).enumerate() {
            result[j].push(item.clone());
        }
    }
    result
}

/// Find the longest run of consecutive integers in `positions`.
///
/// Positions are sorted ascending and scanned once. On ties the
/// earliest-occurring maximal run wins (strictly-greater comparison),
/// which keeps payouts deterministic. Empty input yields an empty run.
pub fn longest_run(positions: &[usize]) -> Vec<usize> {
    let mut sorted = positions.to_vec();
    sorted.sort_unstable();

    let Some(&first) = sorted.first() else {
        return Vec::new();
    };

    let mut current = vec![first];
    let mut longest = vec![first];
    let mut prev = first;

    for &pos in &sorted[1..] {
        if pos == prev + 1 {
            current.push(pos);
        } else {
            current = vec![pos];
        }
        if current.len() > longest.len() {
            longest = current.clone();
        }
        prev = pos;
    }

    longest
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_transpose_basic() {
        let columns = vec![vec![1, 2, 3], vec![4, 5, 6]];
        assert_eq!(transpose(&columns), vec![vec![1, 4], vec![2, 5], vec![3, 6]]);
    }

    #[test]
    fn test_transpose_empty() {
        let empty: Vec<Vec<u8>> = vec![];
        assert!(transpose(&empty).is_empty());
        assert!(transpose(&[Vec::<u8>::new()]).is_empty());
    }

    #[test]
    fn test_transpose_single_column() {
        let columns = vec![vec!['a', 'b', 'c']];
        assert_eq!(transpose(&columns), vec![vec!['a'], vec!['b'], vec!['c']]);
    }

    #[test]
    fn test_longest_run_empty() {
        assert!(longest_run(&[]).is_empty());
    }

    #[test]
    fn test_longest_run_singleton() {
        assert_eq!(longest_run(&[5]), vec![5]);
    }

    #[test]
    fn test_longest_run_first_max_wins_tie() {
        // {0,1,2} and {4,5} - the longer run wins; {0,1,2} vs {4,5,6} of
        // equal length keeps the earlier one.
        assert_eq!(longest_run(&[0, 1, 2, 4, 5]), vec![0, 1, 2]);
        assert_eq!(longest_run(&[0, 1, 2, 4, 5, 6]), vec![0, 1, 2]);
    }

    #[test]
    fn test_longest_run_later_longer_run() {
        assert_eq!(longest_run(&[0, 1, 3, 4, 5]), vec![3, 4, 5]);
    }

    #[test]
    fn test_longest_run_unsorted_input() {
        assert_eq!(longest_run(&[5, 0, 4, 1, 2]), vec![0, 1, 2]);
    }

    #[test]
    fn test_longest_run_no_consecutive() {
        assert_eq!(longest_run(&[2, 4, 8]), vec![2]);
    }

    proptest! {
        #[test]
        fn prop_transpose_involution(grid in proptest::collection::vec(
            proptest::collection::vec(any::<u8>(), 4),
            1..6,
        )) {
            // Fixed row count keeps the dimensions consistent.
            prop_assert_eq!(transpose(&transpose(&grid)), grid);
        }

        #[test]
        fn prop_longest_run_is_consecutive(positions in proptest::collection::btree_set(0usize..64, 0..16)) {
            let positions: Vec<usize> = positions.into_iter().collect();
            let run = longest_run(&positions);
            for pair in run.windows(2) {
                prop_assert_eq!(pair[1], pair[0] + 1);
            }
            if !positions.is_empty() {
                prop_assert!(!run.is_empty());
            }
        }
    }
}
