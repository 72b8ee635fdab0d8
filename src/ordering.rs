//! Helpers to build tile orderings.

// Copyright (C) 2023 Dheatly23
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use rand::prelude::*;

use crate::validate::is_permutation;

/// Ordering that leaves every tile in place.
pub fn identity(n: usize) -> Vec<usize> {
    (0..n).collect()
}

/// Inverse of an ordering.
///
/// Rearranging with `ordering` then with the inverse gives back the source.
/// Returns [None] if `ordering` is not a permutation of `0..ordering.len()`.
pub fn inverse(ordering: &[usize]) -> Option<Vec<usize>> {
    if !is_permutation(ordering, ordering.len()) {
        return None;
    }

    let mut ret = vec![0; ordering.len()];
    for (i, &v) in ordering.iter().enumerate() {
        ret[v] = i;
    }
    Some(ret)
}

/// Random ordering of `n` tiles.
pub fn shuffled<R: Rng + ?Sized>(n: usize, random: &mut R) -> Vec<usize> {
    let mut ret = identity(n);
    ret.shuffle(random);
    ret
}

#[cfg(test)]
mod tests {
    use super::*;

    use rand_xoshiro::Xoshiro256StarStar;

    #[test]
    fn test_identity() {
        assert_eq!(identity(0), Vec::<usize>::new());
        assert_eq!(identity(4), [0, 1, 2, 3]);
    }

    #[test]
    fn test_inverse() {
        assert_eq!(inverse(&[1, 2, 0]).unwrap(), [2, 0, 1]);
        assert_eq!(inverse(&[3, 2, 1, 0]).unwrap(), [3, 2, 1, 0]);
        assert_eq!(inverse(&[]).unwrap(), Vec::<usize>::new());
    }

    #[test]
    fn test_inverse_rejects_non_permutation() {
        assert_eq!(inverse(&[0, 0]), None);
        assert_eq!(inverse(&[0, 2]), None);
    }

    #[test]
    fn test_shuffled_is_permutation() {
        let mut random = Xoshiro256StarStar::seed_from_u64(42);

        for n in [0, 1, 7, 64] {
            let mut v = shuffled(n, &mut random);
            v.sort_unstable();
            assert_eq!(v, identity(n));
        }
    }

    #[test]
    fn test_shuffled_is_seeded() {
        let a = shuffled(32, &mut Xoshiro256StarStar::seed_from_u64(7));
        let b = shuffled(32, &mut Xoshiro256StarStar::seed_from_u64(7));

        assert_eq!(a, b);
    }
}
