use rand::Rng;
use serde::{Deserialize, Serialize};

use std::fmt;

/// A fixed-length bit string split into groups of fixed width,
/// each group encoding one unsigned integer.
///
/// Crossover exchanges whole groups between parents,
/// while mutation flips individual bits.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GroupedBits {
    bits: Vec<bool>,
    groups: Vec<usize>,
}

impl GroupedBits {
    /// Returns a uniformly random bit string with
    /// the specified group widths.
    ///
    /// # Panics
    /// Panics if any group width is 0 or greater than 64.
    ///
    /// # Examples
    /// ```
    /// use darwinian::GroupedBits;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let bits = GroupedBits::random(&[6, 6, 6, 6], &mut StdRng::seed_from_u64(0));
    /// assert_eq!(bits.len(), 24);
    /// assert!(bits.group_value(3) < 64);
    /// ```
    pub fn random<R: Rng + ?Sized>(groups: &[usize], rng: &mut R) -> GroupedBits {
        check_widths(groups);
        let length: usize = groups.iter().sum();
        GroupedBits {
            bits: (0..length).map(|_| rng.gen()).collect(),
            groups: groups.to_vec(),
        }
    }

    /// Returns a bit string encoding each of `values` in
    /// the group of the same index, most significant bit first.
    ///
    /// # Panics
    /// Panics if the slices differ in length, any group width is
    /// 0 or greater than 64, or a value does not fit its group.
    ///
    /// # Examples
    /// ```
    /// use darwinian::GroupedBits;
    ///
    /// let bits = GroupedBits::from_values(&[3, 2], &[5, 1]);
    /// assert_eq!(bits.to_string(), "10101");
    /// assert_eq!(bits.group_value(0), 5);
    /// ```
    pub fn from_values(groups: &[usize], values: &[u64]) -> GroupedBits {
        check_widths(groups);
        assert_eq!(
            groups.len(),
            values.len(),
            "expected one value per bit group"
        );
        let mut bits = Vec::with_capacity(groups.iter().sum());
        for (width, value) in groups.iter().zip(values) {
            assert!(
                *width == 64 || *value < 1 << width,
                "value {} does not fit in {} bits",
                value, width
            );
            bits.extend((0..*width).rev().map(|b| value >> b & 1 == 1));
        }
        GroupedBits {
            bits,
            groups: groups.to_vec(),
        }
    }

    /// Returns the total number of bits.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Returns whether the bit string is empty.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Returns the group widths.
    pub fn groups(&self) -> &[usize] {
        &self.groups
    }

    /// Returns the number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Returns the raw bits.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    /// Decodes the `index`th group as an unsigned
    /// integer, most significant bit first.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds.
    pub fn group_value(&self, index: usize) -> u64 {
        let start: usize = self.groups[..index].iter().sum();
        self.bits[start..start + self.groups[index]]
            .iter()
            .fold(0, |value, bit| value << 1 | u64::from(*bit))
    }

    /// Returns a child taking its groups alternately from
    /// each parent, starting with the first group of `self`.
    ///
    /// # Panics
    /// Panics if the parents have different group layouts.
    pub fn crossover(&self, other: &GroupedBits) -> GroupedBits {
        assert_eq!(
            self.groups, other.groups,
            "crossover of bit strings with different group layouts"
        );
        let mut bits = Vec::with_capacity(self.len());
        let mut start = 0;
        for (index, width) in self.groups.iter().enumerate() {
            let parent = if index % 2 == 0 { self } else { other };
            bits.extend_from_slice(&parent.bits[start..start + width]);
            start += width;
        }
        GroupedBits {
            bits,
            groups: self.groups.clone(),
        }
    }

    /// Flips every bit independently with probability `flip_chance`.
    pub fn mutate<R: Rng + ?Sized>(&mut self, flip_chance: f64, rng: &mut R) {
        for bit in self.bits.iter_mut() {
            if rng.gen::<f64>() < flip_chance {
                *bit = !*bit;
            }
        }
    }
}

fn check_widths(groups: &[usize]) {
    assert!(
        groups.iter().all(|w| (1..=64).contains(w)),
        "bit group widths must be between 1 and 64, got {:?}",
        groups
    );
}

impl fmt::Display for GroupedBits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in &self.bits {
            write!(f, "{}", if *bit { '1' } else { '0' })?;
        }
        Ok(())
    }
}
