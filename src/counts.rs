use crate::Identity;

/// Identity-frequency table over one cell's neighborhood.
///
/// A flat array keyed by identity tag, so the caching pass merges and
/// reads without hashing. A table covers at most 8 neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IdentityCounts([u8; Identity::COUNT]);

impl IdentityCounts {
    pub fn count(&self, identity: Identity) -> u8 {
        self.0[identity.index()]
    }

    pub fn add(&mut self, identity: Identity) {
        self.0[identity.index()] += 1;
    }

    /// Elementwise sum of two tables.
    pub fn merged(&self, other: &Self) -> Self {
        let mut out = *self;
        for (dst, src) in out.0.iter_mut().zip(other.0.iter()) {
            *dst += src;
        }
        out
    }

    pub fn total(&self) -> u8 {
        self.0.iter().sum()
    }

    /// True when every counted neighbor is Inactive.
    pub fn only_inactive(&self) -> bool {
        Identity::ALL
            .into_iter()
            .filter(|&identity| identity != Identity::Inactive)
            .all(|identity| self.count(identity) == 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merged_sums_elementwise() {
        let mut a = IdentityCounts::default();
        a.add(Identity::Live);
        a.add(Identity::Live);
        a.add(Identity::Fire);

        let mut b = IdentityCounts::default();
        b.add(Identity::Live);
        b.add(Identity::Water);

        let m = a.merged(&b);
        assert_eq!(m.count(Identity::Live), 3);
        assert_eq!(m.count(Identity::Fire), 1);
        assert_eq!(m.count(Identity::Water), 1);
        assert_eq!(m.count(Identity::Inactive), 0);
        assert_eq!(m.total(), 5);
    }

    #[test]
    fn only_inactive_ignores_inactive_count() {
        let mut t = IdentityCounts::default();
        for _ in 0..8 {
            t.add(Identity::Inactive);
        }
        assert!(t.only_inactive());

        t.add(Identity::Water);
        assert!(!t.only_inactive());
    }
}
