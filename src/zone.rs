//! LED zone identifiers and sets.

/// Maximum number of zones a [`ZoneSet`] can address.
pub const MAX_ZONES: u8 = 32;

/// Identifier of a group of LEDs that are switched together.
///
/// Valid ids are `0..MAX_ZONES`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneId(pub u8);

impl From<u8> for ZoneId {
    fn from(id: u8) -> Self {
        ZoneId(id)
    }
}

impl From<ZoneId> for u8 {
    fn from(id: ZoneId) -> Self {
        id.0
    }
}

/// A set of zones, stored as a bit mask.
///
/// Ids at or above [`MAX_ZONES`] are ignored on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ZoneSet(u32);

impl ZoneSet {
    /// The empty set.
    pub const fn empty() -> Self {
        ZoneSet(0)
    }

    /// Builds a set from a list of zone ids.
    pub const fn of(zones: &[ZoneId]) -> Self {
        let mut set = ZoneSet::empty();
        let mut i = 0;
        while i < zones.len() {
            set = set.with(zones[i]);
            i += 1;
        }
        set
    }

    /// Returns a copy of this set with `zone` added.
    pub const fn with(self, zone: ZoneId) -> Self {
        if zone.0 < MAX_ZONES {
            ZoneSet(self.0 | (1 << zone.0))
        } else {
            self
        }
    }

    /// Returns the union of both sets.
    pub const fn union(self, other: ZoneSet) -> Self {
        ZoneSet(self.0 | other.0)
    }

    /// Returns true if `zone` is in the set.
    pub const fn contains(&self, zone: ZoneId) -> bool {
        zone.0 < MAX_ZONES && self.0 & (1 << zone.0) != 0
    }

    /// Number of zones in the set.
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if no zone is in the set.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Raw bit mask, bit `n` set for `ZoneId(n)`.
    pub const fn bits(&self) -> u32 {
        self.0
    }

    /// Iterates the zones in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = ZoneId> + '_ {
        (0..MAX_ZONES)
            .map(ZoneId)
            .filter(move |zone| self.contains(*zone))
    }
}

impl FromIterator<ZoneId> for ZoneSet {
    fn from_iter<T: IntoIterator<Item = ZoneId>>(iter: T) -> Self {
        iter.into_iter().fold(ZoneSet::empty(), ZoneSet::with)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_membership() {
        let set = ZoneSet::of(&[ZoneId(0), ZoneId(3)]);
        assert!(set.contains(ZoneId(0)));
        assert!(set.contains(ZoneId(3)));
        assert!(!set.contains(ZoneId(1)));
        assert_eq!(set.len(), 2);
        assert_eq!(set.bits(), 0b1001);
    }

    #[test]
    fn out_of_range_ids_are_ignored() {
        let set = ZoneSet::empty().with(ZoneId(MAX_ZONES)).with(ZoneId(200));
        assert!(set.is_empty());
        assert!(!set.contains(ZoneId(200)));
    }

    #[test]
    fn iterates_in_ascending_order() {
        let set: ZoneSet = [ZoneId(31), ZoneId(2), ZoneId(7)].into_iter().collect();
        let mut ids = set.iter();
        assert_eq!(ids.next(), Some(ZoneId(2)));
        assert_eq!(ids.next(), Some(ZoneId(7)));
        assert_eq!(ids.next(), Some(ZoneId(31)));
        assert_eq!(ids.next(), None);
    }

    #[test]
    fn union_merges() {
        let a = ZoneSet::of(&[ZoneId(1)]);
        let b = ZoneSet::of(&[ZoneId(2)]);
        assert_eq!(a.union(b), ZoneSet::of(&[ZoneId(1), ZoneId(2)]));
    }
}
