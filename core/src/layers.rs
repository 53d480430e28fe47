//! Bit-flag algebra selecting which rendering concerns appear in output.

use bitflags::bitflags;
use thiserror::Error;

bitflags! {
    /// Renderable concerns of one type, combinable as a filter.
    ///
    /// Every [`Segment`](crate::clip::Segment) carries one `Layers` value as
    /// its tag, and every render request is itself a `Layers` value. The
    /// numeric bit order doubles as the output order: groups of segments are
    /// emitted by ascending bits, so headers come before members, members
    /// before the closing terminator, and all of those before edges.
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    pub struct Layers: u16 {
        /// Type header framing (declaration line plus its annotations).
        const TYPE = 1;
        /// Public member partition.
        const PUBLIC = 1 << 1;
        /// Non-public member partition.
        const NON_PUBLIC = 1 << 2;
        /// Both member partitions.
        const MEMBERS = Self::PUBLIC.bits() | Self::NON_PUBLIC.bits();
        /// Header, members, and the closing terminator.
        ///
        /// Carries a dedicated bit on top of `TYPE | MEMBERS` so the
        /// closing-brace group sorts after both member partitions.
        const TYPE_END = Self::TYPE.bits() | Self::MEMBERS.bits() | 1 << 3;
        /// Nested type embeddings.
        const INNER_OBJECTS = 1 << 4;
        /// Use/aggregation edges inferred from member types.
        const RELATIONSHIPS = 1 << 5;
        /// Extends/implements edges.
        const INHERITANCE = 1 << 6;
        /// Free-form notes attached to the type.
        const NOTES = 1 << 7;
        /// Sentinel request: include every segment regardless of tag.
        const ALL = Self::TYPE_END.bits()
            | Self::INNER_OBJECTS.bits()
            | Self::RELATIONSHIPS.bits()
            | Self::INHERITANCE.bits()
            | Self::NOTES.bits();
    }
}

/// A layer value whose bits do not correspond to defined flags.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("invalid layer bit pattern {0:#06x}")]
pub struct LayerError(pub u16);

impl Layers {
    /// The edge-only concerns rendered after all type bodies.
    pub const EDGES: Layers = Layers::RELATIONSHIPS
        .union(Layers::INHERITANCE)
        .union(Layers::NOTES);

    /// Inclusion policy: does a request admit a segment tagged `tag`?
    ///
    /// Subset-match: the tag's bits must all be present in the request, so
    /// asking for a composite naturally includes every simpler concern
    /// beneath it. [`Layers::ALL`] admits everything unconditionally.
    pub fn admits(self, tag: Layers) -> bool {
        self == Layers::ALL || self.contains(tag)
    }

    /// Validate an externally supplied bit pattern.
    ///
    /// Malformed combinations are a caller error and are rejected here
    /// rather than repaired.
    pub fn try_from_bits(bits: u16) -> Result<Layers, LayerError> {
        Layers::from_bits(bits).ok_or(LayerError(bits))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bit_order_matches_output_order() {
        assert!(Layers::TYPE.bits() < Layers::PUBLIC.bits());
        assert!(Layers::PUBLIC.bits() < Layers::NON_PUBLIC.bits());
        assert!(Layers::NON_PUBLIC.bits() < Layers::TYPE_END.bits());
        assert!(Layers::TYPE_END.bits() < Layers::INNER_OBJECTS.bits());
        assert!(Layers::INNER_OBJECTS.bits() < Layers::RELATIONSHIPS.bits());
        assert!(Layers::RELATIONSHIPS.bits() < Layers::INHERITANCE.bits());
        assert!(Layers::INHERITANCE.bits() < Layers::NOTES.bits());
    }

    #[test]
    fn members_is_both_partitions() {
        assert_eq!(Layers::MEMBERS, Layers::PUBLIC | Layers::NON_PUBLIC);
        assert!(!Layers::MEMBERS.contains(Layers::TYPE));
    }

    #[test]
    fn subset_match_policy() {
        assert!(Layers::MEMBERS.admits(Layers::PUBLIC));
        assert!(Layers::MEMBERS.admits(Layers::NON_PUBLIC));
        assert!(!Layers::MEMBERS.admits(Layers::TYPE));
        assert!(!Layers::PUBLIC.admits(Layers::MEMBERS));
        assert!(Layers::TYPE_END.admits(Layers::TYPE));
        assert!(Layers::TYPE_END.admits(Layers::TYPE_END));
        assert!(!Layers::TYPE_END.admits(Layers::INHERITANCE));
        assert!(!Layers::EDGES.admits(Layers::TYPE_END));
        assert!(Layers::EDGES.admits(Layers::RELATIONSHIPS));
    }

    #[test]
    fn all_admits_everything() {
        for tag in [
            Layers::TYPE,
            Layers::PUBLIC,
            Layers::NON_PUBLIC,
            Layers::TYPE_END,
            Layers::INNER_OBJECTS,
            Layers::RELATIONSHIPS,
            Layers::INHERITANCE,
            Layers::NOTES,
        ] {
            assert!(Layers::ALL.admits(tag), "ALL must admit {tag:?}");
        }
    }

    #[test]
    fn stray_bits_are_rejected() {
        assert_eq!(Layers::try_from_bits(1 << 9), Err(LayerError(1 << 9)));
        assert_eq!(
            Layers::try_from_bits(Layers::MEMBERS.bits()),
            Ok(Layers::MEMBERS)
        );
    }
}
