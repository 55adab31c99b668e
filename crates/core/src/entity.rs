//! Entity trait: identity + continuity across state changes.

/// Entity marker + minimal interface.
///
/// Two entities are the same entity when their identifiers match, whatever
/// their attribute values are.
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;

    /// Identity comparison.
    fn same_identity_as(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.id() == other.id()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Tagged {
        id: u32,
        label: &'static str,
    }

    impl Entity for Tagged {
        type Id = u32;

        fn id(&self) -> &Self::Id {
            &self.id
        }
    }

    #[test]
    fn identity_ignores_attributes() {
        let a = Tagged { id: 7, label: "first" };
        let b = Tagged { id: 7, label: "second" };
        let c = Tagged { id: 8, label: "first" };

        assert_ne!(a.label, b.label);
        assert!(a.same_identity_as(&b));
        assert!(!a.same_identity_as(&c));
    }
}
