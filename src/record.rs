// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Partial attribute records
//!
//! A record is a fixed set of optional attributes. Updates arrive as partial
//! records that are merged field by field into the stored one.

/// Attribute record tracked per roster entry
pub trait Record: Default {
    /// Merges every attribute set in `partial` into `self`.
    ///
    /// Attributes unset in `partial` are left untouched. Returns `true` if at
    /// least one stored value changed.
    fn merge(&mut self, partial: Self) -> bool;

    /// Returns `true` once every attribute is set.
    fn is_complete(&self) -> bool;
}

/// Overwrites `slot` with `value` when it is set and differs.
///
/// Returns `true` if `slot` changed.
pub(crate) fn merge_field<T: PartialEq>(slot: &mut Option<T>, value: Option<T>) -> bool {
    match value {
        Some(value) if slot.as_ref() != Some(&value) => {
            *slot = Some(value);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_field_sets_unset_slot() {
        let mut slot = None;
        assert!(merge_field(&mut slot, Some(5)));
        assert_eq!(slot, Some(5));
    }

    #[test]
    fn test_merge_field_keeps_slot_on_unset_value() {
        let mut slot = Some(5);
        assert!(!merge_field(&mut slot, None));
        assert_eq!(slot, Some(5));
    }

    #[test]
    fn test_merge_field_identical_value_is_not_a_change() {
        let mut slot = Some("Jan".to_string());
        assert!(!merge_field(&mut slot, Some("Jan".to_string())));
    }

    #[test]
    fn test_merge_field_overwrites_different_value() {
        let mut slot = Some(1);
        assert!(merge_field(&mut slot, Some(2)));
        assert_eq!(slot, Some(2));
    }
}
