//! # Review Form State
//!
//! The ephemeral, locally-owned fields the user edits before submitting a
//! review. Owned exclusively by the page controller; nothing else reads it.
//!
//! The form is cleared back to [`Default`] on mount, on submission success,
//! and on submission failure. Clearing on failure is deliberate policy: a
//! failed submission's content is not trusted to be resubmittable verbatim,
//! so the user re-enters the review.

/// Editable review fields.
///
/// `rating: None` means "not chosen yet"; submission is rejected locally
/// while it is unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReviewForm {
    pub rating: Option<u8>,
    pub title: String,
    pub comment: String,
}

impl ReviewForm {
    /// Resets every field to its default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_resets_all_fields() {
        let mut form = ReviewForm {
            rating: Some(4),
            title: "Good".to_string(),
            comment: "Nice".to_string(),
        };
        assert!(!form.is_clear());

        form.clear();
        assert!(form.is_clear());
        assert_eq!(form.rating, None);
        assert!(form.title.is_empty());
        assert!(form.comment.is_empty());
    }
}
