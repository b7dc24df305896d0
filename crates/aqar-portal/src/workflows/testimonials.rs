//! Testimonial submission payloads.

use serde::{Deserialize, Serialize};

/// A testimonial as drafted in the form. [`TestimonialDraft::from_form`]
/// trims whitespace the way the submit handler always has.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TestimonialDraft {
    pub name: String,
    pub property_type: String,
    pub rating: String,
    pub experience: String,
}

impl TestimonialDraft {
    pub fn from_form(
        name: Option<&str>,
        property_type: Option<&str>,
        rating: Option<&str>,
        experience: Option<&str>,
    ) -> Self {
        Self {
            name: name.unwrap_or_default().trim().to_string(),
            property_type: property_type.unwrap_or_default().to_string(),
            rating: rating.unwrap_or_default().to_string(),
            experience: experience.unwrap_or_default().trim().to_string(),
        }
    }
}

/// The accepted testimonial echoed back by the backend, ready to prepend to
/// the public list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishedTestimonial {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draft_trims_free_text_fields() {
        let draft = TestimonialDraft::from_form(
            Some("  Salim  "),
            Some("apartment"),
            Some("5"),
            Some("  great service  "),
        );
        assert_eq!(draft.name, "Salim");
        assert_eq!(draft.experience, "great service");
        assert_eq!(draft.property_type, "apartment");
    }

    #[test]
    fn missing_fields_become_empty_strings() {
        let draft = TestimonialDraft::from_form(None, None, None, None);
        assert_eq!(draft.name, "");
        assert_eq!(draft.rating, "");
    }
}
