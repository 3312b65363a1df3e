//! Checkout Validator
//!
//! Pure predicates over the checkout form. Recomputed on demand; nothing
//! here is cached.

/// True iff `name` is non-empty and contains only letters and whitespace.
pub fn is_name_valid(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_alphabetic() || c.is_whitespace())
}

/// True iff `phone` is non-empty and contains only ASCII digits.
pub fn is_phone_valid(phone: &str) -> bool {
    !phone.is_empty() && phone.chars().all(|c| c.is_ascii_digit())
}

/// Transient checkout form state
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutForm {
    pub name: String,
    pub phone: String,
}

impl CheckoutForm {
    /// Both fields pass their validators
    pub fn is_valid(&self) -> bool {
        is_name_valid(&self.name) && is_phone_valid(&self.phone)
    }

    /// Reset both fields (done after a successful submission)
    pub fn clear(&mut self) {
        self.name.clear();
        self.phone.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_accepts_letters_and_whitespace() {
        assert!(is_name_valid("Jane Doe"));
        assert!(is_name_valid("jane"));
    }

    #[test]
    fn name_rejects_digits_punctuation_and_empty() {
        assert!(!is_name_valid("Jane2"));
        assert!(!is_name_valid("Jane-Doe"));
        assert!(!is_name_valid(""));
    }

    #[test]
    fn phone_accepts_digits_only() {
        assert!(is_phone_valid("07123456789"));
    }

    #[test]
    fn phone_rejects_separators_and_empty() {
        assert!(!is_phone_valid("07-123"));
        assert!(!is_phone_valid("07 123"));
        assert!(!is_phone_valid(""));
    }

    #[test]
    fn form_is_valid_only_when_both_fields_pass() {
        let mut form = CheckoutForm::default();
        assert!(!form.is_valid());

        form.name = "Jane Doe".to_string();
        assert!(!form.is_valid());

        form.phone = "07123456789".to_string();
        assert!(form.is_valid());

        form.clear();
        assert!(!form.is_valid());
        assert!(form.name.is_empty() && form.phone.is_empty());
    }
}
