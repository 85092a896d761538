pub(crate) const TITLE_MIN_CHARS: usize = 3;
pub(crate) const TITLE_MAX_CHARS: usize = 50;
pub(crate) const BODY_MIN_CHARS: usize = 10;

pub(crate) const TITLE_ERROR: &str = "Title must be between 3 and 50 characters";
pub(crate) const BODY_ERROR: &str = "Note content must be at least 10 characters";

// Lengths are counted in chars of the trimmed value.
fn trimmed_len(value: &str) -> usize {
    value.trim().chars().count()
}

pub(crate) fn validate_title(title: &str) -> bool {
    (TITLE_MIN_CHARS..=TITLE_MAX_CHARS).contains(&trimmed_len(title))
}

pub(crate) fn validate_body(body: &str) -> bool {
    trimmed_len(body) >= BODY_MIN_CHARS
}

/// Which form fields failed validation. `true` means invalid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct FormErrors {
    pub title: bool,
    pub body: bool,
}

impl FormErrors {
    pub fn check(title: &str, body: &str) -> Self {
        Self {
            title: !validate_title(title),
            body: !validate_body(body),
        }
    }

    pub fn is_empty(&self) -> bool {
        !self.title && !self.body
    }
}
