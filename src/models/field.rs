/// Text fields of a user record, each with its storage limit in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
}

impl Field {
    pub fn max_len(self) -> usize {
        match self {
            Field::FirstName => 49,
            Field::LastName => 49,
            Field::Email => 119,
            Field::Password => 19,
        }
    }

    /// Human label used in prompts.
    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "first name",
            Field::LastName => "last name",
            Field::Email => "email",
            Field::Password => "password",
        }
    }

    /// Cut `value` to the field limit, counted in chars.
    /// Returns the kept text and whether anything was dropped.
    pub fn clip(self, value: &str) -> (String, bool) {
        let max = self.max_len();
        match value.char_indices().nth(max) {
            Some((byte_idx, _)) => (value[..byte_idx].to_string(), true),
            None => (value.to_string(), false),
        }
    }
}
