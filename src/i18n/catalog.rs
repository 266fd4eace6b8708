//! Message keys and the static translation catalog.

use super::Locale;

/// Language-neutral identifier for a validation or success message.
///
/// The set is closed: keys are introduced only by the rule table and the
/// registration service, never derived from user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKey {
    UsernameNull,
    UsernameSize,
    EmailNull,
    EmailInvalid,
    EmailInUse,
    PasswordNull,
    PasswordSize,
    PasswordPattern,
    UserCreateSuccess,
}

impl MessageKey {
    /// Stable key name, matching the translation table identifiers.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UsernameNull => "username_null",
            Self::UsernameSize => "username_size",
            Self::EmailNull => "email_null",
            Self::EmailInvalid => "email_invalid",
            Self::EmailInUse => "email_inuse",
            Self::PasswordNull => "password_null",
            Self::PasswordSize => "password_size",
            Self::PasswordPattern => "password_pattern",
            Self::UserCreateSuccess => "user_create_success",
        }
    }
}

/// Translation collaborator interface.
pub trait Translator: Send + Sync {
    /// Resolve a message key to text in the requested locale.
    fn translate(&self, key: MessageKey, locale: Locale) -> String;
}

/// Static message catalog with English and Bengali tables.
#[derive(Debug, Default, Clone, Copy)]
pub struct Catalog;

impl Translator for Catalog {
    fn translate(&self, key: MessageKey, locale: Locale) -> String {
        let text = match locale {
            Locale::En => english(key),
            Locale::Bn => bengali(key),
        };
        text.to_string()
    }
}

const fn english(key: MessageKey) -> &'static str {
    match key {
        MessageKey::UsernameNull => "Username cannot be null",
        MessageKey::UsernameSize => "Must have min 4 and max 32 characters",
        MessageKey::EmailNull => "Email cannot be null",
        MessageKey::EmailInvalid => "Email is not valid",
        MessageKey::EmailInUse => "Email in use",
        MessageKey::PasswordNull => "Password cannot be null",
        MessageKey::PasswordSize => "Password must be at least 6 characters",
        MessageKey::PasswordPattern => {
            "Password must have at least 1 uppercase, 1 lowercase letter and 1 number"
        }
        MessageKey::UserCreateSuccess => "User created",
    }
}

const fn bengali(key: MessageKey) -> &'static str {
    match key {
        MessageKey::UsernameNull => "ইউসারনেম খালি থাকবে না",
        MessageKey::UsernameSize => "সর্বনিম্ন ৪ এবং সর্বোচ্চ ৩২ অক্ষর",
        MessageKey::EmailNull => "ইমেইল খালি থাকবে না",
        MessageKey::EmailInvalid => "ইমেইল সঠিক নয়",
        MessageKey::EmailInUse => "ইমেইলটি ব্যবহৃত হচ্ছে",
        MessageKey::PasswordNull => "পাসওয়ার্ড খালি থাকবে না",
        MessageKey::PasswordSize => "পাসওয়ার্ড সর্বনিন্ম ৬ অক্ষর হবে",
        MessageKey::PasswordPattern => {
            "পাসওয়ার্ডে কমপক্ষে ১টি আপারকেস, ১টি লোওয়ারকেস এবং ১টি সংখ্যা থাকবে"
        }
        MessageKey::UserCreateSuccess => "ইউজার তৈরী হয়েছে",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_english_messages() {
        assert_eq!(
            Catalog.translate(MessageKey::UsernameNull, Locale::En),
            "Username cannot be null"
        );
        assert_eq!(
            Catalog.translate(MessageKey::EmailInUse, Locale::En),
            "Email in use"
        );
        assert_eq!(
            Catalog.translate(MessageKey::UserCreateSuccess, Locale::En),
            "User created"
        );
    }

    #[test]
    fn resolves_bengali_messages() {
        assert_eq!(
            Catalog.translate(MessageKey::UsernameNull, Locale::Bn),
            "ইউসারনেম খালি থাকবে না"
        );
        assert_eq!(
            Catalog.translate(MessageKey::UserCreateSuccess, Locale::Bn),
            "ইউজার তৈরী হয়েছে"
        );
    }

    #[test]
    fn key_names_are_stable() {
        assert_eq!(MessageKey::EmailInUse.as_str(), "email_inuse");
        assert_eq!(MessageKey::PasswordPattern.as_str(), "password_pattern");
    }
}
