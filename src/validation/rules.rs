//! The ordered rule table and its interpreter.
//!
//! Each field owns a chain of checks tried in declared order; the first
//! failure yields that rule's message key and bails the rest of the
//! chain. The email-availability check is the only asynchronous rule
//! and never runs once an earlier rule in its chain has failed.

use validator::ValidateEmail;

use crate::config::{PASSWORD_MIN_LENGTH, USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH};
use crate::errors::AppResult;
use crate::i18n::MessageKey;
use crate::infra::UserRepository;

use super::Field;

/// A single check in a field's rule chain.
enum Check {
    /// Fails when the value is absent.
    Present,
    /// Synchronous predicate over the raw value.
    Test(fn(&str) -> bool),
    /// Asynchronous lookup: fails when an account already owns the email.
    EmailAvailable,
}

/// One row of the rule table.
struct Rule {
    field: Field,
    check: Check,
    message_key: MessageKey,
}

/// The full rule catalog, grouped by field in declaration order.
static RULES: &[Rule] = &[
    Rule {
        field: Field::Username,
        check: Check::Present,
        message_key: MessageKey::UsernameNull,
    },
    Rule {
        field: Field::Username,
        check: Check::Test(username_size),
        message_key: MessageKey::UsernameSize,
    },
    Rule {
        field: Field::Email,
        check: Check::Present,
        message_key: MessageKey::EmailNull,
    },
    Rule {
        field: Field::Email,
        check: Check::Test(email_syntax),
        message_key: MessageKey::EmailInvalid,
    },
    Rule {
        field: Field::Email,
        check: Check::EmailAvailable,
        message_key: MessageKey::EmailInUse,
    },
    Rule {
        field: Field::Password,
        check: Check::Present,
        message_key: MessageKey::PasswordNull,
    },
    Rule {
        field: Field::Password,
        check: Check::Test(password_size),
        message_key: MessageKey::PasswordSize,
    },
    Rule {
        field: Field::Password,
        check: Check::Test(password_pattern),
        message_key: MessageKey::PasswordPattern,
    },
];

// Lengths count Unicode scalar values, not bytes.
fn username_size(value: &str) -> bool {
    (USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&value.chars().count())
}

fn email_syntax(value: &str) -> bool {
    value.validate_email()
}

fn password_size(value: &str) -> bool {
    value.chars().count() >= PASSWORD_MIN_LENGTH
}

fn password_pattern(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
}

/// Evaluate a field's rule chain against its raw value.
///
/// Returns the first failing rule's message key, or `None` when every
/// rule passes. Repository errors from the availability lookup
/// propagate unchanged.
pub async fn check_field(
    field: Field,
    value: Option<&str>,
    users: &dyn UserRepository,
) -> AppResult<Option<MessageKey>> {
    for rule in RULES.iter().filter(|rule| rule.field == field) {
        let passed = match &rule.check {
            Check::Present => value.is_some(),
            // The presence rule precedes every value check, so absent
            // values never reach these arms.
            Check::Test(test) => value.map_or(true, test),
            Check::EmailAvailable => match value {
                Some(email) => users.find_by_email(email).await?.is_none(),
                None => true,
            },
        };
        if !passed {
            return Ok(Some(rule.message_key));
        }
    }
    Ok(None)
}
