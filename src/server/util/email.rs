use std::str::FromStr;

use email_address::EmailAddress;

pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> bool;
}

/// Validates the address with `email_address`.
///
/// Only a bare address is accepted, not the `Name <address>` form, and the domain must be
/// dotted with no empty labels, so bare hosts such as `a@localhost` are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailAddressValidator;

impl EmailValidator for EmailAddressValidator {
    fn is_valid(&self, email: &str) -> bool {
        let Ok(address) = EmailAddress::from_str(email) else {
            return false;
        };

        if address.email() != email {
            return false;
        }

        let domain = address.domain();
        domain.contains('.') && domain.split('.').all(|label| !label.is_empty())
    }
}
