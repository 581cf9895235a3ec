use crate::error::AuthError;

/// Who logged in, before a user id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
    pub name: String,
}

/// Accepts any non-empty password for an address of the organization's email domain.
///
/// The display name is the local part of the address with its first `.` replaced by a space,
/// so `jane.doe@lau.edu` becomes `jane doe`.
pub fn authenticate(email: &str, password: &str, domain: &str) -> Result<Identity, AuthError> {
    if email.is_empty() || password.is_empty() {
        return Err(AuthError::MissingCredentials);
    }
    if !has_domain(email, domain) {
        return Err(AuthError::WrongDomain {
            domain: domain.to_owned(),
        });
    }
    let local_part = email.split('@').next().unwrap_or_default();
    Ok(Identity {
        email: email.to_owned(),
        name: local_part.replacen('.', " ", 1),
    })
}

#[must_use]
pub fn has_domain(email: &str, domain: &str) -> bool {
    email
        .strip_suffix(domain)
        .is_some_and(|rest| rest.ends_with('@'))
}
