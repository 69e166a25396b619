/// Authentication utilities
///
/// # Modules
///
/// - [`password`]: Argon2id hashing and password rules
/// - [`credentials`]: Credentials sign-in provider seam and its database
///   implementation
///
/// Sessions and tokens are not issued here; a successful sign-in only
/// yields the page to navigate to.

pub mod credentials;
pub mod password;
