use std::env;

pub const GITHUB_TOKEN_VAR: &str = "GITHUB_TOKEN";
pub const PLACEHOLDER_TOKEN: &str = "YOUR_GITHUB_TOKEN";

/// Source of the bearer token sent with every GitHub request.
///
/// The token is never validated locally; a missing or wrong one only shows up
/// as a failed response from the API.
pub trait CredentialProvider {
    fn token(&self) -> String;
}

/// Reads the token from an environment variable, falling back to
/// [`PLACEHOLDER_TOKEN`] when it is unset.
pub struct EnvCredential {
    var: String,
}

impl EnvCredential {
    pub fn new(var: impl Into<String>) -> Self {
        EnvCredential { var: var.into() }
    }
}

impl Default for EnvCredential {
    fn default() -> Self {
        EnvCredential::new(GITHUB_TOKEN_VAR)
    }
}

impl CredentialProvider for EnvCredential {
    fn token(&self) -> String {
        match env::var(&self.var) {
            Ok(token) => token,
            Err(_) => {
                log::warn!("{} is not set, using a placeholder token", self.var);
                PLACEHOLDER_TOKEN.to_owned()
            }
        }
    }
}

#[cfg(test)]
pub struct StaticCredential(String);

#[cfg(test)]
impl StaticCredential {
    pub fn new(token: impl Into<String>) -> Self {
        StaticCredential(token.into())
    }
}

#[cfg(test)]
impl CredentialProvider for StaticCredential {
    fn token(&self) -> String {
        self.0.to_owned()
    }
}
