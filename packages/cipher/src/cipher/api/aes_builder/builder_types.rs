//! AES builder type definitions

use zeroize::Zeroizing;

/// Initial AES builder - entry point
pub struct AesBuilder;

/// AES builder with a password
pub struct AesWithPassword {
    pub(super) password: Zeroizing<Vec<u8>>,
}

/// AES builder with a password and result handler
pub struct AesWithPasswordAndHandler<F> {
    pub(super) password: Zeroizing<Vec<u8>>,
    pub(super) result_handler: F,
}

impl Default for AesBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AesBuilder {
    /// Create new AES builder
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Set the password the key is derived from
    #[must_use]
    pub fn with_password<T: Into<Vec<u8>>>(self, password: T) -> AesWithPassword {
        AesWithPassword {
            password: Zeroizing::new(password.into()),
        }
    }
}

impl AesWithPassword {
    /// Attach a handler that unwraps the operation result
    #[must_use]
    pub fn on_result<F, T>(self, handler: F) -> AesWithPasswordAndHandler<F>
    where
        F: FnOnce(crate::Result<Vec<u8>>) -> T + Send + 'static,
    {
        AesWithPasswordAndHandler {
            password: self.password,
            result_handler: handler,
        }
    }
}
