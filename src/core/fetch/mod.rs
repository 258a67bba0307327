//! Fetching decrypted bundles.
//!
//! Retrieval, decryption, verification, retries, and caching all live behind
//! the `Fetch` trait. This crate never looks inside the bundle until it comes
//! back as JSON text.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Fetch` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Http { /* ... */ }
//!
//! impl Fetch for Http {
//!     fn fetch(&self, token: &str, options: &FetchOptions) -> Result<Zeroizing<String>, FetchError> {
//!         // Download, verify, decrypt
//!     }
//! }
//! ```

use zeroize::Zeroizing;

use crate::error::FetchError;

mod backend;
mod command;
mod options;

pub use backend::default_backend;
pub use command::CommandFetcher;
pub use options::FetchOptions;

/// A source of decrypted bundles.
pub trait Fetch {
    /// Fetch the bundle for `token` as a JSON object of string values.
    ///
    /// Blocks until success, until retries are exhausted, or until the
    /// per-attempt timeout elapses. Retry and backoff policy, as described by
    /// `options`, is the backend's job.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::MissingToken` for an empty token, and another
    /// `FetchError` variant for any retrieval failure. No text is returned
    /// on failure.
    fn fetch(&self, token: &str, options: &FetchOptions) -> Result<Zeroizing<String>, FetchError>;
}

impl<F: Fetch + ?Sized> Fetch for &F {
    fn fetch(&self, token: &str, options: &FetchOptions) -> Result<Zeroizing<String>, FetchError> {
        (**self).fetch(token, options)
    }
}

impl<F: Fetch + ?Sized> Fetch for Box<F> {
    fn fetch(&self, token: &str, options: &FetchOptions) -> Result<Zeroizing<String>, FetchError> {
        (**self).fetch(token, options)
    }
}
