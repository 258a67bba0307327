//! envkey - Load EnvKey config into a process, or render it for a shell.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── output        # stderr/stdout helpers
//! │   ├── source        # Shell text output
//! │   └── json          # Raw JSON output
//! └── core/             # Core library components
//!     ├── config        # Settings file
//!     ├── domain/       # ConfigMap and .env types
//!     ├── environment   # Environment trait, process and in-memory stores
//!     ├── fetch/        # Fetch trait and the envkey-fetch backend
//!     ├── loader        # Merge a bundle into an environment
//!     ├── shell         # Shell serializer
//!     └── validation    # Variable name/value checks
//! ```
//!
//! # Example
//!
//! ```
//! use envkey::core::domain::ConfigMap;
//! use envkey::core::shell::{render, Format};
//!
//! let vars = ConfigMap::from_pairs([("TEST", "it"), ("TEST_2", "works!")]);
//! assert_eq!(
//!     render(vars.iter(), Format::Standard),
//!     "export 'TEST'='it' 'TEST_2'='works!'"
//! );
//! ```

pub mod cli;
pub mod core;
pub mod error;
