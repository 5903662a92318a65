//! Class signatures for build-time argument resolution.
//!
//! A [`SignatureProvider`] answers "which public methods does this class have,
//! and what are their parameters called?". Signatures come from an in-memory
//! [`SignatureCatalog`], usually filled from TOML manifests generated ahead of
//! the build, or lazily from a [`ManifestDirectory`] laid out one file per
//! class.

mod catalog;
mod error;
pub mod manifest;
mod provider;
mod signature;

pub use catalog::SignatureCatalog;
pub use error::{ManifestError, ReflectError};
pub use manifest::ManifestDirectory;
pub use provider::{MissingClass, ProviderChain, SignatureProvider};
pub use signature::{ClassSignature, MethodSignature, ParameterInfo, Visibility, class_key, normalize_class};
