//! Postal-code (CEP) lookup with a geocoding fallback for coordinates.
//!
//! [`AddressResolver`] is the capability the HTTP layer depends on;
//! [`BrasilApiResolver`] is the production implementation and
//! [`StaticResolver`] a fixed-table one for tests.

pub mod brasil_api;
pub mod error;
pub mod geocoding;
pub mod model;
pub mod static_resolver;

pub use brasil_api::{BrasilApiResolver, LookupSettings};
pub use error::AddressError;
pub use model::{normalize_cep, AddressResolver, ResolvedAddress};
pub use static_resolver::StaticResolver;
