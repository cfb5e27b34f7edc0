//! Provider registry: routes instruments to providers and handles failover.

mod provider_registry;

pub use provider_registry::ProviderRegistry;
