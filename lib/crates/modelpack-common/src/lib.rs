pub mod bundle;
pub mod service;

pub use bundle::{ArtifactRecord, BundleEnv, BundleRecord, BundleService};
pub use service::{EnvConfig, PipDependencies, ServiceManifest, ServiceMetadata, SetupScriptConfig};
