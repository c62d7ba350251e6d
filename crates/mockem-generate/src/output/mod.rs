pub mod bundle;
pub mod csv;
pub mod export;

pub use bundle::{Bundle, BundleEntry};
pub use export::{ExportPayload, Manifest, ManifestRelationship, build_export, export_filename};
