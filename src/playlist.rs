//! Playlist data: the `Track` model, manifest parsing and manifest sources.

mod manifest;
mod model;
mod source;

pub use manifest::{LineError, ParsedManifest, parse_manifest, parse_timestamp};
pub use model::Track;
pub use source::{ManifestError, ManifestLocation, ManifestSource};
