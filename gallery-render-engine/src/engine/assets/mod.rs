/// Gallery manifest asset types and parsing.
pub mod gallery_manifest;
