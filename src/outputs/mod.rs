//! Output generation for fetched payloads.
//!
//! # Submodules
//!
//! - [`json`]: Names and writes the raw JSON payload files
//!
//! # Output Structure
//!
//! ```text
//! storage_dir/
//! ├── newswire-25_05_06-08_00_00-section-list.json
//! ├── newswire-25_05_06-08_00_02-all_arts.json
//! └── mostpopular-25_05_06-08_00_05-emailed_1.json
//! ```

pub mod json;
