//! placedb-cli
//! ===========
//!
//! Command-line interface for the `placedb-core` autocomplete index.
//!
//! This crate primarily provides a binary (`placedb`). The library target
//! exists so the crate renders a documentation page with this overview.
//!
//! Basic usage:
//!
//! ```text
//! placedb --help
//! placedb stats
//! placedb search bang
//! placedb get TH-1609350
//! placedb --input my-places.json.gz search lond
//! ```
//!
//! For programmatic access use [`placedb-core`] directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
