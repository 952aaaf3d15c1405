//! Export a GnuPG master key with its subkeys into a portable archive and
//! import that archive into another keyring.
//!
//! All cryptographic work is done by the external `gpg` executable; this
//! crate lists keys, shapes the exported material into a flat `.tar.gz`
//! and feeds the right members back to `gpg --import`.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod support;
