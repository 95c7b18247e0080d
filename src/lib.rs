//! Sheetsync - keyword and content sync for localization workbooks
//!
//! Sheetsync keeps the language tables of a content workbook aligned with
//! its English master table: blank content is copied from the master,
//! automation keywords are normalized (skin-tone emoji collapsed to their
//! base form) and extended with the master's keywords, and blank language
//! cells are filled from the row above.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (sync, check, init)
//! - `config`: Configuration file loading and parsing
//! - `core`: Emoji classification, keyword fields, table passes and the
//!   workbook host
//! - `issues`: Issue type definitions and reporting
//! - `rules`: Workbook checks that produce issues

pub mod cli;
pub mod config;
pub mod core;
pub mod issues;
pub mod rules;
