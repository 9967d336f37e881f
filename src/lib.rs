#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `utilkit` bundles a handful of small generic helpers:
//! a FIFO [`Queue`], a comparator-driven [`PriorityQueue`], a CRLF line
//! loader ([`load_file`]) and a [`CharGrid`] for boards read from text.
//!
pub use utilkit_internal::*;
