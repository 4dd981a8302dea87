#![deny(missing_docs)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::redundant_clone))]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::redundant_field_names)]
#![deny(clippy::redundant_pattern)]
#![deny(clippy::redundant_static_lifetimes)]
#![deny(clippy::unnecessary_to_owned)]
#![deny(clippy::needless_borrow)]
#![deny(clippy::manual_let_else)]
#![deny(clippy::unused_self)]
#![deny(clippy::unreachable)]
#![cfg_attr(not(test), deny(clippy::unwrap_used))]
#![cfg_attr(not(test), deny(clippy::expect_used))]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
#![deny(clippy::print_stdout)]
#![deny(clippy::dbg_macro)]
#![deny(clippy::len_without_is_empty)]
#![deny(clippy::wrong_self_convention)]
#![deny(clippy::from_over_into)]
#![cfg_attr(not(test), no_std)]

//! Backpressured reactive stream core.
//!
//! A consumer declares how many items it can absorb and producers never emit more than that.
//! The crate provides the subscription protocol ([`crate::core::Publisher`], [`crate::core::Subscriber`],
//! [`crate::core::Subscription`]), the demand accounting that backs it, a stage base with in-flight
//! tracking, and a catalog of composable operators reachable through
//! [`crate::core::Source`].
//!
//! Every signal is a direct synchronous call on a single logical thread of control. Eager
//! sources are driven by an iterative loop, so arbitrarily large demand never grows the call
//! stack.

extern crate alloc;

pub mod core;
