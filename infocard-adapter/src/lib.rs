//! Adapter utilities for the `infocard` crate.
//!
//! The `infocard` crate is UI-agnostic and only defines the collaborators it needs. This crate
//! provides small, framework-neutral implementations of them:
//!
//! - A named route table and canonical listing URLs (`/l/:slug/:id`)
//! - Title slugs
//! - An in-memory, push-only navigation history
//! - Minor-unit money formatting
//!
//! Map hosts and image components stay with the embedding UI; see `examples/` for a simulated
//! host.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod history;
mod money;
mod routes;
mod slug;

#[cfg(test)]
mod tests;

pub use history::History;
pub use money::MinorUnitFormatter;
pub use routes::{LISTING_PAGE, ListingPageRoutes, RouteError, RoutePath, RouteTable};
pub use slug::create_slug;

/// An [`infocard::InfoCard`] wired to this crate's collaborators.
pub type MarketplaceInfoCard<N = History> =
    infocard::InfoCard<ListingPageRoutes, MinorUnitFormatter, N>;
