//! A headless info card for listings anchored to a map coordinate.
//!
//! For ready-made collaborators (route table, slugs, history, money formatting), see the
//! `infocard-adapter` crate.
//!
//! The crate covers the parts of a map info card that carry logic:
//! - a draw guard for map overlays that survives the host tearing down its panes first
//! - the pixel offset that puts the card's caret on the anchored point
//! - a cyclic page index when several listings share one coordinate
//! - click routing from the card to history navigation, never a native link follow
//!
//! It is UI-agnostic. A map/UI layer is expected to provide:
//! - the positioned-overlay primitive ([`Positionable`])
//! - navigation, money formatting and canonical listing URLs ([`Navigator`],
//!   [`MoneyFormatter`], [`ListingRoutes`])
//! - rendering of the returned view data, including the responsive image component
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod card;
mod classes;
mod config;
mod container;
mod event;
mod host;
mod offset;
mod overlay;
mod pagination;
mod types;


pub use card::{ImageProps, ListingCardView, PriceText};
pub use classes::{ClassList, css};
pub use config::InfoCardConfig;
pub use container::{InfoCard, InfoCardView, OnClickCallback};
pub use event::{ClickTarget, EventResult};
pub use host::{ListingRoutes, MoneyFormatter, Navigator};
pub use offset::{CARET_HEIGHT, PixelOffsetFn, pixel_position_offset};
pub use overlay::{
    DrawOutcome, DrawRequest, MapPane, OverlayProps, OverlayStyle, Positionable,
    SafeOverlayAnchor, SkipReason,
};
pub use pagination::{Pagination, PaginationView};
pub use types::{ImageRef, ImageVariant, LatLng, Listing, ListingId, Money, PixelOffset};
