use alloc::string::String;

use crate::ListingId;

/// History-based navigation. `push` must change the location without a full page reload.
pub trait Navigator {
    fn push(&mut self, url: &str);
}

/// Formats an amount in the currency's minor unit for display in `locale`.
pub trait MoneyFormatter {
    fn format_money(&self, amount: i64, currency: &str, locale: &str) -> String;
}

/// Canonical listing URLs.
///
/// Both operations are trusted: an empty or duplicate slug is passed through as-is.
pub trait ListingRoutes {
    /// Derives the URL slug from a listing title.
    fn create_slug(&self, title: &str) -> String;

    /// Builds the canonical URL of a listing page from the listing id and its slug.
    fn listing_url(&self, id: &ListingId, slug: &str) -> String;
}

impl<T: Navigator + ?Sized> Navigator for &mut T {
    fn push(&mut self, url: &str) {
        (**self).push(url);
    }
}

impl<T: MoneyFormatter + ?Sized> MoneyFormatter for &T {
    fn format_money(&self, amount: i64, currency: &str, locale: &str) -> String {
        (**self).format_money(amount, currency, locale)
    }
}

impl<T: ListingRoutes + ?Sized> ListingRoutes for &T {
    fn create_slug(&self, title: &str) -> String {
        (**self).create_slug(title)
    }

    fn listing_url(&self, id: &ListingId, slug: &str) -> String {
        (**self).listing_url(id, slug)
    }
}
