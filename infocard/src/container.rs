use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::classes::{ClassList, css};
use crate::{
    ClickTarget, EventResult, InfoCardConfig, LatLng, Listing, ListingCardView, ListingRoutes,
    MoneyFormatter, Navigator, OverlayProps, Pagination, PaginationView,
};

/// Notified before the card navigates, e.g. to close other overlays or record analytics.
pub type OnClickCallback = Box<dyn FnMut()>;

/// An info card for the listings sharing one map coordinate.
///
/// The card is the sole owner of its page index. Rendering is a pure function of the listings,
/// the index and the collaborators; everything derived (current listing, URL, anchor position) is
/// recomputed on each call to [`InfoCard::render`].
pub struct InfoCard<R, F, N> {
    listings: Vec<Listing>,
    pagination: Pagination,
    config: InfoCardConfig,
    root_class_name: Option<String>,
    class_name: Option<String>,
    on_click: Option<OnClickCallback>,
    routes: R,
    formatter: F,
    navigator: N,
}

/// Render data of a whole info card, outermost first.
#[derive(Clone, Debug)]
pub struct InfoCardView {
    pub overlay: OverlayProps,
    pub root_class: ClassList,
    pub caret_shadow_class: ClassList,
    pub card: ListingCardView,
    /// Absent unless more than one listing shares the card.
    pub pagination: Option<PaginationView>,
    pub caret_class: ClassList,
}

impl<R, F, N> InfoCard<R, F, N>
where
    R: ListingRoutes,
    F: MoneyFormatter,
    N: Navigator,
{
    /// Creates a card showing the first of `listings`.
    ///
    /// `listings` must not be empty and all of them are expected to share (roughly) one
    /// geolocation. Accessing the current listing of an empty card panics.
    pub fn new(listings: Vec<Listing>, routes: R, formatter: F, navigator: N) -> Self {
        icdebug!(count = listings.len(), "InfoCard::new");
        Self {
            pagination: Pagination::new(listings.len()),
            listings,
            config: InfoCardConfig::default(),
            root_class_name: None,
            class_name: None,
            on_click: None,
            routes,
            formatter,
            navigator,
        }
    }

    pub fn with_config(mut self, config: InfoCardConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the default root class.
    pub fn with_root_class_name(mut self, name: impl Into<String>) -> Self {
        self.root_class_name = Some(name.into());
        self
    }

    /// Appends an extra class to the root.
    pub fn with_class_name(mut self, name: impl Into<String>) -> Self {
        self.class_name = Some(name.into());
        self
    }

    pub fn with_on_click(mut self, on_click: impl FnMut() + 'static) -> Self {
        self.on_click = Some(Box::new(on_click));
        self
    }

    pub fn config(&self) -> &InfoCardConfig {
        &self.config
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    pub fn current_index(&self) -> usize {
        self.pagination.index()
    }

    pub fn current_listing(&self) -> &Listing {
        &self.listings[self.pagination.index()]
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    pub fn navigator_mut(&mut self) -> &mut N {
        &mut self.navigator
    }

    /// The anchor coordinate: always the current listing's geolocation.
    pub fn position(&self) -> LatLng {
        self.current_listing().geolocation
    }

    /// Canonical URL of the current listing.
    pub fn listing_url(&self) -> String {
        let listing = self.current_listing();
        let slug = self.routes.create_slug(&listing.title);
        self.routes.listing_url(&listing.id, &slug)
    }

    pub fn overlay_props(&self) -> OverlayProps {
        OverlayProps::new(self.position())
            .with_pane(self.config.pane)
            .with_style(self.config.style)
    }

    pub fn next(&mut self) -> usize {
        self.pagination.next()
    }

    pub fn previous(&mut self) -> usize {
        self.pagination.previous()
    }

    pub fn card_view(&self) -> ListingCardView {
        ListingCardView::render(
            self.current_listing(),
            self.listing_url(),
            self.pagination.is_carousel(),
            None,
            &self.config,
            &self.formatter,
        )
    }

    pub fn render(&self) -> InfoCardView {
        let has_carousel = self.pagination.is_carousel();
        let root_class = match self.root_class_name.as_deref() {
            Some(name) if !name.is_empty() => ClassList::new().with(String::from(name)),
            _ => ClassList::new().with(css::ROOT),
        };

        InfoCardView {
            overlay: self.overlay_props(),
            root_class: root_class.with_opt(self.class_name.as_deref()),
            caret_shadow_class: ClassList::new().with(css::CARET_SHADOW),
            card: self.card_view(),
            pagination: self.pagination.view(),
            caret_class: ClassList::new()
                .with(css::CARET)
                .with_if(css::CARET_WITH_CAROUSEL, has_carousel),
        }
    }

    /// Runs the click callback, then pushes `url` onto the navigator's history.
    pub fn open_listing(&mut self, url: &str) {
        if let Some(on_click) = self.on_click.as_mut() {
            on_click();
        }
        icdebug!(url, "InfoCard::open_listing");
        self.navigator.push(url);
    }

    /// Dispatches a click on the rendered card.
    ///
    /// Card and pagination clicks are claimed, so the host must neither follow the card link
    /// natively nor let a pagination click reach the card. Pagination targets only exist while
    /// paging is offered; clicks on them otherwise bubble untouched.
    pub fn handle_click(&mut self, target: ClickTarget) -> EventResult {
        match target {
            ClickTarget::Card => {
                let card = self.card_view();
                card.click(|url| self.open_listing(url))
            }
            ClickTarget::PreviousPage if self.pagination.is_carousel() => {
                self.previous();
                EventResult::Claimed
            }
            ClickTarget::NextPage if self.pagination.is_carousel() => {
                self.next();
                EventResult::Claimed
            }
            ClickTarget::PreviousPage | ClickTarget::NextPage | ClickTarget::Decoration => {
                EventResult::Bubbled
            }
        }
    }

    pub fn into_navigator(self) -> N {
        self.navigator
    }
}

impl<R, F, N> fmt::Debug for InfoCard<R, F, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InfoCard")
            .field("listings", &self.listings)
            .field("pagination", &self.pagination)
            .field("config", &self.config)
            .field("root_class_name", &self.root_class_name)
            .field("class_name", &self.class_name)
            .field("on_click", &self.on_click.as_ref().map(|_| ".."))
            .finish_non_exhaustive()
    }
}
