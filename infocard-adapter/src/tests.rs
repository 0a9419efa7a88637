use crate::*;

use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use infocard::{
    ClickTarget, EventResult, InfoCard, InfoCardConfig, LatLng, Listing, ListingId,
    ListingRoutes, Money, MoneyFormatter, Navigator,
};

#[test]
fn marketplace_listing_url() {
    let routes = RouteTable::marketplace().listing_routes().unwrap();
    let slug = routes.create_slug("Cozy Lakeside Sauna");
    assert_eq!(slug, "cozy-lakeside-sauna");
    assert_eq!(
        routes.listing_url(&ListingId::new("5a8f1b2c"), &slug),
        "/l/cozy-lakeside-sauna/5a8f1b2c"
    );
    assert_eq!(routes.listing_url(&ListingId::new("x"), ""), "/l//x");
}

#[test]
fn path_for_expands_and_reports_missing_values() {
    let table = RouteTable::marketplace();
    assert_eq!(table.path_for("LandingPage", &[]).unwrap(), "/");
    assert_eq!(table.path_for("SearchPage", &[("id", "ignored")]).unwrap(), "/s");
    assert_eq!(
        table.path_for("ProfilePage", &[("id", "u-1")]).unwrap(),
        "/u/u-1"
    );
    assert_eq!(
        table.path_for("ListingPage", &[("id", "1")]),
        Err(RouteError::MissingValue {
            route: "ListingPage".into(),
            param: "slug".into()
        })
    );
    assert_eq!(
        table.path_for("Nope", &[]),
        Err(RouteError::UnknownRoute("Nope".into()))
    );
}

#[test]
fn route_templates_are_validated() {
    let malformed = |t: &str| match RoutePath::parse(t) {
        Err(RouteError::MalformedTemplate { reason, .. }) => reason,
        other => panic!("expected malformed template for {t:?}, got {other:?}"),
    };
    assert_eq!(malformed("l/:id"), "must start with `/`");
    assert_eq!(malformed("/l/:"), "empty parameter name");
    assert_eq!(malformed("/l//x"), "empty segment");
    assert_eq!(malformed("/l/:id/:id"), "duplicate parameter");

    let path = RoutePath::parse("/listing/:id/:slug").unwrap();
    assert_eq!(path.params().collect::<Vec<_>>(), vec!["id", "slug"]);
    assert_eq!(path.template(), "/listing/:id/:slug");
}

#[test]
fn listing_routes_require_id_and_slug() {
    let table = RouteTable::new()
        .with_route("Short", "/l/:id")
        .and_then(|t| t.with_route("Variant", "/l/:slug/:id/:variant"))
        .and_then(|t| t.with_route("Alt", "/listing/:id/:slug"))
        .unwrap();

    assert_eq!(
        table.listing_routes_for("Short").unwrap_err(),
        RouteError::MissingParam {
            route: "Short".into(),
            param: "slug".into()
        }
    );
    assert!(matches!(
        table.listing_routes_for("Variant"),
        Err(RouteError::UnexpectedParam { .. })
    ));
    assert_eq!(
        table.listing_routes().unwrap_err().to_string(),
        "route `ListingPage` is not defined"
    );

    let routes = table.listing_routes_for("Alt").unwrap();
    assert_eq!(routes.listing_url(&ListingId::new("7"), "tent"), "/listing/7/tent");

    assert_eq!(
        RouteTable::new().with_route("A", "/a").unwrap().with_route("A", "/b"),
        Err(RouteError::DuplicateRoute("A".into()))
    );
}

#[test]
fn custom_slugify_is_used() {
    let routes = RouteTable::marketplace()
        .listing_routes()
        .unwrap()
        .with_slugify(|_| String::from("fixed"));
    assert_eq!(routes.create_slug("Anything"), "fixed");
}

#[test]
fn slugs_are_url_safe() {
    assert_eq!(create_slug("  Two   Spaces  "), "two-spaces");
    assert_eq!(create_slug("a\tb\nc"), "a-b-c");
    assert_eq!(create_slug("50% off"), "50%25-off");
    assert_eq!(create_slug("~ok*'_."), "~ok*'_.");
    assert_eq!(create_slug("Rock & Roll"), "rock-%26-roll");
    assert_eq!(create_slug("Sauna (wood-fired)!"), "sauna-(wood-fired)!");
    assert_eq!(create_slug("Mökki"), "m%C3%B6kki");
    assert_eq!(create_slug("a/b?c"), "a%2Fb%3Fc");
    assert_eq!(create_slug(""), "");
}

#[test]
fn history_push_truncates_forward_entries() {
    let mut h = History::new("/s");
    assert!(!h.can_go_back());
    h.push("/l/a/1");
    h.push("/l/b/2");
    assert_eq!(h.location(), "/l/b/2");
    assert!(h.back());
    assert!(h.back());
    assert!(!h.back());
    assert_eq!(h.location(), "/s");
    assert!(h.forward());

    h.push("/l/c/3");
    assert_eq!(h.entries(), ["/s", "/l/a/1", "/l/c/3"]);
    assert!(!h.can_go_forward());

    h.replace("/l/c/3?tab=reviews");
    assert_eq!(h.len(), 3);
    assert_eq!(h.location(), "/l/c/3?tab=reviews");
    assert_eq!(History::default().location(), "/");
}

#[test]
fn formats_minor_units_per_locale() {
    let f = MinorUnitFormatter::new();
    assert_eq!(f.format_money(5500, "USD", "en"), "$55.00");
    assert_eq!(f.format_money(123456789, "USD", "en-US"), "$1,234,567.89");
    assert_eq!(f.format_money(-1999, "USD", "en"), "-$19.99");
    assert_eq!(f.format_money(5, "EUR", "en"), "€0.05");
    assert_eq!(f.format_money(123456, "EUR", "fi"), "1\u{a0}234,56\u{a0}€");
    assert_eq!(f.format_money(123456, "EUR", "de_DE"), "1.234,56\u{a0}€");
    assert_eq!(f.format_money(1200, "JPY", "en"), "¥1,200");
    assert_eq!(f.format_money(1000, "CHF", "en"), "CHF\u{a0}10.00");
    assert_eq!(f.format_money(250, "XYZ", "en"), "XYZ\u{a0}2.50");
}

#[test]
fn marketplace_card_end_to_end() {
    let routes = RouteTable::marketplace().listing_routes().unwrap();
    let here = LatLng::new(60.1699, 24.9384);
    let listings = vec![
        Listing::new("1", "Harbour Sauna", here).with_price(Some(Money::new(4500, "EUR"))),
        Listing::new("2", "Island Cabin", here).with_price(Some(Money::new(12000, "USD"))),
    ];
    let config = InfoCardConfig::default().with_display_currency("EUR").with_locale("fi");

    let mut card: MarketplaceInfoCard =
        InfoCard::new(listings, routes, MinorUnitFormatter, History::new("/s"))
            .with_config(config);

    let view = card.render();
    assert_eq!(view.card.price_str(), Some("45,00\u{a0}€"));
    assert_eq!(view.pagination.as_ref().map(|p| p.label.as_str()), Some("1/2"));

    assert_eq!(card.handle_click(ClickTarget::NextPage), EventResult::Claimed);
    let view = card.render();
    assert_eq!(view.card.price_str(), Some("USD"));
    assert_eq!(view.card.href, "/l/island-cabin/2");

    assert_eq!(card.handle_click(ClickTarget::Card), EventResult::Claimed);
    let history = card.into_navigator();
    assert_eq!(history.entries(), ["/s", "/l/island-cabin/2"]);
}
