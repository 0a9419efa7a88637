// Example: a simulated map host driving an info card through a mount/page/click/unmount cycle.
use infocard::{
    ClickTarget, DrawRequest, InfoCard, LatLng, Listing, Money, Positionable, SafeOverlayAnchor,
};
use infocard_adapter::{History, MarketplaceInfoCard, MinorUnitFormatter, RouteTable};

#[derive(Debug, Default)]
struct Div {
    left: f64,
    top: f64,
    width: f64,
    height: f64,
}

struct Map {
    attached: bool,
    zoom_scale: f64,
}

impl Positionable for Map {
    type Panes = &'static str;
    type Element = Div;
    type Error = std::convert::Infallible;

    fn panes(&self) -> Option<&'static str> {
        self.attached.then_some("floatPane")
    }

    fn draw(&mut self, request: DrawRequest<'_, &'static str, Div>) -> Result<(), Self::Error> {
        let x = request.props.position.lng * self.zoom_scale;
        let y = -request.props.position.lat * self.zoom_scale;
        let off = request.pixel_offset(request.element.width, request.element.height);
        let div = request.element;
        div.left = x + off.x;
        div.top = y + off.y;
        Ok(())
    }
}

fn main() {
    let routes = RouteTable::marketplace()
        .listing_routes()
        .expect("marketplace routes define ListingPage");
    let here = LatLng::new(60.1699, 24.9384);
    let listings = vec![
        Listing::new("a1", "Harbour Sauna", here).with_price(Some(Money::new(4500, "USD"))),
        Listing::new("b2", "Island Cabin", here).with_price(Some(Money::new(12000, "EUR"))),
        Listing::new("c3", "Forest Yurt", here),
    ];

    let mut card: MarketplaceInfoCard =
        InfoCard::new(listings, routes, MinorUnitFormatter, History::new("/s"))
            .with_on_click(|| println!("closing other overlays"));

    let mut map = Map {
        attached: true,
        zoom_scale: 100.0,
    };
    let mut anchor = SafeOverlayAnchor::new(card.overlay_props());
    anchor.mount(Div {
        width: 250.0,
        height: 210.0,
        ..Div::default()
    });

    for target in [ClickTarget::NextPage, ClickTarget::NextPage, ClickTarget::Card] {
        let view = card.render();
        anchor.set_props(view.overlay);
        let outcome = anchor.draw(&mut map).unwrap_or_else(|never| match never {});
        println!(
            "{:?} at {:?}: {} / {:?} [{}] pagination={:?}",
            outcome,
            anchor.element().map(|d| (d.left, d.top)),
            view.card.title,
            view.card.price_str(),
            view.card.anchor_class,
            view.pagination.map(|p| p.label),
        );
        println!("click {:?} -> {:?}", target, card.handle_click(target));
    }

    // The host detaches the map before the overlay is torn down.
    map.attached = false;
    println!("draw after detach: {:?}", anchor.draw(&mut map));
    anchor.unmount();
    map.attached = true;
    println!("draw after unmount: {:?}", anchor.draw(&mut map));

    println!("history: {:?}", card.navigator().entries());
}
