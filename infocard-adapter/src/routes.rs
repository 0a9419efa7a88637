use alloc::string::{String, ToString};
use alloc::vec;
use alloc::vec::Vec;

use infocard::{ListingId, ListingRoutes};
use thiserror::Error;

use crate::create_slug;

/// Name of the listing page route in [`RouteTable::marketplace`].
pub const LISTING_PAGE: &str = "ListingPage";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("route `{0}` is not defined")]
    UnknownRoute(String),
    #[error("route `{0}` is already defined")]
    DuplicateRoute(String),
    #[error("route `{route}` has no `:{param}` path parameter")]
    MissingParam { route: String, param: String },
    #[error("route `{route}` has unexpected path parameter `:{param}`")]
    UnexpectedParam { route: String, param: String },
    #[error("no value for path parameter `:{param}` of route `{route}`")]
    MissingValue { route: String, param: String },
    #[error("malformed path template `{template}`: {reason}")]
    MalformedTemplate {
        template: String,
        reason: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Static(String),
    Param(String),
}

/// A parsed path template such as `/l/:slug/:id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoutePath {
    template: String,
    segments: Vec<Segment>,
}

impl RoutePath {
    pub fn parse(template: &str) -> Result<Self, RouteError> {
        let malformed = |reason| RouteError::MalformedTemplate {
            template: template.to_string(),
            reason,
        };

        let Some(rest) = template.strip_prefix('/') else {
            return Err(malformed("must start with `/`"));
        };

        let mut segments = Vec::new();
        if !rest.is_empty() {
            for part in rest.split('/') {
                let segment = match part.strip_prefix(':') {
                    Some("") => return Err(malformed("empty parameter name")),
                    Some(name) => {
                        if segments.contains(&Segment::Param(name.to_string())) {
                            return Err(malformed("duplicate parameter"));
                        }
                        Segment::Param(name.to_string())
                    }
                    None if part.is_empty() => return Err(malformed("empty segment")),
                    None => Segment::Static(part.to_string()),
                };
                segments.push(segment);
            }
        }

        Ok(Self {
            template: template.to_string(),
            segments,
        })
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn params(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(name) => Some(name.as_str()),
            Segment::Static(_) => None,
        })
    }

    pub fn has_param(&self, name: &str) -> bool {
        self.params().any(|p| p == name)
    }

    /// Substitutes every parameter. Values are inserted verbatim.
    fn render<'v>(&self, value: impl Fn(&str) -> &'v str) -> String {
        if self.segments.is_empty() {
            return String::from("/");
        }
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            match segment {
                Segment::Static(s) => out.push_str(s),
                Segment::Param(name) => out.push_str(value(name)),
            }
        }
        out
    }
}

/// Named path templates of an application.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteTable {
    routes: Vec<(String, RoutePath)>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// The marketplace's standard routes, including [`LISTING_PAGE`] at `/l/:slug/:id`.
    pub fn marketplace() -> Self {
        let stat = |s: &str| Segment::Static(s.to_string());
        let param = |s: &str| Segment::Param(s.to_string());
        let route = |name: &str, template: &str, segments: Vec<Segment>| {
            (
                name.to_string(),
                RoutePath {
                    template: template.to_string(),
                    segments,
                },
            )
        };

        Self {
            routes: vec![
                route("LandingPage", "/", Vec::new()),
                route("SearchPage", "/s", vec![stat("s")]),
                route(
                    LISTING_PAGE,
                    "/l/:slug/:id",
                    vec![stat("l"), param("slug"), param("id")],
                ),
                route("ProfilePage", "/u/:id", vec![stat("u"), param("id")]),
            ],
        }
    }

    pub fn with_route(mut self, name: &str, template: &str) -> Result<Self, RouteError> {
        if self.get(name).is_some() {
            return Err(RouteError::DuplicateRoute(name.to_string()));
        }
        let path = RoutePath::parse(template)?;
        self.routes.push((name.to_string(), path));
        Ok(self)
    }

    pub fn get(&self, name: &str) -> Option<&RoutePath> {
        self.routes.iter().find(|(n, _)| n == name).map(|(_, p)| p)
    }

    fn route(&self, name: &str) -> Result<&RoutePath, RouteError> {
        self.get(name)
            .ok_or_else(|| RouteError::UnknownRoute(name.to_string()))
    }

    /// Expands route `name` with `params`. Extra params are ignored.
    pub fn path_for(&self, name: &str, params: &[(&str, &str)]) -> Result<String, RouteError> {
        let path = self.route(name)?;
        let lookup = |param: &str| params.iter().find(|(k, _)| *k == param).map(|(_, v)| *v);
        if let Some(missing) = path.params().find(|p| lookup(*p).is_none()) {
            return Err(RouteError::MissingValue {
                route: name.to_string(),
                param: missing.to_string(),
            });
        }
        Ok(path.render(|param| lookup(param).unwrap_or_default()))
    }

    /// Canonical listing URLs from the [`LISTING_PAGE`] route.
    pub fn listing_routes(&self) -> Result<ListingPageRoutes, RouteError> {
        self.listing_routes_for(LISTING_PAGE)
    }

    /// Canonical listing URLs from route `name`, which must take exactly `:id` and `:slug`.
    pub fn listing_routes_for(&self, name: &str) -> Result<ListingPageRoutes, RouteError> {
        let path = self.route(name)?;
        for required in ["id", "slug"] {
            if !path.has_param(required) {
                return Err(RouteError::MissingParam {
                    route: name.to_string(),
                    param: required.to_string(),
                });
            }
        }
        if let Some(extra) = path.params().find(|p| !matches!(*p, "id" | "slug")) {
            return Err(RouteError::UnexpectedParam {
                route: name.to_string(),
                param: extra.to_string(),
            });
        }

        Ok(ListingPageRoutes {
            path: path.clone(),
            slugify: create_slug,
        })
    }
}

/// [`ListingRoutes`] backed by a validated listing page template.
#[derive(Clone, Debug)]
pub struct ListingPageRoutes {
    path: RoutePath,
    slugify: fn(&str) -> String,
}

impl ListingPageRoutes {
    /// Replaces the default [`create_slug`].
    pub fn with_slugify(mut self, slugify: fn(&str) -> String) -> Self {
        self.slugify = slugify;
        self
    }

    pub fn path(&self) -> &RoutePath {
        &self.path
    }
}

impl ListingRoutes for ListingPageRoutes {
    fn create_slug(&self, title: &str) -> String {
        (self.slugify)(title)
    }

    fn listing_url(&self, id: &ListingId, slug: &str) -> String {
        self.path
            .render(|param| if param == "id" { id.as_str() } else { slug })
    }
}
