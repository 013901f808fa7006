//! Navigation targets shared by every view.

use core::fmt;

use crate::types::ProductId;

/// A page the storefront can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Laptops,
    Gaming,
    Accessories,
    Offers,
    Compare,
    Cart,
    Login,
    Register,
    Product(ProductId),
}

/// A header navigation link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub route: Route,
}

/// Links shown in the site header, in display order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink {
        name: "HOME",
        route: Route::Home,
    },
    NavLink {
        name: "LAPTOPS",
        route: Route::Laptops,
    },
    NavLink {
        name: "GAMING",
        route: Route::Gaming,
    },
    NavLink {
        name: "ACCESSORIES",
        route: Route::Accessories,
    },
    NavLink {
        name: "OFFERS",
        route: Route::Offers,
    },
];

impl Route {
    /// URL path for this route.
    #[must_use]
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_string(),
            Self::Laptops => "/laptops".to_string(),
            Self::Gaming => "/gaming".to_string(),
            Self::Accessories => "/accessories".to_string(),
            Self::Offers => "/offers".to_string(),
            Self::Compare => "/compare".to_string(),
            Self::Cart => "/cart".to_string(),
            Self::Login => "/login".to_string(),
            Self::Register => "/register".to_string(),
            Self::Product(id) => format!("/product/{id}"),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
