//! The immutable product catalog of the store under verification.
//!
//! Catalog data is supplied by the storefront, not by this crate; the
//! entries here mirror what the demo store renders so that cart-view
//! queries can be checked against exact names, descriptions, and prices.

use rust_decimal::Decimal;
use serde::Serialize;

/// One catalog entry. Display price carries exactly two fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    price_cents: i64,
}

impl Product {
    /// Unit price as a decimal.
    pub fn price(&self) -> Decimal {
        Decimal::new(self.price_cents, 2)
    }

    /// Unit price the way the store renders it, e.g. `29.99`.
    pub fn display_price(&self) -> String {
        self.price().to_string()
    }
}

pub const BACKPACK: Product = Product {
    id: "sauce-labs-backpack",
    name: "Sauce Labs Backpack",
    description: "carry.allTheThings() with the sleek, streamlined Sly Pack \
                  that melds uncompromising style with unequaled laptop and \
                  tablet protection.",
    price_cents: 2999,
};

pub const BIKE_LIGHT: Product = Product {
    id: "sauce-labs-bike-light",
    name: "Sauce Labs Bike Light",
    description: "A red light isn't the desired state in testing but sure \
                  makes an easy to use bike light. Water-resistant with 3 \
                  lighting modes, 1 AAA battery included.",
    price_cents: 999,
};

pub const BOLT_TSHIRT: Product = Product {
    id: "sauce-labs-bolt-t-shirt",
    name: "Sauce Labs Bolt T-Shirt",
    description: "Get your testing superhero on with the Sauce Labs bolt \
                  T-shirt. From American Apparel, 100% ringspun combed \
                  cotton, heather gray with red bolt.",
    price_cents: 1599,
};

/// Every product the verification flows exercise.
pub fn all() -> &'static [Product] {
    &[BACKPACK, BIKE_LIGHT, BOLT_TSHIRT]
}

/// Looks a product up by its display name.
pub fn by_name(name: &str) -> Option<&'static Product> {
    all().iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_price_has_two_fractional_digits() {
        assert_eq!(BACKPACK.display_price(), "29.99");
        assert_eq!(BIKE_LIGHT.display_price(), "9.99");
        assert_eq!(BOLT_TSHIRT.display_price(), "15.99");
    }

    #[test]
    fn by_name_finds_catalog_entries() {
        assert_eq!(by_name("Sauce Labs Backpack"), Some(&BACKPACK));
        assert_eq!(by_name("Sauce Labs Onesie"), None);
    }
}
