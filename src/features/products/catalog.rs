#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

static CATALOG: [Product; 4] = [
    Product {
        id: "p1",
        name: "Trail Backpack",
        description: "A 28 litre daypack with a padded laptop sleeve and rain cover.",
    },
    Product {
        id: "p2",
        name: "Insulated Bottle",
        description: "Double-walled steel bottle that keeps drinks cold for 24 hours.",
    },
    Product {
        id: "p3",
        name: "Camp Lantern",
        description: "Rechargeable LED lantern with three brightness levels.",
    },
    Product {
        id: "p4",
        name: "Merino Beanie",
        description: "Lightweight wool beanie for cold mornings on the trail.",
    },
];

pub fn products() -> &'static [Product] {
    &CATALOG
}

/// Looks a product up by id. Unknown ids yield `None`.
pub fn find_product(id: &str) -> Option<&'static Product> {
    CATALOG.iter().find(|product| product.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_known_products() {
        let product = find_product("p2").unwrap();
        assert_eq!(product.name, "Insulated Bottle");
    }

    #[test]
    fn unknown_ids_are_none() {
        assert!(find_product("p99").is_none());
        assert!(find_product("").is_none());
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<_> = products().iter().map(|product| product.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), products().len());
    }
}
