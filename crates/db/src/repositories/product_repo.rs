//! Repository for the `products` table.

use crate::models::product::{CreateProduct, Product, UpdateProduct};

use super::entity_repo::{EntityRepo, EntitySchema, Field};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, stock, created_at";

/// Schema binding for `products`. Mutable fields: `name`, `stock`.
pub struct ProductSchema;

impl EntitySchema for ProductSchema {
    type Row = Product;
    type Create = CreateProduct;
    type Update = UpdateProduct;

    const ENTITY: &'static str = "Product";
    const TABLE: &'static str = "products";
    const COLUMNS: &'static str = COLUMNS;

    fn insert_fields(input: &CreateProduct) -> Vec<Field<'_>> {
        vec![
            Field::text("name", &input.name),
            Field::int("stock", input.stock),
        ]
    }

    fn changed_fields(input: &UpdateProduct) -> Vec<Field<'_>> {
        [
            input.name.as_deref().map(|v| Field::text("name", v)),
            input.stock.map(|v| Field::int("stock", v)),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

/// Provides CRUD operations for products.
pub type ProductRepo = EntityRepo<ProductSchema>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_stock_is_a_change() {
        let input = UpdateProduct {
            name: None,
            stock: Some(0),
        };
        assert_eq!(
            ProductSchema::changed_fields(&input),
            vec![Field::int("stock", 0)]
        );
    }

    #[test]
    fn changes_follow_schema_order() {
        let input = UpdateProduct {
            name: Some("Gadget".into()),
            stock: Some(3),
        };
        let columns: Vec<_> = ProductSchema::changed_fields(&input)
            .iter()
            .map(|f| f.column)
            .collect();
        assert_eq!(columns, ["name", "stock"]);
    }

    #[test]
    fn empty_update_has_no_changes() {
        assert!(ProductSchema::changed_fields(&UpdateProduct::default()).is_empty());
    }
}
