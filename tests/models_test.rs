//! Deserialization tests for the backend wire models.

mod common;

use rust_decimal_macros::dec;

use bowlr::models::{Catalog, Item, OrderResponse, Totals};

use common::{CALCULATE_JSON, INGREDIENTS_JSON, ORDER_JSON};

const NEGATIVE_TOTALS_JSON: &str = include_str!("fixtures/calculate_negative.json");

#[test]
fn test_ingredients_deserialize() {
    let items: Vec<Item> =
        serde_json::from_str(INGREDIENTS_JSON).expect("Failed to deserialize ingredients");

    assert_eq!(items.len(), 4);

    let quinoa = &items[0];
    assert_eq!(quinoa.id, 11);
    assert_eq!(quinoa.name, "Quinoa");
    assert_eq!(quinoa.price, dec!(35));
    assert_eq!(quinoa.calories, dec!(120));
    assert_eq!(quinoa.protein, dec!(4.4));
    assert_eq!(quinoa.carbs, dec!(21.3));
    assert_eq!(quinoa.fat, dec!(1.9));

    let tofu = &items[3];
    assert_eq!(tofu.price, dec!(45.5));
    assert_eq!(tofu.fat, dec!(5.8));
}

#[test]
fn test_ingredients_form_catalog_in_served_order() {
    let items: Vec<Item> = serde_json::from_str(INGREDIENTS_JSON).unwrap();
    let catalog = Catalog::new(items).expect("fixture is a valid catalog");

    let ids: Vec<u32> = catalog.items().iter().map(|i| i.id).collect();
    assert_eq!(ids, vec![11, 3, 7, 12]);
    assert_eq!(catalog.get(12).unwrap().name, "Tofu");
}

#[test]
fn test_calculate_response_deserializes() {
    let totals: Totals =
        serde_json::from_str(CALCULATE_JSON).expect("Failed to deserialize totals");

    assert_eq!(totals.calories, dec!(248));
    assert_eq!(totals.protein, dec!(24.4));
    assert_eq!(totals.carbs, dec!(23.3));
    assert_eq!(totals.fat, dec!(6.9));
    assert_eq!(totals.price, dec!(85.5));
    assert_eq!(totals.negative_field(), None);
}

#[test]
fn test_negative_totals_are_flagged() {
    let totals: Totals = serde_json::from_str(NEGATIVE_TOTALS_JSON).unwrap();
    assert_eq!(totals.negative_field(), Some("price"));
}

#[test]
fn test_calculate_response_missing_field_is_rejected() {
    let result = serde_json::from_str::<Totals>(r#"{"calories":1,"protein":1,"carbs":1,"fat":1}"#);
    assert!(result.is_err());
}

#[test]
fn test_order_response_deserializes() {
    let response: OrderResponse =
        serde_json::from_str(ORDER_JSON).expect("Failed to deserialize order response");
    assert_eq!(response.order_id, 314159);
}

#[test]
fn test_item_with_missing_field_is_rejected() {
    let result = serde_json::from_str::<Item>(r#"{"id":1,"name":"Lettuce","price":20}"#);
    assert!(result.is_err());
}
