use serde_json::json;

fn main() {
    let cart = json!({
        "customer": {"tier": "gold", "country": "FR"},
        "items": [
            {"sku": "tea", "price": 12},
            {"sku": "mug", "price": 18},
        ],
        "total": 30,
    });

    let criteria = json!({
        "customer.tier": {"in": ["gold", "platinum"]},
        "customer.country": "FR",
        "total": {"gte": 25},
        "items.sku": "tea",
    });

    println!("Eligible: {}", eligo::is_eligible(&cart, &criteria));
}
