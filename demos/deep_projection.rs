use eligo::{Evaluator, ProjectionMode};
use serde_json::json;

fn main() {
    let cart = json!({
        "orders": [
            {"items": [{"sku": "tea"}, {"sku": "mug"}]},
            {"items": [{"sku": "book"}]},
        ]
    });
    let criteria = json!({"orders.items.sku": {"in": ["book"]}});

    for mode in [ProjectionMode::Shallow, ProjectionMode::Deep] {
        let evaluator = Evaluator::builder().projection(mode).build();
        println!("{mode:?}: {}", evaluator.evaluate(&cart, &criteria));
    }
}
