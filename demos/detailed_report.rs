use eligo::Evaluator;
use serde_json::json;

fn main() {
    let evaluator = Evaluator::new();
    let cart = json!({"total": 40, "items": [{"category": "toys"}]});

    let genuine = json!({"total": {"gte": 25}, "items.category": "books"});
    let malformed = json!({"total": {"gte": 25, "lt": 100}});
    let unresolved = json!({"customer.tier": "gold"});

    for criteria in [genuine, malformed, unresolved] {
        let result = evaluator.evaluate(&cart, &criteria);
        println!("{result}");
        if let Some(rejection) = result.rejection() {
            let kind = if rejection.is_error() { "error" } else { "mismatch" };
            println!("  rejected by {:?} ({kind})", rejection.key());
        }
    }
}
