use std::sync::Arc;
use std::thread;

use eligo::{Criteria, Evaluator};
use serde_json::json;

fn main() {
    let criteria = Arc::new(
        Criteria::from_json(r#"{"customer.age": {"gte": 18}, "customer.status": "active"}"#)
            .expect("failed to compile criteria"),
    );
    let evaluator = Arc::new(Evaluator::new());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let criteria = Arc::clone(&criteria);
            let evaluator = Arc::clone(&evaluator);
            thread::spawn(move || {
                let cart = json!({"customer": {"age": 16 + i, "status": "active"}});
                let result = evaluator.evaluate_compiled(&cart, &criteria);
                println!("Thread {i}: {result}");
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
}
