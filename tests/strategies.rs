use eligo::{CompareOp, Criterion};
use proptest::prelude::*;
use serde_json::{json, Value};

// --- Fixed cart schema ---
// customer.tier : string, one of TIERS
// customer.age  : integer (0..=120)
// total         : integer (0..=1000)
// items         : 0..4 records, each with sku (one of SKUS) and price (1..=200)

pub const TIERS: &[&str] = &["bronze", "silver", "gold"];
pub const SKUS: &[&str] = &["mug", "tea", "book", "pen"];

/// Paths that resolve against every cart produced by [`arb_cart`].
pub const SCALAR_PATHS: &[&str] = &["customer.tier", "customer.age", "total"];

/// Generate a cart that follows the fixed schema.
pub fn arb_cart() -> impl Strategy<Value = Value> {
    (
        prop::sample::select(TIERS),
        0_i64..=120,
        0_i64..=1000,
        prop::collection::vec((prop::sample::select(SKUS), 1_i64..=200), 0..4),
    )
        .prop_map(|(tier, age, total, items)| {
            let items: Vec<Value> = items
                .into_iter()
                .map(|(sku, price)| json!({"sku": sku, "price": price}))
                .collect();
            json!({
                "customer": {"tier": tier, "age": age},
                "total": total,
                "items": items,
            })
        })
}

fn arb_compare_op() -> impl Strategy<Value = CompareOp> {
    prop_oneof![
        Just(CompareOp::Gt),
        Just(CompareOp::Gte),
        Just(CompareOp::Lt),
        Just(CompareOp::Lte),
    ]
}

/// A leaf criterion suitable for the numeric fields.
pub fn arb_numeric_leaf() -> impl Strategy<Value = Criterion> {
    prop_oneof![
        (0_i64..=1000).prop_map(|n| Criterion::Scalar(json!(n))),
        (arb_compare_op(), 0_i64..=1000).prop_map(|(op, n)| Criterion::compare(op, n)),
        prop::collection::vec(0_i64..=1000, 0..4)
            .prop_map(|ns| Criterion::In(ns.into_iter().map(Value::from).collect())),
    ]
}

/// Operator-only leaves: valid as `and`/`or` branches.
fn arb_operator_leaf() -> impl Strategy<Value = Criterion> {
    prop_oneof![
        (arb_compare_op(), 0_i64..=1000).prop_map(|(op, n)| Criterion::compare(op, n)),
        prop::collection::vec(0_i64..=1000, 0..4)
            .prop_map(|ns| Criterion::In(ns.into_iter().map(Value::from).collect())),
    ]
}

/// Composite criteria over a numeric field, bounded depth. `and`/`or` branches
/// carry distinct operator keys so the rendered JSON keeps every branch.
pub fn arb_numeric_criterion(max_depth: u32) -> impl Strategy<Value = Criterion> {
    arb_operator_leaf().prop_recursive(max_depth, 16, 2, |inner| {
        prop_oneof![
            (inner.clone(), arb_compare_op(), 0_i64..=1000)
                .prop_map(|(c, op, n)| Criterion::and(vec![c, Criterion::compare(op, n)])),
            (inner, arb_compare_op(), 0_i64..=1000)
                .prop_map(|(c, op, n)| Criterion::or(vec![c, Criterion::compare(op, n)])),
        ]
    })
}

/// An arbitrary JSON value of bounded size, used to probe for panics.
pub fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        any::<f64>()
            .prop_filter("must be finite", |f| f.is_finite())
            .prop_map(Value::from),
        "[a-z]{0,4}".prop_map(Value::String),
        prop::sample::select(&["gt", "lt", "gte", "lte", "and", "or", "in"][..])
            .prop_map(|s| Value::String(s.to_owned())),
    ];
    leaf.prop_recursive(4, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::vec(
                (
                    prop_oneof![
                        "[a-z]{1,3}",
                        prop::sample::select(&["gt", "lt", "gte", "lte", "and", "or", "in"][..])
                            .prop_map(str::to_owned),
                    ],
                    inner
                ),
                0..4
            )
            .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}
