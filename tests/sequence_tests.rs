//! Unit tests for map and filter.

use funcalg::{Error, Function, Value, chain, filter, map};
use rstest::rstest;
use serde_json::json;

fn double() -> Function {
    Function::unary(|x| json!(x.as_i64().unwrap() * 2))
}

fn greater_than(bound: i64) -> Function {
    Function::unary(move |x| json!(x.as_i64().unwrap() > bound))
}

#[rstest]
fn test_map_doubles() {
    let input = json!([1, 2, 3]);

    assert_eq!(map(double()).apply(vec![input.clone()]).unwrap(), json!([2, 4, 6]));
    assert_eq!(input, json!([1, 2, 3]));
}

#[rstest]
fn test_filter_keeps_matching() {
    let input = json!([1, 2, 3]);

    assert_eq!(
        filter(greater_than(1)).apply(vec![input.clone()]).unwrap(),
        json!([2, 3])
    );
    assert_eq!(input, json!([1, 2, 3]));
}

#[rstest]
#[case(json!([]), json!([]))]
#[case(json!(null), json!([]))]
#[case(json!([5]), json!([10]))]
fn test_map_edge_cases(#[case] input: Value, #[case] expected: Value) {
    assert_eq!(map(double()).apply(vec![input]).unwrap(), expected);
}

#[rstest]
fn test_map_preserves_length() {
    let constant = Function::unary(|_| json!(null));
    let result = map(constant).apply(vec![json!([1, 2, 3, 4])]).unwrap();

    assert_eq!(result.as_array().unwrap().len(), 4);
}

#[rstest]
fn test_filter_preserves_relative_order() {
    let odd = Function::unary(|x| json!(x.as_i64().unwrap() % 2 != 0));

    assert_eq!(
        filter(odd).apply(vec![json!([9, 2, 7, 4, 5, 1])]).unwrap(),
        json!([9, 7, 5, 1])
    );
}

#[rstest]
fn test_filter_then_map() {
    let pipeline = chain([filter(greater_than(2)), map(double())]);

    assert_eq!(
        pipeline.apply(vec![json!([1, 2, 3, 4])]).unwrap(),
        json!([6, 8])
    );
}

#[rstest]
fn test_map_propagates_error() {
    let reject_negative = Function::try_unary(|x| {
        if x.as_i64().unwrap() < 0 {
            Err(Error::function("negative element"))
        } else {
            Ok(x)
        }
    });

    let error = map(reject_negative)
        .apply(vec![json!([1, -1, 2])])
        .unwrap_err();

    assert_eq!(error.to_string(), "negative element");
}

#[rstest]
fn test_filter_rejects_string() {
    let error = filter(greater_than(0)).apply(vec![json!("123")]).unwrap_err();

    assert!(matches!(error, Error::NotACollection { found: "string" }));
}
