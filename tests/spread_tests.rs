//! Unit tests for spread and unspread.

use funcalg::{Error, Function, Value, compose, spread, unspread};
use rstest::rstest;
use serde_json::json;

fn concat(values: &[Value]) -> Value {
    if values.iter().all(Value::is_string) {
        json!(values.iter().map(|value| value.as_str().unwrap()).collect::<String>())
    } else {
        json!(values.iter().map(|value| value.as_i64().unwrap()).sum::<i64>())
    }
}

#[rstest]
#[case(vec![json!(1), json!(2), json!(3)], json!(6))]
#[case(vec![json!("a"), json!("b"), json!("c")], json!("abc"))]
fn test_spread(#[case] arguments: Vec<Value>, #[case] expected: Value) {
    let sum = Function::unary(|list| concat(list.as_array().unwrap()));
    let sums = spread(sum);

    assert_eq!(sums.apply(arguments).unwrap(), expected);
}

#[rstest]
#[case(json!([1, 2, 3]), json!(6))]
#[case(json!(["a", "b", "c"]), json!("abc"))]
fn test_unspread(#[case] list: Value, #[case] expected: Value) {
    let add_three = Function::new(|arguments| Ok(concat(&arguments).into()));
    let add_three = unspread(add_three);

    assert_eq!(add_three.apply(vec![list]).unwrap(), expected);
}

#[rstest]
fn test_spread_preserves_order() {
    let first = Function::unary(|list| list[0].clone());

    assert_eq!(
        spread(first).apply(vec![json!("x"), json!("y")]).unwrap(),
        json!("x")
    );
}

#[rstest]
fn test_unspread_rejects_scalar() {
    let error = unspread(Function::identity())
        .apply(vec![json!(42)])
        .unwrap_err();

    assert!(matches!(error, Error::NotASequence { found: "number" }));
}

#[rstest]
fn test_unspread_after_array_stage() {
    let to_pair = Function::unary(|x| json!([x.clone(), x]));
    let product = Function::binary(|x, y| json!(x.as_i64().unwrap() * y.as_i64().unwrap()));

    let square = compose([unspread(product), to_pair]);

    assert_eq!(square.apply(vec![json!(7)]).unwrap(), json!(49));
}
