//! End-to-end scenarios combining several combinators.

use funcalg::prelude::*;
use rstest::{fixture, rstest};

#[fixture]
fn person() -> Value {
    json!({
        "name": "David",
        "cats": [
            {"name": "Dave", "age": 7},
            {"name": "Davis", "age": 2}
        ]
    })
}

fn suffix(text: &'static str) -> Function {
    Function::unary(move |name| json!(format!("{}{text}", name.as_str().unwrap())))
}

#[rstest]
fn test_nested_object_with_sequence_hooks(person: Value) {
    let snapshot = person.clone();
    let older_than_five = Function::unary(|cat| json!(cat["age"].as_i64().unwrap() > 5));
    let rename_cat = object(KeyFunctions::from([("name", suffix(" the cat"))]));

    let transformer = object(
        KeyFunctions::new()
            .with("name", suffix(" the cat lover"))
            .with("cats", chain!(filter(older_than_five), map(rename_cat.into()))),
    );

    assert_eq!(
        transformer.apply(&person).unwrap(),
        json!({
            "name": "David the cat lover",
            "cats": [{"name": "Dave the cat", "age": 7}]
        })
    );
    assert_eq!(person, snapshot);
}

#[rstest]
fn test_compose_with_mult_end_to_end() {
    let join = Function::binary(|x, y| json!(format!("{x}, {y}")));
    let increment = Function::unary(|x| json!(x.as_i64().unwrap() + 1));
    let decrement = Function::unary(|y| json!(y.as_i64().unwrap() - 1));

    let pipeline = compose!(join, mult!(increment, decrement));

    assert_eq!(pipeline.apply(vec![json!(1), json!(1)]).unwrap(), json!("2, 0"));
}

#[rstest]
fn test_pipeline_over_records() {
    let records = json!([
        {"id": 1, "score": 40},
        {"id": 2, "score": 75},
        {"id": 3, "score": 90}
    ]);
    let passed = Function::unary(|record| json!(record["score"].as_i64().unwrap() >= 50));
    let grade = object(KeyFunctions::from([(
        "score",
        Function::unary(|score| json!(if score.as_i64().unwrap() >= 85 { "A" } else { "B" })),
    )]));
    let ids_and_grades = chain!(filter(passed), map(grade.to_function()));

    assert_eq!(
        ids_and_grades.apply(vec![records]).unwrap(),
        json!([{"id": 2, "score": "B"}, {"id": 3, "score": "A"}])
    );
}

#[rstest]
fn test_spread_mult_and_unspread_together() {
    // Split a pair, process each half independently, then rebuild an array.
    let halves = mult!(
        map(Function::unary(|x| json!(x.as_i64().unwrap() * 10))),
        Function::unary(|label| json!(label.as_str().unwrap().to_uppercase()))
    );
    let rebuild = spread(Function::identity());
    let split = unspread(Function::new(|arguments| {
        Ok(Output::Spread(Tuple::new(arguments)))
    }));

    let pipeline = compose!(rebuild, halves, split);

    assert_eq!(
        pipeline.apply(vec![json!([[1, 2], "ok"])]).unwrap(),
        json!([[10, 20], "OK"])
    );
}

#[rstest]
fn test_errors_reach_the_caller_through_every_layer() {
    let strict = Function::try_unary(|value| match value.as_i64() {
        Some(number) => Ok(json!(number)),
        None => Err(Error::function(format!("not a number: {value}"))),
    });
    let transformer = object(KeyFunctions::from([("values", map(strict))]));
    let pipeline = compose!(Function::identity(), transformer);

    let error = pipeline
        .apply(vec![json!({"values": [1, "two", 3]})])
        .unwrap_err();

    assert_eq!(error.to_string(), "not a number: \"two\"");
}

#[rstest]
fn test_runs_under_a_tracing_subscriber() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("funcalg=trace"))
        .with_test_writer()
        .try_init();

    let transformer = object(vec![Function::identity()]);
    let pipeline = compose!(
        transformer,
        spread(Function::identity()),
        mult!(Function::identity(), Function::identity())
    );

    assert_eq!(pipeline.apply(vec![json!(1)]).unwrap(), json!([1, null]));
}
