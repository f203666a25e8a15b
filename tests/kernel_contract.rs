//! Purpose: Lock the observable contract of the six sequence operations.
//! Exports: Integration tests only (no runtime exports).
//! Role: End-to-end coverage through the public `api` surface.
//! Invariants: Chunk concatenation reproduces input order; preserved keys round-trip.
//! Invariants: Precondition failures surface at the call boundary for both shapes.

use lazurite::api::{
    apply, chunk, duplicates, flatten, map, range, Applied, ChunkOptions, Container,
    DuplicateOptions, ErrorKind, Key, Source, Stream,
};
use serde_json::{json, Value};

fn letters() -> Container {
    Container::from_value(json!(["a", "b", "c", "d", "e"])).expect("container")
}

#[test]
fn chunk_concatenation_reproduces_values_in_order() {
    for size in 1..=6 {
        let chunks: Vec<Container> = chunk(letters().into(), ChunkOptions::new(size))
            .expect("chunk")
            .into_iter()
            .collect();
        for chunk in chunks.iter().take(chunks.len().saturating_sub(1)) {
            assert_eq!(chunk.len(), size);
        }
        let values: Vec<Value> = chunks
            .into_iter()
            .flat_map(|chunk| chunk.into_entries())
            .map(|(_, value)| value)
            .collect();
        let expected: Vec<Value> = letters().values().cloned().collect();
        assert_eq!(values, expected, "size {size}");
    }
}

#[test]
fn preserved_keys_reconstruct_the_original_container() {
    let original = Container::from_value(json!({"w": 1, "x": 2, "y": 3, "z": 4})).expect("container");
    let merged: Vec<_> = chunk(
        original.clone().into_stream().into(),
        ChunkOptions::new(3).preserve_keys(true),
    )
    .expect("chunk")
    .into_iter()
    .flat_map(|chunk| chunk.into_entries())
    .collect();
    assert_eq!(merged, original.into_entries());
}

#[test]
fn chunk_rejects_zero_size_before_any_production() {
    for source in [
        Source::from(letters()),
        Source::from(Stream::from_values((0..).map(Value::from))),
    ] {
        let err = chunk(source, ChunkOptions::new(0)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}

#[test]
fn non_iterable_input_is_rejected_at_the_typed_boundary() {
    for scalar in [json!(null), json!(true), json!(7), json!("text")] {
        let err = Source::from_value(scalar).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }
}

#[test]
fn map_of_empty_input_is_empty_for_both_shapes() {
    let eager = map(Container::new().into(), |value| value).realize();
    assert!(eager.is_empty());
    let lazy = map(Stream::from_entries(Vec::new()).into(), |value| value).realize();
    assert!(lazy.is_empty());
}

#[test]
fn map_preserves_keys_for_object_containers() {
    let container = Container::from_value(json!({"a": 1, "b": 2})).expect("container");
    let doubled = map(container.into(), |value| {
        Value::from(value.as_i64().expect("number") * 2)
    })
    .realize();
    assert_eq!(doubled.into_value(), json!({"a": 2, "b": 4}));
}

#[test]
fn flatten_yields_preorder_innermost_keys_on_the_stream_path() {
    let nested = Container::from_value(json!({"a": 1, "b": {"c": 2, "d": {"e": 3}}}))
        .expect("container");
    let leaves = flatten(nested.into_stream().into()).realize().into_entries();
    assert_eq!(
        leaves,
        vec![
            (Key::from("a"), json!(1)),
            (Key::from("c"), json!(2)),
            (Key::from("e"), json!(3)),
        ]
    );
}

#[test]
fn flatten_container_path_value_view_is_the_flat_leaf_list() {
    let nested = Container::from_value(json!({"a": 1, "b": {"c": 2, "d": {"e": 3}}}))
        .expect("container");
    let flat = flatten(nested.into()).realize();
    let values: Vec<Value> = flat.values().cloned().collect();
    assert_eq!(values, vec![json!(1), json!(2), json!(3)]);
}

#[test]
fn duplicates_counts_case_insensitively_when_asked() {
    let rows = Stream::from_json_lines(
        "{\"name\": \"Bob\"}\n{\"name\": \"bob\"}\n{\"name\": \"Anna\"}\n",
    )
    .expect("rows");
    let result = duplicates(rows.into(), DuplicateOptions::new("name").ignore_case(true))
        .expect("duplicates");
    assert_eq!(result.into_value(), json!({"bob": 2}));
}

#[test]
fn duplicates_skips_repeated_header_rows() {
    let rows = Stream::from_json_lines(
        "{\"name\": \"name\"}\n{\"name\": \"Ida\"}\n{\"name\": \"Ida\"}\n{\"name\": \"name\"}\n",
    )
    .expect("rows");
    let result = duplicates(rows.into(), DuplicateOptions::new("name").ignore_case(true))
        .expect("duplicates");
    assert_eq!(result.into_value(), json!({"ida": 2}));
}

#[test]
fn duplicates_requires_a_column_name() {
    let rows = Stream::from_entries(Vec::new());
    let err = duplicates(rows.into(), DuplicateOptions::new("")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

#[test]
fn range_matches_the_documented_progressions() {
    assert_eq!(
        range(1, 5, 1).expect("range").collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
    assert_eq!(
        range(5, 1, -1).expect("range").collect::<Vec<_>>(),
        vec![5, 4, 3, 2, 1]
    );
    for step in [-2, 0, 9] {
        assert_eq!(range(3, 3, step).expect("range").collect::<Vec<_>>(), vec![3]);
    }
    assert_eq!(range(1, 5, -1).unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(range(5, 1, 1).unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn operations_compose_across_the_stream_surface() {
    // range -> stream -> map -> chunk, all lazy until the final collect.
    let stream = range(1, 10, 1).expect("range").into_stream();
    let squared = map(stream.into(), |value| {
        let n = value.as_i64().expect("number");
        Value::from(n * n)
    });
    let lazurite::api::Mapped::Lazy(squared) = squared else {
        panic!("stream input must map lazily");
    };
    let chunks: Vec<Container> = chunk(Source::from(squared), ChunkOptions::new(4))
        .expect("chunk")
        .into_iter()
        .collect();
    assert_eq!(chunks.len(), 3);
    assert_eq!(
        chunks[0].values().cloned().collect::<Vec<_>>(),
        vec![json!(1), json!(4), json!(9), json!(16)]
    );
    assert_eq!(chunks[2].len(), 2);
}

#[test]
fn container_operations_do_not_mutate_their_input() {
    let original = Container::from_value(json!({"a": 1, "b": {"c": 2}})).expect("container");
    let copy = original.clone();
    let _ = flatten(copy.clone().into());
    let _ = map(copy.clone().into(), |value| value);
    let _ = apply(copy.clone().into(), |_| {});
    assert!(matches!(
        apply(copy.into(), |_| {}),
        Applied::Done
    ));
    let reference = Container::from_value(json!({"a": 1, "b": {"c": 2}})).expect("container");
    assert_eq!(original, reference);
}
