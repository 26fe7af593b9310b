use rmblock::errors::RegionError;
use rmblock::{excise, find_region, DelimiterPair, RegionQuery, RegionSpan};
use rstest::{fixture, rstest};

#[ctor::ctor]
fn init() {
    rmblock::util::testing::init_test_setup();
}

fn lines(raw: &[&str]) -> Vec<String> {
    raw.iter().map(|l| l.to_string()).collect()
}

#[fixture]
fn widget_query() -> RegionQuery {
    RegionQuery {
        start_marker: "// Floating Bottom Buttons (Persistent)".to_string(),
        open_marker: "Positioned(".to_string(),
        pair: DelimiterPair::Paren,
    }
}

#[rstest]
fn given_wellformed_input_when_scanning_then_finds_span(widget_query: RegionQuery) {
    let input = lines(&[
        "A\n",
        "// Floating Bottom Buttons (Persistent)\n",
        "Positioned(\n",
        "  child: Text('x'),\n",
        ")\n",
        "B\n",
    ]);

    let span = find_region(&input, &widget_query).unwrap();
    assert_eq!(span, RegionSpan { start: 1, end: 4 });

    let kept = excise(&input, span);
    assert_eq!(kept, lines(&["A\n", "B\n"]));
}

#[rstest]
fn given_missing_start_marker_when_scanning_then_reports_marker_not_found(
    widget_query: RegionQuery,
) {
    let input = lines(&["A\n", "Positioned(\n", ")\n"]);

    let err = find_region(&input, &widget_query).unwrap_err();
    assert!(matches!(err, RegionError::MarkerNotFound(_)));
}

#[rstest]
fn given_unbalanced_region_when_scanning_then_reports_unbalanced(widget_query: RegionQuery) {
    let input = lines(&[
        "// Floating Bottom Buttons (Persistent)\n",
        "Positioned(\n",
        "  child: Text('x'),\n",
    ]);

    let err = find_region(&input, &widget_query).unwrap_err();
    assert!(matches!(err, RegionError::RegionUnbalanced { .. }));
}

#[rstest]
fn given_open_marker_never_appearing_when_scanning_then_reports_unbalanced(
    widget_query: RegionQuery,
) {
    let input = lines(&["// Floating Bottom Buttons (Persistent)\n", "A\n", "B\n"]);

    let err = find_region(&input, &widget_query).unwrap_err();
    assert!(matches!(err, RegionError::RegionUnbalanced { .. }));
}

#[rstest]
fn given_region_closing_on_its_opening_line_when_scanning_then_closes_there(
    widget_query: RegionQuery,
) {
    let input = lines(&[
        "// Floating Bottom Buttons (Persistent)\n",
        "Positioned(child: a())\n",
        "tail\n",
    ]);

    let span = find_region(&input, &widget_query).unwrap();
    assert_eq!(span, RegionSpan { start: 0, end: 1 });
    assert_eq!(excise(&input, span), lines(&["tail\n"]));
}

#[rstest]
fn given_nested_parens_when_scanning_then_closes_at_outermost(widget_query: RegionQuery) {
    let input = lines(&[
        "// Floating Bottom Buttons (Persistent)\n",
        "Positioned(\n",
        "  child: Row(\n",
        "    children: [Text('a'), Text('b')],\n",
        "  ),\n",
        ")\n",
        "tail\n",
    ]);

    let span = find_region(&input, &widget_query).unwrap();
    assert_eq!(span, RegionSpan { start: 0, end: 5 });
}

#[rstest]
fn given_open_marker_before_start_marker_when_scanning_then_ignores_it(
    widget_query: RegionQuery,
) {
    // The Positioned( above the start marker must not open the region.
    let input = lines(&[
        "Positioned(\n",
        ")\n",
        "// Floating Bottom Buttons (Persistent)\n",
        "Positioned(\n",
        ")\n",
        "tail\n",
    ]);

    let span = find_region(&input, &widget_query).unwrap();
    assert_eq!(span, RegionSpan { start: 2, end: 4 });
}

#[rstest]
fn given_start_marker_line_also_opening_when_scanning_then_counts_from_that_line() {
    let query = RegionQuery {
        start_marker: "delete me".to_string(),
        open_marker: "call(".to_string(),
        pair: DelimiterPair::Paren,
    };
    let input = lines(&["keep\n", "call( // delete me\n", ")\n", "keep\n"]);

    let span = find_region(&input, &query).unwrap();
    assert_eq!(span, RegionSpan { start: 1, end: 2 });
}

#[rstest]
fn given_opening_line_without_delimiters_when_scanning_then_waits_for_first_open() {
    // Balance stays 0 until the first open delimiter is seen, so the region
    // must not close on the marker line itself.
    let query = RegionQuery {
        start_marker: "anchor".to_string(),
        open_marker: "BEGIN".to_string(),
        pair: DelimiterPair::Paren,
    };
    let input = lines(&["anchor\n", "BEGIN\n", "f(\n", ")\n", "tail\n"]);

    let span = find_region(&input, &query).unwrap();
    assert_eq!(span, RegionSpan { start: 0, end: 3 });
}

#[rstest]
fn given_curly_pair_when_scanning_then_parens_are_ignored() {
    let query = RegionQuery {
        start_marker: "anchor".to_string(),
        open_marker: "block {".to_string(),
        pair: DelimiterPair::Curly,
    };
    let input = lines(&[
        "anchor\n",
        "block {\n",
        "  f(g(x)\n", // unbalanced parens are irrelevant
        "}\n",
        "tail\n",
    ]);

    let span = find_region(&input, &query).unwrap();
    assert_eq!(span, RegionSpan { start: 0, end: 3 });
}

#[rstest]
fn given_parens_inside_string_literals_when_scanning_then_they_still_count(
    widget_query: RegionQuery,
) {
    // No lexical awareness: a ')' inside a string literal closes the region.
    let input = lines(&[
        "// Floating Bottom Buttons (Persistent)\n",
        "Positioned(\n",
        "  child: Text(':)'),\n",
        "tail\n",
    ]);

    let span = find_region(&input, &widget_query).unwrap();
    assert_eq!(span, RegionSpan { start: 0, end: 2 });
}

#[rstest]
fn given_span_in_middle_when_excising_then_only_that_interval_is_removed() {
    let input = lines(&["a\n", "b\n", "c\n", "d\n", "e\n"]);
    let kept = excise(&input, RegionSpan { start: 1, end: 3 });
    assert_eq!(kept, lines(&["a\n", "e\n"]));
}

#[rstest]
fn given_span_covering_everything_when_excising_then_nothing_remains() {
    let input = lines(&["a\n", "b\n"]);
    let kept = excise(&input, RegionSpan { start: 0, end: 1 });
    assert!(kept.is_empty());
}
