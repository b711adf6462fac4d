//! End-to-end scenarios: (file, line) in, zero-value expressions out.

mod common;

use common::{run_query, run_single};
use zeroret::pipeline::Outcome;
use zeroret_analysis::{AnalysisErrorKind, early_return_snippet};

#[test]
fn error_result_yields_err() {
    let outcome = run_single(
        "package main\n\nfunc f() error {\n\treturn nil\n}\n",
        4,
    )
    .unwrap();
    assert_eq!(outcome, Outcome::Values(vec!["err".to_string()]));
}

#[test]
fn pointer_and_map_results_yield_nil() {
    let outcome = run_single(
        "package main\n\nfunc g() (*int, map[string]int) {\n\treturn nil, nil\n}\n",
        4,
    )
    .unwrap();
    assert_eq!(
        outcome,
        Outcome::Values(vec!["nil".to_string(), "nil".to_string()])
    );
}

#[test]
fn line_outside_any_function_is_not_in_a_function() {
    let outcome = run_single(
        "package main\n\nvar x = 1\n\nfunc f() error {\n\treturn nil\n}\n",
        3,
    )
    .unwrap();
    assert_eq!(outcome, Outcome::NotInFunction);
}

#[test]
fn closure_results_win_over_the_enclosing_function() {
    let text = "\
package main

func outer() (int, error) {
	inner := func() *int {
		return nil
	}
	_ = inner
	return 0, nil
}
";
    let outcome = run_single(text, 5).unwrap();
    assert_eq!(outcome, Outcome::Values(vec!["nil".to_string()]));
}

#[test]
fn basic_result_kind_fails_instead_of_emitting_zero() {
    let failure = run_single(
        "package main\n\nfunc h() int {\n\treturn 0\n}\n",
        4,
    )
    .unwrap_err();
    assert!(matches!(
        failure.error.kind(),
        AnalysisErrorKind::UnsupportedTypeKind(canonical) if canonical == "int"
    ));
    assert_eq!(failure.to_string(), "cannot find zero value of int");
}

#[test]
fn function_with_no_results_is_an_empty_list() {
    let outcome = run_single("package main\n\nfunc noop() {\n\t_ = 1\n}\n", 4).unwrap();
    assert_eq!(outcome, Outcome::Values(vec![]));
}

#[test]
fn named_struct_result_builds_a_composite_literal() {
    let text = "\
package main

type Config struct {
	name string
}

func load() (Config, error) {
	return Config{}, nil
}
";
    let outcome = run_single(text, 8).unwrap();
    assert_eq!(
        outcome,
        Outcome::Values(vec!["Config{}".to_string(), "err".to_string()])
    );
}

#[test]
fn multi_name_result_declaration_gets_one_value_per_name() {
    let text = "\
package main

func m() (a, b *int, err error) {
	return
}
";
    let outcome = run_single(text, 4).unwrap();
    assert_eq!(
        outcome,
        Outcome::Values(vec![
            "nil".to_string(),
            "nil".to_string(),
            "err".to_string()
        ])
    );
}

#[test]
fn named_chain_resolves_across_files() {
    let types = "\
package main

type Conn struct {
	fd int
}

type Handle *Conn
";
    let main = "\
package main

func open() (Handle, error) {
	return nil, nil
}
";
    let outcome = run_query(&[("types.go", types), ("main.go", main)], "main.go", 4).unwrap();
    assert_eq!(
        outcome,
        Outcome::Values(vec!["nil".to_string(), "err".to_string()])
    );
}

#[test]
fn any_result_is_nil() {
    let outcome = run_single(
        "package main\n\nfunc f() any {\n\treturn nil\n}\n",
        4,
    )
    .unwrap();
    assert_eq!(outcome, Outcome::Values(vec!["nil".to_string()]));
}

#[test]
fn method_results_resolve_like_function_results() {
    let text = "\
package main

type Store struct{}

func (s *Store) Get(key string) (map[string]int, error) {
	return nil, nil
}
";
    let outcome = run_single(text, 6).unwrap();
    assert_eq!(
        outcome,
        Outcome::Values(vec!["nil".to_string(), "err".to_string()])
    );
}

#[test]
fn snippet_wraps_the_values_in_an_early_return() {
    let Outcome::Values(values) = run_single(
        "package main\n\nfunc g() (*int, error) {\n\treturn nil, nil\n}\n",
        4,
    )
    .unwrap() else {
        panic!("expected values");
    };
    insta::assert_snapshot!(early_return_snippet(&values), @r"
    if err != nil {
    	return nil, err
    }
    ");
}
