// Integration tests for the file and prompt runners

use rlox::diagnostics::CollectingReporter;
use rlox::runner::{run, run_file, run_prompt, OutputMode};
use std::fs;
use std::path::PathBuf;

fn script(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("rlox-{}-{}.lox", name, std::process::id()));
    fs::write(&path, contents).expect("write temp script");
    path
}

#[test]
fn test_file_prints_one_tree_per_expression() {
    let path = script("trees", "// arithmetic\n1 + 2 * 3;\n\"a\" == \"b\";\n");
    let mut reporter = CollectingReporter::new();
    let mut out = Vec::new();

    let errors = run_file(&path, OutputMode::Tree, &mut reporter, &mut out).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(errors, 0);
    assert_eq!(String::from_utf8(out).unwrap(), "(+ 1 (* 2 3))\n(== a b)\n");
}

#[test]
fn test_file_with_errors_prints_nothing() {
    let path = script("errors", "1 + ;\n2 $;\n");
    let mut reporter = CollectingReporter::new();
    let mut out = Vec::new();

    let errors = run_file(&path, OutputMode::Tree, &mut reporter, &mut out).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(errors, 2);
    assert!(out.is_empty());
    let printed: Vec<String> = reporter.diagnostics.iter().map(|d| d.to_string()).collect();
    assert_eq!(
        printed,
        vec![
            "[line 2] Error: Unexpected character '$'.",
            "[line 1] Error at ';': Expect expression.",
        ]
    );
}

#[test]
fn test_token_dump() {
    let mut reporter = CollectingReporter::new();
    let mut out = Vec::new();
    run("(12.5 \"s\")", OutputMode::Tokens, &mut reporter, &mut out).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "LeftParen ( \nNumber 12.5 12.5\nString \"s\" s\nRightParen ) \nEof  \n"
    );
}

#[test]
fn test_prompt_recovers_after_bad_line() {
    let mut reporter = CollectingReporter::new();
    let mut out = Vec::new();
    let input = "(1\n-2\nquit\n3\n";
    run_prompt(input.as_bytes(), &mut out, OutputMode::Tree, &mut reporter).unwrap();

    assert_eq!(String::from_utf8(out).unwrap(), "> > (- 2)\n> ");
    assert_eq!(reporter.messages(), vec!["Expect ')' after expression."]);
}
