use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

fn run_to_string(list: &[&str]) -> (Result<(), CliError>, String) {
    let mut out = Vec::new();
    let result = run(&args(list), None, &mut out);
    (result, String::from_utf8(out).unwrap_or_default())
}

#[test]
fn unknown_command_exits_with_one() {
    let (result, output) = run_to_string(&["compile"]);
    match result {
        Err(e) => {
            assert!(e.is_usage());
            assert_eq!(e.exit_code(), 1);
        }
        Ok(()) => panic!("unknown command should fail"),
    }
    assert_eq!(output, "");
}

#[test]
fn missing_lex_path_is_usage_error() {
    let (result, _) = run_to_string(&["lex"]);
    assert!(result.is_err_and(|e| e.is_usage() && e.exit_code() == 1));
}

#[test]
fn unreadable_file_exits_with_one() {
    let (result, _) = run_to_string(&["lex", "does/not/exist.mk"]);
    assert!(result.is_err_and(|e| !e.is_usage() && e.exit_code() == 1));
}

#[test]
fn help_writes_usage() {
    let (result, output) = run_to_string(&["help"]);
    assert!(result.is_ok());
    assert_eq!(output, format!("{USAGE}\n"));
}

#[test]
fn version_writes_package_version() {
    let (result, output) = run_to_string(&["--version"]);
    assert!(result.is_ok());
    assert_eq!(output, format!("monkey {}\n", env!("CARGO_PKG_VERSION")));
}

#[test]
fn lex_dispatches_to_file_handler() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures/add.mk")
        .to_string_lossy()
        .into_owned();
    let (result, output) = run_to_string(&["lex", path.as_str()]);
    assert!(result.is_ok());
    assert!(output.ends_with("\n56 tokens\n"));
}
