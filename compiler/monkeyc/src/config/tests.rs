use pretty_assertions::assert_eq;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(ToString::to_string).collect()
}

#[test]
fn no_arguments_starts_repl() {
    assert_eq!(
        parse_args(&[], None).ok(),
        Some(Command::Repl(ReplConfig::default()))
    );
}

#[test]
fn default_prompt() {
    assert_eq!(ReplConfig::default().prompt, ">> ");
}

#[test]
fn env_prompt_applies() {
    let cmd = parse_args(&args(&["repl"]), Some("$ ".to_string())).ok();
    assert_eq!(
        cmd,
        Some(Command::Repl(ReplConfig {
            prompt: "$ ".to_string()
        }))
    );
}

#[test]
fn flag_overrides_env_prompt() {
    let cmd = parse_args(&args(&["repl", "--prompt=> "]), Some("$ ".to_string())).ok();
    assert_eq!(
        cmd,
        Some(Command::Repl(ReplConfig {
            prompt: "> ".to_string()
        }))
    );
}

#[test]
fn unknown_repl_option_is_usage_error() {
    let err = parse_args(&args(&["repl", "--fast"]), None);
    assert!(matches!(err, Err(CliError::Usage(_))));
}

#[test]
fn lex_takes_one_path() {
    assert_eq!(
        parse_args(&args(&["lex", "main.mk"]), None).ok(),
        Some(Command::Lex(PathBuf::from("main.mk")))
    );
    assert!(matches!(
        parse_args(&args(&["lex"]), None),
        Err(CliError::Usage(_))
    ));
    assert!(matches!(
        parse_args(&args(&["lex", "a", "b"]), None),
        Err(CliError::Usage(_))
    ));
}

#[test]
fn help_and_version() {
    for flag in ["help", "--help", "-h"] {
        assert_eq!(parse_args(&args(&[flag]), None).ok(), Some(Command::Help));
    }
    for flag in ["version", "--version", "-V"] {
        assert_eq!(parse_args(&args(&[flag]), None).ok(), Some(Command::Version));
    }
}

#[test]
fn unknown_command_is_usage_error() {
    let err = parse_args(&args(&["compile"]), None);
    match err {
        Err(e @ CliError::Usage(_)) => {
            assert_eq!(e.to_string(), "unknown command 'compile'");
            assert_eq!(e.exit_code(), 1);
            assert!(e.is_usage());
        }
        other => panic!("expected usage error, got {other:?}"),
    }
}
