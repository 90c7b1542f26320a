use super::*;

#[test]
fn table_and_lookup_agree() {
    for (text, kind) in KEYWORDS {
        assert_eq!(keyword(text), Some(kind), "{text}");
        assert_eq!(lookup_ident(text), kind, "{text}");
    }
}

#[test]
fn reserved_words_resolve() {
    assert_eq!(lookup_ident("fn"), TokenKind::Function);
    assert_eq!(lookup_ident("let"), TokenKind::Let);
}

#[test]
fn lookup_is_case_sensitive() {
    for text in ["Fn", "FN", "fN", "LET", "Let", "lEt"] {
        assert_eq!(lookup_ident(text), TokenKind::Ident, "{text}");
    }
}

#[test]
fn no_partial_matches() {
    for text in ["f", "le", "lets", "fnord", "_fn", "let_"] {
        assert_eq!(keyword(text), None, "{text}");
        assert_eq!(lookup_ident(text), TokenKind::Ident, "{text}");
    }
}

#[test]
fn unwired_reserved_words_are_identifiers() {
    for text in ["true", "false", "if", "else", "return"] {
        assert_eq!(lookup_ident(text), TokenKind::Ident, "{text}");
    }
}

#[test]
fn table_kinds_spell_their_entry() {
    for (text, kind) in KEYWORDS {
        assert!(kind.is_keyword());
        assert_eq!(kind.lexeme(), Some(text));
    }
}

#[test]
fn every_keyword_kind_has_a_table_entry() {
    for kind in TokenKind::ALL.into_iter().filter(|k| k.is_keyword()) {
        let spelling = kind.lexeme().unwrap_or_default();
        assert_eq!(keyword(spelling), Some(kind), "{kind:?}");
        assert!(KEYWORDS.iter().any(|&(_, k)| k == kind), "{kind:?}");
    }
}
