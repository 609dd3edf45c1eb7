use folio_derive::folio_error;
use std::borrow::Cow;

#[folio_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Rejected: {message}")]
    Rejected { message: Cow<'static, str> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read_missing() -> Result<(), DemoError> {
    Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")).context("Reading seed file")
}

#[test]
fn source_errors_convert_with_context() {
    let err = read_missing().unwrap_err();
    assert!(matches!(err, DemoError::Io { context: Some(_), .. }));
    assert_eq!(err.to_string(), "IO error (Reading seed file): gone");
}

#[test]
fn question_mark_converts_source_without_context() {
    fn open() -> Result<(), DemoError> {
        Err(std::io::Error::other("boom"))?;
        Ok(())
    }

    let err = open().unwrap_err();
    assert_eq!(err.to_string(), "IO error: boom");
}

#[test]
fn context_overrides_existing_variant_context() {
    let result: Result<(), DemoError> =
        Err(DemoError::NotFound { message: "section".into(), context: None });
    let err = result.context("Loading about").unwrap_err();
    assert_eq!(err.to_string(), "Not found (Loading about): section");
}

#[test]
fn variants_without_context_are_left_untouched() {
    let result: Result<(), DemoError> = Err(DemoError::Rejected { message: "nope".into() });
    let err = result.context("ignored").unwrap_err();
    assert_eq!(err.to_string(), "Rejected: nope");
}

#[test]
fn strings_become_internal_errors() {
    let borrowed: DemoError = "static failure".into();
    let owned: DemoError = String::from("owned failure").into();

    assert!(matches!(borrowed, DemoError::Internal { .. }));
    assert_eq!(owned.to_string(), "Internal error: owned failure");
}

#[test]
fn ui_expansions_compile() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/folio_error_pass.rs");
    t.pass("tests/ui/api_model_pass.rs");
}
