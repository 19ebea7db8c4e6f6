use rig_derive::rig_error;
use std::borrow::Cow;

#[rig_error]
pub enum FetchError {
    #[error("Decode error{}: {source}", format_context(.context))]
    Decode {
        #[source]
        source: std::num::ParseFloatError,
        context: Option<Cow<'static, str>>,
    },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse_price(raw: &str) -> Result<f64, FetchError> {
    raw.parse::<f64>().context("parsing price")
}

fn main() {
    let err = parse_price("ten").unwrap_err();
    assert!(err.to_string().contains("(parsing price)"));

    let internal: FetchError = "boom".into();
    let with_context: Result<(), FetchError> = Err(internal);
    let err = with_context.context("while totalling").unwrap_err();
    assert_eq!(err.to_string(), "Internal error (while totalling): boom");
}
