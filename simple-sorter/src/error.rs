use derive_more::Display;

#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum InputError {
    #[display(fmt = "no numbers were provided")]
    Empty,

    #[display(fmt = "`{}` is not a valid number", _0)]
    InvalidNumber(String),

    #[display(fmt = "`{}` is not a finite number", _0)]
    NotFinite(String),
}

impl std::error::Error for InputError {}
