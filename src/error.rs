use std::fmt::{self, Debug, Display};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Error {
    pub code: i32,
    pub message: String,
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code {})", self.message, self.code)
    }
}

impl std::error::Error for Error {}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        reqwest_error(err)
    }
}

pub fn invalid_invocation_error() -> Error {
    Error {
        code: 100,
        message: "invalid invocation".into(),
    }
}

pub fn invalid_input_error() -> Error {
    Error {
        code: 101,
        message: "invalid input".into(),
    }
}

pub fn missing_fields_error<T: Display>(fields: &[T]) -> Error {
    let names: Vec<String> = fields.iter().map(|field| field.to_string()).collect();

    Error {
        code: 102,
        message: format!("missing required fields: {}", names.join(", ")),
    }
}

pub fn consent_required_error() -> Error {
    Error {
        code: 103,
        message: "terms of service and privacy policy must be accepted".into(),
    }
}

pub fn unknown_vehicle_error(id: &str) -> Error {
    Error {
        code: 104,
        message: format!("unknown vehicle type: {}", id),
    }
}

pub fn config_error<T: Debug>(err: T) -> Error {
    Error {
        code: 2,
        message: format!("configuration error: {:?}", err),
    }
}

pub fn reqwest_error(err: reqwest::Error) -> Error {
    Error {
        code: 3,
        message: format!("reqwest error: {}", err),
    }
}

pub fn upstream_error() -> Error {
    Error {
        code: 4,
        message: "upstream error".into(),
    }
}

pub fn unexpected_error() -> Error {
    Error {
        code: 5,
        message: "unexpected error".into(),
    }
}
