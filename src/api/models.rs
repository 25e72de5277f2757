use crate::error::RestfulError;
use clap::ValueEnum;
use std::fmt;
use std::str::FromStr;

/// HTTP verbs the client knows how to dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Method {
    type Err = RestfulError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "get" => Ok(Method::Get),
            "post" => Ok(Method::Post),
            _ => Err(RestfulError::InvalidMethod(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
    pub method: Method,
    /// Path fragment appended verbatim to the base URL, e.g. `/posts/1`.
    pub endpoint: String,
    /// Raw request body. Only sent for POST.
    pub data: Option<String>,
}

impl ApiRequest {
    pub fn new(method: Method, endpoint: impl Into<String>, data: Option<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            data,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status_code: u16,
    pub body: String,
}
