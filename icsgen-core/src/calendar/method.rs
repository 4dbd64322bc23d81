//! METHOD of a calendar object.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Method {
    #[default]
    Publish,
    Request,
}

impl Method {
    pub const ALL: [Method; 2] = [Method::Publish, Method::Request];

    pub fn as_str(self) -> &'static str {
        match self {
            Method::Publish => "PUBLISH",
            Method::Request => "REQUEST",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.as_str() == value)
    }
}

/// Anything other than PUBLISH or REQUEST becomes PUBLISH.
impl From<&str> for Method {
    fn from(value: &str) -> Self {
        Self::parse(value).unwrap_or_else(|| {
            log::debug!("Unknown METHOD '{value}', using {}", Self::default());
            Self::default()
        })
    }
}

impl From<String> for Method {
    fn from(value: String) -> Self {
        Method::from(value.as_str())
    }
}

impl From<Method> for String {
    fn from(method: Method) -> Self {
        method.as_str().to_string()
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
