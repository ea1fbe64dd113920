//! HTTP method tokens accepted by the router.

use std::fmt;
use std::str::FromStr;

use crate::error::RouterError;

/// HTTP request methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    /// GET method
    Get,
    /// POST method
    Post,
    /// PUT method
    Put,
    /// DELETE method
    Delete,
    /// PATCH method
    Patch,
    /// HEAD method
    Head,
    /// OPTIONS method
    Options,
    /// CONNECT method
    Connect,
    /// TRACE method
    Trace,
}

impl Method {
    /// Every supported method, in canonical order.
    pub const ALL: [Self; 9] = [
        Self::Get,
        Self::Post,
        Self::Put,
        Self::Delete,
        Self::Patch,
        Self::Head,
        Self::Options,
        Self::Connect,
        Self::Trace,
    ];

    /// Returns the method as its wire token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
            Self::Connect => "CONNECT",
            Self::Trace => "TRACE",
        }
    }
}

impl FromStr for Method {
    type Err = RouterError;

    /// Parses a method token. Tokens are case-sensitive, so `get` is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| RouterError::InvalidMethod(s.to_string()))
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_parsing() {
        assert_eq!("GET".parse::<Method>().unwrap(), Method::Get);
        assert_eq!("CONNECT".parse::<Method>().unwrap(), Method::Connect);
        assert_eq!("TRACE".parse::<Method>().unwrap(), Method::Trace);
    }

    #[test]
    fn test_method_parsing_rejects_unknown() {
        assert!(matches!(
            "FETCH".parse::<Method>(),
            Err(RouterError::InvalidMethod(m)) if m == "FETCH"
        ));
        assert!("get".parse::<Method>().is_err());
        assert!("".parse::<Method>().is_err());
    }

    #[test]
    fn test_display_matches_token() {
        for method in Method::ALL {
            assert_eq!(method.to_string().parse::<Method>().unwrap(), method);
        }
    }
}
