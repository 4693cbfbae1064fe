use std::fmt;
use std::str::FromStr;

use super::clients::{Curl, Http1, JsFetch, PythonRequests, Wget};
use super::registry::Target;
use super::types::TargetInfo;

/// Targets every registry starts with. Targets added at runtime are
/// addressed by their string key only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinTarget {
    Shell,
    Http,
    Python,
    JavaScript,
}

impl BuiltinTarget {
    pub const ALL: [BuiltinTarget; 4] = [
        BuiltinTarget::Shell,
        BuiltinTarget::Http,
        BuiltinTarget::Python,
        BuiltinTarget::JavaScript,
    ];

    pub fn key(self) -> &'static str {
        match self {
            BuiltinTarget::Shell => "shell",
            BuiltinTarget::Http => "http",
            BuiltinTarget::Python => "python",
            BuiltinTarget::JavaScript => "javascript",
        }
    }

    pub fn info(self) -> TargetInfo {
        match self {
            BuiltinTarget::Shell => TargetInfo::new("shell", "Shell", ".sh", "curl"),
            BuiltinTarget::Http => TargetInfo::new("http", "HTTP", "", "http1.1"),
            BuiltinTarget::Python => TargetInfo::new("python", "Python", ".py", "requests"),
            BuiltinTarget::JavaScript => {
                TargetInfo::new("javascript", "JavaScript", ".js", "fetch")
            }
        }
    }

    pub fn target(self) -> Target {
        let target = Target::new(self.info());
        match self {
            BuiltinTarget::Shell => target.with_client(Curl::new()).with_client(Wget::new()),
            BuiltinTarget::Http => target.with_client(Http1::new()),
            BuiltinTarget::Python => target.with_client(PythonRequests::new()),
            BuiltinTarget::JavaScript => target.with_client(JsFetch::new()),
        }
    }
}

impl fmt::Display for BuiltinTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for BuiltinTarget {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BuiltinTarget::ALL
            .into_iter()
            .find(|target| target.key() == s)
            .ok_or_else(|| format!("unknown built-in target: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_round_trip() {
        for target in BuiltinTarget::ALL {
            assert_eq!(target.key().parse::<BuiltinTarget>().unwrap(), target);
            assert_eq!(target.info().key, target.key());
        }
        assert!("cobol".parse::<BuiltinTarget>().is_err());
    }

    #[test]
    fn test_default_client_is_registered() {
        for target in BuiltinTarget::ALL {
            let built = target.target();
            assert!(built.default_client().is_some(), "{target} lacks its default client");
        }
    }
}
