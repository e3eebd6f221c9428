// Repository coordinates.
// The `user/repo` pair every repository-scoped URI is built from.

use std::fmt;
use std::str::FromStr;

use crate::error::GithubError;

/// Owner login and repository name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinates {
    user: String,
    repo: String,
}

impl Coordinates {
    pub fn new(user: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            repo: repo.into(),
        }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.user, self.repo)
    }
}

impl FromStr for Coordinates {
    type Err = GithubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((user, repo)) if !user.is_empty() && !repo.is_empty() && !repo.contains('/') => {
                Ok(Self::new(user, repo))
            }
            _ => Err(GithubError::InvalidCoordinates(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_display() {
        let coords: Coordinates = "jcabi/jcabi-github".parse().unwrap();
        assert_eq!(coords.user(), "jcabi");
        assert_eq!(coords.repo(), "jcabi-github");
        assert_eq!(coords.to_string(), "jcabi/jcabi-github");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for bad in ["", "jcabi", "/repo", "user/", "a/b/c"] {
            assert!(
                matches!(bad.parse::<Coordinates>(), Err(GithubError::InvalidCoordinates(_))),
                "accepted {:?}",
                bad
            );
        }
    }

    #[test]
    fn test_ordering() {
        let mut all = vec![
            Coordinates::new("b", "x"),
            Coordinates::new("a", "z"),
            Coordinates::new("a", "y"),
        ];
        all.sort();
        let names: Vec<String> = all.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["a/y", "a/z", "b/x"]);
    }
}
