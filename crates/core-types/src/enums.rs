use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-way classification of a developer metric against the framework-wide
/// ("general") metric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Verdict {
    Greater,
    Equal,
    Less,
}

impl Verdict {
    /// Classifies `user` against `general`. The comparison is exact, with no
    /// tolerance; a NaN on either side therefore classifies as `Less`.
    pub fn of(user: f64, general: f64) -> Self {
        if user > general {
            Verdict::Greater
        } else if user == general {
            Verdict::Equal
        } else {
            Verdict::Less
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Verdict::Greater => "GREATER",
            Verdict::Equal => "EQUAL",
            Verdict::Less => "LESS",
        };
        write!(f, "{label}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_all_three_ways() {
        assert_eq!(Verdict::of(0.9, 0.8), Verdict::Greater);
        assert_eq!(Verdict::of(0.8, 0.8), Verdict::Equal);
        assert_eq!(Verdict::of(0.7, 0.8), Verdict::Less);
    }

    #[test]
    fn nan_on_either_side_is_less() {
        assert_eq!(Verdict::of(f64::NAN, 1.0), Verdict::Less);
        assert_eq!(Verdict::of(1.0, f64::NAN), Verdict::Less);
    }

    #[test]
    fn displays_the_presentation_words() {
        assert_eq!(Verdict::Greater.to_string(), "GREATER");
        assert_eq!(Verdict::Equal.to_string(), "EQUAL");
        assert_eq!(Verdict::Less.to_string(), "LESS");
    }
}
