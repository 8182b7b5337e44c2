//! # Script Direction

/// The end of the word an [`EditScript`](super::EditScript) is anchored to.
#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter
)]
#[strum(serialize_all = "lowercase")]
pub enum ScriptDirection {
    /// Positions are counted from the start of the word.
    #[default]
    Forward,

    /// Positions are counted from the end of the word.
    Reverse,
}

impl ScriptDirection {
    /// Select [`ScriptDirection::Reverse`] when `reverse` is set.
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Self::Reverse
        } else {
            Self::Forward
        }
    }

    /// The single-character marker that opens a canonical script string.
    pub fn marker(self) -> char {
        match self {
            Self::Forward => 'f',
            Self::Reverse => 'r',
        }
    }

    /// Inverse of [`ScriptDirection::marker`].
    pub fn from_marker(marker: &str) -> Option<Self> {
        match marker {
            "f" => Some(Self::Forward),
            "r" => Some(Self::Reverse),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_direction_names() {
        assert_eq!(ScriptDirection::Forward.to_string(), "forward");
        assert_eq!(
            "reverse".parse::<ScriptDirection>().unwrap(),
            ScriptDirection::Reverse
        );
        assert!("sideways".parse::<ScriptDirection>().is_err());
        assert_eq!(ScriptDirection::default(), ScriptDirection::Forward);
    }

    #[test]
    fn test_markers() {
        for dir in ScriptDirection::iter() {
            let marker = dir.marker().to_string();
            assert_eq!(ScriptDirection::from_marker(&marker), Some(dir));
        }
        assert_eq!(ScriptDirection::from_marker("x"), None);
        assert_eq!(ScriptDirection::from_reverse(true), ScriptDirection::Reverse);
        assert_eq!(ScriptDirection::from_reverse(false), ScriptDirection::Forward);
    }
}
