use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The status of an emoji according to `emoji-test.txt`
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum EmojiStatus {
    /// A modifier or other character that is used to build sequences (e.g. skin tones)
    Component,
    /// It is a regular, RGI emoji
    FullyQualified,
    /// Some, but not all of the needed variation selectors are present
    MinimallyQualified,
    /// Not actually displayed as an emoji/not RGI
    Unqualified
}

impl Display for EmojiStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let status = match self {
            Self::Component => "component",
            Self::Unqualified => "unqualified",
            Self::FullyQualified => "fully-qualified",
            Self::MinimallyQualified => "minimally-qualified"
        };
        f.write_str(status)
    }
}

impl FromStr for EmojiStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "component" => Ok(Self::Component),
            "unqualified" => Ok(Self::Unqualified),
            "fully-qualified" => Ok(Self::FullyQualified),
            "minimally-qualified" => Ok(Self::MinimallyQualified),
            other => Err(other.to_string())
        }
    }
}
