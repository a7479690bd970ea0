use std::fmt;
use std::str::FromStr;

/// Social register a piece of text is converted into
///
/// Parsing is ASCII case-insensitive; the canonical form is lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Audience {
    /// Reporting upward to a superior
    Upward,
    /// Collaborating with a peer
    Lateral,
    /// Customer-facing or official external communication
    External,
}

/// The string did not name a known audience
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAudience(pub String);

impl FromStr for Audience {
    type Err = UnknownAudience;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "upward" => Ok(Self::Upward),
            "lateral" => Ok(Self::Lateral),
            "external" => Ok(Self::External),
            _ => Err(UnknownAudience(s.to_owned())),
        }
    }
}

impl fmt::Display for Audience {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Upward => "upward",
            Self::Lateral => "lateral",
            Self::External => "external",
        };
        f.write_str(name)
    }
}
