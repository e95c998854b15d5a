use serde::{Deserialize, Serialize};

/// Age band of the taxpayer. Only the Old regime slabs depend on it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeBracket {
    #[default]
    Under60,
    From60To80,
    Above80,
}

impl AgeBracket {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Under60 => "U60",
            Self::From60To80 => "60-80",
            Self::Above80 => "80+",
        }
    }

    /// Accepts the short codes (`U60`, `60-80`, `80+`) or the variant names,
    /// ignoring case and surrounding whitespace.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "u60" | "under60" => Some(Self::Under60),
            "60-80" | "from60to80" => Some(Self::From60To80),
            "80+" | "above80" => Some(Self::Above80),
            _ => None,
        }
    }
}

impl std::fmt::Display for AgeBracket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_accepts_codes_and_names() {
        assert_eq!(AgeBracket::parse("U60"), Some(AgeBracket::Under60));
        assert_eq!(AgeBracket::parse(" 60-80 "), Some(AgeBracket::From60To80));
        assert_eq!(AgeBracket::parse("Above80"), Some(AgeBracket::Above80));
        assert_eq!(AgeBracket::parse("senior"), None);
    }

    #[test]
    fn as_str_round_trips_through_parse() {
        for bracket in [AgeBracket::Under60, AgeBracket::From60To80, AgeBracket::Above80] {
            assert_eq!(AgeBracket::parse(bracket.as_str()), Some(bracket));
        }
    }
}
