use std::fmt;
use std::str::FromStr;

use uuid::Uuid;

/// Opaque identifier of a virtual desktop.
///
/// Backed by the GUID the OS assigns to each desktop. Its string form is the
/// lowercase hyphenated GUID, which is also what selectors and workspace
/// files use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DesktopId(Uuid);

impl DesktopId {
    #[cfg(test)]
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl From<Uuid> for DesktopId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl fmt::Display for DesktopId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for DesktopId {
    type Err = uuid::Error;

    /// Accepts hyphenated, simple, braced and URN GUID forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s.trim()).map(Self)
    }
}

/// Result of asking the platform which desktop owns a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DesktopLookup {
    Found(DesktopId),
    /// The platform has no desktop assignment for this window
    NotFound,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_desktop_id_display_round_trip() {
        let id = DesktopId::new_random();
        let parsed: DesktopId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
    }

    #[test]
    fn test_desktop_id_accepts_guid_forms() {
        let expected: DesktopId = "aa509086-5ca9-4c25-8f95-589d3c07b48a".parse().unwrap();

        let upper: DesktopId = "AA509086-5CA9-4C25-8F95-589D3C07B48A".parse().unwrap();
        let braced: DesktopId = "{aa509086-5ca9-4c25-8f95-589d3c07b48a}".parse().unwrap();
        let simple: DesktopId = "aa5090865ca94c258f95589d3c07b48a".parse().unwrap();

        assert_eq!(upper, expected);
        assert_eq!(braced, expected);
        assert_eq!(simple, expected);
        assert_eq!(expected.to_string(), "aa509086-5ca9-4c25-8f95-589d3c07b48a");
    }

    #[test]
    fn test_desktop_id_rejects_malformed() {
        assert!("desktop-one".parse::<DesktopId>().is_err());
        assert!("".parse::<DesktopId>().is_err());
        assert!("aa509086-5ca9-4c25-8f95".parse::<DesktopId>().is_err());
    }
}
