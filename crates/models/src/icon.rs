//! Icon identifiers referenced by service records.
//!
//! The frontend resolves each name to a rendered glyph; the set is closed,
//! and an unknown name resolves to a fallback instead of failing.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Icon {
    Code,
    Video,
    Image,
    Sparkles,
}

impl Icon {
    /// Resolve a stored icon name. Anything outside the known set maps to
    /// `Sparkles` so a stale record cannot break rendering.
    pub fn from_name(name: &str) -> Icon {
        match name {
            "Code" => Icon::Code,
            "Video" => Icon::Video,
            "Image" => Icon::Image,
            "Sparkles" => Icon::Sparkles,
            _ => Icon::Sparkles,
        }
    }

    /// Canonical name as stored in service records.
    pub fn name(&self) -> &'static str {
        match self {
            Icon::Code => "Code",
            Icon::Video => "Video",
            Icon::Image => "Image",
            Icon::Sparkles => "Sparkles",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_round_trip() {
        for icon in [Icon::Code, Icon::Video, Icon::Image, Icon::Sparkles] {
            assert_eq!(Icon::from_name(icon.name()), icon);
        }
    }

    #[test]
    fn unknown_name_falls_back() {
        assert_eq!(Icon::from_name("Rocket"), Icon::Sparkles);
        assert_eq!(Icon::from_name(""), Icon::Sparkles);
    }
}
