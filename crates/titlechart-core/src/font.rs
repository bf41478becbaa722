// File: crates/titlechart-core/src/font.rs
// Summary: Font description parsed from CSS shorthand ("12px Helvetica, sans-serif").

use std::fmt;
use std::str::FromStr;

use crate::error::LayoutError;

#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    /// Size in pixels.
    pub size: f32,
    pub bold: bool,
    /// Families in preference order.
    pub families: Vec<String>,
}

impl Font {
    pub fn new(size: f32, families: &[&str]) -> Self {
        Self { size, bold: false, families: families.iter().map(|f| f.to_string()).collect() }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::new(12.0, &["Helvetica", "sans-serif"])
    }
}

impl FromStr for Font {
    type Err = LayoutError;

    /// Accepts an optional `bold` keyword, then `<n>px`, then a comma separated family list.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || LayoutError::InvalidFont(s.to_string());
        let mut rest = s.trim();

        let mut bold = false;
        if let Some(r) = rest.strip_prefix("bold ") {
            bold = true;
            rest = r.trim_start();
        }

        let (size_tok, families) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
        let size: f32 = size_tok
            .strip_suffix("px")
            .and_then(|n| n.parse().ok())
            .filter(|n: &f32| *n > 0.0)
            .ok_or_else(invalid)?;

        let families: Vec<String> = families
            .split(',')
            .map(|f| f.trim().trim_matches(|c| c == '"' || c == '\'').to_string())
            .filter(|f| !f.is_empty())
            .collect();
        if families.is_empty() {
            return Err(invalid());
        }

        Ok(Self { size, bold, families })
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bold { f.write_str("bold ")?; }
        write!(f, "{}px {}", self.size, self.families.join(", "))
    }
}
