/// Markdown bold emphasis.
pub struct Bold;

impl Bold {
    pub const MARKER: &'static str = "**";

    /// Removes every bold marker from `s`.
    pub fn strip(s: &str) -> String {
        s.replace(Self::MARKER, "")
    }
}

/// A `###` heading marker. Everything from the first one to the end of the
/// message is treated as trailing structured content and never shown as prose.
pub struct SectionBreak;

impl SectionBreak {
    pub const MARKER: &'static str = "###";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_removes_all_markers() {
        assert_eq!(Bold::strip("**The Grill** and **Bar**"), "The Grill and Bar");
        assert_eq!(Bold::strip("plain"), "plain");
    }
}
