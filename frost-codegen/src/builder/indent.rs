//! Indentation units.

use std::iter::repeat_n;

/// One level of indentation in emitted source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Spaces(u8),
    Tab,
}

impl Indent {
    /// rustfmt's default width.
    pub const RUST: Self = Self::Spaces(4);

    /// Generated partial classes are tab-indented.
    pub const CSHARP: Self = Self::Tab;

    /// Append `depth` levels of this unit to `out`.
    pub fn write_to(self, out: &mut String, depth: usize) {
        match self {
            Self::Tab => out.extend(repeat_n('\t', depth)),
            Self::Spaces(width) => out.extend(repeat_n(' ', depth * usize::from(width))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indented(indent: Indent, depth: usize) -> String {
        let mut out = String::new();
        indent.write_to(&mut out, depth);
        out
    }

    #[test]
    fn test_spaces_scale_with_depth() {
        assert_eq!(indented(Indent::RUST, 0), "");
        assert_eq!(indented(Indent::RUST, 2), " ".repeat(8));
        assert_eq!(indented(Indent::Spaces(2), 3), " ".repeat(6));
    }

    #[test]
    fn test_tabs_for_csharp() {
        assert_eq!(Indent::CSHARP, Indent::Tab);
        assert_eq!(indented(Indent::CSHARP, 2), "\t\t");
    }
}
