use super::{CodeFragment, Renderable};

/// Pre-formatted lines emitted as one item. Empty lines stay unindented.
#[derive(Debug, Clone, PartialEq)]
pub struct RawCode(Vec<String>);

impl RawCode {
    pub fn lines<S: Into<String>>(lines: impl IntoIterator<Item = S>) -> Self {
        Self(lines.into_iter().map(Into::into).collect())
    }
}

impl Renderable for RawCode {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        self.0
            .iter()
            .map(|line| match line.as_str() {
                "" => CodeFragment::Blank,
                text => CodeFragment::Line(text.to_owned()),
            })
            .collect()
    }
}
