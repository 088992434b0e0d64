use crate::panel::layout::{center_line, repeat};
use crate::traits::model::fold_key;

/// Border style of a panel.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case", tag = "style")]
pub enum FrameStyle {
    /// `+-|`
    #[default]
    Simple,
    /// `╔═╗║╚╝`
    Double,
    /// `╭─╮│╰╯`
    Rounded,
    /// Double box with `title` embedded in the top edge.
    Themed {
        /// Title text.
        title: String,
    },
}

struct BoxChars {
    tl: char,
    tr: char,
    bl: char,
    br: char,
    h: char,
    v: char,
}

const SIMPLE: BoxChars = BoxChars {
    tl: '+',
    tr: '+',
    bl: '+',
    br: '+',
    h: '-',
    v: '|',
};

const DOUBLE: BoxChars = BoxChars {
    tl: '╔',
    tr: '╗',
    bl: '╚',
    br: '╝',
    h: '═',
    v: '║',
};

const ROUNDED: BoxChars = BoxChars {
    tl: '╭',
    tr: '╮',
    bl: '╰',
    br: '╯',
    h: '─',
    v: '│',
};

impl FrameStyle {
    /// Parse `simple`/`plain`, `double`, `rounded`, `themed` or `themed:<title>`. Unknown
    /// names fall back to [`FrameStyle::Simple`].
    pub fn parse(s: &str) -> Self {
        let trimmed = s.trim();
        if let Some((head, title)) = trimmed.split_once(':')
            && fold_key(head) == "themed"
        {
            return Self::Themed {
                title: title.trim().to_string(),
            };
        }
        match fold_key(trimmed).as_str() {
            "simple" | "plain" => Self::Simple,
            "double" => Self::Double,
            "rounded" | "round" => Self::Rounded,
            "themed" => Self::Themed {
                title: String::new(),
            },
            _ => Self::Simple,
        }
    }

    fn chars(&self) -> &'static BoxChars {
        match self {
            Self::Simple => &SIMPLE,
            Self::Double | Self::Themed { .. } => &DOUBLE,
            Self::Rounded => &ROUNDED,
        }
    }

    /// Top edge, `width` characters.
    pub(crate) fn top(&self, width: usize) -> String {
        let c = self.chars();
        let inner = width.saturating_sub(2);
        let edge = match self {
            Self::Themed { title } if !title.trim().is_empty() && inner >= 4 => {
                let label: String = title.trim().chars().take(inner - 2).collect();
                let label = format!(" {label} ");
                let left = (inner - label.chars().count()) / 2;
                let right = inner - label.chars().count() - left;
                format!("{}{}{}", repeat(c.h, left), label, repeat(c.h, right))
            }
            _ => repeat(c.h, inner),
        };
        format!("{}{}{}", c.tl, edge, c.tr)
    }

    /// Bottom edge, `width` characters.
    pub(crate) fn bottom(&self, width: usize) -> String {
        let c = self.chars();
        format!("{}{}{}", c.bl, repeat(c.h, width.saturating_sub(2)), c.br)
    }

    /// Content row: `inner` centered between the side borders.
    pub(crate) fn row(&self, inner: &str, width: usize) -> String {
        let c = self.chars();
        format!("{}{}{}", c.v, center_line(inner, width.saturating_sub(2)), c.v)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/panel/frame.rs"]
mod tests;
