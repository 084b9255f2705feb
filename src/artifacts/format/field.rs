use crate::artifacts::format::palette::Paint;
use colored::{Color, ColoredString, Colorize};
use derive_new::new;

/// A run of text sharing one paint.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct Span {
    pub text: String,
    pub paint: Paint,
}

impl Span {
    fn styled(&self) -> ColoredString {
        let mut styled = self.text.normal();
        if let Some(fg) = self.paint.fg {
            styled = styled.color(Color::AnsiColor(fg));
        }
        if let Some(bg) = self.paint.bg {
            styled = styled.on_color(Color::AnsiColor(bg));
        }
        styled
    }
}

/// One cell of a listing row, made of one or more spans.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Field {
    spans: Vec<Span>,
}

impl Field {
    pub fn plain(text: impl Into<String>) -> Self {
        Field::painted(text, Paint::none())
    }

    pub fn painted(text: impl Into<String>, paint: Paint) -> Self {
        Field {
            spans: vec![Span::new(text.into(), paint)],
        }
    }

    pub fn push(mut self, text: impl Into<String>, paint: Paint) -> Self {
        self.spans.push(Span::new(text.into(), paint));
        self
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Text without any styling.
    pub fn text(&self) -> String {
        self.spans.iter().map(|span| span.text.as_str()).collect()
    }

    /// Paint of the first span, which carries the field's classification.
    pub fn paint(&self) -> Paint {
        self.spans.first().map(|span| span.paint).unwrap_or_default()
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for span in &self.spans {
            if span.paint.is_plain() {
                write!(f, "{}", span.text)?;
            } else {
                write!(f, "{}", span.styled())?;
            }
        }
        Ok(())
    }
}

/// The formatted cells of one listing line, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderRow {
    pub permissions: Field,
    pub links: Field,
    pub owner: Field,
    pub group: Field,
    pub size: Field,
    pub time: Field,
    pub vcs: Field,
    pub name: Field,
}

impl RenderRow {
    pub fn fields(&self) -> [&Field; 8] {
        [
            &self.permissions,
            &self.links,
            &self.owner,
            &self.group,
            &self.size,
            &self.time,
            &self.vcs,
            &self.name,
        ]
    }

    /// Tab-delimited line, ready for the column writer. The name trails the last tab, one
    /// space away from the VCS marker.
    pub fn to_line(&self) -> String {
        let cells = self.fields()[..7]
            .iter()
            .map(|field| field.to_string())
            .collect::<Vec<_>>()
            .join("\t");

        format!("{cells}\t {}", self.name)
    }
}
