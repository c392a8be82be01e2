//! Named colour schemes for prompt, informational and error output.

use inksac::prelude::*;

/// What a piece of output is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Prompt,
    Info,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Plain,
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
}

impl Tint {
    fn color(self) -> Option<Color> {
        match self {
            Tint::Plain => None,
            Tint::Black => Some(Color::Black),
            Tint::Red => Some(Color::Red),
            Tint::Green => Some(Color::Green),
            Tint::Yellow => Some(Color::Yellow),
            Tint::Blue => Some(Color::Blue),
            Tint::Magenta => Some(Color::Magenta),
            Tint::Cyan => Some(Color::Cyan),
            Tint::White => Some(Color::White),
            Tint::Gray => Some(Color::RGB(128, 128, 128)),
        }
    }
}

/// Display attribute bound to a [`Role`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attr {
    pub tint: Tint,
    pub bold: bool,
}

impl Attr {
    pub const PLAIN: Attr = Attr::new(Tint::Plain, false);

    pub const fn new(tint: Tint, bold: bool) -> Self {
        Self { tint, bold }
    }

    pub fn is_plain(&self) -> bool {
        self.tint == Tint::Plain && !self.bold
    }

    /// Wraps `text` in the escape sequences for this attribute.
    pub fn paint(&self, text: &str) -> String {
        if self.is_plain() {
            return text.to_string();
        }

        let mut builder = Style::builder();
        if let Some(color) = self.tint.color() {
            builder.foreground(color);
        }
        if self.bold {
            builder.bold();
        }
        text.style(builder.build()).to_string()
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub prompt: Attr,
    pub info: Attr,
    pub error: Attr,
}

impl Theme {
    pub fn attr(&self, role: Role) -> Attr {
        match role {
            Role::Prompt => self.prompt,
            Role::Info => self.info,
            Role::Error => self.error,
        }
    }
}

pub const DEFAULT_THEME: &str = "default";

pub static THEMES: [Theme; 4] = [
    Theme {
        name: DEFAULT_THEME,
        prompt: Attr::new(Tint::Cyan, true),
        info: Attr::PLAIN,
        error: Attr::new(Tint::Red, true),
    },
    Theme {
        name: "dark",
        prompt: Attr::new(Tint::Magenta, true),
        info: Attr::new(Tint::White, false),
        error: Attr::new(Tint::Yellow, true),
    },
    Theme {
        name: "light",
        prompt: Attr::new(Tint::Blue, true),
        info: Attr::new(Tint::Black, false),
        error: Attr::new(Tint::Red, false),
    },
    Theme {
        name: "mono",
        prompt: Attr::PLAIN,
        info: Attr::PLAIN,
        error: Attr::new(Tint::Plain, true),
    },
];

/// Exact, case-sensitive lookup.
pub fn find(name: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.name == name)
}

pub fn default_theme() -> &'static Theme {
    &THEMES[0]
}

pub fn names() -> impl Iterator<Item = &'static str> {
    THEMES.iter().map(|theme| theme.name)
}
