//! Handle the color theme
use ratatui::style::{Color, Modifier, Style};

use crate::options::PickOptions;

/// The color scheme of the picker
///
/// <pre>
/// +----------------+
/// | >selected line |  --> selected & normal & matched
/// |> current line  |  --> cursor & current & current_match
/// |  normal line   |
/// |  8/10          |  --> info
/// |> query         |  --> prompt & query
/// +----------------+
/// </pre>
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ColorTheme {
    /// Non-highlighted lines and general text
    pub normal: Style,
    /// Matched text on non-highlighted lines
    pub matched: Style,
    /// Highlighted line, non-matched text
    pub current: Style,
    /// Highlighted line, matched text
    pub current_match: Style,
    /// Query text
    pub query: Style,
    /// Match counter
    pub info: Style,
    /// Prompt prefix
    pub prompt: Style,
    /// Marker in front of the highlighted line
    pub cursor: Style,
    /// Multi-selection glyph
    pub selected: Style,
}

impl ColorTheme {
    /// Setup the theme from the picker options
    pub fn init_from_options(options: &PickOptions) -> ColorTheme {
        if let Some(color) = options.color.as_deref() {
            ColorTheme::from_options(color)
        } else {
            // Check for NO_COLOR environment variable
            match std::env::var_os("NO_COLOR") {
                Some(no_color) if !no_color.is_empty() => ColorTheme::none(),
                _ => ColorTheme::default256(),
            }
        }
    }

    /// No colors, the highlighted line is still bold
    pub fn none() -> Self {
        let bold = Style::default().bold();
        Self {
            current: bold,
            current_match: bold,
            ..ColorTheme::default()
        }
    }

    fn bw() -> Self {
        let base = ColorTheme::none();
        ColorTheme {
            matched: base.matched.underlined(),
            current: base.current.reversed(),
            current_match: base.current_match.reversed().underlined(),
            cursor: base.cursor.reversed(),
            ..base
        }
    }

    fn default16() -> Self {
        let base = ColorTheme::none();
        ColorTheme {
            matched: base.matched.fg(Color::Green),
            current: base.current.bg(Color::DarkGray),
            current_match: base.current_match.fg(Color::Green).bg(Color::DarkGray),
            cursor: base.cursor.fg(Color::Red).bg(Color::DarkGray),
            selected: base.selected.fg(Color::Red),
            ..base
        }
    }

    /// The default theme: red marker on a dark grey highlighted line, green matches
    pub fn default256() -> Self {
        let base = ColorTheme::none();
        ColorTheme {
            matched: base.matched.fg(Color::Indexed(70)),
            current: base.current.bg(Color::Indexed(237)),
            current_match: base.current_match.fg(Color::Indexed(70)).bg(Color::Indexed(237)),
            cursor: base.cursor.fg(Color::Red).bg(Color::Indexed(237)),
            selected: base.selected.fg(Color::Indexed(1)),
            ..base
        }
    }

    /// The style a `--color` component name refers to
    fn component_mut(&mut self, name: &str) -> Option<&mut Style> {
        Some(match name {
            "" | "normal" => &mut self.normal,
            "matched" | "hl" => &mut self.matched,
            "current" | "fg+" => &mut self.current,
            "current_match" | "hl+" => &mut self.current_match,
            "query" => &mut self.query,
            "info" => &mut self.info,
            "prompt" => &mut self.prompt,
            "cursor" | "pointer" | "marker" => &mut self.cursor,
            "selected" => &mut self.selected,
            _ => return None,
        })
    }

    /// Applies one `name:color[:attr...]` override
    fn set_color(&mut self, name: &str, spec: &str) {
        let mut parts = spec.split(['+', ':']);
        let color = parts.next().and_then(parse_color);
        let modifier = parts.fold(Modifier::empty(), |acc, attr| match parse_modifier(attr) {
            Some(m) => acc | m,
            None => Modifier::empty(),
        });

        // the highlighted line background spans the marker too
        if matches!(name, "bg+" | "marker_bg" | "marker-bg") {
            for style in [&mut self.current, &mut self.current_match, &mut self.cursor] {
                Layer::Bg.apply(style, color, modifier);
            }
            return;
        }

        let (component, layer) = Layer::split(name);
        match self.component_mut(component) {
            Some(style) => layer.apply(style, color, modifier),
            None => debug!("Unknown color component '{component}'"),
        }
    }

    pub(crate) fn from_options(color: &str) -> Self {
        let mut theme = ColorTheme::default256();
        for pair in color.split(',') {
            if let Some((name, spec)) = pair.split_once(':') {
                theme.set_color(name, spec);
            } else {
                theme = match pair {
                    "16" => ColorTheme::default16(),
                    "bw" => ColorTheme::bw(),
                    "none" | "empty" => ColorTheme::none(),
                    "dark" | "default" => ColorTheme::default256(),
                    t => {
                        debug!("Unknown color theme '{t}'");
                        ColorTheme::default256()
                    }
                };
            }
        }
        theme
    }
}

#[derive(Clone, Copy)]
enum Layer {
    Fg,
    Bg,
}

impl Layer {
    /// Splits `prompt_bg` into `("prompt", Bg)`; a bare name is the foreground
    fn split(name: &str) -> (&str, Layer) {
        let strip = |suffix: &str| {
            name.strip_suffix(&format!("_{suffix}"))
                .or_else(|| name.strip_suffix(&format!("-{suffix}")))
        };
        if name == "bg" {
            ("", Layer::Bg)
        } else if let Some(component) = strip("bg") {
            (component, Layer::Bg)
        } else {
            (strip("fg").unwrap_or(name), Layer::Fg)
        }
    }

    fn apply(self, style: &mut Style, color: Option<Color>, modifier: Modifier) {
        if let Some(color) = color {
            *style = match self {
                Layer::Fg => style.fg(color),
                Layer::Bg => style.bg(color),
            };
        }
        *style = style.add_modifier(modifier);
    }
}

/// Text attribute of a color spec; `None` for `regular`, which resets the previous ones
fn parse_modifier(attr: &str) -> Option<Modifier> {
    Some(match attr {
        "b" | "bold" => Modifier::BOLD,
        "u" | "underlined" => Modifier::UNDERLINED,
        "d" | "dim" => Modifier::DIM,
        "i" | "italic" => Modifier::ITALIC,
        "r" | "reverse" => Modifier::REVERSED,
        "x" | "regular" => return None,
        other => {
            debug!("Unknown modifier '{other}'");
            Modifier::empty()
        }
    })
}

/// `#rrggbb`, a 256-color index or a color name
fn parse_color(raw: &str) -> Option<Color> {
    if let Some(hex) = raw.strip_prefix('#').filter(|hex| hex.len() == 6)
        && let Ok(rgb) = u32::from_str_radix(hex, 16)
    {
        let [_, r, g, b] = rgb.to_be_bytes();
        return Some(Color::Rgb(r, g, b));
    }
    if let Ok(index) = raw.parse::<u8>() {
        return Some(Color::Indexed(index));
    }
    let color = raw.parse::<Color>().ok();
    if color.is_none() {
        debug!("Unknown color '{raw}'");
    }
    color
}
