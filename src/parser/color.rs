//! Color and color-list grammar.
//!
//! ```text
//! colorList := item (':' item)*
//! item      := color (';' weight)?
//! color     := '#' hex{6} hex{2}?  |  h [, ] s [, ] v  |  '/' scheme? '/' name  |  name
//! ```

use smol_str::SmolStr;

use super::{ParseResult, SyntaxError, char_span, describe_at};
use crate::ast::Span;

/// A parsed color.
#[derive(Debug, Clone, PartialEq)]
pub enum Color {
    /// `#RRGGBB` or `#RRGGBBAA`.
    Rgb {
        red: u8,
        green: u8,
        blue: u8,
        alpha: Option<u8>,
    },
    /// Three components in `[0, 1]`.
    Hsv { hue: f64, saturation: f64, value: f64 },
    /// A palette entry, optionally qualified with `/scheme/`.
    Named {
        /// `Some("")` for the `//name` form.
        scheme: Option<SmolStr>,
        name: SmolStr,
        /// Value-local span of `name`.
        name_span: Span,
    },
}

/// One entry of a color list.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorItem {
    pub color: Color,
    /// Fraction of the area this color covers, if given.
    pub weight: Option<f64>,
    /// Value-local span of the color, weight excluded.
    pub span: Span,
}

/// Parses a single color (no list, no weight).
pub fn parse_color(text: &str) -> ParseResult<ColorItem> {
    let color = parse_color_at(text, 0)?;
    Ok(ColorItem {
        color,
        weight: None,
        span: 0..text.len(),
    })
}

/// Parses a `:`-separated, optionally weighted color list.
pub fn parse_color_list(text: &str) -> ParseResult<Vec<ColorItem>> {
    let mut items = Vec::new();
    let mut start = 0;
    for segment in text.split(':') {
        items.push(parse_item(text, segment, start)?);
        start += segment.len() + 1;
    }
    Ok(items)
}

fn parse_item(text: &str, segment: &str, base: usize) -> ParseResult<ColorItem> {
    let (color_text, weight_text) = match segment.split_once(';') {
        Some((color, weight)) => (color, Some(weight)),
        None => (segment, None),
    };
    if color_text.is_empty() {
        return Err(SyntaxError::new(
            char_span(text, base),
            format!("Mismatched input '{}' expecting a color.", describe_at(text, base)),
        ));
    }

    let color = parse_color_at(color_text, base)?;
    let weight = match weight_text {
        None => None,
        Some(raw) => {
            let weight_start = base + color_text.len() + 1;
            match raw.parse::<f64>() {
                Ok(weight) if (0.0..=1.0).contains(&weight) => Some(weight),
                _ => {
                    return Err(SyntaxError::new(
                        weight_start..weight_start + raw.len(),
                        format!("Mismatched input '{raw}' expecting a weight between 0 and 1."),
                    ));
                }
            }
        }
    };

    Ok(ColorItem {
        color,
        weight,
        span: base..base + color_text.len(),
    })
}

/// Parses `text` as one color whose first character sits at `base` in the value.
fn parse_color_at(text: &str, base: usize) -> ParseResult<Color> {
    let error = |pos: usize, detail: String| {
        let span = char_span(text, pos);
        SyntaxError::new(span.start + base..span.end + base, detail)
    };
    let no_viable =
        |pos: usize| error(pos, format!("No viable alternative at character '{}'.", describe_at(text, pos)));

    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(hex).map_err(|(index, extraneous)| {
            let pos = index + 1;
            let found = describe_at(text, pos);
            if extraneous {
                error(pos, format!("Extraneous input '{found}' expecting <EOF>."))
            } else {
                error(pos, format!("Mismatched input '{found}' expecting a hexadecimal digit."))
            }
        });
    }

    if let Some(qualified) = text.strip_prefix('/') {
        let Some((scheme, name)) = qualified.split_once('/') else {
            return Err(error(text.len(), "Mismatched input '<EOF>' expecting '/'.".to_string()));
        };
        let name_start = 1 + scheme.len() + 1;
        if let Some(bad) = first_non_name_char(scheme) {
            return Err(no_viable(1 + bad));
        }
        if name.is_empty() {
            return Err(error(
                name_start,
                "Mismatched input '<EOF>' expecting a color name.".to_string(),
            ));
        }
        if let Some(bad) = first_non_name_char(name) {
            return Err(no_viable(name_start + bad));
        }
        return Ok(Color::Named {
            scheme: Some(SmolStr::new(scheme)),
            name: SmolStr::new(name),
            name_span: base + name_start..base + text.len(),
        });
    }

    if starts_numeric(text) && text.contains([',', ' ', '\t']) {
        return parse_hsv(text).map_err(|(pos, expected)| {
            error(pos, format!("Mismatched input '{}' expecting {expected}.", describe_at(text, pos)))
        });
    }

    if let Some(bad) = first_non_name_char(text) {
        return Err(no_viable(bad));
    }
    Ok(Color::Named {
        scheme: None,
        name: SmolStr::new(text),
        name_span: base..base + text.len(),
    })
}

/// Parses the digits after `#`.
///
/// On failure returns the offending digit index and whether the input there
/// is surplus (as opposed to a missing or malformed digit).
fn parse_hex(digits: &str) -> Result<Color, (usize, bool)> {
    let valid = digits.bytes().take_while(u8::is_ascii_hexdigit).count();
    match valid {
        6 | 8 if valid == digits.len() => {}
        6 | 8 => return Err((valid, true)),
        9.. => return Err((8, true)),
        _ => return Err((valid, false)),
    }
    let byte = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| (i, false));
    Ok(Color::Rgb {
        red: byte(0)?,
        green: byte(2)?,
        blue: byte(4)?,
        alpha: if valid == 8 { Some(byte(6)?) } else { None },
    })
}

/// Parses `h,s,v` / `h s v`; on failure returns the offending byte index and
/// what was expected there.
fn parse_hsv(text: &str) -> Result<Color, (usize, &'static str)> {
    let mut components = Vec::with_capacity(3);
    let mut pos = 0;
    for part in text.split([',', ' ', '\t']) {
        if !part.is_empty() {
            if components.len() == 3 {
                return Err((pos, "<EOF>"));
            }
            components.push(part.parse::<f64>().map_err(|_| (pos, "a number"))?);
        }
        pos += part.len() + 1;
    }
    match components[..] {
        [hue, saturation, value] => Ok(Color::Hsv {
            hue,
            saturation,
            value,
        }),
        _ => Err((text.len(), "a number")),
    }
}

/// HSV triples start with a digit or a leading-dot fraction.
fn starts_numeric(text: &str) -> bool {
    text.starts_with(|ch: char| ch.is_ascii_digit() || ch == '.')
}

fn first_non_name_char(text: &str) -> Option<usize> {
    text.char_indices()
        .find(|(_, ch)| !(ch.is_ascii_alphanumeric() || *ch == '_'))
        .map(|(i, _)| i)
}
