//! Color scheme palettes.
//!
//! Three families are known: the X11 names (the default scheme), the SVG
//! names, and the Brewer palettes `<family><n>`, whose colors are the numbers
//! `1` to `n`.

/// X11 names without numbered variants.
const X11_PLAIN: &[&str] = &[
    "aliceblue", "beige", "black", "blanchedalmond", "blueviolet", "cornflowerblue", "crimson",
    "darkgreen", "darkkhaki", "darksalmon", "darkslateblue", "darkslategrey", "darkturquoise",
    "darkviolet", "dimgray", "dimgrey", "floralwhite", "forestgreen", "gainsboro", "ghostwhite",
    "greenyellow", "indigo", "invis", "lavender", "lawngreen", "lightcoral",
    "lightgoldenrodyellow", "lightgray", "lightgrey", "lightseagreen", "lightslateblue",
    "lightslategray", "lightslategrey", "limegreen", "linen", "mediumaquamarine", "mediumblue",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "moccasin", "navy", "navyblue", "none",
    "oldlace", "palegoldenrod", "papayawhip", "peru", "powderblue", "saddlebrown", "sandybrown",
    "slategrey", "transparent", "violet", "white", "whitesmoke", "yellowgreen",
];

/// X11 names that also exist with the suffixes `1` to `4`.
const X11_NUMBERED: &[&str] = &[
    "antiquewhite", "aquamarine", "azure", "bisque", "blue", "brown", "burlywood", "cadetblue",
    "chartreuse", "chocolate", "coral", "cornsilk", "cyan", "darkgoldenrod", "darkolivegreen",
    "darkorange", "darkorchid", "darkseagreen", "darkslategray", "deeppink", "deepskyblue",
    "dodgerblue", "firebrick", "gold", "goldenrod", "green", "honeydew", "hotpink", "indianred",
    "ivory", "khaki", "lavenderblush", "lemonchiffon", "lightblue", "lightcyan",
    "lightgoldenrod", "lightpink", "lightsalmon", "lightskyblue", "lightsteelblue",
    "lightyellow", "magenta", "maroon", "mediumorchid", "mediumpurple", "mistyrose",
    "navajowhite", "olivedrab", "orange", "orangered", "orchid", "palegreen", "paleturquoise",
    "palevioletred", "peachpuff", "pink", "plum", "purple", "red", "rosybrown", "royalblue",
    "salmon", "seagreen", "seashell", "sienna", "skyblue", "slateblue", "slategray", "snow",
    "springgreen", "steelblue", "tan", "thistle", "tomato", "turquoise", "violetred", "wheat",
    "yellow",
];

/// X11 names that also exist with the suffixes `0` to `100`.
const X11_GRAYS: &[&str] = &["gray", "grey"];

const SVG: &[&str] = &[
    "aliceblue", "antiquewhite", "aqua", "aquamarine", "azure", "beige", "bisque", "black",
    "blanchedalmond", "blue", "blueviolet", "brown", "burlywood", "cadetblue", "chartreuse",
    "chocolate", "coral", "cornflowerblue", "cornsilk", "crimson", "cyan", "darkblue",
    "darkcyan", "darkgoldenrod", "darkgray", "darkgreen", "darkgrey", "darkkhaki",
    "darkmagenta", "darkolivegreen", "darkorange", "darkorchid", "darkred", "darksalmon",
    "darkseagreen", "darkslateblue", "darkslategray", "darkslategrey", "darkturquoise",
    "darkviolet", "deeppink", "deepskyblue", "dimgray", "dimgrey", "dodgerblue", "firebrick",
    "floralwhite", "forestgreen", "fuchsia", "gainsboro", "ghostwhite", "gold", "goldenrod",
    "gray", "grey", "green", "greenyellow", "honeydew", "hotpink", "indianred", "indigo",
    "ivory", "khaki", "lavender", "lavenderblush", "lawngreen", "lemonchiffon", "lightblue",
    "lightcoral", "lightcyan", "lightgoldenrodyellow", "lightgray", "lightgreen", "lightgrey",
    "lightpink", "lightsalmon", "lightseagreen", "lightskyblue", "lightslategray",
    "lightslategrey", "lightsteelblue", "lightyellow", "lime", "limegreen", "linen", "magenta",
    "maroon", "mediumaquamarine", "mediumblue", "mediumorchid", "mediumpurple",
    "mediumseagreen", "mediumslateblue", "mediumspringgreen", "mediumturquoise",
    "mediumvioletred", "midnightblue", "mintcream", "mistyrose", "moccasin", "navajowhite",
    "navy", "oldlace", "olive", "olivedrab", "orange", "orangered", "orchid", "palegoldenrod",
    "palegreen", "paleturquoise", "palevioletred", "papayawhip", "peachpuff", "peru", "pink",
    "plum", "powderblue", "purple", "red", "rosybrown", "royalblue", "saddlebrown", "salmon",
    "sandybrown", "seagreen", "seashell", "sienna", "silver", "skyblue", "slateblue",
    "slategray", "slategrey", "snow", "springgreen", "steelblue", "tan", "teal", "thistle",
    "tomato", "turquoise", "violet", "wheat", "white", "whitesmoke", "yellow", "yellowgreen",
];

/// Brewer families with the smallest and largest palette size.
const BREWER: &[(&str, u8, u8)] = &[
    ("accent", 3, 8),
    ("blues", 3, 9),
    ("brbg", 3, 11),
    ("bugn", 3, 9),
    ("bupu", 3, 9),
    ("dark2", 3, 8),
    ("gnbu", 3, 9),
    ("greens", 3, 9),
    ("greys", 3, 9),
    ("oranges", 3, 9),
    ("orrd", 3, 9),
    ("paired", 3, 12),
    ("pastel1", 3, 9),
    ("pastel2", 3, 8),
    ("piyg", 3, 11),
    ("prgn", 3, 11),
    ("pubu", 3, 9),
    ("pubugn", 3, 9),
    ("puor", 3, 11),
    ("purd", 3, 9),
    ("purples", 3, 9),
    ("rdbu", 3, 11),
    ("rdgy", 3, 11),
    ("rdpu", 3, 9),
    ("rdylbu", 3, 11),
    ("rdylgn", 3, 11),
    ("reds", 3, 9),
    ("set1", 3, 9),
    ("set2", 3, 8),
    ("set3", 3, 12),
    ("spectral", 3, 11),
    ("ylgn", 3, 9),
    ("ylgnbu", 3, 9),
    ("ylorbr", 3, 9),
    ("ylorrd", 3, 9),
];

/// The scheme used when none is set.
pub const DEFAULT_SCHEME: &str = "x11";

/// A known color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorScheme {
    X11,
    Svg,
    /// A Brewer palette with colors `1..=size`.
    Brewer { family: &'static str, size: u8 },
}

impl ColorScheme {
    /// Looks up a scheme by name, ignoring case.
    pub fn lookup(name: &str) -> Option<Self> {
        let name = name.to_ascii_lowercase();
        match name.as_str() {
            "x11" => return Some(Self::X11),
            "svg" => return Some(Self::Svg),
            _ => {}
        }

        BREWER.iter().find_map(|&(family, min, max)| {
            let size = parse_index(name.strip_prefix(family)?)?;
            (min..=max).contains(&size).then_some(Self::Brewer { family, size })
        })
    }

    /// Returns true if `color` names a color of this scheme, ignoring case.
    pub fn contains(self, color: &str) -> bool {
        let color = color.to_ascii_lowercase();
        match self {
            Self::X11 => x11_contains(&color),
            Self::Svg => SVG.contains(&color.as_str()),
            Self::Brewer { size, .. } => {
                parse_index(&color).is_some_and(|index| (1..=size).contains(&index))
            }
        }
    }
}

fn x11_contains(color: &str) -> bool {
    if X11_PLAIN.contains(&color) || X11_NUMBERED.contains(&color) || X11_GRAYS.contains(&color)
    {
        return true;
    }

    let base = color.trim_end_matches(|ch: char| ch.is_ascii_digit());
    let Some(number) = parse_index(&color[base.len()..]) else {
        return false;
    };

    if X11_GRAYS.contains(&base) {
        number <= 100
    } else {
        X11_NUMBERED.contains(&base) && (1..=4).contains(&number)
    }
}

/// Parses a plain decimal index without sign or leading zeros.
fn parse_index(text: &str) -> Option<u8> {
    let plain = !text.is_empty()
        && text.bytes().all(|byte| byte.is_ascii_digit())
        && (text.len() == 1 || !text.starts_with('0'));
    if plain { text.parse().ok() } else { None }
}
