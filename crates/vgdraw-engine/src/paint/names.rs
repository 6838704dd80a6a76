//! SVG named-color table.
//!
//! Keys are the lowercase SVG 1.1 color keywords. The table is sorted by key
//! so lookups are a binary search over static data; nothing here is mutable.

use super::Rgba8;

/// Sorted `(keyword, color)` pairs. All entries are opaque.
#[rustfmt::skip]
static NAMED_COLORS: &[(&str, Rgba8)] = &[
    ("aliceblue",            Rgba8::rgb(240, 248, 255)),
    ("antiquewhite",         Rgba8::rgb(250, 235, 215)),
    ("aqua",                 Rgba8::rgb(  0, 255, 255)),
    ("aquamarine",           Rgba8::rgb(127, 255, 212)),
    ("azure",                Rgba8::rgb(240, 255, 255)),
    ("beige",                Rgba8::rgb(245, 245, 220)),
    ("bisque",               Rgba8::rgb(255, 228, 196)),
    ("black",                Rgba8::rgb(  0,   0,   0)),
    ("blanchedalmond",       Rgba8::rgb(255, 235, 205)),
    ("blue",                 Rgba8::rgb(  0,   0, 255)),
    ("blueviolet",           Rgba8::rgb(138,  43, 226)),
    ("brown",                Rgba8::rgb(165,  42,  42)),
    ("burlywood",            Rgba8::rgb(222, 184, 135)),
    ("cadetblue",            Rgba8::rgb( 95, 158, 160)),
    ("chartreuse",           Rgba8::rgb(127, 255,   0)),
    ("chocolate",            Rgba8::rgb(210, 105,  30)),
    ("coral",                Rgba8::rgb(255, 127,  80)),
    ("cornflowerblue",       Rgba8::rgb(100, 149, 237)),
    ("cornsilk",             Rgba8::rgb(255, 248, 220)),
    ("crimson",              Rgba8::rgb(220,  20,  60)),
    ("cyan",                 Rgba8::rgb(  0, 255, 255)),
    ("darkblue",             Rgba8::rgb(  0,   0, 139)),
    ("darkcyan",             Rgba8::rgb(  0, 139, 139)),
    ("darkgoldenrod",        Rgba8::rgb(184, 134,  11)),
    ("darkgray",             Rgba8::rgb(169, 169, 169)),
    ("darkgreen",            Rgba8::rgb(  0, 100,   0)),
    ("darkgrey",             Rgba8::rgb(169, 169, 169)),
    ("darkkhaki",            Rgba8::rgb(189, 183, 107)),
    ("darkmagenta",          Rgba8::rgb(139,   0, 139)),
    ("darkolivegreen",       Rgba8::rgb( 85, 107,  47)),
    ("darkorange",           Rgba8::rgb(255, 140,   0)),
    ("darkorchid",           Rgba8::rgb(153,  50, 204)),
    ("darkred",              Rgba8::rgb(139,   0,   0)),
    ("darksalmon",           Rgba8::rgb(233, 150, 122)),
    ("darkseagreen",         Rgba8::rgb(143, 188, 143)),
    ("darkslateblue",        Rgba8::rgb( 72,  61, 139)),
    ("darkslategray",        Rgba8::rgb( 47,  79,  79)),
    ("darkslategrey",        Rgba8::rgb( 47,  79,  79)),
    ("darkturquoise",        Rgba8::rgb(  0, 206, 209)),
    ("darkviolet",           Rgba8::rgb(148,   0, 211)),
    ("deeppink",             Rgba8::rgb(255,  20, 147)),
    ("deepskyblue",          Rgba8::rgb(  0, 191, 255)),
    ("dimgray",              Rgba8::rgb(105, 105, 105)),
    ("dimgrey",              Rgba8::rgb(105, 105, 105)),
    ("dodgerblue",           Rgba8::rgb( 30, 144, 255)),
    ("firebrick",            Rgba8::rgb(178,  34,  34)),
    ("floralwhite",          Rgba8::rgb(255, 250, 240)),
    ("forestgreen",          Rgba8::rgb( 34, 139,  34)),
    ("fuchsia",              Rgba8::rgb(255,   0, 255)),
    ("gainsboro",            Rgba8::rgb(220, 220, 220)),
    ("ghostwhite",           Rgba8::rgb(248, 248, 255)),
    ("gold",                 Rgba8::rgb(255, 215,   0)),
    ("goldenrod",            Rgba8::rgb(218, 165,  32)),
    ("gray",                 Rgba8::rgb(128, 128, 128)),
    ("green",                Rgba8::rgb(  0, 128,   0)),
    ("greenyellow",          Rgba8::rgb(173, 255,  47)),
    ("grey",                 Rgba8::rgb(128, 128, 128)),
    ("honeydew",             Rgba8::rgb(240, 255, 240)),
    ("hotpink",              Rgba8::rgb(255, 105, 180)),
    ("indianred",            Rgba8::rgb(205,  92,  92)),
    ("indigo",               Rgba8::rgb( 75,   0, 130)),
    ("ivory",                Rgba8::rgb(255, 255, 240)),
    ("khaki",                Rgba8::rgb(240, 230, 140)),
    ("lavender",             Rgba8::rgb(230, 230, 250)),
    ("lavenderblush",        Rgba8::rgb(255, 240, 245)),
    ("lawngreen",            Rgba8::rgb(124, 252,   0)),
    ("lemonchiffon",         Rgba8::rgb(255, 250, 205)),
    ("lightblue",            Rgba8::rgb(173, 216, 230)),
    ("lightcoral",           Rgba8::rgb(240, 128, 128)),
    ("lightcyan",            Rgba8::rgb(224, 255, 255)),
    ("lightgoldenrodyellow", Rgba8::rgb(250, 250, 210)),
    ("lightgray",            Rgba8::rgb(211, 211, 211)),
    ("lightgreen",           Rgba8::rgb(144, 238, 144)),
    ("lightgrey",            Rgba8::rgb(211, 211, 211)),
    ("lightpink",            Rgba8::rgb(255, 182, 193)),
    ("lightsalmon",          Rgba8::rgb(255, 160, 122)),
    ("lightseagreen",        Rgba8::rgb( 32, 178, 170)),
    ("lightskyblue",         Rgba8::rgb(135, 206, 250)),
    ("lightslategray",       Rgba8::rgb(119, 136, 153)),
    ("lightslategrey",       Rgba8::rgb(119, 136, 153)),
    ("lightsteelblue",       Rgba8::rgb(176, 196, 222)),
    ("lightyellow",          Rgba8::rgb(255, 255, 224)),
    ("lime",                 Rgba8::rgb(  0, 255,   0)),
    ("limegreen",            Rgba8::rgb( 50, 205,  50)),
    ("linen",                Rgba8::rgb(250, 240, 230)),
    ("magenta",              Rgba8::rgb(255,   0, 255)),
    ("maroon",               Rgba8::rgb(128,   0,   0)),
    ("mediumaquamarine",     Rgba8::rgb(102, 205, 170)),
    ("mediumblue",           Rgba8::rgb(  0,   0, 205)),
    ("mediumorchid",         Rgba8::rgb(186,  85, 211)),
    ("mediumpurple",         Rgba8::rgb(147, 112, 219)),
    ("mediumseagreen",       Rgba8::rgb( 60, 179, 113)),
    ("mediumslateblue",      Rgba8::rgb(123, 104, 238)),
    ("mediumspringgreen",    Rgba8::rgb(  0, 250, 154)),
    ("mediumturquoise",      Rgba8::rgb( 72, 209, 204)),
    ("mediumvioletred",      Rgba8::rgb(199,  21, 133)),
    ("midnightblue",         Rgba8::rgb( 25,  25, 112)),
    ("mintcream",            Rgba8::rgb(245, 255, 250)),
    ("mistyrose",            Rgba8::rgb(255, 228, 225)),
    ("moccasin",             Rgba8::rgb(255, 228, 181)),
    ("navajowhite",          Rgba8::rgb(255, 222, 173)),
    ("navy",                 Rgba8::rgb(  0,   0, 128)),
    ("oldlace",              Rgba8::rgb(253, 245, 230)),
    ("olive",                Rgba8::rgb(128, 128,   0)),
    ("olivedrab",            Rgba8::rgb(107, 142,  35)),
    ("orange",               Rgba8::rgb(255, 165,   0)),
    ("orangered",            Rgba8::rgb(255,  69,   0)),
    ("orchid",               Rgba8::rgb(218, 112, 214)),
    ("palegoldenrod",        Rgba8::rgb(238, 232, 170)),
    ("palegreen",            Rgba8::rgb(152, 251, 152)),
    ("paleturquoise",        Rgba8::rgb(175, 238, 238)),
    ("palevioletred",        Rgba8::rgb(219, 112, 147)),
    ("papayawhip",           Rgba8::rgb(255, 239, 213)),
    ("peachpuff",            Rgba8::rgb(255, 218, 185)),
    ("peru",                 Rgba8::rgb(205, 133,  63)),
    ("pink",                 Rgba8::rgb(255, 192, 203)),
    ("plum",                 Rgba8::rgb(221, 160, 221)),
    ("powderblue",           Rgba8::rgb(176, 224, 230)),
    ("purple",               Rgba8::rgb(128,   0, 128)),
    ("red",                  Rgba8::rgb(255,   0,   0)),
    ("rosybrown",            Rgba8::rgb(188, 143, 143)),
    ("royalblue",            Rgba8::rgb( 65, 105, 225)),
    ("saddlebrown",          Rgba8::rgb(139,  69,  19)),
    ("salmon",               Rgba8::rgb(250, 128, 114)),
    ("sandybrown",           Rgba8::rgb(244, 164,  96)),
    ("seagreen",             Rgba8::rgb( 46, 139,  87)),
    ("seashell",             Rgba8::rgb(255, 245, 238)),
    ("sienna",               Rgba8::rgb(160,  82,  45)),
    ("silver",               Rgba8::rgb(192, 192, 192)),
    ("skyblue",              Rgba8::rgb(135, 206, 235)),
    ("slateblue",            Rgba8::rgb(106,  90, 205)),
    ("slategray",            Rgba8::rgb(112, 128, 144)),
    ("slategrey",            Rgba8::rgb(112, 128, 144)),
    ("snow",                 Rgba8::rgb(255, 250, 250)),
    ("springgreen",          Rgba8::rgb(  0, 255, 127)),
    ("steelblue",            Rgba8::rgb( 70, 130, 180)),
    ("tan",                  Rgba8::rgb(210, 180, 140)),
    ("teal",                 Rgba8::rgb(  0, 128, 128)),
    ("thistle",              Rgba8::rgb(216, 191, 216)),
    ("tomato",               Rgba8::rgb(255,  99,  71)),
    ("turquoise",            Rgba8::rgb( 64, 224, 208)),
    ("violet",               Rgba8::rgb(238, 130, 238)),
    ("wheat",                Rgba8::rgb(245, 222, 179)),
    ("white",                Rgba8::rgb(255, 255, 255)),
    ("whitesmoke",           Rgba8::rgb(245, 245, 245)),
    ("yellow",               Rgba8::rgb(255, 255,   0)),
    ("yellowgreen",          Rgba8::rgb(154, 205,  50)),
];

/// Looks up an SVG color keyword. Matching is exact and case-sensitive.
pub fn lookup(name: &str) -> Option<Rgba8> {
    NAMED_COLORS
        .binary_search_by(|(key, _)| key.cmp(&name))
        .ok()
        .map(|i| NAMED_COLORS[i].1)
}

/// Iterates the whole table in keyword order.
pub fn names() -> impl Iterator<Item = (&'static str, Rgba8)> {
    NAMED_COLORS.iter().copied()
}
