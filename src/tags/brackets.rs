//! Delimiter table used when splitting filenames into tags

/// Character separating nested path segments inside a stored name
pub const PATH_SEPARATOR: char = '\\';

/// Opening delimiters and the closing delimiter each one requires
pub const BRACKET_PAIRS: [(char, char); 6] = [
    ('(', ')'),
    ('[', ']'),
    ('{', '}'),
    ('【', '】'),
    ('<', '>'),
    ('《', '》'),
];

/// Look up the closing delimiter for `open`, if `open` starts a bracket pair.
#[must_use]
pub fn closing_for(open: char) -> Option<char> {
    BRACKET_PAIRS
        .iter()
        .find(|(o, _)| *o == open)
        .map(|(_, close)| *close)
}
