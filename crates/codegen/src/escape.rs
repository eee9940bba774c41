//! Table-driven string escaping.
//!
//! Each target language quotes its string literals one way; the renderers
//! pick a table instead of carrying bespoke replace chains.

/// A quote style: which characters need escaping and their replacements.
#[derive(Debug, Clone, Copy)]
pub struct EscapeTable {
    pairs: &'static [(char, &'static str)],
}

impl EscapeTable {
    /// Escapes `input` according to this table. Characters without an entry
    /// pass through untouched.
    #[must_use]
    pub fn apply(&self, input: &str) -> String {
        let mut out = String::with_capacity(input.len());
        for ch in input.chars() {
            match self.pairs.iter().find(|(needle, _)| *needle == ch) {
                Some((_, replacement)) => out.push_str(replacement),
                None => out.push(ch),
            }
        }
        out
    }
}

/// C-style double-quoted literals: Java, Go, C#, Swift, Python.
pub const DOUBLE_QUOTED: EscapeTable = EscapeTable {
    pairs: &[
        ('\\', "\\\\"),
        ('"', "\\\""),
        ('\n', "\\n"),
        ('\r', "\\r"),
        ('\t', "\\t"),
    ],
};

/// Double-quoted literals in languages with `$` interpolation: Kotlin, PHP.
pub const DOLLAR_DOUBLE_QUOTED: EscapeTable = EscapeTable {
    pairs: &[
        ('\\', "\\\\"),
        ('"', "\\\""),
        ('$', "\\$"),
        ('\n', "\\n"),
        ('\r', "\\r"),
        ('\t', "\\t"),
    ],
};

/// Ruby double-quoted literals, where `#{` interpolates.
pub const RUBY_DOUBLE_QUOTED: EscapeTable = EscapeTable {
    pairs: &[
        ('\\', "\\\\"),
        ('"', "\\\""),
        ('#', "\\#"),
        ('\n', "\\n"),
        ('\r', "\\r"),
        ('\t', "\\t"),
    ],
};

/// Single-quoted literals that still process control escapes: JavaScript.
pub const SINGLE_QUOTED: EscapeTable = EscapeTable {
    pairs: &[
        ('\\', "\\\\"),
        ('\'', "\\'"),
        ('\n', "\\n"),
        ('\r', "\\r"),
        ('\t', "\\t"),
    ],
};

/// Single-quoted literals where only the quote and backslash are special:
/// Ruby and PHP single quotes.
pub const LITERAL_SINGLE_QUOTED: EscapeTable = EscapeTable {
    pairs: &[('\\', "\\\\"), ('\'', "\\'")],
};

/// POSIX shell single quotes: close the quote, emit an escaped quote,
/// reopen.
pub const SHELL_SINGLE_QUOTED: EscapeTable = EscapeTable {
    pairs: &[('\'', "'\\''")],
};
