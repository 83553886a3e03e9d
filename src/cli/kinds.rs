//! Kinds command implementation.

use crate::kind::KIND_SYNTAX;

/// Width of the tag column.
const TAG_WIDTH: usize = 15;

pub fn run() {
    println!("{}", format_kinds());
}

/// One line per kind: tag syntax, then description.
fn format_kinds() -> String {
    KIND_SYNTAX
        .iter()
        .map(|(tag, description)| format!("{tag:<TAG_WIDTH$} {description}"))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_kinds() {
        insta::assert_snapshot!(format_kinds(), @r"
        string          any text
        integer         base-10 32-bit integer
        non-negative    integer >= 0
        range(LO..HI)   integer between LO and HI inclusive
        double          floating-point number
        boolean         1/t/true or 0/f/false, any case
        percentage      digits with optional fraction and a trailing %
        locale          language tag, leniently normalized
        location        WORLD@XXXXXXXXYYYYYYYYZZZZZZZZ
        enum(A|B|...)   one of the listed names, any case
        list<KIND>      bracketed or comma/space separated list
        ");
    }
}
