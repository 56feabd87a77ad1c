use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ENUMERATION_RE: Regex = Regex::new(r"\d+\.\s*").unwrap();
}

/// Cleans a raw gloss field for matching and display.
///
/// Lines starting with `http` are dropped, the rest are joined with a space,
/// `1.`-style enumeration markers become a space and whitespace runs collapse.
/// The pass repeats until the text stops changing, so the output is always a
/// fixed point: `normalize(Some(&normalize(s))) == normalize(s)`.
pub fn normalize(raw: Option<&str>) -> String {
    let mut current = match raw {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => return String::new(),
    };

    loop {
        let next = normalize_pass(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn normalize_pass(text: &str) -> String {
    let joined = text
        .split('\n')
        .filter(|line| !line.trim().starts_with("http"))
        .collect::<Vec<_>>()
        .join(" ");

    ENUMERATION_RE
        .replace_all(&joined, " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_url_lines_and_markers() {
        assert_eq!(normalize(Some("http://x\nHello 1. World")), "Hello World");
    }

    #[test]
    fn empty_and_missing_input() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("")), "");
        assert_eq!(normalize(Some("https://only.example/a\n  http://b")), "");
    }

    #[test]
    fn enumerated_glosses_are_flattened() {
        let raw = "1. nasi\n2. makanan\nhttps://kbbi.kemdikbud.go.id/entri/nasi";
        assert_eq!(normalize(Some(raw)), "nasi makanan");
    }

    #[test]
    fn parenthesised_numbers_are_kept() {
        assert_eq!(normalize(Some("23) kereta")), "23) kereta");
    }

    #[test]
    fn windows_line_endings() {
        assert_eq!(normalize(Some("1. bus\r\nhttp://x\r\n2. truk")), "bus truk");
    }

    #[test]
    fn idempotent() {
        let samples = [
            "http://x\nHello 1. World",
            "1. http://x",
            "1.2. nasi goreng",
            "  spasi   ganda \t dan tab ",
            "a1.b2.c",
            "kereta\nhttp\n3.\n",
            "12.\n 7. rumah sakit",
            "",
        ];
        for sample in samples {
            let once = normalize(Some(sample));
            assert_eq!(normalize(Some(&once)), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn marker_that_uncovers_a_url_is_dropped() {
        assert_eq!(normalize(Some("1. http://x")), "");
    }
}
