/// Text normalization and field-level fallback resolution.
///
/// Every document the engine emits passes through `normalize`, and every
/// free-text input field passes through `resolve` before being embedded
/// into a template. Both are pure and total.

/// Canonicalize whitespace: CRLF and lone CR become LF, runs of three or
/// more LFs collapse to exactly two (one blank line), and leading/trailing
/// whitespace is trimmed. Idempotent.
pub fn normalize(text: &str) -> String {
    let unified = text.replace("\r\n", "\n").replace('\r', "\n");

    let mut out = String::with_capacity(unified.len());
    let mut newline_run = 0usize;
    for ch in unified.chars() {
        if ch == '\n' {
            newline_run += 1;
            if newline_run <= 2 {
                out.push('\n');
            }
        } else {
            newline_run = 0;
            out.push(ch);
        }
    }

    out.trim().to_string()
}

/// Normalized field text, or the fallback phrase when the field is empty
/// after normalization. Used uniformly across every template field so an
/// unfilled form still renders a complete document.
pub fn resolve(text: &str, fallback: &str) -> String {
    let normalized = normalize(text);
    if normalized.is_empty() {
        fallback.to_string()
    } else {
        normalized
    }
}

/// Whole-word term substitution over a fixed table.
///
/// This is the named localization strategy for the secondary language:
/// generate the primary-language document, then swap terms. A term only
/// matches when not surrounded by alphanumeric characters, so `EPISÓDIO`
/// does not rewrite the inside of `EPISÓDIOS` unless the plural has its
/// own table entry. First matching pair wins at each position.
pub fn derive_by_substitution(text: &str, table: &[(&str, &str)]) -> String {
    let chars: Vec<char> = text.chars().collect();
    let terms: Vec<(Vec<char>, &str)> = table
        .iter()
        .map(|(from, to)| (from.chars().collect(), *to))
        .collect();

    let mut out = String::with_capacity(text.len());
    let mut i = 0;
    while i < chars.len() {
        let mut replaced = false;
        for (from, to) in &terms {
            if from.is_empty() || i + from.len() > chars.len() {
                continue;
            }
            if chars[i..i + from.len()] != from[..] {
                continue;
            }
            let before_ok = i == 0 || !chars[i - 1].is_alphanumeric();
            let after = i + from.len();
            let after_ok = after == chars.len() || !chars[after].is_alphanumeric();
            if before_ok && after_ok {
                out.push_str(to);
                i = after;
                replaced = true;
                break;
            }
        }
        if !replaced {
            out.push(chars[i]);
            i += 1;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_converts_crlf_runs() {
        assert_eq!(normalize("a\r\n\r\n\r\n\r\n b"), "a\n\n b");
    }

    #[test]
    fn normalize_trims_edges() {
        assert_eq!(normalize("\n\n\nhello\n\n\n\n"), "hello");
    }

    #[test]
    fn normalize_preserves_paragraph_breaks() {
        assert_eq!(normalize("keep\n\nthis\n\n"), "keep\n\nthis");
    }

    #[test]
    fn normalize_lone_cr() {
        assert_eq!(normalize("a\rb"), "a\nb");
        assert_eq!(normalize("a\r\r\r\rb"), "a\n\nb");
    }

    #[test]
    fn normalize_is_idempotent() {
        let samples = [
            "a\r\n\r\n\r\n\r\n b",
            "\n\n\nhello\n\n\n\n",
            "keep\n\nthis\n\n",
            "  mixed \r content\nhere  ",
            "",
            "\r\n\r\n",
        ];
        for s in samples {
            let once = normalize(s);
            assert_eq!(normalize(&once), once, "not idempotent for {s:?}");
        }
    }

    #[test]
    fn resolve_prefers_content() {
        assert_eq!(resolve("  valor  ", "padrão"), "valor");
    }

    #[test]
    fn resolve_falls_back_when_blank() {
        assert_eq!(resolve("", "padrão"), "padrão");
        assert_eq!(resolve("  \r\n \n ", "padrão"), "padrão");
    }

    #[test]
    fn substitution_is_whole_word() {
        let table = [("MUNDO", "WORLD")];
        assert_eq!(derive_by_substitution("MUNDO: neon", &table), "WORLD: neon");
        // Embedded occurrences are left alone.
        assert_eq!(derive_by_substitution("SUBMUNDOS", &table), "SUBMUNDOS");
    }

    #[test]
    fn substitution_respects_accented_terms() {
        let table = [("SÉRIE", "SERIES"), ("EPISÓDIO", "EPISODE")];
        assert_eq!(
            derive_by_substitution("SÉRIE — EPISÓDIO 1", &table),
            "SERIES — EPISODE 1"
        );
        // Plural without its own entry survives untouched.
        assert_eq!(derive_by_substitution("EPISÓDIOS", &table), "EPISÓDIOS");
    }

    #[test]
    fn substitution_first_pair_wins() {
        let table = [("REGRAS", "RULES"), ("REGRAS", "LAWS")];
        assert_eq!(derive_by_substitution("REGRAS:", &table), "RULES:");
    }
}
