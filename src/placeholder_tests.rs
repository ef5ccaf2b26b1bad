#[cfg(test)]
mod tests {
    use crate::placeholder::{COLON, DOLLAR, PlaceholderFormat, QUESTION, rewrite};
    use crate::Error;
    use pretty_assertions::assert_eq;

    const QUOTED: &str =
        "SELECT * FROM users WHERE text = 'What is this? I don''t know!' AND id = ?";

    fn check(format: PlaceholderFormat, cases: &[(&str, &str)]) {
        for (input, expected) in cases {
            let got = format.replace_placeholders(input).unwrap();
            assert_eq!(&got, expected, "format={format} input={input:?}");
        }
    }

    #[test]
    fn question_passes_through() {
        check(
            QUESTION,
            &[
                ("", ""),
                ("SELECT * FROM users", "SELECT * FROM users"),
                (
                    "SELECT * FROM users WHERE id = ?",
                    "SELECT * FROM users WHERE id = ?",
                ),
                (
                    "SELECT * FROM users WHERE id = ? AND name = ? AND age > ?",
                    "SELECT * FROM users WHERE id = ? AND name = ? AND age > ?",
                ),
                (
                    "INSERT INTO users (id, name, age) VALUES (?, ?, ?)",
                    "INSERT INTO users (id, name, age) VALUES (?, ?, ?)",
                ),
                (QUOTED, QUOTED),
            ],
        );
    }

    #[test]
    fn dollar_numbers_markers() {
        check(
            DOLLAR,
            &[
                ("", ""),
                ("SELECT * FROM users", "SELECT * FROM users"),
                (
                    "SELECT * FROM users WHERE id = ?",
                    "SELECT * FROM users WHERE id = $1",
                ),
                (
                    "SELECT * FROM users WHERE id = ? AND name = ? AND age > ?",
                    "SELECT * FROM users WHERE id = $1 AND name = $2 AND age > $3",
                ),
                (
                    "INSERT INTO t (a,b,c) VALUES (?,?,?)",
                    "INSERT INTO t (a,b,c) VALUES ($1,$2,$3)",
                ),
                (
                    "SELECT * FROM (SELECT id FROM users WHERE name = ?) AS u WHERE u.id IN (?, ?, ?)",
                    "SELECT * FROM (SELECT id FROM users WHERE name = $1) AS u WHERE u.id IN ($2, $3, $4)",
                ),
            ],
        );
    }

    #[test]
    fn colon_numbers_markers() {
        check(
            COLON,
            &[
                ("", ""),
                (
                    "SELECT * FROM users WHERE id = ? AND age > ?",
                    "SELECT * FROM users WHERE id = :1 AND age > :2",
                ),
                (
                    "INSERT INTO users (id, name, age) VALUES (?, ?, ?)",
                    "INSERT INTO users (id, name, age) VALUES (:1, :2, :3)",
                ),
            ],
        );
    }

    #[test]
    fn adjacent_markers_are_independent() {
        check(
            DOLLAR,
            &[
                ("LIKE ??", "LIKE $1$2"),
                (
                    "SELECT * FROM users WHERE name LIKE ?? AND age > ?",
                    "SELECT * FROM users WHERE name LIKE $1$2 AND age > $3",
                ),
                (
                    "SELECT * FROM users WHERE name LIKE ??? AND age > ?",
                    "SELECT * FROM users WHERE name LIKE $1$2$3 AND age > $4",
                ),
            ],
        );
    }

    #[test]
    fn markers_inside_literals_are_rewritten() {
        let got = DOLLAR.replace_placeholders(QUOTED).unwrap();
        assert_eq!(
            got,
            "SELECT * FROM users WHERE text = 'What is this$1 I don''t know!' AND id = $2"
        );
    }

    #[test]
    fn hundred_markers() {
        let input = format!("SELECT * FROM users WHERE id IN ({})", vec!["?"; 100].join(","));
        let expected = format!(
            "SELECT * FROM users WHERE id IN ({})",
            (1..=100).map(|i| format!("${i}")).collect::<Vec<_>>().join(",")
        );
        assert_eq!(DOLLAR.replace_placeholders(&input).unwrap(), expected);
    }

    #[test]
    fn multibyte_text_is_preserved() {
        let got = COLON
            .replace_placeholders("SELECT '名字' FROM t WHERE a = ? AND b = 'ü'")
            .unwrap();
        assert_eq!(got, "SELECT '名字' FROM t WHERE a = :1 AND b = 'ü'");
    }

    #[test]
    fn no_markers_is_identity_for_every_format() {
        let inputs = ["", "SELECT 1", "SELECT $1 FROM t", "a:1 b"];
        for format in [QUESTION, DOLLAR, COLON] {
            for s in inputs {
                assert_eq!(rewrite(format, s).unwrap(), s);
            }
        }
    }

    #[test]
    fn token_count_matches_marker_count() {
        let input = "a ? b ?? c (?, ?) ? end";
        let markers = input.matches('?').count();
        for format in [DOLLAR, COLON] {
            let prefix = format.numbered_prefix().unwrap();
            let out = rewrite(format, input).unwrap();
            let tokens: Vec<usize> = out
                .split(prefix)
                .skip(1)
                .map(|s| {
                    let digits: String = s.chars().take_while(char::is_ascii_digit).collect();
                    digits.parse().unwrap()
                })
                .collect();
            assert_eq!(tokens, (1..=markers).collect::<Vec<_>>());
        }
    }

    #[test]
    fn second_rewrite_is_a_no_op() {
        let input = "UPDATE t SET a = ?, b = ? WHERE id = ?";
        for format in [QUESTION, DOLLAR, COLON] {
            let once = rewrite(format, input).unwrap();
            let twice = rewrite(format, &once).unwrap();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn shared_format_across_threads() {
        let format = DOLLAR;
        std::thread::scope(|s| {
            let handles: Vec<_> = (1..=8)
                .map(|n| {
                    s.spawn(move || {
                        let input = vec!["?"; n].join(", ");
                        (n, format.replace_placeholders(&input).unwrap())
                    })
                })
                .collect();
            for h in handles {
                let (n, out) = h.join().unwrap();
                let expected = (1..=n).map(|i| format!("${i}")).collect::<Vec<_>>().join(", ");
                assert_eq!(out, expected);
            }
        });
    }

    #[test]
    fn input_is_not_modified() {
        let input = String::from("x = ?");
        let out = DOLLAR.replace_placeholders(&input).unwrap();
        assert_eq!(input, "x = ?");
        assert_eq!(out, "x = $1");
    }

    #[test]
    fn format_names_round_trip() {
        for format in [QUESTION, DOLLAR, COLON] {
            assert_eq!(format.to_string().parse::<PlaceholderFormat>(), Ok(format));
        }
        assert_eq!("Postgres".parse::<PlaceholderFormat>(), Ok(DOLLAR));
        assert_eq!(" oracle ".parse::<PlaceholderFormat>(), Ok(COLON));
        assert_eq!("?".parse::<PlaceholderFormat>(), Ok(QUESTION));
        assert_eq!(
            "at".parse::<PlaceholderFormat>(),
            Err(Error::UnknownPlaceholderFormat("at".to_string()))
        );
    }

    #[test]
    fn debug_placeholder_symbols() {
        assert_eq!(QUESTION.debug_placeholder(), "?");
        assert_eq!(DOLLAR.debug_placeholder(), "$");
        assert_eq!(COLON.debug_placeholder(), ":");
        assert_eq!(QUESTION.numbered_prefix(), None);
    }
}
