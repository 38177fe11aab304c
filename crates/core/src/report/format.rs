/// Currency rendering used by the report tables and the CLI output:
/// two decimal places, thousands separators, leading minus for negatives
/// (`-12345.5` becomes `-$12,345.50`).
pub fn currency(value: f64) -> String {
    let negative = value < 0.0;
    let fixed = format!("{:.2}", value.abs());
    let mut parts = fixed.splitn(2, '.');
    let int_part = parts.next().unwrap_or("0");
    let frac_part = parts.next().unwrap_or("00");
    let grouped = group_thousands(int_part);

    if negative {
        format!("-${grouped}.{frac_part}")
    } else {
        format!("${grouped}.{frac_part}")
    }
}

/// Modifier fraction as a whole percentage, rounded to the nearest integer.
pub fn whole_pct(fraction: f64) -> i64 {
    (fraction * 100.0).round() as i64
}

/// Greedy word wrap for narrative text. Words longer than the budget are
/// emitted on their own line rather than split.
pub fn wrap_words(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in text.lines() {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current = word.to_string();
            } else if current.len() + 1 + word.len() <= max_chars {
                current.push(' ');
                current.push_str(word);
            } else {
                lines.push(std::mem::take(&mut current));
                current = word.to_string();
            }
        }
        if !current.is_empty() {
            lines.push(current);
        }
    }
    lines
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_groups_thousands_and_keeps_two_decimals() {
        assert_eq!(currency(110_000.0), "$110,000.00");
        assert_eq!(currency(1_234_567.891), "$1,234,567.89");
        assert_eq!(currency(999.9), "$999.90");
        assert_eq!(currency(0.0), "$0.00");
    }

    #[test]
    fn currency_marks_negatives_with_a_leading_minus() {
        assert_eq!(currency(-10_000.0), "-$10,000.00");
        assert_eq!(currency(-0.5), "-$0.50");
    }

    #[test]
    fn whole_pct_rounds_to_the_nearest_integer() {
        assert_eq!(whole_pct(0.10), 10);
        assert_eq!(whole_pct(-0.05), -5);
        assert_eq!(whole_pct(0.126), 13);
        assert_eq!(whole_pct(0.0), 0);
    }

    #[test]
    fn wrap_words_respects_the_character_budget() {
        let lines = wrap_words("Plan is aggressive but feasible for a lean retail team.", 20);
        assert!(lines.iter().all(|l| l.len() <= 20));
        assert_eq!(
            lines.join(" "),
            "Plan is aggressive but feasible for a lean retail team."
        );
    }

    #[test]
    fn wrap_words_keeps_oversized_words_whole() {
        let lines = wrap_words("antidisestablishmentarianism now", 10);
        assert_eq!(lines[0], "antidisestablishmentarianism");
        assert_eq!(lines[1], "now");
    }
}
