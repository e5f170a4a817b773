use std::sync::OnceLock;

use regex::Regex;

fn first_int() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("static regex"))
}

/// Decide whether `age` (in years) falls inside a free-text age-range
/// expression. Parsing is fail-open: any expression that cannot be
/// understood counts as eligible.
///
/// Rules, in priority order:
/// 1. contains "months" → eligible (month arithmetic is a stub),
/// 2. contains '-' → `min-max` bounds, inclusive,
/// 3. contains "above" or '>' → first integer is the minimum,
/// 4. otherwise → eligible.
pub fn is_eligible(age: i64, age_range: &str) -> bool {
    let expr = age_range.to_lowercase();

    if expr.contains("months") {
        return true;
    }

    if expr.contains('-') {
        let mut parts = expr.splitn(2, '-');
        let min = parts.next().map(str::trim).and_then(|s| s.parse::<i64>().ok());
        let max = parts.next().map(str::trim).and_then(|s| s.parse::<i64>().ok());
        return match (min, max) {
            (Some(min), Some(max)) => min <= age && age <= max,
            // Non-numeric bounds: fail open.
            _ => true,
        };
    }

    if expr.contains("above") || expr.contains('>') {
        return match first_int().find(&expr) {
            Some(m) => match m.as_str().parse::<i64>() {
                Ok(min) => age >= min,
                Err(_) => true,
            },
            None => true,
        };
    }

    true
}
