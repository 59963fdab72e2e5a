//! # Expression Formatting
//!
//! Human-readable renderings of drawn coefficients. Zero terms are skipped,
//! unit coefficients on variable terms are implicit, and exponents use
//! unicode superscripts.

const SUPERSCRIPTS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];

fn superscript(exponent: u32) -> String {
    exponent
        .to_string()
        .chars()
        .filter_map(|digit| digit.to_digit(10))
        .map(|digit| SUPERSCRIPTS[digit as usize])
        .collect()
}

/// Renders a polynomial body in descending powers, e.g. `x³ - 3x + 1`.
///
/// The slice holds coefficients from the highest power down; an all-zero
/// slice renders as `0`.
fn polynomial_body(coefficients: &[f64]) -> String {
    let degree = coefficients.len().saturating_sub(1);
    let mut body = String::new();

    for (index, &coefficient) in coefficients.iter().enumerate() {
        if coefficient == 0.0 {
            continue;
        }
        let power = (degree - index) as u32;
        let magnitude = coefficient.abs();

        if body.is_empty() {
            if coefficient < 0.0 {
                body.push('-');
            }
        } else if coefficient < 0.0 {
            body.push_str(" - ");
        } else {
            body.push_str(" + ");
        }

        if magnitude != 1.0 || power == 0 {
            body.push_str(&magnitude.to_string());
        }
        if power >= 1 {
            body.push('x');
        }
        if power >= 2 {
            body.push_str(&superscript(power));
        }
    }

    if body.is_empty() {
        body.push('0');
    }
    body
}

pub(crate) fn linear_expression(m: f64, b: f64) -> String {
    format!("f(x) = {}", polynomial_body(&[m, b]))
}

pub(crate) fn polynomial_expression(coefficients: &[f64]) -> String {
    format!("f(x) = {}", polynomial_body(coefficients))
}

pub(crate) fn rational_expression(numerator: &[f64], denominator: &[f64]) -> String {
    format!(
        "f(x) = ({})/({})",
        polynomial_body(numerator),
        polynomial_body(denominator)
    )
}

pub(crate) fn trigonometric_expression(a: f64, b: f64, c: f64, d: f64) -> String {
    let mut expression = String::from("f(x) = ");
    if a == -1.0 {
        expression.push('-');
    } else if a != 1.0 {
        expression.push_str(&a.to_string());
    }
    expression.push_str("sin(");
    expression.push_str(&polynomial_body(&[b, c]));
    expression.push(')');
    if d > 0.0 {
        expression.push_str(&format!(" + {}", d));
    } else if d < 0.0 {
        expression.push_str(&format!(" - {}", -d));
    }
    expression
}

pub(crate) fn circle_expression(h: f64, k: f64, r: f64) -> String {
    format!("{} + {} = {}", shifted('x', h), shifted('y', k), r * r)
}

/// Renders `(v - offset)²`, folding the sign into the operator.
fn shifted(variable: char, offset: f64) -> String {
    if offset == 0.0 {
        format!("{}²", variable)
    } else if offset > 0.0 {
        format!("({} - {})²", variable, offset)
    } else {
        format!("({} + {})²", variable, -offset)
    }
}
