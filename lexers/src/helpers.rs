#![deny(warnings)]

use crate::scanner::Scanner;

/*
 * The caller of these function is expected to setup the scanner for a
 * clear start, ie: call scanner.ignore() to start fresh
 */

const DIGITS: &str = "0123456789";
const OPS: &str = "+-*/^()";
const WHITE: &str = " \t\r\n";

// scan a maximal run of [0-9]+ into its base-10 value, wrapping on overflow
pub fn scan_integer<I: Iterator<Item = char>>(scanner: &mut Scanner<I>) -> Option<i64> {
    if !scanner.skip_all_chars(DIGITS) {
        return None;
    }
    let value = scanner
        .extract()
        .into_iter()
        .filter_map(|c| c.to_digit(10))
        .fold(0i64, |acc, d| acc.wrapping_mul(10).wrapping_add(d as i64));
    Some(value)
}

// single char operators and parenthesis
pub fn scan_op<I: Iterator<Item = char>>(scanner: &mut Scanner<I>) -> Option<char> {
    let op = scanner.accept_any_char(OPS)?;
    scanner.ignore();
    Some(op)
}

pub fn skip_whitespace<I: Iterator<Item = char>>(scanner: &mut Scanner<I>) -> bool {
    let skipped = scanner.skip_all_chars(WHITE);
    scanner.ignore();
    skipped
}

///////////////////////////////////////////////////////////////////////////////
