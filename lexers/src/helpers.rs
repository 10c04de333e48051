use crate::scanner::Scanner;

pub(crate) static WHITE: &[char] = &[' ', '\n', '\r', '\t'];
pub(crate) static DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/*
 * The caller is expected to setup the scanner for a clean start,
 * ie: call scanner.ignore() before scanning.
 */

// scan the longest prefix looking like -?[0-9]+(\.[0-9]*)?([eE][+-]?[0-9]+)?
pub fn scan_number<I: Iterator<Item=char>>(scanner: &mut Scanner<I>) -> Option<String> {
    let backtrack = scanner.pos();
    // optional sign
    scanner.accept(&'-');
    // require integer part
    if !scanner.skip_all(DIGITS) {
        scanner.set_pos(backtrack);
        return None;
    }
    // a trailing '.' with no digits still belongs to the number
    if scanner.accept(&'.').is_some() {
        scanner.skip_all(DIGITS);
    }
    // exponent only counts if it has digits
    let backtrack = scanner.pos();
    if scanner.accept_any(&['e', 'E']).is_some() {
        scanner.accept_any(&['+', '-']);
        if !scanner.skip_all(DIGITS) {
            scanner.set_pos(backtrack);
        }
    }
    Some(scanner.extract_string())
}

///////////////////////////////////////////////////////////////////////////////
