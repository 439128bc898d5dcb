use crate::scanner::Scanner;

#[test]
fn test_extremes() {
    let mut s = Scanner::new("12+3@".chars());
    assert_eq!(s.curr(), None);
    assert_eq!(s.peek(), Some('1'));
    assert_eq!(s.next(), Some('1'));
    while s.next() != Some('@') {}
    assert_eq!(s.curr(), Some('@'));
    assert_eq!(s.next(), None);
    assert_eq!(s.next(), None);
    assert_eq!(s.view().iter().collect::<String>(), "12+3@");
}

#[test]
fn test_extract() {
    let mut s = Scanner::new("123*(45)".chars());
    for _ in 0..3 { assert!(s.next().is_some()); }
    assert_eq!(s.extract_string(), "123");
    assert_eq!(s.start(), 3);
    assert_eq!(s.peek(), Some('*'));
    assert_eq!(s.next(), Some('*'));
    s.ignore();
    assert_eq!(s.start(), 4);
    assert_eq!(s.next(), Some('('));
    assert_eq!(s.extract(), vec!['(']);
    assert_eq!(s.start(), 5);
}

#[test]
fn test_extract_past_end() {
    let mut s = Scanner::new("7".chars());
    assert_eq!(s.next(), Some('7'));
    assert_eq!(s.next(), None);
    assert_eq!(s.extract_string(), "7");
    assert_eq!(s.start(), 1);
    assert_eq!(s.next(), None);
    assert_eq!(s.extract_string(), "");
}

#[test]
fn test_accept() {
    let mut s = Scanner::new("2^-10".chars());
    assert_eq!(s.accept_any_char("+-"), None);
    assert_eq!(s.curr(), None);
    assert_eq!(s.accept_any_char("0123456789"), Some('2'));
    assert_eq!(s.curr(), Some('2'));
    assert_eq!(s.accept_any_char("^"), Some('^'));
    assert_eq!(s.accept_any_char("+-"), Some('-'));
    assert!(s.skip_all_chars("0123456789"));
    assert_eq!(s.curr(), Some('0'));
    assert!(!s.skip_all_chars("0123456789"));
    assert_eq!(s.extract_string(), "2^-10");
}

#[test]
fn test_backtrack() {
    let mut s = Scanner::new("(1)".chars());
    let backtrack = s.pos();
    assert_eq!(s.next(), Some('('));
    assert_eq!(s.next(), Some('1'));
    assert!(s.set_pos(backtrack));
    assert_eq!(s.next(), Some('('));
    assert!(!s.set_pos(10));
    assert!(!s.set_pos(-2));
}
