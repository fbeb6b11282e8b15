use crate::scanner::Scanner;

#[test]
fn test_extremes() {
    let mut s = Scanner::new("just a test buffer@".chars());
    assert_eq!(s.curr(), None);
    assert_eq!(s.next(), Some('j'));
    while s.next() != Some('@') {}
    assert_eq!(s.curr(), Some('@'));
    assert_eq!(s.next(), None);
    assert_eq!(s.next(), None);
    assert_eq!(s.curr(), None);
}

#[test]
fn test_extract() {
    let mut s = Scanner::new("just a test buffer@".chars());
    for _ in 0..4 { assert!(s.next().is_some()); }
    assert_eq!(s.extract_string(), "just");
    assert_eq!(s.offset(), 4);
    assert_eq!(s.next(), Some(' '));
    for _ in 0..6 { assert!(s.next().is_some()); }
    assert_eq!(s.extract_string(), " a test");
    assert_eq!(s.offset(), 11);
    assert_eq!(s.next(), Some(' '));
}

#[test]
fn test_accept() {
    let mut s = Scanner::new("heey  you!".chars());
    assert_eq!(s.accept_any(&['h', 'e']), Some('h'));
    assert_eq!(s.curr(), Some('h'));
    assert_eq!(s.accept_any(&['h', 'e']), Some('e'));
    assert_eq!(s.accept_any(&['h', 'y', 'e']), Some('e'));
    assert_eq!(s.accept(&'e'), None);
    assert_eq!(s.curr(), Some('e'));
    assert_eq!(s.accept(&'y'), Some('y'));
    assert!(s.skip_all(&[' ']));
    assert!(!s.skip_all(&[' ']));
    assert_eq!(s.curr(), Some(' '));
    assert_eq!(s.next(), Some('y'));
}

#[test]
fn test_backtrack() {
    let mut s = Scanner::new("12+".chars());
    let backtrack = s.pos();
    assert!(s.skip_all(&['1', '2']));
    assert_eq!(s.pos(), 1);
    assert!(s.set_pos(backtrack));
    assert_eq!(s.curr(), None);
    assert!(!s.set_pos(7));
    assert_eq!(s.next(), Some('1'));
}

#[test]
fn test_offset_at_eof() {
    let mut s = Scanner::new("ab".chars());
    while s.next().is_some() {}
    assert_eq!(s.extract_string(), "ab");
    assert_eq!(s.offset(), 2);
    s.ignore();
    assert_eq!(s.offset(), 2);
}
