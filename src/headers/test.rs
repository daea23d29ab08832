use crate::common::ByteStr;
use crate::headers::{HeaderField, HeaderMap, Iter};

const fn is_send_sync<T: Send + Sync>() { }
const _: () = {
    is_send_sync::<HeaderMap>();
    is_send_sync::<HeaderField>();
    is_send_sync::<Iter<'static>>();
};

#[test]
fn header_map() {
    let mut map = HeaderMap::new();
    assert!(map.is_empty());

    assert!(map.insert_if_absent("Host", "example.com"));
    assert!(map.insert_if_absent("Accept", "*/*"));
    assert!(map.insert_if_absent("host", "lowercase.example.com"));
    assert_eq!(map.len(), 3);

    assert!(map.contains_key("Host"));
    assert!(map.contains_key("host"));
    assert!(!map.contains_key("HOST"));
    assert_eq!(map.get("Host").unwrap(), "example.com");
    assert_eq!(map.get("host").unwrap(), "lowercase.example.com");
    assert!(map.get("Content-Length").is_none());

    // first wins
    assert!(!map.insert_if_absent("Host", "other.example.com"));
    assert_eq!(map.get("Host").unwrap(), "example.com");
    assert_eq!(map.len(), 3);

    map.clear();
    assert!(map.is_empty());
    assert!(!map.contains_key("Host"));
}

#[test]
fn header_map_iter() {
    let mut map = HeaderMap::with_capacity(4);
    map.insert_if_absent("B", "2");
    map.insert_if_absent("A", "1");
    map.insert_if_absent(ByteStr::from_static("C"), String::from("3"));
    map.insert_if_absent("A", "ignored");

    let iter = map.iter();
    assert_eq!(iter.len(), 3);
    let pairs: Vec<_> = iter.collect();
    assert_eq!(pairs, [("B", "2"), ("A", "1"), ("C", "3")]);

    let mut count = 0;
    for (name, value) in &map {
        assert!(!name.is_empty());
        assert!(!value.is_empty());
        count += 1;
    }
    assert_eq!(count, 3);

    assert_eq!(format!("{map:?}"), r#"{"B": "2", "A": "1", "C": "3"}"#);
}
