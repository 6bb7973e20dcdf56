use super::*;

#[test]
fn get_returns_latest_value() {
    let value = Observable::new(1);
    assert_eq!(value.get(), 1);
    value.set(2);
    assert_eq!(value.get(), 2);
    value.update(|v| *v += 40);
    assert_eq!(value.get(), 42);
}

#[test]
fn subscribers_see_changes() {
    let list = Observable::new(Vec::<u32>::new());
    let mut rx = list.subscribe();
    assert!(!rx.has_changed().unwrap());

    list.update(|v| v.push(7));
    assert!(rx.has_changed().unwrap());
    assert_eq!(*rx.borrow_and_update(), vec![7]);
    assert!(!rx.has_changed().unwrap());
}

#[test]
fn set_without_subscribers_still_stores() {
    let value: Observable<String> = Observable::default();
    value.set("hello".to_string());
    assert_eq!(value.with(|s| s.len()), 5);
}
