use std::cell::RefCell;
use std::rc::Rc;

use super::*;

#[test]
fn both_fields_are_required_after_trimming() {
    let mut form = AssetByIdForm::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    form.is_valid_changed()
        .connect(move |v: &bool| sink.borrow_mut().push(*v));

    assert!(!form.is_valid());
    form.set_asset_id(" 96188 ");
    form.set_access_token("   ");
    form.set_access_token(" abc ");
    form.set_asset_id("");

    assert_eq!(*seen.borrow(), vec![false, false, true, false]);
    assert_eq!(form.token(), "abc");

    form.set_asset_id("1");
    assert!(form.is_valid());
    assert_eq!(form.asset_id(), "1");
}
