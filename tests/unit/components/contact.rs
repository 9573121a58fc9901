use super::*;
use crate::test_support::portfolio_doc;

const NOTICE: &str = "Thanks — message captured (demo).";

#[test]
fn fields_are_named_children() {
    let doc = portfolio_doc();
    let form = ContactForm::new(&doc, NOTICE).unwrap();
    assert_eq!(form.fields().len(), 3);
    assert_eq!(form.form(), doc.by_id("contactForm").unwrap());
}

#[test]
fn input_matches_id_or_name() {
    let mut doc = portfolio_doc();
    let form = ContactForm::new(&doc, NOTICE).unwrap();
    assert!(form.input(&mut doc, "email", "ada@example.com"));
    assert!(form.input(&mut doc, "contactName", "Ada"));
    assert!(!form.input(&mut doc, "phone", "555"));

    let email = doc.by_id("contactEmail").unwrap();
    let name = doc.by_id("contactName").unwrap();
    assert_eq!(doc.get(email).attr("value"), Some("ada@example.com"));
    assert_eq!(doc.get(name).attr("value"), Some("Ada"));
}

#[test]
fn submit_clears_fields_and_posts_one_notice() {
    let mut doc = portfolio_doc();
    let form = ContactForm::new(&doc, NOTICE).unwrap();
    form.input(&mut doc, "message", "hello");
    form.submit(&mut doc);

    for &id in form.fields() {
        assert_eq!(doc.get(id).attr("value"), Some(""));
    }
    assert_eq!(doc.notices(), [NOTICE.to_owned()]);
}
