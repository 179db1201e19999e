//! End-to-end behaviour of the placeholder engine on single documents
use template_composer::engine::{
    Document, EngineError, Reconciled, VariableSlot, reconcile, remove_variable, render,
};

fn slots(values: &[&str]) -> Vec<VariableSlot> {
    values.iter().map(|v| VariableSlot::new(*v)).collect()
}

#[test]
fn test_render_bound_value() {
    assert_eq!(render("Hi {{1}}", &slots(&["Sam"])), "Hi Sam");
}

#[test]
fn test_out_of_order_typing_is_renumbered() {
    let result = reconcile("{{2}} then {{1}}", &slots(&["A", "B"]));

    assert_eq!(
        result,
        Reconciled::Changed {
            text: "{{1}} then {{2}}".to_string(),
            slots: slots(&["B", "A"]),
        }
    );
}

#[test]
fn test_remove_middle_variable() {
    let mut doc = Document {
        text: "{{1}} {{2}} {{3}}".to_string(),
        slots: slots(&["X", "Y", "Z"]),
    };

    remove_variable(&mut doc, 1).expect("index in range");

    assert_eq!(doc.text, "{{1}} {{2}}");
    assert_eq!(doc.slots, slots(&["X", "Z"]));
}

#[test]
fn test_plain_text_is_left_alone() {
    let text = "No placeholders here";

    assert_eq!(reconcile(text, &[]), Reconciled::Unchanged);
    assert_eq!(render(text, &[]), text);
}

#[test]
fn test_repeated_placeholder_is_one_slot() {
    assert_eq!(reconcile("{{1}} {{1}}", &slots(&["Z"])), Reconciled::Unchanged);
    assert_eq!(render("{{1}} {{1}}", &slots(&["Z"])), "Z Z");
}

#[test]
fn test_remove_out_of_range() {
    let mut doc = Document::from_parts("{{1}}", slots(&["only"]));
    let before = doc.clone();

    assert_eq!(
        doc.remove_variable(1),
        Err(EngineError::IndexOutOfRange { index: 1, len: 1 })
    );
    assert_eq!(doc, before);
}

#[test]
fn test_typing_session() {
    let mut doc = Document::new();

    doc.append_variable();
    doc.set_value(0, "Ann").expect("slot 0");
    assert_eq!(doc.text, "{{1}}");

    doc.set_text("Dear {{1}} your code is {{7}}");
    assert_eq!(doc.text, "Dear {{1}} your code is {{2}}");
    assert_eq!(doc.slots, slots(&["Ann", ""]));

    doc.set_value(1, "4411").expect("slot 1");
    assert_eq!(doc.render(), "Dear Ann your code is 4411");

    doc.remove_variable(0).expect("slot 0");
    assert_eq!(doc.text, "Dear your code is {{1}}");
    assert_eq!(doc.render(), "Dear your code is 4411");
}

#[test]
fn test_unbound_placeholders_stay_visible() {
    let doc = Document::from_parts("{{1}} and {{2}}", slots(&["", "set"]));

    assert_eq!(doc.render(), "{{1}} and set");
    assert_eq!(doc.unbound_slots(), vec![0]);
}
