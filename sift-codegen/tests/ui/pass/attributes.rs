use sift::Record;

mod filters {
    pub use sift::*;
}

#[derive(Record)]
#[sift(crate = "filters")]
struct Invoice {
    #[sift(rename = "InvoiceNumber")]
    number: String,
    #[sift(skip)]
    lines: Vec<(String, i64)>,
    r#type: String,
    amount_cents: i64,
}

fn main() {
    let fields = <Invoice as filters::Record>::fields();
    assert_eq!(fields.len(), 3);
    assert!(fields.find("invoicenumber").is_some());
    assert!(fields.find("number").is_none());
    assert!(fields.find("lines").is_none());

    assert_eq!(Invoice::NUMBER.name(), "InvoiceNumber");
    assert_eq!(Invoice::TYPE.index(), 1);
    assert_eq!(Invoice::AMOUNT_CENTS.index(), 2);

    let invoice = Invoice {
        number: "INV-7".to_string(),
        lines: Vec::new(),
        r#type: "credit".to_string(),
        amount_cents: 1200,
    };
    let _ = &invoice.lines;
    let predicate = filters::ConditionSet::<Invoice>::new([("type", "credit")])
        .to_and_predicate()
        .unwrap();
    assert!(predicate.evaluate(&invoice));
}
