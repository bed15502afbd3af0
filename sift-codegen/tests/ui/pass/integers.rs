use sift::{ConditionSet, FieldType, Operator, Record};

#[derive(Record)]
struct Counter {
    id: u64,
    slot: usize,
    offset: isize,
    total: i128,
    serial: u128,
    grade: char,
    parent: Option<u64>,
}

fn main() {
    let fields = <Counter as sift::Record>::fields();
    for name in ["id", "slot", "offset", "total", "serial", "parent"] {
        assert_eq!(fields.find(name).unwrap().field_type(), FieldType::Int);
    }
    assert_eq!(fields.find("grade").unwrap().field_type(), FieldType::String);

    let counter = Counter {
        id: u64::MAX,
        slot: 3,
        offset: -2,
        total: i128::MIN,
        serial: u128::MAX,
        grade: 'A',
        parent: None,
    };

    let set = ConditionSet::<Counter>::new([
        ("id", "18446744073709551615"),
        ("serial", "340282366920938463463374607431768211455"),
        ("grade", "A"),
        ("offset", "-2"),
    ]);
    assert!(set.to_and_predicate().unwrap().evaluate(&counter));

    let mut set = ConditionSet::<Counter>::new([("total", "0"), ("id", "9223372036854775807")]);
    set.operator_for(Counter::TOTAL, Operator::LessThan).unwrap();
    set.operator_for(Counter::ID, Operator::GreaterThan).unwrap();
    assert!(set.to_and_predicate().unwrap().evaluate(&counter));
}
