use sift::{ConditionSet, Operator, Record};

#[derive(Record)]
struct Person {
    name: String,
    age: u32,
    nickname: Option<String>,
}

fn main() {
    assert_eq!(<Person as sift::Record>::TYPE_NAME, "Person");
    assert_eq!(Person::NAME.index(), 0);
    assert_eq!(Person::NICKNAME.name(), "nickname");

    let mut set = ConditionSet::<Person>::new([("age", "40"), ("NAME", "Ada")]);
    set.operator_for(Person::AGE, Operator::LessThan).unwrap();

    let predicate = set.to_and_predicate().unwrap();
    let ada = Person {
        name: "Ada".to_string(),
        age: 36,
        nickname: None,
    };
    assert!(predicate.evaluate(&ada));
}
