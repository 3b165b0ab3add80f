use bdaylib::{
    formats::xml::SimpleXml,
    model::{Contact, GiftOption},
    traits::{ReadPhonebook, WritePhonebook},
};
use rust_decimal::Decimal;
use std::io::Cursor;

#[test]
fn simple_xml_roundtrip() {
    let contacts = vec![
        Contact {
            name: "Маша".into(),
            birthdate: "15.03.2099".into(),
            wish_list: vec![GiftOption {
                title: "Книга".into(),
                price: Decimal::from_str_exact("30.00").unwrap(),
            }],
        },
        Contact {
            name: "Петя".into(),
            birthdate: "04.07.2099".into(),
            wish_list: Vec::new(),
        },
    ];

    let mut out = Vec::new();
    SimpleXml::write(&mut out, &contacts).expect("write simple xml");
    let again = SimpleXml::read(Cursor::new(out)).expect("read simple xml");

    assert_eq!(again, contacts);
}
