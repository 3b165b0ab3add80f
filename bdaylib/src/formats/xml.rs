//! Упрощённый XML: <XmlPhonebook><contacts><name/>...<wishes>...</wishes></contacts></XmlPhonebook>

use crate::{
    error::{BdayError, Result},
    model::{Contact, GiftOption},
};
use quick_xml::{de::from_reader, se::to_string};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::io::{BufRead, Write};

#[derive(Serialize, Deserialize, Debug)]
struct XmlWish {
    title: String,
    #[serde(with = "rust_decimal::serde::str")]
    price: Decimal,
}

#[derive(Serialize, Deserialize, Debug)]
struct XmlContact {
    name: String,
    birthdate: String,
    #[serde(default)]
    wishes: Vec<XmlWish>,
}

#[derive(Serialize, Deserialize, Debug)]
struct XmlPhonebook {
    #[serde(default)]
    contacts: Vec<XmlContact>,
}

pub struct SimpleXml;

impl crate::traits::ReadPhonebook for SimpleXml {
    fn read<R: BufRead>(r: R) -> Result<Vec<Contact>> {
        let x: XmlPhonebook = from_reader(r).map_err(|e| BdayError::Xml(format!("{e}")))?;

        Ok(x.contacts
            .into_iter()
            .map(|c| Contact {
                name: c.name,
                birthdate: c.birthdate,
                wish_list: c
                    .wishes
                    .into_iter()
                    .map(|w| GiftOption {
                        title: w.title,
                        price: w.price,
                    })
                    .collect(),
            })
            .collect())
    }
}

impl crate::traits::WritePhonebook for SimpleXml {
    fn write<W: Write>(mut w: W, contacts: &[Contact]) -> Result<()> {
        let x = XmlPhonebook {
            contacts: contacts
                .iter()
                .map(|c| XmlContact {
                    name: c.name.clone(),
                    birthdate: c.birthdate.clone(),
                    wishes: c
                        .wish_list
                        .iter()
                        .map(|g| XmlWish {
                            title: g.title.clone(),
                            price: g.price,
                        })
                        .collect(),
                })
                .collect(),
        };

        let s = to_string(&x).map_err(|e| BdayError::Xml(format!("{e}")))?;
        w.write_all(s.as_bytes())?;
        Ok(())
    }
}
