//! Простой CSV: заголовки: name,birthdate,wish_title,wish_price
//!
//! По строке на каждое желание; друг без списка желаний — одна строка с
//! пустыми wish-полями. Подряд идущие строки с одинаковыми name+birthdate
//! складываются в одного друга.

use crate::{
    error::{BdayError, Result},
    model::{Contact, GiftOption},
};
use csv::{ReaderBuilder, WriterBuilder};
use rust_decimal::Decimal;
use std::io::{BufRead, Write};

#[derive(serde::Deserialize)]
struct CsvRow {
    name: String,
    birthdate: String,
    wish_title: Option<String>,
    wish_price: Option<String>,
}

#[derive(serde::Serialize)]
struct CsvOutRow<'a> {
    name: &'a str,
    birthdate: &'a str,
    wish_title: Option<&'a str>,
    wish_price: Option<String>,
}

pub struct Csv;

impl crate::traits::ReadPhonebook for Csv {
    fn read<R: BufRead>(r: R) -> Result<Vec<Contact>> {
        let mut rdr = ReaderBuilder::new().flexible(true).from_reader(r);
        let mut contacts: Vec<Contact> = Vec::new();

        for rec in rdr.deserialize::<CsvRow>() {
            let row = rec?;

            let wish = match (&row.wish_title, &row.wish_price) {
                (Some(title), Some(price)) => Some(GiftOption {
                    title: title.clone(),
                    price: price
                        .parse::<Decimal>()
                        .map_err(|e| BdayError::Parse(format!("wish_price: {e}")))?,
                }),
                _ => None,
            };

            let folds = contacts
                .last()
                .map_or(false, |last| last.name == row.name && last.birthdate == row.birthdate);

            if folds {
                if let (Some(last), Some(w)) = (contacts.last_mut(), wish) {
                    last.wish_list.push(w);
                }
            } else {
                contacts.push(Contact {
                    name: row.name,
                    birthdate: row.birthdate,
                    wish_list: wish.into_iter().collect(),
                });
            }
        }

        Ok(contacts)
    }
}

impl crate::traits::WritePhonebook for Csv {
    fn write<W: Write>(mut w: W, contacts: &[Contact]) -> Result<()> {
        let mut wrt = WriterBuilder::new().from_writer(&mut w);

        for c in contacts {
            if c.wish_list.is_empty() {
                wrt.serialize(CsvOutRow {
                    name: &c.name,
                    birthdate: &c.birthdate,
                    wish_title: None,
                    wish_price: None,
                })?;
            } else {
                for wish in &c.wish_list {
                    wrt.serialize(CsvOutRow {
                        name: &c.name,
                        birthdate: &c.birthdate,
                        wish_title: Some(&wish.title),
                        wish_price: Some(wish.price.to_string()),
                    })?;
                }
            }
        }
        wrt.flush()?;
        Ok(())
    }
}
