//! Телефонная книга в JSON: [{"name": ..., "birthdate": ..., "wishList": [...]}]

use crate::{error::Result, model::Contact};
use std::io::{BufRead, Write};

pub struct Json;

impl crate::traits::ReadPhonebook for Json {
    fn read<R: BufRead>(r: R) -> Result<Vec<Contact>> {
        Ok(serde_json::from_reader(r)?)
    }
}

impl crate::traits::WritePhonebook for Json {
    fn write<W: Write>(w: W, contacts: &[Contact]) -> Result<()> {
        serde_json::to_writer_pretty(w, contacts)?;
        Ok(())
    }
}
