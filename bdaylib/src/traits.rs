//! Унифицированные трэйты чтения/записи телефонной книги на основе std::io::{BufRead, Write}.

use crate::{error::Result, model::Contact};
use std::io::{BufRead, Write};

pub trait ReadPhonebook {
    fn read<R: BufRead>(r: R) -> Result<Vec<Contact>>;
}

pub trait WritePhonebook {
    fn write<W: Write>(w: W, contacts: &[Contact]) -> Result<()>;
}

pub trait PhonebookFormat: ReadPhonebook + WritePhonebook {}
impl<T: ReadPhonebook + WritePhonebook> PhonebookFormat for T {}
