//! bdaylib — библиотека для расчёта ближайших дней рождения и бюджета на подарки.

pub mod error;
pub mod model;
pub mod date;
pub mod traits;

pub mod queries {
    pub mod next_birthdays;
    pub mod months;
    pub mod budget;
}

pub mod formats {
    pub mod csv;
    pub mod json;
    pub mod xml;
}
