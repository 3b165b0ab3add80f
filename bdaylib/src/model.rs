//! Доменные модели — телефонная книга и результаты запросов.
//!
//! Даты хранятся строками «ДД.ММ.ГГГГ» — так их отдаёт телефонная книга,
//! сравнение описано в [`crate::date`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GiftOption {
    pub title: String,
    pub price: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub name: String,
    pub birthdate: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub wish_list: Vec<GiftOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MonthGroup {
    pub month: String,
    pub friends: Vec<Contact>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PresentPlan {
    pub name: String,
    pub birthdate: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub present: Option<GiftOption>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BudgetResult {
    pub friends_list: Vec<PresentPlan>,
    pub total_price: Decimal,
}
