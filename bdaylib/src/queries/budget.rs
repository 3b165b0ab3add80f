//! Минимальный бюджет на подарки: каждому — самое дешёвое из списка желаний.

use crate::{
    date,
    model::{BudgetResult, Contact, GiftOption, PresentPlan},
};
use rust_decimal::Decimal;

/// То же, что [`get_minimum_presents_price_at`], но «сегодня» берётся с системных часов.
pub fn get_minimum_presents_price(phone_list: &[Contact]) -> BudgetResult {
    get_minimum_presents_price_at(phone_list, &date::today())
}

/// План подарков для друзей с будущими (относительно `today`) днями
/// рождения. Друг без списка желаний остаётся в плане с `present: None`
/// и нулевым вкладом в итог.
pub fn get_minimum_presents_price_at(phone_list: &[Contact], today: &str) -> BudgetResult {
    let mut total_price = Decimal::ZERO;

    let friends_list = phone_list
        .iter()
        .filter(|person| date::is_future(&person.birthdate, today))
        .map(|person| {
            let present = cheapest_wish(&person.wish_list);
            if let Some(gift) = &present {
                total_price += gift.price;
            }
            PresentPlan {
                name: person.name.clone(),
                birthdate: person.birthdate.clone(),
                present,
            }
        })
        .collect();

    BudgetResult {
        friends_list,
        total_price,
    }
}

/// Сортируем копию списка, исходный `wish_list` не трогаем; при равных
/// ценах побеждает первое желание.
fn cheapest_wish(wish_list: &[GiftOption]) -> Option<GiftOption> {
    let mut wishes: Vec<&GiftOption> = wish_list.iter().collect();
    wishes.sort_by_key(|wish| wish.price);
    wishes.first().map(|wish| (*wish).clone())
}
