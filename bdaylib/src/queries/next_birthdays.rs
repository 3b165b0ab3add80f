//! Ближайшие дни рождения после даты отсчёта.

use crate::{date, model::Contact};

/// То же, что [`get_next_birthdays_at`], но «сегодня» берётся с системных часов.
pub fn get_next_birthdays(reference_date: &str, phone_list: &[Contact]) -> Vec<Contact> {
    get_next_birthdays_at(reference_date, phone_list, &date::today())
}

/// Друзья, чей день рождения ещё впереди относительно `today` и при этом
/// позже даты отсчёта `reference_date`, по возрастанию даты.
///
/// Кривая дата отсчёта — это не ошибка вызова: пишем предупреждение в лог
/// и возвращаем пустой список. Пустой результат, соответственно, не
/// отличим от «никто не подошёл».
pub fn get_next_birthdays_at(reference_date: &str, phone_list: &[Contact], today: &str) -> Vec<Contact> {
    if !date::is_valid_shape(reference_date) {
        tracing::warn!("некорректная дата отсчёта: {:?}", reference_date);
        return Vec::new();
    }

    let reversed_reference = date::reverse(reference_date);

    let mut next: Vec<Contact> = phone_list
        .iter()
        .filter(|person| date::is_future(&person.birthdate, today))
        .filter(|person| reversed_reference < date::reverse(&person.birthdate))
        .cloned()
        .collect();

    // стабильная сортировка: одинаковые даты сохраняют исходный порядок
    next.sort_by(|a, b| date::compare(&a.birthdate, &b.birthdate));
    next
}
