//! Группировка друзей с будущими днями рождения по месяцам.

use crate::{
    date,
    model::{Contact, MonthGroup},
};

const MONTH_NAMES: [&str; 12] = [
    "январь",
    "февраль",
    "март",
    "апрель",
    "май",
    "июнь",
    "июль",
    "август",
    "сентябрь",
    "октябрь",
    "ноябрь",
    "декабрь",
];

/// Название месяца по номеру 1–12.
pub fn month_name(number: u32) -> Option<&'static str> {
    MONTH_NAMES.get(number.checked_sub(1)? as usize).copied()
}

/// То же, что [`get_months_list_at`], но «сегодня» берётся с системных часов.
pub fn get_months_list(phone_list: &[Contact]) -> Vec<MonthGroup> {
    get_months_list_at(phone_list, &date::today())
}

/// Друзья с будущими (относительно `today`) днями рождения, сгруппированные
/// по месяцам. Группы идут по номеру месяца, внутри группы — по дате.
/// Друг с датой, у которой месяц не разбирается или выходит за 1–12,
/// просто не попадает ни в одну группу.
pub fn get_months_list_at(phone_list: &[Contact], today: &str) -> Vec<MonthGroup> {
    let mut buckets: Vec<(u32, MonthGroup)> = Vec::new();

    for person in phone_list
        .iter()
        .filter(|person| date::is_future(&person.birthdate, today))
    {
        let Some(number) = date::month_number(&person.birthdate) else {
            continue;
        };
        let Some(name) = month_name(number) else {
            continue;
        };

        match buckets.iter().position(|(n, _)| *n == number) {
            Some(i) => buckets[i].1.friends.push(person.clone()),
            None => buckets.push((
                number,
                MonthGroup {
                    month: name.to_string(),
                    friends: vec![person.clone()],
                },
            )),
        }
    }

    // номер месяца сравниваем как число, не как строку
    buckets.sort_by_key(|(number, _)| *number);

    let mut groups: Vec<MonthGroup> = buckets.into_iter().map(|(_, group)| group).collect();
    for group in &mut groups {
        group.friends.sort_by(|a, b| date::compare(&a.birthdate, &b.birthdate));
    }
    groups
}
