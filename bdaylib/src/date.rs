//! Сравнение дат «ДД.ММ.ГГГГ» через разворот в «ГГГГ.ММ.ДД».
//!
//! Развёрнутая строка сравнивается лексикографически — для корректных дат
//! это совпадает с хронологическим порядком.

use std::cmp::Ordering;

/// Разворачивает «ДД.ММ.ГГГГ» в «ГГГГ.ММ.ДД». Без валидации: из кривой
/// строки получится кривая строка.
pub fn reverse(date: &str) -> String {
    date.rsplit('.').collect::<Vec<_>>().join(".")
}

/// Дата строго позже дня отсчёта?
pub fn is_future(date: &str, reference_today: &str) -> bool {
    reverse(reference_today) < reverse(date)
}

/// Порядок по развёрнутым строкам; для стабильной сортировки.
pub fn compare(a: &str, b: &str) -> Ordering {
    reverse(a).cmp(&reverse(b))
}

/// Структурная проверка: ровно три части через точку, длины 2, 2 и 4.
pub fn is_valid_shape(date: &str) -> bool {
    let parts: Vec<&str> = date.split('.').collect();
    parts.len() == 3 && parts[0].len() == 2 && parts[1].len() == 2 && parts[2].len() == 4
}

/// Номер месяца (средняя часть даты), если она разбирается как число.
pub fn month_number(date: &str) -> Option<u32> {
    date.split('.').nth(1)?.parse().ok()
}

/// Текущая локальная дата в формате «ДД.ММ.ГГГГ». Единственное место,
/// где библиотека читает системные часы; запросы принимают «сегодня»
/// явным параметром в вариантах `_at`.
pub fn today() -> String {
    chrono::Local::now().format("%d.%m.%Y").to_string()
}
