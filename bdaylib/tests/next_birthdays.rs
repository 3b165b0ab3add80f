use bdaylib::model::Contact;
use bdaylib::queries::next_birthdays::get_next_birthdays_at;

const TODAY: &str = "01.06.2024";

fn contact(name: &str, birthdate: &str) -> Contact {
    Contact {
        name: name.into(),
        birthdate: birthdate.into(),
        wish_list: Vec::new(),
    }
}

#[test]
fn sorts_ascending_by_reversed_birthdate() {
    let phone_list = vec![
        contact("Стас", "20.12.2025"),
        contact("Аня", "15.03.2025"),
        contact("Денис", "04.07.2024"),
    ];

    let next = get_next_birthdays_at("13.02.2024", &phone_list, TODAY);
    let names: Vec<&str> = next.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Денис", "Аня", "Стас"]);
}

#[test]
fn empty_phone_list_gives_empty_result() {
    let next = get_next_birthdays_at("13.02.2025", &[], TODAY);
    assert!(next.is_empty());
}

#[test]
fn malformed_reference_date_gives_empty_result() {
    let phone_list = vec![contact("Аня", "15.03.2025")];

    // развёрнутый порядок частей
    assert!(get_next_birthdays_at("2025.02.13", &phone_list, TODAY).is_empty());
    // однозначный день месяца без нуля
    assert!(get_next_birthdays_at("13.2.2025", &phone_list, TODAY).is_empty());
    // не три части
    assert!(get_next_birthdays_at("13.02", &phone_list, TODAY).is_empty());
}

#[test]
fn passed_birthday_is_excluded_even_with_old_reference_date() {
    // день рождения уже прошёл относительно "сегодня", дата отсчёта в прошлом
    let phone_list = vec![contact("Аня", "21.05.2024")];
    let next = get_next_birthdays_at("01.01.2024", &phone_list, TODAY);
    assert!(next.is_empty());
}

#[test]
fn birthday_before_reference_date_is_excluded() {
    // будущее относительно "сегодня", но раньше даты отсчёта
    let phone_list = vec![
        contact("Денис", "04.07.2024"),
        contact("Стас", "15.09.2024"),
    ];
    let next = get_next_birthdays_at("01.08.2024", &phone_list, TODAY);
    let names: Vec<&str> = next.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Стас"]);
}

#[test]
fn repeated_calls_do_not_disturb_input() {
    let phone_list = vec![
        contact("Стас", "20.12.2025"),
        contact("Аня", "15.03.2025"),
    ];
    let snapshot = phone_list.clone();

    let first = get_next_birthdays_at("13.02.2024", &phone_list, TODAY);
    let second = get_next_birthdays_at("13.02.2024", &phone_list, TODAY);

    assert_eq!(first, second);
    assert_eq!(phone_list, snapshot);
}

#[test]
fn equal_birthdates_keep_input_order() {
    let phone_list = vec![
        contact("Аня", "04.07.2024"),
        contact("Борис", "04.07.2024"),
    ];

    let next = get_next_birthdays_at("13.02.2024", &phone_list, TODAY);
    let names: Vec<&str> = next.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Аня", "Борис"]);
}
