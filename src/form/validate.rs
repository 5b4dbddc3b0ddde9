//! Чисті валідатори полів форми запису.
//! Повідомлення — користувацькі рядки продукту, віддаються як є.

use chrono::{Datelike, NaiveDate, Weekday};
use regex::Regex;

lazy_static::lazy_static! {
    static ref NAME_RE: Regex = Regex::new(r"^[А-ЯІЇЄҐа-яіїєґA-Za-z\s'-]+$").unwrap();
    static ref EMAIL_RE: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();
}

/// Поля форми в порядку документа. Порядок значущий:
/// фокус після невдалої валідації отримує перше невалідне поле.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    Name,
    Phone,
    Email,
    Date,
}

pub const DOCUMENT_ORDER: [FieldId; 4] = [FieldId::Name, FieldId::Phone, FieldId::Email, FieldId::Date];

/// `None` — поле валідне. `today` передається ззовні, щоб правило дати
/// було чистою функцією.
pub fn validate(field: FieldId, value: &str, today: NaiveDate) -> Option<&'static str> {
    match field {
        FieldId::Name => validate_name(value),
        FieldId::Phone => validate_phone(value),
        FieldId::Email => validate_email(value),
        FieldId::Date => validate_date(value, today),
    }
}

fn validate_name(value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    if trimmed.chars().count() < 2 {
        return Some("Будь ласка, введіть ваше ім'я (мінімум 2 символи)");
    }
    if !NAME_RE.is_match(value) {
        return Some("Ім'я може містити тільки літери, пробіли, апостроф та дефіс");
    }
    if trimmed.chars().count() > 50 {
        return Some("Ім'я занадто довге (максимум 50 символів)");
    }
    None
}

fn validate_phone(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return Some("Будь ласка, введіть номер телефону");
    }
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != 12 || !digits.starts_with("380") {
        return Some("Введіть коректний номер телефону (+380XXXXXXXXX)");
    }
    None
}

fn validate_email(value: &str) -> Option<&'static str> {
    if value.trim().is_empty() {
        return None;
    }
    if !EMAIL_RE.is_match(value) {
        return Some("Введіть коректну email адресу");
    }
    None
}

fn validate_date(value: &str, today: NaiveDate) -> Option<&'static str> {
    if value.is_empty() {
        return None;
    }
    // input type=date завжди віддає ISO-рядок; усе інше пропускаємо,
    // relay переправить значення дослівно
    let Ok(selected) = NaiveDate::parse_from_str(value, "%Y-%m-%d") else {
        return None;
    };
    if selected < today {
        return Some("Дата не може бути в минулому");
    }
    if matches!(selected.weekday(), Weekday::Sat | Weekday::Sun) {
        return Some("Будь ласка, оберіть робочий день (понеділок-п'ятниця)");
    }
    None
}
