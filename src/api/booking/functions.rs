use chrono::{Datelike, NaiveDate};

use super::structures::BookingRequest;

pub const NOT_SPECIFIED: &str = "Не вказано";

/// Закритий перелік кодів послуг з прайсу. Невідомий код не є помилкою:
/// він іде в повідомлення як є (select на сторінці може поповнюватись).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCode {
    Consultation,
    Hygiene,
    Treatment,
    Whitening,
    Prosthetics,
    Implantation,
    Orthodontics,
    Surgery,
}

impl ServiceCode {
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "consultation" => Some(Self::Consultation),
            "hygiene" => Some(Self::Hygiene),
            "treatment" => Some(Self::Treatment),
            "whitening" => Some(Self::Whitening),
            "prosthetics" => Some(Self::Prosthetics),
            "implantation" => Some(Self::Implantation),
            "orthodontics" => Some(Self::Orthodontics),
            "surgery" => Some(Self::Surgery),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Consultation => "Консультація стоматолога",
            Self::Hygiene => "Професійна гігієна",
            Self::Treatment => "Лікування карієсу",
            Self::Whitening => "Відбілювання зубів",
            Self::Prosthetics => "Протезування",
            Self::Implantation => "Імплантація",
            Self::Orthodontics => "Ортодонтія",
            Self::Surgery => "Хірургічна стоматологія",
        }
    }
}

/// Людська назва послуги: відомий код → назва з таблиці,
/// невідомий → як є, відсутній/порожній → "Не вказано".
pub fn service_label(service: Option<&str>) -> String {
    match service.map(str::trim).filter(|s| !s.is_empty()) {
        Some(code) => match ServiceCode::from_code(code) {
            Some(known) => known.label().to_string(),
            None => code.to_string(),
        },
        None => NOT_SPECIFIED.to_string(),
    }
}

const MONTHS_GENITIVE: [&str; 12] = [
    "січня",
    "лютого",
    "березня",
    "квітня",
    "травня",
    "червня",
    "липня",
    "серпня",
    "вересня",
    "жовтня",
    "листопада",
    "грудня",
];

const WEEKDAYS: [&str; 7] = [
    "понеділок",
    "вівторок",
    "середа",
    "четвер",
    "п'ятниця",
    "субота",
    "неділя",
];

/// Довгий український формат дати: "понеділок, 8 вересня 2025 р."
pub fn format_booking_date(date: NaiveDate) -> String {
    let weekday = WEEKDAYS[date.weekday().num_days_from_monday() as usize];
    let month = MONTHS_GENITIVE[date.month0() as usize];
    format!("{}, {} {} {} р.", weekday, date.day(), month, date.year())
}

/// Рядок дати для повідомлення. Нерозпізнане значення проходить як є —
/// так само, як невідомий код послуги.
pub fn date_label(date: Option<&str>) -> String {
    match date.map(str::trim).filter(|s| !s.is_empty()) {
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(parsed) => format_booking_date(parsed),
            Err(_) => raw.to_string(),
        },
        None => NOT_SPECIFIED.to_string(),
    }
}

/// Мінімальне екранування для parse_mode=HTML, щоб кутові дужки
/// в імені чи коментарі не ламали доставку.
fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Збирає текст повідомлення для Telegram з полів заявки.
pub fn compose_message(request: &BookingRequest) -> String {
    let mut lines = vec![
        "🦷 <b>Нова заявка з сайту Dental Lab</b>".to_string(),
        String::new(),
        format!("👤 <b>Ім'я:</b> {}", escape_html(request.name.trim())),
        format!("📞 <b>Телефон:</b> {}", escape_html(request.phone.trim())),
    ];

    if let Some(email) = request.email.as_deref().map(str::trim).filter(|e| !e.is_empty()) {
        lines.push(format!("📧 <b>Email:</b> {}", escape_html(email)));
    }

    lines.push(format!(
        "🏥 <b>Послуга:</b> {}",
        escape_html(&service_label(request.service.as_deref()))
    ));
    lines.push(format!(
        "📅 <b>Бажана дата:</b> {}",
        escape_html(&date_label(request.date.as_deref()))
    ));

    if let Some(comment) = request
        .comment
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
    {
        lines.push(format!("💬 <b>Коментар:</b> {}", escape_html(comment)));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(service: Option<&str>, date: Option<&str>) -> BookingRequest {
        BookingRequest {
            name: "Іван".to_string(),
            phone: "+380 99 123 45 67".to_string(),
            email: None,
            service: service.map(String::from),
            date: date.map(String::from),
            comment: None,
            website: String::new(),
        }
    }

    #[test]
    fn known_service_codes_map_to_labels() {
        assert_eq!(service_label(Some("hygiene")), "Професійна гігієна");
        assert_eq!(service_label(Some("surgery")), "Хірургічна стоматологія");
    }

    #[test]
    fn unknown_service_code_passes_through() {
        assert_eq!(service_label(Some("veneers")), "veneers");
    }

    #[test]
    fn absent_service_renders_not_specified() {
        assert_eq!(service_label(None), NOT_SPECIFIED);
        assert_eq!(service_label(Some("  ")), NOT_SPECIFIED);
    }

    #[test]
    fn date_renders_ukrainian_long_form() {
        // 2025-09-08 — понеділок
        let date = NaiveDate::from_ymd_opt(2025, 9, 8).unwrap();
        assert_eq!(format_booking_date(date), "понеділок, 8 вересня 2025 р.");
    }

    #[test]
    fn date_label_fallbacks() {
        assert_eq!(date_label(None), NOT_SPECIFIED);
        assert_eq!(date_label(Some("next week")), "next week");
    }

    #[test]
    fn message_contains_mapped_label_and_weekday() {
        let message = compose_message(&request(Some("hygiene"), Some("2025-09-08")));
        assert!(message.contains("Нова заявка з сайту Dental Lab"));
        assert!(message.contains("Професійна гігієна"));
        assert!(message.contains("понеділок"));
        assert!(!message.contains("Email:"));
        assert!(!message.contains("Коментар:"));
    }

    #[test]
    fn message_escapes_html_in_user_fields() {
        let mut req = request(None, None);
        req.name = "<script>Іван</script>".to_string();
        let message = compose_message(&req);
        assert!(message.contains("&lt;script&gt;"));
        assert!(!message.contains("<script>"));
    }
}
