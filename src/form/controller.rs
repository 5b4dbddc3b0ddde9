//! Машина станів відправлення форми. DOM і мережа — зовнішні
//! залежності за трейтами, тому весь сценарій тестується без браузера.

use async_trait::async_trait;
use chrono::NaiveDate;
use std::time::Duration;

use crate::api::booking::structures::BookingRequest;
use crate::errors::AppError;

use super::validate::{self, DOCUMENT_ORDER, FieldId};

/// Банери успіху/помилки ховаються самі через 8 секунд.
pub const BANNER_AUTO_HIDE: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Validating,
    Submitting,
    Success,
    Error,
}

/// Поточні значення полів на момент сабміту. Порожній рядок означає
/// "поле не заповнене" для опційних полів.
#[derive(Debug, Clone, Default)]
pub struct FieldValues {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub service: String,
    pub date: String,
    pub comment: String,
    pub website: String,
}

impl FieldValues {
    fn field(&self, field: FieldId) -> &str {
        match field {
            FieldId::Name => &self.name,
            FieldId::Phone => &self.phone,
            FieldId::Email => &self.email,
            FieldId::Date => &self.date,
        }
    }

    fn to_payload(&self) -> BookingRequest {
        let optional = |value: &str| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };
        BookingRequest {
            name: self.name.clone(),
            phone: self.phone.clone(),
            email: optional(&self.email),
            service: optional(&self.service),
            date: optional(&self.date),
            comment: optional(&self.comment),
            // honeypot завжди присутній у payload, за замовчуванням порожній
            website: self.website.clone(),
        }
    }
}

/// Поверхня сторінки, якою керує контролер. Реалізації мають бути
/// ідемпотентними: show/hide можна викликати повторно.
pub trait FormUi {
    fn show_error(&mut self, field: FieldId, message: &str);
    fn hide_error(&mut self, field: FieldId);
    /// Фокус і прокрутка до першого невалідного поля
    fn focus_field(&mut self, field: FieldId);
    fn set_busy(&mut self, busy: bool);
    fn hide_banners(&mut self);
    /// Показує банер, переводить на нього фокус, планує автоприховування
    fn show_success_banner(&mut self, auto_hide: Duration);
    fn show_error_banner(&mut self, auto_hide: Duration);
    /// Очищає поля форми разом з лічильником символів коментаря
    fn reset_form(&mut self);
}

/// Транспорт до relay-ендпоінта. Рівно один POST на сабміт.
#[async_trait]
pub trait RelayTransport {
    async fn submit(&self, payload: &BookingRequest) -> Result<(), AppError>;
}

pub struct FormController<U: FormUi, T: RelayTransport> {
    ui: U,
    transport: T,
    state: FormState,
}

impl<U: FormUi, T: RelayTransport> FormController<U, T> {
    pub fn new(ui: U, transport: T) -> Self {
        Self {
            ui,
            transport,
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    /// Проганяє валідатори в порядку документа. Обов'язкові поля (ім'я,
    /// телефон) перевіряються завжди, опційні — лише коли заповнені.
    /// Повертає перше невалідне поле.
    fn validate_all(&mut self, values: &FieldValues, today: NaiveDate) -> Option<FieldId> {
        let mut first_invalid = None;
        for field in DOCUMENT_ORDER {
            let value = values.field(field);
            let optional = matches!(field, FieldId::Email | FieldId::Date);
            if optional && value.trim().is_empty() {
                self.ui.hide_error(field);
                continue;
            }
            match validate::validate(field, value, today) {
                Some(message) => {
                    self.ui.show_error(field, message);
                    first_invalid.get_or_insert(field);
                }
                None => self.ui.hide_error(field),
            }
        }
        first_invalid
    }

    /// Один цикл сабміту: Idle → Validating → (Idle | Submitting →
    /// (Success | Error)). Повертає стан, у якому машина зупинилась.
    pub async fn submit(&mut self, values: &FieldValues, today: NaiveDate) -> FormState {
        self.state = FormState::Validating;

        if let Some(first_invalid) = self.validate_all(values, today) {
            self.ui.focus_field(first_invalid);
            self.state = FormState::Idle;
            return self.state;
        }

        self.state = FormState::Submitting;
        self.ui.set_busy(true);
        self.ui.hide_banners();

        let payload = values.to_payload();
        let outcome = self.transport.submit(&payload).await;

        // Зняття busy — на кожному шляху виходу, і успішному, і ні
        self.ui.set_busy(false);

        self.state = match outcome {
            Ok(()) => {
                self.ui.reset_form();
                self.ui.show_success_banner(BANNER_AUTO_HIDE);
                FormState::Success
            }
            Err(err) => {
                log::error!("booking submission failed: {}", err);
                self.ui.show_error_banner(BANNER_AUTO_HIDE);
                FormState::Error
            }
        };
        self.state
    }
}
