//! Plain-text rendering of booking notifications.

use chrono::{DateTime, Local};
use shared::{Booking, Email};

/// Shown in place of an empty client message.
const NO_MESSAGE: &str = "Отсутствует";

/// Build the notification for `booking`, addressed from and to `account`.
pub fn compose_email(
    booking: &Booking,
    account: &str,
    request_id: &str,
    submitted_at: DateTime<Local>,
) -> Email {
    let message = if booking.message.is_empty() {
        NO_MESSAGE
    } else {
        booking.message.as_str()
    };

    let body = format!(
        "Поступила новая заявка на консультацию!

ДЕТАЛИ ЗАПИСИ:
Услуга: {service}
Дата: {date}
Время: {time}

КОНТАКТЫ КЛИЕНТА:
Имя: {name}
Телефон: {phone}
Email: {email}

Дополнительное сообщение:
{message}

---
Дата заявки: {submitted}
ID запроса: {request_id}
",
        service = booking.service,
        date = booking.date,
        time = booking.time,
        name = booking.client_name,
        phone = booking.client_phone,
        email = booking.client_email,
        message = message,
        submitted = submitted_at.format("%d.%m.%Y %H:%M"),
        request_id = request_id,
    );

    Email {
        from: account.to_string(),
        to: account.to_string(),
        subject: format!("Новая запись на консультацию - {}", booking.service),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use shared::models::NOT_SPECIFIED;

    fn booking() -> Booking {
        Booking {
            service: "Legal".to_string(),
            date: "2024-05-01".to_string(),
            time: "10:00".to_string(),
            client_name: "A".to_string(),
            client_phone: "+1".to_string(),
            client_email: "a@x.com".to_string(),
            message: String::new(),
        }
    }

    fn submitted_at() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 4, 30, 9, 5, 0).unwrap()
    }

    #[test]
    fn test_self_addressed() {
        let email = compose_email(&booking(), "bookings@example.com", "req-1", submitted_at());
        assert_eq!(email.from, "bookings@example.com");
        assert_eq!(email.to, "bookings@example.com");
        assert_eq!(email.subject, "Новая запись на консультацию - Legal");
    }

    #[test]
    fn test_body_layout() {
        let email = compose_email(&booking(), "bookings@example.com", "req-1", submitted_at());

        assert!(email.body.starts_with("Поступила новая заявка на консультацию!\n\nДЕТАЛИ ЗАПИСИ:\n"));
        assert!(email.body.contains("Услуга: Legal\nДата: 2024-05-01\nВремя: 10:00\n"));
        assert!(email.body.contains("Имя: A\nТелефон: +1\nEmail: a@x.com\n"));
        assert!(email.body.contains("Дополнительное сообщение:\nОтсутствует\n"));
        assert!(email.body.contains("Дата заявки: 30.04.2024 09:05\n"));
        assert!(email.body.ends_with("ID запроса: req-1\n"));
    }

    #[test]
    fn test_client_message_and_placeholders() {
        let mut booking = booking();
        booking.client_phone = NOT_SPECIFIED.to_string();
        booking.message = "Перезвоните после обеда".to_string();

        let email = compose_email(&booking, "bookings@example.com", "req-1", submitted_at());

        assert!(email.body.contains("Телефон: Не указано\n"));
        assert!(email.body.contains("Дополнительное сообщение:\nПерезвоните после обеда\n"));
        assert!(!email.body.contains(NO_MESSAGE));
    }
}
