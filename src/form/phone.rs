//! Маска вводу телефону: канонізація до префікса 380 і показ
//! у вигляді `+380 XX XXX XX XX` на кожне натискання клавіші.

/// Кількість символів незмінного префікса "+380" у відображенні.
const PREFIX_DISPLAY_LEN: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKey {
    Backspace,
    Delete,
    Other,
}

/// Переформатовує сире значення поля. Порожній ввід лишається порожнім,
/// інакше результат завжди починається з "+380".
pub fn format_phone(raw: &str) -> String {
    let mut digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return String::new();
    }

    if !digits.starts_with("380") {
        if digits.starts_with("80") {
            digits.insert(0, '3');
        } else if digits.starts_with('0') {
            digits.insert_str(0, "38");
        } else if !digits.starts_with('3') {
            digits.insert_str(0, "380");
        }
    }

    // Групи цифр після позицій 3, 5, 8, 10; все понад 12 цифр відкидається
    let mut formatted = String::from("+380");
    for (start, end) in [(3, 5), (5, 8), (8, 10), (10, 12)] {
        if digits.len() > start {
            formatted.push(' ');
            formatted.push_str(&digits[start..digits.len().min(end)]);
        }
    }
    formatted
}

/// Backspace/Delete гасяться, поки курсор стоїть у межах префікса "+380",
/// щоб користувач не міг його зіпсувати.
pub fn blocks_deletion(key: EditKey, cursor_position: usize) -> bool {
    matches!(key, EditKey::Backspace | EditKey::Delete) && cursor_position <= PREFIX_DISPLAY_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn national_forms_are_canonicalized() {
        assert_eq!(format_phone("0991234567"), "+380 99 123 45 67");
        assert_eq!(format_phone("80991234567"), "+380 99 123 45 67");
        assert_eq!(format_phone("380991234567"), "+380 99 123 45 67");
        assert_eq!(format_phone("991234567"), "+380 99 123 45 67");
    }

    #[test]
    fn partial_input_renders_partial_groups() {
        assert_eq!(format_phone("09"), "+380 9");
        assert_eq!(format_phone("099"), "+380 99");
        assert_eq!(format_phone("0991"), "+380 99 1");
        assert_eq!(format_phone("09912345"), "+380 99 123 45");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("+-() "), "");
    }

    #[test]
    fn excess_digits_are_truncated() {
        assert_eq!(format_phone("3809912345679999"), "+380 99 123 45 67");
    }

    #[test]
    fn formatted_value_always_matches_group_shape() {
        // +380, далі до чотирьох груп розмірами 2,3,2,2
        let group_sizes = [2usize, 3, 2, 2];
        for raw in [
            "0", "09", "099", "0991", "09912", "099123", "0991234", "09912345", "099123456",
            "0991234567", "80991234567", "380991234567", "99", "abc123",
        ] {
            let formatted = format_phone(raw);
            assert!(formatted.starts_with("+380"), "{:?} -> {:?}", raw, formatted);
            let groups: Vec<&str> = formatted[PREFIX_DISPLAY_LEN..]
                .split_whitespace()
                .collect();
            assert!(groups.len() <= 4, "{:?} -> {:?}", raw, formatted);
            for (group, max) in groups.iter().zip(group_sizes) {
                assert!(group.len() <= max, "{:?} -> {:?}", raw, formatted);
                assert!(group.chars().all(|c| c.is_ascii_digit()));
            }
        }
    }

    #[test]
    fn deletion_is_blocked_only_inside_prefix() {
        assert!(blocks_deletion(EditKey::Backspace, 0));
        assert!(blocks_deletion(EditKey::Backspace, 4));
        assert!(blocks_deletion(EditKey::Delete, 3));
        assert!(!blocks_deletion(EditKey::Backspace, 5));
        assert!(!blocks_deletion(EditKey::Other, 2));
    }
}
