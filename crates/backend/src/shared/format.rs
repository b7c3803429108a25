/// Размер ответа для журнала запросов: байты с разделителем тысяч,
/// от 10 KB — в килобайтах.
///
/// # Примеры
/// ```
/// use backend::shared::format::format_size;
/// assert_eq!(format_size(512), "512 B");
/// assert_eq!(format_size(20_480), "20 KB");
/// ```
pub fn format_size(bytes: usize) -> String {
    if bytes < 10 * 1024 {
        format!("{} B", format_number(bytes))
    } else {
        format!("{} KB", format_number(bytes / 1024))
    }
}

/// Число с запятой между триадами (1,234,567)
pub fn format_number(n: usize) -> String {
    let digits = n.to_string();
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    result
}
