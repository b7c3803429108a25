use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::middleware::Next;
use axum::response::Response;
use chrono::{FixedOffset, Utc};

use contracts::shared::dates::LOCAL_UTC_OFFSET_SECS;

use crate::shared::format::format_size;

/// Middleware для журнала HTTP запросов
///
/// Одна строка на запрос: местное время школы, длительность, размер ответа,
/// статус, метод и путь
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Тело читается целиком, чтобы узнать реальный размер
    let (size, body) = match to_bytes(body, usize::MAX).await {
        Ok(bytes) => (format_size(bytes.len()), Body::from(bytes)),
        Err(e) => {
            tracing::error!("Cannot read response body for {} {}: {}", method, path, e);
            ("error".to_string(), Body::default())
        }
    };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>10} | {} {:>6} {}",
        status_color(parts.status),
        local_time(),
        start.elapsed().as_millis(),
        size,
        parts.status.as_u16(),
        method,
        path
    );

    Response::from_parts(parts, body)
}

/// Голубой для 2xx, жёлтый для 4xx, красный для 5xx
fn status_color(status: StatusCode) -> &'static str {
    if status.is_server_error() {
        "31"
    } else if status.is_client_error() {
        "33"
    } else {
        "36"
    }
}

fn local_time() -> String {
    let now = Utc::now();
    match FixedOffset::east_opt(LOCAL_UTC_OFFSET_SECS) {
        Some(offset) => now.with_timezone(&offset).format("%H:%M:%S").to_string(),
        None => now.format("%H:%M:%S").to_string(),
    }
}
