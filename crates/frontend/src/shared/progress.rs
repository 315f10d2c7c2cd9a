//! Симуляция генерации отчёта.
//!
//! Реальной генерации нет: таймер наращивает прогресс, при 100 статус
//! переключается на Completed. Шаг вынесен в чистую функцию.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;

/// Интервал между шагами симуляции, мс
pub const TICK_MS: u32 = 400;

/// Следующее значение прогресса: монотонно, с клампом на 100
pub fn advance_progress(current: u8, step: u8) -> u8 {
    current.saturating_add(step).min(100)
}

/// Запустить симуляцию генерации.
///
/// `on_tick` вызывается с каждым новым значением прогресса (включая 100),
/// `cancelled` — флаг останова (выставляется в on_cleanup страницы, это
/// аналог clearInterval при размонтировании). Возвращает true, если
/// генерация дошла до конца.
pub async fn run_generation(
    cancelled: StoredValue<bool>,
    step: u8,
    on_tick: impl Fn(u8),
) -> bool {
    let mut progress: u8 = 0;
    loop {
        if cancelled.get_value() {
            return false;
        }
        progress = advance_progress(progress, step);
        on_tick(progress);
        if progress >= 100 {
            return true;
        }
        TimeoutFuture::new(TICK_MS).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_is_monotone_and_clamped() {
        let mut p = 0u8;
        let mut prev = 0u8;
        for _ in 0..50 {
            p = advance_progress(p, 7);
            assert!(p >= prev);
            assert!(p <= 100);
            prev = p;
        }
        assert_eq!(p, 100);
    }

    #[test]
    fn test_clamp_exactly_at_100() {
        assert_eq!(advance_progress(98, 7), 100);
        assert_eq!(advance_progress(100, 7), 100);
    }

    #[test]
    fn test_zero_step_stalls_without_overflow() {
        assert_eq!(advance_progress(42, 0), 42);
    }
}
