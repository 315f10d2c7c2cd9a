//! Имитация персистентности через browser local storage.
//!
//! Каждая коллекция хранится под своим ключом как JSON-массив.
//! Битый JSON или отсутствующий ключ заменяются демо-данными (seed);
//! версионирования и миграций нет, последняя запись побеждает.

use serde::de::DeserializeOwned;
use serde::Serialize;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Прочитать коллекцию. Ошибка разбора — fallback на seed с warn в консоль.
pub fn load_collection<T: DeserializeOwned + Serialize>(key: &str, seed: fn() -> Vec<T>) -> Vec<T> {
    let Some(s) = storage() else {
        return seed();
    };

    match s.get_item(key) {
        Ok(Some(json)) => match serde_json::from_str::<Vec<T>>(&json) {
            Ok(items) => items,
            Err(e) => {
                log::warn!("storage '{}': bad JSON ({}), using seed data", key, e);
                seed()
            }
        },
        _ => {
            let items = seed();
            // Первый запуск: сразу материализуем seed, чтобы правки не терялись
            let _ = save_collection(key, &items);
            items
        }
    }
}

/// Записать коллекцию целиком (last write wins)
pub fn save_collection<T: Serialize>(key: &str, items: &[T]) -> Result<(), String> {
    let s = storage().ok_or_else(|| "local storage недоступен".to_string())?;
    let json =
        serde_json::to_string(items).map_err(|e| format!("Ошибка сериализации: {}", e))?;
    s.set_item(key, &json)
        .map_err(|_| format!("Не удалось записать '{}'", key))
}
