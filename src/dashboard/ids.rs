use crate::dashboard::catalog::WidgetType;
use chrono::{DateTime, Utc};
use rand::Rng;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

fn random_base36(len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

/// `<type>-<unix millis>-<9 random base36 chars>`.
pub fn generate_widget_id(kind: WidgetType, now: DateTime<Utc>) -> String {
    format!("{}-{}-{}", kind.as_str(), now.timestamp_millis(), random_base36(9))
}

/// Id for an entry inside a widget (todo item, note, habit, ...).
pub fn generate_item_id(now: DateTime<Utc>) -> String {
    format!("{}{}", now.timestamp_millis(), random_base36(4))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn widget_id_has_type_time_and_suffix() {
        let now = Utc::now();
        let id = generate_widget_id(WidgetType::StickyNotes, now);
        let rest = id.strip_prefix("sticky-notes-").unwrap();
        let (millis, suffix) = rest.split_once('-').unwrap();
        assert_eq!(millis, now.timestamp_millis().to_string());
        assert_eq!(suffix.len(), 9);
        assert!(suffix.bytes().all(|b| BASE36.contains(&b)));
    }

    #[test]
    fn ids_generated_in_the_same_millisecond_differ() {
        let now = Utc::now();
        let ids: HashSet<String> = (0..64)
            .map(|_| generate_widget_id(WidgetType::Todo, now))
            .collect();
        assert_eq!(ids.len(), 64);
    }
}
