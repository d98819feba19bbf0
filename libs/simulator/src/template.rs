use chrono::{DateTime, Utc};
use rand::Rng;

use status_api::{RecordError, WireStatus, format_created_at};

use crate::config::GenerationConfig;
use crate::content::random_text;

/// Верхняя граница (исключая) для сгенерированных id — диапазон
/// знакового 64-битного поля источника.
pub const ID_BOUND: u64 = i64::MAX as u64;

pub fn random_id<R: Rng>(rng: &mut R) -> u64 {
    rng.gen_range(0..ID_BOUND)
}

/// Четыре значения статуса в порядке шаблона:
/// `created_at`, `id`, `text`, `user.id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusParams {
    pub created_at: String,
    pub id: String,
    pub text: String,
    pub user_id: String,
}

impl StatusParams {
    pub fn generate<R: Rng>(
        rng: &mut R,
        config: &GenerationConfig,
        now: DateTime<Utc>,
    ) -> Self {
        // Порядок вызовов rng фиксирован: seed воспроизводит и id, и текст.
        let id = random_id(rng);
        let text = random_text(rng, config);
        let user_id = random_id(rng);
        Self {
            created_at: format_created_at(&now),
            id: id.to_string(),
            text,
            user_id: user_id.to_string(),
        }
    }

    /// Подставить значения в wire-шаблон.
    ///
    /// Каждое значение сериализуется в своё поле и экранируется,
    /// подстроки вида `{1}` внутри значений остаются как есть.
    pub fn render(&self) -> Result<String, RecordError> {
        WireStatus::new(&self.created_at, &self.id, &self.text, &self.user_id).to_json()
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::TimeZone;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use status_api::StatusRecord;

    use super::*;

    fn params(created_at: &str, id: &str, text: &str, user_id: &str) -> StatusParams {
        StatusParams {
            created_at: created_at.into(),
            id: id.into(),
            text: text.into(),
            user_id: user_id.into(),
        }
    }

    #[test]
    fn render_matches_wire_shape_exactly() {
        let json = params("Mon Oct 19 08:05:09 UTC 2026", "123", "Lorem kafka ipsum", "456")
            .render()
            .unwrap();
        assert_eq!(
            json,
            r#"{"created_at":"Mon Oct 19 08:05:09 UTC 2026","id":"123","text":"Lorem kafka ipsum","user":{"id":"456"}}"#
        );
    }

    #[test]
    fn render_then_parse_returns_the_inputs() {
        let p = params("Wed Oct 10 20:19:24 UTC 2018", "9223372036854775806", "dolor Java sit", "0");
        let record = StatusRecord::from_json(&p.render().unwrap()).unwrap();
        assert_eq!(record.created_at_text(), p.created_at);
        assert_eq!(record.id.to_string(), p.id);
        assert_eq!(record.text, p.text);
        assert_eq!(record.user_id.to_string(), p.user_id);
    }

    #[test]
    fn placeholder_shaped_values_are_left_verbatim() {
        let p = params("Mon Oct 19 08:05:09 UTC 2026", "1", "Lorem {1} ipsum {3} {0}", "2");
        let json = p.render().unwrap();
        let record = StatusRecord::from_json(&json).unwrap();
        assert_eq!(record.text, "Lorem {1} ipsum {3} {0}");
        assert_eq!(record.id, 1);
        assert_eq!(record.user_id, 2);
        // рендер детерминирован
        assert_eq!(json, p.render().unwrap());
    }

    #[test]
    fn quotes_and_backslashes_are_escaped() {
        let p = params("Mon Oct 19 08:05:09 UTC 2026", "1", r#"say "hi" \o/"#, "2");
        let record = StatusRecord::from_json(&p.render().unwrap()).unwrap();
        assert_eq!(record.text, r#"say "hi" \o/"#);
    }

    #[test]
    fn generated_params_parse_and_stay_in_id_domain() {
        let cfg = GenerationConfig::new(vec!["{1}".into(), "kafka".into()], 1, 6, Duration::ZERO)
            .unwrap();
        let now = Utc.with_ymd_and_hms(2026, 3, 5, 7, 8, 9).unwrap();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..300 {
            let p = StatusParams::generate(&mut rng, &cfg, now);
            assert_eq!(p.created_at, "Thu Mar 05 07:08:09 UTC 2026");
            let record = StatusRecord::from_json(&p.render().unwrap()).unwrap();
            assert!(record.id < ID_BOUND);
            assert!(record.user_id < ID_BOUND);
            assert_eq!(record.text, p.text);
        }
    }
}
