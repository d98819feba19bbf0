use rand::Rng;

use crate::config::GenerationConfig;

/// Словарь, из которого набирается текст статуса.
pub const VOCABULARY: [&str; 13] = [
    "Lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "nostrud",
    "dolore",
    "magna",
    "massa",
    "voluptate",
];

/// Длина текста в словах, равномерно в `[min_words, max_words]` включительно.
pub fn word_count<R: Rng>(rng: &mut R, config: &GenerationConfig) -> usize {
    rng.gen_range(config.min_words()..=config.max_words())
}

/// Собрать текст из `word_count` слов.
///
/// Слово с индексом `word_count / 2` — случайное ключевое слово из конфига,
/// остальные — случайные слова из [`VOCABULARY`]. Слова разделены одним
/// пробелом.
pub fn compose_text<R: Rng>(
    rng: &mut R,
    config: &GenerationConfig,
    word_count: usize,
) -> String {
    let keywords = config.keywords();
    let keyword_at = word_count / 2;

    let mut words: Vec<&str> = Vec::with_capacity(word_count);
    for i in 0..word_count {
        let word = if i == keyword_at {
            keywords[rng.gen_range(0..keywords.len())].as_str()
        } else {
            VOCABULARY[rng.gen_range(0..VOCABULARY.len())]
        };
        words.push(word);
    }
    words.join(" ")
}

pub fn random_text<R: Rng>(rng: &mut R, config: &GenerationConfig) -> String {
    let n = word_count(rng, config);
    compose_text(rng, config, n)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn config(keywords: &[&str], min: usize, max: usize) -> GenerationConfig {
        GenerationConfig::new(
            keywords.iter().map(|w| w.to_string()).collect(),
            min,
            max,
            Duration::ZERO,
        )
        .unwrap()
    }

    #[test]
    fn word_count_stays_inside_inclusive_bounds() {
        let cfg = config(&["kafka"], 2, 5);
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 6];
        for _ in 0..2_000 {
            let n = word_count(&mut rng, &cfg);
            assert!((2..=5).contains(&n), "{n} out of bounds");
            seen[n] = true;
        }
        // обе границы достижимы
        assert!(seen[2] && seen[5]);
    }

    /// Разобрать текст на слова, считая ключевое слово (даже из нескольких
    /// токенов) одним словом. Возвращает число слов и позиции ключевых слов.
    fn split_words(text: &str, keywords: &[String]) -> (usize, Vec<usize>) {
        let tokens: Vec<&str> = text.split(' ').collect();
        let (mut i, mut count, mut found) = (0, 0, Vec::new());
        while i < tokens.len() {
            let keyword = keywords.iter().find(|k| {
                let parts: Vec<&str> = k.split(' ').collect();
                tokens[i..].starts_with(&parts)
            });
            match keyword {
                Some(k) => {
                    found.push(count);
                    i += k.split(' ').count();
                }
                None => {
                    assert!(VOCABULARY.contains(&tokens[i]), "unexpected token {:?} in {text}", tokens[i]);
                    i += 1;
                }
            }
            count += 1;
        }
        (count, found)
    }

    #[test]
    fn every_text_carries_a_keyword_and_respects_bounds() {
        let cfg = config(&["Spring Boot", "Kafka", "Apache Kafka Streams"], 1, 12);
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let text = random_text(&mut rng, &cfg);
            let (count, found) = split_words(&text, cfg.keywords());
            assert!((1..=12).contains(&count), "bad length {count}: {text}");
            assert_eq!(found, vec![count / 2], "keyword misplaced: {text}");
            assert_eq!(text, text.trim());
        }
    }

    #[test]
    fn multi_word_keyword_counts_as_one_word() {
        let cfg = config(&["Spring Boot"], 3, 3);
        let mut rng = StdRng::seed_from_u64(21);
        for _ in 0..100 {
            let text = random_text(&mut rng, &cfg);
            let tokens: Vec<&str> = text.split(' ').collect();
            assert_eq!(tokens.len(), 4, "{text}");
            assert_eq!(&tokens[1..3], &["Spring", "Boot"]);
            assert_eq!(split_words(&text, cfg.keywords()), (3, vec![1]));
        }
    }

    #[test]
    fn three_words_put_keyword_in_the_middle() {
        let cfg = config(&["kafka"], 3, 3);
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let text = random_text(&mut rng, &cfg);
            let words: Vec<&str> = text.split(' ').collect();
            assert_eq!(words.len(), 3, "{text}");
            assert_eq!(words[1], "kafka");
            assert!(VOCABULARY.contains(&words[0]));
            assert!(VOCABULARY.contains(&words[2]));
        }
    }

    #[test]
    fn single_word_text_is_always_the_keyword() {
        let cfg = config(&["kafka", "spring"], 1, 1);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let text = random_text(&mut rng, &cfg);
            assert!(text == "kafka" || text == "spring", "{text}");
        }
    }

    #[test]
    fn even_length_keyword_lands_just_after_midpoint() {
        let cfg = config(&["kafka"], 4, 4);
        let mut rng = StdRng::seed_from_u64(5);
        let text = compose_text(&mut rng, &cfg, 4);
        let words: Vec<&str> = text.split(' ').collect();
        assert_eq!(words[2], "kafka");
        assert_eq!(words.iter().filter(|w| **w == "kafka").count(), 1);
    }
}
