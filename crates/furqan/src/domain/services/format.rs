//! Result Formatter
//!
//! Maps a search response to the reply text sent back to the chat.
//! Pure function: no side effects, identical output for identical input.

use crate::domain::entities::SearchResponse;

/// Reply when the search returned no usable `results` key.
/// The deployment serves Russian-locale queries (`lang=ru`).
pub const NOTHING_FOUND_REPLY: &str = "Ничего не найдено";

/// Reply substituted by the orchestration when the search call itself failed.
pub const SEARCH_ERROR_REPLY: &str = "Произошла ошибка при поиске";

/// Format search results as newline-joined `"{surah}.{ayah} {text}"` lines.
///
/// `None`, or a response without a `results` key, yields the fixed
/// "nothing found" reply. An empty result list yields an empty string.
pub fn format_results(response: Option<&SearchResponse>) -> String {
    let Some(hits) = response.and_then(|r| r.results.as_ref()) else {
        return NOTHING_FOUND_REPLY.to_string();
    };

    hits.iter()
        .map(|hit| hit.display_line())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::VerseHit;
    use serde_json::Value;

    #[test]
    fn test_null_response_yields_nothing_found() {
        assert_eq!(format_results(None), NOTHING_FOUND_REPLY);
    }

    #[test]
    fn test_missing_results_key_yields_nothing_found() {
        let response: SearchResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(format_results(Some(&response)), NOTHING_FOUND_REPLY);
    }

    #[test]
    fn test_null_results_key_yields_nothing_found() {
        let response: SearchResponse = serde_json::from_str(r#"{"results": null}"#).unwrap();
        assert_eq!(format_results(Some(&response)), NOTHING_FOUND_REPLY);
    }

    #[test]
    fn test_empty_results_yield_empty_string() {
        let response = SearchResponse::from_hits(vec![]);
        assert_eq!(format_results(Some(&response)), "");
    }

    #[test]
    fn test_single_hit() {
        let response: SearchResponse = serde_json::from_str(
            r#"{"results":[{"surah":1,"ayah":1,"text":"In the name of Allah"}]}"#,
        )
        .unwrap();
        assert_eq!(format_results(Some(&response)), "1.1 In the name of Allah");
    }

    #[test]
    fn test_one_line_per_hit() {
        let response = SearchResponse::from_hits(vec![
            VerseHit::new(2, 255, "Аллах - нет божества, кроме Него"),
            VerseHit::new(112, 1, "Скажи: «Он - Аллах Единый»"),
        ]);

        let formatted = format_results(Some(&response));
        let lines: Vec<&str> = formatted.split('\n').collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "2.255 Аллах - нет божества, кроме Него");
        assert_eq!(lines[1], "112.1 Скажи: «Он - Аллах Единый»");
    }

    #[test]
    fn test_absent_fields_default_to_empty() {
        let response: SearchResponse =
            serde_json::from_str(r#"{"results":[{"text":"only text"},{"surah":3}]}"#).unwrap();

        let formatted = format_results(Some(&response));
        assert_eq!(formatted, ". only text\n3. ");
    }

    #[test]
    fn test_string_locators_render_unquoted() {
        let response = SearchResponse::from_hits(vec![VerseHit::new("2", "255", "text")]);
        assert_eq!(format_results(Some(&response)), "2.255 text");
    }

    #[test]
    fn test_format_is_idempotent() {
        let response = SearchResponse::from_hits(vec![
            VerseHit::new(1, 1, "a"),
            VerseHit::new(1, 2, Value::Null),
        ]);

        let first = format_results(Some(&response));
        let second = format_results(Some(&response));
        assert_eq!(first, second);
    }
}
