use std::io::{self, Write};

use dictionary::{Entry, ResponseError};
use tracing::debug;

/// Writes the word, first part of speech and first definition of every entry
/// in `body`. Shape problems are reported as lines of output, only write
/// failures are errors.
pub fn print_response<W: Write>(out: &mut W, body: &[u8]) -> io::Result<()> {
    let entries = match dictionary::parse_entries(body) {
        Ok(entries) => entries,
        Err(ResponseError::Malformed(error)) => {
            debug!(%error, "response is not json");
            return writeln!(out, "Error parsing JSON");
        }
        Err(ResponseError::Empty) => {
            debug!("response body has no json value");
            return writeln!(out, "Error parsing JSON");
        }
        Err(ResponseError::NotAnArray) => {
            return writeln!(out, "Root object is not an array");
        }
    };

    writeln!(out, "Number of definitions: {}", entries.len())?;
    for entry in &entries {
        print_entry(out, entry)?;
    }
    Ok(())
}

fn print_entry<W: Write>(out: &mut W, entry: &Entry) -> io::Result<()> {
    match &entry.word {
        Some(word) => writeln!(out, "Word: {word}")?,
        None => writeln!(out, "Word field not found or invalid")?,
    }

    if entry.meanings.is_none() {
        return writeln!(out, "Meanings field not found or invalid");
    }
    // only the top meaning is shown
    let Some(meaning) = entry.first_meaning() else {
        return Ok(());
    };

    match &meaning.part_of_speech {
        Some(part_of_speech) => writeln!(out, "Part of Speech: {part_of_speech}")?,
        None => writeln!(out, "Part of speech field not found or invalid")?,
    }

    if meaning.definitions.is_none() {
        return writeln!(out, "Definitions field not found or invalid");
    }
    if let Some(definition) = meaning.first_definition() {
        match &definition.definition {
            Some(definition) => writeln!(out, "Definition: {definition}")?,
            None => writeln!(out, "Definition field not found or invalid")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn render(body: &str) -> String {
        let mut out = Vec::new();
        print_response(&mut out, body.as_bytes()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn prints_first_definition() {
        let body = r#"[{"word":"test","meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"a trial"}]}]}]"#;
        assert_eq!(
            render(body),
            "Number of definitions: 1\nWord: test\nPart of Speech: noun\nDefinition: a trial\n"
        );
    }

    #[test]
    fn reports_only_the_top_meaning_and_definition() {
        let body = r#"[{"word":"run","meanings":[
            {"partOfSpeech":"verb","definitions":[{"definition":"to move fast"},{"definition":"to operate"}]},
            {"partOfSpeech":"noun","definitions":[{"definition":"an act of running"}]}
        ]},{"word":"run","meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"a score in cricket"}]}]}]"#;
        assert_eq!(
            render(body),
            "Number of definitions: 2\n\
             Word: run\nPart of Speech: verb\nDefinition: to move fast\n\
             Word: run\nPart of Speech: noun\nDefinition: a score in cricket\n"
        );
    }

    #[test]
    fn malformed_json() {
        assert_eq!(render(r#"{"word":"#), "Error parsing JSON\n");
        assert_eq!(render(""), "Error parsing JSON\n");
        assert_eq!(render("  \r\n"), "Error parsing JSON\n");
    }

    #[test]
    fn trailing_text_after_array_is_ignored() {
        assert_eq!(
            render("[1] x"),
            "Number of definitions: 1\nWord field not found or invalid\nMeanings field not found or invalid\n"
        );
    }

    #[test]
    fn invalid_utf8_is_malformed() {
        let mut out = Vec::new();
        print_response(&mut out, b"[\"\xff\"]").unwrap();
        assert_eq!(out, b"Error parsing JSON\n");
    }

    #[test]
    fn api_error_object() {
        assert_eq!(
            render(r#"{"title":"No Definitions Found"}"#),
            "Root object is not an array\n"
        );
    }

    #[test]
    fn empty_array() {
        assert_eq!(render("[]"), "Number of definitions: 0\n");
    }

    #[test]
    fn missing_meanings() {
        assert_eq!(
            render(r#"[{"word":"test"}]"#),
            "Number of definitions: 1\nWord: test\nMeanings field not found or invalid\n"
        );
    }

    #[test]
    fn missing_word_continues_with_meanings() {
        let body = r#"[{"word":null,"meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"a trial"}]}]}]"#;
        assert_eq!(
            render(body),
            "Number of definitions: 1\nWord field not found or invalid\nPart of Speech: noun\nDefinition: a trial\n"
        );
    }

    #[test]
    fn invalid_meaning_fields() {
        let body = r#"[{"word":"a","meanings":[{"partOfSpeech":1,"definitions":{}}]},
            {"word":"b","meanings":[{"partOfSpeech":"noun","definitions":[{"text":"x"}]}]}]"#;
        assert_eq!(
            render(body),
            "Number of definitions: 2\n\
             Word: a\nPart of speech field not found or invalid\nDefinitions field not found or invalid\n\
             Word: b\nPart of Speech: noun\nDefinition field not found or invalid\n"
        );
    }

    #[test]
    fn empty_sequences_print_nothing() {
        let body = r#"[{"word":"a","meanings":[]},{"word":"b","meanings":[{"partOfSpeech":"noun","definitions":[]}]}]"#;
        assert_eq!(
            render(body),
            "Number of definitions: 2\nWord: a\nWord: b\nPart of Speech: noun\n"
        );
    }

    #[test]
    fn non_object_elements() {
        assert_eq!(
            render("[1]"),
            "Number of definitions: 1\nWord field not found or invalid\nMeanings field not found or invalid\n"
        );
    }

    proptest! {
        #[test]
        fn count_matches_array_length(words in prop::collection::vec("[a-z]{1,12}", 0..32)) {
            let body = format!(
                "[{}]",
                words
                    .iter()
                    .map(|word| format!(r#"{{"word":"{word}","meanings":[{{"partOfSpeech":"noun","definitions":[{{"definition":"d"}}]}}]}}"#))
                    .collect::<Vec<_>>()
                    .join(",")
            );
            let output = render(&body);
            let mut lines = output.lines();
            let expected_count = format!("Number of definitions: {}", words.len());
            prop_assert_eq!(lines.next(), Some(expected_count.as_str()));
            prop_assert_eq!(output.matches("Word: ").count(), words.len());
            prop_assert_eq!(output.matches("Part of Speech: ").count(), words.len());
            prop_assert_eq!(output.matches("Definition: ").count(), words.len());
        }
    }
}
