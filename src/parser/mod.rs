//! CSV reading collaborator with encoding and delimiter auto-detection.
//!
//! Turns CSV bytes into header-keyed [`Record`]s. Values are handed to
//! the pipeline exactly as they appear in the file; whitespace trimming
//! is the pipeline's first stage, not the reader's job.

use std::path::Path;

use csv::ReaderBuilder;

use crate::error::CsvError;
use crate::record::Record;

/// Result of parsing with metadata.
#[derive(Debug, Clone)]
pub struct ParseResult {
    /// Parsed rows.
    pub records: Vec<Record>,
    /// Detected or used encoding.
    pub encoding: String,
    /// Detected or used delimiter.
    pub delimiter: char,
    /// Column headers.
    pub headers: Vec<String>,
}

/// Detect the encoding of raw bytes using chardet.
pub fn detect_encoding(bytes: &[u8]) -> String {
    let (charset, _, _) = chardet::detect(bytes);

    // Normalize charset names
    match charset.to_lowercase().as_str() {
        "ascii" | "utf-8" | "utf8" => "utf-8".to_string(),
        "iso-8859-1" | "iso-8859-15" | "latin-1" | "latin1" => "iso-8859-1".to_string(),
        "windows-1252" | "cp1252" => "windows-1252".to_string(),
        _ => charset,
    }
}

/// Decode bytes to a string using the specified encoding.
pub fn decode_content(bytes: &[u8], encoding: &str) -> Result<String, CsvError> {
    match encoding.to_lowercase().as_str() {
        "utf-8" | "utf8" | "ascii" => Ok(String::from_utf8_lossy(bytes).to_string()),
        "iso-8859-1" | "latin-1" | "latin1" => {
            Ok(encoding_rs::ISO_8859_15.decode(bytes).0.to_string())
        }
        "windows-1252" | "cp1252" => Ok(encoding_rs::WINDOWS_1252.decode(bytes).0.to_string()),
        // Fallback: lossy UTF-8
        _ => Ok(String::from_utf8_lossy(bytes).to_string()),
    }
}

/// Detect the delimiter by counting occurrences in the first line.
pub fn detect_delimiter(content: &str) -> char {
    let first_line = content.lines().next().unwrap_or("");

    let separators = [',', ';', '\t', '|'];
    let mut best_sep = ',';
    let mut best_count = 0;

    for &sep in &separators {
        let count = first_line.matches(sep).count();
        if count > best_count {
            best_count = count;
            best_sep = sep;
        }
    }

    best_sep
}

/// Parse CSV text with an explicit delimiter.
///
/// The first row supplies column names; each data row becomes a
/// [`Record`] in header order. Short rows leave trailing columns empty.
pub fn parse_csv(content: &str, delimiter: char) -> Result<Vec<Record>, CsvError> {
    Ok(parse_with_metadata(content, delimiter, "utf-8".to_string())?.records)
}

/// Parse a CSV file with auto-detection of encoding and delimiter.
pub fn parse_file_auto<P: AsRef<Path>>(path: P) -> Result<ParseResult, CsvError> {
    let bytes = std::fs::read(path.as_ref())?;
    parse_bytes_auto(&bytes)
}

/// Parse CSV bytes with auto-detection of encoding and delimiter.
pub fn parse_bytes_auto(bytes: &[u8]) -> Result<ParseResult, CsvError> {
    if bytes.is_empty() {
        return Err(CsvError::EmptyInput);
    }

    let encoding = detect_encoding(bytes);
    let content = decode_content(bytes, &encoding)?;
    let delimiter = detect_delimiter(&content);

    parse_with_metadata(&content, delimiter, encoding)
}

/// Parse CSV text with an explicit delimiter and return metadata.
pub fn parse_with_metadata(
    content: &str,
    delimiter: char,
    encoding: String,
) -> Result<ParseResult, CsvError> {
    if content.trim().is_empty() {
        return Err(CsvError::EmptyInput);
    }

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_matches('\u{feff}').trim().to_string())
        .collect();

    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(CsvError::NoHeaders);
    }

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let record = headers
            .iter()
            .enumerate()
            .map(|(i, header)| (header.clone(), row.get(i).unwrap_or("").to_string()))
            .collect();
        records.push(record);
    }

    Ok(ParseResult {
        records,
        encoding,
        delimiter,
        headers,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_csv() {
        let csv = "ID,ITEM1\n1,A1\n2,B3";
        let records = parse_csv(csv, ',').unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].get("ID"), Some("1"));
        assert_eq!(records[0].get("ITEM1"), Some("A1"));
        assert_eq!(records[1].get("ITEM1"), Some("B3"));
    }

    #[test]
    fn test_values_are_not_trimmed() {
        let csv = "ID,ITEM1\n1, A4";
        let records = parse_csv(csv, ',').unwrap();
        assert_eq!(records[0].get("ITEM1"), Some(" A4"));
    }

    #[test]
    fn test_quoted_values() {
        let csv = "name,value\n\"Alice\",\"Hello, World\"";
        let records = parse_csv(csv, ',').unwrap();
        assert_eq!(records[0].get("value"), Some("Hello, World"));
    }

    #[test]
    fn test_short_rows_leave_columns_empty() {
        let csv = "a,b,c\n1,2";
        let records = parse_csv(csv, ',').unwrap();
        assert_eq!(records[0].get("c"), Some(""));
    }

    #[test]
    fn test_header_order_preserved() {
        let csv = "ID,ITEM1,ITEM2\n1,A1,v";
        let records = parse_csv(csv, ',').unwrap();
        let names: Vec<&str> = records[0].column_names().collect();
        assert_eq!(names, vec!["ID", "ITEM1", "ITEM2"]);
    }

    #[test]
    fn test_empty_input_error() {
        assert!(matches!(parse_bytes_auto(b""), Err(CsvError::EmptyInput)));
        assert!(matches!(parse_csv("", ','), Err(CsvError::EmptyInput)));
    }

    #[test]
    fn test_detect_delimiter_comma() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3"), ',');
    }

    #[test]
    fn test_detect_delimiter_semicolon() {
        assert_eq!(detect_delimiter("a;b;c\n1;2;3"), ';');
    }

    #[test]
    fn test_detect_delimiter_tab() {
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3"), '\t');
    }

    #[test]
    fn test_auto_parse() {
        let csv = "ID;ITEM1\n1;A1\n2;B3";
        let result = parse_bytes_auto(csv.as_bytes()).unwrap();

        assert_eq!(result.delimiter, ';');
        assert_eq!(result.encoding, "utf-8");
        assert_eq!(result.headers, vec!["ID", "ITEM1"]);
        assert_eq!(result.records.len(), 2);
    }

    #[test]
    fn test_bom_stripped_from_first_header() {
        let csv = "\u{feff}ID,ITEM1\n1,A1";
        let result = parse_with_metadata(csv, ',', "utf-8".to_string()).unwrap();
        assert_eq!(result.headers[0], "ID");
    }

    #[test]
    fn test_latin1_decoding() {
        // "Société" in ISO-8859-1
        let bytes: &[u8] = &[0x53, 0x6F, 0x63, 0x69, 0xE9, 0x74, 0xE9];
        let decoded = decode_content(bytes, "iso-8859-1").unwrap();
        assert!(decoded.starts_with("Soci"));
    }

    #[test]
    fn test_parse_file_auto() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.csv");
        std::fs::write(&path, "ID,ITEM1\n1,A1\n").unwrap();

        let result = parse_file_auto(&path).unwrap();
        assert_eq!(result.records.len(), 1);
        assert_eq!(result.records[0].get("ITEM1"), Some("A1"));
    }
}
