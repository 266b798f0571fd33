use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Serializer;

const INDENT: &[u8] = b"    ";

/// Pretty prints `value` with 4-space indentation. Non-ascii text is kept
/// verbatim and no trailing newline is written.
pub fn to_pretty_json<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    value.serialize(&mut ser)?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use crate::utils::json::to_pretty_json;

    #[tokio::test]
    async fn test_should_indent_four_spaces() {
        let value = BTreeMap::from([("name", vec![1, 2])]);
        let json = String::from_utf8(to_pretty_json(&value).expect("should serialize")).expect("utf8");
        assert_eq!("{\n    \"name\": [\n        1,\n        2\n    ]\n}", json);
    }

    #[tokio::test]
    async fn test_should_keep_non_ascii() {
        let json = String::from_utf8(to_pretty_json("Толстой").expect("should serialize")).expect("utf8");
        assert_eq!("\"Толстой\"", json);
    }

    #[tokio::test]
    async fn test_should_write_empty_array() {
        let empty: Vec<u32> = vec![];
        assert_eq!(b"[]".to_vec(), to_pretty_json(&empty).expect("should serialize"));
    }
}
