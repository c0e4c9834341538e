use super::{EventSink, MemorySink};

#[test]
fn memory_sink_records_lines_in_order() {
    let sink = MemorySink::new();
    sink.info("first");
    sink.error("second");
    sink.info("third");

    assert_eq!(sink.lines(), vec!["INFO first", "ERROR second", "INFO third"]);
}

#[test]
fn memory_sink_contains_matches_substrings() {
    let sink = MemorySink::new();
    sink.info("published message abc-123 to the topic");

    assert!(sink.contains("abc-123"));
    assert!(!sink.contains("def-456"));
}
