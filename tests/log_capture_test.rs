//! Tests for the log capture infrastructure against real crate events.

use walletbook::storage::AddressBook;
use walletbook::test_utils::TestDir;

mod common;
use common::log_capture::TestLogCapture;

#[test]
fn captures_store_events_with_fields() {
    let capture = TestLogCapture::start();
    let dir = TestDir::new();
    let book = AddressBook::open(dir.file_path("book.json")).unwrap();

    book.put_pair("alice", "0a").unwrap();
    book.remove("ghost").unwrap();

    capture.assert_logged_at_level(tracing::Level::DEBUG, "Adding address book entry");
    capture.assert_logged("Remove of unknown name");
    let event = capture.find("Adding address book entry").unwrap();
    assert_eq!(event.field("name"), Some("alice"));
    capture.assert_no_warnings();
}

#[test]
#[should_panic(expected = "Unexpected warnings")]
fn assert_no_warnings_detects_warnings() {
    let capture = TestLogCapture::start();
    tracing::warn!("Something went wrong");
    capture.assert_no_warnings();
}
