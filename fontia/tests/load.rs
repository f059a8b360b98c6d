//! Loading fonts from disk.

use std::io::Write;

use fontia::{
    raw::{tables, ReadError},
    Font, FontError, NameId, OutlineFormat,
};
use fontia_test_data as test_data;
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn write_temp_font(bytes: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".ttf")
        .tempfile()
        .unwrap();
    file.write_all(bytes).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn load_family_name() {
    init_logging();
    let file = write_temp_font(test_data::ALEGREYA_NAMES);
    let font = pollster::block_on(Font::load(file.path())).unwrap();
    assert_eq!(font.family_name(), "Alegreya");
    assert_eq!(font.outline_format(), OutlineFormat::TrueType);
}

#[test]
fn load_matches_from_bytes() {
    init_logging();
    let file = write_temp_font(test_data::ALEGREYA_NAMES);
    let loaded = pollster::block_on(Font::load(file.path())).unwrap();
    let in_memory = Font::from_bytes(test_data::ALEGREYA_NAMES).unwrap();
    assert_eq!(loaded, in_memory);
}

#[test]
fn load_twice_is_identical() {
    init_logging();
    let file = write_temp_font(test_data::ALEGREYA_NAMES);
    let first = pollster::block_on(Font::load(file.path())).unwrap();
    let second = pollster::block_on(Font::load(file.path())).unwrap();
    assert_eq!(first, second);
}

// The read end of a fifo can't be opened until a writer shows up, so the
// load has to be pending after its first poll.
#[cfg(unix)]
#[test]
fn load_is_pending_until_the_file_is_read() {
    use std::{
        future::Future,
        pin::pin,
        task::{Context, Waker},
    };

    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("font.ttf");
    let status = std::process::Command::new("mkfifo")
        .arg(&path)
        .status()
        .unwrap();
    assert!(status.success());

    let mut load = pin!(Font::load(&path));
    let mut cx = Context::from_waker(Waker::noop());
    assert!(load.as_mut().poll(&mut cx).is_pending());

    let mut writer = std::fs::OpenOptions::new()
        .write(true)
        .open(&path)
        .unwrap();
    writer.write_all(test_data::ALEGREYA_NAMES).unwrap();
    drop(writer);

    let font = pollster::block_on(load).unwrap();
    assert_eq!(font.family_name(), "Alegreya");
}

#[test]
fn missing_file() {
    init_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.ttf");
    let err = pollster::block_on(Font::load(&path)).unwrap_err();
    match err {
        FontError::Io { path: err_path, source } => {
            assert_eq!(err_path, path);
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("expected an io error, got {other:?}"),
    }
}

#[test]
fn load_without_name_table() {
    init_logging();
    let file = write_temp_font(test_data::NO_NAME_TABLE);
    let err = pollster::block_on(Font::load(file.path())).unwrap_err();
    assert!(
        matches!(
            err,
            FontError::Read(ReadError::TableNotFound(tag)) if tag == tables::NAME
        ),
        "{err}"
    );
}

#[test]
fn truncated_file() {
    init_logging();
    let file = write_temp_font(&test_data::ALEGREYA_NAMES[..30]);
    let err = pollster::block_on(Font::load(file.path())).unwrap_err();
    assert!(matches!(
        err,
        FontError::Read(ReadError::TruncatedInput { offset: 12, .. })
    ));
}

#[test]
fn names_by_id() {
    let font = Font::from_bytes(test_data::ALEGREYA_NAMES).unwrap();
    let non_empty: Vec<_> = font
        .names()
        .filter(|(_, value)| !value.is_empty())
        .map(|(id, _)| id)
        .collect();
    assert_eq!(
        non_empty,
        [
            NameId::FAMILY_NAME,
            NameId::SUBFAMILY_NAME,
            NameId::FULL_NAME,
            NameId::VERSION_STRING,
            NameId::POSTSCRIPT_NAME,
            NameId::TYPOGRAPHIC_FAMILY_NAME,
            NameId::TYPOGRAPHIC_SUBFAMILY_NAME,
        ]
    );
}

#[cfg(feature = "serde")]
#[test]
fn serialize_to_json() {
    let font = Font::from_bytes(test_data::ALEGREYA_NAMES).unwrap();
    let json = serde_json::to_value(&font).unwrap();
    assert_eq!(json["family_name"], "Alegreya");
    assert_eq!(json["license_url"], "");
    assert_eq!(json["outline_format"], "TrueType");
}
