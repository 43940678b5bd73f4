use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use wirebend_core::Entity;
use wirebend_designer::import::{import_entities, DxfImporter, FileFormat, SvgImporter};
use wirebend_designer::{encode_entities, ImportError};

fn temp_file_with(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_format_detection() {
    assert_eq!(FileFormat::from_path(Path::new("a/b.svg")).unwrap(), FileFormat::Svg);
    assert_eq!(FileFormat::from_path(Path::new("DRAWING.DXF")).unwrap(), FileFormat::Dxf);
    assert!(matches!(
        FileFormat::from_path(Path::new("photo.png")),
        Err(ImportError::UnsupportedFormat(ext)) if ext == "png"
    ));
    assert!(FileFormat::from_path(Path::new("noext")).is_err());
}

#[test]
fn test_svg_import_file() {
    let file = temp_file_with(
        ".svg",
        r#"<svg xmlns="http://www.w3.org/2000/svg"><rect width="10" height="10"/></svg>"#,
    );
    let trace = SvgImporter::default().import_file(file.path()).unwrap();
    assert_eq!(trace.entities().len(), 1);
}

#[test]
fn test_dxf_import_file() {
    let entities = vec![Entity::Circle(wirebend_core::Circle::new(
        wirebend_core::Point::new(2.0, 2.0),
        1.0,
    ))];
    let file = temp_file_with(".dxf", &encode_entities(&entities));
    let drawing = DxfImporter::new().import_file(file.path()).unwrap();
    assert_eq!(drawing.entities, entities);
}

#[test]
fn test_missing_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.svg");
    let err = SvgImporter::default().import_file(&missing).unwrap_err();
    assert!(matches!(err, ImportError::NotFound(path) if path == missing));

    let err = import_entities(dir.path().join("missing.txt")).unwrap_err();
    assert!(matches!(err, ImportError::NotFound(_)));
}

#[test]
fn test_import_entities_dispatches_on_extension() {
    let svg = temp_file_with(".svg", r#"<svg><line x1="0" y1="0" x2="3" y2="4"/></svg>"#);
    assert_eq!(import_entities(svg.path()).unwrap().len(), 1);

    let other = temp_file_with(".txt", "hello");
    assert!(matches!(
        import_entities(other.path()),
        Err(ImportError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_invalid_svg_surfaces_error() {
    let file = temp_file_with(".svg", "<svg><unclosed></svg>");
    assert!(matches!(
        SvgImporter::default().import_file(file.path()),
        Err(ImportError::Xml(_))
    ));
}
