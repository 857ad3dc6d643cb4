//! Reading and writing BMP files on disk.

use std::path::PathBuf;

use zenraster::*;

fn scratch(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("zenraster-tests-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir.join(name)
}

#[test]
fn save_then_open() {
    let path = scratch("saved.bmp");
    let mut img = Surface::new(path.to_str().unwrap(), 37, 21, false).unwrap();
    img.fill(Color::WHITE);
    img.fill_circle(18, 10, 8, Color::RED);
    img.draw_line(0, 0, 36, 20, Color::BLUE);
    img.save().unwrap();

    let on_disk = std::fs::read(&path).unwrap();
    assert_eq!(on_disk.len(), img.file_size() as usize);

    let back = Surface::open(&path).unwrap();
    assert_eq!(back.pixels(), img.pixels());
    assert_eq!(back.width(), 37);
    assert_eq!(back.height(), 21);
    assert_eq!(back.file_name(), path.to_string_lossy());
    assert_eq!(back.get_pixel_color(18, 16), Color::RED);
    assert_eq!(back.get_pixel_color(36, 20), Color::BLUE);
}

#[test]
fn write_to_another_path_keeps_file_name() {
    let original = scratch("original.bmp");
    let copy = scratch("copy.bmp");
    let mut img = Surface::new(original.to_str().unwrap(), 8, 8, true).unwrap();
    img.fill(Color::rgba(1, 2, 3, 4));
    img.write(&copy).unwrap();

    assert_eq!(img.file_name(), original.to_str().unwrap());
    assert!(!original.exists());
    assert_eq!(std::fs::read(&copy).unwrap(), img.to_bytes());
}

#[test]
fn read_replaces_contents_in_place() {
    let path = scratch("replacement.bmp");
    let mut source = Surface::new("unused.bmp", 3, 3, false).unwrap();
    source.fill(Color::GREEN);
    source.write(&path).unwrap();

    let mut target = Surface::new("target.bmp", 10, 2, true).unwrap();
    target.read(&path).unwrap();
    assert_eq!(target.width(), 3);
    assert_eq!(target.bit_depth(), BitDepth::Bgr24);
    assert_eq!(target.get_pixel_color(2, 2), Color::GREEN);
    assert_eq!(target.file_name(), "target.bmp");
}

#[test]
fn missing_file_is_an_io_error() {
    let path = scratch("does-not-exist.bmp");
    match Surface::open(&path) {
        Err(BitmapError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("expected Io error, got {other:?}"),
    }

    let mut img = Surface::new("keep.bmp", 2, 2, false).unwrap();
    let before = img.clone();
    assert!(matches!(img.read(&path), Err(BitmapError::Io(_))));
    assert_eq!(img, before);
}

#[test]
fn unwritable_destination_is_an_io_error() {
    let dir = scratch("a-directory");
    std::fs::create_dir_all(&dir).unwrap();
    let img = Surface::new("x.bmp", 2, 2, false).unwrap();
    assert!(matches!(img.write(&dir), Err(BitmapError::Io(_))));
}

#[test]
fn load_pixels_from_another_file() {
    let path = scratch("pattern.bmp");
    let mut pattern = Surface::new("pattern.bmp", 20, 20, false).unwrap();
    pattern.fill(Color::BLACK);
    pattern.fill_triangle((0, 0), (19, 0), (0, 19), Color::RED);
    pattern.write(&path).unwrap();

    let loaded = Surface::open(&path).unwrap();
    let clone_path = scratch("pattern_clone.bmp");
    let mut blank = Surface::new(clone_path.to_str().unwrap(), 20, 20, false).unwrap();
    blank.load_from_bytes(loaded.pixels());
    blank.save().unwrap();

    assert_eq!(std::fs::read(&clone_path).unwrap(), std::fs::read(&path).unwrap());
}
