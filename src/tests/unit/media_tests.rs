//! Media Fallback Tests

use crate::core::media::{ImageSource, MediaView, FALLBACK_IMAGE, VIDEO_POSTER};
use crate::core::models::EntryKind;
use crate::tests::common::entry;

#[test]
fn test_failed_image_shows_fallback() {
    let mut image = ImageSource::new("https://example.com/broken.jpg");
    assert_eq!(image.current(), "https://example.com/broken.jpg");

    assert!(image.on_error());
    assert_eq!(image.current(), FALLBACK_IMAGE);
    assert!(image.is_fallback());
}

#[test]
fn test_failing_fallback_does_not_loop() {
    let mut image = ImageSource::new("https://example.com/broken.jpg");
    image.on_error();
    assert!(!image.on_error());
    assert_eq!(image.current(), FALLBACK_IMAGE);

    let mut direct = ImageSource::new(FALLBACK_IMAGE);
    assert!(!direct.on_error());
}

#[test]
fn test_absent_source_uses_fallback() {
    assert_eq!(ImageSource::or_fallback(None).current(), FALLBACK_IMAGE);
    assert_eq!(ImageSource::or_fallback(Some("")).current(), FALLBACK_IMAGE);
    assert_eq!(ImageSource::or_fallback(Some("a.jpg")).current(), "a.jpg");
}

#[test]
fn test_media_view_by_kind() {
    let video = MediaView::for_entry(&entry("v", "2024-10-20", EntryKind::Video));
    assert_eq!(
        video,
        MediaView::Video {
            src: "https://example.com/v".to_string(),
            poster: VIDEO_POSTER.to_string(),
        }
    );

    let guide = MediaView::for_entry(&entry("g", "2024-10-30", EntryKind::Guide));
    assert!(!guide.is_video());
}
