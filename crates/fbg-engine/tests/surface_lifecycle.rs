//! Surface lifecycle against the in-memory display: acquisition, present
//! and release bookkeeping.

use fbg_engine::device::{DisplayInfo, MemoryDisplay};
use fbg_engine::logging::{init_logging, LoggingConfig};
use fbg_engine::paint::Color;
use fbg_engine::surface::Surface;
use fbg_engine::SurfaceError;

fn logging() {
    init_logging(LoggingConfig {
        is_test: true,
        ..LoggingConfig::with_filter("fbg_engine=debug")
    });
}

#[test]
fn present_makes_onscreen_match_offscreen() {
    logging();
    let info = DisplayInfo::xrgb8888(32, 24).with_scanline(32 * 4 + 16);
    let mut display = MemoryDisplay::new(info);

    let mut surface = Surface::create(&mut display).unwrap();
    surface.clear(Color::new(8, 16, 32));
    surface.fill_box(4, 4, 10, -3, Color::white());
    surface.draw_line(0, 23, 31, 0, Color::new(255, 0, 0));
    surface.fill_triangle(2, 20, 28, 18, 15, 2, Color::new(0, 200, 0));
    surface.draw_triangle(2, 20, 28, 18, 15, 2, Color::black());
    surface.draw_box(-1, -1, 34, 26, Color::new(1, 2, 3));
    surface.draw_pixel(31, 23, Color::new(9, 9, 9)).unwrap();
    surface.present().unwrap();

    let frame = surface.offscreen().as_bytes().to_vec();
    surface.destroy();

    assert_eq!(display.video_memory().unwrap(), frame.as_slice());
    assert_eq!((display.acquire_count(), display.release_count()), (1, 1));
}

#[test]
fn drawing_without_present_leaves_onscreen_alone() {
    logging();
    let mut display = MemoryDisplay::new(DisplayInfo::rgb888(8, 8));

    let mut surface = Surface::create(&mut display).unwrap();
    surface.clear(Color::white());
    assert_eq!(surface.pixel(3, 3), Some(Color::white()));
    drop(surface);

    assert!(display.video_memory().unwrap().iter().all(|&b| b == 0));
}

#[test]
fn each_present_counts_a_frame() {
    logging();
    let mut display = MemoryDisplay::new(DisplayInfo::xrgb8888(4, 4));
    let mut surface = Surface::create(&mut display).unwrap();
    for _ in 0..5 {
        surface.present().unwrap();
    }
    let stats = surface.frame_stats();
    assert_eq!(stats.frames, 5);
    assert!(stats.last_interval.is_some());
}

#[test]
fn surfaces_can_be_recreated_after_destroy() {
    logging();
    let mut display = MemoryDisplay::new(DisplayInfo::xrgb8888(4, 4));

    let mut first = Surface::create(&mut display).unwrap();
    first.clear(Color::new(7, 7, 7));
    first.present().unwrap();
    first.destroy();

    let second = Surface::create(&mut display).unwrap();
    assert_eq!(second.pixel(0, 0), Some(Color::black()));
    second.destroy();

    assert_eq!((display.acquire_count(), display.release_count()), (2, 2));
    assert_eq!(&display.video_memory().unwrap()[..3], &[7, 7, 7]);
}

#[test]
fn failures_keep_acquire_and_release_balanced() {
    logging();

    let mut refused = MemoryDisplay::new(DisplayInfo::xrgb8888(4, 4));
    refused.fail_next_acquire("device busy");
    let err = Surface::create(&mut refused).err().unwrap();
    assert!(matches!(err, SurfaceError::Acquisition(_)));
    assert!(err.to_string().contains("device busy"), "{err}");
    assert_eq!(refused.acquire_count(), refused.release_count());

    let odd_depth = DisplayInfo { bits_per_pixel: 12, ..DisplayInfo::xrgb8888(4, 4) };
    let mut odd = MemoryDisplay::new(odd_depth);
    assert!(Surface::create(&mut odd).is_err());
    assert_eq!((odd.acquire_count(), odd.release_count()), (1, 1));
    assert!(!odd.is_acquired());

    let mut short = MemoryDisplay::with_memory(DisplayInfo::rgb888(4, 4), vec![0; 10]);
    assert!(Surface::create(&mut short).is_err());
    assert_eq!((short.acquire_count(), short.release_count()), (1, 1));
}

#[test]
fn lost_mapping_fails_present_without_corrupting_state() {
    logging();
    let mut display = MemoryDisplay::new(DisplayInfo::xrgb8888(4, 4));
    let lost = display.lost_handle();

    let mut surface = Surface::create(&mut display).unwrap();
    surface.clear(Color::white());
    lost.mark_lost();

    assert!(matches!(surface.present(), Err(SurfaceError::Io(_))));
    assert_eq!(surface.pixel(1, 1), Some(Color::white()));
    surface.destroy();

    assert_eq!(display.release_count(), 1);
}
