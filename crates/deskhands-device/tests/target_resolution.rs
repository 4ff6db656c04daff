mod common;

use common::{MockPcService, WindowSpec, device_with, launched_device, monitor};
use deskhands_config::{LaunchConfig, ScreenArea, WindowFilter};
use deskhands_device::DeviceError;
use deskhands_protocols::{ManualSelection, Point, Rect};
use std::path::PathBuf;
use std::sync::Arc;

fn edge_window() -> WindowSpec {
    WindowSpec::new(7, "New Tab - Edge", "Microsoft Edge", Rect::new(100, 50, 800, 600))
}

fn launch_window(filter: WindowFilter) -> LaunchConfig {
    LaunchConfig {
        window: Some(filter),
        ..Default::default()
    }
}

fn launch_area(screen_area: ScreenArea) -> LaunchConfig {
    LaunchConfig {
        screen_area: Some(screen_area),
        ..Default::default()
    }
}

fn two_monitors() -> MockPcService {
    let service = MockPcService::default();
    {
        let mut monitors = service.monitors.lock();
        monitors.push(monitor(1, Rect::new(0, 0, 1920, 1080)));
        monitors.push(monitor(2, Rect::new(1920, 0, 2560, 1440)).with_primary(true));
    }
    service
}

// ============================================================================
// Windows
// ============================================================================

#[tokio::test]
async fn test_window_by_app_name_fixed() {
    let service = Arc::new(MockPcService::new().with_window(edge_window()));
    let device = launched_device(
        service.clone(),
        launch_window(WindowFilter::by_app_name("Edge")),
    )
    .await;

    let target = device.resolve_target().await.unwrap();
    assert_eq!(target.rect_in_global, Rect::new(100, 50, 800, 600));
    assert_eq!(target.rect_in_monitor, Rect::new(100, 50, 800, 600));
    assert_eq!(target.to_screen([50.0, 50.0]).unwrap(), Point::new(150, 100));
    assert_eq!(target.window().map(|w| w.id), Some(7));
}

#[tokio::test]
async fn test_window_filter_requires_every_field() {
    let service = Arc::new(
        MockPcService::new()
            .with_window(WindowSpec::new(1, "Inbox", "Mail", Rect::new(0, 0, 400, 300)))
            .with_window(WindowSpec::new(2, "Inbox - Edge", "Edge", Rect::new(500, 0, 400, 300))),
    );
    let filter = WindowFilter {
        title: Some("Inbox".into()),
        app_name: Some("Edge".into()),
        ..Default::default()
    };
    let device = launched_device(service, launch_window(filter)).await;

    let target = device.resolve_target().await.unwrap();
    assert_eq!(target.window().map(|w| w.id), Some(2));
}

#[tokio::test]
async fn test_window_clamped_to_monitor() {
    let service = Arc::new(MockPcService::new().with_window(WindowSpec::new(
        3,
        "Wide",
        "Editor",
        Rect::new(-40, -20, 2400, 900),
    )));
    let device = launched_device(service, launch_window(WindowFilter::by_title("Wide"))).await;

    let target = device.resolve_target().await.unwrap();
    assert_eq!(target.rect_in_global, Rect::new(0, 0, 1920, 900));
}

#[tokio::test]
async fn test_missing_window_falls_back_to_primary_monitor() {
    let service = Arc::new(two_monitors());
    let device =
        launched_device(service, launch_window(WindowFilter::by_app_name("Nowhere"))).await;

    let target = device.resolve_target().await.unwrap();
    assert!(target.window().is_none());
    assert_eq!(target.monitor().id, 2);
    assert_eq!(target.rect_in_global, Rect::new(1920, 0, 2560, 1440));
}

#[tokio::test]
async fn test_empty_filter_skips_window_lookup() {
    let service = Arc::new(MockPcService::new().with_window(edge_window()));
    let filter = WindowFilter {
        title: Some(String::new()),
        ..Default::default()
    };
    let device = launched_device(service.clone(), launch_window(filter)).await;

    let target = device.resolve_target().await.unwrap();
    assert!(target.window().is_none());
    assert_eq!(*service.window_enumerations.lock(), 0);
}

#[tokio::test]
async fn test_fixed_window_keeps_launch_geometry() {
    let service = Arc::new(MockPcService::new().with_window(edge_window()));
    let device = launched_device(
        service.clone(),
        launch_window(WindowFilter::by_app_name("Edge")),
    )
    .await;

    service.move_window(7, Rect::new(300, 300, 800, 600));
    let target = device.resolve_target().await.unwrap();
    assert_eq!(target.rect_in_global, Rect::new(100, 50, 800, 600));
    assert_eq!(*service.window_enumerations.lock(), 1);
}

#[tokio::test]
async fn test_dynamic_window_follows_moves() {
    let service = Arc::new(MockPcService::new().with_window(edge_window()));
    let filter = WindowFilter {
        fixed_window: false,
        ..WindowFilter::by_app_name("Edge")
    };
    let device = launched_device(service.clone(), launch_window(filter)).await;

    service.move_window(7, Rect::new(300, 300, 800, 600));
    let target = device.resolve_target().await.unwrap();
    assert_eq!(target.rect_in_global, Rect::new(300, 300, 800, 600));
    assert_eq!(target.to_screen([10.0, 10.0]).unwrap(), Point::new(310, 310));
}

#[tokio::test]
async fn test_dynamic_window_closed_is_an_error() {
    let service = Arc::new(MockPcService::new().with_window(edge_window()));
    let filter = WindowFilter {
        fixed_window: false,
        ..WindowFilter::by_app_name("Edge")
    };
    let device = launched_device(service.clone(), launch_window(filter)).await;

    service.close_window(7);
    let err = device.resolve_target().await.unwrap_err();
    assert!(matches!(err, DeviceError::WindowNotFound(ref label) if label == "Edge"));
    assert!(err.to_string().contains("Edge"));
}

// ============================================================================
// Monitors
// ============================================================================

#[tokio::test]
async fn test_monitor_by_id() {
    let service = Arc::new(two_monitors());
    let device = launched_device(
        service,
        launch_area(ScreenArea {
            monitor_id: Some(1),
            ..Default::default()
        }),
    )
    .await;

    assert_eq!(device.resolve_target().await.unwrap().monitor().id, 1);
}

#[tokio::test]
async fn test_monitor_index_is_clamped() {
    let service = Arc::new(two_monitors());
    let device = launched_device(
        service,
        launch_area(ScreenArea {
            monitor_index: Some(9),
            ..Default::default()
        }),
    )
    .await;

    assert_eq!(device.resolve_target().await.unwrap().monitor().id, 2);
}

#[tokio::test]
async fn test_unknown_monitor_id_falls_through_to_index() {
    let service = Arc::new(two_monitors());
    let device = launched_device(
        service,
        launch_area(ScreenArea {
            monitor_id: Some(42),
            monitor_index: Some(0),
            ..Default::default()
        }),
    )
    .await;

    assert_eq!(device.resolve_target().await.unwrap().monitor().id, 1);
}

#[tokio::test]
async fn test_monitor_area_is_relative_to_monitor() {
    let service = Arc::new(two_monitors());
    let device = launched_device(
        service,
        launch_area(ScreenArea {
            monitor_id: Some(2),
            area: Some(Rect::new(10, 20, 300, 200)),
            ..Default::default()
        }),
    )
    .await;

    let target = device.resolve_target().await.unwrap();
    assert_eq!(target.rect_in_monitor, Rect::new(10, 20, 300, 200));
    assert_eq!(target.rect_in_global, Rect::new(1930, 20, 300, 200));
    assert_eq!(target.to_screen([0.4, 0.6]).unwrap(), Point::new(1930, 21));
}

#[tokio::test]
async fn test_no_monitors_fails_launch() {
    let service = Arc::new(MockPcService::default());
    let device = device_with(service, LaunchConfig::default(), "linux");

    let err = device.launch().await.unwrap_err();
    assert!(matches!(err, DeviceError::NoMonitors));
    assert!(!device.has_launched());
}

// ============================================================================
// Manual selection
// ============================================================================

fn manual(save_path: Option<PathBuf>) -> LaunchConfig {
    LaunchConfig {
        screen_area: Some(ScreenArea {
            prefer_manual: true,
            ..Default::default()
        }),
        manual_screenshot_save_path: save_path,
        ..Default::default()
    }
}

#[tokio::test]
async fn test_manual_selection_used() {
    let service = Arc::new(two_monitors());
    let first = service.monitors.lock()[0].clone();
    *service.selection.lock() = Some(ManualSelection {
        monitor: first,
        rect: Some(Rect::new(5, 5, 100, 100)),
    });
    let device = launched_device(
        service.clone(),
        manual(Some(PathBuf::from("/tmp/selection.png"))),
    )
    .await;

    let target = device.resolve_target().await.unwrap();
    assert_eq!(target.monitor().id, 1);
    assert_eq!(target.rect_in_global, Rect::new(5, 5, 100, 100));
    assert_eq!(
        service.selection_paths.lock().clone(),
        vec![Some(PathBuf::from("/tmp/selection.png"))]
    );
}

#[tokio::test]
async fn test_manual_selection_without_rect_uses_full_monitor() {
    let service = Arc::new(two_monitors());
    let first = service.monitors.lock()[0].clone();
    *service.selection.lock() = Some(ManualSelection {
        monitor: first,
        rect: None,
    });
    let device = launched_device(service, manual(None)).await;

    let target = device.resolve_target().await.unwrap();
    assert_eq!(target.rect_in_global, Rect::new(0, 0, 1920, 1080));
}

#[tokio::test]
async fn test_manual_selection_cancelled_falls_back() {
    let service = Arc::new(two_monitors());
    let device = launched_device(service.clone(), manual(None)).await;

    let target = device.resolve_target().await.unwrap();
    assert_eq!(target.monitor().id, 2);
    assert_eq!(service.selection_paths.lock().len(), 1);
}

// ============================================================================
// Launch lifecycle
// ============================================================================

#[tokio::test]
async fn test_resolve_before_launch_fails() {
    let service = Arc::new(MockPcService::new());
    let device = device_with(service, LaunchConfig::default(), "linux");

    assert!(matches!(
        device.resolve_target().await,
        Err(DeviceError::NotLaunched)
    ));
    assert!(matches!(device.size().await, Err(DeviceError::NotLaunched)));
}

#[tokio::test]
async fn test_second_launch_keeps_first_source() {
    let service = Arc::new(MockPcService::new().with_window(edge_window()));
    let device = launched_device(
        service.clone(),
        launch_window(WindowFilter::by_app_name("Edge")),
    )
    .await;

    service.move_window(7, Rect::new(0, 0, 640, 480));
    device.launch().await.unwrap();

    let target = device.resolve_target().await.unwrap();
    assert_eq!(target.rect_in_global, Rect::new(100, 50, 800, 600));
    assert_eq!(*service.window_enumerations.lock(), 1);
}
