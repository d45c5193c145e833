use std::time::{Duration, Instant};

use approx::assert_relative_eq;
use line_chart_demo::chart::{
    AxisNormalization, ChartConfig, ChartRenderer, DataPoint, DrawCommand, RecordingSurface,
};
use line_chart_demo::host::{ChartController, HostConfig, generate_random_data_points};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn controller(seed: u64) -> ChartController<StdRng> {
    ChartController::new(
        ChartConfig::default(),
        HostConfig::default(),
        StdRng::seed_from_u64(seed),
    )
    .expect("controller init")
}

#[test]
fn generated_points_cover_requested_size() {
    let mut rng = StdRng::seed_from_u64(11);
    let points = generate_random_data_points(20, 1000, &mut rng);
    assert_eq!(points.len(), 21);
    assert_eq!(
        points.iter().map(|p| p.x).collect::<Vec<_>>(),
        (0..=20).collect::<Vec<_>>()
    );
    assert!(points.iter().all(|p| (1..=1000).contains(&p.y)));
}

#[test]
fn slider_extremes_map_to_dataset_sizes() {
    let mut c = controller(1);
    for (progress, size) in [(0, 20), (50, 50_020), (100, 100_020)] {
        c.on_slider_change(progress);
        assert_eq!(c.data_size(), size);
        assert!(c.renderer().state().len() <= 100);
    }
}

#[test]
fn notification_reflects_bounds_after_each_action() {
    let mut c = controller(2);
    let t0 = Instant::now();

    c.on_slider_change(3);
    c.on_slider_released(t0);
    let first = c.notification().expect("release notifies").message.clone();
    assert_eq!(
        first,
        format!("Min: {} | Max: {}", c.renderer().y_min(), c.renderer().y_max())
    );

    c.on_regenerate(t0 + Duration::from_millis(10));
    let second = c.notification().expect("regenerate notifies");
    assert_eq!(
        second.message,
        format!("Min: {} | Max: {}", c.renderer().y_min(), c.renderer().y_max())
    );
    assert_eq!(second.shown_at, t0 + Duration::from_millis(10));
}

#[test]
fn single_point_renders_at_margin_and_vertical_midpoint() {
    for normalization in [AxisNormalization::Symmetric, AxisNormalization::Legacy] {
        let cfg = ChartConfig::default().with_normalization(normalization);
        let mut r = ChartRenderer::new(cfg).expect("renderer init");
        r.set_data(&[DataPoint::new(0, 500)]);

        let mut surface = RecordingSurface::new(320.0, 200.0);
        r.render(&mut surface);
        assert!(surface.all_finite());

        let rings: Vec<_> = surface
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::StrokeCircle { .. }))
            .collect();
        assert_eq!(rings.len(), 1);

        let center = surface.point_centers()[0];
        assert_relative_eq!(center.x, 10.0);
        assert_relative_eq!(center.y, 95.0);
    }
}

#[test]
fn legacy_and_symmetric_agree_when_x_starts_at_zero() {
    let points: Vec<DataPoint> = (0..30).map(|i| DataPoint::new(i, (i * 37) % 11)).collect();
    let mut sym = ChartRenderer::new(ChartConfig::default()).expect("renderer init");
    let mut legacy = ChartRenderer::new(
        ChartConfig::default().with_normalization(AxisNormalization::Legacy),
    )
    .expect("renderer init");
    sym.set_data(&points);
    legacy.set_data(&points);

    let mut a = RecordingSurface::new(400.0, 300.0);
    let mut b = RecordingSurface::new(400.0, 300.0);
    sym.render(&mut a);
    legacy.render(&mut b);
    assert_eq!(a.commands, b.commands);
}

#[test]
fn render_is_repeatable() {
    let c = controller(5);
    let mut a = RecordingSurface::new(200.0, 100.0);
    let mut b = RecordingSurface::new(200.0, 100.0);
    c.renderer().render(&mut a);
    c.renderer().render(&mut b);
    assert_eq!(a.commands, b.commands);
    assert_eq!(a.point_centers().len(), 21);
}
