// File: crates/history-charts/tests/skia_backend.rs
// Purpose: Skia backend end to end, PNG files on disk for each surface.

mod common;

use common::{stub_loader, Reply};
use history_charts::{
    create_line_chart, ChartBackend, Field, HistoryChartRenderer, RenderError, RenderState, RendererConfig,
    SkiaBackend, SurfaceSet,
};

fn backend(dir: &std::path::Path) -> SkiaBackend {
    let ids = Field::ALL.map(Field::surface_id);
    SkiaBackend::new(SurfaceSet::in_dir(dir, ids, 320, 200)).with_labels(false)
}

#[tokio::test]
async fn renders_four_pngs_sized_to_their_surfaces() {
    let tmp = tempfile::tempdir().unwrap();
    let (loader, _) = stub_loader(Reply::Body(
        r#"[
            {"date":"2024-01-01","followers":50,"articles":3,"likes":10,"views":200},
            {"date":"2024-01-02","followers":55,"articles":3,"likes":null,"views":260},
            {"date":"2024-01-03","followers":61,"articles":4,"likes":14,"views":310}
        ]"#,
    ));
    let mut renderer = HistoryChartRenderer::new(loader, backend(tmp.path()));

    assert_eq!(renderer.on_ready().await.unwrap(), RenderState::Rendered { charts: 4 });

    for field in Field::ALL {
        let path = tmp.path().join(format!("{}.png", field.surface_id()));
        let img = image::open(&path).expect("chart png").to_rgba8();
        assert_eq!((img.width(), img.height()), (320, 200));
    }
    let followers = &renderer.charts()[0];
    assert_eq!(followers.surface_id(), "followersChart");
    assert_eq!(followers.chart.y_axis.min, 0.0);
    assert_eq!(followers.chart.x_axis.title, "日期");
}

#[tokio::test]
async fn huge_counts_still_render() {
    let tmp = tempfile::tempdir().unwrap();
    let (loader, _) = stub_loader(Reply::Body(
        r#"[{"date":"2024-01-01","views":1.7e308},{"date":"2024-01-02","views":"1e308"}]"#,
    ));
    let mut renderer = HistoryChartRenderer::new(loader, backend(tmp.path()));

    assert_eq!(renderer.on_ready().await.unwrap(), RenderState::Rendered { charts: 4 });

    let views = &renderer.charts()[3];
    assert_eq!(views.surface_id(), "viewsChart");
    assert!(views.chart.y_axis.max.is_finite());
    assert!(tmp.path().join("viewsChart.png").exists());
}

#[test]
fn missing_surface_is_a_render_error() {
    let tmp = tempfile::tempdir().unwrap();
    let mut backend = SkiaBackend::new(SurfaceSet::in_dir(tmp.path(), ["followersChart"], 320, 200));

    let err = create_line_chart(&mut backend, "viewsChart", &["2024-01-01".to_string()], "阅读量", vec![Some(1.0)])
        .err()
        .expect("missing surface");

    assert!(matches!(err, RenderError::MissingSurface(ref id) if id == "viewsChart"));
    assert!(!tmp.path().join("viewsChart.png").exists());
}

#[test]
fn handle_answers_hover_and_redraws_on_resize() {
    let tmp = tempfile::tempdir().unwrap();
    let mut backend = backend(tmp.path());
    let labels = vec!["2024-01-01".to_string(), "2024-01-02".to_string()];

    let mut chart = create_line_chart(&mut backend, "likesChart", &labels, "被点赞数", vec![Some(3.0), Some(8.0)])
        .expect("render");

    let x = chart.chart.x_scale(chart.options()).to_px(1);
    let items = chart.hover(x, 50.0).expect("hover redraw");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].label, "2024-01-02");
    assert_eq!(items[0].series, "被点赞数");
    assert_eq!(items[0].value, 8.0);

    chart.resize(640, 360).expect("resize");
    let img = image::open(tmp.path().join("likesChart.png")).unwrap();
    assert_eq!((img.width(), img.height()), (640, 360));
}

#[test]
fn config_backend_targets_output_dir() {
    let tmp = tempfile::tempdir().unwrap();
    let cfg = RendererConfig { output_dir: tmp.path().to_path_buf(), width: 300, height: 150, draw_labels: false, ..Default::default() };
    let mut backend = cfg.backend();

    let handle = backend
        .construct("articlesChart", history_charts::line_chart_config(&["d".to_string()], "文章数", vec![None]))
        .expect("render");

    assert!(handle.surface.path.starts_with(tmp.path()));
    assert!(handle.surface.path.exists());
}
