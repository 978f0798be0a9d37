// File: crates/chart-core/tests/interaction.rs
// Purpose: Index-mode hover selects every series at the nearest label.

use chart_core::{Chart, Interaction, InteractionMode, RenderOptions, Series};

fn chart() -> Chart {
    let mut chart = Chart::with_labels(vec!["2024-01-01".into(), "2024-01-02".into(), "2024-01-03".into()]);
    chart.add_series(Series::new("粉丝数", vec![Some(10.0), Some(20.0), None]));
    chart.add_series(Series::new("文章数", vec![Some(1.0), Some(2.0), Some(3.0)]));
    chart.autoscale_y();
    chart
}

#[test]
fn index_mode_reports_all_series_at_nearest_label() {
    let chart = chart();
    let opts = RenderOptions::default();
    let x = chart.x_scale(&opts).to_px(1) + 3.0;

    assert_eq!(chart.index_at(x, &opts), Some(1));
    let items = chart.hit_test(x, 0.0, &opts);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].label, "2024-01-02");
    assert_eq!(items[0].value, 20.0);
    assert_eq!(items[1].series, "文章数");
}

#[test]
fn index_mode_skips_gaps() {
    let chart = chart();
    let items = chart.items_at_index(2);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].series, "文章数");
}

#[test]
fn intersect_requires_pointer_on_a_point() {
    let mut chart = chart();
    chart.interaction = Interaction { mode: InteractionMode::Index, intersect: true };
    let opts = RenderOptions::default();
    let x = chart.x_scale(&opts).to_px(0);
    let y = chart.y_scale(&opts).to_px(10.0);

    assert_eq!(chart.hit_test(x, y, &opts).len(), 2);
    assert!(chart.hit_test(x, y - 100.0, &opts).is_empty());
}

#[test]
fn nearest_mode_picks_one_point() {
    let mut chart = chart();
    chart.interaction = Interaction { mode: InteractionMode::Nearest, intersect: false };
    let opts = RenderOptions::default();
    let x = chart.x_scale(&opts).to_px(2);
    let y = chart.y_scale(&opts).to_px(3.0);

    let items = chart.hit_test(x, y, &opts);
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].series, "文章数");
    assert_eq!(items[0].index, 2);
}

#[test]
fn tooltip_render_does_not_fail() {
    let chart = chart();
    let mut opts = RenderOptions::default();
    opts.draw_labels = false;
    opts.crosshair = Some((chart.x_scale(&opts).to_px(1), 100.0));
    chart.render_to_png_bytes(&opts).expect("render with tooltip");
}
