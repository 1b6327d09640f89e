#[cfg(test)]
mod charts {
    use chrono::NaiveDate;
    use kasou::chart::{price_chart, render_update, volume_chart};
    use kasou::series::{DateRange, Dedup, PricePoint};

    fn date(iso: &str) -> NaiveDate {
        NaiveDate::parse_from_str(iso, "%Y-%m-%d").unwrap()
    }

    fn point(iso: &str, close: f64, volume: i64) -> PricePoint {
        PricePoint {
            date: date(iso),
            open: close - 10.0,
            high: close + 50.0,
            low: close - 50.0,
            close,
            volume,
        }
    }

    fn btc_series() -> Vec<PricePoint> {
        vec![
            point("2019-12-31", 7100.0, 900),
            point("2020-01-01", 7200.0, 1000),
            point("2020-01-02", 6965.0, 1100),
            point("2020-01-03", 7344.0, 1200),
            point("2020-01-04", 7400.0, 1300),
        ]
    }

    fn january_window() -> DateRange {
        DateRange::new(Some(date("2020-01-01")), Some(date("2020-01-03")))
    }

    #[test]
    fn btc_window_renders_exact_x_and_y() {
        let update = render_update(btc_series(), "BTC-USD", january_window(), Dedup::Keep);

        let price = &update.price_chart.data[0];
        assert_eq!(price.x, vec!["2020-01-01", "2020-01-02", "2020-01-03"]);
        assert_eq!(price.y, vec![7200.0, 6965.0, 7344.0]);

        let volume = &update.volume_chart.data[0];
        assert_eq!(volume.x, price.x);
        assert_eq!(volume.y, vec![1000.0, 1100.0, 1200.0]);
    }

    #[test]
    fn chart_display_metadata_matches_the_dashboard_theme() {
        let points = btc_series();

        let price = price_chart(&points, "BTC-USD");
        assert_eq!(price.layout.title.text, "BTC-USD Closing Price");
        assert_eq!(price.layout.title.xanchor, "left");
        assert_eq!(price.layout.colorway, vec!["#17B897"]);
        assert_eq!(price.layout.yaxis.tickprefix.as_deref(), Some("$"));
        assert!(price.layout.xaxis.fixedrange);
        assert_eq!(
            price.data[0].hovertemplate.as_deref(),
            Some("$%{y:.2f}<extra></extra>")
        );

        let volume = volume_chart(&points, "BTC-USD");
        assert_eq!(volume.layout.title.text, "BTC-USD Daily Volume");
        assert_eq!(volume.layout.colorway, vec!["#E12D39"]);
        assert!(volume.layout.yaxis.tickprefix.is_none());
        assert!(volume.data[0].hovertemplate.is_none());
    }

    #[test]
    fn trace_serializes_with_a_plotly_type_tag() {
        let spec = price_chart(&btc_series(), "BTC-USD");
        let value = serde_json::to_value(&spec).unwrap();
        assert_eq!(value["data"][0]["type"], "lines");
        assert_eq!(value["layout"]["title"]["x"], 0.05);
    }

    #[test]
    fn inverted_range_renders_empty_specs_not_an_error() {
        let range = DateRange::new(Some(date("2020-01-03")), Some(date("2020-01-01")));
        let update = render_update(btc_series(), "BTC-USD", range, Dedup::Keep);

        assert!(update.price_chart.data[0].x.is_empty());
        assert!(update.price_chart.data[0].y.is_empty());
        assert!(update.volume_chart.data[0].x.is_empty());
        assert!(update.volume_chart.data[0].y.is_empty());

        // the span still reflects the whole fetched series
        let span = update.span.unwrap();
        assert_eq!(span.min, date("2019-12-31"));
        assert_eq!(span.max, date("2020-01-04"));
    }

    #[test]
    fn absent_bounds_render_the_full_series() {
        let update = render_update(btc_series(), "BTC-USD", DateRange::default(), Dedup::Keep);
        assert_eq!(update.price_chart.data[0].x.len(), 5);
        assert_eq!(update.volume_chart.data[0].x.len(), 5);
    }

    #[test]
    fn ticker_change_reseeds_both_charts_from_the_new_series() {
        let window = january_window();
        let first = render_update(btc_series(), "BTC-USD", window, Dedup::Keep);

        let eth_series = vec![
            point("2020-01-01", 130.0, 400),
            point("2020-01-02", 127.0, 410),
            point("2020-01-03", 134.0, 420),
        ];
        let second = render_update(eth_series, "ETH-USD", window, Dedup::Keep);

        // nothing from the previous ticker leaks into the new specs
        assert_eq!(second.price_chart.data[0].y, vec![130.0, 127.0, 134.0]);
        assert_eq!(second.volume_chart.data[0].y, vec![400.0, 410.0, 420.0]);
        assert_eq!(second.price_chart.layout.title.text, "ETH-USD Closing Price");
        assert_ne!(first.price_chart.data[0].y, second.price_chart.data[0].y);
    }

    #[test]
    fn render_is_pure_and_repeatable() {
        let window = january_window();
        let once = render_update(btc_series(), "BTC-USD", window, Dedup::Keep);
        let twice = render_update(btc_series(), "BTC-USD", window, Dedup::Keep);
        assert_eq!(
            serde_json::to_value(&once).unwrap(),
            serde_json::to_value(&twice).unwrap()
        );
    }
}
