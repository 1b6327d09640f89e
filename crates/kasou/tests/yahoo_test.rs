#[cfg(test)]
mod yahoo {
    use chrono::NaiveDate;
    use kasou::endp::yahoo_finance::{extract, PriceHistory};
    use kasou::error::Error;

    fn load(name: &str) -> PriceHistory {
        let current_dir = std::env::current_dir().unwrap().display().to_string();
        let body = std::fs::read_to_string(format!("{current_dir}/tests/data/{name}")).unwrap();
        serde_json::from_str(&body).unwrap()
    }

    fn date(iso: &str) -> NaiveDate {
        NaiveDate::parse_from_str(iso, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn fixture_extracts_dated_rows_in_ascending_order() {
        let points = extract(load("chart_response.json"), "BTC-USD").unwrap();

        assert_eq!(points.len(), 3);
        let dates: Vec<_> = points.iter().map(|p| p.date).collect();
        assert_eq!(
            dates,
            vec![date("2020-01-01"), date("2020-01-02"), date("2020-01-03")]
        );
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));

        assert_eq!(points[0].close, 7200.17);
        assert_eq!(points[0].volume, 18565664997);
        assert_eq!(points[2].high, 7413.72);
    }

    #[test]
    fn null_padded_rows_are_skipped_not_zero_filled() {
        // the fixture's fourth row is all nulls
        let points = extract(load("chart_response.json"), "BTC-USD").unwrap();
        assert!(points.iter().all(|p| p.date != date("2020-01-04")));
        assert!(points.iter().all(|p| p.volume != 0));
    }

    #[test]
    fn repeated_extraction_is_identical() {
        let once = extract(load("chart_response.json"), "BTC-USD").unwrap();
        let twice = extract(load("chart_response.json"), "BTC-USD").unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn missing_chart_result_is_an_invalid_ticker() {
        let result = extract(load("chart_error.json"), "FAKECOIN-USD");
        match result {
            Err(Error::InvalidTicker(ticker)) => assert_eq!(ticker, "FAKECOIN-USD"),
            other => panic!("expected InvalidTicker, got {other:?}"),
        }
    }
}
