use rstest::rstest;
use trend_forecast::models::linear_trend::LinearTrend;
use trend_forecast::{
    forecast_reader, ForecastConfig, ForecastError, ForecastModel, TimeSeriesData,
    TrainedForecastModel, FORECAST_HORIZON_SECS,
};

fn forecast(text: &str) -> Result<f64, ForecastError> {
    forecast_reader(text.as_bytes(), &ForecastConfig::default()).map(|f| f.value())
}

fn series(text: &str) -> TimeSeriesData {
    let config = ForecastConfig::default();
    let table = trend_forecast::DataLoader::from_reader(text.as_bytes(), &config).unwrap();
    let columns = trend_forecast::schema::validate(&table, &config).unwrap();
    TimeSeriesData::from_table(&table, &columns).unwrap()
}

#[test]
fn test_perfect_line() {
    let value = forecast("_time,_value\n2024-01-01T00:00:00Z,0\n2024-01-01T00:00:10Z,10\n").unwrap();
    assert!((value - 20.0).abs() < 1e-9);
}

#[test]
fn test_constant_values() {
    let text = "_time,_value\n\
        2024-01-01T00:00:00Z,5.0\n\
        2024-01-01T00:00:07Z,5.0\n\
        2024-01-01T00:01:00Z,5.0\n\
        2024-01-01T00:05:00Z,5.0\n";
    assert!((forecast(text).unwrap() - 5.0).abs() < 1e-9);
}

#[test]
fn test_matches_closed_form_reference() {
    let text = "_time,_value\n\
        2024-01-01T00:00:00Z,10.0\n\
        2024-01-01T00:00:30Z,14.0\n\
        2024-01-01T00:01:00Z,11.0\n\
        2024-01-01T00:01:30Z,19.0\n\
        2024-01-01T00:02:00Z,16.0\n";
    let data = series(text);
    let x = data.elapsed_seconds();
    let y = data.values();

    let n = x.len() as f64;
    let x_mean = x.iter().sum::<f64>() / n;
    let y_mean = y.iter().sum::<f64>() / n;
    let num: f64 = x.iter().zip(&y).map(|(a, b)| (a - x_mean) * (b - y_mean)).sum();
    let den: f64 = x.iter().map(|a| (a - x_mean).powi(2)).sum();
    let slope = num / den;
    let intercept = y_mean - slope * x_mean;

    let trained = LinearTrend::new().train(&data).unwrap();
    assert!((trained.fit().slope() - slope).abs() < 1e-12);
    assert!((trained.fit().intercept() - intercept).abs() < 1e-9);

    let expected = slope * (120.0 + FORECAST_HORIZON_SECS) + intercept;
    let actual = trained.forecast(FORECAST_HORIZON_SECS).unwrap().value();
    assert!((actual - expected).abs() < 1e-9);
}

#[test]
fn test_repeatable() {
    let text = "_time,_value\n2024-01-01T00:00:00Z,3.3\n2024-01-01T00:00:10Z,4.4\n2024-01-01T00:00:25Z,3.9\n";
    assert_eq!(forecast(text).unwrap(), forecast(text).unwrap());
}

#[test]
fn test_no_data_rows() {
    let result = forecast("# nothing measured\n_time,_value\n");
    assert!(matches!(result, Err(ForecastError::Processing(_))));
}

#[test]
fn test_identical_timestamps_flat_line() {
    let text = "_time,_value\n2024-01-01T00:00:00Z,2\n2024-01-01T00:00:00Z,4\n";
    assert!((forecast(text).unwrap() - 3.0).abs() < 1e-12);
}

#[rstest]
#[case("_time,_value\n2024-01-01T00:00:00Z,\n", "null value")]
#[case("_time,_value\n,1\n", "null timestamp")]
#[case("_time,_value\n2024-01-01T00:00:00Z,NaN\n", "non-finite")]
#[case("_time,_value\n2024-01-01T00:00:00Z,high\n", "could not convert")]
fn test_processing_errors(#[case] text: &str, #[case] needle: &str) {
    match forecast(text) {
        Err(ForecastError::Processing(msg)) => assert!(msg.contains(needle), "{}", msg),
        other => panic!("Expected processing error, got {:?}", other),
    }
}

#[rstest]
#[case("_time,_value\nnot-a-date,1\n")]
#[case("_time,_value\n2024-01-01T00:00:00Z,1\n2024-01-01T00:00:10,2\n")]
fn test_timestamp_errors(#[case] text: &str) {
    assert!(matches!(forecast(text), Err(ForecastError::TimestampParse(_))));
}

#[test]
fn test_sub_second_precision() {
    let text = "_time,_value\n2024-01-01T00:00:00.000Z,0\n2024-01-01T00:00:00.500Z,1\n";
    // slope 2 per second, latest elapsed 0.5, forecast at 10.5
    assert!((forecast(text).unwrap() - 21.0).abs() < 1e-9);
}
