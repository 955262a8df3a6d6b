use pretty_assertions::assert_eq;
use std::io::Write;
use tempfile::NamedTempFile;
use trend_forecast::data::DataLoader;
use trend_forecast::schema;
use trend_forecast::{ForecastConfig, ForecastError, TimeSeriesData};

// Shape of `influx query --raw` output for a single result table
fn influx_export() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "#group,false,false,true,true,false,false,true,true,true").unwrap();
    writeln!(file, "#datatype,string,long,dateTime:RFC3339,dateTime:RFC3339,dateTime:RFC3339,double,string,string,string").unwrap();
    writeln!(file, "#default,mean,,,,,,,,").unwrap();
    writeln!(file, ",result,table,_start,_stop,_time,_value,_field,_measurement,host").unwrap();
    writeln!(file, ",,0,2024-01-01T00:00:00Z,2024-01-01T00:10:00Z,2024-01-01T00:00:30Z,12.5,percent,cpu_usage,localhost").unwrap();
    writeln!(file, ",,0,2024-01-01T00:00:00Z,2024-01-01T00:10:00Z,2024-01-01T00:01:00Z,14.25,percent,cpu_usage,localhost").unwrap();
    writeln!(file, ",,0,2024-01-01T00:00:00Z,2024-01-01T00:10:00Z,2024-01-01T00:01:30.5Z,13.0,percent,cpu_usage,localhost").unwrap();
    file
}

#[test]
fn test_data_loader_from_csv() {
    let file = influx_export();
    let config = ForecastConfig::default();

    let table = DataLoader::from_csv(file.path(), &config).unwrap();
    assert_eq!(table.len(), 3);
    assert!(!table.is_empty());
    assert_eq!(table.headers().next(), Some(""));

    let columns = schema::validate(&table, &config).unwrap();
    let data = TimeSeriesData::from_table(&table, &columns).unwrap();
    assert_eq!(data.values(), vec![12.5, 14.25, 13.0]);
    assert_eq!(data.elapsed_seconds(), &[0.0, 30.0, 60.5]);
}

#[test]
fn test_multiple_tables_are_concatenated() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "_time,_value").unwrap();
    writeln!(file, "2024-01-01T00:00:00Z,1").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "#datatype,dateTime:RFC3339,double").unwrap();
    writeln!(file, "_time,_value").unwrap();
    writeln!(file, "2024-01-01T00:00:10Z,2").unwrap();

    let table = DataLoader::from_csv(file.path(), &ForecastConfig::default()).unwrap();
    assert_eq!(table.len(), 2);
}

#[test]
fn test_custom_columns() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "% exported by hand").unwrap();
    writeln!(file, "ts;cpu").unwrap();
    writeln!(file, "2024-01-01T00:00:00Z;1.0").unwrap();

    let config = ForecastConfig {
        time_column: "ts".to_string(),
        value_column: "cpu".to_string(),
        comment_marker: b'%',
        delimiter: b';',
        ..ForecastConfig::default()
    };
    let table = DataLoader::from_csv(file.path(), &config).unwrap();
    assert_eq!(table.headers().collect::<Vec<_>>(), vec!["ts", "cpu"]);
}

#[test]
fn test_data_loader_error_handling() {
    let config = ForecastConfig::default();

    let result = DataLoader::from_csv("nonexistent_file.csv", &config);
    assert!(matches!(result, Err(ForecastError::DataLoad(_))));

    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"_time,_value\n\xff\xfe,1\n").unwrap();
    let result = DataLoader::from_csv(file.path(), &config);
    assert!(matches!(result, Err(ForecastError::DataLoad(_))));
}
