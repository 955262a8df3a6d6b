// Builds a small InfluxDB-style export and forecasts from it
use cpu_trend_workspace::trend_forecast::TrainedForecastModel;
use cpu_trend_workspace::trend_forecast::models::linear_trend::LinearTrend;
use cpu_trend_workspace::trend_forecast::{schema, DataLoader, ForecastModel, TimeSeriesData};
use cpu_trend_workspace::{forecast_file, ForecastConfig, ForecastError};
use std::fs;

fn main() -> Result<(), ForecastError> {
    let mut csv = String::from(
        "#group,false,false,true,false,false\n\
         #datatype,string,long,dateTime:RFC3339,double,string\n\
         ,result,table,_time,_value,host\n",
    );
    for i in 0..20u32 {
        // Gentle upward drift with a small wobble
        let usage = 20.0 + 0.05 * f64::from(i * 30) + if i % 2 == 0 { 1.5 } else { -1.5 };
        csv.push_str(&format!(
            ",mean,0,2024-01-01T00:{:02}:{:02}Z,{:.2},localhost\n",
            (i * 30) / 60,
            (i * 30) % 60,
            usage
        ));
    }

    let path = std::env::temp_dir().join("cpu_trend_demo.csv");
    fs::write(&path, csv)?;
    let config = ForecastConfig::default();

    let table = DataLoader::from_csv(&path, &config)?;
    let columns = schema::validate(&table, &config)?;
    let data = TimeSeriesData::from_table(&table, &columns)?;
    let trained = LinearTrend::new().train(&data)?;

    println!("Samples:     {}", data.len());
    println!("Slope:       {:.4} per second", trained.fit().slope());
    println!("Intercept:   {:.4}", trained.fit().intercept());
    if let Ok(r2) = trained.fit().r_squared() {
        println!("R-squared:   {:.4}", r2);
    }

    let forecast = forecast_file(&path, &config)?;
    println!(
        "Forecast:    {:.2} at {}",
        forecast.value(),
        forecast
            .timestamp()
            .map(|t| t.to_rfc3339())
            .unwrap_or_else(|| "n/a".to_string())
    );
    println!("Trained by:  {}", trained.name());

    fs::remove_file(&path)?;
    Ok(())
}
