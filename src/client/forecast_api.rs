//! The Forecast Request Client.
//!
//! One blocking multipart POST per submission, no retries. Every failure
//! mode (transport, HTTP status, service-reported) is normalized into
//! [`ForecastResult::Failed`] here; nothing propagates past this boundary.

use reqwest::blocking::multipart;
use serde::Deserialize;

use crate::config::FORECAST;
use crate::domain::{
    ForecastMetrics, ForecastPoint, ForecastResult, ModelType, UploadedDataset, clamp_horizon,
};
use crate::utils::parse_wire_date;

/// Client for the external forecasting service.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ForecastClient {
    http: reqwest::blocking::Client,
    base_url: String,
}

impl Default for ForecastClient {
    fn default() -> Self {
        Self::from_env(None)
    }
}

impl ForecastClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::blocking::Client::new(),
            base_url,
        }
    }

    /// Resolves the service endpoint: CLI override, then the environment,
    /// then the compiled-in default.
    pub fn from_env(cli_override: Option<&str>) -> Self {
        let base_url = cli_override
            .map(str::to_owned)
            .or_else(|| std::env::var(FORECAST.base_url_env_var).ok())
            .unwrap_or_else(|| FORECAST.default_base_url.to_owned());
        Self::new(base_url)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits a dataset for forecasting and blocks until the service
    /// responds or the transport gives up.
    ///
    /// The horizon is clamped into the accepted range before the form is
    /// built. Repeated submission of an identical dataset may yield
    /// different estimates; no idempotence is claimed.
    pub fn submit(
        &self,
        dataset: &UploadedDataset,
        model_type: ModelType,
        horizon_days: u32,
    ) -> ForecastResult {
        let horizon_days = clamp_horizon(horizon_days);

        let file_part = multipart::Part::bytes(dataset.bytes.clone())
            .file_name(dataset.file_name.clone());
        let form = multipart::Form::new()
            .part(FORECAST.fields.file, file_part)
            .text(FORECAST.fields.model_type, model_type.as_wire())
            .text(FORECAST.fields.forecast_days, horizon_days.to_string());

        let url = format!("{}{}", self.base_url, FORECAST.endpoint_path);
        log::info!(
            "Submitting {} ({} rows) to {} ({}, {} days)",
            dataset.file_name,
            dataset.row_count,
            url,
            model_type.as_wire(),
            horizon_days
        );

        let response = match self.http.post(&url).multipart(form).send() {
            Ok(response) => response,
            Err(err) => return ForecastResult::Failed(err.to_string()),
        };

        let status = response.status();
        if !status.is_success() {
            return ForecastResult::Failed(format!("HTTP error! status: {}", status.as_u16()));
        }

        let body = match response.text() {
            Ok(body) => body,
            Err(err) => return ForecastResult::Failed(err.to_string()),
        };

        decode_response_body(&body)
    }
}

/// Wire shape of a 2xx response body.
#[derive(Debug, Deserialize)]
struct WireResponse {
    #[serde(default)]
    forecast: Option<Vec<WirePoint>>,
    #[serde(default)]
    metrics: Option<WireMetrics>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct WirePoint {
    ds: String,
    yhat: f64,
    yhat_upper: f64,
    yhat_lower: f64,
}

// The service emits `{}` instead of null when it skipped evaluation
// (datasets too short for a hold-out split), so both keys are optional.
#[derive(Debug, Deserialize)]
struct WireMetrics {
    #[serde(rename = "RMSE", default)]
    rmse: Option<f64>,
    #[serde(rename = "MAPE", default)]
    mape: Option<f64>,
}

/// Decodes a 2xx body into the tagged result.
///
/// A service-reported `error` field wins over transport success. A missing
/// `forecast` array maps to an empty point sequence, never to a failure.
fn decode_response_body(body: &str) -> ForecastResult {
    let wire: WireResponse = match serde_json::from_str(body) {
        Ok(wire) => wire,
        Err(err) => return ForecastResult::Failed(format!("Malformed forecast response: {err}")),
    };

    if let Some(message) = wire.error {
        return ForecastResult::Failed(message);
    }

    let mut points = Vec::new();
    for row in wire.forecast.unwrap_or_default() {
        let Some(ds) = parse_wire_date(&row.ds) else {
            return ForecastResult::Failed(format!(
                "Malformed forecast response: invalid date '{}'",
                row.ds
            ));
        };
        points.push(ForecastPoint {
            ds,
            yhat: row.yhat,
            yhat_upper: row.yhat_upper,
            yhat_lower: row.yhat_lower,
        });
    }
    points.sort_by_key(|p| p.ds);

    let metrics = wire.metrics.and_then(|m| match (m.rmse, m.mape) {
        (Some(rmse), Some(mape)) => Some(ForecastMetrics { rmse, mape }),
        _ => None,
    });

    ForecastResult::Ready { points, metrics }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DatasetSource;
    use chrono::Datelike;
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::thread::JoinHandle;

    fn dataset() -> UploadedDataset {
        let csv = "ds,y\n2015-01-01,100\n2015-01-02,110\n2015-01-03,95\n2015-01-04,120\n\
                   2015-01-05,105\n2015-01-06,98\n2015-01-07,130\n2015-01-08,102\n\
                   2015-01-09,115\n2015-01-10,108\n";
        UploadedDataset::from_csv_bytes(
            csv.as_bytes().to_vec(),
            "history.csv".to_string(),
            DatasetSource::Upload,
        )
        .unwrap()
    }

    /// Serves exactly one request with a canned JSON body, returning the
    /// raw request (headers + body) for inspection.
    fn serve_once(json_body: &str, status_line: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let response = format!(
            "{status_line}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{json_body}",
            json_body.len()
        );

        let handle = std::thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream);

            let mut head = String::new();
            let mut content_length = 0usize;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if let Some(value) = line
                    .to_ascii_lowercase()
                    .strip_prefix("content-length:")
                    .map(str::trim)
                    .map(str::to_owned)
                {
                    content_length = value.parse().unwrap();
                }
                let done = line == "\r\n";
                head.push_str(&line);
                if done {
                    break;
                }
            }

            let mut body = vec![0u8; content_length];
            reader.read_exact(&mut body).unwrap();

            let mut stream = reader.into_inner();
            stream.write_all(response.as_bytes()).unwrap();
            stream.flush().unwrap();

            head + &String::from_utf8_lossy(&body)
        });

        (base_url, handle)
    }

    /// Extracts the value of a multipart form field from a raw request.
    fn multipart_field(raw_request: &str, name: &str) -> String {
        let marker = format!("name=\"{name}\"");
        let start = raw_request.find(&marker).expect("field present");
        let after_headers = raw_request[start..].find("\r\n\r\n").unwrap() + start + 4;
        let end = raw_request[after_headers..].find("\r\n").unwrap() + after_headers;
        raw_request[after_headers..end].to_string()
    }

    fn forecast_body(days: u32) -> String {
        let rows: Vec<String> = (0..days)
            .map(|i| {
                format!(
                    "{{\"ds\": \"2015-08-{:02}T00:00:00\", \"yhat\": {}, \"yhat_upper\": {}, \"yhat_lower\": {}}}",
                    i + 1,
                    1000 + i,
                    1100 + i,
                    900 + i
                )
            })
            .collect();
        format!(
            "{{\"forecast\": [{}], \"metrics\": {{\"RMSE\": 12.345, \"MAPE\": 3.21}}}}",
            rows.join(", ")
        )
    }

    #[test]
    fn submits_multipart_fields_and_decodes_forecast() {
        let (base_url, handle) = serve_once(&forecast_body(14), "HTTP/1.1 200 OK");
        let client = ForecastClient::new(base_url);

        let result = client.submit(&dataset(), ModelType::Baseline, 14);

        let raw_request = handle.join().unwrap();
        assert!(raw_request.starts_with("POST /forecast"));
        assert_eq!(multipart_field(&raw_request, "model_type"), "baseline");
        assert_eq!(multipart_field(&raw_request, "forecast_days"), "14");
        assert!(multipart_field(&raw_request, "file").starts_with("ds,y"));

        match result {
            ForecastResult::Ready { points, metrics } => {
                assert_eq!(points.len(), 14);
                assert!(points.windows(2).all(|w| w[0].ds < w[1].ds));
                let metrics = metrics.unwrap();
                assert!((metrics.rmse - 12.345).abs() < 1e-9);
                assert!((metrics.mape - 3.21).abs() < 1e-9);
            }
            ForecastResult::Failed(message) => panic!("unexpected failure: {message}"),
        }
    }

    #[test]
    fn horizon_outside_range_is_clamped_in_transit() {
        let (base_url, handle) = serve_once("{\"forecast\": []}", "HTTP/1.1 200 OK");
        let client = ForecastClient::new(base_url);
        client.submit(&dataset(), ModelType::Enhanced, 400);
        let raw_request = handle.join().unwrap();
        assert_eq!(multipart_field(&raw_request, "forecast_days"), "365");

        let (base_url, handle) = serve_once("{\"forecast\": []}", "HTTP/1.1 200 OK");
        let client = ForecastClient::new(base_url);
        client.submit(&dataset(), ModelType::Enhanced, 0);
        let raw_request = handle.join().unwrap();
        assert_eq!(multipart_field(&raw_request, "forecast_days"), "1");
    }

    #[test]
    fn empty_forecast_and_null_metrics_is_success() {
        let (base_url, handle) =
            serve_once("{\"forecast\": [], \"metrics\": null}", "HTTP/1.1 200 OK");
        let client = ForecastClient::new(base_url);
        let result = client.submit(&dataset(), ModelType::Baseline, 30);
        handle.join().unwrap();

        assert_eq!(
            result,
            ForecastResult::Ready {
                points: vec![],
                metrics: None
            }
        );
    }

    #[test]
    fn service_error_wins_over_2xx_status() {
        let (base_url, handle) = serve_once("{\"error\": \"bad input\"}", "HTTP/1.1 200 OK");
        let client = ForecastClient::new(base_url);
        let result = client.submit(&dataset(), ModelType::Baseline, 30);
        handle.join().unwrap();

        assert_eq!(result, ForecastResult::Failed("bad input".to_string()));
    }

    #[test]
    fn non_2xx_status_maps_to_http_error_message() {
        let (base_url, handle) =
            serve_once("{\"detail\": \"boom\"}", "HTTP/1.1 500 Internal Server Error");
        let client = ForecastClient::new(base_url);
        let result = client.submit(&dataset(), ModelType::Baseline, 30);
        handle.join().unwrap();

        assert_eq!(
            result,
            ForecastResult::Failed("HTTP error! status: 500".to_string())
        );
    }

    #[test]
    fn transport_failure_is_caught_not_thrown() {
        // Bind then drop to obtain a port with nothing listening.
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = ForecastClient::new(format!("http://127.0.0.1:{port}"));
        let result = client.submit(&dataset(), ModelType::Baseline, 30);

        match result {
            ForecastResult::Failed(message) => assert!(!message.is_empty()),
            ForecastResult::Ready { .. } => panic!("expected transport failure"),
        }
    }

    #[test]
    fn empty_metrics_object_means_no_metrics() {
        let result = decode_response_body("{\"forecast\": [], \"metrics\": {}}");
        assert_eq!(
            result,
            ForecastResult::Ready {
                points: vec![],
                metrics: None
            }
        );
    }

    #[test]
    fn missing_forecast_key_maps_to_empty_points() {
        let result = decode_response_body("{\"metrics\": null}");
        assert_eq!(
            result,
            ForecastResult::Ready {
                points: vec![],
                metrics: None
            }
        );
    }

    #[test]
    fn malformed_json_is_a_failure() {
        match decode_response_body("not json") {
            ForecastResult::Failed(message) => {
                assert!(message.starts_with("Malformed forecast response"));
            }
            ForecastResult::Ready { .. } => panic!("expected failure"),
        }
    }

    #[test]
    fn unparseable_date_is_a_failure() {
        let body = "{\"forecast\": [{\"ds\": \"someday\", \"yhat\": 1.0, \"yhat_upper\": 2.0, \"yhat_lower\": 0.5}]}";
        match decode_response_body(body) {
            ForecastResult::Failed(message) => assert!(message.contains("someday")),
            ForecastResult::Ready { .. } => panic!("expected failure"),
        }
    }

    #[test]
    fn points_are_sorted_ascending_by_date() {
        let body = "{\"forecast\": [\
            {\"ds\": \"2015-08-03T00:00:00\", \"yhat\": 3.0, \"yhat_upper\": 4.0, \"yhat_lower\": 2.0},\
            {\"ds\": \"2015-08-01T00:00:00\", \"yhat\": 1.0, \"yhat_upper\": 2.0, \"yhat_lower\": 0.5},\
            {\"ds\": \"2015-08-02T00:00:00\", \"yhat\": 2.0, \"yhat_upper\": 3.0, \"yhat_lower\": 1.0}]}";
        match decode_response_body(body) {
            ForecastResult::Ready { points, .. } => {
                let days: Vec<u32> = points.iter().map(|p| p.ds.day()).collect();
                assert_eq!(days, vec![1, 2, 3]);
            }
            ForecastResult::Failed(message) => panic!("unexpected failure: {message}"),
        }
    }
}
