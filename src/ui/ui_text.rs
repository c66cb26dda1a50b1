/// Static UI strings, collected in one place so panels stay declarative.
pub struct UiText {
    pub app_heading: &'static str,
    pub app_subtitle: &'static str,

    // Upload panel
    pub upload_heading: &'static str,
    pub upload_description: &'static str,
    pub required_columns_note: &'static str,
    pub optional_columns_note: &'static str,
    pub format_note: &'static str,
    pub path_field_hint: &'static str,
    pub load_button_label: &'static str,
    pub drop_hint: &'static str,
    pub quick_start_note: &'static str,
    pub no_file_selected: &'static str,

    // Configuration panel
    pub config_heading: &'static str,
    pub model_type_heading: &'static str,
    pub baseline_description: &'static str,
    pub enhanced_description: &'static str,
    pub horizon_heading: &'static str,
    pub horizon_helper_prefix: &'static str,
    pub horizon_helper_suffix: &'static str,

    // Action panel
    pub action_heading: &'static str,
    pub predict_file_label: &'static str,
    pub predict_sample_label: &'static str,
    pub predict_file_busy_label: &'static str,
    pub predict_sample_busy_label: &'static str,

    // Result states
    pub submitting_heading: &'static str,
    pub submitting_note: &'static str,
    pub error_heading: &'static str,
    pub placeholder_heading: &'static str,
    pub placeholder_body: &'static str,

    // Metrics
    pub metric_rmse_label: &'static str,
    pub metric_mape_label: &'static str,
    pub metric_period_label: &'static str,

    // Chart
    pub chart_title: &'static str,
    pub legend_forecast: &'static str,
    pub legend_upper: &'static str,
    pub legend_lower: &'static str,
    pub legend_band: &'static str,
    pub plot_x_axis: &'static str,
    pub plot_y_axis: &'static str,

    // Status bar
    pub status_service_label: &'static str,
    pub status_dataset_label: &'static str,
    pub status_idle: &'static str,
    pub status_submitting: &'static str,
    pub status_failed: &'static str,
}

pub static UI_TEXT: UiText = UiText {
    app_heading: "Sales Forecast Dashboard",
    app_subtitle: "Upload your sales data or use sample data to generate sales forecasts",

    upload_heading: "Upload Sales Data",
    upload_description: "Upload a CSV file containing historical sales data for forecasting.",
    required_columns_note: "Required columns (same names): ds (date), y (sales).",
    optional_columns_note: "Optional: Customers, Promo, StateHoliday, SchoolHoliday.",
    format_note: "Dates as YYYY-MM-DD (e.g. 2013-01-01), sales as numeric values, 0/1 for binary indicators.",
    path_field_hint: "Path to a CSV file",
    load_button_label: "Load CSV",
    drop_hint: "You can also drag & drop a CSV file onto this window.",
    quick_start_note: "Quick Start: no CSV file at hand? Use the bundled sample dataset via \"Predict on Sample Data\" below.",
    no_file_selected: "No file loaded yet",

    config_heading: "Forecast Configuration",
    model_type_heading: "Model Type",
    baseline_description: "Basic model using only date and sales data. Good for simple trend analysis.",
    enhanced_description: "Includes regressors: Customers, Promo, StateHoliday, SchoolHoliday for more accurate predictions.",
    horizon_heading: "Forecast Period",
    horizon_helper_prefix: "Predict ",
    horizon_helper_suffix: " days beyond the end of the dataset",

    action_heading: "Generate Forecast",
    predict_file_label: "Predict on Uploaded File",
    predict_sample_label: "Predict on Sample Data",
    predict_file_busy_label: "Processing Your Data...",
    predict_sample_busy_label: "Loading Sample Data...",

    submitting_heading: "Generating forecast predictions…",
    submitting_note: "This service is hosted on a free tier, so the first response may take a little longer. Thank you for your patience.",
    error_heading: "Unable to Generate Forecast",
    placeholder_heading: "No Forecast Data Yet",
    placeholder_body: "Upload a CSV file or use sample data to see forecast visualization",

    metric_rmse_label: "Root Mean Square Error",
    metric_mape_label: "Mean Absolute Percentage Error",
    metric_period_label: "Forecast Period",

    chart_title: "Sales Forecast Projection",
    legend_forecast: "Forecast",
    legend_upper: "Upper Confidence",
    legend_lower: "Lower Confidence",
    legend_band: "Confidence Band",
    plot_x_axis: "Date",
    plot_y_axis: "Sales",

    status_service_label: "Service",
    status_dataset_label: "Dataset",
    status_idle: "idle",
    status_submitting: "submitting…",
    status_failed: "failed",
};
