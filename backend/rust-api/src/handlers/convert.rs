use axum::{extract::Query, response::IntoResponse, Json};

use crate::conversion;
use crate::metrics::CONVERSIONS_TOTAL;
use crate::models::convert::{ConvertParams, ConvertResponse};

/// GET /api/v1/convert?value=0&from=celsius&to=fahrenheit
///
/// Conversions are total: any real value is accepted, including
/// non-physical ones like negative Kelvin.
pub async fn convert(Query(params): Query<ConvertParams>) -> impl IntoResponse {
    let converted = conversion::convert(params.value, params.from, params.to);

    CONVERSIONS_TOTAL
        .with_label_values(&[&params.from.to_string(), &params.to.to_string()])
        .inc();

    tracing::info!(
        "Converted {}{} -> {:.2}{}",
        params.value,
        params.from.symbol(),
        converted,
        params.to.symbol()
    );

    // 2-decimal formatting is presentation only; the raw value travels too.
    let formatted = format!(
        "{}{} = {:.2}{}",
        params.value,
        params.from.symbol(),
        converted,
        params.to.symbol()
    );

    Json(ConvertResponse {
        value: params.value,
        from: params.from,
        to: params.to,
        converted,
        formatted,
    })
}

/// GET /api/v1/convert/chart
///
/// Comparison-chart data: (celsius, fahrenheit, kelvin) triples at
/// 10-degree steps from -50 to 100, for line-plot rendering by the UI.
pub async fn chart() -> impl IntoResponse {
    Json(conversion::comparison_table())
}
