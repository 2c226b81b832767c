use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::resources::common::{Context, Meta, Timestamp};
use crate::rest::{AsyncTask, Endpoint, Params, ResourceError, ResourceResponse};

/// One point of a plot series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesElement {
    /// Start of the interval.
    pub date: Timestamp,

    /// Total, in kopecks.
    #[serde(default)]
    pub sum: f64,

    /// Number of documents.
    #[serde(default)]
    pub quantity: f64,
}

/// Sales or orders totals grouped by [`Interval`](crate::rest::Interval).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotSeries {
    /// Employee the report was built for.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,

    /// Report meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// One point per interval, in date order.
    #[serde(default)]
    pub series: Vec<SeriesElement>,
}

/// Sales or orders plot series (`report/{sales,orders}/plotseries`).
///
/// The server requires `momentFrom`, `momentTo` and `interval`:
///
/// ```rust,ignore
/// use moysklad::rest::{Interval, Params};
///
/// let params = Params::new()
///     .moment_from("2024-01-01 00:00:00".parse::<Timestamp>()?)
///     .moment_to("2024-01-31 23:59:59".parse::<Timestamp>()?)
///     .interval(Interval::Day);
/// let sales = moysklad.report_sales().get_plot_series(&params).await?;
/// ```
#[derive(Debug, Clone)]
pub struct PlotSeriesService {
    endpoint: Endpoint,
}

impl PlotSeriesService {
    /// Sales series at `report/sales`.
    #[must_use]
    pub fn sales(client: RestClient) -> Self {
        Self {
            endpoint: Endpoint::new(client, "report/sales"),
        }
    }

    /// Orders series at `report/orders`.
    #[must_use]
    pub fn orders(client: RestClient) -> Self {
        Self {
            endpoint: Endpoint::new(client, "report/orders"),
        }
    }

    /// Fetches the series.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn get_plot_series(
        &self,
        params: &Params,
    ) -> Result<ResourceResponse<PlotSeries>, ResourceError> {
        self.endpoint
            .request(self.endpoint.path().segment("plotseries"))
            .params(Some(params))
            .get()
            .await
    }

    /// Starts [`get_plot_series`](Self::get_plot_series) as a job.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingHeader`] if the job URLs are missing,
    /// plus transport and API errors.
    pub async fn get_plot_series_async(
        &self,
        params: &Params,
    ) -> Result<ResourceResponse<AsyncTask<PlotSeries>>, ResourceError> {
        self.endpoint
            .request(self.endpoint.path().segment("plotseries"))
            .params(Some(params))
            .get_async()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_series_keeps_server_order() {
        let series: PlotSeries = serde_json::from_value(json!({
            "series": [
                {"date": "2024-01-02 00:00:00", "sum": 500.0, "quantity": 2},
                {"date": "2024-01-01 00:00:00", "sum": 100.0, "quantity": 1}
            ]
        }))
        .unwrap();

        assert_eq!(series.series.len(), 2);
        assert_eq!(series.series[0].date.to_string(), "2024-01-02 00:00:00.000");
        assert_eq!(series.series[1].sum, 100.0);
    }
}
