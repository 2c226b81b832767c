use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::resources::common::Meta;
use crate::rest::{AsyncTask, Endpoint, ResourceError, ResourceResponse};

/// Sales or orders figures of a dashboard period.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSales {
    /// Number of documents.
    #[serde(default)]
    pub count: f64,

    /// Total, in kopecks.
    #[serde(default)]
    pub amount: f64,

    /// Change against the previous period.
    #[serde(default)]
    pub movement_amount: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardMoney {
    /// Incoming money for the period.
    #[serde(default)]
    pub income: f64,

    /// Outgoing money for the period.
    #[serde(default)]
    pub outcome: f64,

    /// Balance on all accounts and tills.
    #[serde(default)]
    pub balance: f64,

    /// Net movement today.
    #[serde(default)]
    pub today_movement: f64,

    /// Net movement for the period.
    #[serde(default)]
    pub movement: f64,
}

/// Key figures for a day, week or month.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    /// Report meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Sales for the period.
    #[serde(default)]
    pub sales: DashboardSales,

    /// Customer orders for the period.
    #[serde(default)]
    pub orders: DashboardSales,

    /// Money movement.
    #[serde(default)]
    pub money: DashboardMoney,
}

/// Dashboard report (`report/dashboard`).
#[derive(Debug, Clone)]
pub struct DashboardService {
    endpoint: Endpoint,
}

impl DashboardService {
    const URI: &'static str = "report/dashboard";

    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self {
            endpoint: Endpoint::new(client, Self::URI),
        }
    }

    async fn period(&self, period: &str) -> Result<ResourceResponse<Dashboard>, ResourceError> {
        self.endpoint
            .request(self.endpoint.path().segment(period))
            .get()
            .await
    }

    async fn period_async(
        &self,
        period: &str,
    ) -> Result<ResourceResponse<AsyncTask<Dashboard>>, ResourceError> {
        self.endpoint
            .request(self.endpoint.path().segment(period))
            .get_async()
            .await
    }

    /// Figures for today.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn get_by_day(&self) -> Result<ResourceResponse<Dashboard>, ResourceError> {
        self.period("day").await
    }

    /// Figures for the current week.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn get_by_week(&self) -> Result<ResourceResponse<Dashboard>, ResourceError> {
        self.period("week").await
    }

    /// Figures for the current month.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn get_by_month(&self) -> Result<ResourceResponse<Dashboard>, ResourceError> {
        self.period("month").await
    }

    /// Starts [`get_by_day`](Self::get_by_day) as a job.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingHeader`] if the job URLs are missing,
    /// plus transport and API errors.
    pub async fn get_by_day_async(
        &self,
    ) -> Result<ResourceResponse<AsyncTask<Dashboard>>, ResourceError> {
        self.period_async("day").await
    }

    /// Starts [`get_by_week`](Self::get_by_week) as a job.
    ///
    /// # Errors
    ///
    /// Same as [`get_by_day_async`](Self::get_by_day_async).
    pub async fn get_by_week_async(
        &self,
    ) -> Result<ResourceResponse<AsyncTask<Dashboard>>, ResourceError> {
        self.period_async("week").await
    }

    /// Starts [`get_by_month`](Self::get_by_month) as a job.
    ///
    /// # Errors
    ///
    /// Same as [`get_by_day_async`](Self::get_by_day_async).
    pub async fn get_by_month_async(
        &self,
    ) -> Result<ResourceResponse<AsyncTask<Dashboard>>, ResourceError> {
        self.period_async("month").await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_dashboard_decodes_partial_body() {
        let dashboard: Dashboard = serde_json::from_value(json!({
            "sales": {"count": 3, "amount": 150_000.0, "movementAmount": -20.5},
            "money": {"balance": 1_000.0}
        }))
        .unwrap();

        assert_eq!(dashboard.sales.count, 3.0);
        assert_eq!(dashboard.sales.movement_amount, -20.5);
        assert_eq!(dashboard.orders, DashboardSales::default());
        assert_eq!(dashboard.money.balance, 1_000.0);
    }
}
