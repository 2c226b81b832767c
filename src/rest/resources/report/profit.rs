use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::clients::RestClient;
use crate::rest::resources::common::{List, Meta, MetaName};
use crate::rest::{AsyncTask, Endpoint, Params, ResourceError, ResourceResponse};

/// Figures shared by the employee, counterparty and sales channel views.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitSummary {
    /// Margin, as a fraction.
    #[serde(default)]
    pub margin: f64,

    /// Profit, in kopecks.
    #[serde(default)]
    pub profit: f64,

    /// Average refund.
    #[serde(default)]
    pub return_avg_check: f64,

    /// Cost of returned goods.
    #[serde(default)]
    pub return_cost_sum: f64,

    /// Number of returns.
    #[serde(default)]
    pub return_count: f64,

    /// Refund total.
    #[serde(default)]
    pub return_sum: f64,

    /// Average sale.
    #[serde(default)]
    pub sales_avg_check: f64,

    /// Number of sales.
    #[serde(default)]
    pub sales_count: f64,

    /// Cost of goods sold.
    #[serde(default)]
    pub sell_cost_sum: f64,

    /// Revenue.
    #[serde(default)]
    pub sell_sum: f64,
}

/// Profit of one product, service or variant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitByAssortment {
    /// Product, variant, service or bundle.
    #[serde(default)]
    pub assortment: MetaName,

    /// Margin, as a fraction.
    #[serde(default)]
    pub margin: f64,

    /// Profit, in kopecks.
    #[serde(default)]
    pub profit: f64,

    /// Unit cost of returned goods.
    #[serde(default)]
    pub return_cost: f64,

    /// Cost of returned goods.
    #[serde(default)]
    pub return_cost_sum: f64,

    /// Unit refund price.
    #[serde(default)]
    pub return_price: f64,

    /// Returned quantity.
    #[serde(default)]
    pub return_quantity: f64,

    /// Refund total.
    #[serde(default)]
    pub return_sum: f64,

    /// Unit cost of goods sold.
    #[serde(default)]
    pub sell_cost: f64,

    /// Cost of goods sold.
    #[serde(default)]
    pub sell_cost_sum: f64,

    /// Average sale price. The server spells this field with a capital `S`.
    #[serde(default, rename = "SellPrice", alias = "sellPrice")]
    pub sell_price: f64,

    /// Sold quantity.
    #[serde(default)]
    pub sell_quantity: f64,

    /// Revenue.
    #[serde(default)]
    pub sell_sum: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitByEmployee {
    /// Employee.
    #[serde(default)]
    pub employee: MetaName,

    /// Totals for the row.
    #[serde(flatten)]
    pub summary: ProfitSummary,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitByCounterparty {
    /// Counterparty.
    #[serde(default)]
    pub counterparty: MetaName,

    /// Totals for the row.
    #[serde(flatten)]
    pub summary: ProfitSummary,
}

/// Sales channel reference with its channel type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesChannelName {
    /// Channel meta.
    #[serde(default)]
    pub meta: Meta,

    /// Channel name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Channel type.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub channel_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfitBySalesChannel {
    /// Sales channel.
    #[serde(default)]
    pub sales_channel: SalesChannelName,

    /// Totals for the row.
    #[serde(flatten)]
    pub summary: ProfitSummary,
}

/// Profitability report (`report/profit`).
#[derive(Debug, Clone)]
pub struct ProfitService {
    endpoint: Endpoint,
}

impl ProfitService {
    const URI: &'static str = "report/profit";

    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self {
            endpoint: Endpoint::new(client, Self::URI),
        }
    }

    async fn view<T: DeserializeOwned>(
        &self,
        view: &str,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<List<T>>, ResourceError> {
        self.endpoint
            .request(self.endpoint.path().segment(view))
            .params(params)
            .get()
            .await
    }

    async fn view_async<T: DeserializeOwned>(
        &self,
        view: &str,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<AsyncTask<List<T>>>, ResourceError> {
        self.endpoint
            .request(self.endpoint.path().segment(view))
            .params(params)
            .get_async()
            .await
    }

    /// Profit per product and service.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn by_product(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<List<ProfitByAssortment>>, ResourceError> {
        self.view("byproduct", params).await
    }

    /// Profit per variant.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn by_variant(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<List<ProfitByAssortment>>, ResourceError> {
        self.view("byvariant", params).await
    }

    /// Profit per employee.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn by_employee(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<List<ProfitByEmployee>>, ResourceError> {
        self.view("byemployee", params).await
    }

    /// Profit per counterparty.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn by_counterparty(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<List<ProfitByCounterparty>>, ResourceError> {
        self.view("bycounterparty", params).await
    }

    /// Profit per sales channel.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn by_sales_channel(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<List<ProfitBySalesChannel>>, ResourceError> {
        self.view("bysaleschannel", params).await
    }

    /// Starts [`by_product`](Self::by_product) as a job.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingHeader`] if the job URLs are missing,
    /// plus transport and API errors.
    pub async fn by_product_async(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<AsyncTask<List<ProfitByAssortment>>>, ResourceError> {
        self.view_async("byproduct", params).await
    }

    /// Starts [`by_variant`](Self::by_variant) as a job.
    ///
    /// # Errors
    ///
    /// Same as [`by_product_async`](Self::by_product_async).
    pub async fn by_variant_async(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<AsyncTask<List<ProfitByAssortment>>>, ResourceError> {
        self.view_async("byvariant", params).await
    }

    /// Starts [`by_employee`](Self::by_employee) as a job.
    ///
    /// # Errors
    ///
    /// Same as [`by_product_async`](Self::by_product_async).
    pub async fn by_employee_async(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<AsyncTask<List<ProfitByEmployee>>>, ResourceError> {
        self.view_async("byemployee", params).await
    }

    /// Starts [`by_counterparty`](Self::by_counterparty) as a job.
    ///
    /// # Errors
    ///
    /// Same as [`by_product_async`](Self::by_product_async).
    pub async fn by_counterparty_async(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<AsyncTask<List<ProfitByCounterparty>>>, ResourceError> {
        self.view_async("bycounterparty", params).await
    }

    /// Starts [`by_sales_channel`](Self::by_sales_channel) as a job.
    ///
    /// # Errors
    ///
    /// Same as [`by_product_async`](Self::by_product_async).
    pub async fn by_sales_channel_async(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<AsyncTask<List<ProfitBySalesChannel>>>, ResourceError> {
        self.view_async("bysaleschannel", params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_capitalized_sell_price() {
        let row: ProfitByAssortment = serde_json::from_value(json!({
            "assortment": {"meta": {"type": "product"}, "name": "Chair"},
            "SellPrice": 1_500.0,
            "sellQuantity": 2
        }))
        .unwrap();

        assert_eq!(row.sell_price, 1_500.0);
        assert_eq!(row.sell_quantity, 2.0);
        assert_eq!(row.assortment.name.as_deref(), Some("Chair"));
    }

    #[test]
    fn test_flattened_summary() {
        let row: ProfitByEmployee = serde_json::from_value(json!({
            "employee": {"meta": {"type": "employee"}, "name": "Admin"},
            "profit": 300.0,
            "salesCount": 4
        }))
        .unwrap();

        assert_eq!(row.summary.profit, 300.0);
        assert_eq!(row.summary.sales_count, 4.0);
    }
}
