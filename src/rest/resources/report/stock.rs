use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::clients::RestClient;
use crate::rest::resources::common::{List, Meta, MetaName};
use crate::rest::{AsyncTask, Endpoint, Params, ResourceError, ResourceResponse};

/// A row of the extended stock report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockAll {
    /// Assortment meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Assortment name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Assortment code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    /// Article (SKU).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub article: Option<String>,

    /// Code in an external system.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_code: Option<String>,

    /// Product folder.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<MetaName>,

    /// Unit of measure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uom: Option<MetaName>,

    /// First product image.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Meta>,

    /// Physical stock.
    #[serde(default)]
    pub stock: f64,

    /// Reserved quantity.
    #[serde(default)]
    pub reserve: f64,

    /// Quantity in transit.
    #[serde(default)]
    pub in_transit: f64,

    /// Stock plus in transit minus reserve.
    #[serde(default)]
    pub quantity: f64,

    /// Cost price, in kopecks.
    #[serde(default)]
    pub price: f64,

    /// Sale price, in kopecks.
    #[serde(default)]
    pub sale_price: f64,

    /// Days the goods have been on stock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock_days: Option<f64>,
}

/// Stock of one store within a by-store row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreStock {
    /// Warehouse meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Warehouse name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Physical stock.
    #[serde(default)]
    pub stock: f64,

    /// Reserved quantity.
    #[serde(default)]
    pub reserve: f64,

    /// Quantity in transit.
    #[serde(default)]
    pub in_transit: f64,
}

/// A row of the stock-by-store report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockByStore {
    /// Assortment meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Balances per warehouse.
    #[serde(default)]
    pub stock_by_store: Vec<StoreStock>,
}

/// A row of the current stock reports.
///
/// `store_id` is only set by the by-store variant. The quantity field that
/// is filled depends on the requested [`StockType`](crate::rest::StockType).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockCurrent {
    /// Assortment id.
    pub assortment_id: Uuid,

    /// Warehouse id, when grouped by warehouse.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<Uuid>,

    /// Physical stock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stock: Option<f64>,

    /// Stock not reserved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub free_stock: Option<f64>,

    /// Available quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,

    /// Reserved quantity.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reserve: Option<f64>,

    /// Quantity in transit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub in_transit: Option<f64>,
}

/// Stock of one document position.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockPosition {
    /// Assortment meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Assortment name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Physical stock.
    #[serde(default)]
    pub stock: f64,

    /// Reserved quantity.
    #[serde(default)]
    pub reserve: f64,

    /// Quantity in transit.
    #[serde(default)]
    pub in_transit: f64,

    /// Quantity moved by the operation.
    #[serde(default)]
    pub quantity: f64,

    /// Cost price, in kopecks.
    #[serde(default)]
    pub cost: f64,
}

/// Stock of the positions of one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StockByOperation {
    /// Operation meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Per-assortment balances of the operation.
    #[serde(default)]
    pub positions: Vec<StockPosition>,
}

/// Stock report (`report/stock`).
#[derive(Debug, Clone)]
pub struct StockService {
    endpoint: Endpoint,
}

impl StockService {
    const URI: &'static str = "report/stock";

    #[must_use]
    pub fn new(client: RestClient) -> Self {
        Self {
            endpoint: Endpoint::new(client, Self::URI),
        }
    }

    /// Extended stock report.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn get_all(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<List<StockAll>>, ResourceError> {
        self.endpoint
            .request(self.endpoint.path().segment("all"))
            .params(params)
            .get()
            .await
    }

    /// Stock split by store.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn get_by_store(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<List<StockByStore>>, ResourceError> {
        self.endpoint
            .request(self.endpoint.path().segment("bystore"))
            .params(params)
            .get()
            .await
    }

    /// Starts [`get_all`](Self::get_all) as a job.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError::MissingHeader`] if the job URLs are missing,
    /// plus transport and API errors.
    pub async fn get_all_async(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<AsyncTask<List<StockAll>>>, ResourceError> {
        self.endpoint
            .request(self.endpoint.path().segment("all"))
            .params(params)
            .get_async()
            .await
    }

    /// Starts [`get_by_store`](Self::get_by_store) as a job.
    ///
    /// # Errors
    ///
    /// Same as [`get_all_async`](Self::get_all_async).
    pub async fn get_by_store_async(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<AsyncTask<List<StockByStore>>>, ResourceError> {
        self.endpoint
            .request(self.endpoint.path().segment("bystore"))
            .params(params)
            .get_async()
            .await
    }

    /// Current stock without store split. The answer is a bare array.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn get_current_all(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<Vec<StockCurrent>>, ResourceError> {
        self.endpoint
            .request(self.endpoint.path().segment("all").segment("current"))
            .params(params)
            .get()
            .await
    }

    /// Current stock per store. The answer is a bare array.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn get_current_by_store(
        &self,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<Vec<StockCurrent>>, ResourceError> {
        self.endpoint
            .request(self.endpoint.path().segment("bystore").segment("current"))
            .params(params)
            .get()
            .await
    }

    /// Stock of the positions of a shipment, order, sale or return.
    ///
    /// # Errors
    ///
    /// Returns [`ResourceError`] for transport, API and decode errors.
    pub async fn get_by_operation(
        &self,
        operation_id: Uuid,
        params: Option<&Params>,
    ) -> Result<ResourceResponse<List<StockByOperation>>, ResourceError> {
        self.endpoint
            .request(self.endpoint.path().segment("byoperation"))
            .query_param("operation.id", operation_id.to_string())
            .params(params)
            .get()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_current_stock_row_by_store() {
        let rows: Vec<StockCurrent> = serde_json::from_value(json!([
            {
                "assortmentId": "7944ef04-f831-11e5-7a69-971500188b19",
                "storeId": "19f1edc0-fc42-4001-94cb-c9ec9c62ec10",
                "stock": 12.0
            },
            {"assortmentId": "7944ef04-f831-11e5-7a69-971500188b20", "freeStock": 0}
        ]))
        .unwrap();

        assert_eq!(rows.len(), 2);
        assert!(rows[0].store_id.is_some());
        assert_eq!(rows[0].stock, Some(12.0));
        assert_eq!(rows[1].store_id, None);
        assert_eq!(rows[1].free_stock, Some(0.0));
    }

    #[test]
    fn test_by_store_rows_keep_store_order() {
        let row: StockByStore = serde_json::from_value(json!({
            "stockByStore": [
                {"name": "Main", "stock": 5, "reserve": 1, "inTransit": 0},
                {"name": "Outlet", "stock": 2}
            ]
        }))
        .unwrap();

        let names: Vec<_> = row
            .stock_by_store
            .iter()
            .filter_map(|s| s.name.as_deref())
            .collect();
        assert_eq!(names, ["Main", "Outlet"]);
        assert_eq!(row.stock_by_store[0].reserve, 1.0);
    }
}
